//! Component E: the temporal interpolation driver (spec.md §4.E).

use crate::cursor::Cursor;
use crate::error::SamplerError;
use crate::grid::{locate_point, Grid};
use crate::kernel::{bilinear, nearest_2d, nearest_3d, trilinear};
use crate::time::locate_time;
use crate::view::View4;
use log::{debug, trace};

/// Spatial interpolation method (spec.md §6).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpMethod {
    Linear,
    Nearest,
}

/// A scalar field: a grid plus the `tdim*zdim*ydim*xdim` data cube defined
/// on it, and the flags that govern time handling.
///
/// Field data is borrowed for the lifetime of the field, never owned or
/// copied. Ingestion and ownership of the underlying buffer are the
/// caller's responsibility (spec.md §1).
#[derive(Debug, Clone, Copy)]
pub struct Field<'a> {
    grid: &'a Grid,
    data: &'a [f32],
    pub allow_time_extrapolation: bool,
    pub time_periodic: bool,
}

impl<'a> Field<'a> {
    /// Bind `grid` to a `data` cube of `tdim*zdim*ydim*xdim` float32 values.
    /// A 2D field uses `zdim == 1`.
    pub fn new(grid: &'a Grid, data: &'a [f32], allow_time_extrapolation: bool, time_periodic: bool) -> Result<Self, SamplerError> {
        let expected = (grid.xdim() as usize) * (grid.ydim() as usize) * (grid.zdim() as usize) * (grid.tdim() as usize);
        if data.len() != expected {
            return Err(SamplerError::MalformedField("data cube length != tdim*zdim*ydim*xdim"));
        }
        Ok(Field { grid, data, allow_time_extrapolation, time_periodic })
    }

    pub fn grid(&self) -> &Grid {
        self.grid
    }

    fn view(&self) -> View4 {
        View4::new(
            self.data,
            self.grid.xdim() as usize,
            self.grid.ydim() as usize,
            self.grid.zdim() as usize,
            self.grid.tdim() as usize,
        )
    }

    fn evaluate_slice(&self, ti: usize, xi: i32, yi: i32, zi: i32, xsi: f64, eta: f64, zeta: f64, method: InterpMethod) -> f32 {
        let (xi, yi, zi) = (xi as usize, yi as usize, zi as usize);
        let volume = self.view().volume(ti);
        if self.grid.zdim() == 1 {
            let layer = volume.layer(0);
            match method {
                InterpMethod::Linear => bilinear(layer, xi, yi, xsi, eta),
                InterpMethod::Nearest => nearest_2d(layer, xi, yi, xsi, eta),
            }
        } else {
            match method {
                InterpMethod::Linear => trilinear(volume, xi, yi, zi, xsi, eta, zeta),
                InterpMethod::Nearest => nearest_3d(volume, xi, yi, zi, xsi, eta, zeta),
            }
        }
    }
}

/// Query `field` at `(x, y, z, t)`, threading `cursor` as a warm start and
/// updating it in place.
///
/// Orchestrates the time locator (C), the horizontal/vertical locators
/// (A+B), and the spatial kernels (D) into a single interpolated value.
pub fn temporal_interpolation(
    field: &Field,
    x: f32,
    y: f32,
    z: f32,
    t: f64,
    cursor: &mut Cursor,
    method: InterpMethod,
) -> Result<f32, SamplerError> {
    let grid = field.grid();
    let tvals = grid.time();

    if !field.time_periodic
        && !field.allow_time_extrapolation
        && (t < tvals[0] || t > tvals[tvals.len() - 1])
    {
        return Err(SamplerError::TimeExtrapolation { t, t0: tvals[0], t1: tvals[tvals.len() - 1] });
    }

    let mut reduced_t = t;
    locate_time(&mut reduced_t, tvals, &mut cursor.ti, field.time_periodic)?;
    if reduced_t != t {
        trace!("time {t} reduced to {reduced_t} by periodic wrap, ti={}", cursor.ti);
    }
    let t = reduced_t;
    let tdim = grid.tdim();

    if cursor.ti < tdim - 1 && t > tvals[cursor.ti as usize] {
        let t0 = tvals[cursor.ti as usize];
        let t1 = tvals[(cursor.ti + 1) as usize];
        debug!("two-sample branch: ti={} t0={t0} t1={t1}", cursor.ti);

        let (xsi, eta, zeta) = locate_point(grid, x, y, z, &mut cursor.xi, &mut cursor.yi, &mut cursor.zi, cursor.ti, t, t0, t1)?;

        let f0 = field.evaluate_slice(cursor.ti as usize, cursor.xi, cursor.yi, cursor.zi, xsi, eta, zeta, method);
        let f1 = field.evaluate_slice((cursor.ti + 1) as usize, cursor.xi, cursor.yi, cursor.zi, xsi, eta, zeta, method);
        let weight = (t - t0) / (t1 - t0);
        Ok(f0 + (f1 - f0) * weight as f32)
    } else {
        let t0 = tvals[cursor.ti as usize];
        trace!("single-sample branch: ti={}", cursor.ti);

        let (xsi, eta, zeta) = locate_point(grid, x, y, z, &mut cursor.xi, &mut cursor.yi, &mut cursor.zi, cursor.ti, t0, t0, t0 + 1.0)?;

        Ok(field.evaluate_slice(cursor.ti as usize, cursor.xi, cursor.yi, cursor.zi, xsi, eta, zeta, method))
    }
}
