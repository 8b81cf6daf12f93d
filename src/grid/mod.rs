//! Grid topology and the data it takes to describe one (spec.md §3).

pub mod horizontal;
pub mod vertical;

use crate::error::SamplerError;
use crate::view::{View2, View4};

/// The four supported grid topologies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCode {
    RectilinearZ = 0,
    RectilinearS = 1,
    CurvilinearZ = 2,
    CurvilinearS = 3,
}

#[derive(Debug, Clone)]
enum Horizontal {
    /// Separable, monotone axes: `lon[xdim]`, `lat[ydim]`.
    Rectilinear { lon: Vec<f32>, lat: Vec<f32> },
    /// General quadrilateral mesh: `lon[ydim][xdim]`, `lat[ydim][xdim]`.
    Curvilinear { lon: Vec<f32>, lat: Vec<f32> },
}

#[derive(Debug, Clone)]
enum Vertical {
    /// Depth column identical at every horizontal position: `depth[zdim]`.
    Z(Vec<f32>),
    /// Terrain-following table, position- (and optionally time-) dependent:
    /// `depth[zdim][ydim][xdim]`, or `depth[tdim][zdim][ydim][xdim]` if
    /// `z4d`.
    S(Vec<f32>),
}

/// A structured grid: horizontal mesh, vertical coordinate table, and time
/// axis, plus the flags that select how each is interpreted.
#[derive(Debug, Clone)]
pub struct Grid {
    pub(crate) xdim: i32,
    pub(crate) ydim: i32,
    pub(crate) zdim: i32,
    pub(crate) tdim: i32,
    pub(crate) sphere_mesh: bool,
    pub(crate) zonal_periodic: bool,
    pub(crate) z4d: bool,
    horizontal: Horizontal,
    vertical: Vertical,
    pub(crate) time: Vec<f64>,
}

impl Grid {
    /// The `GridCode` this grid reports as, derived from which horizontal
    /// and vertical representations it was built with.
    pub fn code(&self) -> GridCode {
        match (&self.horizontal, &self.vertical) {
            (Horizontal::Rectilinear { .. }, Vertical::Z(_)) => GridCode::RectilinearZ,
            (Horizontal::Rectilinear { .. }, Vertical::S(_)) => GridCode::RectilinearS,
            (Horizontal::Curvilinear { .. }, Vertical::Z(_)) => GridCode::CurvilinearZ,
            (Horizontal::Curvilinear { .. }, Vertical::S(_)) => GridCode::CurvilinearS,
        }
    }

    pub fn xdim(&self) -> i32 {
        self.xdim
    }
    pub fn ydim(&self) -> i32 {
        self.ydim
    }
    pub fn zdim(&self) -> i32 {
        self.zdim
    }
    pub fn tdim(&self) -> i32 {
        self.tdim
    }
    pub fn sphere_mesh(&self) -> bool {
        self.sphere_mesh
    }
    pub fn zonal_periodic(&self) -> bool {
        self.zonal_periodic
    }
    pub fn z4d(&self) -> bool {
        self.z4d
    }
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    pub(crate) fn rectilinear_axes(&self) -> Option<(&[f32], &[f32])> {
        match &self.horizontal {
            Horizontal::Rectilinear { lon, lat } => Some((lon, lat)),
            Horizontal::Curvilinear { .. } => None,
        }
    }

    pub(crate) fn curvilinear_views(&self) -> Option<(View2, View2)> {
        match &self.horizontal {
            Horizontal::Curvilinear { lon, lat } => Some((
                View2::new(lon, self.xdim as usize, self.ydim as usize),
                View2::new(lat, self.xdim as usize, self.ydim as usize),
            )),
            Horizontal::Rectilinear { .. } => None,
        }
    }

    pub(crate) fn z_column(&self) -> Option<&[f32]> {
        match &self.vertical {
            Vertical::Z(v) => Some(v),
            Vertical::S(_) => None,
        }
    }

    pub(crate) fn s_table(&self) -> Option<View4> {
        match &self.vertical {
            Vertical::S(v) => {
                let tdim = if self.z4d { self.tdim as usize } else { 1 };
                Some(View4::new(
                    v,
                    self.xdim as usize,
                    self.ydim as usize,
                    self.zdim as usize,
                    tdim,
                ))
            }
            Vertical::Z(_) => None,
        }
    }

    fn validate_common(xdim: i32, ydim: i32, zdim: i32, tdim: i32, time: &[f64]) -> Result<(), SamplerError> {
        if xdim < 2 || ydim < 2 || zdim < 1 || tdim < 1 {
            return Err(SamplerError::MalformedGrid(
                "xdim and ydim must be >= 2, zdim and tdim >= 1",
            ));
        }
        if time.len() != tdim as usize {
            return Err(SamplerError::MalformedGrid("time axis length != tdim"));
        }
        if !time.windows(2).all(|w| w[0] < w[1]) {
            return Err(SamplerError::MalformedGrid("time axis is not strictly increasing"));
        }
        Ok(())
    }

    /// Build a rectilinear grid with a position-independent depth column.
    pub fn rectilinear_z(
        xdim: i32,
        ydim: i32,
        zdim: i32,
        tdim: i32,
        lon: Vec<f32>,
        lat: Vec<f32>,
        depth: Vec<f32>,
        time: Vec<f64>,
        sphere_mesh: bool,
        zonal_periodic: bool,
    ) -> Result<Self, SamplerError> {
        Self::validate_common(xdim, ydim, zdim, tdim, &time)?;
        if lon.len() != xdim as usize || lat.len() != ydim as usize {
            return Err(SamplerError::MalformedGrid("lon/lat length mismatch with xdim/ydim"));
        }
        if depth.len() != zdim as usize {
            return Err(SamplerError::MalformedGrid("depth length != zdim"));
        }
        Ok(Grid {
            xdim,
            ydim,
            zdim,
            tdim,
            sphere_mesh,
            zonal_periodic,
            z4d: false,
            horizontal: Horizontal::Rectilinear { lon, lat },
            vertical: Vertical::Z(depth),
            time,
        })
    }

    /// Build a rectilinear grid with a terrain-following (S) depth table.
    pub fn rectilinear_s(
        xdim: i32,
        ydim: i32,
        zdim: i32,
        tdim: i32,
        lon: Vec<f32>,
        lat: Vec<f32>,
        depth_table: Vec<f32>,
        time: Vec<f64>,
        sphere_mesh: bool,
        zonal_periodic: bool,
        z4d: bool,
    ) -> Result<Self, SamplerError> {
        Self::validate_common(xdim, ydim, zdim, tdim, &time)?;
        if lon.len() != xdim as usize || lat.len() != ydim as usize {
            return Err(SamplerError::MalformedGrid("lon/lat length mismatch with xdim/ydim"));
        }
        if zdim as usize > vertical::MAX_ZDIM {
            return Err(SamplerError::MalformedGrid("zdim exceeds the S-grid column scratch capacity"));
        }
        let expected = if z4d {
            (xdim * ydim * zdim * tdim) as usize
        } else {
            (xdim * ydim * zdim) as usize
        };
        if depth_table.len() != expected {
            return Err(SamplerError::MalformedGrid("S-grid depth table length mismatch"));
        }
        Ok(Grid {
            xdim,
            ydim,
            zdim,
            tdim,
            sphere_mesh,
            zonal_periodic,
            z4d,
            horizontal: Horizontal::Rectilinear { lon, lat },
            vertical: Vertical::S(depth_table),
            time,
        })
    }

    /// Build a curvilinear grid with a position-independent depth column.
    pub fn curvilinear_z(
        xdim: i32,
        ydim: i32,
        zdim: i32,
        tdim: i32,
        lon: Vec<f32>,
        lat: Vec<f32>,
        depth: Vec<f32>,
        time: Vec<f64>,
        sphere_mesh: bool,
        zonal_periodic: bool,
    ) -> Result<Self, SamplerError> {
        Self::validate_common(xdim, ydim, zdim, tdim, &time)?;
        let cells = (xdim * ydim) as usize;
        if lon.len() != cells || lat.len() != cells {
            return Err(SamplerError::MalformedGrid("curvilinear lon/lat length != xdim*ydim"));
        }
        if depth.len() != zdim as usize {
            return Err(SamplerError::MalformedGrid("depth length != zdim"));
        }
        Ok(Grid {
            xdim,
            ydim,
            zdim,
            tdim,
            sphere_mesh,
            zonal_periodic,
            z4d: false,
            horizontal: Horizontal::Curvilinear { lon, lat },
            vertical: Vertical::Z(depth),
            time,
        })
    }

    /// Build a curvilinear grid with a terrain-following (S) depth table.
    pub fn curvilinear_s(
        xdim: i32,
        ydim: i32,
        zdim: i32,
        tdim: i32,
        lon: Vec<f32>,
        lat: Vec<f32>,
        depth_table: Vec<f32>,
        time: Vec<f64>,
        sphere_mesh: bool,
        zonal_periodic: bool,
        z4d: bool,
    ) -> Result<Self, SamplerError> {
        Self::validate_common(xdim, ydim, zdim, tdim, &time)?;
        let cells = (xdim * ydim) as usize;
        if lon.len() != cells || lat.len() != cells {
            return Err(SamplerError::MalformedGrid("curvilinear lon/lat length != xdim*ydim"));
        }
        if zdim as usize > vertical::MAX_ZDIM {
            return Err(SamplerError::MalformedGrid("zdim exceeds the S-grid column scratch capacity"));
        }
        let expected = if z4d {
            (xdim * ydim * zdim * tdim) as usize
        } else {
            (xdim * ydim * zdim) as usize
        };
        if depth_table.len() != expected {
            return Err(SamplerError::MalformedGrid("S-grid depth table length mismatch"));
        }
        Ok(Grid {
            xdim,
            ydim,
            zdim,
            tdim,
            sphere_mesh,
            zonal_periodic,
            z4d,
            horizontal: Horizontal::Curvilinear { lon, lat },
            vertical: Vertical::S(depth_table),
            time,
        })
    }
}

/// Locate a full `(x, y, z)` point on `grid`, combining the horizontal
/// locator (component A) and the vertical locator (component B).
///
/// `ti`/`time`/`t0`/`t1` are only used by the S-grid vertical synthesis; for
/// Z-grids they are ignored.
#[allow(clippy::too_many_arguments)]
pub(crate) fn locate_point(
    grid: &Grid,
    x: f32,
    y: f32,
    z: f32,
    xi: &mut i32,
    yi: &mut i32,
    zi: &mut i32,
    ti: i32,
    time: f64,
    t0: f64,
    t1: f64,
) -> Result<(f64, f64, f64), SamplerError> {
    let (xsi, eta) = horizontal::locate(grid, x, y, xi, yi)?;

    let zeta = if grid.zdim > 1 {
        match (grid.z_column(), grid.s_table()) {
            (Some(zvals), None) => vertical::locate_z(zvals, z, zi)?,
            (None, Some(_)) => vertical::locate_s(grid, z, *xi, *yi, zi, xsi, eta, ti, time, t0, t1)?,
            _ => return Err(SamplerError::UnknownGrid),
        }
    } else {
        0.0
    };

    if !(0. ..=1.).contains(&zeta) {
        return Err(SamplerError::OutOfBounds { x, y, z, t: time });
    }
    Ok((xsi, eta, zeta))
}
