//! Component B: the vertical locator (spec.md §4.B).

use crate::error::SamplerError;
use crate::grid::Grid;
use crate::kernel::bilinear;

/// Upper bound on `zdim` for S-grids, sized generously for any real ocean or
/// atmosphere vertical discretization. Bounds the stack-resident column
/// buffer `locate_s` synthesizes per query, per spec.md §5 (no allocator
/// activity on the hot path beyond one stack-resident column of length
/// `zdim`). Grid construction rejects `zdim` past this cap.
pub const MAX_ZDIM: usize = 512;

/// Locate `z` on a monotone column `zvals`, updating `zi` in place and
/// returning `zeta`.
pub fn locate_z(zvals: &[f32], z: f32, zi: &mut i32) -> Result<f64, SamplerError> {
    let zdim = zvals.len() as i32;
    if z < zvals[0] || z > zvals[(zdim - 1) as usize] {
        return Err(SamplerError::OutOfBounds { x: 0.0, y: 0.0, z, t: 0.0 });
    }
    while *zi < zdim - 1 && z > zvals[(*zi + 1) as usize] {
        *zi += 1;
    }
    while *zi > 0 && z < zvals[*zi as usize] {
        *zi -= 1;
    }
    if *zi == zdim - 1 {
        *zi -= 1;
    }
    Ok((z - zvals[*zi as usize]) as f64 / (zvals[(*zi + 1) as usize] - zvals[*zi as usize]) as f64)
}

/// Locate `z` on a terrain-following grid: synthesize the 1D column at
/// `(xi, yi)` (and, for 4D tables, at time `time` between `t0` and `t1`) by
/// bilinear interpolation of the depth table, then run the monotone Z-grid
/// walk on it.
///
/// The column must be monotone in `k`; this is assumed, not checked (spec.md
/// §4.B).
#[allow(clippy::too_many_arguments)]
pub fn locate_s(
    grid: &Grid,
    z: f32,
    xi: i32,
    yi: i32,
    zi: &mut i32,
    xsi: f64,
    eta: f64,
    ti: i32,
    time: f64,
    t0: f64,
    t1: f64,
) -> Result<f64, SamplerError> {
    let table = grid.s_table().ok_or(SamplerError::UnknownGrid)?;
    let zdim = grid.zdim as usize;
    let (xi, yi) = (xi as usize, yi as usize);

    // Stack-resident scratch; grid construction already rejected zdim > MAX_ZDIM.
    let mut column = [0.0_f32; MAX_ZDIM];
    let column = &mut column[..zdim];
    if grid.z4d {
        let tdim = grid.tdim;
        let ti1 = if ti < tdim - 1 { ti + 1 } else { ti };
        let vol0 = table.volume(ti as usize);
        let vol1 = table.volume(ti1 as usize);
        let weight = ((time - t0) / (t1 - t0)) as f32;
        for k in 0..zdim {
            let zt0 = bilinear(vol0.layer(k), xi, yi, xsi, eta);
            let zt1 = bilinear(vol1.layer(k), xi, yi, xsi, eta);
            column[k] = zt0 + (zt1 - zt0) * weight;
        }
    } else {
        let vol = table.volume(0);
        for k in 0..zdim {
            column[k] = bilinear(vol.layer(k), xi, yi, xsi, eta);
        }
    }

    locate_z(column, z, zi)
}
