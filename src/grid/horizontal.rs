//! Component A: the horizontal locator (spec.md §4.A).

use crate::error::SamplerError;
use crate::grid::Grid;
use log::warn;

const SPHERICAL_ITER_CAP: u32 = 10_000;
const CURVILINEAR_ITER_CAP: u32 = 1_000_000;

/// Locate `(x, y)` on `grid`, updating `xi`/`yi` in place and returning
/// `(xsi, eta)`.
///
/// Dispatches to the rectilinear or curvilinear path depending on how
/// `grid`'s horizontal mesh was built.
pub fn locate(grid: &Grid, x: f32, y: f32, xi: &mut i32, yi: &mut i32) -> Result<(f64, f64), SamplerError> {
    if let Some((lon, lat)) = grid.rectilinear_axes() {
        locate_rectilinear(lon, lat, grid.xdim, grid.ydim, grid.sphere_mesh, grid.zonal_periodic, x, y, xi, yi)
    } else if let Some((lon, lat)) = grid.curvilinear_views() {
        locate_curvilinear(lon, lat, grid.xdim, grid.ydim, grid.sphere_mesh, grid.zonal_periodic, x, y, xi, yi)
    } else {
        Err(SamplerError::UnknownGrid)
    }
}

fn fix_1d_index(xi: &mut i32, xdim: i32, sphere_mesh: bool) {
    if *xi < 0 {
        *xi = if sphere_mesh { xdim - 2 } else { 0 };
    }
    if *xi > xdim - 2 {
        *xi = if sphere_mesh { 0 } else { xdim - 2 };
    }
}

fn fix_2d_indices(xi: &mut i32, yi: &mut i32, xdim: i32, ydim: i32, sphere_mesh: bool) {
    fix_1d_index(xi, xdim, sphere_mesh);
    if *yi < 0 {
        *yi = 0;
    }
    if *yi > ydim - 2 {
        *yi = ydim - 2;
        if sphere_mesh {
            *xi = xdim - *xi;
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn locate_rectilinear(
    lon: &[f32],
    lat: &[f32],
    xdim: i32,
    ydim: i32,
    sphere_mesh: bool,
    zonal_periodic: bool,
    x: f32,
    y: f32,
    xi: &mut i32,
    yi: &mut i32,
) -> Result<(f64, f64), SamplerError> {
    let xsi = if !sphere_mesh {
        if x < lon[0] || x > lon[(xdim - 1) as usize] {
            return Err(SamplerError::OutOfBounds { x, y, z: 0.0, t: 0.0 });
        }
        while *xi < xdim - 1 && x > lon[(*xi + 1) as usize] {
            *xi += 1;
        }
        while *xi > 0 && x < lon[*xi as usize] {
            *xi -= 1;
        }
        (x - lon[*xi as usize]) as f64 / (lon[(*xi + 1) as usize] - lon[*xi as usize]) as f64
    } else {
        // NOTE: when `zonal_periodic` is false and the longitude axis is
        // descending, this predicate uses `&&` where `||` would be correct.
        // Preserved verbatim (spec.md §9, flagged as possibly buggy).
        if !zonal_periodic {
            let x0 = lon[0];
            let x1 = lon[(xdim - 1) as usize];
            if x0 < x1 && (x < x0 || x > x1) {
                return Err(SamplerError::OutOfBounds { x, y, z: 0.0, t: 0.0 });
            } else if x0 >= x1 && (x < x0 && x > x1) {
                return Err(SamplerError::OutOfBounds { x, y, z: 0.0, t: 0.0 });
            }
        }

        let mut xvalsi = lon[*xi as usize];
        if xvalsi < x - 225. {
            xvalsi += 360.;
        }
        if xvalsi > x + 225. {
            xvalsi -= 360.;
        }
        let mut xvalsi1 = lon[(*xi + 1) as usize];
        if xvalsi1 < xvalsi - 180. {
            xvalsi1 += 360.;
        }
        if xvalsi1 > xvalsi + 180. {
            xvalsi1 -= 360.;
        }

        let mut it = 0;
        while xvalsi > x || xvalsi1 < x {
            if xvalsi1 < x {
                *xi += 1;
            } else if xvalsi > x {
                *xi -= 1;
            }
            fix_1d_index(xi, xdim, true);
            xvalsi = lon[*xi as usize];
            if xvalsi < x - 225. {
                xvalsi += 360.;
            }
            if xvalsi > x + 225. {
                xvalsi -= 360.;
            }
            xvalsi1 = lon[(*xi + 1) as usize];
            if xvalsi1 < xvalsi - 180. {
                xvalsi1 += 360.;
            }
            if xvalsi1 > xvalsi + 180. {
                xvalsi1 -= 360.;
            }
            it += 1;
            if it > SPHERICAL_ITER_CAP {
                warn!("spherical rectilinear search did not converge after {it} iterations");
                return Err(SamplerError::SearchNotConverged { iterations: it });
            }
        }
        (x - xvalsi) as f64 / (xvalsi1 - xvalsi) as f64
    };

    if y < lat[0] || y > lat[(ydim - 1) as usize] {
        return Err(SamplerError::OutOfBounds { x, y, z: 0.0, t: 0.0 });
    }
    while *yi < ydim - 1 && y > lat[(*yi + 1) as usize] {
        *yi += 1;
    }
    while *yi > 0 && y < lat[*yi as usize] {
        *yi -= 1;
    }
    let eta = (y - lat[*yi as usize]) as f64 / (lat[(*yi + 1) as usize] - lat[*yi as usize]) as f64;

    if !(0. ..=1.).contains(&xsi) || !(0. ..=1.).contains(&eta) {
        return Err(SamplerError::OutOfBounds { x, y, z: 0.0, t: 0.0 });
    }
    Ok((xsi, eta))
}

#[allow(clippy::too_many_arguments)]
fn locate_curvilinear(
    lon: crate::view::View2,
    lat: crate::view::View2,
    xdim: i32,
    ydim: i32,
    sphere_mesh: bool,
    zonal_periodic: bool,
    x: f32,
    y: f32,
    xi: &mut i32,
    yi: &mut i32,
) -> Result<(f64, f64), SamplerError> {
    if !zonal_periodic || !sphere_mesh {
        let x0 = lon.get(0, 0) as f64;
        let x1 = lon.get(0, (xdim - 1) as usize) as f64;
        let xf = x as f64;
        if x0 < x1 && (xf < x0 || xf > x1) {
            return Err(SamplerError::OutOfBounds { x, y, z: 0.0, t: 0.0 });
        } else if x0 >= x1 && (xf < x0 && xf > x1) {
            return Err(SamplerError::OutOfBounds { x, y, z: 0.0, t: 0.0 });
        }
    }

    let (x, y) = (x as f64, y as f64);
    let mut xsi = -1.0_f64;
    let mut eta = -1.0_f64;
    let mut it = 0;

    while !(0. ..=1.).contains(&xsi) || !(0. ..=1.).contains(&eta) {
        let (xu, yu) = (*xi as usize, *yi as usize);
        let mut xc = [
            lon.get(yu, xu) as f64,
            lon.get(yu, xu + 1) as f64,
            lon.get(yu + 1, xu + 1) as f64,
            lon.get(yu + 1, xu) as f64,
        ];
        if sphere_mesh {
            if xc[0] < x - 225. {
                xc[0] += 360.;
            }
            if xc[0] > x + 225. {
                xc[0] -= 360.;
            }
            for c in xc.iter_mut().skip(1) {
                if *c < xc[0] - 180. {
                    *c += 360.;
                }
                if *c > xc[0] + 180. {
                    *c -= 360.;
                }
            }
        }
        let yc = [
            lat.get(yu, xu) as f64,
            lat.get(yu, xu + 1) as f64,
            lat.get(yu + 1, xu + 1) as f64,
            lat.get(yu + 1, xu) as f64,
        ];

        let a0 = xc[0];
        let a1 = -xc[0] + xc[1];
        let a2 = -xc[0] + xc[3];
        let a3 = xc[0] - xc[1] + xc[2] - xc[3];
        let b0 = yc[0];
        let b1 = -yc[0] + yc[1];
        let b2 = -yc[0] + yc[3];
        let b3 = yc[0] - yc[1] + yc[2] - yc[3];

        let aa = a3 * b2 - a2 * b3;
        let bb = a3 * b0 - a0 * b3 + a1 * b2 - a2 * b1 + x * b3 - y * a3;
        let cc = a1 * b0 - a0 * b1 + x * b1 - y * a1;

        if aa.abs() < 1e-12 {
            eta = -cc / bb;
        } else {
            let det = (bb * bb - 4. * aa * cc).sqrt();
            if !det.is_nan() {
                eta = (-bb + det) / (2. * aa);
            }
            // else: deliberately retain eta from the previous iteration.
        }
        xsi = (x - a0 - a2 * eta) / (a1 + a3 * eta);

        if xsi < 0. && eta < 0. && *xi == 0 && *yi == 0 {
            return Err(SamplerError::OutOfBounds { x: x as f32, y: y as f32, z: 0.0, t: 0.0 });
        }
        if xsi > 1. && eta > 1. && *xi == xdim - 1 && *yi == ydim - 1 {
            return Err(SamplerError::OutOfBounds { x: x as f32, y: y as f32, z: 0.0, t: 0.0 });
        }
        if xsi < 0. {
            *xi -= 1;
        }
        if xsi > 1. {
            *xi += 1;
        }
        if eta < 0. {
            *yi -= 1;
        }
        if eta > 1. {
            *yi += 1;
        }
        fix_2d_indices(xi, yi, xdim, ydim, sphere_mesh);

        it += 1;
        if it > CURVILINEAR_ITER_CAP {
            warn!("curvilinear cell search did not converge after {it} iterations");
            return Err(SamplerError::SearchNotConverged { iterations: it });
        }
    }

    if xsi.is_nan() || eta.is_nan() {
        return Err(SamplerError::NotANumber("xsi or eta"));
    }
    Ok((xsi, eta))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use float_eq::assert_float_eq;

    fn grid3x3() -> Grid {
        Grid::rectilinear_z(
            3,
            3,
            1,
            1,
            vec![0., 1., 2.],
            vec![0., 1., 2.],
            vec![0.],
            vec![0.],
            false,
            false,
        )
        .unwrap()
    }

    #[test]
    fn rectilinear_interior_point() {
        let grid = grid3x3();
        let mut xi = 0;
        let mut yi = 0;
        let (xsi, eta) = locate(&grid, 0.5, 0.5, &mut xi, &mut yi).unwrap();
        assert_eq!((xi, yi), (0, 0));
        assert_float_eq!(xsi, 0.5, abs <= 1e-12);
        assert_float_eq!(eta, 0.5, abs <= 1e-12);
    }

    #[test]
    fn rectilinear_out_of_bounds() {
        let grid = grid3x3();
        let mut xi = 0;
        let mut yi = 0;
        assert!(locate(&grid, 5.0, 0.5, &mut xi, &mut yi).is_err());
    }

    #[test]
    fn spherical_wrap_180_equals_minus_180() {
        // spec.md §8 scenario 4: lon=[-179,-89,1,91,181(=-179 wrapped)]
        let grid = Grid::rectilinear_z(
            5,
            2,
            1,
            1,
            vec![-179., -89., 1., 91., 181.],
            vec![-10., 10.],
            vec![0.],
            vec![0.],
            true,
            true,
        )
        .unwrap();
        let mut xi1 = 0;
        let mut yi1 = 0;
        let r1 = locate(&grid, 180.0, 0.0, &mut xi1, &mut yi1).unwrap();
        let mut xi2 = 0;
        let mut yi2 = 0;
        let r2 = locate(&grid, -180.0, 0.0, &mut xi2, &mut yi2).unwrap();
        assert_eq!((xi1, yi1), (xi2, yi2));
        assert_float_eq!(r1.0, r2.0, abs <= 1e-9);
        assert_float_eq!(r1.1, r2.1, abs <= 1e-9);
    }

    #[test]
    fn curvilinear_degenerate_square_scenario_5() {
        // spec.md §8 scenario 5: corners (0,0),(2,0),(2,2),(0,2), query (1.2,0.8) -> xsi=0.6, eta=0.4
        let lon = vec![0., 2., 0., 2.];
        let lat = vec![0., 0., 2., 2.];
        let grid = Grid::curvilinear_z(2, 2, 1, 1, lon, lat, vec![0.], vec![0.], false, false).unwrap();
        let mut xi = 0;
        let mut yi = 0;
        let (xsi, eta) = locate(&grid, 1.2, 0.8, &mut xi, &mut yi).unwrap();
        assert_float_eq!(xsi, 0.6, abs <= 1e-6);
        assert_float_eq!(eta, 0.4, abs <= 1e-6);
    }
}
