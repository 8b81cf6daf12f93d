//! Component D: spatial interpolation kernels (spec.md §4.D).
//!
//! Layout convention: `data[yi][xi]` (2D) or `data[zi][yi][xi]` (3D), x
//! fastest-varying, matching the NEMO convention the rest of the crate uses.

use crate::view::{View2, View3};

/// Bilinear interpolation on a 2D layer.
pub fn bilinear(data: View2, xi: usize, yi: usize, xsi: f64, eta: f64) -> f32 {
    let v = (1. - xsi) * (1. - eta) * data.get(yi, xi) as f64
        + xsi * (1. - eta) * data.get(yi, xi + 1) as f64
        + xsi * eta * data.get(yi + 1, xi + 1) as f64
        + (1. - xsi) * eta * data.get(yi + 1, xi) as f64;
    v as f32
}

/// Trilinear interpolation: bilinear on the `zi` and `zi+1` layers, blended
/// linearly in `zeta`.
pub fn trilinear(data: View3, xi: usize, yi: usize, zi: usize, xsi: f64, eta: f64, zeta: f64) -> f32 {
    let f0 = bilinear(data.layer(zi), xi, yi, xsi, eta) as f64;
    let f1 = bilinear(data.layer(zi + 1), xi, yi, xsi, eta) as f64;
    ((1. - zeta) * f0 + zeta * f1) as f32
}

/// Nearest-neighbor on a 2D layer. `ξ = 0.5` (and `η = 0.5`) round up to the
/// right/top cell; strictly less than rounds down (spec.md §3 invariant).
pub fn nearest_2d(data: View2, xi: usize, yi: usize, xsi: f64, eta: f64) -> f32 {
    let ii = if xsi < 0.5 { xi } else { xi + 1 };
    let jj = if eta < 0.5 { yi } else { yi + 1 };
    data.get(jj, ii)
}

/// Nearest-neighbor on a 3D volume, adding `ζ` analogously to `nearest_2d`.
pub fn nearest_3d(data: View3, xi: usize, yi: usize, zi: usize, xsi: f64, eta: f64, zeta: f64) -> f32 {
    let ii = if xsi < 0.5 { xi } else { xi + 1 };
    let jj = if eta < 0.5 { yi } else { yi + 1 };
    let kk = if zeta < 0.5 { zi } else { zi + 1 };
    data.get(kk, jj, ii)
}
