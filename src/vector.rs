//! Component F: vector field adapters (spec.md §4.F).

use crate::cursor::Cursor;
use crate::error::SamplerError;
use crate::field::{temporal_interpolation, Field, InterpMethod};

/// Query a `(U, V)` vector field pair at `(x, y, z, t)`.
///
/// `U` and `V` are queried independently against the same `cursor`; the
/// first error propagates, leaving the second component unqueried.
pub fn temporal_interpolation_uv(
    u: &Field,
    v: &Field,
    x: f32,
    y: f32,
    z: f32,
    t: f64,
    cursor: &mut Cursor,
    method: InterpMethod,
) -> Result<(f32, f32), SamplerError> {
    let u_val = temporal_interpolation(u, x, y, z, t, cursor, method)?;
    let v_val = temporal_interpolation(v, x, y, z, t, cursor, method)?;
    Ok((u_val, v_val))
}

/// Query a `(U, V)` pair and correct it for local mesh rotation using four
/// per-cell trigonometric fields.
///
/// The correction is *not* the naive 2D rotation one might expect:
/// `cosU`/`sinV` feed the `U` output and `sinU`/`cosV` feed `V`. This
/// asymmetry is preserved bit-for-bit from the original source (spec.md §9,
/// Open Question): it accounts for U and V living on different faces of a
/// staggered cell, not on a shared rotation axis.
#[allow(clippy::too_many_arguments)]
pub fn temporal_interpolation_uv_rotation(
    u: &Field,
    v: &Field,
    cos_u: &Field,
    sin_u: &Field,
    cos_v: &Field,
    sin_v: &Field,
    x: f32,
    y: f32,
    z: f32,
    t: f64,
    cursor: &mut Cursor,
    method: InterpMethod,
) -> Result<(f32, f32), SamplerError> {
    let u_val = temporal_interpolation(u, x, y, z, t, cursor, method)?;
    let v_val = temporal_interpolation(v, x, y, z, t, cursor, method)?;
    let cos_u_val = temporal_interpolation(cos_u, x, y, z, t, cursor, method)?;
    let sin_u_val = temporal_interpolation(sin_u, x, y, z, t, cursor, method)?;
    let cos_v_val = temporal_interpolation(cos_v, x, y, z, t, cursor, method)?;
    let sin_v_val = temporal_interpolation(sin_v, x, y, z, t, cursor, method)?;

    let rotated_u = u_val * cos_u_val - v_val * sin_v_val;
    let rotated_v = u_val * sin_u_val + v_val * cos_v_val;
    Ok((rotated_u, rotated_v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use float_eq::assert_float_eq;

    fn flat_grid() -> Grid {
        Grid::rectilinear_z(3, 3, 1, 1, vec![0., 1., 2.], vec![0., 1., 2.], vec![0.], vec![0.], false, false).unwrap()
    }

    fn constant_data(value: f32) -> Vec<f32> {
        vec![value; 9]
    }

    #[test]
    fn uv_pair_queries_both_components_independently() {
        let grid = flat_grid();
        let u_data = constant_data(3.0);
        let v_data = constant_data(-2.0);
        let u = Field::new(&grid, &u_data, false, false).unwrap();
        let v = Field::new(&grid, &v_data, false, false).unwrap();
        let mut cursor = Cursor::origin();
        let (uu, vv) = temporal_interpolation_uv(&u, &v, 0.5, 0.5, 0.0, 0.0, &mut cursor, InterpMethod::Linear).unwrap();
        assert_float_eq!(uu as f64, 3.0, abs <= 1e-6);
        assert_float_eq!(vv as f64, -2.0, abs <= 1e-6);
    }

    #[test]
    fn uv_pair_propagates_first_error() {
        let grid = flat_grid();
        let u_data = constant_data(3.0);
        let v_data = constant_data(-2.0);
        let u = Field::new(&grid, &u_data, false, false).unwrap();
        let v = Field::new(&grid, &v_data, false, false).unwrap();
        let mut cursor = Cursor::origin();
        let err = temporal_interpolation_uv(&u, &v, 99.0, 99.0, 0.0, 0.0, &mut cursor, InterpMethod::Linear).unwrap_err();
        assert_eq!(err.code(), crate::error::ErrorCode::OutOfBounds);
    }

    #[test]
    fn rotation_applies_asymmetric_formula() {
        // u=1, v=0, cosU=0, sinU=1, cosV=1, sinV=0 -> rotated = (0, 1)
        let grid = flat_grid();
        let u_data = constant_data(1.0);
        let v_data = constant_data(0.0);
        let cos_u_data = constant_data(0.0);
        let sin_u_data = constant_data(1.0);
        let cos_v_data = constant_data(1.0);
        let sin_v_data = constant_data(0.0);
        let u = Field::new(&grid, &u_data, false, false).unwrap();
        let v = Field::new(&grid, &v_data, false, false).unwrap();
        let cos_u = Field::new(&grid, &cos_u_data, false, false).unwrap();
        let sin_u = Field::new(&grid, &sin_u_data, false, false).unwrap();
        let cos_v = Field::new(&grid, &cos_v_data, false, false).unwrap();
        let sin_v = Field::new(&grid, &sin_v_data, false, false).unwrap();
        let mut cursor = Cursor::origin();
        let (uu, vv) = temporal_interpolation_uv_rotation(
            &u, &v, &cos_u, &sin_u, &cos_v, &sin_v, 0.5, 0.5, 0.0, 0.0, &mut cursor, InterpMethod::Linear,
        )
        .unwrap();
        assert_float_eq!(uu as f64, 0.0, abs <= 1e-6);
        assert_float_eq!(vv as f64, 1.0, abs <= 1e-6);
    }

    #[test]
    fn rotation_is_not_symmetric_in_u_and_v_trig_fields() {
        // swap which trig field feeds which output to demonstrate the
        // asymmetry would change the result if it were the naive rotation.
        let grid = flat_grid();
        let u_data = constant_data(1.0);
        let v_data = constant_data(1.0);
        let cos_u_data = constant_data(0.5);
        let sin_u_data = constant_data(0.2);
        let cos_v_data = constant_data(0.3);
        let sin_v_data = constant_data(0.8);
        let u = Field::new(&grid, &u_data, false, false).unwrap();
        let v = Field::new(&grid, &v_data, false, false).unwrap();
        let cos_u = Field::new(&grid, &cos_u_data, false, false).unwrap();
        let sin_u = Field::new(&grid, &sin_u_data, false, false).unwrap();
        let cos_v = Field::new(&grid, &cos_v_data, false, false).unwrap();
        let sin_v = Field::new(&grid, &sin_v_data, false, false).unwrap();
        let mut cursor = Cursor::origin();
        let (uu, vv) = temporal_interpolation_uv_rotation(
            &u, &v, &cos_u, &sin_u, &cos_v, &sin_v, 0.5, 0.5, 0.0, 0.0, &mut cursor, InterpMethod::Linear,
        )
        .unwrap();
        // rotated_u = 1*0.5 - 1*0.8 = -0.3; rotated_v = 1*0.2 + 1*0.3 = 0.5
        assert_float_eq!(uu as f64, -0.3, abs <= 1e-6);
        assert_float_eq!(vv as f64, 0.5, abs <= 1e-6);
    }
}
