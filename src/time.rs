//! Component C: the time locator (spec.md §4.C).

use crate::error::SamplerError;

/// Locate `t` on a strictly increasing time axis `tvals`, writing the
/// greatest index `ti` with `tvals[ti] <= t` back into `ti`.
///
/// If `periodic`, `t` is first reduced modulo the axis's period when it
/// falls outside `[tvals[0], tvals[size-1]]`; the reduced value is written
/// back into `*t`, mirroring the in/out parameter of the original.
///
/// This function does not enforce the `TIME_EXTRAPOLATION` policy; that
/// depends on a field's `allow_time_extrapolation` flag, which the driver
/// (component E) checks before calling here.
pub fn locate_time(t: &mut f64, tvals: &[f64], ti: &mut i32, periodic: bool) -> Result<(), SamplerError> {
    let size = tvals.len() as i32;
    if *ti < 0 {
        *ti = 0;
    }

    if periodic && size > 1 {
        let t0 = tvals[0];
        let t1 = tvals[(size - 1) as usize];
        let period = t1 - t0;
        if *t < t0 {
            *ti = size - 1;
            let periods = ((*t - t0) / period).floor();
            *t -= periods * period;
        } else if *t > t1 {
            *ti = 0;
            let periods = ((*t - t0) / period).floor();
            *t -= periods * period;
        }
    }

    while *ti < size - 1 && *t >= tvals[(*ti + 1) as usize] {
        *ti += 1;
    }
    while *ti > 0 && *t < tvals[*ti as usize] {
        *ti -= 1;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn locates_interior_sample() {
        let tvals = [0.0, 10.0];
        let mut t = 2.5;
        let mut ti = 0;
        locate_time(&mut t, &tvals, &mut ti, false).unwrap();
        assert_eq!(ti, 0);
        assert_float_eq!(t, 2.5, abs <= 1e-12);
    }

    #[test]
    fn clamps_negative_initial_index() {
        let tvals = [0.0, 1.0, 2.0];
        let mut t = 1.5;
        let mut ti = -5;
        locate_time(&mut t, &tvals, &mut ti, false).unwrap();
        assert_eq!(ti, 1);
    }

    #[test]
    fn periodic_reduction_matches_scenario_6() {
        // spec.md §8 end-to-end scenario 6: tvals=[0,1,2], period T=2, t=5.3 -> t=1.3, ti=1
        let tvals = [0.0, 1.0, 2.0];
        let mut t = 5.3;
        let mut ti = 0;
        locate_time(&mut t, &tvals, &mut ti, true).unwrap();
        assert_eq!(ti, 1);
        assert_float_eq!(t, 1.3, abs <= 1e-9);
    }

    #[test]
    fn periodic_negative_time_wraps_forward() {
        let tvals = [0.0, 1.0, 2.0];
        let mut t = -0.7;
        let mut ti = 0;
        locate_time(&mut t, &tvals, &mut ti, true).unwrap();
        assert_float_eq!(t, 1.3, abs <= 1e-9);
        assert_eq!(ti, 1);
    }

    #[test]
    fn non_periodic_leaves_time_unchanged() {
        let tvals = [0.0, 1.0, 2.0];
        let mut t = 5.3;
        let mut ti = 0;
        locate_time(&mut t, &tvals, &mut ti, false).unwrap();
        // Walk clamps ti at the last interior index; t itself is untouched.
        assert_eq!(ti, 1);
        assert_float_eq!(t, 5.3, abs <= 1e-12);
    }
}
