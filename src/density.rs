//! density.rs — the two-regime Chabrier IMF shape.
//!
//! * `m <= 1`: log-normal body centred on `M_C` with width `SIGMA`.
//! * `m > 1`:  power law `m^-2.3`.
//!
//! Neither branch is rescaled to meet the other at `m = 1`, and the whole
//! thing is never normalised. Values are relative weights for rejection
//! sampling only.

use std::f64::consts::PI;

/// Characteristic mass of the log-normal body (M☉).
pub const M_C: f64 = 0.08;
/// Width of the log-normal body in natural-log units.
pub const SIGMA: f64 = 0.69;
/// Power-law slope above 1 M☉.
pub const POWER_LAW_SLOPE: f64 = 2.3;
/// Mass at which the density switches branch.
pub const BRANCH_MASS: f64 = 1.0;

/// Unnormalised density at mass `m` (M☉).
///
/// `m` must be strictly positive. For `m <= 0` the log-normal branch is
/// undefined and the result is NaN or infinite; this never panics.
#[inline]
pub fn density(m: f64) -> f64 {
    if m <= BRANCH_MASS {
        let z = (m.ln() - M_C.ln()) / SIGMA;
        1.0 / (m * (2.0 * PI * SIGMA * SIGMA).sqrt()) * (-0.5 * z * z).exp()
    } else {
        m.powf(-POWER_LAW_SLOPE)
    }
}

/// Height of the constant rejection envelope: `density(1)`.
///
/// This is not the supremum of `density`; the log-normal body is far taller
/// for small masses.
#[inline]
pub fn envelope() -> f64 {
    density(BRANCH_MASS)
}

/// Gap at `m = 1` between the power-law limit (`1^-2.3 = 1`) and the
/// log-normal value actually returned there.
pub fn branch_mismatch() -> f64 {
    BRANCH_MASS.powf(-POWER_LAW_SLOPE) - envelope()
}

/// Probability that a proposal at `m` survives a threshold drawn from
/// `[0, envelope())`: `density(m) / envelope()`, capped at 1.
pub fn acceptance_probability(m: f64) -> f64 {
    (density(m) / envelope()).min(1.0)
}

/// Mass above which the power-law branch drops under the `density(1)`
/// envelope. Heavier proposals are still accepted, with probability
/// `(m / limit)^-2.3` instead of always.
pub fn certain_acceptance_limit() -> f64 {
    envelope().powf(-1.0 / POWER_LAW_SLOPE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol * b.abs().max(1.0)
    }

    #[test]
    fn log_normal_branch_values() {
        assert!(close(density(0.1), 5.487_197_265_505_684, 1e-12));
        assert!(close(density(M_C), 7.227_215_224_663_636, 1e-12));
    }

    #[test]
    fn power_law_branch_values() {
        assert!(close(density(2.0), 2f64.powf(-2.3), 1e-15));
        assert!(close(density(100.0), 100f64.powf(-2.3), 1e-15));
    }

    #[test]
    fn branches_do_not_meet_at_one() {
        let at_one = density(1.0);
        assert!(close(at_one, 7.120_102_796_364_481e-4, 1e-9));
        assert!(close(branch_mismatch(), 0.999_287_989_720_363_6, 1e-9));

        // just above the boundary the power law takes over at ~1
        let above = density(1.0 + 1e-12);
        assert!(above > 0.99);
        assert!(above - at_one > 0.99);
    }

    #[test]
    fn envelope_is_not_a_supremum() {
        assert!(density(0.1) > envelope());
        assert!(density(0.5) > envelope());
    }

    #[test]
    fn limit_matches_power_law_crossing() {
        let c = certain_acceptance_limit();
        assert!(close(c, 23.360_612_910_015_856, 1e-9));
        assert!(close(density(c), envelope(), 1e-9));
        assert!(density(c * 1.01) < envelope());
    }

    #[test]
    fn heavy_masses_keep_nonzero_acceptance() {
        assert_eq!(acceptance_probability(0.1), 1.0);
        assert_eq!(acceptance_probability(10.0), 1.0);
        assert!(close(acceptance_probability(30.0), 0.562_515_961_752_050_1, 1e-9));
        let far = acceptance_probability(1e4);
        assert!(far > 0.0 && far < 1e-6);
        assert!(acceptance_probability(100.0) > 0.0);
    }

    #[test]
    fn positive_on_support() {
        for &m in &[1e-3, 0.01, 0.1, 0.5, 1.0, 1.5, 10.0, 100.0, 1e4] {
            let d = density(m);
            assert!(d.is_finite() && d > 0.0, "density({}) = {}", m, d);
        }
    }

    #[test]
    fn out_of_contract_does_not_panic() {
        assert!(density(0.0).is_nan());
        assert!(density(-1.0).is_nan());
    }
}
