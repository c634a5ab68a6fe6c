//! Closed-form special functions shared by the interpolation stack and the
//! correction stages.

use crate::constants::NU_LIMIT;

/// Knife-edge diffraction loss J(nu) in dB, equation (12a).
///
/// Zero at or below `nu = -0.7806`, the validity limit of the approximation;
/// the correction stages rely on that silent zero.
pub fn j(nu: f64) -> f64 {
    if nu > NU_LIMIT {
        6.9 + 20.0 * (((nu - 0.1).powi(2) + 1.0).sqrt() + nu - 0.1).log10()
    } else {
        0.0
    }
}

/// Inverse complementary cumulative normal distribution, the rational
/// approximation of equations (39a)-(39d). Valid for x in (0, 1).
pub fn qi(x: f64) -> f64 {
    if x <= 0.5 {
        t(x) - c(x)
    } else {
        -(t(1.0 - x) - c(1.0 - x))
    }
}

fn t(y: f64) -> f64 {
    (-2.0 * y.ln()).sqrt()
}

fn c(z: f64) -> f64 {
    const C0: f64 = 2.515517;
    const C1: f64 = 0.802853;
    const C2: f64 = 0.010328;
    const D1: f64 = 1.432788;
    const D2: f64 = 0.189269;
    const D3: f64 = 0.001308;
    let tz = t(z);
    ((C2 * tz + C1) * tz + C0) / (((D3 * tz + D2) * tz + D1) * tz + 1.0)
}

/// Path length (km) at which the path just achieves a clearance of 0.6 of
/// the first Fresnel zone over smooth Earth, equations (41)-(41b).
///
/// `f` in MHz, `h1` and `h2` in m. A negative `h1` is treated as zero and
/// the result is floored at 0.001 km.
pub fn d06(f: f64, h1: f64, h2: f64) -> f64 {
    let h1 = h1.max(0.0);
    let df = 0.0000389 * f * h1 * h2;
    let dh = 4.1 * (h1.sqrt() + h2.sqrt());
    let d = df * dh / (df + dh);
    d.max(0.001)
}

/// Frequency-dependent angle (degrees) for the negative-height diffraction
/// correction, equations (12b)-(12c), at the nominal frequency `freq_idx`
/// indexes in [`crate::constants::FREQUENCIES`].
pub fn v_angle(freq_idx: usize, h1: f64) -> f64 {
    // Kv for 100, 600 and 2000 MHz.
    const KV: [f64; 3] = [1.35, 3.31, 6.0];
    KV[freq_idx] * (-h1 / 9000.0).atan().to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn j_at_zero_is_the_6_03_constant() {
        // The 6.03 dB constant in the low-antenna formulas is J(0).
        assert_abs_diff_eq!(j(0.0), 6.03, epsilon = 5e-3);
    }

    #[test]
    fn j_below_validity_limit_is_zero() {
        assert_eq!(j(-0.7806), 0.0);
        assert_eq!(j(-5.0), 0.0);
    }

    #[test]
    fn qi_matches_normal_quantiles() {
        // Standard normal: Q(0.5) = 0, Q(0.1) ~ 1.2816, Q(0.9) ~ -1.2816.
        assert_abs_diff_eq!(qi(0.5), 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(qi(0.1), 1.2816, epsilon = 2e-3);
        assert_abs_diff_eq!(qi(0.9), -1.2816, epsilon = 2e-3);
        assert_abs_diff_eq!(qi(0.01), 2.3263, epsilon = 2e-3);
    }

    #[test]
    fn qi_is_antisymmetric_about_the_median() {
        for q in [0.02, 0.1, 0.25, 0.4] {
            assert_abs_diff_eq!(qi(q), -qi(1.0 - q), epsilon = 1e-12);
        }
    }

    #[test]
    fn d06_floors_small_results() {
        assert_eq!(d06(100.0, 0.0, 0.0), 0.001);
        // Negative h1 is clamped to zero, not an error.
        assert_eq!(d06(100.0, -50.0, 0.0), 0.001);
    }

    #[test]
    fn d06_grows_with_height_and_frequency() {
        let d_low = d06(100.0, 10.0, 10.0);
        let d_high = d06(100.0, 150.0, 10.0);
        assert!(d_high > d_low);
        assert!(d06(600.0, 10.0, 10.0) > d_low);
    }
}
