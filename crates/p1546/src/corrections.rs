//! Field-strength corrections applied after the curve interpolation: terrain
//! clearance angle, tropospheric scatter, antenna-height and clutter terms,
//! slope-path and short-distance handling, location variability, the maximum
//! field-strength ceiling and the conversion to basic transmission loss
//! (Annex 5, §§ 2 and 9-16).

use crate::constants::NU_LIMIT;
use crate::error::{limit, ModelError, Result};
use crate::numeric_util::{d06, j, qi};
use crate::ClutterEnvironment;

/// Maximum field strength (dB(uV/m)) that cannot be exceeded, Annex 5, § 2.
///
/// For a mixed path the free-space value of equation (2) and the sea-path
/// enhancement of equation (3) are combined in proportion to the sea
/// distance, equation (42). `t` must lie in [1, 50] %.
pub fn max_field_strength(t: f64, d_land: f64, d_sea: f64) -> Result<f64> {
    limit("time percentage t", t, 1.0, 50.0)?;

    let d_total = d_land + d_sea;
    let e_fs = 106.9 - 20.0 * d_total.log10(); // equation (2)
    let e_se = 2.38 * (1.0 - (-d_total / 8.94).exp()) * (50.0 / t).log10(); // equation (3)
    Ok(e_fs + d_sea * e_se / d_total)
}

/// Correction (dB) for the terrain clearance angle `tca` (degrees) at a
/// receiving/mobile antenna adjacent to land, Annex 5, § 11.
///
/// `tca` is clamped to [0.55, 40] degrees before use, equation (31).
pub fn terrain_clearance_correction(f: f64, tca: f64) -> f64 {
    let tca = tca.clamp(0.55, 40.0);

    let nu_p = 0.036 * f.sqrt();
    let nu = 0.065 * tca * f.sqrt(); // equation (32c)
    j(nu_p) - j(nu) // equation (32a)
}

/// Field strength (dB(uV/m)) due to tropospheric scattering, Annex 5, § 13,
/// equations (35)-(36). The predicted field is not allowed to fall below
/// this value.
///
/// `eff1` and `eff2` are the terrain clearance angles (degrees) at the two
/// terminals; the path scatter angle is floored at zero.
pub fn troposcatter_field_strength(d: f64, f: f64, t: f64, eff1: f64, eff2: f64) -> f64 {
    let theta_s = (180.0 * d / std::f64::consts::PI / 4.0 * 3.0 / 6370.0 + eff1 + eff2).max(0.0);
    let l_f = 5.0 * f.log10() - 2.5 * (f.log10() - 3.3).powi(2); // equation (36a)
    let g_t = 10.1 * (-(0.02 * t).log10()).powf(0.7); // equation (36b)
    24.4 - 20.0 * d.log10() - 10.0 * theta_s - l_f + 0.15 * 325.0 + g_t // equation (36)
}

/// Correction (dB) for the receiving/mobile antenna height, Annex 5, § 9.
///
/// `r2` is the representative clutter height around the receiver (m) and
/// `area` the clutter environment, deciding between the land and sea
/// variants of the method. Returns the correction together with the
/// modified representative clutter height `rp` actually used.
///
/// Fails if `h2` is below 1 m adjacent to land or below 3 m adjacent to sea.
pub fn receiver_height_correction(
    h1: f64,
    d: f64,
    r2: f64,
    h2: f64,
    f: f64,
    area: ClutterEnvironment,
) -> Result<(f64, f64)> {
    let k_h2 = 3.2 + 6.2 * f.log10(); // equation (27a)

    if area.adjacent_to_land() {
        if h2 < 1.0 {
            return Err(ModelError::ReceiverTooLow {
                value: h2,
                min: 1.0,
                side: "land",
            });
        }

        if !area.is_urban() {
            // Rural or open land: equation (28b) with Rp = 10 m for all h2.
            return Ok((k_h2 * (h2 / 10.0).log10(), 10.0));
        }

        // Modified representative clutter height accounting for the
        // elevation angle of the arriving ray, equation (27d), floored at
        // 1 m.
        let rp = ((1000.0 * d * r2 - 15.0 * h1) / (1000.0 * d - 15.0)).max(1.0);

        let mut correction = if h2 < rp {
            // Receiver below the clutter height: knife-edge diffraction over
            // the clutter, equation (28a).
            let h_dif = rp - h2;
            let k_nu = 0.0108 * f.sqrt();
            let theta_clut = (h_dif / 27.0).atan().to_degrees();
            6.03 - j(k_nu * (h_dif * theta_clut).sqrt())
        } else {
            k_h2 * (h2 / rp).log10() // equation (28b)
        };

        if rp < 10.0 {
            correction -= k_h2 * (10.0 / rp).log10();
        }
        return Ok((correction, rp));
    }

    // Receiver adjacent to sea.
    if h2 < 3.0 {
        return Err(ModelError::ReceiverTooLow {
            value: h2,
            min: 3.0,
            side: "sea",
        });
    }

    let c10 = k_h2 * (h2 / 10.0).log10();
    if h2 >= 10.0 {
        return Ok((c10, 10.0));
    }

    // h2 below 10 m over sea: interpolate on the 0.6 Fresnel clearance
    // distances for h2 and for 10 m, equations (29a)-(29c).
    let d10 = d06(f, h1, 10.0);
    let dh2 = d06(f, h1, h2);
    let correction = if d >= d10 {
        c10
    } else if d <= dh2 {
        0.0
    } else {
        c10 * (d / dh2).log10() / (d10 / dh2).log10()
    };
    Ok((correction, 10.0))
}

/// Correction (dB) for clutter around the transmitting/base terminal,
/// Annex 5, § 10, equations (30a)-(30f).
///
/// `ha` is the antenna height above ground (m) and `r1` the representative
/// clutter height around the transmitter (m). The correction is zero or
/// negative; it vanishes once the antenna clears the clutter by a
/// frequency-dependent margin.
pub fn transmitter_clutter_correction(ha: f64, r1: f64, f: f64) -> f64 {
    let k_nu = 0.0108 * f.sqrt(); // equation (30f)
    let h_dif = ha - r1; // equation (30d)
    let theta_clut = (h_dif / 27.0).atan().to_degrees(); // equation (30e)

    // h_dif and theta_clut share a sign, so the product under the root is
    // never negative.
    let nu = if r1 >= ha {
        k_nu * (h_dif * theta_clut).sqrt()
    } else {
        -k_nu * (h_dif * theta_clut).sqrt()
    };

    if nu > NU_LIMIT {
        -j(nu)
    } else {
        0.0
    }
}

/// Slope distance (km) between the antennas, equation (37).
pub fn slope_distance(ha: f64, h2: f64, d: f64, htter: f64, hrter: f64) -> f64 {
    (d * d + 1e-6 * ((ha + htter) - (h2 + hrter)).powi(2)).sqrt()
}

/// Correction (dB) replacing the horizontal distance with the slope
/// distance, Annex 5, § 14, equation (38).
pub fn slope_path_correction(ha: f64, h2: f64, d: f64, htter: f64, hrter: f64) -> f64 {
    20.0 * (d / slope_distance(ha, h2, d, htter, hrter)).log10()
}

/// Field strength (dB(uV/m)) for horizontal distances below 1 km, Annex 5,
/// § 15.
///
/// Below 0.04 km the field is free space over the slope distance; between
/// 0.04 and 1 km it is interpolated on slope distance between the free-space
/// value and `e_sup`, the field computed by the normal procedure at 1 km.
pub fn short_distance_field_strength(
    ha: f64,
    h2: f64,
    d: f64,
    e_sup: f64,
    htter: f64,
    hrter: f64,
) -> f64 {
    let d_slope = slope_distance(ha, h2, d, htter, hrter);

    if d <= 0.04 {
        return 106.9 - 20.0 * d_slope.log10();
    }
    let d_inf_slope = slope_distance(ha, h2, 0.04, htter, hrter);
    let d_sup_slope = slope_distance(ha, h2, 1.0, htter, hrter);
    let e_inf = 106.9 - 20.0 * d_inf_slope.log10();
    e_inf
        + (e_sup - e_inf) * (d_slope / d_inf_slope).log10() / (d_sup_slope / d_inf_slope).log10()
}

/// Field strength exceeded at `q` % of locations, given the median field
/// `e_median` and the location variability standard deviation `sigma_l`
/// (dB), Annex 5, § 12.
///
/// `q` must lie in [1, 99] %. Not applicable when the receiver is adjacent
/// to sea; the caller enforces that.
pub fn apply_location_variability(e_median: f64, q: f64, sigma_l: f64) -> Result<f64> {
    limit("location percentage q", q, 1.0, 99.0)?;
    Ok(e_median + qi(q / 100.0) * sigma_l)
}

/// Basic transmission loss (dB) equivalent to a field strength `e`
/// (dB(uV/m)) for 1 kW e.r.p., Annex 5, § 16, equation (40).
pub fn field_to_loss(f: f64, e: f64) -> f64 {
    139.3 - e + 20.0 * f.log10()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn free_space_ceiling_on_land() {
        // All-land path: the sea enhancement term drops out.
        let e = max_field_strength(10.0, 1.0, 0.0).unwrap();
        assert_abs_diff_eq!(e, 106.9, epsilon = 1e-12);
        let e = max_field_strength(50.0, 10.0, 0.0).unwrap();
        assert_abs_diff_eq!(e, 86.9, epsilon = 1e-12);
    }

    #[test]
    fn sea_paths_raise_the_ceiling_at_low_time_percentages() {
        let land = max_field_strength(1.0, 100.0, 0.0).unwrap();
        let sea = max_field_strength(1.0, 0.0, 100.0).unwrap();
        assert!(sea > land);
        // At t = 50% the enhancement vanishes.
        let sea50 = max_field_strength(50.0, 0.0, 100.0).unwrap();
        assert_abs_diff_eq!(sea50, 106.9 - 40.0, epsilon = 1e-12);
    }

    #[test]
    fn max_field_strength_rejects_out_of_band_t() {
        assert!(max_field_strength(0.5, 10.0, 0.0).is_err());
        assert!(max_field_strength(90.0, 10.0, 0.0).is_err());
    }

    #[test]
    fn terrain_clearance_angle_is_clamped() {
        // Beyond the clamp range the correction saturates.
        assert_eq!(
            terrain_clearance_correction(300.0, 60.0),
            terrain_clearance_correction(300.0, 40.0)
        );
        assert_eq!(
            terrain_clearance_correction(300.0, -5.0),
            terrain_clearance_correction(300.0, 0.55)
        );
    }

    #[test]
    fn positive_clearance_angles_reduce_the_field() {
        // An obstructed receiver (large positive tca) loses signal.
        assert!(terrain_clearance_correction(95.3, 10.3519) < -15.0);
        // Near the lower clamp the two J terms almost cancel.
        assert!(terrain_clearance_correction(300.0, 0.55).abs() < 1.0);
    }

    #[test]
    fn troposcatter_matches_hand_evaluation() {
        // theta_s floors at zero for negative clearance angles.
        let e = troposcatter_field_strength(1.0, 300.0, 10.0, -2.8624, -0.57294);
        let l_f = 5.0 * 300.0f64.log10() - 2.5 * (300.0f64.log10() - 3.3).powi(2);
        let g_t = 10.1 * (-(0.2f64).log10()).powf(0.7);
        assert_abs_diff_eq!(e, 24.4 - l_f + 48.75 + g_t, epsilon = 1e-12);

        // Longer paths scatter through a larger angle and lose more.
        assert!(
            troposcatter_field_strength(500.0, 300.0, 10.0, 0.0, 0.0)
                < troposcatter_field_strength(100.0, 300.0, 10.0, 0.0, 0.0)
        );
    }

    #[test]
    fn rural_receiver_at_10m_needs_no_correction() {
        let (c, rp) = receiver_height_correction(
            121.4375,
            1.0,
            10.0,
            10.0,
            95.3,
            ClutterEnvironment::Rural,
        )
        .unwrap();
        assert_abs_diff_eq!(c, 0.0, epsilon = 1e-12);
        assert_eq!(rp, 10.0);
    }

    #[test]
    fn urban_receiver_below_clutter_sees_diffraction_loss() {
        // h2 well below the representative clutter height.
        let (c, rp) =
            receiver_height_correction(50.0, 10.0, 25.0, 1.5, 600.0, ClutterEnvironment::Urban)
                .unwrap();
        assert!(rp > 10.0);
        assert!(c < 0.0);

        // Above the clutter the correction turns positive.
        let (c_above, _) =
            receiver_height_correction(50.0, 10.0, 25.0, 40.0, 600.0, ClutterEnvironment::Urban)
                .unwrap();
        assert!(c_above > 0.0);
    }

    #[test]
    fn low_receivers_are_rejected() {
        assert_eq!(
            receiver_height_correction(50.0, 10.0, 10.0, 0.5, 600.0, ClutterEnvironment::Rural),
            Err(ModelError::ReceiverTooLow {
                value: 0.5,
                min: 1.0,
                side: "land",
            })
        );
        assert_eq!(
            receiver_height_correction(50.0, 10.0, 10.0, 2.0, 600.0, ClutterEnvironment::Water),
            Err(ModelError::ReceiverTooLow {
                value: 2.0,
                min: 3.0,
                side: "sea",
            })
        );
    }

    #[test]
    fn sea_receiver_interpolates_on_fresnel_distances() {
        let h1 = 50.0;
        let f = 600.0;
        let d10 = d06(f, h1, 10.0);
        let dh2 = d06(f, h1, 5.0);
        let c10 = (3.2 + 6.2 * f.log10()) * 0.5f64.log10();

        // Beyond d10 the plain equation (28b) value applies.
        let (c, _) =
            receiver_height_correction(h1, d10 + 1.0, 10.0, 5.0, f, ClutterEnvironment::Water)
                .unwrap();
        assert_abs_diff_eq!(c, c10, epsilon = 1e-12);

        // Inside the clearance distance for h2 there is no correction.
        let (c, _) =
            receiver_height_correction(h1, 0.5 * dh2, 10.0, 5.0, f, ClutterEnvironment::Water)
                .unwrap();
        assert_eq!(c, 0.0);

        // In between the correction interpolates toward c10, which is
        // negative for h2 < 10 m.
        let mid = (dh2 + d10) / 2.0;
        let (c, _) =
            receiver_height_correction(h1, mid, 10.0, 5.0, f, ClutterEnvironment::Water).unwrap();
        assert!(c < 0.0 && c > c10);
    }

    #[test]
    fn transmitter_clutter_correction_is_never_positive() {
        // Antenna below the clutter: diffraction loss.
        let c = transmitter_clutter_correction(10.0, 20.0, 600.0);
        assert!(c < 0.0);
        // Antenna at the clutter height: nu = 0, loss of J(0) ~ 6 dB.
        let c = transmitter_clutter_correction(20.0, 20.0, 600.0);
        assert_abs_diff_eq!(c, -6.03, epsilon = 5e-3);
        // Antenna far above the clutter: nu below the validity limit, no
        // correction.
        let c = transmitter_clutter_correction(75.0, 10.0, 600.0);
        assert_eq!(c, 0.0);
    }

    #[test]
    fn slope_path_correction_matches_geometry() {
        // 184.1 m of height difference over 1 km.
        let c = slope_path_correction(50.0, 10.0, 1.0, 754.4, 610.3);
        assert_abs_diff_eq!(c, -0.144_755, epsilon = 1e-5);
        // A level path needs no correction.
        assert_eq!(slope_path_correction(10.0, 10.0, 5.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn very_short_paths_are_free_space_over_slope_distance() {
        let e = short_distance_field_strength(50.0, 10.0, 0.02, 90.0, 0.0, 0.0);
        let d_slope = slope_distance(50.0, 10.0, 0.02, 0.0, 0.0);
        assert_abs_diff_eq!(e, 106.9 - 20.0 * d_slope.log10(), epsilon = 1e-12);
    }

    #[test]
    fn short_distance_interpolation_hits_both_ends() {
        let (ha, h2) = (20.0, 10.0);
        let e_sup = 85.0;
        // At exactly 1 km the interpolation returns the supplied field.
        let e = short_distance_field_strength(ha, h2, 1.0, e_sup, 0.0, 0.0);
        assert_abs_diff_eq!(e, e_sup, epsilon = 1e-9);
        // At 0.04 km it returns the free-space end point.
        let e = short_distance_field_strength(ha, h2, 0.04, e_sup, 0.0, 0.0);
        let d_inf_slope = slope_distance(ha, h2, 0.04, 0.0, 0.0);
        assert_abs_diff_eq!(e, 106.9 - 20.0 * d_inf_slope.log10(), epsilon = 1e-9);
    }

    #[test]
    fn location_variability_is_symmetric_about_the_median() {
        let e = 70.0;
        let up = apply_location_variability(e, 1.0, 5.5).unwrap();
        let down = apply_location_variability(e, 99.0, 5.5).unwrap();
        assert_abs_diff_eq!(up - e, e - down, epsilon = 1e-9);
        assert_abs_diff_eq!(
            apply_location_variability(e, 50.0, 5.5).unwrap(),
            e,
            epsilon = 1e-3
        );
        assert!(apply_location_variability(e, 0.5, 5.5).is_err());
    }

    #[test]
    fn loss_conversion_is_exact_at_round_numbers() {
        // 100 MHz: 20 log10(f) = 40.
        assert_abs_diff_eq!(field_to_loss(100.0, 40.0), 139.3, epsilon = 1e-12);
    }
}
