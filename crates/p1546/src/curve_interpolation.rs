//! Interpolation and extrapolation of the tabulated field-strength curves
//! over time percentage, frequency, transmitting/base antenna height and
//! distance (Annex 5, §§ 4-7).
//!
//! The stack nests in that order: [`zone_field_strength`] brackets the time
//! percentage and combines the two legs through the inverse normal
//! distribution; each leg brackets the frequency; each frequency leg either
//! interpolates the height curves (h1 >= 10 m) or applies the low-antenna
//! method of § 4.2/4.3; the innermost level interpolates over the nominal
//! distances of Table 1.

use crate::bracket::bracket;
use crate::constants::{DISTANCES, FREQUENCIES, HEIGHTS, TIME_PERCENTAGES};
use crate::corrections::max_field_strength;
use crate::error::Result;
use crate::numeric_util::{d06, j, qi, v_angle};
use crate::tables::{CurveGrid, COLD_SEA, LAND, WARM_SEA};
use crate::PathZone;

fn curves(zone: PathZone) -> &'static CurveGrid {
    match zone {
        PathZone::Land => &LAND,
        PathZone::WarmSea => &WARM_SEA,
        PathZone::ColdSea => &COLD_SEA,
    }
}

/// Field strength (dB(uV/m) for 1 kW e.r.p.) for a path lying entirely in
/// one zone, at time percentage `t` (%), frequency `f` (MHz), antenna height
/// `h1` (m) and distance `d` (km), limited by `e_max`.
///
/// Implements Steps 6 to 10 of the Annex 6 procedure for one propagation
/// category of a (possibly mixed) path.
pub fn zone_field_strength(
    t: f64,
    f: f64,
    h1: f64,
    zone: PathZone,
    d: f64,
    e_max: f64,
) -> Result<f64> {
    let tb = bracket(&TIME_PERCENTAGES, t);

    // Sea-path frequency extrapolation below 100 MHz, equations (15a)-(15b):
    // within the 0.6 Fresnel-clearance distance for 600 MHz, blend between
    // the free-space maximum and the 100 MHz curves instead of extrapolating
    // the curves directly.
    let df = d06(f, h1, 10.0);
    let d600 = d06(600.0, h1, 10.0);

    let (e_inf, e_sup) = if zone.is_sea() && f < 100.0 && d < d600 {
        if d <= df {
            let e = max_field_strength(t, 0.0, d)?; // equation (15a)
            (e, e)
        } else {
            let e_df = max_field_strength(t, 0.0, df)?;
            let w = (d / df).log10() / (d600 / df).log10();
            let e_inf = field_for_frequency(tb.lo_idx, f, h1, zone, d, e_max)?;
            let e_sup = field_for_frequency(tb.hi_idx, f, h1, zone, d, e_max)?;
            // equation (15b)
            (e_df + (e_inf - e_df) * w, e_df + (e_sup - e_df) * w)
        }
    } else {
        (
            field_for_frequency(tb.lo_idx, f, h1, zone, d, e_max)?,
            field_for_frequency(tb.hi_idx, f, h1, zone, d, e_max)?,
        )
    };

    if tb.is_exact() {
        return Ok(e_inf);
    }

    // Interpolation over time percentage, equation (16).
    let q_inf = qi(tb.lo / 100.0);
    let q_sup = qi(tb.hi / 100.0);
    let q_t = qi(t / 100.0);
    Ok(e_sup * (q_inf - q_t) / (q_inf - q_sup) + e_inf * (q_t - q_sup) / (q_inf - q_sup))
}

/// Steps 7 to 9: field strength at one nominal time percentage, interpolated
/// or extrapolated over frequency, equation (14).
fn field_for_frequency(
    t_idx: usize,
    f: f64,
    h1: f64,
    zone: PathZone,
    d: f64,
    e_max: f64,
) -> Result<f64> {
    let fb = bracket(&FREQUENCIES, f);

    let eval = |f_idx: usize| -> Result<f64> {
        if h1 >= 10.0 {
            Ok(field_for_height(t_idx, f_idx, h1, zone, d, e_max))
        } else {
            low_antenna_field(t_idx, f_idx, h1, zone, d)
        }
    };

    let e_inf = eval(fb.lo_idx)?;
    if fb.is_exact() {
        return Ok(e_inf);
    }
    let e_sup = eval(fb.hi_idx)?;

    let e = e_inf + (e_sup - e_inf) * (f / fb.lo).log10() / (fb.hi / fb.lo).log10();
    if f > 2000.0 {
        // Extrapolation above the highest nominal frequency must not exceed
        // the free-space maximum.
        return Ok(e.min(e_max));
    }
    Ok(e)
}

/// Steps 8.1.1 to 8.1.6: interpolation/extrapolation over antenna height for
/// h1 >= 10 m, equation (8), limited by `e_max` for h1 > 1200 m.
fn field_for_height(t_idx: usize, f_idx: usize, h1: f64, zone: PathZone, d: f64, e_max: f64) -> f64 {
    debug_assert!(h1 >= 10.0);

    let hb = bracket(&HEIGHTS, h1);
    let e_inf = field_for_distance(t_idx, f_idx, hb.lo_idx, zone, d);
    if hb.is_exact() {
        return e_inf.min(e_max);
    }
    let e_sup = field_for_distance(t_idx, f_idx, hb.hi_idx, zone, d);

    let e = e_inf + (e_sup - e_inf) * (h1 / hb.lo).log10() / (hb.hi / hb.lo).log10();
    e.min(e_max)
}

/// Steps 8.1.4 and 8.1.5: curve lookup at a nominal height, interpolated over
/// the nominal distances of Table 1, equation (13).
fn field_for_distance(t_idx: usize, f_idx: usize, h_idx: usize, zone: PathZone, d: f64) -> f64 {
    let grid = curves(zone);
    let db = bracket(&DISTANCES, d);

    let e_inf = grid[t_idx][f_idx][db.lo_idx][h_idx];
    if db.is_exact() {
        return e_inf;
    }
    let e_sup = grid[t_idx][f_idx][db.hi_idx][h_idx];
    e_inf + (e_sup - e_inf) * (d / db.lo).log10() / (db.hi / db.lo).log10()
}

/// Step 8.2: field strength for a transmitting/base antenna below 10 m,
/// Annex 5, §§ 4.2 and 4.3 (land) and equations (10)-(11) (sea).
fn low_antenna_field(t_idx: usize, f_idx: usize, h1: f64, zone: PathZone, d: f64) -> Result<f64> {
    debug_assert!(h1 < 10.0);

    let e10 = field_for_distance(t_idx, f_idx, 0, zone, d);
    let e20 = field_for_distance(t_idx, f_idx, 1, zone, d);

    // Correction at h1 = -10 m, equations (9a)-(9b) and (12).
    let c_h1_neg10 = 6.03 - j(v_angle(f_idx, -10.0));
    let c1020 = e10 - e20;
    let e_zero = e10 + 0.5 * (c1020 + c_h1_neg10);

    if zone == PathZone::Land {
        if h1 >= 0.0 {
            return Ok(e_zero + 0.1 * h1 * (e10 - e_zero)); // equation (9)
        }
        // Negative h1: knife-edge diffraction over the terrain obstruction,
        // equation (12).
        return Ok(e_zero + 6.03 - j(v_angle(f_idx, h1)));
    }

    // Sea path, 1 m <= h1 < 10 m.
    if h1 < 1.0 {
        return Err(crate::error::ModelError::SeaAntennaTooLow(h1));
    }
    let f_nom = FREQUENCIES[f_idx];
    let t_nom = TIME_PERCENTAGES[t_idx];
    let d_h1 = d06(f_nom, h1, 10.0); // equation (10a)
    let d20 = d06(f_nom, 20.0, 10.0); // equation (10b)

    if d <= d_h1 {
        // equation (11a): path has 0.6 Fresnel clearance.
        return max_field_strength(t_nom, 0.0, d);
    }
    if d < d20 {
        // equation (11b): blend between the free-space maximum at d_h1 and
        // the height-interpolated value at d20.
        let e10_d20 = field_for_distance(t_idx, f_idx, 0, zone, d20);
        let e20_d20 = field_for_distance(t_idx, f_idx, 1, zone, d20);
        let e_d20 =
            e10_d20 + (e20_d20 - e10_d20) * (h1 / 10.0).log10() / (20.0f64 / 10.0).log10();
        let e_dh1 = max_field_strength(t_nom, 0.0, d_h1)?;
        return Ok(e_dh1 + (e_d20 - e_dh1) * (d / d_h1).log10() / (d20 / d_h1).log10());
    }

    // equation (11c). The first term keeps the reference implementation's
    // natural-log denominator; changing it to log10 shifts published results.
    let e1 = e10 + (e20 - e10) * (h1 / 10.0).log10() / (20.0f64 / 10.0).ln();
    let e2 = e_zero + 0.1 * h1 * (e10 - e_zero);
    let fs = (d - d20) / d;
    Ok(e1 * (1.0 - fs) + e2 * fs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    // A ceiling high enough never to bind.
    const NO_CEILING: f64 = 1000.0;

    #[test]
    fn nominal_grid_points_reproduce_the_tables() {
        // At a nominal (t, f, h1, d) every bracket is degenerate and the
        // table value comes back exactly.
        let e = zone_field_strength(1.0, 100.0, 20.0, PathZone::Land, 10.0, NO_CEILING).unwrap();
        assert_eq!(e, LAND[0][0][9][1]);

        let e = zone_field_strength(1.0, 100.0, 150.0, PathZone::ColdSea, 600.0, NO_CEILING)
            .unwrap();
        assert_eq!(e, COLD_SEA[0][0][61][4]);

        let e = zone_field_strength(50.0, 2000.0, 1200.0, PathZone::WarmSea, 1000.0, NO_CEILING)
            .unwrap();
        assert_eq!(e, WARM_SEA[2][2][77][7]);
    }

    #[test]
    fn distance_interpolation_stays_between_the_nominal_values() {
        let lo = zone_field_strength(50.0, 600.0, 37.5, PathZone::Land, 20.0, NO_CEILING).unwrap();
        let hi = zone_field_strength(50.0, 600.0, 37.5, PathZone::Land, 25.0, NO_CEILING).unwrap();
        let mid = zone_field_strength(50.0, 600.0, 37.5, PathZone::Land, 22.0, NO_CEILING).unwrap();
        assert!(mid < lo && mid > hi, "field must fall with distance");
    }

    #[test]
    fn height_interpolation_stays_between_the_nominal_curves() {
        let e37 = zone_field_strength(50.0, 600.0, 37.5, PathZone::Land, 50.0, NO_CEILING).unwrap();
        let e75 = zone_field_strength(50.0, 600.0, 75.0, PathZone::Land, 50.0, NO_CEILING).unwrap();
        let e50 = zone_field_strength(50.0, 600.0, 50.0, PathZone::Land, 50.0, NO_CEILING).unwrap();
        assert!(e50 > e37 && e50 < e75);
    }

    #[test]
    fn time_percentage_interpolation_stays_between_the_nominal_curves() {
        let e1 = zone_field_strength(1.0, 100.0, 150.0, PathZone::Land, 100.0, NO_CEILING).unwrap();
        let e10 =
            zone_field_strength(10.0, 100.0, 150.0, PathZone::Land, 100.0, NO_CEILING).unwrap();
        let e5 = zone_field_strength(5.0, 100.0, 150.0, PathZone::Land, 100.0, NO_CEILING).unwrap();
        assert!(e5 < e1 && e5 > e10, "field exceeded less often is stronger");
    }

    #[test]
    fn frequency_interpolation_is_log_linear() {
        let e100 =
            zone_field_strength(50.0, 100.0, 75.0, PathZone::Land, 30.0, NO_CEILING).unwrap();
        let e600 =
            zone_field_strength(50.0, 600.0, 75.0, PathZone::Land, 30.0, NO_CEILING).unwrap();
        let e300 =
            zone_field_strength(50.0, 300.0, 75.0, PathZone::Land, 30.0, NO_CEILING).unwrap();
        let w = (300.0f64 / 100.0).log10() / (600.0f64 / 100.0).log10();
        assert_abs_diff_eq!(e300, e100 + (e600 - e100) * w, epsilon = 1e-9);
    }

    #[test]
    fn extrapolation_above_1200m_is_capped() {
        let ceiling = 30.0;
        let e = zone_field_strength(50.0, 100.0, 2800.0, PathZone::Land, 5.0, ceiling).unwrap();
        assert!(e <= ceiling);
    }

    #[test]
    fn low_land_antenna_interpolates_toward_e_zero() {
        // h1 = 5 m sits halfway between the h1 = 0 construction and the
        // 10 m curve, equation (9).
        let d = 10.0;
        let e10 = LAND[2][1][9][0];
        let e20 = LAND[2][1][9][1];
        let c_h1_neg10 = 6.03 - j(v_angle(1, -10.0));
        let e_zero = e10 + 0.5 * ((e10 - e20) + c_h1_neg10);
        let expected = e_zero + 0.5 * (e10 - e_zero);
        let e = zone_field_strength(50.0, 600.0, 5.0, PathZone::Land, d, NO_CEILING).unwrap();
        assert_abs_diff_eq!(e, expected, epsilon = 1e-9);
    }

    #[test]
    fn negative_land_antenna_applies_diffraction_loss() {
        let e_pos = zone_field_strength(50.0, 600.0, 0.0, PathZone::Land, 10.0, NO_CEILING)
            .unwrap();
        let e_neg = zone_field_strength(50.0, 600.0, -50.0, PathZone::Land, 10.0, NO_CEILING)
            .unwrap();
        assert!(e_neg < e_pos);
    }

    #[test]
    fn sea_antenna_below_1m_is_rejected() {
        let r = zone_field_strength(50.0, 600.0, 0.5, PathZone::ColdSea, 10.0, NO_CEILING);
        assert!(matches!(
            r,
            Err(crate::error::ModelError::SeaAntennaTooLow(_))
        ));
    }

    #[test]
    fn short_sea_path_at_low_antenna_reaches_free_space() {
        // Within the 0.6 Fresnel clearance distance the sea curves give way
        // to the free-space field, equation (11a).
        let h1 = 5.0;
        let d = 0.5 * d06(600.0, h1, 10.0);
        let e = zone_field_strength(50.0, 600.0, h1, PathZone::ColdSea, d, NO_CEILING).unwrap();
        let e_fs = max_field_strength(50.0, 0.0, d).unwrap();
        assert_abs_diff_eq!(e, e_fs, epsilon = 1e-9);
    }
}
