//! Combination of land and sea field strengths for mixed paths
//! (Annex 5, § 8, method approved by RRC-06).

use crate::error::{ModelError, Result};

/// Combine per-zone field strengths into one value for a mixed path.
///
/// `e_land[i]` is the field strength (dB(uV/m)) for a land path equal in
/// length to the whole mixed path, crossing land zone `i` of length
/// `d_land[i]` (km); `e_sea`/`d_sea` likewise for sea-and-coastal zones.
/// The total length over both groups must be positive.
///
/// With only one group present the result is the length-weighted mean of
/// that group. With both present, the sea fraction enters through the
/// nonlinear mixing law of equation (23): at low time percentages the
/// stronger sea-path signal dominates rather than averaging in linearly.
pub fn combine_mixed_path(
    e_land: &[f64],
    e_sea: &[f64],
    d_land: &[f64],
    d_sea: &[f64],
) -> Result<f64> {
    if e_land.len() != d_land.len() || e_sea.len() != d_sea.len() {
        return Err(ModelError::LengthMismatch);
    }

    let dl_total: f64 = d_land.iter().sum();
    let ds_total: f64 = d_sea.iter().sum();
    let d_total = dl_total + ds_total;

    let weighted = |e: &[f64], d: &[f64]| -> f64 {
        e.iter().zip(d).map(|(e, d)| e * d).sum::<f64>()
    };

    if dl_total == 0.0 {
        // No land/sea transition; plain length-weighted mean, equation (22).
        return Ok(weighted(e_sea, d_sea) / d_total);
    }
    if ds_total == 0.0 {
        return Ok(weighted(e_land, d_land) / d_total);
    }

    let f_sea = ds_total / d_total;
    let mean_sea = weighted(e_sea, d_sea) / ds_total;
    let mean_land = weighted(e_land, d_land) / dl_total;

    let delta = mean_sea - mean_land;
    let v = (1.0 + delta / 40.0).max(1.0);
    let a0 = 1.0 - (1.0 - f_sea).powf(2.0 / 3.0);
    let a = a0.powf(v);

    Ok((1.0 - a) * mean_land + a * mean_sea) // equation (23)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn pure_land_is_length_weighted_mean() {
        let e = combine_mixed_path(&[60.0, 40.0], &[], &[30.0, 10.0], &[]).unwrap();
        assert_abs_diff_eq!(e, (60.0 * 30.0 + 40.0 * 10.0) / 40.0, epsilon = 1e-12);
    }

    #[test]
    fn pure_sea_is_length_weighted_mean() {
        let e = combine_mixed_path(&[], &[10.0, 20.0], &[], &[100.0, 300.0]).unwrap();
        assert_abs_diff_eq!(e, (10.0 * 100.0 + 20.0 * 300.0) / 400.0, epsilon = 1e-12);
    }

    #[test]
    fn single_segment_is_identity() {
        let e = combine_mixed_path(&[100.721], &[], &[1.0], &[]).unwrap();
        assert_abs_diff_eq!(e, 100.721, epsilon = 1e-12);
    }

    #[test]
    fn mixed_path_weighting_is_nonlinear() {
        // Equal lengths; a linear mean would sit at the midpoint. The mixing
        // exponent V suppresses the sea weight as the sea excess grows, so
        // the combined value sits below the linear mean here.
        let land = 20.0;
        let sea = 60.0;
        let e = combine_mixed_path(&[land], &[sea], &[50.0], &[50.0]).unwrap();
        let linear = 0.5 * (land + sea);
        assert!(e < linear);

        // Hand-evaluated mixing law for this geometry.
        let a0: f64 = 1.0 - 0.5f64.powf(2.0 / 3.0);
        let a = a0.powf(1.0 + 40.0 / 40.0);
        assert_abs_diff_eq!(e, (1.0 - a) * land + a * sea, epsilon = 1e-12);
    }

    #[test]
    fn mismatched_slices_are_rejected() {
        assert_eq!(
            combine_mixed_path(&[1.0], &[], &[1.0, 2.0], &[]),
            Err(ModelError::LengthMismatch)
        );
    }
}
