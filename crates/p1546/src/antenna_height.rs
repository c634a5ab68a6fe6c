//! Determination of the transmitting/base antenna height h1 (Annex 5, § 3).

use crate::PathZone;

/// Transmitting/base antenna height h1 (m) used for curve selection.
///
/// `d` is the total path length (km), `heff` the effective height over
/// average terrain between 3 and 15 km (m), and `ha` the height of the mast
/// above ground (m), used for short land paths when no terrain profile is
/// available. Unspecified optional inputs fall back to `heff`
/// deterministically; this never fails.
///
/// For mixed paths the zone is taken as land, the height of any sea surface
/// being treated as though land. The caller caps the result at 3000 m; no
/// ceiling is applied here.
pub fn transmitter_height(
    d: f64,
    heff: f64,
    ha: Option<f64>,
    zone: PathZone,
    terrain_info_available: bool,
) -> f64 {
    if zone != PathZone::Land {
        // Section 3.3: sea paths use heff, floored at 3 m.
        return heff.max(3.0);
    }
    if d >= 15.0 {
        // Section 3.2, equation (7).
        return heff;
    }
    if terrain_info_available {
        // Section 3.1, equation (6): for d < 15 km heff is already referenced
        // to the terrain averaged between 0.2d and d.
        return heff;
    }
    match ha {
        Some(ha) if d <= 3.0 => ha,                              // equation (4)
        Some(ha) => ha + (heff - ha) * (d - 3.0) / 12.0,         // equation (5)
        None => heff,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn long_land_path_uses_heff() {
        assert_eq!(
            transmitter_height(50.0, 120.0, Some(30.0), PathZone::Land, false),
            120.0
        );
    }

    #[test]
    fn short_land_path_without_terrain_blends_from_mast_height() {
        // d <= 3 km takes the mast height outright.
        assert_eq!(
            transmitter_height(2.0, 120.0, Some(30.0), PathZone::Land, false),
            30.0
        );
        // 3 < d < 15 km blends linearly toward heff.
        let h1 = transmitter_height(9.0, 120.0, Some(30.0), PathZone::Land, false);
        assert_abs_diff_eq!(h1, 30.0 + 90.0 * 6.0 / 12.0, epsilon = 1e-12);
        // Without a mast height the fallback is heff.
        assert_eq!(
            transmitter_height(9.0, 120.0, None, PathZone::Land, false),
            120.0
        );
    }

    #[test]
    fn short_land_path_with_terrain_info_uses_heff() {
        assert_eq!(
            transmitter_height(1.0, 121.4375, Some(50.0), PathZone::Land, true),
            121.4375
        );
    }

    #[test]
    fn sea_path_floors_heff_at_3m() {
        assert_eq!(
            transmitter_height(100.0, 1.5, None, PathZone::ColdSea, true),
            3.0
        );
        assert_eq!(
            transmitter_height(100.0, 539.4333, None, PathZone::WarmSea, true),
            539.4333
        );
    }
}
