//! Field-strength and path-loss prediction for point-to-area terrestrial
//! services in the manner of Recommendation ITU-R P.1546-6.
//!
//! The method interpolates and extrapolates empirically derived
//! field-strength curves as functions of distance, transmitting/base antenna
//! height, frequency and percentage time, for land, cold-sea and warm-sea
//! paths up to 1 000 km and effective transmitting antenna heights below
//! 3 000 m. Corrections are then applied for terrain clearance, terminal
//! clutter, antenna heights, slope paths, distances below 1 km and location
//! variability, and the result is converted to basic transmission loss.
//!
//! The entry point is [`predict`], taking a [`P1546Input`] and returning a
//! [`Prediction`]. The individual stages (curve interpolation, mixed-path
//! combination, each correction) are public so intermediate quantities can
//! be evaluated directly.
//!
//! Not implemented:
//! - Annex 7: adjustment for different climatic regions
//! - Annex 5, § 4.3 a): the alternative C_h1 calculation for use with a
//!   terrain database

use log::{debug, trace};

pub mod antenna_height;
pub mod bracket;
pub mod constants;
pub mod corrections;
pub mod curve_interpolation;
pub mod error;
pub mod mixed_path;
pub mod numeric_util;
mod tables;

pub use crate::antenna_height::transmitter_height;
pub use crate::curve_interpolation::zone_field_strength;
pub use crate::error::{ModelError, Result};
pub use crate::mixed_path::combine_mixed_path;

use crate::constants::MAX_H1;
use crate::corrections::{
    apply_location_variability, field_to_loss, max_field_strength, receiver_height_correction,
    short_distance_field_strength, slope_path_correction, terrain_clearance_correction,
    transmitter_clutter_correction, troposcatter_field_strength,
};
use crate::error::limit;

/// Propagation category of one path section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathZone {
    Land,
    /// Sea or coastal water warmer than roughly 18 degrees C annual average.
    WarmSea,
    ColdSea,
}

impl PathZone {
    pub fn is_sea(self) -> bool {
        self != PathZone::Land
    }
}

/// Ground-cover environment around the receiving/mobile antenna.
///
/// Only the distinction between land-adjacent and sea-adjacent reception,
/// and between urban-like and open environments, enters the calculation;
/// the finer categories exist so callers can record the actual clutter and
/// pick the representative height `R2` consistently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClutterEnvironment {
    None,
    Water,
    Urban,
    UrbanMicro,
    Suburban,
    DenseSuburban,
    Rural,
    DenseUrban,
    HighRiseUrban,
    Residential,
    Industrial,
    UserSpecified,
}

impl ClutterEnvironment {
    /// True when the receiver counts as adjacent to land for the
    /// antenna-height correction.
    pub fn adjacent_to_land(self) -> bool {
        matches!(
            self,
            ClutterEnvironment::Urban
                | ClutterEnvironment::DenseUrban
                | ClutterEnvironment::Rural
                | ClutterEnvironment::Suburban
                | ClutterEnvironment::None
        )
    }

    /// True for the urban-like environments that use the clutter-diffraction
    /// branch of the receiver height correction.
    pub fn is_urban(self) -> bool {
        matches!(
            self,
            ClutterEnvironment::Urban | ClutterEnvironment::DenseUrban | ClutterEnvironment::Suburban
        )
    }
}

/// One section of the propagation path, in order from transmitter to
/// receiver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSegment {
    pub zone: PathZone,
    /// Section length (km).
    pub length: f64,
}

/// Inputs to one prediction.
pub struct P1546Input {
    /// Frequency (MHz). Nominal range 30 to 3 000 MHz; values above the
    /// tabulated 2 000 MHz extrapolate.
    pub frequency: f64,
    /// Percentage time (%) in the range 1 to 50.
    pub time_percentage: f64,
    /// Effective height of the transmitting/base antenna over the average
    /// ground level between 3 and 15 km toward the receiver (m).
    pub heff: f64,
    /// Receiving/mobile antenna height above ground (m).
    pub h2: f64,
    /// Representative clutter height around the receiver (m); 10 m notional
    /// for sea paths.
    pub r2: f64,
    /// Clutter environment at the receiver.
    pub clutter: ClutterEnvironment,
    /// Path sections from transmitter to receiver. The total length must be
    /// positive.
    pub path: Vec<PathSegment>,
    /// True when heff was derived from a terrain profile.
    pub terrain_info_available: bool,
    /// Percentage of locations (%) in the range 1 to 99; 50 disables the
    /// location-variability correction.
    pub location_percentage: f64,
    /// Standard deviation of the location variability (dB).
    pub sigma_l: f64,
    /// Transmitter power (kW); scales the returned field strength only.
    pub tx_power: f64,

    /// Transmitting/base antenna height above ground (m), used for short
    /// land paths without terrain information and for the slope-path,
    /// transmitter-clutter and short-distance terms.
    pub ha: Option<f64>,
    /// Transmitting/base antenna height above terrain averaged between 0.2d
    /// and d (m). Accepted for interface completeness; h1 determination uses
    /// heff whenever a terrain profile is available.
    pub hb: Option<f64>,
    /// Representative clutter height around the transmitter (m); `None` or
    /// a non-positive value means open/uncluttered.
    pub r1: Option<f64>,
    /// Terrain clearance angle at the receiver (degrees); `None` skips the
    /// correction.
    pub tca: Option<f64>,
    /// Terrain height above sea level at the transmitter (m).
    pub tx_terrain_height: f64,
    /// Terrain height above sea level at the receiver (m).
    pub rx_terrain_height: f64,
    /// Terrain clearance angle of the h1 terminal (degrees). The
    /// troposcatter floor applies only when both clearance angles are given.
    pub eff1: Option<f64>,
    /// Terrain clearance angle of the h2 terminal relative to the local
    /// horizontal (degrees).
    pub eff2: Option<f64>,
}

/// Result of one prediction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// Field strength (dB(uV/m)) scaled to the transmitter power.
    pub field_strength: f64,
    /// Basic transmission loss (dB), referenced to 1 kW e.r.p. regardless
    /// of the transmitter power.
    pub basic_transmission_loss: f64,
}

/// Run the full prediction: Steps 1 to 20 of the Annex 6 procedure.
///
/// Fails when an input lies outside the model's validity domain; tolerated
/// excursions (frequency above 2 000 MHz, distance beyond 1 000 km, heff
/// above 3 000 m) extrapolate instead.
pub fn predict(input: &P1546Input) -> Result<Prediction> {
    let f = input.frequency;
    let t = input.time_percentage;

    if f <= 0.0 {
        return Err(ModelError::out_of_range("frequency f", f, 0.0, f64::INFINITY));
    }
    limit("time percentage t", t, 1.0, 50.0)?;

    let d: f64 = input.path.iter().map(|s| s.length).sum();
    if d <= 0.0 {
        return Err(ModelError::EmptyPath(d));
    }
    let d_land: f64 = input
        .path
        .iter()
        .filter(|s| s.zone == PathZone::Land)
        .map(|s| s.length)
        .sum();
    let d_sea = d - d_land;

    // Step 1: h1 is determined for the first propagation type; for mixed
    // paths any sea surface is treated as though land. Heights above 3000 m
    // are outside the model's validity and are capped.
    let h1_zone = if input.path.len() > 1 {
        PathZone::Land
    } else {
        input.path[0].zone
    };
    let h1 = transmitter_height(d, input.heff, input.ha, h1_zone, input.terrain_info_available)
        .min(MAX_H1);
    trace!("h1 = {h1:.4} m over {d:.4} km ({d_land:.4} km land, {d_sea:.4} km sea)");

    let htter = input.tx_terrain_height;
    let hrter = input.rx_terrain_height;
    let ha0 = input.ha.unwrap_or(0.0);

    // Maximum field strength (Step 19), with the slope-path correction of
    // Step 16 applied to the ceiling as well.
    let e_max = max_field_strength(t, d_land, d_sea)?
        + slope_path_correction(ha0, input.h2, d, htter, hrter);

    // Steps 6 to 10 use a floor of 1 km; paths below 1 km are extrapolated
    // afterwards in Step 17.
    let d_eff = d.max(1.0);

    // Steps 5 to 10: one field strength per path section.
    let mut e_land = Vec::new();
    let mut dl = Vec::new();
    let mut e_sea = Vec::new();
    let mut ds = Vec::new();
    for segment in &input.path {
        let e = zone_field_strength(t, f, h1, segment.zone, d_eff, e_max)?;
        if segment.zone == PathZone::Land {
            e_land.push(e);
            dl.push(segment.length);
        } else {
            e_sea.push(e);
            ds.push(segment.length);
        }
    }

    // Step 11: mixed-path combination.
    let mut e = combine_mixed_path(&e_land, &e_sea, &dl, &ds)?;
    debug!("combined field strength {e:.4} dB(uV/m)");

    // Step 12: terrain clearance angle at the receiver.
    if let Some(tca) = input.tca {
        e += terrain_clearance_correction(f, tca);
    }

    // Step 13: the troposcatter field sets a floor.
    if let (Some(eff1), Some(eff2)) = (input.eff1, input.eff2) {
        e = e.max(troposcatter_field_strength(d_eff, f, t, eff1, eff2));
    }

    // Step 14: receiving/mobile antenna height.
    let (rx_correction, _rp) =
        receiver_height_correction(h1, d_eff, input.r2, input.h2, f, input.clutter)?;
    e += rx_correction;

    if let Some(ha) = input.ha {
        if ha > 0.0 {
            // Step 15: clutter around the transmitting/base terminal,
            // skipped for an open/uncluttered transmitter.
            if let Some(r1) = input.r1 {
                if r1 > 0.0 {
                    e += transmitter_clutter_correction(ha, r1, f);
                }
            }
            // Step 16: slope-path correction.
            if input.h2 < 10000.0 {
                e += slope_path_correction(ha, input.h2, d_eff, htter, hrter);
            }
        }
    }

    // Step 17: extrapolation to distances below 1 km.
    if d < 0.999_999_999_9 {
        e = short_distance_field_strength(ha0, input.h2, d, e, htter, hrter);
    }

    // Step 18: location variability.
    if input.location_percentage != 50.0 {
        e = apply_location_variability(e, input.location_percentage, input.sigma_l)?;
    }

    // Step 19: ceiling.
    e = e.min(e_max);

    // Step 20: conversion to basic transmission loss. The loss is referenced
    // to 1 kW; the transmitter power scales only the field strength.
    let loss = field_to_loss(f, e);
    let field = e + 10.0 * input.tx_power.log10();
    debug!("E = {field:.4} dB(uV/m), Lb = {loss:.4} dB");

    Ok(Prediction {
        field_strength: field,
        basic_transmission_loss: loss,
    })
}

/// Convenience wrapper returning only the basic transmission loss (dB).
pub fn basic_transmission_loss(input: &P1546Input) -> Result<f64> {
    Ok(predict(input)?.basic_transmission_loss)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn land_input(d: f64) -> P1546Input {
        P1546Input {
            frequency: 600.0,
            time_percentage: 50.0,
            heff: 75.0,
            h2: 10.0,
            r2: 10.0,
            clutter: ClutterEnvironment::Rural,
            path: vec![PathSegment {
                zone: PathZone::Land,
                length: d,
            }],
            terrain_info_available: true,
            location_percentage: 50.0,
            sigma_l: 0.0,
            tx_power: 1.0,
            ha: None,
            hb: None,
            r1: None,
            tca: None,
            tx_terrain_height: 0.0,
            rx_terrain_height: 0.0,
            eff1: None,
            eff2: None,
        }
    }

    #[test]
    fn rejects_out_of_domain_inputs() {
        let mut input = land_input(10.0);
        input.frequency = 0.0;
        assert!(predict(&input).is_err());

        let mut input = land_input(10.0);
        input.time_percentage = 0.5;
        assert!(predict(&input).is_err());

        let input = land_input(0.0);
        assert_eq!(predict(&input), Err(ModelError::EmptyPath(0.0)));
    }

    #[test]
    fn loss_and_field_satisfy_the_duality() {
        let input = land_input(50.0);
        let p = predict(&input).unwrap();
        // tx_power = 1 kW, so the returned field is the 1 kW-referenced one.
        assert_abs_diff_eq!(
            p.basic_transmission_loss,
            139.3 - p.field_strength + 20.0 * 600.0f64.log10(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn transmitter_power_scales_field_but_not_loss() {
        let reference = predict(&land_input(50.0)).unwrap();
        let mut input = land_input(50.0);
        input.tx_power = 10.0;
        let scaled = predict(&input).unwrap();
        assert_abs_diff_eq!(
            scaled.field_strength,
            reference.field_strength + 10.0,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            scaled.basic_transmission_loss,
            reference.basic_transmission_loss,
            epsilon = 1e-12
        );
    }

    #[test]
    fn field_never_exceeds_the_free_space_ceiling() {
        // A tall antenna very close in would extrapolate above free space
        // without the Step 19 clamp.
        let mut input = land_input(1.0);
        input.heff = 1200.0;
        let p = predict(&input).unwrap();
        let ceiling = 106.9; // 106.9 - 20 log10(1)
        assert!(p.field_strength <= ceiling + 1e-12);
    }

    #[test]
    fn loss_grows_with_distance() {
        let l10 = predict(&land_input(10.0)).unwrap().basic_transmission_loss;
        let l50 = predict(&land_input(50.0)).unwrap().basic_transmission_loss;
        let l200 = predict(&land_input(200.0)).unwrap().basic_transmission_loss;
        assert!(l10 < l50 && l50 < l200);
    }

    #[test]
    fn effective_heights_above_3000m_are_capped() {
        let mut tall = land_input(100.0);
        tall.heff = 5000.0;
        let mut capped = land_input(100.0);
        capped.heff = 3000.0;
        assert_eq!(
            predict(&tall).unwrap().basic_transmission_loss,
            predict(&capped).unwrap().basic_transmission_loss
        );
    }

    #[test]
    fn location_variability_shifts_the_field() {
        let median = predict(&land_input(50.0)).unwrap();
        let mut input = land_input(50.0);
        input.location_percentage = 1.0;
        input.sigma_l = 5.5;
        let best = predict(&input).unwrap();
        assert!(best.field_strength > median.field_strength);
        assert!(best.basic_transmission_loss < median.basic_transmission_loss);
    }

    #[test]
    fn sub_kilometre_paths_use_the_short_distance_extension() {
        // Below 0.04 km the field is free space over the slope distance and
        // does not depend on the curves at all.
        let mut input = land_input(0.03);
        input.ha = Some(30.0);
        input.heff = 30.0;
        let p = predict(&input).unwrap();
        let d_slope = corrections::slope_distance(30.0, 10.0, 0.03, 0.0, 0.0);
        let e = 106.9 - 20.0 * d_slope.log10();
        // The ceiling's slope term also applies at the raw distance.
        let e_max = 106.9 - 20.0 * 0.03f64.log10()
            + slope_path_correction(30.0, 10.0, 0.03, 0.0, 0.0);
        let expected = e.min(e_max);
        assert_abs_diff_eq!(p.field_strength, expected, epsilon = 1e-9);
    }
}
