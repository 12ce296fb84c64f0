//! Deterministic seasonal stand-in series, the terminal fallback of the
//! source chain.

use crate::types::location::LatLon;
use crate::types::monthly::MonthlySeries;
use std::f64::consts::TAU;

/// Generates a plausible seasonal year for a location. Simple sinusoids
/// with the amplitude nudged by absolute latitude so different picks do not
/// all look identical. Total and deterministic: the same location always
/// yields the same series, and no input can make it fail.
pub fn synthetic_series(location: LatLon) -> MonthlySeries {
    let k = (location.0.abs() / 90.0).clamp(0.0, 1.0);

    let mut tmax = [0.0; 12];
    let mut tmin = [0.0; 12];
    let mut wind = [0.0; 12];
    let mut radiation = [0.0; 12];

    for (slot, month) in (0..12).map(|m| (m, m as f64)) {
        tmax[slot] = 30.0 + (6.0 + 4.0 * k) * (TAU * (month - 2.0) / 12.0).sin();
        tmin[slot] = 15.0 + (5.0 + 2.0 * k) * (TAU * (month - 3.0) / 12.0).sin();
        wind[slot] = 4.0 + (1.2 + 0.6 * k) * (TAU * (month + 1.0) / 12.0).sin();
        radiation[slot] = 180.0 + (50.0 + 30.0 * k) * (TAU * (month - 2.0) / 12.0).sin();
    }

    MonthlySeries {
        tmax,
        tmin,
        wind,
        radiation: Some(radiation),
    }
}
