//! Conversion of a monthly series into conceptual heights.

use crate::types::heights::HeightSeries;
use crate::types::monthly::MonthlySeries;

/// Height assigned to every month when all raw intensities are equal.
const FLAT_HEIGHT: f64 = 50.0;

/// Computes the twelve conceptual heights for a monthly series.
///
/// Per month: `raw = tmax + 0.5 * wind + 0.1 * radiation`, with the
/// radiation term treated as zero when the series carries none. The raw
/// values are then min-max scaled to [0, 100]. When all twelve raw values
/// are equal the function returns a constant series instead of dividing by
/// zero.
///
/// Pure and total: no I/O, no randomness, never NaN or infinite for finite
/// inputs.
pub fn conceptual_heights(series: &MonthlySeries) -> HeightSeries {
    let raw = raw_intensity(series);

    let min = raw.iter().copied().fold(f64::INFINITY, f64::min);
    let max = raw.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    if span == 0.0 {
        return HeightSeries([FLAT_HEIGHT; 12]);
    }

    let mut heights = [0.0; 12];
    for (slot, value) in raw.iter().enumerate() {
        heights[slot] = 100.0 * (value - min) / span;
    }
    HeightSeries(heights)
}

fn raw_intensity(series: &MonthlySeries) -> [f64; 12] {
    let radiation = series.radiation.unwrap_or([0.0; 12]);
    let mut raw = [0.0; 12];
    for slot in 0..12 {
        raw[slot] = series.tmax[slot] + 0.5 * series.wind[slot] + 0.1 * radiation[slot];
    }
    raw
}
