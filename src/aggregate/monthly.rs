//! Reduction of daily records to one representative value per calendar
//! month: MAX for tmax, MIN for tmin, MEAN for wind and radiation.

use crate::aggregate::error::AggregationError;
use crate::types::daily::DailySeries;
use crate::types::monthly::MonthlySeries;
use polars::prelude::*;

/// Aggregates a daily series into twelve monthly values per variable,
/// January through December, regardless of the order the days appear in.
///
/// Missing days within a month are tolerated; a month with zero samples
/// raises [`AggregationError::EmptyMonth`]. Radiation is carried only when
/// every month produced a mean, otherwise the series is emitted without it.
///
/// # Errors
///
/// [`AggregationError::EmptySeries`] for an empty input,
/// [`AggregationError::EmptyMonth`] for a month gap, and
/// [`AggregationError::Reduction`] if the underlying reduction fails.
pub fn aggregate_monthly(daily: &DailySeries) -> Result<MonthlySeries, AggregationError> {
    if daily.is_empty() {
        return Err(AggregationError::EmptySeries);
    }

    let monthly = daily
        .to_frame()?
        .lazy()
        .group_by([col("month")])
        .agg([
            col("tmax").max(),
            col("tmin").min(),
            col("wind").mean(),
            col("radiation").mean(),
        ])
        .sort(["month"], Default::default())
        .collect()?;

    let months = monthly.column("month")?.u32()?;
    let tmax = monthly.column("tmax")?.f64()?;
    let tmin = monthly.column("tmin")?.f64()?;
    let wind = monthly.column("wind")?.f64()?;
    let radiation = monthly.column("radiation")?.f64()?;

    let mut tmax_out = [0.0; 12];
    let mut tmin_out = [0.0; 12];
    let mut wind_out = [0.0; 12];
    let mut radiation_out: [Option<f64>; 12] = [None; 12];
    let mut seen = [false; 12];

    for idx in 0..monthly.height() {
        let month = months
            .get(idx)
            .ok_or_else(|| AggregationError::UnexpectedShape("null month key".to_string()))?;
        let slot = (month as usize)
            .checked_sub(1)
            .filter(|s| *s < 12)
            .ok_or_else(|| {
                AggregationError::UnexpectedShape(format!("month key {month} out of range"))
            })?;
        tmax_out[slot] = value_for(tmax, idx, "tmax", month)?;
        tmin_out[slot] = value_for(tmin, idx, "tmin", month)?;
        wind_out[slot] = value_for(wind, idx, "wind", month)?;
        radiation_out[slot] = radiation.get(idx);
        seen[slot] = true;
    }

    if let Some(gap) = seen.iter().position(|present| !present) {
        return Err(AggregationError::EmptyMonth {
            month: gap as u32 + 1,
        });
    }

    let radiation = if radiation_out.iter().all(Option::is_some) {
        let mut values = [0.0; 12];
        for (slot, mean) in radiation_out.iter().enumerate() {
            values[slot] = mean.unwrap_or_default();
        }
        Some(values)
    } else {
        None
    };

    Ok(MonthlySeries {
        tmax: tmax_out,
        tmin: tmin_out,
        wind: wind_out,
        radiation,
    })
}

fn value_for(
    column: &Float64Chunked,
    idx: usize,
    name: &str,
    month: u32,
) -> Result<f64, AggregationError> {
    column.get(idx).ok_or_else(|| {
        AggregationError::UnexpectedShape(format!("null {name} aggregate for month {month}"))
    })
}
