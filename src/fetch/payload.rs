//! Open-Meteo archive response structures and their conversion into a
//! [`DailySeries`].

use crate::fetch::error::FetchError;
use crate::types::daily::{DailyRecord, DailySeries};
use chrono::NaiveDate;
use serde::Deserialize;

/// Daily archive response from the Open-Meteo ERA5 endpoint.
#[derive(Debug, Deserialize)]
pub struct ArchiveResponse {
    pub daily: Option<DailyBlock>,
}

/// Columnar daily data. Each variable is an array parallel to `time`.
#[derive(Debug, Deserialize)]
pub struct DailyBlock {
    pub time: Vec<String>,
    #[serde(rename = "temperature_2m_max")]
    pub temperature_max: Option<Vec<Option<f64>>>,
    #[serde(rename = "temperature_2m_min")]
    pub temperature_min: Option<Vec<Option<f64>>>,
    #[serde(rename = "wind_speed_10m_max")]
    pub wind_speed_max: Option<Vec<Option<f64>>>,
    #[serde(rename = "shortwave_radiation_sum")]
    pub radiation_sum: Option<Vec<Option<f64>>>,
}

/// Turns the columnar payload into daily records.
///
/// Days with a null value in any required variable (tmax, tmin, wind) are
/// skipped; the aggregator tolerates missing days within a month. A missing
/// `daily` block, a missing required variable, a length mismatch between
/// arrays, an unparseable date, or an entirely empty payload all count as a
/// malformed response.
pub fn daily_series_from_response(response: ArchiveResponse) -> Result<DailySeries, FetchError> {
    let daily = response
        .daily
        .ok_or_else(|| malformed("response has no daily block"))?;

    if daily.time.is_empty() {
        return Err(malformed("daily block covers zero days"));
    }

    let days = daily.time.len();
    let tmax = required_column(daily.temperature_max, "temperature_2m_max", days)?;
    let tmin = required_column(daily.temperature_min, "temperature_2m_min", days)?;
    let wind = required_column(daily.wind_speed_max, "wind_speed_10m_max", days)?;
    let radiation = match daily.radiation_sum {
        Some(values) if values.len() != days => {
            return Err(malformed(
                "shortwave_radiation_sum length does not match time axis",
            ));
        }
        Some(values) => values,
        None => vec![None; days],
    };

    let mut records = Vec::with_capacity(days);
    for (idx, raw_date) in daily.time.iter().enumerate() {
        let date = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d")
            .map_err(|_| malformed(&format!("unparseable date '{raw_date}'")))?;
        let (Some(tmax), Some(tmin), Some(wind)) = (tmax[idx], tmin[idx], wind[idx]) else {
            continue;
        };
        records.push(DailyRecord {
            date,
            tmax,
            tmin,
            wind,
            radiation: radiation[idx],
        });
    }

    if records.is_empty() {
        return Err(malformed("no complete daily records in payload"));
    }

    Ok(DailySeries::new(records))
}

fn required_column(
    column: Option<Vec<Option<f64>>>,
    name: &str,
    days: usize,
) -> Result<Vec<Option<f64>>, FetchError> {
    let values = column.ok_or_else(|| malformed(&format!("daily block is missing {name}")))?;
    if values.len() != days {
        return Err(malformed(&format!(
            "{name} length does not match time axis"
        )));
    }
    Ok(values)
}

fn malformed(message: &str) -> FetchError {
    FetchError::MalformedResponse(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> ArchiveResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn converts_complete_payload() {
        let response = parse(
            r#"{
                "daily": {
                    "time": ["2020-01-01", "2020-01-02"],
                    "temperature_2m_max": [25.1, 26.3],
                    "temperature_2m_min": [12.0, 11.4],
                    "wind_speed_10m_max": [3.2, 4.0],
                    "shortwave_radiation_sum": [15.0, null]
                }
            }"#,
        );

        let series = daily_series_from_response(response).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(
            series.records[0],
            DailyRecord {
                date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
                tmax: 25.1,
                tmin: 12.0,
                wind: 3.2,
                radiation: Some(15.0),
            }
        );
        assert_eq!(series.records[1].radiation, None);
    }

    #[test]
    fn skips_days_with_null_required_values() {
        let response = parse(
            r#"{
                "daily": {
                    "time": ["2020-01-01", "2020-01-02", "2020-01-03"],
                    "temperature_2m_max": [25.1, null, 27.0],
                    "temperature_2m_min": [12.0, 11.4, 13.1],
                    "wind_speed_10m_max": [3.2, 4.0, null]
                }
            }"#,
        );

        let series = daily_series_from_response(response).unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(
            series.records[0].date,
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
        );
    }

    #[test]
    fn missing_daily_block_is_malformed() {
        let response = parse(r#"{"latitude": 19.4}"#);
        let error = daily_series_from_response(response).unwrap_err();
        assert!(matches!(error, FetchError::MalformedResponse(_)));
    }

    #[test]
    fn length_mismatch_is_malformed() {
        let response = parse(
            r#"{
                "daily": {
                    "time": ["2020-01-01", "2020-01-02"],
                    "temperature_2m_max": [25.1],
                    "temperature_2m_min": [12.0, 11.4],
                    "wind_speed_10m_max": [3.2, 4.0]
                }
            }"#,
        );

        let error = daily_series_from_response(response).unwrap_err();
        assert!(matches!(error, FetchError::MalformedResponse(_)));
    }

    #[test]
    fn all_null_days_are_malformed() {
        let response = parse(
            r#"{
                "daily": {
                    "time": ["2020-01-01"],
                    "temperature_2m_max": [null],
                    "temperature_2m_min": [null],
                    "wind_speed_10m_max": [null]
                }
            }"#,
        );

        let error = daily_series_from_response(response).unwrap_err();
        assert!(matches!(error, FetchError::MalformedResponse(_)));
    }

    #[test]
    fn bad_date_is_malformed() {
        let response = parse(
            r#"{
                "daily": {
                    "time": ["01/01/2020"],
                    "temperature_2m_max": [25.1],
                    "temperature_2m_min": [12.0],
                    "wind_speed_10m_max": [3.2]
                }
            }"#,
        );

        let error = daily_series_from_response(response).unwrap_err();
        assert!(matches!(error, FetchError::MalformedResponse(_)));
    }
}
