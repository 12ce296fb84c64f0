use chrono::{Datelike, NaiveDate};
use polars::prelude::*;

/// One day of archive weather data. Radiation may be missing for a day
/// without invalidating the record; the required variables are not optional
/// because days lacking any of them are dropped at parse time.
#[derive(Debug, PartialEq, Clone)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub tmax: f64,      // temperature_2m_max (degC)
    pub tmin: f64,      // temperature_2m_min (degC)
    pub wind: f64,      // wind_speed_10m_max (km/h)
    pub radiation: Option<f64>, // shortwave_radiation_sum (MJ/m2)
}

/// Daily records covering (at most) one calendar year, in no particular
/// order. Produced by the fetcher, consumed by the monthly aggregator.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct DailySeries {
    pub records: Vec<DailyRecord>,
}

impl DailySeries {
    pub fn new(records: Vec<DailyRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Lowers the records into a DataFrame keyed by calendar month,
    /// ready for the monthly reduction.
    pub fn to_frame(&self) -> PolarsResult<DataFrame> {
        let month: Vec<u32> = self.records.iter().map(|r| r.date.month()).collect();
        let tmax: Vec<f64> = self.records.iter().map(|r| r.tmax).collect();
        let tmin: Vec<f64> = self.records.iter().map(|r| r.tmin).collect();
        let wind: Vec<f64> = self.records.iter().map(|r| r.wind).collect();
        let radiation: Vec<Option<f64>> = self.records.iter().map(|r| r.radiation).collect();

        DataFrame::new(vec![
            Series::new("month".into(), month).into(),
            Series::new("tmax".into(), tmax).into(),
            Series::new("tmin".into(), tmin).into(),
            Series::new("wind".into(), wind).into(),
            Series::new("radiation".into(), radiation).into(),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_carries_month_keys_and_values() {
        let series = DailySeries::new(vec![
            DailyRecord {
                date: NaiveDate::from_ymd_opt(2020, 1, 15).unwrap(),
                tmax: 25.0,
                tmin: 12.0,
                wind: 3.0,
                radiation: Some(150.0),
            },
            DailyRecord {
                date: NaiveDate::from_ymd_opt(2020, 7, 2).unwrap(),
                tmax: 34.0,
                tmin: 20.0,
                wind: 4.8,
                radiation: None,
            },
        ]);

        let frame = series.to_frame().unwrap();
        assert_eq!(frame.shape(), (2, 5));
        assert_eq!(
            frame.get_column_names(),
            ["month", "tmax", "tmin", "wind", "radiation"]
        );

        let months = frame.column("month").unwrap().u32().unwrap();
        assert_eq!(months.get(0), Some(1));
        assert_eq!(months.get(1), Some(7));

        let radiation = frame.column("radiation").unwrap().f64().unwrap();
        assert_eq!(radiation.get(0), Some(150.0));
        assert_eq!(radiation.get(1), None);
    }
}
