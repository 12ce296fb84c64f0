use crate::aggregate::error::AggregationError;
use crate::fetch::error::FetchError;
use crate::geocode::GeocodeError;
use crate::sources::error::CsvSeriesError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BioclimaError {
    #[error("latitude {0} is outside [-90, 90]")]
    InvalidLatitude(f64),

    #[error("longitude {0} is outside [-180, 180]")]
    InvalidLongitude(f64),

    #[error("year {year} is outside the archive coverage {min}..={max}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },

    #[error("a design cycle is already running")]
    Busy,

    #[error("no previous download to retry")]
    NoPreviousRequest,

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Aggregation(#[from] AggregationError),

    #[error(transparent)]
    Csv(#[from] CsvSeriesError),

    #[error(transparent)]
    Geocode(#[from] GeocodeError),
}
