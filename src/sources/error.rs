use crate::aggregate::error::AggregationError;
use crate::fetch::error::FetchError;
use crate::types::monthly::SeriesLengthError;
use polars::error::PolarsError;
use thiserror::Error;

/// Validation failure for a user-supplied CSV. Never fatal: the selector
/// falls through to the next data source.
#[derive(Debug, Error)]
pub enum CsvSeriesError {
    #[error("failed to stage CSV data for reading")]
    Io(#[from] std::io::Error),

    #[error("failed to parse CSV data")]
    Parse(#[from] PolarsError),

    #[error("expected exactly 12 monthly rows, found {found}")]
    RowCount { found: usize },

    #[error("expected 3 or 4 data columns (tmax, tmin, viento[, radiacion]), found {found}")]
    ColumnCount { found: usize },

    #[error("missing required column '{name}'")]
    MissingColumn { name: &'static str },

    #[error("non-numeric value in column '{column}'")]
    NonNumeric { column: String },

    #[error(transparent)]
    SeriesLength(#[from] SeriesLengthError),
}

/// Why one provider in the ordered source chain failed. Recorded as a
/// warning on the final result rather than surfaced as a fatal error.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error(transparent)]
    Csv(#[from] CsvSeriesError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Aggregation(#[from] AggregationError),
}
