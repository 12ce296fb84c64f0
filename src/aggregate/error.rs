use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AggregationError {
    #[error("daily series contains no records")]
    EmptySeries,

    /// A calendar month with zero daily samples. The aggregator raises
    /// instead of interpolating so the caller can fall back to the next
    /// data source.
    #[error("no daily samples for month {month}")]
    EmptyMonth { month: u32 },

    #[error("monthly reduction failed")]
    Reduction(#[from] PolarsError),

    #[error("unexpected aggregate state: {0}")]
    UnexpectedShape(String),
}
