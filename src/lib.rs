//! Bioclimatic design from historical weather data.
//!
//! Resolves a monthly climate series for a location from an ordered chain
//! of sources (uploaded CSV, the Open-Meteo ERA5 archive, a synthetic
//! generator), normalizes it into twelve conceptual heights and derives
//! the tower extents of a parametric 3D model.
//!
//! # Examples
//!
//! ```rust,no_run
//! use bioclima::{Bioclima, BioclimaError, LatLon};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), BioclimaError> {
//!     let client = Bioclima::new();
//!     let design = client
//!         .design()
//!         .location(LatLon(19.4326, -99.1332))
//!         .year(2020)
//!         .call()
//!         .await?;
//!
//!     println!("source: {}", design.provenance);
//!     for warning in &design.warnings {
//!         println!("note: {warning}");
//!     }
//!     println!("conceptual heights: {:?}", design.heights.values());
//!     Ok(())
//! }
//! ```

mod aggregate;
mod bioclima;
mod error;
mod fetch;
mod geocode;
mod normalize;
mod pipeline;
mod sources;
mod towers;
mod types;

pub use bioclima::Bioclima;
pub use error::BioclimaError;

pub use aggregate::error::AggregationError;
pub use aggregate::monthly::aggregate_monthly;

pub use fetch::archive_client::{ArchiveFetcher, ARCHIVE_URL, DAILY_VARIABLES};
pub use fetch::error::FetchError;
pub use fetch::retry::{RetryPolicy, Sleeper, TokioSleeper};

pub use geocode::{search_place, GeocodeError, Place};

pub use normalize::conceptual_heights;

pub use pipeline::{ClimateDesign, DesignPipeline, PipelineState, SourceWarning};

pub use sources::csv::parse_monthly_csv;
pub use sources::error::{CsvSeriesError, SourceError};
pub use sources::synthetic::synthetic_series;

pub use towers::{tower_extents, Tower, TowerLayout};

pub use types::daily::{DailyRecord, DailySeries};
pub use types::heights::HeightSeries;
pub use types::location::LatLon;
pub use types::monthly::{MonthlySeries, SeriesLengthError, MONTH_LABELS};
pub use types::provenance::Provenance;
pub use types::request::{last_complete_year, FetchRequest, MIN_ARCHIVE_YEAR};
