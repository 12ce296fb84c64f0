//! The main entry point for producing a bioclimatic design from weather
//! data. Wraps the source pipeline behind a builder-style API.

use crate::error::BioclimaError;
use crate::fetch::archive_client::ArchiveFetcher;
use crate::fetch::retry::RetryPolicy;
use crate::pipeline::{ClimateDesign, DesignPipeline, PipelineState};
use crate::types::location::LatLon;
use crate::types::request::{last_complete_year, FetchRequest};
use bon::bon;

/// The client facade: runs design cycles and exposes their state.
///
/// # Examples
///
/// ```rust
/// # use bioclima::{Bioclima, BioclimaError, LatLon};
/// # async fn run() -> Result<(), BioclimaError> {
/// let client = Bioclima::new();
/// let design = client
///     .design()
///     .location(LatLon(19.4326, -99.1332))
///     .year(2020)
///     .call()
///     .await?;
/// println!("heights from {}: {:?}", design.provenance, design.heights);
/// # Ok(())
/// # }
/// ```
pub struct Bioclima {
    pipeline: DesignPipeline,
}

#[bon]
impl Bioclima {
    /// Creates a client with the default retry policy.
    pub fn new() -> Self {
        Self::with_retry_policy(RetryPolicy::default())
    }

    /// Creates a client whose remote fetches follow a custom retry policy.
    pub fn with_retry_policy(policy: RetryPolicy) -> Self {
        Self {
            pipeline: DesignPipeline::new(ArchiveFetcher::with_policy(policy)),
        }
    }

    /// Runs one design cycle for a location, resolving the monthly series
    /// from the highest-priority source available.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.location(LatLon)`: **Required.** The coordinates to design for.
    /// * `.year(Option<i32>)`: Optional. Archive year to request. Defaults
    ///   to the last complete calendar year.
    /// * `.csv(Option<Vec<u8>>)`: Optional. Raw bytes of an uploaded
    ///   monthly CSV; when present and valid it wins over every other
    ///   source.
    /// * `.use_remote(Option<bool>)`: Optional. Whether the remote archive
    ///   participates in the chain. Defaults to `true`.
    ///
    /// # Errors
    ///
    /// Returns [`BioclimaError::InvalidLatitude`],
    /// [`BioclimaError::InvalidLongitude`] or
    /// [`BioclimaError::YearOutOfRange`] for a bad request, and
    /// [`BioclimaError::Busy`] while another cycle is in flight. Source
    /// failures never surface here; they degrade to
    /// [`crate::SourceWarning`]s on the returned design.
    #[builder]
    pub async fn design(
        &self,
        location: LatLon,
        year: Option<i32>,
        csv: Option<Vec<u8>>,
        use_remote: Option<bool>,
    ) -> Result<ClimateDesign, BioclimaError> {
        let year = year.unwrap_or_else(last_complete_year);
        let use_remote = use_remote.unwrap_or(true);
        let request = FetchRequest::new(location, year)?;
        self.pipeline.run(request, csv.as_deref(), use_remote).await
    }

    /// Re-runs the remote download of the previous cycle, skipping any CSV.
    ///
    /// # Errors
    ///
    /// [`BioclimaError::NoPreviousRequest`] when no cycle ran yet, or
    /// [`BioclimaError::Busy`] while one is in flight.
    pub async fn retry_download(&self) -> Result<ClimateDesign, BioclimaError> {
        self.pipeline.retry_download().await
    }

    /// The phase the current (or last) design cycle is in.
    pub fn state(&self) -> PipelineState {
        self.pipeline.state()
    }
}

impl Default for Bioclima {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::provenance::Provenance;

    const CSV: &str = "tmax,tmin,viento,radiacion\n\
        25,12,3,150\n27,13,3.5,160\n30,15,4,180\n32,17,4.5,200\n\
        35,19,5,220\n36,20,5.2,230\n34,19,4.8,210\n33,18,4.5,200\n\
        31,16,4.2,190\n29,14,3.8,170\n27,13,3.5,160\n25,12,3,150\n";

    #[tokio::test]
    async fn designs_from_an_uploaded_csv() -> Result<(), BioclimaError> {
        let client = Bioclima::new();
        let design = client
            .design()
            .location(LatLon(19.4326, -99.1332))
            .year(2020)
            .csv(CSV.as_bytes().to_vec())
            .use_remote(false)
            .call()
            .await?;

        assert_eq!(design.provenance, Provenance::Uploaded);
        assert_eq!(client.state(), PipelineState::Ready);
        Ok(())
    }

    #[tokio::test]
    async fn designs_synthetically_without_sources() -> Result<(), BioclimaError> {
        let client = Bioclima::new();
        let design = client
            .design()
            .location(LatLon(-35.0, 150.0))
            .use_remote(false)
            .call()
            .await?;

        assert_eq!(design.provenance, Provenance::Synthetic);
        assert!(design.warnings.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn rejects_invalid_coordinates() {
        let client = Bioclima::new();
        let result = client
            .design()
            .location(LatLon(91.0, 0.0))
            .use_remote(false)
            .call()
            .await;

        assert!(matches!(result, Err(BioclimaError::InvalidLatitude(_))));
    }

    #[tokio::test]
    async fn retry_without_a_cycle_is_an_error() {
        let client = Bioclima::new();
        let result = client.retry_download().await;
        assert!(matches!(result, Err(BioclimaError::NoPreviousRequest)));
    }
}
