//! The invocation controller: ordered source selection, state tracking and
//! normalization for one design cycle.

use crate::aggregate::monthly::aggregate_monthly;
use crate::error::BioclimaError;
use crate::fetch::archive_client::ArchiveFetcher;
use crate::normalize::conceptual_heights;
use crate::sources::csv::parse_monthly_csv;
use crate::sources::error::SourceError;
use crate::sources::synthetic::synthetic_series;
use crate::types::heights::HeightSeries;
use crate::types::location::LatLon;
use crate::types::monthly::MonthlySeries;
use crate::types::provenance::Provenance;
use crate::types::request::FetchRequest;
use log::{info, warn};
use std::fmt;
use std::sync::Mutex;

/// Observable phase of the current design cycle. Replaces the original
/// ambient busy flag: the controller owns it, the UI polls it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    Fetching,
    Aggregating,
    Normalizing,
    Ready,
    Failed,
}

/// One source that failed before the pipeline fell through to the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceWarning {
    pub source: Provenance,
    pub reason: String,
}

impl fmt::Display for SourceWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} unavailable: {}", self.source, self.reason)
    }
}

/// Output of a completed cycle: the monthly series for charting, the
/// heights for the 3D model, where the data came from, and which sources
/// were skipped over on the way there.
#[derive(Debug, Clone, PartialEq)]
pub struct ClimateDesign {
    pub monthly: MonthlySeries,
    pub heights: HeightSeries,
    pub provenance: Provenance,
    pub warnings: Vec<SourceWarning>,
}

/// A fallible provider in the ordered source chain. The synthetic
/// generator is not represented here: it is total and always terminates
/// the chain.
enum DataSource<'a> {
    Csv(&'a [u8]),
    Remote(FetchRequest),
}

impl DataSource<'_> {
    fn provenance(&self) -> Provenance {
        match self {
            DataSource::Csv(_) => Provenance::Uploaded,
            DataSource::Remote(_) => Provenance::Remote,
        }
    }
}

/// Runs design cycles one at a time. Each cycle works on freshly
/// constructed data, so nothing is shared or aliased across invocations;
/// the guard below only rejects overlap instead of queueing it.
pub struct DesignPipeline {
    fetcher: ArchiveFetcher,
    state: Mutex<PipelineState>,
    last_request: Mutex<Option<FetchRequest>>,
    cycle_guard: tokio::sync::Mutex<()>,
}

impl DesignPipeline {
    pub fn new(fetcher: ArchiveFetcher) -> Self {
        Self {
            fetcher,
            state: Mutex::new(PipelineState::Idle),
            last_request: Mutex::new(None),
            cycle_guard: tokio::sync::Mutex::new(()),
        }
    }

    /// The phase the pipeline is currently in.
    pub fn state(&self) -> PipelineState {
        *lock(&self.state)
    }

    /// Runs one full cycle: CSV (when supplied), then the remote archive
    /// (when enabled), then the synthetic generator. The request is
    /// remembered for [`DesignPipeline::retry_download`].
    ///
    /// # Errors
    ///
    /// Only [`BioclimaError::Busy`] when a cycle is already in flight.
    /// Source failures degrade to warnings, never to errors.
    pub async fn run(
        &self,
        request: FetchRequest,
        csv: Option<&[u8]>,
        use_remote: bool,
    ) -> Result<ClimateDesign, BioclimaError> {
        let _guard = self
            .cycle_guard
            .try_lock()
            .map_err(|_| BioclimaError::Busy)?;
        *lock(&self.last_request) = Some(request);

        let mut plan = Vec::new();
        if let Some(bytes) = csv {
            plan.push(DataSource::Csv(bytes));
        }
        if use_remote {
            plan.push(DataSource::Remote(request));
        }
        Ok(self.execute(plan, request.location).await)
    }

    /// Re-enters the remote source directly, bypassing any CSV, with the
    /// location and year of the previous cycle.
    ///
    /// # Errors
    ///
    /// [`BioclimaError::Busy`] while a cycle is in flight, or
    /// [`BioclimaError::NoPreviousRequest`] when nothing ran yet.
    pub async fn retry_download(&self) -> Result<ClimateDesign, BioclimaError> {
        let _guard = self
            .cycle_guard
            .try_lock()
            .map_err(|_| BioclimaError::Busy)?;
        let Some(request) = *lock(&self.last_request) else {
            self.set_state(PipelineState::Failed);
            return Err(BioclimaError::NoPreviousRequest);
        };

        let plan = vec![DataSource::Remote(request)];
        Ok(self.execute(plan, request.location).await)
    }

    async fn execute(&self, plan: Vec<DataSource<'_>>, location: LatLon) -> ClimateDesign {
        let mut warnings = Vec::new();

        for source in plan {
            let provenance = source.provenance();
            match self.acquire(source).await {
                Ok(monthly) => return self.finish(monthly, provenance, warnings),
                Err(error) => {
                    warn!("{provenance} source failed: {error}");
                    warnings.push(SourceWarning {
                        source: provenance,
                        reason: error.to_string(),
                    });
                }
            }
        }

        // Terminal fallback: total, cannot fail.
        self.finish(synthetic_series(location), Provenance::Synthetic, warnings)
    }

    async fn acquire(&self, source: DataSource<'_>) -> Result<MonthlySeries, SourceError> {
        match source {
            DataSource::Csv(bytes) => Ok(parse_monthly_csv(bytes)?),
            DataSource::Remote(request) => {
                self.set_state(PipelineState::Fetching);
                let daily = self.fetcher.fetch_daily_year(request).await?;
                self.set_state(PipelineState::Aggregating);
                Ok(aggregate_monthly(&daily)?)
            }
        }
    }

    fn finish(
        &self,
        monthly: MonthlySeries,
        provenance: Provenance,
        warnings: Vec<SourceWarning>,
    ) -> ClimateDesign {
        self.set_state(PipelineState::Normalizing);
        let heights = conceptual_heights(&monthly);
        self.set_state(PipelineState::Ready);
        info!("monthly series ready from {provenance}");
        ClimateDesign {
            monthly,
            heights,
            provenance,
            warnings,
        }
    }

    fn set_state(&self, state: PipelineState) {
        *lock(&self.state) = state;
    }
}

/// A poisoned lock only means a panicking test observer; the state itself
/// stays usable.
fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
