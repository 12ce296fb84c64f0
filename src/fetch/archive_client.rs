//! HTTP client for the Open-Meteo ERA5 daily archive.

use crate::fetch::error::FetchError;
use crate::fetch::payload::{daily_series_from_response, ArchiveResponse};
use crate::fetch::retry::{run_with_retry, RetryPolicy, Sleeper, TokioSleeper};
use crate::types::daily::DailySeries;
use crate::types::request::FetchRequest;
use log::{debug, info, warn};
use reqwest::Client;
use std::time::Duration;

/// Historical weather archive endpoint.
pub const ARCHIVE_URL: &str = "https://archive-api.open-meteo.com/v1/era5";

/// Daily variables requested for every fetch, in payload order.
pub const DAILY_VARIABLES: &str =
    "temperature_2m_max,temperature_2m_min,wind_speed_10m_max,shortwave_radiation_sum";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Fetches one calendar year of daily weather data for a location, retrying
/// transient failures with bounded exponential backoff. Performs network I/O
/// only; nothing is cached or written to disk.
pub struct ArchiveFetcher {
    http: Client,
    base_url: String,
    policy: RetryPolicy,
    sleeper: Box<dyn Sleeper>,
}

impl ArchiveFetcher {
    pub fn new() -> Self {
        Self::with_policy(RetryPolicy::default())
    }

    pub fn with_policy(policy: RetryPolicy) -> Self {
        Self {
            http: Client::new(),
            base_url: ARCHIVE_URL.to_string(),
            policy,
            sleeper: Box::new(TokioSleeper),
        }
    }

    /// Points the fetcher at a different archive host. Useful against a
    /// local stand-in server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetches daily tmax, tmin, wind speed and radiation for the full
    /// calendar year of the request.
    ///
    /// # Errors
    ///
    /// Returns the last [`FetchError`] once the retry budget is exhausted,
    /// or immediately for 4xx responses and malformed payloads.
    pub async fn fetch_daily_year(&self, request: FetchRequest) -> Result<DailySeries, FetchError> {
        let url = self.request_url(&request);
        info!("fetching daily archive data from {url}");
        let series = run_with_retry(&self.policy, self.sleeper.as_ref(), |attempt| {
            debug!("archive request attempt {attempt} for {url}");
            self.request_once(&url)
        })
        .await?;
        info!(
            "fetched {} daily records for year {}",
            series.len(),
            request.year
        );
        Ok(series)
    }

    fn request_url(&self, request: &FetchRequest) -> String {
        format!(
            "{base}?latitude={lat}&longitude={lon}&start_date={year}-01-01&end_date={year}-12-31&daily={vars}&timezone=auto",
            base = self.base_url,
            lat = request.location.0,
            lon = request.location.1,
            year = request.year,
            vars = DAILY_VARIABLES,
        )
    }

    async fn request_once(&self, url: &str) -> Result<DailySeries, FetchError> {
        let response = self
            .http
            .get(url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    FetchError::Timeout(url.to_string())
                } else {
                    FetchError::Network(url.to_string(), e)
                }
            })?;

        let status = response.status();
        if status.is_server_error() {
            warn!("archive returned {status} for {url}");
            return Err(FetchError::ServerError {
                url: url.to_string(),
                status,
            });
        }
        if status.is_client_error() {
            warn!("archive rejected request with {status} for {url}");
            return Err(FetchError::RequestRejected {
                url: url.to_string(),
                status,
            });
        }

        let payload: ArchiveResponse = response
            .json()
            .await
            .map_err(|e| FetchError::MalformedResponse(format!("invalid JSON payload: {e}")))?;
        daily_series_from_response(payload)
    }
}

impl Default for ArchiveFetcher {
    fn default() -> Self {
        Self::new()
    }
}
