use crate::error::BioclimaError;
use crate::types::location::LatLon;
use chrono::{Datelike, Utc};

/// First year covered by the Open-Meteo ERA5 archive.
pub const MIN_ARCHIVE_YEAR: i32 = 1940;

/// The most recent year for which a full calendar year of archive data
/// exists, i.e. the year before the current one.
pub fn last_complete_year() -> i32 {
    Utc::now().year() - 1
}

/// A validated request for one calendar year of daily weather data at a
/// location. Constructed per invocation and discarded afterwards; never
/// cached across cycles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FetchRequest {
    pub location: LatLon,
    pub year: i32,
}

impl FetchRequest {
    /// Validates coordinate bounds and archive coverage before a cycle starts.
    ///
    /// # Errors
    ///
    /// Returns [`BioclimaError::InvalidLatitude`] or
    /// [`BioclimaError::InvalidLongitude`] for out-of-range coordinates, and
    /// [`BioclimaError::YearOutOfRange`] for years the archive cannot cover.
    pub fn new(location: LatLon, year: i32) -> Result<Self, BioclimaError> {
        if !(-90.0..=90.0).contains(&location.0) {
            return Err(BioclimaError::InvalidLatitude(location.0));
        }
        if !(-180.0..=180.0).contains(&location.1) {
            return Err(BioclimaError::InvalidLongitude(location.1));
        }
        let max = Utc::now().year();
        if !(MIN_ARCHIVE_YEAR..=max).contains(&year) {
            return Err(BioclimaError::YearOutOfRange {
                year,
                min: MIN_ARCHIVE_YEAR,
                max,
            });
        }
        Ok(Self { location, year })
    }
}
