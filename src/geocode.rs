//! Free-text place search, used to resolve a query like "Puebla, México"
//! into coordinates before a design cycle starts.

use crate::types::location::LatLon;
use log::info;
use serde::Deserialize;
use thiserror::Error;

const GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("geocoding request failed")]
    Network(#[from] reqwest::Error),
}

/// A resolved place candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub name: String,
    pub country: Option<String>,
    pub location: LatLon,
}

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    name: String,
    latitude: f64,
    longitude: f64,
    country: Option<String>,
}

impl From<GeocodingResult> for Place {
    fn from(result: GeocodingResult) -> Self {
        Place {
            name: result.name,
            country: result.country,
            location: LatLon(result.latitude, result.longitude),
        }
    }
}

/// Resolves a free-text place query to up to five candidates, best match
/// first. An unknown place is an empty list, not an error.
///
/// # Errors
///
/// [`GeocodeError::Network`] when the request or status is bad or the
/// payload cannot be decoded.
pub async fn search_place(query: &str) -> Result<Vec<Place>, GeocodeError> {
    let response = reqwest::Client::new()
        .get(GEOCODING_URL)
        .query(&[
            ("name", query),
            ("count", "5"),
            ("language", "es"),
            ("format", "json"),
        ])
        .send()
        .await?
        .error_for_status()?;

    let payload: GeocodingResponse = response.json().await?;
    let places = places_from_response(payload);
    info!("geocoded '{query}' to {} candidate(s)", places.len());
    Ok(places)
}

fn places_from_response(payload: GeocodingResponse) -> Vec<Place> {
    payload
        .results
        .unwrap_or_default()
        .into_iter()
        .map(Place::from)
        .collect()
}
