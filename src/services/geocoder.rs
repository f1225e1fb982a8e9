use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::AppError;
use crate::models::coordinate::Coordinate;

#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolves a free-text place to the first matching coordinate.
    async fn geocode(&self, place: &str) -> Result<Coordinate, AppError>;
}

/// Client for a Nominatim-compatible `/search` endpoint.
pub struct NominatimGeocoder {
    client: Client,
    base_url: String,
}

impl NominatimGeocoder {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResult {
    pub(crate) lat: String,
    pub(crate) lon: String,
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn geocode(&self, place: &str) -> Result<Coordinate, AppError> {
        let url = format!("{}/search", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("q", place), ("format", "json"), ("limit", "1")])
            .send()
            .await?
            .error_for_status()?;

        let results: Vec<SearchResult> = response.json().await?;
        debug!(place, results = results.len(), "geocoder responded");

        first_match(place, results)
    }
}

pub(crate) fn first_match(place: &str, results: Vec<SearchResult>) -> Result<Coordinate, AppError> {
    let first = results
        .into_iter()
        .next()
        .ok_or_else(|| AppError::GeocodeNotFound(place.to_string()))?;

    let lat = parse_degrees(&first.lat, "lat")?;
    let lon = parse_degrees(&first.lon, "lon")?;
    Ok(Coordinate::new(lat, lon))
}

fn parse_degrees(raw: &str, field: &str) -> Result<f64, AppError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|err| AppError::Network(format!("geocoder returned invalid {field} {raw:?}: {err}")))
}
