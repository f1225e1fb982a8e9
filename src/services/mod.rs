pub mod geocoder;
pub mod routing;
pub mod trip_store;

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use crate::config::Config;
use crate::error::AppError;
use crate::services::geocoder::{Geocoder, NominatimGeocoder};
use crate::services::routing::{OsrmRouter, RouteProvider};
use crate::services::trip_store::{DisabledTripStore, HttpTripStore, TripStore};

/// The external collaborators a trip plan is built from.
#[derive(Clone)]
pub struct Services {
    pub geocoder: Arc<dyn Geocoder>,
    pub router: Arc<dyn RouteProvider>,
    pub trip_store: Arc<dyn TripStore>,
}

impl Services {
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(config.http_user_agent.clone())
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()
            .map_err(|err| AppError::Internal(format!("failed to build http client: {err}")))?;

        let trip_store: Arc<dyn TripStore> = match &config.trip_store_url {
            Some(url) => Arc::new(HttpTripStore::new(client.clone(), url.clone())),
            None => Arc::new(DisabledTripStore),
        };

        Ok(Self {
            geocoder: Arc::new(NominatimGeocoder::new(client.clone(), config.geocoder_url.clone())),
            router: Arc::new(OsrmRouter::new(client, config.router_url.clone())),
            trip_store,
        })
    }
}
