use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use crate::error::AppError;
use crate::models::trip::TripRequest;

#[async_trait]
pub trait TripStore: Send + Sync {
    async fn create_trip(&self, request: &TripRequest) -> Result<(), AppError>;
}

/// Records trips by POSTing the request fields to a remote trips endpoint.
pub struct HttpTripStore {
    client: Client,
    url: String,
}

impl HttpTripStore {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl TripStore for HttpTripStore {
    async fn create_trip(&self, request: &TripRequest) -> Result<(), AppError> {
        let response = self.client.post(&self.url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Network(format!(
                "trip store responded with {status}"
            )));
        }

        info!(
            pickup = %request.pickup_location,
            dropoff = %request.dropoff_location,
            "trip recorded"
        );
        Ok(())
    }
}

/// Used when no trip store is configured.
pub struct DisabledTripStore;

#[async_trait]
impl TripStore for DisabledTripStore {
    async fn create_trip(&self, request: &TripRequest) -> Result<(), AppError> {
        debug!(
            pickup = %request.pickup_location,
            "trip store disabled; not recording trip"
        );
        Ok(())
    }
}
