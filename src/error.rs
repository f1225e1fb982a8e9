use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid trip request: {0}")]
    Validation(String),

    #[error("no geocoding result for {0:?}")]
    GeocodeNotFound(String),

    #[error("route unavailable: {0}")]
    RouteUnavailable(String),

    #[error("network failure: {0}")]
    Network(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// The single message shown on the trip form for a failed submission.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => format!("Please check the trip details: {msg}."),
            AppError::GeocodeNotFound(place) => {
                format!("Could not find a location named \"{place}\".")
            }
            AppError::RouteUnavailable(_) => {
                "No driving route could be found between pickup and dropoff.".to_string()
            }
            AppError::Network(_) => "Error fetching route. Please check your network.".to_string(),
            AppError::NotFound(_) | AppError::Conflict(_) | AppError::Internal(_) => {
                "Failed to create trip. Please try again.".to_string()
            }
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "validation",
            AppError::GeocodeNotFound(_) => "geocode_not_found",
            AppError::RouteUnavailable(_) => "route_unavailable",
            AppError::Network(_) => "network",
            AppError::NotFound(_) => "not_found",
            AppError::Conflict(_) => "conflict",
            AppError::Internal(_) => "internal",
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::GeocodeNotFound(_) | AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::RouteUnavailable(_) | AppError::Network(_) => StatusCode::BAD_GATEWAY,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.user_message(),
            "kind": self.kind(),
            "detail": self.to_string(),
        }));

        (status, body).into_response()
    }
}
