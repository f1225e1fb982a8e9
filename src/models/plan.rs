use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::coordinate::Coordinate;
use crate::models::duty::DayLog;
use crate::models::route::Route;
use crate::models::stop::StopMarker;
use crate::models::trip::TripRequest;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripPlan {
    pub id: Uuid,
    pub request: TripRequest,
    pub pickup: Coordinate,
    pub dropoff: Coordinate,
    pub current: Coordinate,
    pub route: Route,
    pub distance_km: f64,
    pub fuel_stops: Vec<StopMarker>,
    pub rest_stops: Vec<StopMarker>,
    pub vehicle: StopMarker,
    pub log: Vec<DayLog>,
    pub created_at: DateTime<Utc>,
}

/// Compact form of a plan pushed to live subscribers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSummary {
    pub plan_id: Uuid,
    pub session_id: Option<Uuid>,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub distance_km: f64,
    pub fuel_stops: usize,
    pub rest_stops: usize,
    pub log_days: usize,
    pub created_at: DateTime<Utc>,
}

impl TripPlan {
    pub fn summary(&self, session_id: Option<Uuid>) -> PlanSummary {
        PlanSummary {
            plan_id: self.id,
            session_id,
            pickup_location: self.request.pickup_location.clone(),
            dropoff_location: self.request.dropoff_location.clone(),
            distance_km: self.distance_km,
            fuel_stops: self.fuel_stops.len(),
            rest_stops: self.rest_stops.len(),
            log_days: self.log.len(),
            created_at: self.created_at,
        }
    }
}
