use std::time::Instant;

use chrono::Utc;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::engine::duty_log::{DEFAULT_DAY_HOURS, build_log, group_by_day};
use crate::engine::stops::{DEFAULT_FUEL_INTERVAL_KM, StopPlacement, fuel_stops, rest_stops};
use crate::error::AppError;
use crate::models::coordinate::Coordinate;
use crate::models::plan::TripPlan;
use crate::models::route::Route;
use crate::models::stop::{StopKind, StopMarker};
use crate::models::trip::TripRequest;
use crate::state::AppState;

#[derive(Debug, Clone, Copy)]
pub struct PlannerSettings {
    pub fuel_interval_km: f64,
    pub stop_placement: StopPlacement,
    pub day_hours: u32,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            fuel_interval_km: DEFAULT_FUEL_INTERVAL_KM,
            stop_placement: StopPlacement::default(),
            day_hours: DEFAULT_DAY_HOURS,
        }
    }
}

/// Runs one submission end to end. The first failing step aborts the rest.
pub async fn plan_trip(state: &AppState, request: TripRequest) -> Result<TripPlan, AppError> {
    let start = Instant::now();
    let result = resolve_and_derive(state, request).await;
    let elapsed = start.elapsed().as_secs_f64();

    let outcome = match &result {
        Ok(plan) => {
            info!(
                plan_id = %plan.id,
                distance_km = plan.distance_km,
                fuel_stops = plan.fuel_stops.len(),
                rest_stops = plan.rest_stops.len(),
                "trip planned"
            );
            "success"
        }
        Err(AppError::Validation(msg)) => {
            warn!(reason = %msg, "trip request rejected");
            "invalid"
        }
        Err(err) => {
            error!(error = %err, kind = err.kind(), "trip planning failed");
            "error"
        }
    };

    state
        .metrics
        .trip_plan_latency_seconds
        .with_label_values(&[outcome])
        .observe(elapsed);
    state
        .metrics
        .trip_plans_total
        .with_label_values(&[outcome])
        .inc();

    result
}

async fn resolve_and_derive(state: &AppState, request: TripRequest) -> Result<TripPlan, AppError> {
    request.validate()?;

    let recorded = state.services.trip_store.create_trip(&request).await;
    state.metrics.record_call("trip_store", &recorded);
    recorded?;

    let pickup = geocode(state, &request.pickup_location).await?;
    let dropoff = geocode(state, &request.dropoff_location).await?;
    let current = geocode(state, &request.current_location).await?;

    let route = state.services.router.route(pickup, dropoff).await;
    state.metrics.record_call("router", &route);
    let route = route?;

    Ok(derive_plan(
        &state.settings,
        request,
        [pickup, dropoff, current],
        route,
    ))
}

async fn geocode(state: &AppState, place: &str) -> Result<Coordinate, AppError> {
    let result = state.services.geocoder.geocode(place).await;
    state.metrics.record_call("geocoder", &result);
    result
}

/// Synthesizes stops and the duty log from a resolved route.
/// `places` is `[pickup, dropoff, current]`.
pub fn derive_plan(
    settings: &PlannerSettings,
    request: TripRequest,
    places: [Coordinate; 3],
    route: Route,
) -> TripPlan {
    let [pickup, dropoff, current] = places;

    let fuel = fuel_stops(&route, settings.fuel_interval_km, settings.stop_placement);
    let log = build_log(
        request.cycle_hours_used,
        request.is_at_dropoff(),
        settings.day_hours,
    );
    let rest = rest_stops(&route, &log, request.cycle_hours_used);

    TripPlan {
        id: Uuid::new_v4(),
        distance_km: route.distance_km(),
        pickup,
        dropoff,
        current,
        fuel_stops: fuel,
        rest_stops: rest,
        vehicle: StopMarker::new(current, StopKind::Vehicle),
        log: group_by_day(log, settings.day_hours),
        route,
        request,
        created_at: Utc::now(),
    }
}
