use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::routing::post;

use crate::engine::planner::plan_trip;
use crate::error::AppError;
use crate::models::plan::TripPlan;
use crate::models::trip::TripRequest;
use crate::render::map::MapView;
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/trips/plan", post(create_plan))
        .route("/trips/map", post(create_map))
}

async fn create_plan(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<TripRequest>,
) -> Result<Json<TripPlan>, AppError> {
    let plan = plan_trip(&state, payload).await?;
    state.publish_plan(&plan, None);
    Ok(Json(plan))
}

async fn create_map(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<TripRequest>,
) -> Result<Json<MapView>, AppError> {
    let plan = plan_trip(&state, payload).await?;
    state.publish_plan(&plan, None);
    Ok(Json(MapView::from_plan(&plan, &state.icons)))
}
