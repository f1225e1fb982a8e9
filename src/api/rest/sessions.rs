use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use tracing::info;
use uuid::Uuid;

use crate::engine::planner::plan_trip;
use crate::error::AppError;
use crate::models::session::PlannerSession;
use crate::models::trip::TripRequest;
use crate::render::map::MapView;
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/sessions", post(create_session))
        .route("/sessions/:id", get(get_session).delete(delete_session))
        .route("/sessions/:id/submit", post(submit))
        .route("/sessions/:id/map", get(session_map))
}

async fn create_session(State(state): State<Arc<AppState>>) -> Json<PlannerSession> {
    let session = PlannerSession::new();
    state.sessions.insert(session.id, session.clone());
    state.metrics.active_sessions.inc();

    info!(session_id = %session.id, "session created");
    Json(session)
}

async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<PlannerSession>, AppError> {
    let session = state
        .sessions
        .get(&id)
        .ok_or_else(|| session_not_found(id))?;

    Ok(Json(session.value().clone()))
}

async fn delete_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state
        .sessions
        .remove(&id)
        .ok_or_else(|| session_not_found(id))?;
    state.metrics.active_sessions.dec();

    Ok(StatusCode::NO_CONTENT)
}

/// Clears the previous result, runs the pipeline and stores either the plan or
/// the user-facing error. Planning failures are reported on the session, not as
/// an error response.
async fn submit(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<TripRequest>,
) -> Result<Json<PlannerSession>, AppError> {
    {
        let mut session = state
            .sessions
            .get_mut(&id)
            .ok_or_else(|| session_not_found(id))?;

        if session.loading {
            return Err(AppError::Conflict(format!(
                "session {id} is already processing a trip"
            )));
        }
        session.begin_submit();
    }

    // Detached so a client disconnect cannot leave the session loading.
    let task = tokio::spawn(run_submission(state.clone(), id, payload));
    task.await
        .map_err(|err| AppError::Internal(format!("trip planning task failed: {err}")))?
        .map(Json)
}

async fn run_submission(
    state: Arc<AppState>,
    id: Uuid,
    payload: TripRequest,
) -> Result<PlannerSession, AppError> {
    let outcome = plan_trip(&state, payload).await;
    if let Ok(plan) = &outcome {
        state.publish_plan(plan, Some(id));
    }

    // The session may have been deleted while the pipeline ran.
    let mut session = state
        .sessions
        .get_mut(&id)
        .ok_or_else(|| session_not_found(id))?;
    session.finish(outcome.map_err(|err| err.user_message()));

    Ok(session.clone())
}

async fn session_map(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<MapView>, AppError> {
    let session = state
        .sessions
        .get(&id)
        .ok_or_else(|| session_not_found(id))?;

    let plan = session
        .plan
        .as_ref()
        .ok_or_else(|| AppError::NotFound(format!("session {id} has no trip plan")))?;

    Ok(Json(MapView::from_plan(plan, &state.icons)))
}

fn session_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("session {id} not found"))
}
