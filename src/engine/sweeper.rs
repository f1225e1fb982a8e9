use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use crate::state::AppState;

/// Periodically drops planner sessions nobody has touched for `max_idle`.
pub async fn run_session_sweeper(state: Arc<AppState>, max_idle: Duration, every: Duration) {
    let max_idle = chrono::Duration::from_std(max_idle).unwrap_or_else(|_| chrono::Duration::days(36_500));
    let mut ticker = tokio::time::interval(every);

    info!(idle_secs = max_idle.num_seconds(), "session sweeper started");

    loop {
        ticker.tick().await;

        let removed = state.prune_idle_sessions(max_idle);
        if removed > 0 {
            info!(removed, remaining = state.sessions.len(), "idle sessions pruned");
        } else {
            debug!(remaining = state.sessions.len(), "no idle sessions");
        }
    }
}
