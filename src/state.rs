use chrono::{Duration, Utc};
use dashmap::DashMap;
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::engine::planner::PlannerSettings;
use crate::models::plan::{PlanSummary, TripPlan};
use crate::models::session::PlannerSession;
use crate::observability::metrics::Metrics;
use crate::render::map::IconConfig;
use crate::services::Services;

pub struct AppState {
    pub sessions: DashMap<Uuid, PlannerSession>,
    pub services: Services,
    pub settings: PlannerSettings,
    pub icons: IconConfig,
    pub plan_events_tx: broadcast::Sender<PlanSummary>,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(
        services: Services,
        settings: PlannerSettings,
        icons: IconConfig,
        event_buffer_size: usize,
    ) -> Self {
        let (plan_events_tx, _unused_rx) = broadcast::channel(event_buffer_size);

        Self {
            sessions: DashMap::new(),
            services,
            settings,
            icons,
            plan_events_tx,
            metrics: Metrics::new(),
        }
    }

    /// Drops sessions untouched for longer than `max_idle`. Sessions with a
    /// submission in flight are kept.
    pub fn prune_idle_sessions(&self, max_idle: Duration) -> usize {
        let cutoff = Utc::now() - max_idle;
        let mut removed = 0;

        self.sessions.retain(|_, session| {
            let keep = session.loading || session.updated_at >= cutoff;
            if !keep {
                removed += 1;
            }
            keep
        });

        self.metrics.active_sessions.sub(removed as i64);
        removed
    }

    pub fn publish_plan(&self, plan: &TripPlan, session_id: Option<Uuid>) {
        // No subscribers is not an error.
        let _ = self.plan_events_tx.send(plan.summary(session_id));
    }
}
