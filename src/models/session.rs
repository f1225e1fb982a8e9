use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::plan::TripPlan;

/// Server-side state of one trip form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerSession {
    pub id: Uuid,
    pub loading: bool,
    pub error: Option<String>,
    pub plan: Option<TripPlan>,
    pub updated_at: DateTime<Utc>,
}

impl PlannerSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            loading: false,
            error: None,
            plan: None,
            updated_at: Utc::now(),
        }
    }

    /// Drops everything derived from the previous submission.
    pub fn begin_submit(&mut self) {
        self.loading = true;
        self.error = None;
        self.plan = None;
        self.updated_at = Utc::now();
    }

    pub fn finish(&mut self, outcome: Result<TripPlan, String>) {
        self.loading = false;
        match outcome {
            Ok(plan) => self.plan = Some(plan),
            Err(message) => self.error = Some(message),
        }
        self.updated_at = Utc::now();
    }
}

impl Default for PlannerSession {
    fn default() -> Self {
        Self::new()
    }
}
