//! Plan summary types and functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Plan, PlanStatus};
use crate::progress::{compute_progress, Progress};

/// Plan header together with its live progress, used for listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Plan ID
    pub id: u64,
    /// Name of the plan
    pub name: String,
    /// Optional description of the plan
    pub description: Option<String>,
    /// Plan status
    pub status: PlanStatus,
    /// Creation timestamp
    pub created_at: Timestamp,
    /// Last update timestamp
    pub updated_at: Timestamp,
    /// Progress computed from the plan's test cases
    #[serde(flatten)]
    pub progress: Progress,
}

impl From<&Plan> for PlanSummary {
    fn from(plan: &Plan) -> Self {
        Self {
            id: plan.id,
            name: plan.name.clone(),
            description: plan.description.clone(),
            status: plan.status,
            created_at: plan.created_at,
            updated_at: plan.updated_at,
            progress: plan.progress(),
        }
    }
}

impl Plan {
    /// Progress of the loaded test cases.
    pub fn progress(&self) -> Progress {
        compute_progress(self.test_cases.iter().map(|tc| tc.status))
    }
}

/// Number of rows removed by clearing the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClearSummary {
    pub plans: u64,
    pub test_cases: u64,
}
