//! Plan model.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{PlanStatus, TestCase};

/// A named collection of test cases with an aggregate status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// Unique identifier for the plan
    pub id: u64,

    /// Name of the plan (1-150 characters)
    pub name: String,

    /// Optional free-form description
    pub description: Option<String>,

    /// Aggregate status, maintained by the propagator
    #[serde(default)]
    pub status: PlanStatus,

    /// Timestamp when the plan was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the plan was last modified (UTC)
    pub updated_at: Timestamp,

    /// Test cases of the plan, oldest first (loaded eagerly by queries that
    /// return a single plan)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub test_cases: Vec<TestCase>,
}
