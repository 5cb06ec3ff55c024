//! Test case model.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Priority, TestCaseStatus};

/// An individual checkable item belonging to exactly one plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TestCase {
    /// Unique identifier for the test case
    pub id: u64,

    /// ID of the owning plan; never changes after creation
    pub plan_id: u64,

    /// Name of the test case (1-150 characters)
    pub name: String,

    /// Optional free-form description
    pub description: Option<String>,

    /// Optional kind of validation, e.g. "manual" or "regression"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_type: Option<String>,

    /// Execution priority
    #[serde(default)]
    pub priority: Priority,

    /// Current outcome
    #[serde(default)]
    pub status: TestCaseStatus,

    /// Timestamp when the test case was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the test case was last updated (UTC)
    pub updated_at: Timestamp,
}
