//! Status and priority enumerations.
//!
//! The persisted text of every variant is fixed (`PENDING`, `IN_PROGRESS`,
//! `P1`, ...) so that databases written by earlier versions of the tracker
//! keep loading. Parsing is case-insensitive; formatting always produces the
//! canonical upper-case spelling.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Aggregate status of a plan, derived from its test cases.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlanStatus {
    /// No test case has been worked on yet
    #[default]
    Pending,

    /// Some, but not all, test cases are finished
    InProgress,

    /// Every test case is finished
    Completed,
}

impl PlanStatus {
    /// All plan statuses in lifecycle order.
    pub const ALL: [PlanStatus; 3] = [
        PlanStatus::Pending,
        PlanStatus::InProgress,
        PlanStatus::Completed,
    ];

    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanStatus::Pending => "PENDING",
            PlanStatus::InProgress => "IN_PROGRESS",
            PlanStatus::Completed => "COMPLETED",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// ```rust
    /// use checkpoint_core::models::PlanStatus;
    ///
    /// assert_eq!(PlanStatus::Completed.with_icon(), "✓ Completed");
    /// assert_eq!(PlanStatus::InProgress.with_icon(), "➤ In Progress");
    /// assert_eq!(PlanStatus::Pending.with_icon(), "○ Pending");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            PlanStatus::Completed => "✓ Completed",
            PlanStatus::InProgress => "➤ In Progress",
            PlanStatus::Pending => "○ Pending",
        }
    }
}

impl FromStr for PlanStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PENDING" => Ok(PlanStatus::Pending),
            "IN_PROGRESS" => Ok(PlanStatus::InProgress),
            "COMPLETED" => Ok(PlanStatus::Completed),
            _ => Err(format!("Invalid plan status: {s}")),
        }
    }
}

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single test case.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TestCaseStatus {
    /// Not executed yet
    #[default]
    Pending,

    /// Executed and passed
    Passed,

    /// Executed and failed
    Failed,

    /// Not applicable for this run
    Na,
}

impl TestCaseStatus {
    /// All test case statuses, pending first.
    pub const ALL: [TestCaseStatus; 4] = [
        TestCaseStatus::Pending,
        TestCaseStatus::Passed,
        TestCaseStatus::Failed,
        TestCaseStatus::Na,
    ];

    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TestCaseStatus::Pending => "PENDING",
            TestCaseStatus::Passed => "PASSED",
            TestCaseStatus::Failed => "FAILED",
            TestCaseStatus::Na => "NA",
        }
    }

    /// Whether the case counts towards plan progress. Only `PENDING` is
    /// unfinished; a failed or not-applicable case is still finished.
    pub fn is_completed(&self) -> bool {
        !matches!(self, TestCaseStatus::Pending)
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// ```rust
    /// use checkpoint_core::models::TestCaseStatus;
    ///
    /// assert_eq!(TestCaseStatus::Passed.with_icon(), "✓ Passed");
    /// assert_eq!(TestCaseStatus::Failed.with_icon(), "✗ Failed");
    /// assert_eq!(TestCaseStatus::Na.with_icon(), "– N/A");
    /// assert_eq!(TestCaseStatus::Pending.with_icon(), "○ Pending");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            TestCaseStatus::Passed => "✓ Passed",
            TestCaseStatus::Failed => "✗ Failed",
            TestCaseStatus::Na => "– N/A",
            TestCaseStatus::Pending => "○ Pending",
        }
    }
}

impl FromStr for TestCaseStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PENDING" => Ok(TestCaseStatus::Pending),
            "PASSED" => Ok(TestCaseStatus::Passed),
            "FAILED" => Ok(TestCaseStatus::Failed),
            "NA" => Ok(TestCaseStatus::Na),
            _ => Err(format!("Invalid test case status: {s}")),
        }
    }
}

impl fmt::Display for TestCaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Execution priority of a test case.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, Default,
)]
pub enum Priority {
    /// Highest priority
    P1,

    /// Normal priority
    #[default]
    P2,

    /// Lowest priority
    P3,
}

impl Priority {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::P1 => "P1",
            Priority::P2 => "P2",
            Priority::P3 => "P3",
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "P1" => Ok(Priority::P1),
            "P2" => Ok(Priority::P2),
            "P3" => Ok(Priority::P3),
            _ => Err(format!("Invalid priority: {s}")),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
