//! Progress calculation for plans.
//!
//! Progress is a pure function of the statuses of a plan's test cases: every
//! status other than `PENDING` counts as completed, so a failed or
//! not-applicable case moves a plan forward just like a passed one. The same
//! definition drives plan status derivation and everything shown to users.
//!
//! ```rust
//! use checkpoint_core::{
//!     models::{PlanStatus, TestCaseStatus::*},
//!     progress::compute_progress,
//! };
//!
//! let progress = compute_progress([Passed, Passed, Passed, Pending]);
//! assert_eq!(progress.progress_percent, 75);
//! assert_eq!(
//!     progress.suggested_plan_status(PlanStatus::Pending),
//!     PlanStatus::InProgress
//! );
//! ```

use std::borrow::Borrow;

use serde::{Deserialize, Serialize};

use crate::{
    error::{PlannerError, Result},
    models::{PlanStatus, TestCaseStatus},
};

/// Completion figures for one plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Progress {
    /// Number of test cases
    pub total: u32,
    /// Number of test cases in any status other than `PENDING`
    pub completed: u32,
    /// Completion percentage, `0..=100`
    pub progress_percent: u8,
}

impl Progress {
    /// Whether every test case of a non-empty plan is finished. Stricter
    /// than 100%, which rounding can reach with cases still pending.
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }

    /// Plan status implied by this progress, given the status currently
    /// stored for the plan.
    ///
    /// - a plan without test cases is `PENDING`;
    /// - a plan at 100% is `COMPLETED`;
    /// - a `COMPLETED` plan that gained or reopened a case is `IN_PROGRESS`;
    /// - a `PENDING` plan with any finished case is `IN_PROGRESS`;
    /// - otherwise the current status stands.
    pub fn suggested_plan_status(&self, current: PlanStatus) -> PlanStatus {
        if self.total == 0 {
            return PlanStatus::Pending;
        }
        if self.progress_percent == 100 {
            return PlanStatus::Completed;
        }
        match current {
            PlanStatus::Completed => PlanStatus::InProgress,
            PlanStatus::Pending if self.progress_percent > 0 => PlanStatus::InProgress,
            other => other,
        }
    }
}

/// Number of test cases per status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusCounts {
    #[serde(rename = "PENDING")]
    pub pending: u32,
    #[serde(rename = "PASSED")]
    pub passed: u32,
    #[serde(rename = "FAILED")]
    pub failed: u32,
    #[serde(rename = "NA")]
    pub na: u32,
}

impl StatusCounts {
    /// Tally a sequence of statuses.
    pub fn from_statuses<I>(statuses: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<TestCaseStatus>,
    {
        statuses
            .into_iter()
            .fold(Self::default(), |mut counts, status| {
                counts.record(*status.borrow());
                counts
            })
    }

    /// Count one more test case in `status`.
    pub fn record(&mut self, status: TestCaseStatus) {
        match status {
            TestCaseStatus::Pending => self.pending += 1,
            TestCaseStatus::Passed => self.passed += 1,
            TestCaseStatus::Failed => self.failed += 1,
            TestCaseStatus::Na => self.na += 1,
        }
    }

    /// Count for a single status.
    pub fn get(&self, status: TestCaseStatus) -> u32 {
        match status {
            TestCaseStatus::Pending => self.pending,
            TestCaseStatus::Passed => self.passed,
            TestCaseStatus::Failed => self.failed,
            TestCaseStatus::Na => self.na,
        }
    }

    pub fn total(&self) -> u32 {
        self.pending + self.passed + self.failed + self.na
    }

    pub fn completed(&self) -> u32 {
        self.total() - self.pending
    }

    /// Derive the progress figures from these counts.
    pub fn progress(&self) -> Progress {
        let total = self.total();
        let completed = self.completed();
        Progress {
            total,
            completed,
            progress_percent: percent(completed, total),
        }
    }
}

/// Per-status statistics for one plan, as exposed to presentation layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanStats {
    pub plan_id: u64,
    #[serde(flatten)]
    pub counts: StatusCounts,
    #[serde(flatten)]
    pub progress: Progress,
}

impl PlanStats {
    pub fn new(plan_id: u64, counts: StatusCounts) -> Self {
        Self {
            plan_id,
            counts,
            progress: counts.progress(),
        }
    }
}

/// Compute progress for a set of test case statuses.
pub fn compute_progress<I>(statuses: I) -> Progress
where
    I: IntoIterator,
    I::Item: Borrow<TestCaseStatus>,
{
    StatusCounts::from_statuses(statuses).progress()
}

/// Compute progress from raw status strings as they come out of storage or a
/// request body. Any value outside the status enumeration is rejected.
pub fn parse_progress<I, S>(statuses: I) -> Result<Progress>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts = StatusCounts::default();
    for raw in statuses {
        let status = raw
            .as_ref()
            .parse::<TestCaseStatus>()
            .map_err(|reason| PlannerError::invalid_input("status").with_reason(reason))?;
        counts.record(status);
    }
    Ok(counts.progress())
}

/// Round-half-up percentage of `completed` out of `total`.
fn percent(completed: u32, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }
    let (completed, total) = (u64::from(completed), u64::from(total));
    ((completed * 200 + total) / (total * 2)) as u8
}
