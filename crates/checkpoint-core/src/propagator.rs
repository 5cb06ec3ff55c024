//! Keeps a plan's stored status consistent with its test cases.
//!
//! The stored plan status is a cache of [`Progress::suggested_plan_status`].
//! After every test case mutation the owning plan is recomputed through
//! [`propagate`]: read the plan's current status, read the statuses of all of
//! its test cases, derive the suggested status and write it only when it
//! differs. Repeating a propagation without intervening mutations therefore
//! performs no writes.
//!
//! The propagator talks to storage through the narrow [`ProgressStore`]
//! trait. [`crate::db::Database`] runs it inside a single immediate SQLite
//! transaction so that concurrent recomputations for the same plan
//! serialize instead of interleaving their reads and writes.

use std::fmt;

use log::{debug, info};

use crate::{
    error::Result,
    models::{PlanStatus, TestCaseStatus},
    progress::{compute_progress, Progress},
};

/// Storage operations needed to recompute a plan's status.
pub trait ProgressStore {
    /// Current stored status of the plan, or `None` if it does not exist.
    fn plan_status(&self, plan_id: u64) -> Result<Option<PlanStatus>>;

    /// Statuses of every test case currently owned by the plan.
    fn test_case_statuses(&self, plan_id: u64) -> Result<Vec<TestCaseStatus>>;

    /// Persist a new plan status and refresh the plan's `updated_at`.
    fn set_plan_status(&self, plan_id: u64, status: PlanStatus) -> Result<()>;
}

/// The test case mutation that triggered a propagation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// A test case was added to the plan
    Created { test_case_id: u64 },
    /// A test case was updated, possibly changing its status
    StatusChanged {
        test_case_id: u64,
        from: TestCaseStatus,
        to: TestCaseStatus,
    },
    /// A test case was removed from the plan
    Deleted,
    /// Test cases were added together with a new plan
    PlanCreated,
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trigger::Created { test_case_id } => write!(f, "test case {test_case_id} created"),
            Trigger::StatusChanged {
                test_case_id,
                from,
                to,
            } => write!(f, "test case {test_case_id} changed {from} -> {to}"),
            Trigger::Deleted => write!(f, "test case deleted"),
            Trigger::PlanCreated => write!(f, "plan created"),
        }
    }
}

/// Outcome of one propagation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    /// The plan no longer exists; nothing to do
    PlanMissing,
    /// The stored status already matched the test cases
    Unchanged {
        status: PlanStatus,
        progress: Progress,
    },
    /// The stored status was rewritten
    Updated {
        from: PlanStatus,
        to: PlanStatus,
        progress: Progress,
    },
}

impl Propagation {
    /// Whether this propagation wrote to the plan.
    pub fn wrote(&self) -> bool {
        matches!(self, Propagation::Updated { .. })
    }

    /// Plan status after the propagation, if the plan exists.
    pub fn status(&self) -> Option<PlanStatus> {
        match self {
            Propagation::PlanMissing => None,
            Propagation::Unchanged { status, .. } => Some(*status),
            Propagation::Updated { to, .. } => Some(*to),
        }
    }
}

/// Recompute the status of `plan_id` and persist it if it changed.
pub fn propagate<S: ProgressStore + ?Sized>(
    store: &S,
    plan_id: u64,
    trigger: Trigger,
) -> Result<Propagation> {
    let Some(current) = store.plan_status(plan_id)? else {
        debug!("plan {plan_id} missing after {trigger}; skipping propagation");
        return Ok(Propagation::PlanMissing);
    };

    let statuses = store.test_case_statuses(plan_id)?;
    let progress = compute_progress(&statuses);
    let suggested = progress.suggested_plan_status(current);

    if suggested == current {
        debug!(
            "plan {plan_id} stays {current} at {}% after {trigger}",
            progress.progress_percent
        );
        return Ok(Propagation::Unchanged {
            status: current,
            progress,
        });
    }

    store.set_plan_status(plan_id, suggested)?;
    info!(
        "plan {plan_id} {current} -> {suggested} at {}% after {trigger}",
        progress.progress_percent
    );
    Ok(Propagation::Updated {
        from: current,
        to: suggested,
        progress,
    })
}
