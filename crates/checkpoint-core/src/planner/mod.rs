//! High-level async API for plans and test cases.
//!
//! [`Planner`] is the entry point for every collaborator. Each operation
//! validates its parameters, then runs on the blocking thread pool with its
//! own [`Database`] connection.
//!
//! Test case mutations are followed by a status propagation on the same
//! connection, once the mutation has committed. The mutation is the
//! operation's result: if propagation fails, the failure is logged and the
//! call still succeeds. The plan status is then stale until the next
//! mutation of that plan recomputes it from scratch.
//!
//! ```rust
//! use checkpoint_core::{params::CreatePlan, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("/tmp/checkpoint.db"))
//!     .build()
//!     .await?;
//!
//! let plan = planner
//!     .create_plan(&CreatePlan {
//!         name: "Smoke tests".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("{plan}");
//! # Ok(())
//! # }
//! ```

use std::{path::PathBuf, time::Duration};

use log::{debug, warn};
use tokio::task;

use crate::{
    db::Database,
    error::{PlannerError, Result},
    propagator::Propagation,
};

pub mod builder;
pub mod plan_ops;
pub mod test_case_ops;


pub use builder::PlannerBuilder;

/// Main planner interface for managing plans and test cases.
#[derive(Debug, Clone)]
pub struct Planner {
    pub(crate) db_path: PathBuf,
    pub(crate) busy_timeout: Duration,
}

impl Planner {
    pub(crate) fn new(db_path: PathBuf, busy_timeout: Duration) -> Self {
        Self {
            db_path,
            busy_timeout,
        }
    }

    /// Path of the SQLite database backing this planner.
    pub fn database_path(&self) -> &std::path::Path {
        &self.db_path
    }

    /// Run `op` on a fresh connection on the blocking thread pool.
    async fn with_db<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();
        let busy_timeout = self.busy_timeout;

        task::spawn_blocking(move || {
            let mut db = Database::with_busy_timeout(&db_path, busy_timeout)?;
            op(&mut db)
        })
        .await
        .map_err(PlannerError::join)?
    }
}

/// Log the outcome of a propagation. A failure does not fail the mutation
/// that caused it.
fn settle(plan_id: u64, outcome: Result<Propagation>) {
    match outcome {
        Ok(propagation) => debug!("plan {plan_id} settled: {propagation:?}"),
        Err(e) => warn!("Failed to update status of plan {plan_id}: {e}"),
    }
}
