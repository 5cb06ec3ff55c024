//! Core library for the checkpoint test plan tracker.
//!
//! A plan is a named collection of test cases. Each test case carries its
//! own status (`PENDING`, `PASSED`, `FAILED`, `NA`); the plan's status
//! (`PENDING`, `IN_PROGRESS`, `COMPLETED`) is never edited directly but
//! derived from its test cases:
//!
//! - [`progress`] computes completion figures from test case statuses and
//!   the plan status they imply;
//! - [`propagator`] keeps the stored plan status in line after every test
//!   case mutation;
//! - [`db`] stores plans and test cases in SQLite;
//! - [`planner`] is the async entry point tying them together.
//!
//! # Quick Start
//!
//! ```rust
//! use checkpoint_core::{
//!     params::{CreatePlan, Id, UpdateTestCaseStatus},
//!     PlanStatus, PlannerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("checkpoint.db"))
//!     .build()
//!     .await?;
//!
//! let plan = planner
//!     .create_plan(&CreatePlan {
//!         name: "Release 2.4".to_string(),
//!         description: None,
//!         test_cases: vec!["Login".to_string(), "Checkout".to_string()],
//!     })
//!     .await?;
//!
//! let case_id = plan.test_cases[0].id;
//! planner
//!     .update_test_case_status(&UpdateTestCaseStatus {
//!         id: case_id,
//!         status: "PASSED".to_string(),
//!     })
//!     .await?;
//!
//! let plan = planner.get_plan(&Id { id: plan.id }).await?;
//! assert_eq!(plan.status, PlanStatus::InProgress);
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod planner;
pub mod progress;
pub mod propagator;

pub use db::Database;
pub use display::{CreateResult, DeleteResult, OperationStatus, PlanSummaries, TestCases};
pub use error::{ErrorKind, PlannerError, Result};
pub use models::{Plan, PlanStatus, PlanSummary, Priority, TestCase, TestCaseStatus};
pub use planner::{Planner, PlannerBuilder};
pub use progress::{compute_progress, PlanStats, Progress};
pub use propagator::{ProgressStore, Propagation, Trigger};
