//! Data models for plans and test cases.
//!
//! Each model implements [`std::fmt::Display`] (see [`crate::display`]) so
//! collaborators can print it as markdown directly.
//!
//! # Examples
//!
//! ```rust
//! use checkpoint_core::models::{Plan, PlanStatus};
//! use jiff::Timestamp;
//!
//! let plan = Plan {
//!     id: 1,
//!     name: "Release 2.4 regression".to_string(),
//!     description: None,
//!     status: PlanStatus::Pending,
//!     created_at: Timestamp::now(),
//!     updated_at: Timestamp::now(),
//!     test_cases: vec![],
//! };
//! assert_eq!(plan.progress().progress_percent, 0);
//! ```

pub mod plan;
pub mod requests;
pub mod status;
pub mod summary;
pub mod test_case;


pub use plan::Plan;
pub use requests::{NewTestCase, UpdatePlanRequest, UpdateTestCaseRequest};
pub use status::{PlanStatus, Priority, TestCaseStatus};
pub use summary::{ClearSummary, PlanSummary};
pub use test_case::TestCase;
