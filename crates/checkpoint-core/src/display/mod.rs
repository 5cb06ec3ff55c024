//! Display formatting and result wrapper types.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`])
//! and produce markdown. The wrappers in this module add context: a list of
//! plans, the outcome of a create or delete, a confirmation message. The CLI
//! renders all of it through its terminal renderer.
//!
//! - [`collections`]: collection wrappers ([`PlanSummaries`], [`TestCases`])
//! - [`results`]: operation outcomes ([`CreateResult`], [`UpdateResult`],
//!   [`DeleteResult`])
//! - [`status`]: confirmation messages ([`OperationStatus`])
//! - [`datetime`]: local time formatting ([`LocalDateTime`])
//!
//! ```rust
//! use checkpoint_core::{
//!     display::CreateResult,
//!     models::{Plan, PlanStatus},
//! };
//! use jiff::Timestamp;
//!
//! let plan = Plan {
//!     id: 1,
//!     name: "Release 2.4".to_string(),
//!     description: None,
//!     status: PlanStatus::Pending,
//!     created_at: Timestamp::now(),
//!     updated_at: Timestamp::now(),
//!     test_cases: vec![],
//! };
//!
//! let output = CreateResult::new(plan).to_string();
//! assert!(output.contains("Created plan with ID: 1"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{PlanSummaries, TestCases};
pub use datetime::LocalDateTime;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
