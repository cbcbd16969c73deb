#![deny(warnings)]
#![allow(missing_docs)]
//! Core functionality for the warikan bill-split calculator.
//!
//! This crate provides the pieces a front end needs to run weighted
//! bill-splitting sessions: the role roster, input validation, the
//! proportional ceiling-rounded split computation, schedule rendering and
//! the persistence gateway that keeps roster snapshots and the last result.

/// Structured error types for core operations
pub mod error;
/// Rendering of payment schedules and rosters
pub mod format;
/// Ordered role collection with stable ids and placeholder naming
pub mod roster;
/// Session orchestration over roster, calculator and store
pub mod session;
/// Proportional allocation with ceiling rounding
pub mod split;
/// Persistence gateway with in-memory and file backends
pub mod storage;
/// Input validation with first-failure precedence
pub mod validator;

// Re-export the types front ends interact with directly
pub use error::{SplitError, SplitResult};
pub use format::{
    ReportStyle, ScheduleLine, ScheduleView, people, plain_text_report, roster_view, schedule_view,
};
pub use roster::{DEFAULT_COUNT, DEFAULT_WEIGHT, RoleRoster};
pub use session::SplitSession;
pub use split::compute;
pub use storage::{JsonFileStore, MemoryStore, RESULT_KEY, ROLES_KEY, StateStore};
pub use validator::{MAX_TOTAL_AMOUNT, MIN_WEIGHT, ValidatedInput, ValidatedRole, validate};
