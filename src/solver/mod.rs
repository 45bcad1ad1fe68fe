//! Backtracking constraint-satisfaction solver for section assignment.
//!
//! # Key Components
//!
//! - **Problem**: [`SectionProblem`] — variables, domains, gender table,
//!   and per-student forbidden-leader sets
//! - **State**: [`Assignment`] — current variable→section assignments with
//!   incrementally maintained counters and violation flags
//! - **Cost**: [`cost`] / [`gender_cost`] — imbalance scoring of complete
//!   assignments
//! - **Search**: [`BacktrackRunner`] — iterative, time-bounded depth-first
//!   search with trial-and-revert consistency checking
//!
//! # Design
//!
//! Variables are identified by index `0..total`: the first `leaders`
//! indices are leader variables, the remainder student variables. Sections
//! are identified by index `0..times`; all section-level facts live in
//! parallel vectors inside [`Assignment`].
//!
//! The search is an anytime algorithm: it can be stopped at any point by
//! the wall-clock deadline and yields the best feasible assignment found
//! so far, improving with more time.

mod assignment;
mod cost;
mod problem;
mod search;

pub use assignment::Assignment;
pub use cost::{cost, gender_cost};
pub use problem::{ProblemError, SectionProblem};
pub use search::{is_consistent, BacktrackRunner, SearchConfig, SearchResult};
