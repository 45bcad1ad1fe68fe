//! Time-bounded backtracking solver for section assignment.
//!
//! Assigns a fixed population of section *leaders* and *students* to a
//! bounded set of discrete time slots (*sections*), subject to hard
//! structural constraints and per-student exclusion constraints, while
//! minimizing an imbalance cost (section-size evenness and gender
//! evenness).
//!
//! # Components
//!
//! - **Problem model**: [`solver::SectionProblem`] — per-variable candidate
//!   domains, gender table, and forbidden-leader exclusion sets, with
//!   fail-fast validation.
//! - **Assignment state**: [`solver::Assignment`] — the mutable assignment
//!   record with incrementally maintained per-section counters and
//!   violation flags.
//! - **Search engine**: [`solver::BacktrackRunner`] — an iterative,
//!   anytime depth-first search bounded by a wall-clock deadline that
//!   returns the best complete, constraint-satisfying assignment found.
//! - **Instance generators**: [`instance`] — random and trivial synthetic
//!   problems for demonstration and load-testing.
//!
//! # Design
//!
//! The solver is a pure, in-process computation: single-threaded,
//! synchronous, and deterministic given identical inputs (randomness is
//! confined to the instance generators, which take a caller-supplied
//! [`rand::Rng`]). Pruning is purely consistency-based; there is no
//! forward checking, constraint propagation, or cost-bound pruning, so
//! search quality over large spaces is bounded mainly by the time budget.

pub mod instance;
pub mod solver;
