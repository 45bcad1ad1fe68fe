//! Time-bounded backtracking search.
//!
//! # Algorithm
//!
//! 1. Keep an explicit variable cursor and a per-variable position into
//!    that variable's candidate domain (no call recursion)
//! 2. At each level, advance through untried candidates and commit the
//!    first consistent one, descending to the next variable
//! 3. On a dead end, back up one level and unassign it so its next
//!    candidate can be tried
//! 4. On a complete assignment, score it, keep it if it beats the best
//!    so far, and force a backtrack to keep searching for cheaper ones
//! 5. Stop when the cursor falls below zero (space exhausted) or the
//!    wall-clock deadline passes
//!
//! Pruning is purely consistency-based: no forward checking, no
//! constraint propagation, no cost-bound rejection of partial
//! assignments. Simple and correct, but on large spaces the result
//! quality is bounded mainly by the time budget.

use std::time::{Duration, Instant};

use tracing::{debug, trace};

use super::assignment::Assignment;
use super::cost::cost;
use super::problem::{ProblemError, SectionProblem};

/// Checks the per-student forbidden-leader sets.
///
/// Leaders carry no exclusions and pass trivially. For a student, every
/// forbidden leader currently sitting in `section` is a violation. The
/// scan is O(leaders × |exclusions|); most students have no exclusions
/// at all, and the rest rarely more than one, so no index is kept.
fn satisfies_exclusions(
    problem: &SectionProblem,
    a: &Assignment,
    var: usize,
    section: usize,
) -> bool {
    if problem.is_leader(var) {
        return true;
    }
    for &forbidden in &problem.exclusions[var] {
        if a.values[forbidden] == Some(section) {
            return false;
        }
    }
    true
}

/// Whether provisionally assigning `section` to `var` keeps the state
/// free of violations.
///
/// Trial-and-revert: the candidate is committed via
/// [`Assignment::set_section`], the violation flags and exclusion sets
/// are read, and the assignment is reverted. The state after the call
/// equals the state before it.
pub fn is_consistent(
    problem: &SectionProblem,
    a: &mut Assignment,
    var: usize,
    section: usize,
) -> bool {
    a.set_section(var, Some(section));
    let mut consistent = !a.has_violation();
    consistent &= satisfies_exclusions(problem, a, var, section);
    a.set_section(var, None);
    consistent
}

/// Search configuration.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use section_assign::solver::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_time_limit(Duration::from_secs(5))
///     .with_max_steps(1_000_000);
/// ```
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Wall-clock budget for the whole search. The deadline is checked
    /// once per search step, before the step runs, so a zero budget
    /// executes no step at all.
    pub time_limit: Duration,

    /// Maximum number of search steps (hard budget). 0 = no limit.
    /// Useful for deterministic termination in tests; the time limit
    /// remains the primary cancellation mechanism.
    pub max_steps: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            time_limit: Duration::from_secs(60),
            max_steps: 0,
        }
    }
}

impl SearchConfig {
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = limit;
        self
    }

    pub fn with_max_steps(mut self, n: usize) -> Self {
        self.max_steps = n;
        self
    }
}

/// Result of a backtracking search run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Best complete assignment found: section per variable. `None`
    /// when no feasible assignment was found within budget.
    pub best: Option<Vec<usize>>,

    /// Cost of the best assignment, or infinity when none was found.
    pub best_cost: f64,

    /// Number of search steps executed (one per variable level visit).
    pub steps: usize,

    /// Number of complete solutions encountered (including duplicates
    /// of the same cost).
    pub solutions: usize,

    /// The search space was fully explored before the deadline. With
    /// `best == None` this proves infeasibility rather than a timeout.
    pub exhausted: bool,

    /// The wall-clock deadline or step budget stopped the search.
    pub timed_out: bool,
}

impl SearchResult {
    /// Whether a feasible assignment was found.
    pub fn found(&self) -> bool {
        self.best.is_some()
    }
}

/// Executes the backtracking search.
pub struct BacktrackRunner;

impl BacktrackRunner {
    /// Searches for the cheapest complete, consistent assignment of the
    /// given problem within the configured budget.
    ///
    /// Validates the problem first and fails fast on malformed input.
    /// A well-formed but infeasible problem is not an error: the result
    /// comes back with `best == None` and `exhausted == true`.
    pub fn run(
        problem: &SectionProblem,
        config: &SearchConfig,
    ) -> Result<SearchResult, ProblemError> {
        problem.validate()?;

        let deadline = Instant::now() + config.time_limit;
        let n = problem.total;
        let mut a = Assignment::new(problem);

        // Next untried index into each variable's domain.
        let mut pos = vec![0usize; n];
        let mut var: isize = 0;

        let mut best: Option<Vec<usize>> = None;
        let mut best_cost = f64::INFINITY;
        let mut steps = 0usize;
        let mut solutions = 0usize;
        let mut timed_out = false;

        while 0 <= var && (var as usize) < n {
            if Instant::now() >= deadline {
                debug!(steps, best_cost, "time limit reached");
                timed_out = true;
                break;
            }
            if config.max_steps > 0 && steps >= config.max_steps {
                debug!(steps, best_cost, "step budget reached");
                timed_out = true;
                break;
            }
            steps += 1;

            let v = var as usize;
            let domain = &problem.domains[v];
            let mut advanced = false;

            while pos[v] < domain.len() {
                let candidate = domain[pos[v]];
                pos[v] += 1;

                if is_consistent(problem, &mut a, v, candidate) {
                    a.set_section(v, Some(candidate));
                    var += 1;
                    if (var as usize) < n {
                        pos[var as usize] = 0;
                    }
                    advanced = true;
                    break;
                }
            }

            if !advanced {
                // Dead end: back up and free the previous level.
                var -= 1;
                if var >= 0 {
                    a.set_section(var as usize, None);
                }
            } else if var as usize >= n {
                // Complete assignment: score it, then keep searching
                // for cheaper ones.
                solutions += 1;
                let c = cost(&a);
                if c < best_cost {
                    trace!(cost = c, "complete assignment improves best");
                    best_cost = c;
                    best = a.values.iter().copied().collect();
                }
                var -= 1;
                a.set_section(var as usize, None);
            }
        }

        Ok(SearchResult {
            best,
            best_cost,
            steps,
            solutions,
            exhausted: var < 0,
            timed_out,
        })
    }
}
