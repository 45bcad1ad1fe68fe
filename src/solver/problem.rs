//! Problem model and input validation.

use thiserror::Error;

/// Error raised when a [`SectionProblem`] violates a precondition.
///
/// The solver fails fast on malformed inputs rather than silently
/// misbehaving; a well-formed but infeasible problem is not an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProblemError {
    /// `leaders` must satisfy `0 < leaders <= total`.
    #[error("leader count {leaders} out of range (total {total})")]
    LeaderCountOutOfRange { leaders: usize, total: usize },

    /// There must be at least one section.
    #[error("section count must be positive")]
    NoSections,

    /// One of the per-variable tables has the wrong length.
    #[error("{table} table has {got} entries, expected {expected}")]
    TableLengthMismatch {
        table: &'static str,
        got: usize,
        expected: usize,
    },

    /// A domain candidate refers to a section that does not exist.
    #[error("variable {variable}: domain value {section} outside [0, {times})")]
    SectionOutOfRange {
        variable: usize,
        section: usize,
        times: usize,
    },

    /// An exclusion entry refers to a leader index that does not exist.
    #[error("variable {variable}: forbidden leader {leader} outside [0, {leaders})")]
    LeaderOutOfRange {
        variable: usize,
        leader: usize,
        leaders: usize,
    },
}

/// A section-assignment problem instance.
///
/// Variables are implicit by index `0..total`; indices below `leaders`
/// are leader variables, the rest are students. Every section-valued
/// table is indexed by variable id.
///
/// # Examples
///
/// ```
/// use section_assign::solver::SectionProblem;
///
/// // Two leaders, two students, two sections, everyone available anywhere.
/// let problem = SectionProblem::new(
///     4,
///     2,
///     2,
///     vec![vec![0, 1]; 4],
///     vec![false; 4],
///     vec![vec![]; 4],
/// );
/// assert!(problem.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionProblem {
    /// Total variable count (leaders + students).
    pub total: usize,
    /// Number of leader variables (the first `leaders` indices).
    pub leaders: usize,
    /// Number of sections.
    pub times: usize,
    /// Per-variable ordered candidate sections. The stored order fixes
    /// the search's value ordering.
    pub domains: Vec<Vec<usize>>,
    /// Per-variable gender flag (true = female). Immutable attribute.
    pub genders: Vec<bool>,
    /// Per-variable forbidden leader indices. Meaningful only for
    /// student variables; leader entries are ignored by the solver.
    pub exclusions: Vec<Vec<usize>>,
}

impl SectionProblem {
    /// Creates a problem instance. Call [`validate`](Self::validate)
    /// before solving; construction itself does not check anything.
    pub fn new(
        total: usize,
        leaders: usize,
        times: usize,
        domains: Vec<Vec<usize>>,
        genders: Vec<bool>,
        exclusions: Vec<Vec<usize>>,
    ) -> Self {
        Self {
            total,
            leaders,
            times,
            domains,
            genders,
            exclusions,
        }
    }

    /// Number of student variables.
    pub fn students(&self) -> usize {
        self.total - self.leaders
    }

    /// Whether the given variable index is a leader.
    pub fn is_leader(&self, var: usize) -> bool {
        var < self.leaders
    }

    /// Validates the problem preconditions.
    pub fn validate(&self) -> Result<(), ProblemError> {
        if self.leaders == 0 || self.leaders > self.total {
            return Err(ProblemError::LeaderCountOutOfRange {
                leaders: self.leaders,
                total: self.total,
            });
        }
        if self.times == 0 {
            return Err(ProblemError::NoSections);
        }
        for (table, len) in [
            ("domain", self.domains.len()),
            ("gender", self.genders.len()),
            ("exclusion", self.exclusions.len()),
        ] {
            if len != self.total {
                return Err(ProblemError::TableLengthMismatch {
                    table,
                    got: len,
                    expected: self.total,
                });
            }
        }
        for (variable, domain) in self.domains.iter().enumerate() {
            for &section in domain {
                if section >= self.times {
                    return Err(ProblemError::SectionOutOfRange {
                        variable,
                        section,
                        times: self.times,
                    });
                }
            }
        }
        for (variable, forbidden) in self.exclusions.iter().enumerate() {
            for &leader in forbidden {
                if leader >= self.leaders {
                    return Err(ProblemError::LeaderOutOfRange {
                        variable,
                        leader,
                        leaders: self.leaders,
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_problem() -> SectionProblem {
        SectionProblem::new(
            4,
            2,
            2,
            vec![vec![0, 1]; 4],
            vec![false; 4],
            vec![vec![]; 4],
        )
    }

    #[test]
    fn test_validate_ok() {
        assert!(valid_problem().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_leaders() {
        let mut p = valid_problem();
        p.leaders = 0;
        assert_eq!(
            p.validate(),
            Err(ProblemError::LeaderCountOutOfRange {
                leaders: 0,
                total: 4
            })
        );
    }

    #[test]
    fn test_validate_more_leaders_than_total() {
        let mut p = valid_problem();
        p.leaders = 5;
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_validate_no_sections() {
        let mut p = valid_problem();
        p.times = 0;
        assert_eq!(p.validate(), Err(ProblemError::NoSections));
    }

    #[test]
    fn test_validate_table_length() {
        let mut p = valid_problem();
        p.genders.pop();
        assert_eq!(
            p.validate(),
            Err(ProblemError::TableLengthMismatch {
                table: "gender",
                got: 3,
                expected: 4
            })
        );
    }

    #[test]
    fn test_validate_section_out_of_range() {
        let mut p = valid_problem();
        p.domains[3] = vec![0, 2];
        assert_eq!(
            p.validate(),
            Err(ProblemError::SectionOutOfRange {
                variable: 3,
                section: 2,
                times: 2
            })
        );
    }

    #[test]
    fn test_validate_leader_out_of_range() {
        let mut p = valid_problem();
        p.exclusions[2] = vec![7];
        assert_eq!(
            p.validate(),
            Err(ProblemError::LeaderOutOfRange {
                variable: 2,
                leader: 7,
                leaders: 2
            })
        );
    }

    #[test]
    fn test_students_and_is_leader() {
        let p = valid_problem();
        assert_eq!(p.students(), 2);
        assert!(p.is_leader(0));
        assert!(p.is_leader(1));
        assert!(!p.is_leader(2));
    }
}
