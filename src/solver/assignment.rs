//! Incrementally maintained assignment state.

use super::problem::SectionProblem;

/// The mutable record of current variable→section assignments.
///
/// Alongside the raw `values` table, the state carries derived
/// per-section counters and three violation flags, all maintained
/// incrementally by [`set_section`](Self::set_section) rather than
/// recomputed from scratch. The flags use deliberate reset-on-removal
/// shortcuts (documented on `set_section`); they are a performance
/// optimization inherited from the incremental design, not a full
/// recomputation, and the search relies on their exact semantics.
///
/// One instance is created per search invocation, mutated in place for
/// the duration of the call, and discarded afterwards. Not meant to be
/// shared between concurrent callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// Total variable count (leaders + students).
    pub total: usize,
    /// Number of leader variables.
    pub leaders: usize,
    /// Number of sections.
    pub times: usize,
    /// Per-variable gender flag (true = female).
    pub genders: Vec<bool>,

    /// Current section per variable; `None` = unassigned.
    pub values: Vec<Option<usize>>,
    /// Leaders currently assigned (any section).
    pub leaders_assigned: usize,
    /// Students currently assigned (any section).
    pub students_assigned: usize,
    /// Number of leaders currently in each section.
    pub has_leader: Vec<usize>,
    /// Number of students currently in each section.
    pub student_count: Vec<usize>,
    /// Number of female variables (leaders and students alike)
    /// currently in each section.
    pub female_count: Vec<usize>,

    /// Some section holds more than one leader.
    pub two_leaders_same_section: bool,
    /// Some section holds a leader but no students (checked only once
    /// the assignment is complete).
    pub section_lacks_students: bool,
    /// A student was assigned to a leaderless section after all leaders
    /// were already placed.
    pub student_in_leaderless_section: bool,
}

impl Assignment {
    /// Creates an empty state for the given problem: every variable
    /// unassigned, all counters zero, all flags clear.
    pub fn new(problem: &SectionProblem) -> Self {
        Self {
            total: problem.total,
            leaders: problem.leaders,
            times: problem.times,
            genders: problem.genders.clone(),
            values: vec![None; problem.total],
            leaders_assigned: 0,
            students_assigned: 0,
            has_leader: vec![0; problem.times],
            student_count: vec![0; problem.times],
            female_count: vec![0; problem.times],
            two_leaders_same_section: false,
            section_lacks_students: false,
            student_in_leaderless_section: false,
        }
    }

    /// Number of student variables.
    pub fn students(&self) -> usize {
        self.total - self.leaders
    }

    /// Current section of `var`, or `None` if unassigned.
    pub fn section_of(&self, var: usize) -> Option<usize> {
        self.values[var]
    }

    /// Whether every variable is assigned.
    pub fn is_complete(&self) -> bool {
        self.leaders_assigned + self.students_assigned == self.total
    }

    /// Whether any violation flag is set.
    pub fn has_violation(&self) -> bool {
        self.two_leaders_same_section
            || self.section_lacks_students
            || self.student_in_leaderless_section
    }

    /// Assigns or unassigns variable `var`.
    ///
    /// Only the transitions unassigned→assigned and assigned→unassigned
    /// update counters and flags. Any other call overwrites the stored
    /// value without touching counters; callers must unassign a variable
    /// before reassigning it.
    ///
    /// Flag maintenance is incremental, with two asymmetric shortcuts:
    ///
    /// - `student_in_leaderless_section` is raised only at student
    ///   assignment time, once all leaders are placed; it is not raised
    ///   retroactively when a leader later leaves the section.
    /// - Unassigning a leader clears `two_leaders_same_section`
    ///   unconditionally, without rechecking the remaining leaders.
    ///   Unassigning a student clears `section_lacks_students` and
    ///   `student_in_leaderless_section` the same way.
    ///
    /// After every call, if the assignment is complete, every section is
    /// scanned once and `section_lacks_students` is raised when a
    /// leader-holding section has no students. That scan is the only
    /// non-O(1) part of a mutation.
    pub fn set_section(&mut self, var: usize, section: Option<usize>) {
        match (self.values[var], section) {
            (None, Some(target)) => {
                if var < self.leaders {
                    self.leaders_assigned += 1;
                    self.has_leader[target] += 1;
                    if self.has_leader[target] > 1 {
                        self.two_leaders_same_section = true;
                    }
                } else {
                    self.students_assigned += 1;
                    self.student_count[target] += 1;
                    if self.leaders_assigned == self.leaders && self.has_leader[target] == 0 {
                        self.student_in_leaderless_section = true;
                    }
                }
                if self.genders[var] {
                    self.female_count[target] += 1;
                }
            }
            (Some(current), None) => {
                if var < self.leaders {
                    self.leaders_assigned -= 1;
                    self.has_leader[current] -= 1;
                    self.two_leaders_same_section = false;
                } else {
                    self.students_assigned -= 1;
                    self.student_count[current] -= 1;
                    self.section_lacks_students = false;
                    self.student_in_leaderless_section = false;
                }
                if self.genders[var] {
                    self.female_count[current] -= 1;
                }
            }
            _ => {}
        }

        if self.is_complete() {
            for s in 0..self.times {
                if self.student_count[s] == 0 && self.has_leader[s] > 0 {
                    self.section_lacks_students = true;
                    break;
                }
            }
        }

        self.values[var] = section;
    }
}
