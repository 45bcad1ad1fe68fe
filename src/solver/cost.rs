//! Imbalance cost of a complete assignment.
//!
//! Size imbalance is weighted twice as heavily as gender imbalance; the
//! squared-difference form penalizes large deviations superlinearly.

use super::assignment::Assignment;

/// Gender imbalance cost of one section.
///
/// With `f` females and `m = student_count - f` males, the cost is
/// `(m - f)^2`, except that a difference of at most one, or a section
/// with no females or no males at all, costs nothing — small sections
/// cannot avoid that much imbalance.
///
/// `female_count` aggregates leaders and students while `student_count`
/// covers students only, so a female leader shifts the balance of her
/// own section and `males` can go negative.
pub fn gender_cost(a: &Assignment, section: usize) -> f64 {
    let females = a.female_count[section] as i64;
    let males = a.student_count[section] as i64 - females;
    let diff = (males as f64 - females as f64).abs();
    if diff <= 1.0 || females == 0 || males == 0 {
        0.0
    } else {
        diff * diff
    }
}

/// Total cost of a complete assignment.
///
/// For each leader's section, accumulates the squared difference between
/// that section's student count and the mean students-per-leader, plus
/// the section's [`gender_cost`]. Returns twice the size error plus the
/// gender total.
///
/// # Panics
///
/// Panics if any leader variable is unassigned; the cost is defined only
/// on complete assignments.
pub fn cost(a: &Assignment) -> f64 {
    let mean = a.students() as f64 / a.leaders as f64;
    let mut size_error = 0.0;
    let mut gender_total = 0.0;

    for leader in 0..a.leaders {
        let section = a.values[leader].expect("cost requires a complete assignment");
        let count = a.student_count[section];
        let diff = mean - count as f64;
        size_error += diff * diff;
        gender_total += gender_cost(a, section);
    }

    2.0 * size_error + gender_total
}
