//! Random and trivial instance generators.
//!
//! Synthetic problems for demonstration and load-testing. Every
//! generator takes a caller-supplied [`Rng`] so that instances are
//! reproducible from a seed; the solver itself uses no randomness.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::solver::SectionProblem;

/// Random domains: each variable gets a shuffled candidate list of
/// size uniform in `[times / 2, times)`.
pub fn random_domains<R: Rng>(total: usize, times: usize, rng: &mut R) -> Vec<Vec<usize>> {
    let mut sections: Vec<usize> = (0..times).collect();
    let lb = times / 2;
    (0..total)
        .map(|_| {
            let size = lb + rng.random_range(0..times - lb);
            sections.shuffle(rng);
            sections[..size].to_vec()
        })
        .collect()
}

/// Full domains: every variable may take every section, in section
/// order.
pub fn full_domains(total: usize, times: usize) -> Vec<Vec<usize>> {
    vec![(0..times).collect(); total]
}

/// Leaders get full ordered domains; students get random ones as in
/// [`random_domains`]. Models leaders being available at every slot.
pub fn leader_full_domains<R: Rng>(
    total: usize,
    leaders: usize,
    times: usize,
    rng: &mut R,
) -> Vec<Vec<usize>> {
    let mut sections: Vec<usize> = (0..times).collect();
    let lb = times / 2;
    (0..total)
        .map(|var| {
            if var < leaders {
                (0..times).collect()
            } else {
                let size = lb + rng.random_range(0..times - lb);
                sections.shuffle(rng);
                sections[..size].to_vec()
            }
        })
        .collect()
}

/// Random exclusions: roughly one student in eight is forbidden from
/// one random leader's section. Leaders always have empty sets.
pub fn random_exclusions<R: Rng>(total: usize, leaders: usize, rng: &mut R) -> Vec<Vec<usize>> {
    (0..total)
        .map(|var| {
            if var >= leaders && rng.random_bool(1.0 / 8.0) {
                vec![rng.random_range(0..leaders)]
            } else {
                vec![]
            }
        })
        .collect()
}

/// Empty exclusion sets for every variable.
pub fn no_exclusions(total: usize) -> Vec<Vec<usize>> {
    vec![vec![]; total]
}

/// Uniformly random gender table.
pub fn random_genders<R: Rng>(total: usize, rng: &mut R) -> Vec<bool> {
    (0..total).map(|_| rng.random_bool(0.5)).collect()
}

/// A fully random problem: random domains, genders, and exclusions.
pub fn random_problem<R: Rng>(
    total: usize,
    leaders: usize,
    times: usize,
    rng: &mut R,
) -> SectionProblem {
    SectionProblem::new(
        total,
        leaders,
        times,
        random_domains(total, times, rng),
        random_genders(total, rng),
        random_exclusions(total, leaders, rng),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_domains_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let domains = random_domains(20, 6, &mut rng);
        assert_eq!(domains.len(), 20);
        for d in &domains {
            assert!(d.len() >= 3 && d.len() < 6);
            for &s in d {
                assert!(s < 6);
            }
            // No duplicate candidates.
            let mut seen = vec![false; 6];
            for &s in d {
                assert!(!seen[s]);
                seen[s] = true;
            }
        }
    }

    #[test]
    fn test_full_domains_ordered() {
        let domains = full_domains(3, 4);
        assert_eq!(domains, vec![vec![0, 1, 2, 3]; 3]);
    }

    #[test]
    fn test_leader_full_domains() {
        let mut rng = StdRng::seed_from_u64(42);
        let domains = leader_full_domains(10, 3, 5, &mut rng);
        for d in &domains[..3] {
            assert_eq!(d, &vec![0, 1, 2, 3, 4]);
        }
        for d in &domains[3..] {
            assert!(d.len() < 5);
        }
    }

    #[test]
    fn test_random_exclusions_only_students() {
        let mut rng = StdRng::seed_from_u64(42);
        let exclusions = random_exclusions(200, 5, &mut rng);
        for e in &exclusions[..5] {
            assert!(e.is_empty());
        }
        let restricted = exclusions[5..].iter().filter(|e| !e.is_empty()).count();
        // ~1/8 of 195 students; loose bounds to keep the test stable.
        assert!(restricted > 5 && restricted < 60, "got {restricted}");
        for e in &exclusions {
            for &leader in e {
                assert!(leader < 5);
            }
        }
    }

    #[test]
    fn test_random_problem_validates() {
        let mut rng = StdRng::seed_from_u64(7);
        let problem = random_problem(30, 4, 6, &mut rng);
        assert!(problem.validate().is_ok());
    }

    #[test]
    fn test_seed_reproducibility() {
        let p1 = random_problem(12, 3, 4, &mut StdRng::seed_from_u64(99));
        let p2 = random_problem(12, 3, 4, &mut StdRng::seed_from_u64(99));
        assert_eq!(p1.domains, p2.domains);
        assert_eq!(p1.genders, p2.genders);
        assert_eq!(p1.exclusions, p2.exclusions);
    }
}
