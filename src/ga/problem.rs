//! Allocation problem definition.
//!
//! Bridges the catalog and the precomputed pools to the population
//! search: creates random individuals and scores them.

use rand::Rng;

use super::config::AllocationConfig;
use super::fitness::{evaluate_badness, Score};
use super::individual::{distribute_professors, distribute_tas};
use super::pools::ResourcePools;
use crate::catalog::Catalog;
use crate::models::Individual;

/// Everything needed to build and score individuals.
///
/// Holds only shared, read-only data, so it is `Sync` and one instance
/// can serve every worker thread.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use u_staffing::catalog::{AllocationRequest, Catalog};
/// use u_staffing::ga::{AllocationConfig, AllocationProblem};
///
/// let request = AllocationRequest::new()
///     .with_course("Algebra", 2, 30)
///     .with_professor("Ivan Petrov", &["Algebra"])
///     .with_ta("Anna Lee", &["Algebra"]);
/// let catalog = Catalog::from_request(&request).unwrap();
/// let config = AllocationConfig::default();
/// let problem = AllocationProblem::new(&catalog, &config);
///
/// let mut rng = ChaCha8Rng::seed_from_u64(1);
/// let individual = problem.create_scored(&mut rng);
/// assert!(individual.courses[0].runnable);
/// ```
pub struct AllocationProblem<'a> {
    pub catalog: &'a Catalog,
    pub config: &'a AllocationConfig,
    pub pools: ResourcePools,
}

impl<'a> AllocationProblem<'a> {
    /// Creates a problem, computing eligibility pools and demand counts.
    pub fn new(catalog: &'a Catalog, config: &'a AllocationConfig) -> Self {
        Self {
            catalog,
            config,
            pools: ResourcePools::build(catalog),
        }
    }

    /// Builds one unscored individual.
    pub fn create_individual<R: Rng + ?Sized>(&self, rng: &mut R) -> Individual {
        let mut individual = Individual::unassigned(self.catalog.courses.len());
        distribute_professors(&mut individual, &self.catalog.professors, rng);
        distribute_tas(
            &mut individual,
            &self.catalog.courses,
            &self.pools.eligibility,
            self.catalog.tas.len(),
            self.config.limits.ta_lab_capacity,
            rng,
        );
        individual
    }

    /// Scores `individual`.
    pub fn evaluate(&self, individual: &Individual) -> Score {
        evaluate_badness(
            individual,
            self.catalog,
            &self.pools.demand,
            &self.config.weights,
            &self.config.limits,
            self.config.max_badness,
        )
    }

    /// Builds an individual and writes its score.
    pub fn create_scored<R: Rng + ?Sized>(&self, rng: &mut R) -> Individual {
        let mut individual = self.create_individual(rng);
        let score = self.evaluate(&individual);
        individual.badness = score.badness;
        individual.violation = score.violation;
        individual
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::AllocationRequest;
    use crate::models::{CourseId, TaId};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn make_catalog(labs: u32, students: usize) -> Catalog {
        let mut request = AllocationRequest::new()
            .with_course("Algebra", labs, 10)
            .with_professor("Ivan Petrov", &["Algebra"])
            .with_ta("Anna Lee", &["Algebra"]);
        for i in 0..students {
            request = request.with_student("Some Student", format!("ST{i:03}"), &["Algebra"]);
        }
        Catalog::from_request(&request).unwrap()
    }

    #[test]
    fn test_fully_staffed_course() {
        let catalog = make_catalog(2, 4);
        let config = AllocationConfig::default();
        let problem = AllocationProblem::new(&catalog, &config);
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let ind = problem.create_scored(&mut rng);
        let course = &ind.courses[0];
        assert!(course.runnable);
        assert_eq!(course.tas.len(), 1);
        assert_eq!(course.tas[0].ta, TaId::new(0));
        assert_eq!(course.tas[0].labs, 2);
        // demand 4 fits capacity 10; professor slack 5; TA slack 2 * 2
        assert_eq!(ind.badness, 5 + 4);
    }

    #[test]
    fn test_understaffed_course() {
        let catalog = make_catalog(5, 3);
        let config = AllocationConfig::default();
        let problem = AllocationProblem::new(&catalog, &config);
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let ind = problem.create_scored(&mut rng);
        let course = &ind.courses[0];
        assert!(!course.runnable);
        assert!(course.professor.is_none());
        assert!(course.tas.is_empty());
        // 20 + demand 3, professor slack 10, TA slack 8
        assert_eq!(ind.badness, 20 + 3 + 10 + 8);
        assert!(!ind.violation);
    }

    #[test]
    fn test_evaluate_is_pure() {
        let catalog = make_catalog(2, 1);
        let config = AllocationConfig::default();
        let problem = AllocationProblem::new(&catalog, &config);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let ind = problem.create_scored(&mut rng);
        let before = ind.clone();
        let score = problem.evaluate(&ind);
        assert_eq!(score.badness, ind.badness);
        assert_eq!(score.violation, ind.violation);
        assert_eq!(ind, before);
    }

    fn random_request() -> impl Strategy<Value = AllocationRequest> {
        const NAMES: [&str; 6] = ["Alpha", "Beta", "Gamma", "Delta", "Eps", "Zeta"];
        (1usize..=6, 0usize..=6, 0usize..=6).prop_flat_map(|(c, p, t)| {
            let courses = prop::collection::vec((1u32..=6, 1u32..=20), c);
            let picks = prop::collection::vec(prop::collection::vec(0..c, 1..=3), p + t);
            (courses, picks).prop_map(move |(courses, picks)| {
                let mut request = AllocationRequest::new();
                for (i, (labs, cap)) in courses.into_iter().enumerate() {
                    request = request.with_course(NAMES[i], labs, cap);
                }
                for (j, pick) in picks.into_iter().enumerate() {
                    let names: Vec<&str> = pick.iter().map(|&k| NAMES[k]).collect();
                    let person = format!("Person {}", NAMES[j % 6].repeat(j / 6 + 1));
                    request = if j < p {
                        request.with_professor(person, &names)
                    } else {
                        request.with_ta(person, &names)
                    };
                }
                request
            })
        })
    }

    proptest! {
        #[test]
        fn test_builder_invariants(request in random_request(), seed in any::<u64>()) {
            let catalog = Catalog::from_request(&request).unwrap();
            let config = AllocationConfig::default();
            let problem = AllocationProblem::new(&catalog, &config);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let ind = problem.create_scored(&mut rng);

            prop_assert!(!ind.violation);
            for ta in &catalog.tas {
                prop_assert!(ind.committed_labs(ta.id) <= config.limits.ta_lab_capacity);
            }
            for professor in &catalog.professors {
                prop_assert!(ind.professor_load(professor.id) <= 2);
            }
            for (i, course) in ind.courses.iter().enumerate() {
                prop_assert_eq!(course.course, CourseId::new(i));
                if course.runnable {
                    prop_assert!(course.professor.is_some());
                    prop_assert_eq!(course.covered_labs(), catalog.courses[i].labs);
                } else {
                    prop_assert!(course.professor.is_none());
                    prop_assert!(course.tas.is_empty());
                }
            }
        }
    }
}
