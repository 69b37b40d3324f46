//! Solve driver.
//!
//! # Algorithm
//!
//! 1. Validate the configuration (and, for requests, the input records).
//! 2. Build the catalog pools (TA eligibility, student demand).
//! 3. Generate one population of independently built, scored individuals.
//! 4. Run `generations` selection passes, then a final one.
//! 5. Keep the single best individual.
//!
//! Deterministic for a fixed seed and input, regardless of parallelism.

use tracing::{info, instrument};

use super::report::AllocationReport;
use crate::catalog::{AllocationRequest, Catalog};
use crate::error::{ConfigError, Error, SetupError};
use crate::ga::{AllocationConfig, AllocationProblem, Population};
use crate::models::Individual;
use crate::validation::validate_request;

/// Result of a solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// The lowest-badness individual found.
    pub best: Individual,
    /// `false` when even the best individual breaks a hard workload
    /// limit, i.e. there is no usable allocation.
    pub feasible: bool,
    /// Seed the population was drawn from.
    pub seed: u64,
    /// Number of individuals built and scored.
    pub evaluated: usize,
}

impl Solution {
    pub fn badness(&self) -> u32 {
        self.best.badness
    }
}

/// Course staffing allocator.
///
/// # Example
///
/// ```
/// use u_staffing::allocator::Allocator;
/// use u_staffing::catalog::AllocationRequest;
/// use u_staffing::ga::AllocationConfig;
///
/// let request = AllocationRequest::new()
///     .with_course("Algebra", 2, 10)
///     .with_professor("Ivan Petrov", &["Algebra"])
///     .with_ta("Anna Lee", &["Algebra"])
///     .with_student("Oleg Sidorov", "AB123", &["Algebra"]);
///
/// let allocator = Allocator::new(AllocationConfig::default().with_population_size(100));
/// let solution = allocator.solve_request(&request).unwrap();
/// assert!(solution.feasible);
/// assert!(solution.best.courses[0].runnable);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Allocator {
    config: AllocationConfig,
}

impl Allocator {
    /// Creates an allocator.
    pub fn new(config: AllocationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AllocationConfig {
        &self.config
    }

    /// Validates `request`, builds the catalog, and solves it.
    pub fn solve_request(&self, request: &AllocationRequest) -> Result<Solution, Error> {
        validate_request(request).map_err(SetupError::Invalid)?;
        let catalog = Catalog::from_request(request)?;
        Ok(self.solve(&catalog)?)
    }

    /// Solves an already built catalog.
    ///
    /// The catalog is trusted: field-level checks run only in
    /// [`solve_request`](Self::solve_request). Debug builds assert that
    /// every course needs labs and admits students, and that every staff
    /// member and student lists a course.
    #[instrument(
        skip_all,
        fields(
            courses = catalog.courses.len(),
            professors = catalog.professors.len(),
            tas = catalog.tas.len(),
            students = catalog.students.len(),
        )
    )]
    pub fn solve(&self, catalog: &Catalog) -> Result<Solution, ConfigError> {
        debug_assert!(
            catalog.courses.iter().all(|c| c.labs > 0 && c.capacity > 0),
            "course with zero labs or zero capacity"
        );
        debug_assert!(
            catalog.professors.iter().all(|p| !p.trained.is_empty())
                && catalog.tas.iter().all(|t| !t.eligible.is_empty())
                && catalog.students.iter().all(|s| !s.desired.is_empty()),
            "staff member or student without courses"
        );
        let config = &self.config;
        config.validate()?;
        info!(
            seed = config.seed,
            population = config.population_size,
            elite = config.elite_size,
            "allocation started"
        );

        let problem = AllocationProblem::new(catalog, config);
        let mut population =
            Population::generate(&problem, config.population_size, config.seed, config.parallel);
        let evaluated = population.len();

        for _ in 0..config.generations {
            population.select_best(config.elite_size);
        }
        population.select_best(config.elite_size);

        let best = population
            .into_best()
            .ok_or(ConfigError::EmptyPopulation)?;
        let feasible = !best.violation;

        info!(
            badness = best.badness,
            runnable = best.runnable_count(),
            feasible,
            "allocation finished"
        );

        Ok(Solution {
            best,
            feasible,
            seed: config.seed,
            evaluated,
        })
    }

    /// Builds the report for `solution` under this allocator's limits.
    pub fn report<'a>(&self, catalog: &'a Catalog, solution: &Solution) -> AllocationReport<'a> {
        AllocationReport::new(catalog, &solution.best, &self.config.limits)
    }
}
