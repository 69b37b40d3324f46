//! Allocation search configuration.
//!
//! [`AllocationConfig`] holds the population parameters, the scoring
//! weights and the workload limits. Every field has a default matching
//! the reference configuration, and `#[serde(default)]` lets a partial
//! document override only the fields it names.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default seed for the population's random streams.
pub const DEFAULT_SEED: u64 = 74_395_212;

/// Badness assigned to an individual that breaks a hard workload limit.
pub const DEFAULT_MAX_BADNESS: u32 = 30_000;

/// Penalty weights used by the badness function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PenaltyWeights {
    /// Flat penalty per course that cannot run.
    pub unrunnable_course: u32,
    /// Penalty per course a professor teaches below the target load.
    pub professor_slack: u32,
    /// Penalty per unused TA lab-unit.
    pub ta_slack: u32,
}

impl Default for PenaltyWeights {
    fn default() -> Self {
        Self {
            unrunnable_course: 20,
            professor_slack: 5,
            ta_slack: 2,
        }
    }
}

/// Workload limits for staff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkloadLimits {
    /// Courses a professor should teach; teaching more is a hard violation.
    pub professor_target_courses: u32,
    /// Lab-units each TA can cover across all courses.
    pub ta_lab_capacity: u32,
}

impl Default for WorkloadLimits {
    fn default() -> Self {
        Self {
            professor_target_courses: 2,
            ta_lab_capacity: 4,
        }
    }
}

/// Configuration for the allocation search.
///
/// # Defaults
///
/// ```
/// use u_staffing::ga::AllocationConfig;
///
/// let config = AllocationConfig::default();
/// assert_eq!(config.population_size, 10_000);
/// assert_eq!(config.elite_size, 50);
/// assert_eq!(config.generations, 0);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_staffing::ga::AllocationConfig;
///
/// let config = AllocationConfig::default()
///     .with_population_size(500)
///     .with_elite_size(10)
///     .with_seed(7)
///     .with_parallel(false);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocationConfig {
    /// Number of independently built individuals.
    pub population_size: usize,

    /// Number of individuals kept by elitist selection.
    pub elite_size: usize,

    /// Selection passes before the final one.
    ///
    /// Each pass only truncates the population to the elite; no offspring
    /// are produced, so values above zero do not change the result.
    pub generations: usize,

    /// Reserved: offspring per generation for a recombining search. Unused.
    pub offspring_size: usize,

    /// Reserved: mutants per generation for a mutating search. Unused.
    pub mutation_size: usize,

    /// Global seed. Slot `i` of the population draws from ChaCha stream `i`
    /// of this seed.
    pub seed: u64,

    /// Whether to build the population in parallel using rayon.
    ///
    /// Results are identical either way.
    pub parallel: bool,

    /// Penalty weights.
    pub weights: PenaltyWeights,

    /// Staff workload limits.
    pub limits: WorkloadLimits,

    /// Sentinel badness for individuals that break a hard limit.
    pub max_badness: u32,
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self {
            population_size: 10_000,
            elite_size: 50,
            generations: 0,
            offspring_size: 1_250,
            mutation_size: 1_200,
            seed: DEFAULT_SEED,
            parallel: true,
            weights: PenaltyWeights::default(),
            limits: WorkloadLimits::default(),
            max_badness: DEFAULT_MAX_BADNESS,
        }
    }
}

impl AllocationConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the elite size.
    pub fn with_elite_size(mut self, n: usize) -> Self {
        self.elite_size = n;
        self
    }

    /// Sets the number of extra selection passes.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the global seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Enables or disables parallel population building.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the penalty weights.
    pub fn with_weights(mut self, weights: PenaltyWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Sets the workload limits.
    pub fn with_limits(mut self, limits: WorkloadLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Sets the hard-violation sentinel.
    pub fn with_max_badness(mut self, max_badness: u32) -> Self {
        self.max_badness = max_badness;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.elite_size == 0 {
            return Err(ConfigError::EmptyElite);
        }
        if self.elite_size > self.population_size {
            return Err(ConfigError::EliteTooLarge {
                elite: self.elite_size,
                population: self.population_size,
            });
        }
        if self.limits.ta_lab_capacity == 0 {
            return Err(ConfigError::ZeroTaCapacity);
        }
        if self.limits.professor_target_courses == 0 {
            return Err(ConfigError::ZeroProfessorTarget);
        }
        if self.max_badness == 0 {
            return Err(ConfigError::ZeroMaxBadness);
        }
        Ok(())
    }
}
