//! Population-based allocation search.
//!
//! Builds a large population of independent random allocations, scores
//! each with the badness function, and keeps the best by elitist
//! truncation selection.
//!
//! # Encoding
//!
//! An [`Individual`](crate::models::Individual) stores, per course, the
//! bound professor and a list of TA lab shares. Individuals are built
//! directly in this form; there is no separate genotype to decode.
//!
//! # Submodules
//!
//! - [`config`]: search parameters, penalty weights, workload limits
//! - [`pools`]: TA eligibility pools and student demand counts
//! - [`individual`]: randomized professor/TA distribution
//! - [`fitness`]: badness function
//! - `population`: generation and selection
//! - `problem`: individual creation and scoring over one catalog

pub mod config;
pub mod fitness;
pub mod individual;
pub mod pools;
mod population;
mod problem;

pub use config::{AllocationConfig, PenaltyWeights, WorkloadLimits};
pub use fitness::Score;
pub use pools::ResourcePools;
pub use population::{slot_rng, Population, PopulationStats};
pub use problem::AllocationProblem;
