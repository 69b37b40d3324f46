//! Population generation and elitist selection.
//!
//! # Reproducibility
//!
//! Slot `i` of a population draws from `ChaCha8Rng` seeded with the global
//! seed and switched to stream `i`. Slots never share a random stream, so
//! the population is identical whether it is built sequentially or on any
//! number of rayon workers.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use tracing::debug;

use super::problem::AllocationProblem;
use crate::models::Individual;

/// Random stream for population slot `slot`.
pub fn slot_rng(seed: u64, slot: usize) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(slot as u64);
    rng
}

/// An ordered collection of independently built individuals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    /// Wraps existing individuals, keeping their order.
    pub fn from_individuals(individuals: Vec<Individual>) -> Self {
        Self { individuals }
    }

    /// Builds and scores `size` individuals.
    pub fn generate(
        problem: &AllocationProblem<'_>,
        size: usize,
        seed: u64,
        parallel: bool,
    ) -> Self {
        let build = |slot: usize| {
            let mut rng = slot_rng(seed, slot);
            problem.create_scored(&mut rng)
        };
        let individuals: Vec<Individual> = if parallel {
            (0..size).into_par_iter().map(build).collect()
        } else {
            (0..size).map(build).collect()
        };

        let population = Self { individuals };
        if let Some(stats) = population.stats() {
            debug!(
                size,
                best = stats.best,
                worst = stats.worst,
                mean = stats.mean,
                violations = stats.violations,
                "population generated"
            );
        }
        population
    }

    /// Keeps the `k` best individuals and drops the rest.
    ///
    /// Individuals that break a hard limit rank after all others; within
    /// each group, lower badness wins and ties keep their population order.
    /// Keeps everything when fewer than `k` individuals exist. Selecting
    /// again with the same `k` is a no-op.
    pub fn select_best(&mut self, k: usize) {
        // Stable sort: equal rank keeps first-encountered order.
        self.individuals.sort_by_key(Individual::rank);
        self.individuals.truncate(k);
        debug!(
            k,
            kept = self.individuals.len(),
            best = self.individuals.first().map(|i| i.badness),
            "elite selected"
        );
    }

    /// The best-ranked individual (first on ties).
    pub fn best(&self) -> Option<&Individual> {
        self.individuals
            .iter()
            .reduce(|best, ind| if ind.rank() < best.rank() { ind } else { best })
    }

    /// Removes and returns the best-ranked individual, dropping the rest.
    pub fn into_best(mut self) -> Option<Individual> {
        self.select_best(1);
        self.individuals.pop()
    }

    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Badness summary, or `None` for an empty population.
    pub fn stats(&self) -> Option<PopulationStats> {
        let first = self.individuals.first()?;
        let mut best = first.badness;
        let mut worst = first.badness;
        let mut total: u64 = 0;
        let mut violations = 0;
        for ind in &self.individuals {
            best = best.min(ind.badness);
            worst = worst.max(ind.badness);
            total += u64::from(ind.badness);
            violations += usize::from(ind.violation);
        }
        Some(PopulationStats {
            best,
            worst,
            mean: total as f64 / self.individuals.len() as f64,
            violations,
        })
    }
}

/// Badness summary of a population.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopulationStats {
    pub best: u32,
    pub worst: u32,
    pub mean: f64,
    /// Individuals breaking a hard limit.
    pub violations: usize,
}
