//! Badness (fitness) function.
//!
//! Lower is better. The score combines:
//!
//! | Term | Per |
//! |------|-----|
//! | `unrunnable_course + demand` | course that cannot run |
//! | `max(0, demand - capacity)` | runnable course |
//! | `professor_slack * (target - load)` | professor |
//! | `ta_slack * (capacity - committed)` | TA |
//!
//! A professor above the target load or a TA above lab capacity is a hard
//! violation: evaluation stops and the result carries `max_badness` with
//! the violation flag set. Feasible sums are never capped at `max_badness`;
//! they saturate at [`MAX_SCORED`].

use crate::catalog::Catalog;
use crate::models::{Individual, MAX_SCORED};

use super::config::{PenaltyWeights, WorkloadLimits};

/// Outcome of scoring one individual.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub badness: u32,
    /// A hard workload limit is broken.
    pub violation: bool,
}

impl Score {
    fn feasible(badness: u64) -> Self {
        Self {
            badness: u32::try_from(badness).map_or(MAX_SCORED, |b| b.min(MAX_SCORED)),
            violation: false,
        }
    }

    fn violation(max_badness: u32) -> Self {
        Self {
            badness: max_badness,
            violation: true,
        }
    }
}

/// Computes the badness of `individual`.
///
/// Pure: reads the individual and the catalog, never mutates either.
/// `demand[c]` is the number of students wanting course `c`.
pub fn evaluate_badness(
    individual: &Individual,
    catalog: &Catalog,
    demand: &[u32],
    weights: &PenaltyWeights,
    limits: &WorkloadLimits,
    max_badness: u32,
) -> Score {
    let mut badness: u64 = 0;
    let mut professor_load = vec![0u32; catalog.professors.len()];
    let mut ta_labs = vec![0u32; catalog.tas.len()];

    for assignment in &individual.courses {
        let idx = assignment.course.index();
        let course_demand = demand[idx];
        match assignment.professor {
            Some(professor) if assignment.runnable => {
                professor_load[professor.index()] += 1;
                badness += u64::from(catalog.courses[idx].overflow(course_demand));
                for share in &assignment.tas {
                    ta_labs[share.ta.index()] += share.labs;
                }
            }
            _ => {
                badness += u64::from(weights.unrunnable_course) + u64::from(course_demand);
            }
        }
    }

    for load in professor_load {
        if load > limits.professor_target_courses {
            return Score::violation(max_badness);
        }
        badness +=
            u64::from(weights.professor_slack) * u64::from(limits.professor_target_courses - load);
    }

    for labs in ta_labs {
        if labs > limits.ta_lab_capacity {
            return Score::violation(max_badness);
        }
        badness += u64::from(weights.ta_slack) * u64::from(limits.ta_lab_capacity - labs);
    }

    Score::feasible(badness)
}
