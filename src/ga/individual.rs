//! Randomized construction of one candidate allocation.
//!
//! # Construction
//!
//! 1. **Professors**: courses are visited in a uniformly shuffled order and
//!    professors are handed out in catalog order, one course each. When a
//!    professor is trained for both the current and the next shuffled
//!    course, they take both. Professors left over after the last course
//!    stay unassigned.
//! 2. **TAs**: courses are visited in id order. A course without a
//!    professor is skipped. Otherwise its eligibility pool is shuffled and
//!    walked, binding each TA for `min(remaining need, remaining capacity)`
//!    lab-units. If the pool runs out before the need is met, every unit
//!    just committed is returned and the course is retracted.
//!
//! TA capacity is tracked across the whole individual, so earlier courses
//! consume capacity that later courses cannot use.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

use crate::models::{Course, CourseId, Individual, Professor, TaId, TaShare};

/// Binds professors to courses in shuffled course order.
pub fn distribute_professors<R: Rng + ?Sized>(
    individual: &mut Individual,
    professors: &[Professor],
    rng: &mut R,
) {
    let mut order: Vec<CourseId> = individual.courses.iter().map(|c| c.course).collect();
    order.shuffle(rng);

    let mut next = 0;
    for professor in professors {
        let Some(&first) = order.get(next) else {
            break;
        };
        individual.courses[first.index()].professor = Some(professor.id);

        if let Some(&second) = order.get(next + 1) {
            if professor.is_trained_for(first) && professor.is_trained_for(second) {
                individual.courses[second.index()].professor = Some(professor.id);
                next += 1;
            }
        }
        next += 1;
    }
}

/// Binds TAs to every course that has a professor, retracting courses
/// whose lab need cannot be covered.
///
/// `eligibility[c]` lists the TAs allowed on course `c`; every TA starts
/// with `ta_capacity` lab-units.
pub fn distribute_tas<R: Rng + ?Sized>(
    individual: &mut Individual,
    courses: &[Course],
    eligibility: &[Vec<TaId>],
    ta_count: usize,
    ta_capacity: u32,
    rng: &mut R,
) {
    let mut remaining = vec![ta_capacity; ta_count];

    for assignment in &mut individual.courses {
        if assignment.professor.is_none() {
            continue;
        }
        let course = &courses[assignment.course.index()];
        let mut pool = eligibility[course.id.index()].clone();
        pool.shuffle(rng);

        let mut needed = course.labs;
        for ta in pool {
            if needed == 0 {
                break;
            }
            let left = &mut remaining[ta.index()];
            if *left == 0 {
                continue;
            }
            let labs = needed.min(*left);
            *left -= labs;
            needed -= labs;
            assignment.tas.push(TaShare { ta, labs });
        }

        if needed > 0 {
            for share in assignment.retract() {
                remaining[share.ta.index()] += share.labs;
            }
            trace!(course = %course.name, missing = needed, "course retracted");
        } else {
            assignment.runnable = true;
        }
    }
}
