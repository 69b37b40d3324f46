//! Precomputed resource pools.
//!
//! Per-course TA eligibility lists and student demand counts. Both are
//! computed once per solve from the immutable catalog and shared
//! read-only by every individual.

use crate::catalog::Catalog;
use crate::models::{Student, TaId, TeachingAssistant};

/// Eligibility pools and demand counts, indexed by course id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePools {
    /// `eligibility[c]`: TAs allowed to assist course `c`, in TA order.
    pub eligibility: Vec<Vec<TaId>>,
    /// `demand[c]`: number of students wanting course `c`.
    pub demand: Vec<u32>,
}

impl ResourcePools {
    /// Builds both pools from a catalog.
    pub fn build(catalog: &Catalog) -> Self {
        let course_count = catalog.courses.len();
        Self {
            eligibility: build_eligibility_pool(course_count, &catalog.tas),
            demand: build_demand_counts(course_count, &catalog.students),
        }
    }
}

/// For each TA, for each eligible course, appends the TA to that course's pool.
pub fn build_eligibility_pool(course_count: usize, tas: &[TeachingAssistant]) -> Vec<Vec<TaId>> {
    let mut pool = vec![Vec::new(); course_count];
    for ta in tas {
        for course in &ta.eligible {
            pool[course.index()].push(ta.id);
        }
    }
    pool
}

/// For each student, for each desired course, increments that course's demand.
pub fn build_demand_counts(course_count: usize, students: &[Student]) -> Vec<u32> {
    let mut demand = vec![0; course_count];
    for student in students {
        for course in &student.desired {
            demand[course.index()] += 1;
        }
    }
    demand
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::AllocationRequest;

    #[test]
    fn test_pools_from_catalog() {
        let request = AllocationRequest::new()
            .with_course("Algebra", 2, 30)
            .with_course("Geometry", 1, 10)
            .with_course("Physics", 1, 10)
            .with_professor("Ivan Petrov", &["Algebra"])
            .with_ta("Anna Lee", &["Geometry", "Algebra"])
            .with_ta("Boris Kim", &["Algebra"])
            .with_student("Oleg Sidorov", "AB123", &["Algebra", "Geometry"])
            .with_student("Maria Popova", "CD456", &["Algebra"]);
        let catalog = Catalog::from_request(&request).unwrap();
        let pools = ResourcePools::build(&catalog);

        assert_eq!(pools.eligibility[0], vec![TaId::new(0), TaId::new(1)]);
        assert_eq!(pools.eligibility[1], vec![TaId::new(0)]);
        assert!(pools.eligibility[2].is_empty());
        assert_eq!(pools.demand, vec![2, 1, 0]);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(build_eligibility_pool(0, &[]).is_empty());
        assert_eq!(build_demand_counts(3, &[]), vec![0, 0, 0]);
    }
}
