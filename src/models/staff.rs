//! Staff models: professors and teaching assistants.
//!
//! Both carry an ordered list of courses they may serve. A professor
//! teaches a whole course; a TA contributes lab-units to one or more
//! courses up to a fixed personal capacity.

use serde::{Deserialize, Serialize};

use super::{CourseId, ProfessorId, TaId};

/// A professor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Professor {
    pub id: ProfessorId,
    /// Full name ("First Last"), unique among professors.
    pub name: String,
    /// Courses the professor is trained to teach, in input order (non-empty).
    pub trained: Vec<CourseId>,
}

impl Professor {
    pub fn new(id: ProfessorId, name: impl Into<String>, trained: Vec<CourseId>) -> Self {
        Self {
            id,
            name: name.into(),
            trained,
        }
    }

    /// Whether the professor is trained for `course`.
    pub fn is_trained_for(&self, course: CourseId) -> bool {
        self.trained.contains(&course)
    }
}

/// A teaching assistant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeachingAssistant {
    pub id: TaId,
    /// Full name ("First Last"), unique among TAs.
    pub name: String,
    /// Courses the TA may assist, in input order (non-empty).
    pub eligible: Vec<CourseId>,
}

impl TeachingAssistant {
    pub fn new(id: TaId, name: impl Into<String>, eligible: Vec<CourseId>) -> Self {
        Self {
            id,
            name: name.into(),
            eligible,
        }
    }

    /// Whether the TA may assist `course`.
    pub fn is_eligible_for(&self, course: CourseId) -> bool {
        self.eligible.contains(&course)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_professor_training() {
        let p = Professor::new(
            ProfessorId::new(0),
            "Ivan Petrov",
            vec![CourseId::new(0), CourseId::new(2)],
        );
        assert!(p.is_trained_for(CourseId::new(0)));
        assert!(p.is_trained_for(CourseId::new(2)));
        assert!(!p.is_trained_for(CourseId::new(1)));
    }

    #[test]
    fn test_ta_eligibility() {
        let ta = TeachingAssistant::new(TaId::new(1), "Anna Lee", vec![CourseId::new(1)]);
        assert_eq!(ta.id.index(), 1);
        assert!(ta.is_eligible_for(CourseId::new(1)));
        assert!(!ta.is_eligible_for(CourseId::new(0)));
    }
}
