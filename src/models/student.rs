//! Student model.

use serde::{Deserialize, Serialize};

use super::{CourseId, StudentId};

/// Length of a student enrollment code.
pub const STUDENT_CODE_LEN: usize = 5;

/// A student and the courses they want to take.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    /// Full name ("First Last"). Not required to be unique.
    pub name: String,
    /// Unique enrollment code, [`STUDENT_CODE_LEN`] ASCII alphanumerics.
    pub code: String,
    /// Desired courses in input order (non-empty).
    pub desired: Vec<CourseId>,
}

impl Student {
    pub fn new(
        id: StudentId,
        name: impl Into<String>,
        code: impl Into<String>,
        desired: Vec<CourseId>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            code: code.into(),
            desired,
        }
    }

    /// Whether the student wants `course`.
    pub fn wants(&self, course: CourseId) -> bool {
        self.desired.contains(&course)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_wants() {
        let s = Student::new(
            StudentId::new(0),
            "Oleg Sidorov",
            "AB123",
            vec![CourseId::new(1)],
        );
        assert!(s.wants(CourseId::new(1)));
        assert!(!s.wants(CourseId::new(0)));
        assert_eq!(s.code.len(), STUDENT_CODE_LEN);
    }
}
