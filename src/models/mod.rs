//! Course staffing domain models.
//!
//! Domain records (`Course`, `Professor`, `TeachingAssistant`, `Student`)
//! are created once per solve and shared read-only by the whole
//! population. Allocation records (`Individual`, `CourseAssignment`,
//! `TaShare`) are built per candidate and owned by it.
//!
//! # Records
//!
//! | Type | Identified by | Meaning |
//! |------|---------------|---------|
//! | Course | `CourseId` | Unit of demand to staff |
//! | Professor | `ProfessorId` | Lecturer with a training list |
//! | TeachingAssistant | `TaId` | Lab staff with an eligibility list |
//! | Student | `StudentId` | Demand source with desired courses |
//! | Individual | position in population | One candidate allocation |

mod allocation;
mod course;
mod staff;
mod student;

pub use allocation::{CourseAssignment, Individual, TaShare, MAX_SCORED, UNSCORED};
pub use course::Course;
pub use staff::{Professor, TeachingAssistant};
pub use student::{Student, STUDENT_CODE_LEN};

use serde::{Deserialize, Serialize};

macro_rules! typed_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(usize);

        impl $name {
            /// Wraps a zero-based position.
            #[inline]
            pub const fn new(index: usize) -> Self {
                Self(index)
            }

            /// The zero-based position in its catalog list.
            #[inline]
            pub const fn index(self) -> usize {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id!(
    /// Position of a course in the catalog.
    CourseId
);
typed_id!(
    /// Position of a professor in the catalog.
    ProfessorId
);
typed_id!(
    /// Position of a TA in the catalog.
    TaId
);
typed_id!(
    /// Position of a student in the catalog.
    StudentId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_ids() {
        let c = CourseId::new(4);
        assert_eq!(c.index(), 4);
        assert_eq!(c.to_string(), "CourseId(4)");
        assert!(TaId::new(1) < TaId::new(2));
        assert_eq!(serde_json::to_string(&ProfessorId::new(7)).unwrap(), "7");
    }
}
