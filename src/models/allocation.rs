//! Allocation (candidate solution) model.
//!
//! An [`Individual`] is one complete candidate allocation: for every
//! course, whether it runs, which professor teaches it, and which TAs
//! cover how many of its labs. Each individual exclusively owns its
//! course assignments; nothing is shared between individuals.

use serde::{Deserialize, Serialize};

use super::{CourseId, ProfessorId, TaId};

/// Badness of an individual that has not been scored yet.
pub const UNSCORED: u32 = u32::MAX;

/// Largest badness a scored individual can carry.
pub const MAX_SCORED: u32 = UNSCORED - 1;

/// A TA's share of one course's labs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaShare {
    pub ta: TaId,
    /// Lab-units committed to the course.
    pub labs: u32,
}

/// Staffing of one course inside one individual.
///
/// Invariant: when `runnable` is false, `professor` is `None` and `tas`
/// is empty, except transiently while the builder is still working on
/// the course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseAssignment {
    pub course: CourseId,
    pub runnable: bool,
    pub professor: Option<ProfessorId>,
    pub tas: Vec<TaShare>,
}

impl CourseAssignment {
    /// An unstaffed, non-runnable assignment.
    pub fn new(course: CourseId) -> Self {
        Self {
            course,
            runnable: false,
            professor: None,
            tas: Vec::new(),
        }
    }

    /// Lab-units covered by the bound TAs.
    pub fn covered_labs(&self) -> u32 {
        self.tas.iter().map(|s| s.labs).sum()
    }

    /// Lab-units committed by `ta` to this course.
    pub fn labs_of(&self, ta: TaId) -> u32 {
        self.tas
            .iter()
            .filter(|s| s.ta == ta)
            .map(|s| s.labs)
            .sum()
    }

    /// Drops all staff and marks the course non-runnable.
    ///
    /// Returns the TA shares that were released.
    pub fn retract(&mut self) -> Vec<TaShare> {
        self.runnable = false;
        self.professor = None;
        std::mem::take(&mut self.tas)
    }
}

/// One candidate allocation of professors and TAs to all courses.
///
/// Lower badness is better. [`UNSCORED`] until evaluated. A candidate
/// that breaks a hard workload limit has `violation` set and ranks after
/// every candidate that does not, whatever their badness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Individual {
    pub badness: u32,
    /// A professor or TA is over their hard limit.
    #[serde(default)]
    pub violation: bool,
    /// One entry per course, indexed by course id.
    pub courses: Vec<CourseAssignment>,
}

impl Individual {
    /// Creates an individual with every course unstaffed.
    pub fn unassigned(course_count: usize) -> Self {
        Self {
            badness: UNSCORED,
            violation: false,
            courses: (0..course_count)
                .map(|i| CourseAssignment::new(CourseId::new(i)))
                .collect(),
        }
    }

    /// The assignment for `course`.
    pub fn assignment(&self, course: CourseId) -> Option<&CourseAssignment> {
        self.courses.get(course.index())
    }

    /// Whether the individual has been scored.
    pub fn is_scored(&self) -> bool {
        self.badness != UNSCORED
    }

    /// Selection key: feasible before violating, then lower badness.
    pub fn rank(&self) -> (bool, u32) {
        (self.violation, self.badness)
    }

    /// Number of runnable courses.
    pub fn runnable_count(&self) -> usize {
        self.courses.iter().filter(|c| c.runnable).count()
    }

    /// Number of runnable courses taught by `professor`.
    pub fn professor_load(&self, professor: ProfessorId) -> u32 {
        self.courses
            .iter()
            .filter(|c| c.runnable && c.professor == Some(professor))
            .count() as u32
    }

    /// Lab-units committed by `ta` across all runnable courses.
    pub fn committed_labs(&self, ta: TaId) -> u32 {
        self.courses
            .iter()
            .filter(|c| c.runnable)
            .map(|c| c.labs_of(ta))
            .sum()
    }
}
