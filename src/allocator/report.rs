//! Allocation report.
//!
//! Turns the best individual into answers a reader cares about: which
//! courses run and with whom, who gets a seat, and what demand or
//! capacity is left over.
//!
//! # Statements
//!
//! | Statement | Condition |
//! |-----------|-----------|
//! | `<course> cannot be run.` | Course not runnable |
//! | `<professor> is unassigned.` | Professor teaches no runnable course |
//! | `<professor> is not trained for <course>.` | Teaches a runnable course outside their training |
//! | `<professor> is lacking class.` | Teaches exactly one runnable course, trained |
//! | `<ta> is lacking <n> lab(s).` | TA has unused lab-units |
//! | `<student> is lacking <course>.` | No seat left in a desired course |

use std::fmt;

use crate::catalog::Catalog;
use crate::ga::WorkloadLimits;
use crate::models::{CourseId, Individual, ProfessorId, StudentId, TaId, TaShare};

/// Staffing and enrolment of one runnable course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseStaffing {
    pub course: CourseId,
    pub professor: ProfessorId,
    pub tas: Vec<TaShare>,
    /// Students seated, in input order, at most the course capacity.
    pub enrolled: Vec<StudentId>,
}

/// A problem with a professor's load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfessorIssue {
    /// Teaches `course` without being trained for it.
    NotTrained {
        professor: ProfessorId,
        course: CourseId,
    },
    /// Teaches only one course.
    LackingClass(ProfessorId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProfessorState {
    Idle,
    Untrained(CourseId),
    One,
    Two,
}

/// Human-facing summary of one allocation.
#[derive(Debug, Clone)]
pub struct AllocationReport<'a> {
    catalog: &'a Catalog,
    /// Runnable courses, in course order.
    pub staffed: Vec<CourseStaffing>,
    /// Courses that cannot run, in course order.
    pub cancelled: Vec<CourseId>,
    /// Professors without any runnable course.
    pub unassigned: Vec<ProfessorId>,
    /// Load problems, in professor order.
    pub professor_issues: Vec<ProfessorIssue>,
    /// TAs with unused lab-units and how many.
    pub idle_labs: Vec<(TaId, u32)>,
    /// Students who did not get a seat in a desired course.
    pub missing_seats: Vec<(StudentId, CourseId)>,
    pub badness: u32,
}

impl<'a> AllocationReport<'a> {
    /// Builds the report for `individual`.
    pub fn new(catalog: &'a Catalog, individual: &Individual, limits: &WorkloadLimits) -> Self {
        let mut seats = vec![0u32; catalog.courses.len()];
        let mut states = vec![ProfessorState::Idle; catalog.professors.len()];
        let mut ta_labs = vec![0u32; catalog.tas.len()];
        let mut staffed = Vec::new();
        let mut cancelled = Vec::new();

        for assignment in &individual.courses {
            let course = catalog.course(assignment.course);
            let professor = match assignment.professor {
                Some(p) if assignment.runnable => catalog.professor(p),
                _ => {
                    cancelled.push(course.id);
                    continue;
                }
            };
            seats[course.id.index()] = course.capacity;

            let state = &mut states[professor.id.index()];
            if !professor.is_trained_for(course.id) {
                *state = ProfessorState::Untrained(course.id);
            } else {
                *state = match *state {
                    ProfessorState::Idle => ProfessorState::One,
                    ProfessorState::One => ProfessorState::Two,
                    other => other,
                };
            }

            for share in &assignment.tas {
                ta_labs[share.ta.index()] += share.labs;
            }

            let enrolled = catalog
                .students
                .iter()
                .filter(|s| s.wants(course.id))
                .take(course.capacity as usize)
                .map(|s| s.id)
                .collect();

            staffed.push(CourseStaffing {
                course: course.id,
                professor: professor.id,
                tas: assignment.tas.clone(),
                enrolled,
            });
        }

        let unassigned = states
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == ProfessorState::Idle)
            .map(|(i, _)| ProfessorId::new(i))
            .collect();

        let professor_issues = states
            .iter()
            .enumerate()
            .filter_map(|(i, s)| match *s {
                ProfessorState::Untrained(course) => Some(ProfessorIssue::NotTrained {
                    professor: ProfessorId::new(i),
                    course,
                }),
                ProfessorState::One => Some(ProfessorIssue::LackingClass(ProfessorId::new(i))),
                _ => None,
            })
            .collect();

        let idle_labs = ta_labs
            .iter()
            .enumerate()
            .filter(|(_, &labs)| labs < limits.ta_lab_capacity)
            .map(|(i, &labs)| (TaId::new(i), limits.ta_lab_capacity - labs))
            .collect();

        let mut missing_seats = Vec::new();
        for student in &catalog.students {
            for &course in &student.desired {
                let left = &mut seats[course.index()];
                if *left == 0 {
                    missing_seats.push((student.id, course));
                } else {
                    *left -= 1;
                }
            }
        }

        Self {
            catalog,
            staffed,
            cancelled,
            unassigned,
            professor_issues,
            idle_labs,
            missing_seats,
            badness: individual.badness,
        }
    }

    /// Staffing of `course`, or `None` if it cannot run.
    pub fn course_staffing(&self, course: CourseId) -> Option<&CourseStaffing> {
        self.staffed.iter().find(|s| s.course == course)
    }
}

impl fmt::Display for AllocationReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let catalog = self.catalog;

        for staffing in &self.staffed {
            writeln!(f, "{}", catalog.course(staffing.course).name)?;
            writeln!(f, "{}", catalog.professor(staffing.professor).name)?;
            for share in &staffing.tas {
                for _ in 0..share.labs {
                    writeln!(f, "{}", catalog.ta(share.ta).name)?;
                }
            }
            for &student in &staffing.enrolled {
                let student = &catalog.students[student.index()];
                writeln!(f, "{} {}", student.name, student.code)?;
            }
            writeln!(f)?;
        }

        for &course in &self.cancelled {
            writeln!(f, "{} cannot be run.", catalog.course(course).name)?;
        }
        for &professor in &self.unassigned {
            writeln!(f, "{} is unassigned.", catalog.professor(professor).name)?;
        }
        for issue in &self.professor_issues {
            match *issue {
                ProfessorIssue::NotTrained { professor, course } => writeln!(
                    f,
                    "{} is not trained for {}.",
                    catalog.professor(professor).name,
                    catalog.course(course).name
                )?,
                ProfessorIssue::LackingClass(professor) => {
                    writeln!(f, "{} is lacking class.", catalog.professor(professor).name)?
                }
            }
        }
        for &(ta, labs) in &self.idle_labs {
            writeln!(f, "{} is lacking {} lab(s).", catalog.ta(ta).name, labs)?;
        }
        for &(student, course) in &self.missing_seats {
            writeln!(
                f,
                "{} is lacking {}.",
                catalog.students[student.index()].name,
                catalog.course(course).name
            )?;
        }
        write!(f, "Total score is {}.", self.badness)
    }
}
