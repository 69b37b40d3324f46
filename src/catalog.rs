//! Allocation input and the immutable catalog built from it.
//!
//! [`AllocationRequest`] holds typed input records that refer to courses
//! by name. [`Catalog::from_request`] assigns sequential ids, rejects
//! duplicate names through [`NameIndex`], and resolves course names to
//! [`CourseId`]s. The resulting catalog is read-only for the rest of the
//! solve.

use serde::{Deserialize, Serialize};

use crate::error::{RecordKind, SetupError};
use crate::index::NameIndex;
use crate::models::{
    Course, CourseId, Professor, ProfessorId, Student, StudentId, TaId, TeachingAssistant,
};

/// Input record for a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub name: String,
    pub labs: u32,
    pub capacity: u32,
}

/// Input record for a professor or TA.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffRecord {
    pub name: String,
    /// Course names, in order.
    pub courses: Vec<String>,
}

/// Input record for a student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub name: String,
    pub code: String,
    /// Desired course names, in order.
    pub courses: Vec<String>,
}

/// Typed allocation input.
///
/// # Example
/// ```
/// use u_staffing::catalog::{AllocationRequest, Catalog};
///
/// let request = AllocationRequest::new()
///     .with_course("Algebra", 2, 30)
///     .with_professor("Ivan Petrov", &["Algebra"])
///     .with_ta("Anna Lee", &["Algebra"])
///     .with_student("Oleg Sidorov", "AB123", &["Algebra"]);
///
/// let catalog = Catalog::from_request(&request).unwrap();
/// assert_eq!(catalog.courses.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationRequest {
    pub courses: Vec<CourseRecord>,
    pub professors: Vec<StaffRecord>,
    pub tas: Vec<StaffRecord>,
    pub students: Vec<StudentRecord>,
}

fn names(courses: &[&str]) -> Vec<String> {
    courses.iter().map(|c| c.to_string()).collect()
}

impl AllocationRequest {
    /// Creates an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a course.
    pub fn with_course(mut self, name: impl Into<String>, labs: u32, capacity: u32) -> Self {
        self.courses.push(CourseRecord {
            name: name.into(),
            labs,
            capacity,
        });
        self
    }

    /// Adds a professor trained for `courses`.
    pub fn with_professor(mut self, name: impl Into<String>, courses: &[&str]) -> Self {
        self.professors.push(StaffRecord {
            name: name.into(),
            courses: names(courses),
        });
        self
    }

    /// Adds a TA eligible for `courses`.
    pub fn with_ta(mut self, name: impl Into<String>, courses: &[&str]) -> Self {
        self.tas.push(StaffRecord {
            name: name.into(),
            courses: names(courses),
        });
        self
    }

    /// Adds a student wanting `courses`.
    pub fn with_student(
        mut self,
        name: impl Into<String>,
        code: impl Into<String>,
        courses: &[&str],
    ) -> Self {
        self.students.push(StudentRecord {
            name: name.into(),
            code: code.into(),
            courses: names(courses),
        });
        self
    }
}

/// Immutable domain records for one solve.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub courses: Vec<Course>,
    pub professors: Vec<Professor>,
    pub tas: Vec<TeachingAssistant>,
    pub students: Vec<Student>,
    course_index: NameIndex<CourseId>,
}

impl Catalog {
    /// Builds the catalog, failing on the first duplicate name or
    /// unknown course reference.
    pub fn from_request(request: &AllocationRequest) -> Result<Self, SetupError> {
        let mut course_index = NameIndex::new();
        let mut courses = Vec::with_capacity(request.courses.len());
        for record in &request.courses {
            let id = CourseId::new(courses.len());
            if !course_index.insert(record.name.as_str(), id) {
                return Err(duplicate(RecordKind::Course, &record.name));
            }
            courses.push(Course::new(id, &record.name, record.labs, record.capacity));
        }

        let mut professor_index = NameIndex::new();
        let mut professors = Vec::with_capacity(request.professors.len());
        for record in &request.professors {
            let id = ProfessorId::new(professors.len());
            if !professor_index.insert(record.name.as_str(), id) {
                return Err(duplicate(RecordKind::Professor, &record.name));
            }
            let trained = resolve(&course_index, RecordKind::Professor, record)?;
            professors.push(Professor::new(id, &record.name, trained));
        }

        let mut ta_index = NameIndex::new();
        let mut tas = Vec::with_capacity(request.tas.len());
        for record in &request.tas {
            let id = TaId::new(tas.len());
            if !ta_index.insert(record.name.as_str(), id) {
                return Err(duplicate(RecordKind::Ta, &record.name));
            }
            let eligible = resolve(&course_index, RecordKind::Ta, record)?;
            tas.push(TeachingAssistant::new(id, &record.name, eligible));
        }

        let mut code_index = NameIndex::new();
        let mut students = Vec::with_capacity(request.students.len());
        for record in &request.students {
            let id = StudentId::new(students.len());
            if !code_index.insert(record.code.as_str(), id) {
                return Err(duplicate(RecordKind::StudentCode, &record.code));
            }
            let desired = record
                .courses
                .iter()
                .map(|name| lookup(&course_index, RecordKind::Student, &record.name, name))
                .collect::<Result<Vec<_>, _>>()?;
            students.push(Student::new(id, &record.name, &record.code, desired));
        }

        Ok(Self {
            courses,
            professors,
            tas,
            students,
            course_index,
        })
    }

    /// Looks up a course by name.
    pub fn course_by_name(&self, name: &str) -> Option<&Course> {
        self.course_index
            .get(name)
            .and_then(|id| self.courses.get(id.index()))
    }

    pub fn course(&self, id: CourseId) -> &Course {
        &self.courses[id.index()]
    }

    pub fn professor(&self, id: ProfessorId) -> &Professor {
        &self.professors[id.index()]
    }

    pub fn ta(&self, id: TaId) -> &TeachingAssistant {
        &self.tas[id.index()]
    }
}

fn duplicate(kind: RecordKind, name: &str) -> SetupError {
    SetupError::DuplicateName {
        kind,
        name: name.to_string(),
    }
}

fn lookup(
    index: &NameIndex<CourseId>,
    kind: RecordKind,
    owner: &str,
    course: &str,
) -> Result<CourseId, SetupError> {
    index
        .get(course)
        .copied()
        .ok_or_else(|| SetupError::UnknownCourse {
            kind,
            owner: owner.to_string(),
            course: course.to_string(),
        })
}

fn resolve(
    index: &NameIndex<CourseId>,
    kind: RecordKind,
    record: &StaffRecord,
) -> Result<Vec<CourseId>, SetupError> {
    record
        .courses
        .iter()
        .map(|name| lookup(index, kind, &record.name, name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> AllocationRequest {
        AllocationRequest::new()
            .with_course("Algebra", 2, 30)
            .with_course("Geometry", 1, 10)
            .with_professor("Ivan Petrov", &["Algebra", "Geometry"])
            .with_ta("Anna Lee", &["Geometry"])
            .with_ta("Boris Kim", &["Algebra", "Geometry"])
            .with_student("Oleg Sidorov", "AB123", &["Geometry", "Algebra"])
    }

    #[test]
    fn test_catalog_from_request() {
        let catalog = Catalog::from_request(&sample_request()).unwrap();
        assert_eq!(catalog.courses.len(), 2);
        assert_eq!(catalog.professors.len(), 1);
        assert_eq!(catalog.tas.len(), 2);
        assert_eq!(catalog.students.len(), 1);

        assert_eq!(catalog.courses[1].id, CourseId::new(1));
        assert_eq!(
            catalog.professors[0].trained,
            vec![CourseId::new(0), CourseId::new(1)]
        );
        assert_eq!(catalog.tas[1].id, TaId::new(1));
        assert_eq!(
            catalog.students[0].desired,
            vec![CourseId::new(1), CourseId::new(0)]
        );
        assert_eq!(catalog.course_by_name("Geometry").unwrap().capacity, 10);
        assert!(catalog.course_by_name("Physics").is_none());
    }

    #[test]
    fn test_duplicate_course_rejected() {
        let request = sample_request().with_course("Algebra", 1, 5);
        assert_eq!(
            Catalog::from_request(&request).unwrap_err(),
            SetupError::DuplicateName {
                kind: RecordKind::Course,
                name: "Algebra".into()
            }
        );
    }

    #[test]
    fn test_duplicate_professor_rejected() {
        let request = sample_request().with_professor("Ivan Petrov", &["Geometry"]);
        let err = Catalog::from_request(&request).unwrap_err();
        assert!(matches!(
            err,
            SetupError::DuplicateName {
                kind: RecordKind::Professor,
                ..
            }
        ));
    }

    #[test]
    fn test_same_name_professor_and_ta_allowed() {
        let request = sample_request().with_ta("Ivan Petrov", &["Algebra"]);
        assert!(Catalog::from_request(&request).is_ok());
    }

    #[test]
    fn test_duplicate_student_code_rejected() {
        let request = sample_request().with_student("Other Person", "AB123", &["Algebra"]);
        let err = Catalog::from_request(&request).unwrap_err();
        assert!(matches!(
            err,
            SetupError::DuplicateName {
                kind: RecordKind::StudentCode,
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_course_rejected() {
        let request = sample_request().with_ta("Vera Nova", &["Physics"]);
        assert_eq!(
            Catalog::from_request(&request).unwrap_err(),
            SetupError::UnknownCourse {
                kind: RecordKind::Ta,
                owner: "Vera Nova".into(),
                course: "Physics".into(),
            }
        );
    }
}
