//! Input validation for allocation requests.
//!
//! Checks field-level integrity of every record before the catalog is
//! built. Detects:
//! - Empty or non-alphabetic names
//! - Courses with zero labs or zero capacity
//! - Malformed student codes
//! - Staff and students without any course
//!
//! Referential checks (duplicate names, unknown courses) happen during
//! catalog setup through the name index.

use crate::catalog::{AllocationRequest, StaffRecord};
use crate::models::STUDENT_CODE_LEN;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A name is empty or contains something other than ASCII letters and
    /// single separating spaces.
    InvalidName,
    /// A course needs zero labs or admits zero students.
    InvalidCount,
    /// A student code is not exactly five ASCII alphanumerics.
    InvalidStudentCode,
    /// A professor, TA, or student lists no courses.
    NoCourses,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Whether `name` is one or more ASCII-letter words joined by single spaces.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .split(' ')
            .all(|word| !word.is_empty() && word.bytes().all(|b| b.is_ascii_alphabetic()))
}

/// Whether `code` is a well-formed student code.
pub fn is_valid_student_code(code: &str) -> bool {
    code.len() == STUDENT_CODE_LEN && code.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Validates every record of an allocation request.
///
/// Checks:
/// 1. Course names are alphabetic; labs and capacity are positive
/// 2. Staff names are alphabetic and each lists at least one course
/// 3. Student names are alphabetic, codes are well-formed, each lists a course
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request(request: &AllocationRequest) -> ValidationResult {
    let mut errors = Vec::new();

    for course in &request.courses {
        if !is_valid_name(&course.name) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidName,
                format!("Invalid course name: '{}'", course.name),
            ));
        }
        if course.labs == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCount,
                format!("Course '{}' needs zero labs", course.name),
            ));
        }
        if course.capacity == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCount,
                format!("Course '{}' admits zero students", course.name),
            ));
        }
    }

    check_staff(&request.professors, "Professor", &mut errors);
    check_staff(&request.tas, "TA", &mut errors);

    for student in &request.students {
        if !is_valid_name(&student.name) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidName,
                format!("Invalid student name: '{}'", student.name),
            ));
        }
        if !is_valid_student_code(&student.code) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidStudentCode,
                format!(
                    "Student '{}' has malformed code '{}'",
                    student.name, student.code
                ),
            ));
        }
        if student.courses.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NoCourses,
                format!("Student '{}' wants no courses", student.name),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_staff(staff: &[StaffRecord], role: &str, errors: &mut Vec<ValidationError>) {
    for member in staff {
        if !is_valid_name(&member.name) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidName,
                format!("Invalid {role} name: '{}'", member.name),
            ));
        }
        if member.courses.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NoCourses,
                format!("{role} '{}' has no courses", member.name),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> AllocationRequest {
        AllocationRequest::new()
            .with_course("Algebra", 2, 30)
            .with_professor("Ivan Petrov", &["Algebra"])
            .with_ta("Anna Lee", &["Algebra"])
            .with_student("Oleg Sidorov", "AB123", &["Algebra"])
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_request(&valid_request()).is_ok());
    }

    #[test]
    fn test_name_rules() {
        assert!(is_valid_name("Algebra"));
        assert!(is_valid_name("Ivan Petrov"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("Algebra2"));
        assert!(!is_valid_name("Ivan  Petrov"));
        assert!(!is_valid_name("Ivan-Petrov"));
    }

    #[test]
    fn test_student_code_rules() {
        assert!(is_valid_student_code("AB123"));
        assert!(is_valid_student_code("abcde"));
        assert!(!is_valid_student_code("AB12"));
        assert!(!is_valid_student_code("AB1234"));
        assert!(!is_valid_student_code("AB-12"));
    }

    #[test]
    fn test_zero_counts() {
        let request = AllocationRequest::new().with_course("Algebra", 0, 0);
        let errors = validate_request(&request).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::InvalidCount));
    }

    #[test]
    fn test_empty_course_lists() {
        let request = valid_request()
            .with_professor("Nina Gold", &[])
            .with_student("Petr Ivanov", "ZZ999", &[]);
        let errors = validate_request(&request).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::NoCourses));
    }

    #[test]
    fn test_collects_all_errors() {
        let request = valid_request()
            .with_course("Bad1", 1, 1)
            .with_ta("X9 Y", &["Algebra"])
            .with_student("Ok Name", "bad", &["Algebra"]);
        let errors = validate_request(&request).unwrap_err();
        let kinds: Vec<_> = errors.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ValidationErrorKind::InvalidName,
                ValidationErrorKind::InvalidName,
                ValidationErrorKind::InvalidStudentCode,
            ]
        );
    }
}
