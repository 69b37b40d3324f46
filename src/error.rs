//! Error types.
//!
//! Only setup, configuration and parsing can fail. Course-level staffing
//! shortfalls and workload violations are scoring data, not errors: they
//! surface as `runnable = false` and as the individual's `violation` flag.

use thiserror::Error;

use crate::validation::ValidationError;

/// Failure while building a [`Catalog`](crate::catalog::Catalog).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    /// A course, professor, or TA name (or a student code) was inserted twice.
    #[error("duplicate {kind} '{name}'")]
    DuplicateName { kind: RecordKind, name: String },
    /// A staff member or student references a course that does not exist.
    #[error("{kind} '{owner}' references unknown course '{course}'")]
    UnknownCourse {
        kind: RecordKind,
        owner: String,
        course: String,
    },
    /// Field-level validation failed.
    #[error("invalid input ({} issue(s))", .0.len())]
    Invalid(Vec<ValidationError>),
}

/// Which record family an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Course,
    Professor,
    Ta,
    Student,
    StudentCode,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            RecordKind::Course => "course",
            RecordKind::Professor => "professor",
            RecordKind::Ta => "TA",
            RecordKind::Student => "student",
            RecordKind::StudentCode => "student code",
        };
        f.write_str(label)
    }
}

/// Rejected [`AllocationConfig`](crate::ga::AllocationConfig).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("population_size must be at least 1")]
    EmptyPopulation,
    #[error("elite_size must be at least 1")]
    EmptyElite,
    #[error("elite_size ({elite}) exceeds population_size ({population})")]
    EliteTooLarge { elite: usize, population: usize },
    #[error("ta_lab_capacity must be at least 1")]
    ZeroTaCapacity,
    #[error("professor_target_courses must be at least 1")]
    ZeroProfessorTarget,
    #[error("max_badness must be positive")]
    ZeroMaxBadness,
}

/// Malformed input text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {reason}")]
pub struct ParseError {
    /// 1-based line number.
    pub line: usize,
    pub reason: String,
}

impl ParseError {
    pub(crate) fn new(line: usize, reason: impl Into<String>) -> Self {
        Self {
            line,
            reason: reason.into(),
        }
    }
}

/// Any failure the crate can report.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Setup(#[from] SetupError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_error_messages() {
        let err = SetupError::DuplicateName {
            kind: RecordKind::Professor,
            name: "Ivan Petrov".into(),
        };
        assert_eq!(err.to_string(), "duplicate professor 'Ivan Petrov'");

        let err = SetupError::UnknownCourse {
            kind: RecordKind::Ta,
            owner: "Anna Lee".into(),
            course: "Chemistry".into(),
        };
        assert_eq!(
            err.to_string(),
            "TA 'Anna Lee' references unknown course 'Chemistry'"
        );
    }

    #[test]
    fn test_error_from_conversions() {
        let err: Error = ParseError::new(3, "missing capacity").into();
        assert_eq!(err.to_string(), "line 3: missing capacity");

        let err: Error = ConfigError::EmptyPopulation.into();
        assert!(matches!(err, Error::Config(ConfigError::EmptyPopulation)));
    }
}
