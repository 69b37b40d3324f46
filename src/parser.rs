//! Plain-text input format.
//!
//! ```text
//! Algebra 2 30
//! Geometry 1 25
//! P
//! Ivan Petrov Algebra Geometry
//! T
//! Anna Lee Algebra
//! S
//! Oleg Sidorov AB123 Algebra Geometry
//! ```
//!
//! Courses come first, one `Name labs capacity` per line, followed by the
//! professor (`P`), TA (`T`) and student (`S`) sections. Blank lines at
//! the end of the input are ignored; anywhere else they are an error.
//! Duplicate names are accepted here and rejected by catalog setup.

use std::str::FromStr;

use crate::catalog::AllocationRequest;
use crate::error::ParseError;
use crate::index::NameIndex;
use crate::validation::is_valid_student_code;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Courses,
    Professors,
    Tas,
    Students,
}

impl Section {
    /// The marker that opens the next section.
    fn next_marker(self) -> Option<&'static str> {
        match self {
            Section::Courses => Some("P"),
            Section::Professors => Some("T"),
            Section::Tas => Some("S"),
            Section::Students => None,
        }
    }

    fn advance(self) -> Self {
        match self {
            Section::Courses => Section::Professors,
            Section::Professors => Section::Tas,
            Section::Tas | Section::Students => Section::Students,
        }
    }
}

/// Parses the text format into an [`AllocationRequest`].
pub fn parse_request(input: &str) -> Result<AllocationRequest, ParseError> {
    let lines: Vec<&str> = input.lines().collect();
    let end = lines
        .iter()
        .rposition(|line| !line.trim().is_empty())
        .map_or(0, |last| last + 1);

    let mut request = AllocationRequest::new();
    let mut courses = NameIndex::new();
    let mut section = Section::Courses;

    for (i, raw) in lines[..end].iter().enumerate() {
        let line = i + 1;
        let tokens: Vec<&str> = raw.split_whitespace().collect();
        if tokens.is_empty() {
            return Err(ParseError::new(line, "empty line"));
        }

        if let Some(marker) = section.next_marker() {
            if tokens == [marker] {
                if section == Section::Courses && courses.is_empty() {
                    return Err(ParseError::new(line, "no courses before 'P'"));
                }
                section = section.advance();
                continue;
            }
        }

        match section {
            Section::Courses => {
                let [name, labs, capacity] = tokens[..] else {
                    return Err(ParseError::new(
                        line,
                        format!("expected 'Name labs capacity', found {} token(s)", tokens.len()),
                    ));
                };
                check_word(line, name)?;
                let labs = parse_count(line, "labs", labs)?;
                let capacity = parse_count(line, "capacity", capacity)?;
                courses.insert(name, ());
                request = request.with_course(name, labs, capacity);
            }
            Section::Professors | Section::Tas => {
                if tokens.len() < 3 {
                    return Err(ParseError::new(line, "expected 'First Last Course...'"));
                }
                let name = person_name(line, &tokens)?;
                let listed = course_refs(line, &courses, &tokens[2..])?;
                request = if section == Section::Professors {
                    request.with_professor(name, &listed)
                } else {
                    request.with_ta(name, &listed)
                };
            }
            Section::Students => {
                if tokens.len() < 4 {
                    return Err(ParseError::new(line, "expected 'First Last CODE Course...'"));
                }
                let name = person_name(line, &tokens)?;
                let code = tokens[2];
                if !is_valid_student_code(code) {
                    return Err(ParseError::new(line, format!("invalid student code '{code}'")));
                }
                let listed = course_refs(line, &courses, &tokens[3..])?;
                request = request.with_student(name, code, &listed);
            }
        }
    }

    if let Some(marker) = section.next_marker() {
        return Err(ParseError::new(
            end + 1,
            format!("missing section marker '{marker}'"),
        ));
    }
    Ok(request)
}

impl FromStr for AllocationRequest {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_request(s)
    }
}

fn check_word(line: usize, word: &str) -> Result<(), ParseError> {
    if word.bytes().all(|b| b.is_ascii_alphabetic()) {
        Ok(())
    } else {
        Err(ParseError::new(line, format!("'{word}' is not a letters-only name")))
    }
}

fn person_name(line: usize, tokens: &[&str]) -> Result<String, ParseError> {
    check_word(line, tokens[0])?;
    check_word(line, tokens[1])?;
    Ok(format!("{} {}", tokens[0], tokens[1]))
}

/// Positive integer without sign or leading zeros.
fn parse_count(line: usize, field: &str, token: &str) -> Result<u32, ParseError> {
    let well_formed = !token.starts_with('0') && token.bytes().all(|b| b.is_ascii_digit());
    match token.parse::<u32>() {
        Ok(value) if well_formed && value > 0 => Ok(value),
        _ => Err(ParseError::new(
            line,
            format!("{field} must be a positive integer, found '{token}'"),
        )),
    }
}

fn course_refs<'t>(
    line: usize,
    courses: &NameIndex<()>,
    tokens: &[&'t str],
) -> Result<Vec<&'t str>, ParseError> {
    tokens
        .iter()
        .map(|&name| {
            if courses.contains(name) {
                Ok(name)
            } else {
                Err(ParseError::new(line, format!("unknown course '{name}'")))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    const SAMPLE: &str = "\
Algebra 2 30
Geometry 1 25
P
Ivan Petrov Algebra Geometry
Nina Gold Geometry
T
Anna Lee Algebra
S
Oleg Sidorov AB123 Algebra Geometry
Maria Popova CD456 Geometry

";

    #[test]
    fn test_parse_sample() {
        let request = parse_request(SAMPLE).unwrap();
        assert_eq!(request.courses.len(), 2);
        assert_eq!(request.courses[0].name, "Algebra");
        assert_eq!(request.courses[0].labs, 2);
        assert_eq!(request.courses[1].capacity, 25);
        assert_eq!(request.professors.len(), 2);
        assert_eq!(request.professors[0].name, "Ivan Petrov");
        assert_eq!(request.professors[0].courses, vec!["Algebra", "Geometry"]);
        assert_eq!(request.tas[0].name, "Anna Lee");
        assert_eq!(request.students[1].code, "CD456");
        assert_eq!(request.students[1].courses, vec!["Geometry"]);

        let catalog = Catalog::from_request(&request).unwrap();
        assert_eq!(catalog.students.len(), 2);
    }

    #[test]
    fn test_from_str() {
        let request: AllocationRequest = SAMPLE.parse().unwrap();
        assert_eq!(request.tas.len(), 1);
    }

    #[test]
    fn test_empty_sections() {
        let request = parse_request("Algebra 1 1\nP\nT\nS\n").unwrap();
        assert_eq!(request.courses.len(), 1);
        assert!(request.professors.is_empty());
        assert!(request.students.is_empty());
    }

    #[test]
    fn test_unknown_course() {
        let err = parse_request("Algebra 1 1\nP\nIvan Petrov Physics\nT\nS\n").unwrap_err();
        assert_eq!(err.line, 3);
        assert!(err.reason.contains("Physics"));
    }

    #[test]
    fn test_bad_counts() {
        for bad in ["Algebra 0 5", "Algebra 01 5", "Algebra 2 -3", "Algebra 2 x"] {
            let input = format!("{bad}\nP\nT\nS\n");
            let err = parse_request(&input).unwrap_err();
            assert_eq!(err.line, 1, "{bad}");
        }
    }

    #[test]
    fn test_course_line_shape() {
        let err = parse_request("Algebra 2 3 4\nP\nT\nS\n").unwrap_err();
        assert_eq!(err.line, 1);
        let err = parse_request("Alg3bra 2 3\nP\nT\nS\n").unwrap_err();
        assert_eq!(err.line, 1);
    }

    #[test]
    fn test_missing_marker() {
        let err = parse_request("Algebra 1 1\nP\nIvan Petrov Algebra\n").unwrap_err();
        assert_eq!(err.line, 4);
        assert!(err.reason.contains("'T'"));
    }

    #[test]
    fn test_no_courses() {
        let err = parse_request("P\nT\nS\n").unwrap_err();
        assert_eq!(err.line, 1);
    }

    #[test]
    fn test_staff_and_student_lines() {
        let err = parse_request("Algebra 1 1\nP\nIvan Petrov\nT\nS\n").unwrap_err();
        assert_eq!(err.line, 3);

        let err = parse_request("Algebra 1 1\nP\nT\nS\nOleg Sidorov AB12 Algebra\n").unwrap_err();
        assert_eq!(err.line, 5);
        assert!(err.reason.contains("AB12"));

        let err = parse_request("Algebra 1 1\nP\nT\nS\nOleg Sidorov AB123\n").unwrap_err();
        assert_eq!(err.line, 5);
    }

    #[test]
    fn test_inner_blank_line() {
        let err = parse_request("Algebra 1 1\n\nP\nT\nS\n").unwrap_err();
        assert_eq!(err.line, 2);
    }

    #[test]
    fn test_duplicates_left_to_catalog() {
        let request = parse_request("Algebra 1 1\nAlgebra 2 2\nP\nT\nS\n").unwrap();
        assert!(Catalog::from_request(&request).is_err());
    }
}
