// File: ./src/model/parser.rs
// Splits a raw lecture title into course name, type tags and instructor.
use regex::Regex;
use std::sync::LazyLock;

static TYPE_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(([^)]+)\)").unwrap());

// Tried in order; the first match wins.
static INSTRUCTOR_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        // "Course - Name"
        Regex::new(r"\s+-\s+([^-]+)$").unwrap(),
        // "Course / Name"
        Regex::new(r"\s+/\s+([^/]+)$").unwrap(),
        // "Course  Name" (two or more spaces before a capitalized run)
        Regex::new(r"\s{2,}([A-Z][^.]+)$").unwrap(),
    ]
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLecture {
    pub course_name: String,
    pub lecture_types: Vec<String>,
    pub instructor: Option<String>,
}

/// Parses a calendar title such as `"Analysis I (V) - Müller"`.
///
/// Every parenthesized group becomes a type tag and is removed from the name.
/// The instructor stays part of the course name; it is only reported separately.
pub fn parse_lecture_line(line: &str) -> ParsedLecture {
    let trimmed = line.trim();

    let mut lecture_types = Vec::new();
    let mut without_types = trimmed.to_string();

    for caps in TYPE_TAG.captures_iter(trimmed) {
        lecture_types.push(caps[1].trim().to_string());
        without_types = without_types.replacen(&caps[0], "", 1).trim().to_string();
    }

    let instructor = INSTRUCTOR_PATTERNS.iter().find_map(|pattern| {
        pattern
            .captures(&without_types)
            .map(|caps| caps[1].trim().to_string())
    });

    ParsedLecture {
        course_name: without_types,
        lecture_types,
        instructor,
    }
}

/// Strips a trailing `" YYYY-MM-DD"` that some exports append to every title.
pub fn strip_date_suffix(title: &str) -> &str {
    static DATE_SUFFIX: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\s\d{4}-\d{2}-\d{2}$").unwrap());
    match DATE_SUFFIX.find(title) {
        Some(m) => &title[..m.start()],
        None => title,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_tag_with_dash_instructor() {
        let p = parse_lecture_line("Analysis I (V) - Müller");
        assert_eq!(p.course_name, "Analysis I  - Müller");
        assert_eq!(p.lecture_types, vec!["V"]);
        assert_eq!(p.instructor.as_deref(), Some("Müller"));
    }

    #[test]
    fn test_multiple_tags() {
        let p = parse_lecture_line("  Netzwerke und Schaltungen II (V) (U)  ");
        assert_eq!(p.course_name, "Netzwerke und Schaltungen II");
        assert_eq!(p.lecture_types, vec!["V", "U"]);
        assert_eq!(p.instructor, None);
    }

    #[test]
    fn test_slash_instructor() {
        let p = parse_lecture_line("Physik (U) / Keller");
        assert_eq!(p.instructor.as_deref(), Some("Keller"));
        assert_eq!(p.lecture_types, vec!["U"]);
    }

    #[test]
    fn test_double_space_instructor() {
        let p = parse_lecture_line("Informatik  Prof. Meier");
        // "Prof." contains a period, so the capitalized run must start after it
        assert_eq!(p.instructor, None);

        let p = parse_lecture_line("Informatik  Meier Hans");
        assert_eq!(p.instructor.as_deref(), Some("Meier Hans"));
    }

    #[test]
    fn test_dash_takes_priority_over_slash() {
        let p = parse_lecture_line("A / B - C");
        assert_eq!(p.instructor.as_deref(), Some("C"));
    }

    #[test]
    fn test_tag_content_is_trimmed() {
        let p = parse_lecture_line("Signale ( P )");
        assert_eq!(p.lecture_types, vec!["P"]);
        assert_eq!(p.course_name, "Signale");
    }

    #[test]
    fn test_strip_date_suffix() {
        assert_eq!(strip_date_suffix("Analysis I (V) 2025-03-04"), "Analysis I (V)");
        assert_eq!(strip_date_suffix("Analysis I (V)"), "Analysis I (V)");
        assert_eq!(strip_date_suffix("2025-03-04"), "2025-03-04");
    }
}
