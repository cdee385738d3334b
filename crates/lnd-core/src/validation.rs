//! Shared validation primitives for frontmatter mappings.
//!
//! Every content kind assembles its own rule set from these checks. Only
//! `Critical` issues abort parsing; everything else is recorded and the
//! document proceeds with best-effort defaults.

use std::fmt;

use libs::serde_yaml::{Mapping, Value};

use crate::date::parse_date;
use crate::yaml::{field, is_missing};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Critical,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
    pub severity: Severity,
}

impl ValidationIssue {
    pub fn critical(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            severity: Severity::Critical,
        }
    }

    pub fn error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            severity: Severity::Error,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl ValidationWarning {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn suggest(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// A document is valid as long as no critical issue was recorded.
    pub fn valid(&self) -> bool {
        !self
            .errors
            .iter()
            .any(|e| e.severity == Severity::Critical)
    }
}

/// Raised when a document fails validation with at least one critical issue.
/// Carries the full list of findings so callers can report them in one piece.
#[derive(Clone, Debug)]
pub struct ValidationFailure {
    pub kind: &'static str,
    pub slug: String,
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationFailure {
    pub fn critical_errors(&self) -> Vec<&ValidationIssue> {
        self.errors
            .iter()
            .filter(|e| e.severity == Severity::Critical)
            .collect()
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} validation failed ({})", self.kind, self.slug)?;
        for error in &self.errors {
            write!(f, "\n  - {}: {}", error.field, error.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationFailure {}

pub fn require_fields(data: &Mapping, fields: &[&str]) -> Vec<ValidationIssue> {
    fields
        .iter()
        .filter(|name| is_missing(field(data, name)))
        .map(|name| {
            ValidationIssue::critical(*name, format!("required field '{}' is missing", name))
        })
        .collect()
}

pub fn check_array(data: &Mapping, name: &str) -> Option<ValidationIssue> {
    match field(data, name) {
        Some(value) if !matches!(value, Value::Null | Value::Sequence(_)) => Some(
            ValidationIssue::error(name, format!("'{}' must be a list", name)),
        ),
        _ => None,
    }
}

pub fn check_date(data: &Mapping, name: &str) -> Option<ValidationIssue> {
    match field(data, name) {
        Some(Value::String(s)) if !s.is_empty() && parse_date(s).is_none() => Some(
            ValidationIssue::error(name, format!("'{}' is not a recognized date", name)),
        ),
        // Bare years arrive as numbers.
        Some(Value::Number(n)) if parse_date(&n.to_string()).is_none() => Some(
            ValidationIssue::error(name, format!("'{}' is not a recognized date", name)),
        ),
        Some(value) if !matches!(value, Value::Null | Value::String(_) | Value::Number(_)) => Some(
            ValidationIssue::error(name, format!("'{}' must be a date string", name)),
        ),
        _ => None,
    }
}

pub fn check_enum(data: &Mapping, name: &str, allowed: &[&str]) -> Option<ValidationIssue> {
    let value = field(data, name)?;
    if matches!(value, Value::Null) {
        return None;
    }
    match value.as_str() {
        Some(s) if allowed.contains(&s) => None,
        _ => Some(ValidationIssue::error(
            name,
            format!("'{}' must be one of: {}", name, allowed.join(", ")),
        )),
    }
}

pub fn check_number_range(
    data: &Mapping,
    name: &str,
    min: f64,
    max: f64,
) -> Option<ValidationIssue> {
    let value = field(data, name)?;
    if matches!(value, Value::Null) {
        return None;
    }
    match value.as_f64() {
        Some(n) if n >= min && n <= max => None,
        _ => Some(ValidationIssue::error(
            name,
            format!("'{}' must be a number between {} and {}", name, min, max),
        )),
    }
}

pub fn check_bool(data: &Mapping, name: &str) -> Option<ValidationIssue> {
    match field(data, name) {
        Some(value) if !matches!(value, Value::Null | Value::Bool(_)) => Some(
            ValidationIssue::error(name, format!("'{}' must be a boolean", name)),
        ),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(source: &str) -> Mapping {
        libs::serde_yaml::from_str(source).unwrap()
    }

    #[test]
    fn test_require_fields_reports_each_missing_field() {
        let data = mapping("title: Hello\ndescription: ''");
        let issues = require_fields(&data, &["title", "description", "date"]);
        let fields: Vec<&str> = issues.iter().map(|i| i.field.as_str()).collect();
        assert_eq!(fields, vec!["description", "date"]);
        assert!(issues.iter().all(|i| i.severity == Severity::Critical));
    }

    #[test]
    fn test_valid_depends_on_critical_issues_only() {
        let mut result = ValidationResult::default();
        result.errors.push(ValidationIssue::error("status", "bad"));
        assert!(result.valid());
        result
            .errors
            .push(ValidationIssue::critical("title", "missing"));
        assert!(!result.valid());
    }

    #[test]
    fn test_check_array() {
        let data = mapping("tags: not-a-list");
        assert!(check_array(&data, "tags").is_some());
        let data = mapping("tags:\n  - rust");
        assert!(check_array(&data, "tags").is_none());
        assert!(check_array(&data, "absent").is_none());
    }

    #[test]
    fn test_check_date() {
        let data = mapping("date: 2024-06-01");
        assert!(check_date(&data, "date").is_none());
        let data = mapping("date: soon");
        assert!(check_date(&data, "date").is_some());
        let data = mapping("date: 2024");
        assert!(check_date(&data, "date").is_none());
    }

    #[test]
    fn test_check_enum() {
        let data = mapping("category: essay");
        assert!(check_enum(&data, "category", &["essay", "annual"]).is_none());
        let data = mapping("category: memoir");
        let issue = check_enum(&data, "category", &["essay", "annual"]).unwrap();
        assert_eq!(issue.severity, Severity::Error);
    }

    #[test]
    fn test_check_number_range() {
        let data = mapping("rating: 7");
        assert!(check_number_range(&data, "rating", 1.0, 10.0).is_none());
        let data = mapping("rating: 11");
        assert!(check_number_range(&data, "rating", 1.0, 10.0).is_some());
        let data = mapping("rating: great");
        assert!(check_number_range(&data, "rating", 1.0, 10.0).is_some());
    }

    #[test]
    fn test_validation_failure_display() {
        let failure = ValidationFailure {
            kind: "record",
            slug: "movies-0000abcd".to_string(),
            errors: vec![ValidationIssue::critical("title", "required field 'title' is missing")],
            warnings: vec![],
        };
        let rendered = failure.to_string();
        assert!(rendered.starts_with("record validation failed (movies-0000abcd)"));
        assert!(rendered.contains("title: required field 'title' is missing"));
    }
}
