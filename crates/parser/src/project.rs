//! Parser for project pages.

use errors::anyhow::Error;
use libs::serde_yaml::{Mapping, Value};
use linden_core::validation::{
    check_array, check_date, check_enum, require_fields, ValidationIssue, ValidationResult,
    ValidationWarning,
};
use linden_core::yaml::{coerce_to_string, field, field_str, retain_valid, set_default, set_field};
use linden_core::{
    ContentKind, ParsedContent, ProjectFrontMatter, PROJECT_STATUS_ALIASES, STATUS_COLORS,
};

use crate::pipeline::{self, parse_document, TypeRules};

const RULES: TypeRules = TypeRules {
    kind: ContentKind::Project,
    validate,
    apply_defaults,
    enrich: pipeline::no_enrichment,
};

pub fn parse(source: &str, slug: &str) -> Result<ParsedContent<ProjectFrontMatter>, Error> {
    parse_document(source, slug, &RULES)
}

fn validate(data: &Mapping) -> ValidationResult {
    let mut result = ValidationResult::default();
    result.errors.extend(require_fields(
        data,
        &["title", "description", "date", "tags", "status"],
    ));
    result.errors.extend(check_array(data, "tags"));
    result.errors.extend(check_date(data, "date"));

    let mut statuses = vec!["completed", "in-progress", "planned"];
    statuses.extend(PROJECT_STATUS_ALIASES.iter().map(|(alias, _)| *alias));
    result.errors.extend(check_enum(data, "status", &statuses));

    if let Some(color) = field_str(data, "statusColor") {
        if !STATUS_COLORS.contains(&color) {
            result.warnings.push(
                ValidationWarning::new(
                    "statusColor",
                    format!("'{}' is not a known status color", color),
                )
                .suggest(format!("use one of: {}", STATUS_COLORS.join(", "))),
            );
        }
    }

    if let Some(value) = field(data, "version") {
        if !matches!(value, Value::Null | Value::String(_)) {
            result
                .errors
                .push(ValidationIssue::error("version", "version must be a string"));
        }
    }

    result
}

fn apply_defaults(data: &mut Mapping) {
    // Localized status labels map onto the canonical enum values.
    let canonical = field_str(data, "status").and_then(|status| {
        PROJECT_STATUS_ALIASES
            .iter()
            .find(|(alias, _)| *alias == status)
            .map(|(_, canonical)| *canonical)
    });
    if let Some(canonical) = canonical {
        set_field(data, "status", Value::String(canonical.to_string()));
    }

    coerce_to_string(data, "date");
    set_default(data, "statusColor", Value::String("blue".to_string()));
    retain_valid(data, "tags", |v| matches!(v, Value::Sequence(_)));
    retain_valid(data, "version", |v| matches!(v, Value::String(_)));
}
