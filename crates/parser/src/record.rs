//! Parser for the media records (movies, books, games, music).
//!
//! Records live in multi-record files, several frontmatter blocks per file.

use errors::anyhow::Error;
use libs::serde_yaml::{Mapping, Value};
use linden_core::validation::{
    check_array, check_date, check_enum, check_number_range, require_fields, ValidationResult,
    ValidationWarning,
};
use linden_core::yaml::{coerce_to_string, field, field_str, is_missing, retain_valid, set_default};
use linden_core::{ContentKind, ParsedContent, RecordCategory, RecordFrontMatter, RECORD_CATEGORIES};

use crate::multi_record;
use crate::pipeline::{self, parse_document, TypeRules};

const CREATOR_FIELDS: &[&str] = &["director", "author", "developer", "artist"];

const RULES: TypeRules = TypeRules {
    kind: ContentKind::Record,
    validate,
    apply_defaults,
    enrich: pipeline::no_enrichment,
};

pub fn parse(source: &str, slug: &str) -> Result<ParsedContent<RecordFrontMatter>, Error> {
    parse_document(source, slug, &RULES)
}

/// Parses every block of a multi-record file independently. Failed blocks
/// come back as errors so the caller decides whether to skip or abort.
pub fn parse_file(
    source: &str,
    slug_prefix: &str,
) -> Vec<Result<ParsedContent<RecordFrontMatter>, Error>> {
    multi_record::split_blocks(source)
        .into_iter()
        .enumerate()
        .map(|(index, block)| {
            let slug = multi_record::block_slug(slug_prefix, &block, index);
            parse(&block, &slug)
        })
        .collect()
}

fn validate(data: &Mapping) -> ValidationResult {
    let mut result = ValidationResult::default();
    result
        .errors
        .extend(require_fields(data, &["title", "category", "date"]));
    result
        .errors
        .extend(check_enum(data, "category", RECORD_CATEGORIES));
    result.errors.extend(check_array(data, "tags"));
    result.errors.extend(check_date(data, "date"));
    result
        .errors
        .extend(check_number_range(data, "rating", 1.0, 10.0));

    if let Some(category) = field_str(data, "category").and_then(RecordCategory::from_name) {
        result.warnings.extend(creator_field_warnings(data, category));
    }

    result
}

/// Each category has one expected creator field; a missing one is only worth
/// a warning when there are no notes either, and a foreign one is worth a
/// warning always.
fn creator_field_warnings(data: &Mapping, category: RecordCategory) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    let expected = match category.creator_field() {
        Some(expected) => expected,
        None => return warnings,
    };

    if is_missing(field(data, expected)) && is_missing(field(data, "notes")) {
        warnings.push(
            ValidationWarning::new(
                expected,
                format!("a {} record usually names its {}", category, expected),
            )
            .suggest(format!("add '{}' or describe it under 'notes'", expected)),
        );
    }

    for name in CREATOR_FIELDS {
        if *name != expected && !is_missing(field(data, name)) {
            warnings.push(ValidationWarning::new(
                *name,
                format!("'{}' does not apply to {} records", name, category),
            ));
        }
    }

    warnings
}

fn apply_defaults(data: &mut Mapping) {
    coerce_to_string(data, "date");
    retain_valid(data, "tags", |v| matches!(v, Value::Sequence(_)));
    // Absent stays absent: an unrated record is not a zero-rated one.
    retain_valid(data, "rating", |v| v.as_f64().is_some());
    set_default(data, "tags", Value::Sequence(Vec::new()));
}
