//! Parser for the Top-10 list files (movies, games).
//!
//! A list file is a multi-record file of tiny frontmatter blocks; each block
//! names a record and its position. The join against the full record set
//! happens at load time, not here.

use errors::anyhow::Error;
use libs::log;
use libs::serde_yaml::{self, Mapping, Value};
use linden_core::validation::{require_fields, ValidationIssue, ValidationResult};
use linden_core::yaml::{field, set_field};
use linden_core::{ContentKind, ParsedContent, Top10FrontMatter};

use crate::multi_record;
use crate::pipeline::{self, parse_document, TypeRules};

pub fn parse(
    source: &str,
    slug: &str,
    kind: ContentKind,
) -> Result<ParsedContent<Top10FrontMatter>, Error> {
    let rules = TypeRules {
        kind,
        validate,
        apply_defaults,
        enrich: pipeline::no_enrichment,
    };
    parse_document(source, slug, &rules)
}

/// Parses every block of a list file. Blocks whose name is empty after
/// trimming are placeholders in the source file and are dropped.
pub fn parse_file(
    source: &str,
    kind: ContentKind,
) -> Vec<Result<ParsedContent<Top10FrontMatter>, Error>> {
    multi_record::split_blocks(source)
        .into_iter()
        .enumerate()
        .map(|(index, block)| {
            let slug = multi_record::block_slug(kind.as_str(), &block, index);
            parse(&block, &slug, kind)
        })
        .filter(|result| match result {
            Ok(entry) if entry.front_matter().name.trim().is_empty() => {
                log::debug!("[{}] dropping placeholder block {}", kind, entry.slug());
                false
            }
            _ => true,
        })
        .collect()
}

fn validate(data: &Mapping) -> ValidationResult {
    let mut result = ValidationResult::default();
    result.errors.extend(require_fields(data, &["num", "name"]));

    if let Some(value) = field(data, "num") {
        if !matches!(value, Value::Null)
            && !num_value(value).map_or(false, |n| (1.0..=10.0).contains(&n))
        {
            result
                .errors
                .push(ValidationIssue::critical("num", "num must be between 1 and 10"));
        }
    }

    result
}

fn num_value(value: &Value) -> Option<f64> {
    value
        .as_f64()
        .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
}

fn apply_defaults(data: &mut Mapping) {
    // num may arrive as a quoted scalar; it leaves as a number.
    let num = field(data, "num").and_then(num_value);
    if let Some(num) = num {
        set_field(
            data,
            "num",
            Value::Number(serde_yaml::Number::from(num as u64)),
        );
    }
}
