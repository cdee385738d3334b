//! The shared parse pipeline behind every content kind.
//!
//! The steps run in a fixed order: extract the frontmatter, validate it,
//! apply the kind's defaults, convert the body, derive metadata and finally
//! deserialize into the typed frontmatter. A kind plugs in through a small
//! bundle of plain functions, so adding one is adding a value, not a type.

use errors::anyhow::Error;
use libs::log;
use libs::serde_yaml::{self, Mapping, Value};
use linden_core::{
    ContentKind, Metadata, ParsedContent, ParsedContentBuilder, Severity, ValidationFailure,
    ValidationResult,
};
use serde::de::DeserializeOwned;

use crate::metadata;

/// Specialization hooks of one content kind.
pub struct TypeRules {
    pub kind: ContentKind,
    pub validate: fn(&Mapping) -> ValidationResult,
    /// Normalizes the raw mapping before it is deserialized: fills defaults,
    /// rewrites aliases, drops mistyped optional fields.
    pub apply_defaults: fn(&mut Mapping),
    /// Runs once the base metadata is known, with the raw body at hand. Kinds
    /// use this to derive extra metadata and to copy derived values back into
    /// the frontmatter.
    pub enrich: fn(&str, &mut Mapping, &mut Metadata),
}

pub fn no_defaults(_data: &mut Mapping) {}

pub fn no_enrichment(_body: &str, _data: &mut Mapping, _metadata: &mut Metadata) {}

/// Parses one standalone document with the given kind's rules.
///
/// Validation findings below critical severity are logged and the document
/// proceeds with best-effort defaults. A critical finding aborts with a
/// [`ValidationFailure`] carrying the full list of findings.
pub fn parse_document<T>(
    source: &str,
    slug: &str,
    rules: &TypeRules,
) -> Result<ParsedContent<T>, Error>
where
    T: DeserializeOwned,
{
    let (mut data, body) = markdown::extract(source);

    let validation = (rules.validate)(&data);
    log_findings(rules.kind, slug, &validation);
    if !validation.valid() {
        return Err(ValidationFailure {
            kind: rules.kind.as_str(),
            slug: slug.to_string(),
            errors: validation.errors,
            warnings: validation.warnings,
        }
        .into());
    }

    (rules.apply_defaults)(&mut data);

    let html = markdown::string_to_html(&body, &markdown::MarkdownOptions::default());
    let mut metadata = metadata::extract_all(&body, &html);
    (rules.enrich)(&body, &mut data, &mut metadata);

    let front_matter = serde_yaml::from_value(Value::Mapping(data))?;

    Ok(ParsedContentBuilder::new(front_matter, slug)
        .content(html)
        .metadata(metadata)
        .build())
}

fn log_findings(kind: ContentKind, slug: &str, validation: &ValidationResult) {
    for warning in &validation.warnings {
        log::warn!(
            "[{}] {}: {} ({})",
            kind,
            slug,
            warning.message,
            warning.field
        );
    }
    for error in &validation.errors {
        if error.severity == Severity::Error {
            log::warn!("[{}] {}: {} ({})", kind, slug, error.message, error.field);
        }
    }
}
