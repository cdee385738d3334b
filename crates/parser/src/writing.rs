//! Parser for writing pieces and its category sub-parsers.
//!
//! The category decides defaults and the extra metadata a piece gets. It is
//! taken from the frontmatter when present, inferred from the source path
//! otherwise, and falls back to essay.

use errors::anyhow::Error;
use lazy_static::lazy_static;
use libs::regex::Regex;
use libs::serde_yaml::{self, Mapping, Value};
use linden_core::validation::{
    check_array, check_bool, check_date, check_enum, require_fields, ValidationResult,
    ValidationWarning,
};
use linden_core::yaml::{
    coerce_to_string, field, field_str, is_missing, retain_valid, set_default, set_field,
};
use linden_core::{
    ContentKind, Metadata, ParsedContent, WritingCategory, WritingFrontMatter, WRITING_CATEGORIES,
};

use crate::metadata;
use crate::pipeline::{parse_document, TypeRules};

lazy_static! {
    static ref LEADING_YEAR_RE: Regex = Regex::new(r"^\d{4}").unwrap();
    static ref ANNUAL_DATE_RE: Regex = Regex::new(r"^\d{4}(-\d{2})?$").unwrap();
}

pub fn parse(
    source: &str,
    slug: &str,
    path: Option<&str>,
) -> Result<ParsedContent<WritingFrontMatter>, Error> {
    let category = resolve_category(source, path);
    parse_document(source, slug, rules(category))
}

/// The explicit `category` field wins; otherwise the source path decides.
pub fn resolve_category(source: &str, path: Option<&str>) -> WritingCategory {
    let (data, _) = markdown::extract(source);
    if let Some(category) = field_str(&data, "category").and_then(WritingCategory::from_name) {
        return category;
    }
    path.map(category_from_path).unwrap_or_default()
}

fn category_from_path(path: &str) -> WritingCategory {
    let path = path.to_lowercase();
    if path.contains("/fiction/") {
        WritingCategory::Fiction
    } else if path.contains("/annual/") {
        WritingCategory::Annual
    } else if path.contains("/essays/") || path.contains("/essay/") {
        WritingCategory::Essay
    } else if path.contains("/poetry/") || path.contains("/poem/") {
        WritingCategory::Poetry
    } else {
        WritingCategory::Essay
    }
}

fn rules(category: WritingCategory) -> &'static TypeRules {
    match category {
        WritingCategory::Annual => &ANNUAL,
        WritingCategory::Fiction => &FICTION,
        WritingCategory::Poetry => &POETRY,
        _ => &ESSAY,
    }
}

static ESSAY: TypeRules = TypeRules {
    kind: ContentKind::Writing,
    validate: validate_essay,
    apply_defaults: essay_defaults,
    enrich: essay_enrich,
};

static ANNUAL: TypeRules = TypeRules {
    kind: ContentKind::Writing,
    validate: validate_annual,
    apply_defaults: annual_defaults,
    enrich: annual_enrich,
};

static FICTION: TypeRules = TypeRules {
    kind: ContentKind::Writing,
    validate: validate_fiction,
    apply_defaults: fiction_defaults,
    enrich: fiction_enrich,
};

static POETRY: TypeRules = TypeRules {
    kind: ContentKind::Writing,
    validate: validate_poetry,
    apply_defaults: poetry_defaults,
    enrich: poetry_enrich,
};

fn validate_essay(data: &Mapping) -> ValidationResult {
    validate_base(data, WritingCategory::Essay)
}

fn validate_annual(data: &Mapping) -> ValidationResult {
    let mut result = validate_base(data, WritingCategory::Annual);
    if let Some(date) = field_str(data, "date") {
        if !ANNUAL_DATE_RE.is_match(date) {
            result.warnings.push(
                ValidationWarning::new("date", "annual reviews are usually dated by year")
                    .suggest("use the YYYY or YYYY-MM format"),
            );
        }
    }
    result
}

fn validate_fiction(data: &Mapping) -> ValidationResult {
    validate_base(data, WritingCategory::Fiction)
}

fn validate_poetry(data: &Mapping) -> ValidationResult {
    validate_base(data, WritingCategory::Poetry)
}

fn validate_base(data: &Mapping, category: WritingCategory) -> ValidationResult {
    let mut result = ValidationResult::default();
    result
        .errors
        .extend(require_fields(data, &["title", "description", "date", "tags"]));
    result.errors.extend(check_array(data, "tags"));
    result.errors.extend(check_date(data, "date"));
    result
        .errors
        .extend(check_enum(data, "category", WRITING_CATEGORIES));
    result.errors.extend(check_bool(data, "showToc"));

    if let Some(value) = field(data, "readTime") {
        if !matches!(value, Value::Null) && value.as_f64().map_or(true, |n| n <= 0.0) {
            result.warnings.push(
                ValidationWarning::new("readTime", "readTime should be a positive number")
                    .suggest("leave it out to have it computed from the text"),
            );
        }
    }

    if category != WritingCategory::Annual && !is_missing(field(data, "years")) {
        result.warnings.push(ValidationWarning::new(
            "years",
            format!("'years' only applies to annual reviews, not {}", category),
        ));
    }

    result
}

fn essay_defaults(data: &mut Mapping) {
    category_defaults(data, WritingCategory::Essay, true, "blue");
}

fn annual_defaults(data: &mut Mapping) {
    category_defaults(data, WritingCategory::Annual, true, "green");
}

fn fiction_defaults(data: &mut Mapping) {
    category_defaults(data, WritingCategory::Fiction, true, "white");
}

fn poetry_defaults(data: &mut Mapping) {
    category_defaults(data, WritingCategory::Poetry, false, "pink");
    set_default(data, "readTime", Value::Number(serde_yaml::Number::from(3u64)));
}

fn category_defaults(data: &mut Mapping, category: WritingCategory, show_toc: bool, color: &str) {
    // The resolved category lands in the frontmatter, whether it came from an
    // explicit field, the source path or the fallback.
    set_field(
        data,
        "category",
        Value::String(category.as_str().to_string()),
    );
    coerce_to_string(data, "date");
    retain_valid(data, "tags", |v| matches!(v, Value::Sequence(_)));
    retain_valid(data, "years", |v| matches!(v, Value::Sequence(_)));
    retain_valid(data, "showToc", |v| matches!(v, Value::Bool(_)));
    retain_valid(data, "readTime", |v| v.as_u64().is_some());
    retain_valid(data, "wordCount", |v| v.as_u64().is_some());
    set_default(data, "showToc", Value::Bool(show_toc));
    set_default(data, "statusColor", Value::String(color.to_string()));
}

fn essay_enrich(_body: &str, data: &mut Mapping, metadata: &mut Metadata) {
    enrich_shared(data, metadata);
}

fn annual_enrich(_body: &str, data: &mut Mapping, metadata: &mut Metadata) {
    metadata.year = field_str(data, "date")
        .and_then(|date| LEADING_YEAR_RE.find(date))
        .and_then(|year| year.as_str().parse().ok());
    enrich_shared(data, metadata);
}

fn fiction_enrich(body: &str, data: &mut Mapping, metadata: &mut Metadata) {
    metadata.chapter_count = Some(metadata::chapter_count(body));
    enrich_shared(data, metadata);
}

fn poetry_enrich(body: &str, data: &mut Mapping, metadata: &mut Metadata) {
    let (line_count, stanza_count) = metadata::analyze_poetry(body);
    metadata.line_count = Some(line_count);
    metadata.stanza_count = Some(stanza_count);
    enrich_shared(data, metadata);
}

/// Word count and reading time flow back into the frontmatter unless the
/// author pinned them.
fn enrich_shared(data: &mut Mapping, metadata: &Metadata) {
    set_default(
        data,
        "wordCount",
        Value::Number(serde_yaml::Number::from(metadata.word_count as u64)),
    );
    set_default(
        data,
        "readTime",
        Value::Number(serde_yaml::Number::from(metadata.read_time as u64)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use linden_core::{StatusColor, ValidationFailure};

    fn essay_source() -> String {
        "---\ntitle: On Reading\ndescription: d\ndate: 2024-05-01\ntags:\n  - books\n---\n\n\
         ## First\n\nSome thoughts.\n\n## Second\n\nMore thoughts.\n"
            .to_string()
    }

    #[test]
    fn test_essay_defaults_and_enrichment() {
        let parsed = parse(&essay_source(), "on-reading", None).unwrap();
        let front_matter = parsed.front_matter();
        assert_eq!(front_matter.category, WritingCategory::Essay);
        assert!(front_matter.show_toc);
        assert_eq!(front_matter.status_color, StatusColor::Blue);
        assert_eq!(front_matter.word_count, Some(parsed.metadata().word_count));
        assert_eq!(front_matter.read_time, Some(parsed.metadata().read_time));
        assert_eq!(parsed.metadata().toc.len(), 2);
    }

    #[test]
    fn test_category_inferred_from_path() {
        let source = "---\ntitle: Rain\ndescription: d\ndate: 2024-04-01\ntags: []\n---\n\nline one\nline two\n\nline three\n";
        let parsed = parse(source, "rain", Some("content/writing/poetry/rain.md")).unwrap();
        let front_matter = parsed.front_matter();
        assert_eq!(front_matter.category, WritingCategory::Poetry);
        assert!(!front_matter.show_toc);
        assert_eq!(front_matter.read_time, Some(3));
        assert_eq!(front_matter.status_color, StatusColor::Pink);
        assert_eq!(parsed.metadata().line_count, Some(3));
        assert_eq!(parsed.metadata().stanza_count, Some(2));
    }

    #[test]
    fn test_explicit_category_beats_path() {
        let source =
            "---\ntitle: t\ndescription: d\ndate: 2024-01-01\ntags: []\ncategory: fiction\n---\n\n## One\n\n### Two\n";
        let parsed = parse(source, "t", Some("content/writing/essays/t.md")).unwrap();
        assert_eq!(parsed.front_matter().category, WritingCategory::Fiction);
        assert_eq!(parsed.metadata().chapter_count, Some(2));
    }

    #[test]
    fn test_unrecognized_category_falls_back_to_path() {
        let source =
            "---\ntitle: t\ndescription: d\ndate: 2024-01-01\ntags: []\ncategory: memoir\n---\n";
        let parsed = parse(source, "t", Some("content/writing/poetry/t.md")).unwrap();
        assert_eq!(parsed.front_matter().category, WritingCategory::Poetry);
    }

    #[test]
    fn test_annual_derives_year() {
        let source = "---\ntitle: '2024'\ndescription: d\ndate: '2024'\ntags: []\ncategory: annual\n---\n";
        let parsed = parse(source, "2024", None).unwrap();
        assert_eq!(parsed.metadata().year, Some(2024));
        assert_eq!(parsed.front_matter().status_color, StatusColor::Green);
    }

    #[test]
    fn test_years_on_non_annual_warns_but_parses() {
        let source = "---\ntitle: t\ndescription: d\ndate: 2024-01-01\ntags: []\nyears:\n  - 2023\n---\n";
        let result = validate_base(&markdown::extract(source).0, WritingCategory::Essay);
        assert!(result.valid());
        assert_eq!(result.warnings[0].field, "years");
        assert!(parse(source, "t", None).is_ok());
    }

    #[test]
    fn test_missing_tags_is_critical() {
        let source = "---\ntitle: t\ndescription: d\ndate: 2024-01-01\n---\n";
        let error = parse(source, "t", None).unwrap_err();
        let failure = error.downcast::<ValidationFailure>().unwrap();
        assert_eq!(failure.critical_errors()[0].field, "tags");
    }

    #[test]
    fn test_pinned_read_time_is_kept() {
        let source =
            "---\ntitle: t\ndescription: d\ndate: 2024-01-01\ntags: []\nreadTime: 12\n---\n\nshort\n";
        let parsed = parse(source, "t", None).unwrap();
        assert_eq!(parsed.front_matter().read_time, Some(12));
    }
}
