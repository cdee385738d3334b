mod content_kind;
mod date;
mod front_matter;
mod parsed_content;
pub mod validation;
pub mod yaml;

pub use content_kind::ContentKind;
pub use date::parse_date;
pub use front_matter::{
    ProjectFrontMatter, ProjectStatus, RecordCategory, RecordFrontMatter, StatusColor,
    Top10FrontMatter, WritingCategory, WritingFrontMatter, PROJECT_STATUS_ALIASES,
    RECORD_CATEGORIES, STATUS_COLORS, WRITING_CATEGORIES,
};
pub use parsed_content::{Metadata, ParsedContent, ParsedContentBuilder, TocItem};
pub use validation::{
    Severity, ValidationFailure, ValidationIssue, ValidationResult, ValidationWarning,
};
