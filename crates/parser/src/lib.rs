pub mod metadata;
pub mod multi_record;
pub mod pipeline;
pub mod project;
pub mod record;
pub mod top10;
pub mod writing;

pub use pipeline::{parse_document, TypeRules};
