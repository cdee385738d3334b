mod front_matter;
mod markdown;

pub use crate::front_matter::{extract, DELIMITER};
pub use crate::markdown::{string_to_html, MarkdownOptions};
