mod cache;
mod library;
mod loader;
mod source;

pub use cache::ContentCache;
pub use library::{Library, LoadIssue, Top10Entry};
pub use loader::load_all;
pub use source::{ContentSource, DirSource, RawDocument};
