use serde::Serialize;
use std::sync::Arc;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TocItem {
    pub id: String,
    pub title: String,
    /// Heading level, 1 through 6.
    pub level: u8,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub word_count: usize,
    /// Estimated reading time in whole minutes.
    pub read_time: u32,
    pub toc: Vec<TocItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chapter_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stanza_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
}

#[derive(Debug)]
struct ParsedContentInner<T> {
    front_matter: T,
    content: String,
    slug: String,
    metadata: Metadata,
}

/// One fully parsed content record. Immutable once built and cheap to clone.
#[derive(Debug)]
pub struct ParsedContent<T> {
    inner: Arc<ParsedContentInner<T>>,
}

impl<T> Clone for ParsedContent<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> ParsedContent<T> {
    pub fn front_matter(&self) -> &T {
        &self.inner.front_matter
    }

    /// The HTML rendered from the Markdown body.
    pub fn content(&self) -> &str {
        &self.inner.content
    }

    pub fn slug(&self) -> &str {
        &self.inner.slug
    }

    pub fn metadata(&self) -> &Metadata {
        &self.inner.metadata
    }
}

pub struct ParsedContentBuilder<T> {
    front_matter: T,
    slug: String,
    content: String,
    metadata: Metadata,
}

impl<T> ParsedContentBuilder<T> {
    pub fn new(front_matter: T, slug: impl Into<String>) -> Self {
        Self {
            front_matter,
            slug: slug.into(),
            content: String::new(),
            metadata: Metadata::default(),
        }
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn build(self) -> ParsedContent<T> {
        ParsedContent {
            inner: Arc::new(ParsedContentInner {
                front_matter: self.front_matter,
                content: self.content,
                slug: self.slug,
                metadata: self.metadata,
            }),
        }
    }
}
