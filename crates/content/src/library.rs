//! The aggregated view over every parsed content record.

use linden_core::{
    ParsedContent, ProjectFrontMatter, RecordCategory, RecordFrontMatter, WritingCategory,
    WritingFrontMatter,
};

/// One Top-10 list entry after the join against the full record set.
#[derive(Clone, Debug)]
pub struct Top10Entry {
    pub num: u8,
    pub record: ParsedContent<RecordFrontMatter>,
}

/// A document that failed to parse during the last load. Its siblings still
/// loaded; the failure is kept here for reporting.
#[derive(Clone, Debug)]
pub struct LoadIssue {
    pub path: String,
    pub error: String,
}

/// Every content kind, sorted most recent first, plus the joined Top-10
/// lists. Immutable once built.
#[derive(Clone, Debug, Default)]
pub struct Library {
    pub(crate) projects: Vec<ParsedContent<ProjectFrontMatter>>,
    pub(crate) writing: Vec<ParsedContent<WritingFrontMatter>>,
    pub(crate) records: Vec<ParsedContent<RecordFrontMatter>>,
    pub(crate) top10_movies: Vec<Top10Entry>,
    pub(crate) top10_games: Vec<Top10Entry>,
    pub(crate) issues: Vec<LoadIssue>,
}

impl Library {
    pub fn projects(&self) -> &[ParsedContent<ProjectFrontMatter>] {
        &self.projects
    }

    pub fn writing(&self) -> &[ParsedContent<WritingFrontMatter>] {
        &self.writing
    }

    pub fn records(&self) -> &[ParsedContent<RecordFrontMatter>] {
        &self.records
    }

    pub fn top10_movies(&self) -> &[Top10Entry] {
        &self.top10_movies
    }

    pub fn top10_games(&self) -> &[Top10Entry] {
        &self.top10_games
    }

    pub fn issues(&self) -> &[LoadIssue] {
        &self.issues
    }

    pub fn project_by_slug(&self, slug: &str) -> Option<&ParsedContent<ProjectFrontMatter>> {
        self.projects.iter().find(|content| content.slug() == slug)
    }

    pub fn writing_by_slug(&self, slug: &str) -> Option<&ParsedContent<WritingFrontMatter>> {
        self.writing.iter().find(|content| content.slug() == slug)
    }

    pub fn record_by_slug(&self, slug: &str) -> Option<&ParsedContent<RecordFrontMatter>> {
        self.records.iter().find(|content| content.slug() == slug)
    }

    pub fn writing_by_category(
        &self,
        category: WritingCategory,
    ) -> Vec<&ParsedContent<WritingFrontMatter>> {
        self.writing
            .iter()
            .filter(|content| content.front_matter().category == category)
            .collect()
    }

    pub fn records_by_category(
        &self,
        category: RecordCategory,
    ) -> Vec<&ParsedContent<RecordFrontMatter>> {
        self.records
            .iter()
            .filter(|content| content.front_matter().category == category)
            .collect()
    }
}
