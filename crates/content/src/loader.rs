//! Loads every content kind, aggregates, sorts and joins the results.

use std::cmp::Ordering;

use errors::anyhow::Error;
use libs::futures::future::join_all;
use libs::{futures, log};
use linden_core::{
    parse_date, ContentKind, ParsedContent, ProjectFrontMatter, RecordCategory, RecordFrontMatter,
    Top10FrontMatter, WritingFrontMatter,
};
use parser::{project, record, top10, writing};

use crate::library::{Library, LoadIssue, Top10Entry};
use crate::source::{file_stem, ContentSource};

type Loaded<T> = (Vec<ParsedContent<T>>, Vec<LoadIssue>);

/// Loads the five content kinds, each kind's documents in parallel.
///
/// A document that fails to parse is skipped and recorded as an issue; only
/// a failing source enumeration aborts the load. The output order is fixed
/// by the date sort, independent of completion order.
pub async fn load_all(source: &dyn ContentSource) -> Result<Library, Error> {
    let (projects, writing, records, movies, games) = futures::join!(
        load_projects(source),
        load_writing(source),
        load_records(source),
        load_top10(source, ContentKind::Top10Movie),
        load_top10(source, ContentKind::Top10Game),
    );

    let mut issues = Vec::new();
    let (mut projects, found) = projects?;
    issues.extend(found);
    let (mut writing, found) = writing?;
    issues.extend(found);
    let (mut records, found) = records?;
    issues.extend(found);
    let (movies, found) = movies?;
    issues.extend(found);
    let (games, found) = games?;
    issues.extend(found);

    sort_by_date(&mut projects, |front_matter: &ProjectFrontMatter| {
        front_matter.date.as_str()
    });
    sort_by_date(&mut writing, |front_matter: &WritingFrontMatter| {
        front_matter.date.as_str()
    });
    sort_by_date(&mut records, |front_matter: &RecordFrontMatter| {
        front_matter.date.as_str()
    });

    let top10_movies = join_top10(&movies, &records, RecordCategory::Movie);
    let top10_games = join_top10(&games, &records, RecordCategory::Game);

    Ok(Library {
        projects,
        writing,
        records,
        top10_movies,
        top10_games,
        issues,
    })
}

async fn load_projects(source: &dyn ContentSource) -> Result<Loaded<ProjectFrontMatter>, Error> {
    let documents = source.enumerate(ContentKind::Project)?;
    let tasks = documents.into_iter().map(|document| async move {
        let slug = file_stem(&document.path);
        let parsed = project::parse(&document.raw_text, &slug);
        (document.path, parsed)
    });
    Ok(collect_single(join_all(tasks).await))
}

async fn load_writing(source: &dyn ContentSource) -> Result<Loaded<WritingFrontMatter>, Error> {
    let documents = source.enumerate(ContentKind::Writing)?;
    let tasks = documents.into_iter().map(|document| async move {
        let slug = file_stem(&document.path);
        let parsed = writing::parse(&document.raw_text, &slug, Some(&document.path));
        (document.path, parsed)
    });
    Ok(collect_single(join_all(tasks).await))
}

async fn load_records(source: &dyn ContentSource) -> Result<Loaded<RecordFrontMatter>, Error> {
    let documents = source.enumerate(ContentKind::Record)?;
    let tasks = documents.into_iter().map(|document| async move {
        let prefix = file_stem(&document.path);
        let results = record::parse_file(&document.raw_text, &prefix);
        (document.path, results)
    });
    Ok(collect_multi(join_all(tasks).await))
}

async fn load_top10(
    source: &dyn ContentSource,
    kind: ContentKind,
) -> Result<Loaded<Top10FrontMatter>, Error> {
    let documents = source.enumerate(kind)?;
    let tasks = documents.into_iter().map(move |document| async move {
        let results = top10::parse_file(&document.raw_text, kind);
        (document.path, results)
    });
    Ok(collect_multi(join_all(tasks).await))
}

fn collect_single<T>(results: Vec<(String, Result<ParsedContent<T>, Error>)>) -> Loaded<T> {
    let mut items = Vec::new();
    let mut issues = Vec::new();
    for (path, result) in results {
        match result {
            Ok(item) => items.push(item),
            Err(error) => issues.push(issue(path, &error)),
        }
    }
    (items, issues)
}

fn collect_multi<T>(results: Vec<(String, Vec<Result<ParsedContent<T>, Error>>)>) -> Loaded<T> {
    let mut items = Vec::new();
    let mut issues = Vec::new();
    for (path, block_results) in results {
        for result in block_results {
            match result {
                Ok(item) => items.push(item),
                Err(error) => issues.push(issue(path.clone(), &error)),
            }
        }
    }
    (items, issues)
}

fn issue(path: String, error: &Error) -> LoadIssue {
    log::error!("skipping {}: {:#}", path, error);
    LoadIssue {
        path,
        error: format!("{:#}", error),
    }
}

/// Most recent first. Documents whose date does not parse sort last, in
/// their input order.
fn sort_by_date<T>(items: &mut [ParsedContent<T>], date_of: fn(&T) -> &str) {
    items.sort_by(|a, b| {
        let a = parse_date(date_of(a.front_matter()));
        let b = parse_date(date_of(b.front_matter()));
        match (a, b) {
            (Some(a), Some(b)) => b.cmp(&a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
}

/// Resolves each list entry against the loaded record set by exact title.
/// Entries naming a record that does not exist are logged and omitted; the
/// survivors come back ordered by their list position.
fn join_top10(
    entries: &[ParsedContent<Top10FrontMatter>],
    records: &[ParsedContent<RecordFrontMatter>],
    category: RecordCategory,
) -> Vec<Top10Entry> {
    let mut joined: Vec<Top10Entry> = entries
        .iter()
        .filter_map(|entry| {
            let name = &entry.front_matter().name;
            let record = records.iter().find(|record| {
                record.front_matter().category == category && &record.front_matter().title == name
            });
            match record {
                Some(record) => Some(Top10Entry {
                    num: entry.front_matter().num,
                    record: record.clone(),
                }),
                None => {
                    log::warn!("[{}] no {} record titled '{}'", entry.slug(), category, name);
                    None
                }
            }
        })
        .collect();
    joined.sort_by_key(|entry| entry.num);
    joined
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::RawDocument;
    use std::collections::HashMap;

    struct StaticSource {
        documents: HashMap<ContentKind, Vec<RawDocument>>,
    }

    impl StaticSource {
        fn new() -> Self {
            Self {
                documents: HashMap::new(),
            }
        }

        fn with(mut self, kind: ContentKind, path: &str, raw_text: &str) -> Self {
            self.documents.entry(kind).or_default().push(RawDocument {
                path: path.to_string(),
                raw_text: raw_text.to_string(),
            });
            self
        }
    }

    impl ContentSource for StaticSource {
        fn enumerate(&self, kind: ContentKind) -> Result<Vec<RawDocument>, Error> {
            Ok(self.documents.get(&kind).cloned().unwrap_or_default())
        }
    }

    fn project(date: &str) -> String {
        format!(
            "---\ntitle: p\ndescription: d\ndate: {}\ntags: []\nstatus: planned\n---\n",
            date
        )
    }

    #[tokio::test]
    async fn test_projects_sorted_most_recent_first() {
        let source = StaticSource::new()
            .with(ContentKind::Project, "projects/a.md", &project("2024-01-01"))
            .with(ContentKind::Project, "projects/b.md", &project("2023-05-05"))
            .with(ContentKind::Project, "projects/c.md", &project("2024-06-01"));
        let library = load_all(&source).await.unwrap();
        let dates: Vec<&str> = library
            .projects()
            .iter()
            .map(|content| content.front_matter().date.as_str())
            .collect();
        assert_eq!(dates, vec!["2024-06-01", "2024-01-01", "2023-05-05"]);
    }

    #[tokio::test]
    async fn test_unparseable_date_sorts_last() {
        let source = StaticSource::new()
            .with(ContentKind::Project, "projects/a.md", &project("someday"))
            .with(ContentKind::Project, "projects/b.md", &project("2024-01-01"));
        let library = load_all(&source).await.unwrap();
        assert_eq!(library.projects()[0].front_matter().date, "2024-01-01");
        assert_eq!(library.projects()[1].front_matter().date, "someday");
    }

    #[tokio::test]
    async fn test_bad_document_is_skipped_and_recorded() {
        let source = StaticSource::new()
            .with(ContentKind::Project, "projects/a.md", &project("2024-01-01"))
            .with(
                ContentKind::Project,
                "projects/broken.md",
                "---\ndescription: no title\n---\n",
            );
        let library = load_all(&source).await.unwrap();
        assert_eq!(library.projects().len(), 1);
        assert_eq!(library.issues().len(), 1);
        assert!(library.issues()[0].path.contains("broken"));
    }

    #[tokio::test]
    async fn test_top10_join_resolves_and_omits() {
        let movies = "---\n\
            title: Example Movie\ncategory: movie\ndate: 2024-03-10\nnotes: n\n\
            ---\n\
            title: Another Movie\ncategory: movie\ndate: 2023-11-02\nnotes: n\n";
        let list = "---\n\
            num: 2\nname: Another Movie\n\
            ---\n\
            num: 1\nname: Example Movie\n\
            ---\n\
            num: 5\nname: Missing Movie\n";
        let source = StaticSource::new()
            .with(ContentKind::Record, "records/movies.md", movies)
            .with(ContentKind::Top10Movie, "top10/movies.md", list);
        let library = load_all(&source).await.unwrap();

        assert_eq!(library.records().len(), 2);
        let top10 = library.top10_movies();
        assert_eq!(top10.len(), 2);
        assert_eq!(top10[0].num, 1);
        assert_eq!(top10[0].record.front_matter().title, "Example Movie");
        assert_eq!(top10[1].num, 2);
        assert!(library.top10_games().is_empty());
    }

    #[tokio::test]
    async fn test_record_slugs_are_unique_per_block() {
        let movies = "---\n\
            title: Twin\ncategory: movie\ndate: 2024-01-01\nnotes: n\n\
            ---\n\
            title: Twin\ncategory: movie\ndate: 2024-01-01\nnotes: n\n";
        let source = StaticSource::new().with(ContentKind::Record, "records/movies.md", movies);
        let library = load_all(&source).await.unwrap();
        assert_eq!(library.records().len(), 2);
        assert_ne!(library.records()[0].slug(), library.records()[1].slug());
    }
}
