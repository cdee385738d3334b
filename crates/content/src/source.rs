//! Content discovery.
//!
//! The pipeline does not care where documents come from; a [`ContentSource`]
//! hands it raw text per logical path, one enumeration per content kind.

use std::fs;
use std::path::{Path, PathBuf};

use errors::anyhow::Error;
use errors::error::generic_error;
use libs::glob::glob;
use linden_core::ContentKind;

/// One raw source file, consumed once per load cycle.
#[derive(Clone, Debug)]
pub struct RawDocument {
    pub path: String,
    pub raw_text: String,
}

pub trait ContentSource: Send + Sync {
    fn enumerate(&self, kind: ContentKind) -> Result<Vec<RawDocument>, Error>;
}

/// Loads content from a directory tree, one glob pattern per kind.
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn pattern(kind: ContentKind) -> &'static str {
        match kind {
            ContentKind::Project => "projects/*.md",
            ContentKind::Writing => "writing/**/*.md",
            ContentKind::Record => "records/**/*.md",
            ContentKind::Top10Movie => "top10/movies.md",
            ContentKind::Top10Game => "top10/games.md",
        }
    }
}

impl ContentSource for DirSource {
    fn enumerate(&self, kind: ContentKind) -> Result<Vec<RawDocument>, Error> {
        let pattern_path = self.root.join(Self::pattern(kind));
        let pattern = pattern_path
            .to_str()
            .ok_or_else(|| generic_error("content root is not valid UTF-8"))?;

        // Paths are sorted so a load cycle always sees the same input order.
        let mut paths: Vec<PathBuf> = glob(pattern)?.flatten().collect();
        paths.sort();

        let mut documents = Vec::with_capacity(paths.len());
        for path in paths {
            let raw_text = fs::read_to_string(&path)?;
            documents.push(RawDocument {
                path: path.display().to_string(),
                raw_text,
            });
        }
        Ok(documents)
    }
}

/// The file name without its extension: the slug of a single-record file and
/// the slug prefix of a multi-record one.
pub fn file_stem(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
