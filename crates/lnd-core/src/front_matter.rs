use serde::{Deserialize, Serialize};
use std::fmt;

/// Localized project status labels and their canonical spelling.
pub const PROJECT_STATUS_ALIASES: &[(&str, &str)] = &[
    ("已完成", "completed"),
    ("进行中", "in-progress"),
    ("计划中", "planned"),
];

pub const STATUS_COLORS: &[&str] = &["red", "white", "green", "blue", "yellow", "pink"];

pub const WRITING_CATEGORIES: &[&str] = &["essay", "annual", "fiction", "poetry"];

pub const RECORD_CATEGORIES: &[&str] = &["movie", "book", "game", "music"];

#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Completed,
    InProgress,
    #[default]
    Planned,
    /// Unrecognized status values are flagged by validation but do not abort
    /// parsing.
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StatusColor {
    Red,
    White,
    Green,
    #[default]
    Blue,
    Yellow,
    Pink,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WritingCategory {
    #[default]
    Essay,
    Annual,
    Fiction,
    Poetry,
    #[serde(other)]
    Unknown,
}

impl WritingCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Essay => "essay",
            Self::Annual => "annual",
            Self::Fiction => "fiction",
            Self::Poetry => "poetry",
            Self::Unknown => "unknown",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "essay" => Some(Self::Essay),
            "annual" => Some(Self::Annual),
            "fiction" => Some(Self::Fiction),
            "poetry" => Some(Self::Poetry),
            _ => None,
        }
    }
}

impl fmt::Display for WritingCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RecordCategory {
    Movie,
    Book,
    Game,
    Music,
    #[default]
    #[serde(other)]
    Unknown,
}

impl RecordCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Book => "book",
            Self::Game => "game",
            Self::Music => "music",
            Self::Unknown => "unknown",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "movie" => Some(Self::Movie),
            "book" => Some(Self::Book),
            "game" => Some(Self::Game),
            "music" => Some(Self::Music),
            _ => None,
        }
    }

    /// The creator field a record of this category is expected to carry.
    pub fn creator_field(&self) -> Option<&'static str> {
        match self {
            Self::Movie => Some("director"),
            Self::Book => Some("author"),
            Self::Game => Some("developer"),
            Self::Music => Some("artist"),
            Self::Unknown => None,
        }
    }
}

impl fmt::Display for RecordCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFrontMatter {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default)]
    pub status_color: StatusColor,
    pub image: Option<String>,
    pub link: Option<String>,
    pub version: Option<String>,
    pub english_title: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WritingFrontMatter {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub category: WritingCategory,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Years covered by an annual review; other categories draw a warning.
    pub years: Option<Vec<u16>>,
    pub word_count: Option<usize>,
    pub read_time: Option<u32>,
    #[serde(default)]
    pub show_toc: bool,
    #[serde(default)]
    pub status_color: StatusColor,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecordFrontMatter {
    pub title: String,
    #[serde(default)]
    pub category: RecordCategory,
    #[serde(default)]
    pub date: String,
    /// Absent means unrated, which is distinct from a zero rating.
    pub rating: Option<f64>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub cover: Option<String>,
    pub author: Option<String>,
    pub director: Option<String>,
    pub developer: Option<String>,
    pub artist: Option<String>,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Top10FrontMatter {
    pub num: u8,
    pub name: String,
}
