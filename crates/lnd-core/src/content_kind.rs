use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Project,
    Writing,
    Record,
    Top10Movie,
    Top10Game,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Writing => "writing",
            Self::Record => "record",
            Self::Top10Movie => "top10-movie",
            Self::Top10Game => "top10-game",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
