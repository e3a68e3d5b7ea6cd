//! Movie entity.

use super::{MediaItem, Metadata};
use crate::parser::normalize::identity_key;
use crate::MergeError;

/// A feature film identified by name and release year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    name: String,
    year: u16,
    metadata: Metadata,
}

impl Movie {
    /// Create a movie with empty metadata.
    pub fn new(name: impl Into<String>, year: u16) -> Self {
        Self {
            name: name.into(),
            year,
            metadata: Metadata::default(),
        }
    }

    /// Replace the release metadata.
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Display name, e.g. `Batman Begins`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Release year.
    pub fn year(&self) -> u16 {
        self.year
    }

    fn matches(&self, other: &Movie) -> bool {
        self.year == other.year && identity_key(&self.name) == identity_key(&other.name)
    }
}

impl MediaItem for Movie {
    fn identity(&self) -> String {
        format!("{}:{}", identity_key(&self.name), self.year)
    }

    fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    fn similar(&self, other: &dyn MediaItem) -> bool {
        other.as_movie().is_some_and(|m| self.matches(m))
    }

    fn merge(&mut self, other: &dyn MediaItem) -> Result<(), MergeError> {
        match other.as_movie() {
            Some(m) if self.matches(m) => {
                self.name = m.name.clone();
                Ok(())
            }
            _ => Err(MergeError::not_similar(&*self, other)),
        }
    }

    fn as_movie(&self) -> Option<&Movie> {
        Some(self)
    }
}

impl std::fmt::Display for Movie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

impl std::str::FromStr for Movie {
    type Err = crate::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse_movie(s)
    }
}
