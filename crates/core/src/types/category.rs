//! The fixed set of catalog categories.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A book category.
///
/// The catalog uses a closed enumeration of eight categories; serialization
/// uses the human-readable names so the catalog file and query strings stay
/// legible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Classic Literature")]
    ClassicLiterature,
    #[serde(rename = "Science Fiction")]
    ScienceFiction,
    Romance,
    Fantasy,
    #[serde(rename = "Self-Help")]
    SelfHelp,
    Mystery,
    History,
    Business,
}

/// Error returned when parsing an unknown category name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct CategoryParseError(pub String);

impl Category {
    /// All categories, in display order.
    pub const ALL: [Self; 8] = [
        Self::ClassicLiterature,
        Self::ScienceFiction,
        Self::Romance,
        Self::Fantasy,
        Self::SelfHelp,
        Self::Mystery,
        Self::History,
        Self::Business,
    ];

    /// The display name, as used in the catalog file and query strings.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ClassicLiterature => "Classic Literature",
            Self::ScienceFiction => "Science Fiction",
            Self::Romance => "Romance",
            Self::Fantasy => "Fantasy",
            Self::SelfHelp => "Self-Help",
            Self::Mystery => "Mystery",
            Self::History => "History",
            Self::Business => "Business",
        }
    }

    /// A short blurb for the category overview page.
    #[must_use]
    pub const fn blurb(self) -> &'static str {
        match self {
            Self::ClassicLiterature => "Timeless masterpieces that have shaped literature",
            Self::ScienceFiction => "Explore future worlds and technological wonders",
            Self::Romance => "Love stories that will warm your heart",
            Self::Fantasy => "Magical realms and epic adventures await",
            Self::SelfHelp => "Transform your life with practical wisdom",
            Self::Mystery => "Thrilling puzzles and suspenseful tales",
            Self::History => "Journey through the past and learn from history",
            Self::Business => "Strategy, leadership, and entrepreneurship",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl core::str::FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| CategoryParseError(s.to_string()))
    }
}
