//! Expense categories
//!
//! The tracker works with a fixed set of category tags. Records store the
//! category as plain text so older data with unknown tags still loads; the
//! entry path parses user input into [`Category`] before anything is written.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the fixed expense categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Home,
    Work,
    Fun,
    Misc,
    Transport,
    Utilities,
    Healthcare,
}

impl Category {
    /// Get all categories in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::Food,
            Self::Home,
            Self::Work,
            Self::Fun,
            Self::Misc,
            Self::Transport,
            Self::Utilities,
            Self::Healthcare,
        ]
    }

    /// The stored name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Home => "Home",
            Self::Work => "Work",
            Self::Fun => "Fun",
            Self::Misc => "Misc",
            Self::Transport => "Transport",
            Self::Utilities => "Utilities",
            Self::Healthcare => "Healthcare",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Food => "🍔",
            Self::Home => "🏠",
            Self::Work => "💼",
            Self::Fun => "🎉",
            Self::Misc => "✨",
            Self::Transport => "🚗",
            Self::Utilities => "💡",
            Self::Healthcare => "🏥",
        }
    }

    /// Icon and name, e.g. "🍔 Food"
    pub fn label(&self) -> String {
        format!("{} {}", self.icon(), self.name())
    }

    /// Look up a category from its stored text, if it is one of the known tags
    pub fn from_stored(s: &str) -> Option<Self> {
        s.parse().ok()
    }

    /// Render stored category text with its icon when the tag is known
    pub fn display_label(stored: &str) -> String {
        match Self::from_stored(stored) {
            Some(category) => category.label(),
            None => stored.to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    /// Accepts the plain name in any case ("food") or the icon label ("🍔 Food")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let without_icon = Self::all()
            .iter()
            .find_map(|c| trimmed.strip_prefix(c.icon()))
            .map(str::trim)
            .unwrap_or(trimmed);

        Self::all()
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(without_icon))
            .ok_or_else(|| CategoryParseError(s.to_string()))
    }
}

/// Error for text that is not one of the known categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryParseError(pub String);

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let known: Vec<_> = Category::all().iter().map(|c| c.name()).collect();
        write!(
            f,
            "Unknown category '{}' (expected one of: {})",
            self.0,
            known.join(", ")
        )
    }
}

impl std::error::Error for CategoryParseError {}
