// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::error::TravelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Beach,
    Mountain,
    Heritage,
    HillStation,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Beach,
        Category::Mountain,
        Category::Heritage,
        Category::HillStation,
    ];

    /// Case-insensitive label lookup. Spaces, dashes and underscores are
    /// interchangeable, so "Hill Station" and "hill_station" are the same label.
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized: String = label
            .trim()
            .chars()
            .map(|c| match c {
                ' ' | '-' => '_',
                c => c.to_ascii_lowercase(),
            })
            .collect();

        match normalized.as_str() {
            "beach" => Some(Category::Beach),
            "mountain" => Some(Category::Mountain),
            "heritage" => Some(Category::Heritage),
            "hill_station" | "hillstation" => Some(Category::HillStation),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Beach => "beach",
            Category::Mountain => "mountain",
            Category::Heritage => "heritage",
            Category::HillStation => "hill station",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for Category {
    type Err = TravelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::from_label(s)
            .ok_or_else(|| TravelError::InvalidQuery(format!("unknown category '{}'", s.trim())))
    }
}

/// The category side of a query: everything, or a single label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    #[default]
    Any,
    Only(Category),
}

impl CategoryFilter {
    pub fn accepts(&self, category: Category) -> bool {
        match self {
            CategoryFilter::Any => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::Any => f.pad("any"),
            CategoryFilter::Only(category) => fmt::Display::fmt(category, f),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = TravelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("any") {
            return Ok(CategoryFilter::Any);
        }
        s.parse::<Category>().map(CategoryFilter::Only)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_case_insensitive() {
        assert_eq!(Category::from_label("BEACH"), Some(Category::Beach));
        assert_eq!(Category::from_label("  Mountain "), Some(Category::Mountain));
        assert_eq!(Category::from_label("Hill Station"), Some(Category::HillStation));
        assert_eq!(Category::from_label("hill_station"), Some(Category::HillStation));
        assert_eq!(Category::from_label("hill-station"), Some(Category::HillStation));
        assert_eq!(Category::from_label("desert"), None);
        assert_eq!(Category::from_label(""), None);
    }

    #[test]
    fn test_label_round_trips_through_parse() {
        for category in Category::ALL {
            assert_eq!(category.label().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!("any".parse::<CategoryFilter>().unwrap(), CategoryFilter::Any);
        assert_eq!("ANY".parse::<CategoryFilter>().unwrap(), CategoryFilter::Any);
        assert_eq!(
            "Heritage".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Heritage)
        );

        let err = "volcano".parse::<CategoryFilter>().unwrap_err();
        assert!(matches!(err, TravelError::InvalidQuery(_)));
    }

    #[test]
    fn test_filter_accepts() {
        assert!(CategoryFilter::Any.accepts(Category::Beach));
        assert!(CategoryFilter::Only(Category::Beach).accepts(Category::Beach));
        assert!(!CategoryFilter::Only(Category::Beach).accepts(Category::Mountain));
    }
}
