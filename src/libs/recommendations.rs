//! Recommended activity time per category.
//!
//! The table is a plain value handed to [`ProgressAnalyzer`] and
//! [`SuggestionGenerator`] when they are built. The default reproduces the
//! targets playplan has always used; a custom table can be supplied through
//! the `recommendations` section of the configuration file.
//!
//! [`ProgressAnalyzer`]: crate::libs::progress::ProgressAnalyzer
//! [`SuggestionGenerator`]: crate::libs::suggestions::SuggestionGenerator

use super::activity::Category;
use serde::{Deserialize, Serialize};

/// Daily, weekly and monthly targets in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Targets {
    pub daily: u32,
    pub weekly: u32,
    pub monthly: u32,
}

/// One row of the table as it appears in `config.json`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RecommendationEntry {
    pub category: Category,
    pub daily: u32,
    pub weekly: u32,
    pub monthly: u32,
}

/// Ordered category → targets table. Iteration follows insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendations {
    entries: Vec<(Category, Targets)>,
}

impl Recommendations {
    /// Builds a table from configuration rows.
    ///
    /// A category listed twice keeps its first position and its last values.
    pub fn from_entries(entries: &[RecommendationEntry]) -> Self {
        let mut table = Recommendations { entries: Vec::new() };
        for entry in entries {
            let targets = Targets {
                daily: entry.daily,
                weekly: entry.weekly,
                monthly: entry.monthly,
            };
            match table.entries.iter_mut().find(|(c, _)| *c == entry.category) {
                Some(existing) => existing.1 = targets,
                None => table.entries.push((entry.category, targets)),
            }
        }
        table
    }

    pub fn get(&self, category: Category) -> Option<Targets> {
        self.entries.iter().find(|(c, _)| *c == category).map(|(_, t)| *t)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, Targets)> + '_ {
        self.entries.iter().copied()
    }
}

impl Default for Recommendations {
    fn default() -> Self {
        let row = |category, daily, weekly, monthly| (category, Targets { daily, weekly, monthly });
        Recommendations {
            entries: vec![
                row(Category::Physical, 60, 300, 1200),
                row(Category::Educational, 30, 180, 720),
                row(Category::Social, 20, 120, 480),
                row(Category::Creative, 15, 75, 300),
                row(Category::Recreational, 30, 150, 600),
            ],
        }
    }
}
