//! Activity records and their classification.
//!
//! An [`Activity`] belongs to exactly one child. It is identified by a
//! generated [`ActivityId`] so that callers can refer to it across reloads of
//! the data file instead of holding a reference into the child's list.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Stable identifier assigned to every activity when it is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActivityId(Uuid);

impl ActivityId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(value: &str) -> Option<Self> {
        Uuid::parse_str(value).ok().map(Self)
    }
}

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fixed activity classification.
///
/// The declaration order is significant: it is the order used when the
/// categories are listed in forms and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum Category {
    #[default]
    Physical,
    Educational,
    Recreational,
    Social,
    Creative,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Physical,
        Category::Educational,
        Category::Recreational,
        Category::Social,
        Category::Creative,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Physical => "Physical",
            Category::Educational => "Educational",
            Category::Recreational => "Recreational",
            Category::Social => "Social",
            Category::Creative => "Creative",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a category name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown activity category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Accepts the exact category name or its numeric position.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(category) = Category::ALL.iter().find(|c| c.name() == s) {
            return Ok(*category);
        }
        s.parse::<usize>()
            .ok()
            .and_then(|index| Category::ALL.get(index).copied())
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// A scheduled activity.
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub id: ActivityId,
    pub title: String,
    pub description: String,
    pub scheduled_at: NaiveDateTime,
    pub category: Category,
    pub duration: Duration,
    pub is_completed: bool,
}

impl Activity {
    pub fn new(title: &str, description: &str, scheduled_at: NaiveDateTime, category: Category, duration: Duration) -> Self {
        Activity {
            id: ActivityId::generate(),
            title: title.to_string(),
            description: description.to_string(),
            scheduled_at,
            category,
            duration,
            is_completed: false,
        }
    }

    pub fn toggle_completion(&mut self) {
        self.is_completed = !self.is_completed;
    }

    /// Duration expressed in fractional minutes.
    pub fn duration_minutes(&self) -> f64 {
        self.duration.num_seconds() as f64 / 60.0
    }
}

impl Default for Activity {
    /// Empty activity used as the starting point when decoding a data file.
    fn default() -> Self {
        Activity {
            id: ActivityId::generate(),
            title: String::new(),
            description: String::new(),
            scheduled_at: NaiveDateTime::default(),
            category: Category::default(),
            duration: Duration::zero(),
            is_completed: false,
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} scheduled on {} ({})", self.title, self.scheduled_at.format("%Y-%m-%d %H:%M"), self.category)
    }
}

/// Field values for creating or replacing an activity.
#[derive(Debug, Clone)]
pub struct NewActivity {
    pub title: String,
    pub description: String,
    pub scheduled_at: NaiveDateTime,
    pub category: Category,
    pub duration: Duration,
}

impl NewActivity {
    pub fn new(title: &str, description: &str, scheduled_at: NaiveDateTime, category: Category, duration: Duration) -> Self {
        NewActivity {
            title: title.to_string(),
            description: description.to_string(),
            scheduled_at,
            category,
            duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parses_names_and_indices() {
        assert_eq!("Social".parse::<Category>(), Ok(Category::Social));
        assert_eq!("2".parse::<Category>(), Ok(Category::Recreational));
        assert!("social".parse::<Category>().is_err());
        assert_eq!(
            "9".parse::<Category>().unwrap_err().to_string(),
            "unknown activity category '9'"
        );
    }

    #[test]
    fn toggle_flips_completion() {
        let mut activity = Activity::default();
        activity.toggle_completion();
        assert!(activity.is_completed);
        activity.toggle_completion();
        assert!(!activity.is_completed);
    }
}
