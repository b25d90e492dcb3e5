//! Progress analytics over a child's activities.
//!
//! ## Daily summary
//!
//! Activities are grouped by the calendar date they are scheduled on. Each
//! group reports how many activities were completed, how many were not, how
//! much time was planned in total and which titles fall on each side.
//!
//! ## Comparison with recommendations
//!
//! For every category of the recommendation table the analyzer counts the
//! completed activities of that category across the whole history and pairs
//! the count with the weekly target:
//!
//! ```text
//! Category       Completed   Recommended (weekly minutes)
//! Physical       4           300
//! Educational    0           180
//! ```

use super::activity::{Activity, Category};
use super::recommendations::Recommendations;
use chrono::{Duration, NaiveDate};
use std::collections::BTreeMap;

/// One calendar day of activity.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub completed: usize,
    pub incomplete: usize,
    pub total_duration: Duration,
    /// Completed titles joined by newlines, in list order.
    pub completed_titles: String,
    /// Incomplete titles joined by newlines, in list order.
    pub incomplete_titles: String,
    completed_list: Vec<String>,
    incomplete_list: Vec<String>,
}

impl DailySummary {
    pub fn total_duration_minutes(&self) -> f64 {
        self.total_duration.num_seconds() as f64 / 60.0
    }

    /// Completed titles one by one; a title may itself contain a line break.
    pub fn completed_title_list(&self) -> &[String] {
        &self.completed_list
    }

    pub fn incomplete_title_list(&self) -> &[String] {
        &self.incomplete_list
    }
}

/// Completed count for a category next to its weekly target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    pub category: Category,
    pub completed: usize,
    pub recommended_weekly_minutes: u32,
}

pub struct ProgressAnalyzer {
    recommendations: Recommendations,
}

impl ProgressAnalyzer {
    pub fn new(recommendations: Recommendations) -> Self {
        ProgressAnalyzer { recommendations }
    }

    /// One summary per distinct scheduled date, oldest first.
    pub fn analyze(&self, activities: &[Activity]) -> Vec<DailySummary> {
        let mut days: BTreeMap<NaiveDate, Vec<&Activity>> = BTreeMap::new();
        for activity in activities {
            days.entry(activity.scheduled_at.date()).or_default().push(activity);
        }

        days.into_iter()
            .map(|(date, group)| {
                let (done, open): (Vec<&Activity>, Vec<&Activity>) = group.iter().partition(|a| a.is_completed);
                let completed_list = titles(&done);
                let incomplete_list = titles(&open);
                DailySummary {
                    date,
                    completed: done.len(),
                    incomplete: open.len(),
                    total_duration: total_duration(&group),
                    completed_titles: completed_list.join("\n"),
                    incomplete_titles: incomplete_list.join("\n"),
                    completed_list,
                    incomplete_list,
                }
            })
            .collect()
    }

    /// Completed counts per category in table order; categories without
    /// completions are listed with zero.
    pub fn comparison(&self, activities: &[Activity]) -> Vec<Comparison> {
        self.recommendations
            .iter()
            .map(|(category, targets)| Comparison {
                category,
                completed: activities.iter().filter(|a| a.is_completed && a.category == category).count(),
                recommended_weekly_minutes: targets.weekly,
            })
            .collect()
    }

    /// Distinct titles of completed activities, first occurrence first.
    pub fn completed_titles(&self, activities: &[Activity]) -> Vec<String> {
        let mut titles: Vec<String> = Vec::new();
        for activity in activities.iter().filter(|a| a.is_completed) {
            if !titles.contains(&activity.title) {
                titles.push(activity.title.clone());
            }
        }
        titles
    }
}

fn titles(activities: &[&Activity]) -> Vec<String> {
    activities.iter().map(|a| a.title.clone()).collect()
}

/// Sum of the durations, capped at the largest representable duration.
fn total_duration(activities: &[&Activity]) -> Duration {
    activities
        .iter()
        .try_fold(Duration::zero(), |total, a| total.checked_add(&a.duration))
        .unwrap_or(Duration::MAX)
}
