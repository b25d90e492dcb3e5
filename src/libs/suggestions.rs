//! Daily nudges toward the recommended activity mix.
//!
//! Only activities scheduled for today count, completed or not: the
//! generator looks at what is planned, not what is done. A day with nothing
//! planned yet gets the balanced message rather than a list of every
//! category.

use super::activity::Activity;
use super::recommendations::Recommendations;
use chrono::{Local, NaiveDate};

/// Returned alone when every category meets its daily target or nothing is planned today.
pub const BALANCED_MESSAGE: &str = "All activity types are well-balanced!";

pub struct SuggestionGenerator {
    recommendations: Recommendations,
}

impl SuggestionGenerator {
    pub fn new(recommendations: Recommendations) -> Self {
        SuggestionGenerator { recommendations }
    }

    pub fn suggestions(&self, activities: &[Activity]) -> Vec<String> {
        self.suggestions_on(activities, Local::now().date_naive())
    }

    /// One message per category below its daily target, in table order.
    ///
    /// The missing time is rounded up to whole minutes.
    pub fn suggestions_on(&self, activities: &[Activity], today: NaiveDate) -> Vec<String> {
        let todays: Vec<&Activity> = activities.iter().filter(|a| a.scheduled_at.date() == today).collect();

        let mut messages = Vec::new();
        let planned_today: f64 = todays.iter().map(|a| a.duration_minutes()).sum();
        if planned_today <= 0.0 {
            messages.push(BALANCED_MESSAGE.to_string());
            return messages;
        }

        for (category, targets) in self.recommendations.iter() {
            let planned: f64 = todays.iter().filter(|a| a.category == category).map(|a| a.duration_minutes()).sum();
            let target = f64::from(targets.daily);
            if planned < target {
                let missing = (target - planned).ceil() as u64;
                messages.push(format!("Add more {} activities today (Need {} more minutes).", category, missing));
            }
        }

        if messages.is_empty() {
            messages.push(BALANCED_MESSAGE.to_string());
        }
        messages
    }
}
