//! Scheduling and maintenance of a child's activities.
//!
//! The owning child is looked up by its exact name. Titles are unique per
//! child, ignoring case. Activities are addressed by their [`ActivityId`].
//! Titles and descriptions are stored without surrounding whitespace, the
//! same form they take after a reload of the data file.

use super::activity::{Activity, ActivityId, NewActivity};
use super::child::Child;
use super::error::PlannerError;
use super::user::{same_name, User};
use chrono::Duration;

pub struct ActivityManager<'a> {
    user: &'a mut User,
}

impl<'a> ActivityManager<'a> {
    pub fn new(user: &'a mut User) -> Self {
        ActivityManager { user }
    }

    /// Schedules a new, not yet completed activity.
    ///
    /// Returns the new id, or `None` when the child does not exist or already
    /// has an activity with the same title.
    pub fn add_activity(&mut self, child_name: &str, fields: NewActivity) -> Result<Option<ActivityId>, PlannerError> {
        let fields = validate(fields)?;

        let Some(child) = self.child_mut(child_name) else {
            return Ok(None);
        };
        if child.activities.iter().any(|a| same_name(&a.title, &fields.title)) {
            tracing::debug!(child = child_name, title = %fields.title, "activity rejected: duplicate title");
            return Ok(None);
        }

        let activity = Activity::new(&fields.title, &fields.description, fields.scheduled_at, fields.category, fields.duration);
        let id = activity.id;
        child.activities.push(activity);
        self.user.touch();
        tracing::debug!(child = child_name, %id, title = %fields.title, "activity added");
        Ok(Some(id))
    }

    /// Replaces every field except the id and the completion flag.
    ///
    /// Keeping the current title (in any letter case) is allowed; taking the
    /// title of another activity of the same child is not.
    pub fn update_activity(&mut self, child_name: &str, id: ActivityId, fields: NewActivity) -> Result<bool, PlannerError> {
        let fields = validate(fields)?;

        let Some(child) = self.child_mut(child_name) else {
            return Ok(false);
        };
        if child.activities.iter().any(|a| a.id != id && same_name(&a.title, &fields.title)) {
            return Ok(false);
        }
        let Some(activity) = child.activities.iter_mut().find(|a| a.id == id) else {
            return Ok(false);
        };

        activity.title = fields.title;
        activity.description = fields.description;
        activity.scheduled_at = fields.scheduled_at;
        activity.category = fields.category;
        activity.duration = fields.duration;
        self.user.touch();
        tracing::debug!(child = child_name, %id, "activity updated");
        Ok(true)
    }

    pub fn delete_activity(&mut self, child_name: &str, id: ActivityId) -> bool {
        let Some(child) = self.child_mut(child_name) else {
            return false;
        };
        if !child.contains_activity(id) {
            return false;
        }
        child.activities.retain(|a| a.id != id);
        self.user.touch();
        tracing::debug!(child = child_name, %id, "activity deleted");
        true
    }

    /// The child's activities ordered by scheduled time; empty for an unknown child.
    pub fn list_activities(&self, child_name: &str) -> Vec<Activity> {
        let Some(child) = self.user.children.iter().find(|c| c.name == child_name) else {
            return Vec::new();
        };
        let mut child = child.clone();
        child.sort_activities_by_date();
        child.activities
    }

    pub fn set_completed(&mut self, child_name: &str, id: ActivityId, completed: bool) -> bool {
        let Some(activity) = self.activity_mut(child_name, id) else {
            return false;
        };
        activity.is_completed = completed;
        self.user.touch();
        true
    }

    /// Flips the completion flag and returns the new value.
    pub fn toggle_completion(&mut self, child_name: &str, id: ActivityId) -> Option<bool> {
        let activity = self.activity_mut(child_name, id)?;
        activity.toggle_completion();
        let completed = activity.is_completed;
        self.user.touch();
        Some(completed)
    }

    pub fn clear_activities(&mut self, child_name: &str) -> bool {
        let Some(child) = self.child_mut(child_name) else {
            return false;
        };
        child.clear_activities();
        self.user.touch();
        true
    }

    fn child_mut(&mut self, child_name: &str) -> Option<&mut Child> {
        self.user.children.iter_mut().find(|c| c.name == child_name)
    }

    fn activity_mut(&mut self, child_name: &str, id: ActivityId) -> Option<&mut Activity> {
        self.child_mut(child_name)?.activities.iter_mut().find(|a| a.id == id)
    }
}

/// Checks the contract and trims the free-text fields.
fn validate(mut fields: NewActivity) -> Result<NewActivity, PlannerError> {
    fields.title = fields.title.trim().to_string();
    fields.description = fields.description.trim().to_string();
    if fields.title.is_empty() {
        return Err(PlannerError::BlankTitle);
    }
    if fields.duration < Duration::zero() {
        return Err(PlannerError::NegativeDuration);
    }
    Ok(fields)
}
