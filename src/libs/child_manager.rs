//! Child registration and maintenance.
//!
//! Children are looked up by name, ignoring case. Names are unique within a
//! user: both adding and renaming refuse a name another child already has.

use super::child::{calculate_age, Child};
use super::error::PlannerError;
use super::user::{same_name, User};
use chrono::{Local, NaiveDate};

/// Youngest supported age in whole years.
pub const MIN_AGE: u32 = 3;
/// Oldest supported age in whole years.
pub const MAX_AGE: u32 = 6;

pub struct ChildManager<'a> {
    user: &'a mut User,
}

impl<'a> ChildManager<'a> {
    pub fn new(user: &'a mut User) -> Self {
        ChildManager { user }
    }

    /// Adds a child aged 3 to 6 today.
    ///
    /// Returns `Ok(false)` when the age is out of range or the name is taken.
    pub fn add_child(&mut self, name: &str, dob: NaiveDate) -> Result<bool, PlannerError> {
        self.add_child_on(name, dob, Local::now().date_naive())
    }

    /// [`add_child`](Self::add_child) with an explicit reference date.
    pub fn add_child_on(&mut self, name: &str, dob: NaiveDate, today: NaiveDate) -> Result<bool, PlannerError> {
        let name = require_name(name)?;

        let age = calculate_age(dob, today);
        if !(MIN_AGE..=MAX_AGE).contains(&age) {
            tracing::debug!(name, age, "child rejected: age out of range");
            return Ok(false);
        }
        if self.find_child(name).is_some() {
            tracing::debug!(name, "child rejected: name already used");
            return Ok(false);
        }

        self.user.add_child(Child::new(name, dob));
        tracing::debug!(name, %dob, "child added");
        Ok(true)
    }

    /// Renames a child and changes their date of birth. The age is not re-checked.
    pub fn edit_child(&mut self, old_name: &str, new_name: &str, new_dob: NaiveDate) -> Result<bool, PlannerError> {
        let old_name = require_name(old_name)?;
        let new_name = require_name(new_name)?;

        let Some(index) = self.position(old_name) else {
            return Ok(false);
        };
        let taken = self
            .user
            .children
            .iter()
            .enumerate()
            .any(|(i, c)| i != index && same_name(&c.name, new_name));
        if taken {
            return Ok(false);
        }

        let child = &mut self.user.children[index];
        child.name = new_name.to_string();
        child.date_of_birth = new_dob;
        self.user.touch();
        tracing::debug!(old_name, new_name, "child edited");
        Ok(true)
    }

    /// Removes every child whose name matches, together with their activities.
    pub fn delete_child(&mut self, name: &str) -> Result<bool, PlannerError> {
        let name = require_name(name)?;

        let before = self.user.children.len();
        self.user.children.retain(|c| !same_name(&c.name, name));
        let removed = before - self.user.children.len();
        if removed == 0 {
            return Ok(false);
        }
        self.user.touch();
        tracing::debug!(name, removed, "child deleted");
        Ok(true)
    }

    pub fn find_child(&self, name: &str) -> Option<&Child> {
        self.user.children.iter().find(|c| same_name(&c.name, name))
    }

    pub fn list_children(&self) -> &[Child] {
        &self.user.children
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.user.children.iter().position(|c| same_name(&c.name, name))
    }
}

fn require_name(name: &str) -> Result<&str, PlannerError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(PlannerError::BlankName);
    }
    Ok(name)
}
