//! # playplan
//!
//! Activity planning for children aged 3 to 6: schedule activities, mark
//! them done and see how the week compares with recommended time per
//! activity category. Everything is kept in one line-oriented text file.
//!
//! ```rust,no_run
//! use chrono::{Duration, NaiveDate};
//! use playplan::db::{codec::ParseMode, store::Store};
//! use playplan::libs::activity::{Category, NewActivity};
//! use playplan::libs::activity_manager::ActivityManager;
//! use playplan::libs::child_manager::ChildManager;
//! use playplan::libs::user::User;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut user = User::default();
//! let dob = NaiveDate::from_ymd_opt(2020, 5, 14).unwrap();
//! ChildManager::new(&mut user).add_child("Mia", dob)?;
//!
//! let at = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap().and_hms_opt(10, 0, 0).unwrap();
//! let walk = NewActivity::new("Park walk", "", at, Category::Physical, Duration::minutes(45));
//! ActivityManager::new(&mut user).add_activity("Mia", walk)?;
//!
//! Store::new("userData.txt", ParseMode::Permissive).save(&user);
//! # Ok(())
//! # }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
