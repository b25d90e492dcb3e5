use super::activity::{Activity, ActivityId};
use chrono::{Datelike, Local, NaiveDate};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Child {
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub activities: Vec<Activity>,
}

impl Child {
    pub fn new(name: &str, date_of_birth: NaiveDate) -> Self {
        Child {
            name: name.to_string(),
            date_of_birth,
            activities: Vec::new(),
        }
    }

    /// Age in complete years on the given day.
    pub fn age_on(&self, today: NaiveDate) -> u32 {
        calculate_age(self.date_of_birth, today)
    }

    /// Age as complete years plus the months elapsed since the last birthday.
    pub fn age_in_years_and_months_on(&self, today: NaiveDate) -> (u32, u32) {
        let dob = self.date_of_birth;
        if today < dob {
            return (0, 0);
        }
        let mut months = (today.year() - dob.year()) * 12 + today.month() as i32 - dob.month() as i32;
        if today.day() < dob.day() {
            months -= 1;
        }
        let months = months.max(0) as u32;
        (months / 12, months % 12)
    }

    pub fn contains_activity(&self, id: ActivityId) -> bool {
        self.activities.iter().any(|a| a.id == id)
    }

    pub fn clear_activities(&mut self) {
        self.activities.clear();
    }

    pub fn sort_activities_by_date(&mut self) {
        self.activities.sort_by_key(|a| a.scheduled_at);
    }
}

impl fmt::Display for Child {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (years, months) = self.age_in_years_and_months_on(Local::now().date_naive());
        write!(f, "{}, Age: {} years and {} months", self.name, years, months)
    }
}

/// Whole years between `dob` and `today`, taking month and day into account.
///
/// A date of birth in the future yields zero.
pub fn calculate_age(dob: NaiveDate, today: NaiveDate) -> u32 {
    let mut age = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        age -= 1;
    }
    age.max(0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn age_counts_only_completed_years() {
        let today = date(2024, 6, 15);
        assert_eq!(calculate_age(date(2021, 6, 15), today), 3);
        assert_eq!(calculate_age(date(2021, 6, 16), today), 2);
        assert_eq!(calculate_age(date(2030, 1, 1), today), 0);
    }

    #[test]
    fn leap_day_birthday_waits_for_march() {
        assert_eq!(calculate_age(date(2020, 2, 29), date(2025, 2, 28)), 4);
        assert_eq!(calculate_age(date(2020, 2, 29), date(2025, 3, 1)), 5);
    }

    #[test]
    fn years_and_months() {
        let child = Child::new("Mia", date(2020, 3, 20));
        assert_eq!(child.age_in_years_and_months_on(date(2024, 6, 15)), (4, 2));
        assert_eq!(child.age_in_years_and_months_on(date(2024, 3, 19)), (3, 11));
    }

    #[test]
    fn age_on_uses_the_date_of_birth() {
        let child = Child::new("Mia", date(2020, 3, 20));
        assert_eq!(child.age_on(date(2024, 3, 19)), 3);
        assert_eq!(child.age_on(date(2024, 3, 20)), 4);
    }

    #[test]
    fn activities_by_id_and_date() {
        use crate::libs::activity::Category;
        use chrono::Duration;

        let at = |d: u32| date(2024, 6, d).and_hms_opt(9, 0, 0).unwrap();
        let mut child = Child::new("Mia", date(2020, 3, 20));
        child.activities.push(Activity::new("Painting", "", at(12), Category::Creative, Duration::minutes(20)));
        child.activities.push(Activity::new("Swimming", "", at(10), Category::Physical, Duration::minutes(45)));
        let painting = child.activities[0].id;

        assert!(child.contains_activity(painting));
        assert!(!child.contains_activity(ActivityId::generate()));

        child.sort_activities_by_date();
        let titles: Vec<&str> = child.activities.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["Swimming", "Painting"]);

        child.clear_activities();
        assert!(!child.contains_activity(painting));
    }
}
