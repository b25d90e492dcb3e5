#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use playplan::libs::activity::{ActivityId, Category, NewActivity};
    use playplan::libs::activity_manager::ActivityManager;
    use playplan::libs::child::Child;
    use playplan::libs::error::PlannerError;
    use playplan::libs::user::User;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap().and_hms_opt(hour, 0, 0).unwrap()
    }

    fn fields(title: &str, when: NaiveDateTime) -> NewActivity {
        NewActivity::new(title, "", when, Category::Physical, Duration::minutes(30))
    }

    fn family() -> User {
        User::new(vec![Child::new("Mia", NaiveDate::from_ymd_opt(2020, 1, 1).unwrap())])
    }

    #[test]
    fn test_add_and_list_sorted() {
        let mut user = family();
        let mut manager = ActivityManager::new(&mut user);

        manager.add_activity("Mia", fields("Painting", at(12, 9))).unwrap().unwrap();
        manager.add_activity("Mia", fields("Swimming", at(10, 9))).unwrap().unwrap();
        let id = manager.add_activity("Mia", fields("Reading", at(11, 9))).unwrap().unwrap();

        let titles: Vec<String> = manager.list_activities("Mia").into_iter().map(|a| a.title).collect();
        assert_eq!(titles, vec!["Swimming", "Reading", "Painting"]);

        let listed = manager.list_activities("Mia");
        let added: Vec<_> = listed.iter().filter(|a| a.id == id).collect();
        assert_eq!(added.len(), 1);
        assert!(!added[0].is_completed);
    }

    #[test]
    fn test_duplicate_title_ignoring_case() {
        let mut user = family();
        let mut manager = ActivityManager::new(&mut user);

        assert!(manager.add_activity("Mia", fields("Swimming", at(10, 9))).unwrap().is_some());
        assert!(manager.add_activity("Mia", fields("SWIMMING", at(11, 9))).unwrap().is_none());
        assert_eq!(manager.list_activities("Mia").len(), 1);
    }

    #[test]
    fn test_duplicate_title_ignoring_surrounding_spaces() {
        let mut user = family();
        let mut manager = ActivityManager::new(&mut user);

        assert!(manager.add_activity("Mia", fields("Swim", at(10, 9))).unwrap().is_some());
        assert!(manager.add_activity("Mia", fields("swim ", at(11, 9))).unwrap().is_none());

        let id = manager.add_activity("Mia", fields(" Paint ", at(12, 9))).unwrap().unwrap();
        let listed = manager.list_activities("Mia");
        assert_eq!(listed.iter().find(|a| a.id == id).unwrap().title, "Paint");
        assert!(!manager.update_activity("Mia", id, fields(" SWIM", at(12, 9))).unwrap());
    }

    #[test]
    fn test_unknown_child() {
        let mut user = family();
        let mut manager = ActivityManager::new(&mut user);

        // Child lookup is exact.
        assert!(manager.add_activity("mia", fields("Swimming", at(10, 9))).unwrap().is_none());
        assert!(manager.list_activities("Nobody").is_empty());
        assert!(!manager.delete_activity("Nobody", ActivityId::generate()));
        assert!(!manager.clear_activities("Nobody"));
    }

    #[test]
    fn test_contract_errors() {
        let mut user = family();
        let mut manager = ActivityManager::new(&mut user);

        assert_eq!(manager.add_activity("Mia", fields(" ", at(10, 9))), Err(PlannerError::BlankTitle));

        let mut negative = fields("Swimming", at(10, 9));
        negative.duration = Duration::minutes(-5);
        assert_eq!(manager.add_activity("Mia", negative), Err(PlannerError::NegativeDuration));
    }

    #[test]
    fn test_update_activity() {
        let mut user = family();
        let mut manager = ActivityManager::new(&mut user);
        let swim = manager.add_activity("Mia", fields("Swimming", at(10, 9))).unwrap().unwrap();
        let read = manager.add_activity("Mia", fields("Reading", at(11, 9))).unwrap().unwrap();
        assert!(manager.set_completed("Mia", swim, true));

        // Same title in another case is fine.
        let mut changed = fields("SWIMMING", at(12, 15));
        changed.category = Category::Recreational;
        changed.description = "Lake".to_string();
        assert!(manager.update_activity("Mia", swim, changed).unwrap());

        // Taking another activity's title is not.
        assert!(!manager.update_activity("Mia", read, fields("swimming", at(11, 9))).unwrap());
        assert!(!manager.update_activity("Mia", ActivityId::generate(), fields("Other", at(11, 9))).unwrap());

        let updated = manager.list_activities("Mia").into_iter().find(|a| a.id == swim).unwrap();
        assert_eq!(updated.title, "SWIMMING");
        assert_eq!(updated.description, "Lake");
        assert_eq!(updated.category, Category::Recreational);
        assert_eq!(updated.scheduled_at, at(12, 15));
        assert!(updated.is_completed);
    }

    #[test]
    fn test_delete_by_id() {
        let mut user = family();
        let mut manager = ActivityManager::new(&mut user);
        let id = manager.add_activity("Mia", fields("Swimming", at(10, 9))).unwrap().unwrap();
        manager.add_activity("Mia", fields("Reading", at(11, 9))).unwrap().unwrap();

        assert!(!manager.delete_activity("Mia", ActivityId::generate()));
        assert_eq!(manager.list_activities("Mia").len(), 2);

        assert!(manager.delete_activity("Mia", id));
        let remaining: Vec<String> = manager.list_activities("Mia").into_iter().map(|a| a.title).collect();
        assert_eq!(remaining, vec!["Reading"]);
    }

    #[test]
    fn test_toggle_and_clear() {
        let mut user = family();
        {
            let mut manager = ActivityManager::new(&mut user);
            let id = manager.add_activity("Mia", fields("Swimming", at(10, 9))).unwrap().unwrap();

            assert_eq!(manager.toggle_completion("Mia", id), Some(true));
            assert_eq!(manager.toggle_completion("Mia", id), Some(false));
            assert_eq!(manager.toggle_completion("Mia", ActivityId::generate()), None);
        }
        let before = user.revision();

        assert!(ActivityManager::new(&mut user).clear_activities("Mia"));
        assert!(user.children[0].activities.is_empty());
        assert!(user.revision() > before);
    }
}
