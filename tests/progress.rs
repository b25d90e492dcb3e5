#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};
    use playplan::libs::activity::{Activity, Category};
    use playplan::libs::progress::ProgressAnalyzer;
    use playplan::libs::recommendations::{RecommendationEntry, Recommendations};
    use playplan::libs::suggestions::{SuggestionGenerator, BALANCED_MESSAGE};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    fn activity(title: &str, date: NaiveDate, hour: u32, category: Category, minutes: i64, done: bool) -> Activity {
        let mut activity = Activity::new(title, "", date.and_hms_opt(hour, 0, 0).unwrap(), category, Duration::minutes(minutes));
        activity.is_completed = done;
        activity
    }

    #[test]
    fn test_daily_summary_single_day() {
        let activities = vec![
            activity("Swimming", day(15), 9, Category::Physical, 30, true),
            activity("Puzzle", day(15), 11, Category::Educational, 45, true),
            activity("Drawing", day(15), 16, Category::Creative, 20, false),
        ];

        let summaries = ProgressAnalyzer::new(Recommendations::default()).analyze(&activities);
        assert_eq!(summaries.len(), 1);
        let summary = &summaries[0];
        assert_eq!(summary.date, day(15));
        assert_eq!(summary.completed, 2);
        assert_eq!(summary.incomplete, 1);
        assert_eq!(summary.total_duration_minutes(), 95.0);
        assert_eq!(summary.completed_titles, "Swimming\nPuzzle");
        assert_eq!(summary.incomplete_titles, "Drawing");
    }

    #[test]
    fn test_daily_summary_groups_by_date_ascending() {
        let activities = vec![
            activity("Late", day(16), 23, Category::Social, 10, false),
            activity("Early", day(14), 7, Category::Social, 10, false),
            activity("Morning", day(16), 8, Category::Social, 10, true),
        ];

        let summaries = ProgressAnalyzer::new(Recommendations::default()).analyze(&activities);
        let dates: Vec<NaiveDate> = summaries.iter().map(|s| s.date).collect();
        assert_eq!(dates, vec![day(14), day(16)]);
        assert_eq!(summaries[1].incomplete_titles, "Late");
        assert_eq!(summaries[1].completed_titles, "Morning");
        assert!(ProgressAnalyzer::new(Recommendations::default()).analyze(&[]).is_empty());
    }

    #[test]
    fn test_daily_total_saturates() {
        let mut first = activity("Marathon", day(15), 9, Category::Physical, 0, false);
        first.duration = Duration::MAX;
        let mut second = activity("Relay", day(15), 10, Category::Physical, 0, false);
        second.duration = Duration::MAX;

        let summaries = ProgressAnalyzer::new(Recommendations::default()).analyze(&[first, second]);
        assert_eq!(summaries[0].total_duration, Duration::MAX);
        assert_eq!(summaries[0].incomplete, 2);
    }

    #[test]
    fn test_comparison_in_table_order() {
        let activities = vec![
            activity("Swimming", day(1), 9, Category::Physical, 30, true),
            activity("Running", day(20), 9, Category::Physical, 30, true),
            activity("Singing", day(2), 9, Category::Creative, 30, false),
        ];

        let rows = ProgressAnalyzer::new(Recommendations::default()).comparison(&activities);
        let summary: Vec<(Category, usize, u32)> =
            rows.iter().map(|r| (r.category, r.completed, r.recommended_weekly_minutes)).collect();
        assert_eq!(
            summary,
            vec![
                (Category::Physical, 2, 300),
                (Category::Educational, 0, 180),
                (Category::Social, 0, 120),
                (Category::Creative, 0, 75),
                (Category::Recreational, 0, 150),
            ]
        );
    }

    #[test]
    fn test_completed_titles_are_distinct() {
        let activities = vec![
            activity("Swimming", day(1), 9, Category::Physical, 30, true),
            activity("Reading", day(2), 9, Category::Educational, 30, false),
            activity("Swimming", day(3), 9, Category::Physical, 30, true),
            activity("Lego", day(4), 9, Category::Creative, 30, true),
        ];
        let titles = ProgressAnalyzer::new(Recommendations::default()).completed_titles(&activities);
        assert_eq!(titles, vec!["Swimming", "Lego"]);
    }

    #[test]
    fn test_custom_table_drives_comparison() {
        let table = Recommendations::from_entries(&[RecommendationEntry {
            category: Category::Social,
            daily: 10,
            weekly: 70,
            monthly: 280,
        }]);
        let rows = ProgressAnalyzer::new(table).comparison(&[]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].category, Category::Social);
        assert_eq!(rows[0].recommended_weekly_minutes, 70);
    }

    #[test]
    fn test_suggestions_without_plans_today() {
        let generator = SuggestionGenerator::new(Recommendations::default());
        assert_eq!(generator.suggestions_on(&[], day(15)), vec![BALANCED_MESSAGE.to_string()]);

        let yesterday = vec![activity("Swimming", day(14), 9, Category::Physical, 30, true)];
        assert_eq!(generator.suggestions_on(&yesterday, day(15)), vec![BALANCED_MESSAGE.to_string()]);
    }

    #[test]
    fn test_suggestions_single_shortfall() {
        let today = day(15);
        let activities = vec![
            activity("Puzzle", today, 9, Category::Educational, 30, false),
            activity("Friends", today, 10, Category::Social, 20, false),
            activity("Clay", today, 11, Category::Creative, 15, true),
            activity("Park", today, 12, Category::Recreational, 45, false),
        ];

        let messages = SuggestionGenerator::new(Recommendations::default()).suggestions_on(&activities, today);
        assert_eq!(messages, vec!["Add more Physical activities today (Need 60 more minutes).".to_string()]);
    }

    #[test]
    fn test_suggestions_all_targets_met() {
        let today = day(15);
        let activities: Vec<Activity> = Category::ALL
            .iter()
            .enumerate()
            .map(|(i, c)| activity(&format!("Activity {}", i), today, 8 + i as u32, *c, 60, false))
            .collect();

        let messages = SuggestionGenerator::new(Recommendations::default()).suggestions_on(&activities, today);
        assert_eq!(messages, vec![BALANCED_MESSAGE.to_string()]);
    }
}
