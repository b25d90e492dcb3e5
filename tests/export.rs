#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};
    use playplan::libs::activity::{Activity, Category};
    use playplan::libs::export::{ExportActivity, ExportDay, ExportFormat, Exporter};
    use playplan::libs::progress::ProgressAnalyzer;
    use playplan::libs::recommendations::Recommendations;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
        activities: Vec<Activity>,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            let at = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap().and_hms_opt(10, 0, 0).unwrap();
            let mut swim = Activity::new("Swimming", "Pool, shallow end", at, Category::Physical, Duration::minutes(45));
            swim.is_completed = true;
            let story = Activity::new("Story", "", at + Duration::hours(9), Category::Educational, Duration::minutes(20));
            ExportTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
                activities: vec![swim, story],
            }
        }
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_activities_csv(ctx: &mut ExportTestContext) {
        let output_path = ctx.temp_dir.path().join("schedule.csv");
        let exporter = Exporter::new(ExportFormat::Csv, Some(output_path.clone()));
        exporter.export_activities(&ctx.activities).unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("ID,Scheduled,Title,Category,Minutes,Completed,Description"));
        let first = lines.next().unwrap();
        assert!(first.contains("2024-06-15 10:00,Swimming,Physical,45,true,\"Pool, shallow end\""));
        assert_eq!(lines.count(), 1);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_activities_json(ctx: &mut ExportTestContext) {
        let output_path = ctx.temp_dir.path().join("schedule.json");
        let exporter = Exporter::new(ExportFormat::Json, Some(output_path.clone()));
        exporter.export_activities(&ctx.activities).unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        let rows: Vec<ExportActivity> = serde_json::from_str(&content).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, ctx.activities[0].id.to_string());
        assert_eq!(rows[0].duration_minutes, 45.0);
        assert!(rows[0].completed);
        assert_eq!(rows[1].scheduled_at, "2024-06-15 19:00");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_summary_json(ctx: &mut ExportTestContext) {
        let summaries = ProgressAnalyzer::new(Recommendations::default()).analyze(&ctx.activities);
        let output_path = ctx.temp_dir.path().join("summary.json");
        let exporter = Exporter::new(ExportFormat::Json, Some(output_path.clone()));
        exporter.export_summary(&summaries).unwrap();

        let rows: Vec<ExportDay> = serde_json::from_str(&std::fs::read_to_string(&output_path).unwrap()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].date, "2024-06-15");
        assert_eq!(rows[0].total_minutes, 65.0);
        assert_eq!(rows[0].completed_titles, vec!["Swimming"]);
        assert_eq!(rows[0].incomplete_titles, vec!["Story"]);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_summary_keeps_multiline_titles_whole(ctx: &mut ExportTestContext) {
        ctx.activities[1].title = "Story\nand songs".to_string();
        let summaries = ProgressAnalyzer::new(Recommendations::default()).analyze(&ctx.activities);
        let output_path = ctx.temp_dir.path().join("summary.json");
        Exporter::new(ExportFormat::Json, Some(output_path.clone()))
            .export_summary(&summaries)
            .unwrap();

        let rows: Vec<ExportDay> = serde_json::from_str(&std::fs::read_to_string(&output_path).unwrap()).unwrap();
        assert_eq!(rows[0].incomplete_titles, vec!["Story\nand songs"]);
        assert_eq!(rows[0].completed_titles, vec!["Swimming"]);
    }

    #[test]
    fn test_default_output_name() {
        let exporter = Exporter::new(ExportFormat::Csv, None);
        let name = exporter.output_path().to_string_lossy().to_string();
        assert!(name.starts_with("playplan_export_"));
        assert!(name.ends_with(".csv"));
    }
}
