//! Console tables.

use super::activity::Activity;
use super::child::Child;
use super::formatter::{format_date, format_datetime, format_duration, format_minutes};
use super::progress::{Comparison, DailySummary};
use anyhow::Result;
use chrono::NaiveDate;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn children(children: &[Child], today: NaiveDate) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["NAME", "DATE OF BIRTH", "AGE", "ACTIVITIES"]);
        for child in children {
            let (years, months) = child.age_in_years_and_months_on(today);
            table.add_row(row![
                child.name,
                format_date(&child.date_of_birth),
                format!("{}y {}m", years, months),
                child.activities.len()
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn activities(activities: &[Activity]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "SCHEDULED", "TITLE", "CATEGORY", "DURATION", "DONE", "DESCRIPTION"]);
        for activity in activities {
            table.add_row(row![
                activity.id,
                format_datetime(&activity.scheduled_at),
                activity.title,
                activity.category,
                format_duration(&activity.duration),
                if activity.is_completed { "yes" } else { "no" },
                activity.description
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn daily_summary(summaries: &[DailySummary]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DATE", "COMPLETED", "INCOMPLETE", "MINUTES", "DONE", "OPEN"]);
        for day in summaries {
            table.add_row(row![
                format_date(&day.date),
                day.completed,
                day.incomplete,
                format_minutes(day.total_duration_minutes()),
                day.completed_titles,
                day.incomplete_titles
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn comparison(rows: &[Comparison]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["CATEGORY", "COMPLETED", "RECOMMENDED (MIN/WEEK)"]);
        for entry in rows {
            table.add_row(row![entry.category, entry.completed, entry.recommended_weekly_minutes]);
        }
        table.printstd();

        Ok(())
    }
}
