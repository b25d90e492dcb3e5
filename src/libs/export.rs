//! CSV and JSON export of a child's schedule or daily summary.
//!
//! Without an explicit output path the file is written to the working
//! directory as `playplan_export_YYYYmmdd_HHMMSS.<ext>`.

use super::activity::Activity;
use super::formatter::{format_date, format_datetime, format_minutes};
use super::progress::DailySummary;
use anyhow::Result;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportData {
    /// Every activity, ordered by scheduled time.
    Activities,
    /// One row per scheduled day.
    Summary,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ExportActivity {
    pub id: String,
    pub title: String,
    pub description: String,
    pub scheduled_at: String,
    pub category: String,
    pub duration_minutes: f64,
    pub completed: bool,
}

impl From<&Activity> for ExportActivity {
    fn from(activity: &Activity) -> Self {
        ExportActivity {
            id: activity.id.to_string(),
            title: activity.title.clone(),
            description: activity.description.clone(),
            scheduled_at: format_datetime(&activity.scheduled_at),
            category: activity.category.to_string(),
            duration_minutes: activity.duration_minutes(),
            completed: activity.is_completed,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ExportDay {
    pub date: String,
    pub completed: usize,
    pub incomplete: usize,
    pub total_minutes: f64,
    pub completed_titles: Vec<String>,
    pub incomplete_titles: Vec<String>,
}

impl From<&DailySummary> for ExportDay {
    fn from(day: &DailySummary) -> Self {
        ExportDay {
            date: format_date(&day.date),
            completed: day.completed,
            incomplete: day.incomplete,
            total_minutes: day.total_duration_minutes(),
            completed_titles: day.completed_title_list().to_vec(),
            incomplete_titles: day.incomplete_title_list().to_vec(),
        }
    }
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let default_name = format!("playplan_export_{}", Local::now().format("%Y%m%d_%H%M%S"));
        let extension = match format {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        };
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, extension)));

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn export_activities(&self, activities: &[Activity]) -> Result<()> {
        let rows: Vec<ExportActivity> = activities.iter().map(ExportActivity::from).collect();
        match self.format {
            ExportFormat::Csv => self.export_activities_csv(&rows),
            ExportFormat::Json => self.write_json(&rows),
        }
    }

    pub fn export_summary(&self, summaries: &[DailySummary]) -> Result<()> {
        let rows: Vec<ExportDay> = summaries.iter().map(ExportDay::from).collect();
        match self.format {
            ExportFormat::Csv => self.export_summary_csv(&rows),
            ExportFormat::Json => self.write_json(&rows),
        }
    }

    fn write_json<T: Serialize>(&self, rows: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(rows)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }

    fn export_activities_csv(&self, rows: &[ExportActivity]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(["ID", "Scheduled", "Title", "Category", "Minutes", "Completed", "Description"])?;

        for row in rows {
            wtr.write_record([
                row.id.clone(),
                row.scheduled_at.clone(),
                row.title.clone(),
                row.category.clone(),
                format_minutes(row.duration_minutes),
                row.completed.to_string(),
                row.description.clone(),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn export_summary_csv(&self, rows: &[ExportDay]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(["Date", "Completed", "Incomplete", "Minutes", "Completed titles", "Incomplete titles"])?;

        for row in rows {
            wtr.write_record([
                row.date.clone(),
                row.completed.to_string(),
                row.incomplete.to_string(),
                format_minutes(row.total_minutes),
                row.completed_titles.join("; "),
                row.incomplete_titles.join("; "),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }
}
