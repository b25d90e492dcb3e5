//! Display implementation for playplan messages.
//!
//! All wording is defined here in one match so that the command handlers only
//! ever pick a variant and never format text themselves.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CHILD MESSAGES ===
            Message::ChildAdded(name) => format!("Child '{}' added.", name),
            Message::ChildUpdated(name) => format!("Child '{}' updated.", name),
            Message::ChildDeleted(name) => format!("Child '{}' deleted.", name),
            Message::ChildNotFound(name) => format!("Child '{}' not found.", name),
            Message::ChildRejected(name) => {
                format!("Could not add '{}': the child must be 3 to 6 years old and the name must be unique.", name)
            }
            Message::ChildRenameRejected(old, new) => {
                format!("Could not rename '{}' to '{}': the child does not exist or the name is taken.", old, new)
            }
            Message::ChildrenHeader => "Children".to_string(),
            Message::NoChildrenFound => "No children found.".to_string(),
            Message::ConfirmDeleteChild(name) => format!("Delete '{}' and all of their activities?", name),

            // === ACTIVITY MESSAGES ===
            Message::ActivityAdded(title, id) => format!("Activity '{}' scheduled (id {}).", title, id),
            Message::ActivityUpdated(id) => format!("Activity {} updated.", id),
            Message::ActivityDeleted(id) => format!("Activity {} deleted.", id),
            Message::ActivityNotFound(id) => format!("Activity {} not found.", id),
            Message::ActivityRejected(child, title) => {
                format!("Could not schedule '{}': '{}' does not exist or already has an activity with that title.", title, child)
            }
            Message::ActivityCompleted(title) => format!("Activity '{}' marked as completed.", title),
            Message::ActivityReopened(title) => format!("Activity '{}' marked as not completed.", title),
            Message::ActivitiesHeader(child) => format!("Activities of {}", child),
            Message::NoActivitiesFound(child) => format!("No activities scheduled for '{}'.", child),
            Message::ActivitiesCleared(child) => format!("All activities of '{}' removed.", child),
            Message::ConfirmDeleteActivity(title) => format!("Delete activity '{}'?", title),
            Message::ConfirmClearActivities(child, count) => {
                format!("Remove all {} activities of '{}'?", count, child)
            }
            Message::InvalidActivityId(id) => format!("'{}' is not a valid activity id.", id),

            // === PROGRESS MESSAGES ===
            Message::DailySummaryHeader(child) => format!("Daily summary for {}", child),
            Message::ComparisonHeader => "Completed activities compared to weekly recommendations".to_string(),
            Message::CompletedTitlesHeader => "Completed activities".to_string(),
            Message::NoCompletedActivities => "No completed activities yet.".to_string(),
            Message::SuggestionsHeader(child) => format!("Suggestions for {}", child),

            // === DATA FILE MESSAGES ===
            Message::DataFileNotFound(path) => format!("Data file {} not found, starting with no children.", path),
            Message::DataFileLoadFailed(path) => format!("Failed to load data file {}.", path),
            Message::DataFileSaveFailed(path) => format!("Failed to save data file {}.", path),
            Message::DataFileCreated(path) => format!("Empty data file created: {}", path),
            Message::DataFileWarning(detail) => format!("Data file: {}", detail),
            Message::DataFileWarnings(count) => {
                format!("{} malformed value(s) in the data file were replaced by defaults.", count)
            }
            Message::ConfirmOverwriteDataFile(path) => format!("{} already exists. Replace it with an empty file?", path),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration deleted".to_string(),
            Message::ConfigNotFound => "Configuration file not found".to_string(),
            Message::ConfigModuleDataFile => "Data file settings".to_string(),
            Message::ConfigModuleRecommendations => "Recommended minutes per category".to_string(),
            Message::PromptSelectModules => "Select settings to configure".to_string(),
            Message::PromptDataFile => "Path of the data file".to_string(),
            Message::PromptStrictParsing => "Reject malformed data files instead of repairing them?".to_string(),
            Message::PromptDailyTarget(category) => format!("{}: minutes per day", category),
            Message::PromptWeeklyTarget(category) => format!("{}: minutes per week", category),
            Message::PromptMonthlyTarget(category) => format!("{}: minutes per month", category),

            // === EXPORT MESSAGES ===
            Message::ExportingData(child, format) => format!("Exporting activities of {} in {} format...", child, format),
            Message::ExportCompleted(path) => format!("Export completed successfully: {}", path),
            Message::ExportFailed(error) => format!("Export failed: {}", error),

            // === INPUT MESSAGES ===
            Message::InvalidDate(value) => format!("Invalid date '{}', expected YYYY-MM-DD.", value),
            Message::InvalidDateTime(value) => format!("Invalid date and time '{}', expected YYYY-MM-DD HH:MM.", value),
            Message::InvalidDuration(value) => {
                format!("Invalid duration '{}', expected minutes or [d.]hh:mm[:ss].", value)
            }

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };

        write!(f, "{}", text)
    }
}
