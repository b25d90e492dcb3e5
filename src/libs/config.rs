//! Application settings stored as `config.json`.
//!
//! Every field is optional; a missing file or a missing field means the
//! built-in default is used:
//!
//! ```json
//! {
//!   "data_file": "/home/me/family.txt",
//!   "strict_parsing": false,
//!   "recommendations": [
//!     { "category": "Physical", "daily": 60, "weekly": 300, "monthly": 1200 }
//!   ]
//! }
//! ```
//!
//! A `recommendations` list replaces the default table entirely, so
//! categories left out of it receive neither comparisons nor suggestions.

use super::data_storage::DataStorage;
use super::recommendations::{RecommendationEntry, Recommendations, Targets};
use crate::db::codec::ParseMode;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict_parsing: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<RecommendationEntry>>,
}

impl Config {
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(&config_file_path)?;
        let config: Config =
            serde_json::from_str(&config_str).with_context(|| format!("parsing {}", config_file_path.display()))?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns `false` when there was none.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    pub fn parse_mode(&self) -> ParseMode {
        match self.strict_parsing {
            Some(true) => ParseMode::Strict,
            _ => ParseMode::Permissive,
        }
    }

    pub fn recommendations(&self) -> Recommendations {
        match &self.recommendations {
            Some(entries) => Recommendations::from_entries(entries),
            None => Recommendations::default(),
        }
    }

    /// Interactive setup: asks for the selected settings, keeping current
    /// values as defaults.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = [Message::ConfigModuleDataFile.to_string(), Message::ConfigModuleRecommendations.to_string()];
        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules)
            .interact()?;

        for selection in selected {
            match selection {
                0 => {
                    msg_print!(Message::ConfigModuleDataFile);
                    let current = config
                        .data_file
                        .clone()
                        .unwrap_or_else(|| PathBuf::from(crate::db::store::DEFAULT_FILE_PATH));
                    let path: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptDataFile.to_string())
                        .default(current.display().to_string())
                        .interact_text()?;
                    config.data_file = Some(PathBuf::from(path));

                    config.strict_parsing = Some(
                        Confirm::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptStrictParsing.to_string())
                            .default(config.strict_parsing.unwrap_or(false))
                            .interact()?,
                    );
                }
                1 => {
                    msg_print!(Message::ConfigModuleRecommendations);
                    let current = config.recommendations();
                    let mut entries = Vec::new();
                    for (category, targets) in current.iter() {
                        let Targets { daily, weekly, monthly } = targets;
                        entries.push(RecommendationEntry {
                            category,
                            daily: Input::with_theme(&ColorfulTheme::default())
                                .with_prompt(Message::PromptDailyTarget(category.to_string()).to_string())
                                .default(daily)
                                .interact_text()?,
                            weekly: Input::with_theme(&ColorfulTheme::default())
                                .with_prompt(Message::PromptWeeklyTarget(category.to_string()).to_string())
                                .default(weekly)
                                .interact_text()?,
                            monthly: Input::with_theme(&ColorfulTheme::default())
                                .with_prompt(Message::PromptMonthlyTarget(category.to_string()).to_string())
                                .default(monthly)
                                .interact_text()?,
                        });
                    }
                    config.recommendations = Some(entries);
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
