use super::codec::{self, Decoded, ParseMode};
use crate::libs::config::Config;
use crate::libs::user::User;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Data file used when neither the command line nor the configuration names one.
pub const DEFAULT_FILE_PATH: &str = "userData.txt";

/// Reads and writes the data file.
///
/// Failures never propagate: `save` reports `false` and `load` reports
/// `None`, with the underlying cause written to the log.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
    mode: ParseMode,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>, mode: ParseMode) -> Self {
        Store { path: path.into(), mode }
    }

    /// Store for the configured data file, or `userData.txt` in the working directory.
    pub fn from_config(config: &Config) -> Self {
        let path = config.data_file.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_FILE_PATH));
        Store::new(path, config.parse_mode())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Same file, different location ("save as" / "open").
    pub fn with_path(&self, path: impl Into<PathBuf>) -> Self {
        Store::new(path, self.mode)
    }

    pub fn save(&self, user: &User) -> bool {
        match self.write(user) {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), children = user.children.len(), "data file saved");
                true
            }
            Err(e) => {
                tracing::error!(path = %self.path.display(), "failed to save data file: {:#}", e);
                false
            }
        }
    }

    pub fn load(&self) -> Option<Decoded> {
        if !self.path.exists() {
            tracing::warn!(path = %self.path.display(), "data file not found");
            return None;
        }
        match self.read() {
            Ok(decoded) => {
                tracing::debug!(
                    path = %self.path.display(),
                    children = decoded.user.children.len(),
                    warnings = decoded.warnings.len(),
                    "data file loaded"
                );
                Some(decoded)
            }
            Err(e) => {
                tracing::error!(path = %self.path.display(), "failed to load data file: {:#}", e);
                None
            }
        }
    }

    fn write(&self, user: &User) -> Result<()> {
        fs::write(&self.path, codec::encode(user)).with_context(|| format!("writing {}", self.path.display()))
    }

    fn read(&self) -> Result<Decoded> {
        let text = fs::read_to_string(&self.path).with_context(|| format!("reading {}", self.path.display()))?;
        Ok(codec::decode(&text, self.mode)?)
    }
}
