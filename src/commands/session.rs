//! Loading and saving the data file around a single command.

use super::GlobalOptions;
use crate::db::store::Store;
use crate::libs::activity::{Activity, ActivityId};
use crate::libs::child::Child;
use crate::libs::child_manager::ChildManager;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::user::User;
use crate::{msg_bail_anyhow, msg_info, msg_warning};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm};

pub struct Session {
    pub config: Config,
    pub store: Store,
    pub user: User,
    loaded_revision: u64,
}

impl Session {
    /// Reads the configuration and the data file.
    ///
    /// A missing data file starts an empty session; an unreadable one
    /// aborts the command so that it is never overwritten by accident.
    pub fn open(options: &GlobalOptions) -> Result<Self> {
        let config = Config::read()?;
        let mut store = Store::from_config(&config);
        if let Some(file) = &options.file {
            store = store.with_path(file);
        }

        let user = if !store.exists() {
            msg_info!(Message::DataFileNotFound(store.path().display().to_string()));
            User::default()
        } else {
            let Some(decoded) = store.load() else {
                msg_bail_anyhow!(Message::DataFileLoadFailed(store.path().display().to_string()));
            };
            if !decoded.warnings.is_empty() {
                for warning in &decoded.warnings {
                    msg_warning!(Message::DataFileWarning(warning.to_string()));
                }
                msg_warning!(Message::DataFileWarnings(decoded.warnings.len()));
            }
            decoded.user
        };

        let loaded_revision = user.revision();
        Ok(Session {
            config,
            store,
            user,
            loaded_revision,
        })
    }

    pub fn is_modified(&self) -> bool {
        self.user.revision() != self.loaded_revision
    }

    /// Writes the data file when the user data changed since it was opened.
    pub fn save(&mut self) -> Result<()> {
        if !self.is_modified() {
            return Ok(());
        }
        if !self.store.save(&self.user) {
            msg_bail_anyhow!(Message::DataFileSaveFailed(self.store.path().display().to_string()));
        }
        self.loaded_revision = self.user.revision();
        Ok(())
    }

    /// The stored spelling of a child's name, matched ignoring case.
    pub fn child_name(&mut self, name: &str) -> Result<String> {
        match ChildManager::new(&mut self.user).find_child(name) {
            Some(child) => Ok(child.name.clone()),
            None => msg_bail_anyhow!(Message::ChildNotFound(name.to_string())),
        }
    }

    pub fn child(&self, name: &str) -> Option<&Child> {
        self.user.children.iter().find(|c| c.name == name)
    }
}

/// Resolves a full activity id or an unambiguous prefix of one.
pub fn resolve_activity(child: &Child, text: &str) -> Result<ActivityId> {
    if let Some(id) = ActivityId::parse(text) {
        return Ok(id);
    }
    let prefix = text.trim().to_lowercase();
    let matches: Vec<&Activity> = if prefix.is_empty() {
        Vec::new()
    } else {
        child.activities.iter().filter(|a| a.id.to_string().starts_with(&prefix)).collect()
    };
    match matches.as_slice() {
        [only] => Ok(only.id),
        _ => msg_bail_anyhow!(Message::InvalidActivityId(text.to_string())),
    }
}

/// Asks for confirmation unless `--yes` was given.
pub fn confirm(options: &GlobalOptions, prompt: Message) -> Result<bool> {
    if options.yes {
        return Ok(true);
    }
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(false)
        .interact()?)
}
