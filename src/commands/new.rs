use super::session::confirm;
use super::GlobalOptions;
use crate::{
    db::store::Store,
    libs::{config::Config, messages::Message, user::User},
    msg_bail_anyhow, msg_info, msg_success,
};
use anyhow::Result;

/// Writes a data file with no children, asking first if one already exists.
pub fn cmd(options: &GlobalOptions) -> Result<()> {
    let config = Config::read()?;
    let mut store = Store::from_config(&config);
    if let Some(file) = &options.file {
        store = store.with_path(file);
    }
    let path = store.path().display().to_string();

    if store.exists() && !confirm(options, Message::ConfirmOverwriteDataFile(path.clone()))? {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    if !store.save(&User::default()) {
        msg_bail_anyhow!(Message::DataFileSaveFailed(path));
    }
    msg_success!(Message::DataFileCreated(path));
    Ok(())
}
