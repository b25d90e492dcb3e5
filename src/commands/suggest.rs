use super::child::date_arg;
use super::session::Session;
use super::GlobalOptions;
use crate::{
    libs::{activity_manager::ActivityManager, messages::Message, suggestions::SuggestionGenerator},
    msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SuggestArgs {
    child: String,

    /// Day to check, YYYY-MM-DD
    #[arg(short, long, default_value = "today")]
    date: String,
}

pub fn cmd(args: SuggestArgs, options: &GlobalOptions) -> Result<()> {
    let date = date_arg(&args.date)?;
    let mut session = Session::open(options)?;
    let child = session.child_name(&args.child)?;
    let activities = ActivityManager::new(&mut session.user).list_activities(&child);

    let generator = SuggestionGenerator::new(session.config.recommendations());
    msg_print!(Message::SuggestionsHeader(child), true);
    for suggestion in generator.suggestions_on(&activities, date) {
        msg_print!(suggestion);
    }
    Ok(())
}
