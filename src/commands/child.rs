use super::session::{confirm, Session};
use super::GlobalOptions;
use crate::{
    libs::{child_manager::ChildManager, formatter::parse_date, messages::Message, view::View},
    msg_error, msg_error_anyhow, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct ChildArgs {
    #[command(subcommand)]
    command: ChildCommand,
}

#[derive(Debug, Subcommand)]
enum ChildCommand {
    /// Register a child aged 3 to 6
    Add {
        name: String,
        /// Date of birth, YYYY-MM-DD
        date_of_birth: String,
    },
    /// Rename a child or correct their date of birth
    Edit {
        name: String,
        #[arg(short, long)]
        new_name: Option<String>,
        /// New date of birth, YYYY-MM-DD
        #[arg(short, long)]
        date_of_birth: Option<String>,
    },
    /// Remove a child and all of their activities
    Delete { name: String },
    /// List all children
    List,
}

pub fn cmd(args: ChildArgs, options: &GlobalOptions) -> Result<()> {
    let mut session = Session::open(options)?;
    match args.command {
        ChildCommand::Add { name, date_of_birth } => handle_add(&mut session, name, &date_of_birth)?,
        ChildCommand::Edit {
            name,
            new_name,
            date_of_birth,
        } => handle_edit(&mut session, name, new_name, date_of_birth)?,
        ChildCommand::Delete { name } => handle_delete(&mut session, options, name)?,
        ChildCommand::List => handle_list(&mut session)?,
    }
    session.save()
}

fn handle_add(session: &mut Session, name: String, date_of_birth: &str) -> Result<()> {
    let dob = date_arg(date_of_birth)?;
    if ChildManager::new(&mut session.user).add_child(&name, dob)? {
        msg_success!(Message::ChildAdded(name.trim().to_string()));
    } else {
        msg_error!(Message::ChildRejected(name));
    }
    Ok(())
}

fn handle_edit(session: &mut Session, name: String, new_name: Option<String>, date_of_birth: Option<String>) -> Result<()> {
    let Some(child) = ChildManager::new(&mut session.user).find_child(&name).cloned() else {
        msg_error!(Message::ChildNotFound(name));
        return Ok(());
    };
    let new_name = new_name.unwrap_or_else(|| child.name.clone());
    let dob = match date_of_birth {
        Some(text) => date_arg(&text)?,
        None => child.date_of_birth,
    };

    if ChildManager::new(&mut session.user).edit_child(&child.name, &new_name, dob)? {
        msg_success!(Message::ChildUpdated(new_name.trim().to_string()));
    } else {
        msg_error!(Message::ChildRenameRejected(child.name, new_name));
    }
    Ok(())
}

fn handle_delete(session: &mut Session, options: &GlobalOptions, name: String) -> Result<()> {
    if ChildManager::new(&mut session.user).find_child(&name).is_none() {
        msg_error!(Message::ChildNotFound(name));
        return Ok(());
    }
    if !confirm(options, Message::ConfirmDeleteChild(name.clone()))? {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }
    if ChildManager::new(&mut session.user).delete_child(&name)? {
        msg_success!(Message::ChildDeleted(name));
    }
    Ok(())
}

fn handle_list(session: &mut Session) -> Result<()> {
    let manager = ChildManager::new(&mut session.user);
    let children = manager.list_children();
    if children.is_empty() {
        msg_info!(Message::NoChildrenFound);
        return Ok(());
    }

    msg_print!(Message::ChildrenHeader, true);
    View::children(children, Local::now().date_naive())
}

pub(super) fn date_arg(text: &str) -> Result<NaiveDate> {
    parse_date(text).ok_or_else(|| msg_error_anyhow!(Message::InvalidDate(text.to_string())))
}
