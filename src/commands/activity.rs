use super::session::{confirm, resolve_activity, Session};
use super::GlobalOptions;
use crate::{
    libs::{
        activity::{Activity, Category, NewActivity},
        activity_manager::ActivityManager,
        formatter::{parse_datetime, parse_duration},
        messages::Message,
        view::View,
    },
    msg_error, msg_error_anyhow, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::{Duration, NaiveDateTime};
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct ActivityArgs {
    #[command(subcommand)]
    command: ActivityCommand,
}

#[derive(Debug, Args)]
struct ActivityFields {
    /// Start time, "YYYY-MM-DD HH:MM" or "HH:MM" for today
    #[arg(short, long)]
    at: Option<String>,
    #[arg(short, long, value_enum)]
    category: Option<Category>,
    /// Minutes, or [d.]hh:mm[:ss]
    #[arg(short = 'm', long)]
    duration: Option<String>,
    #[arg(short, long)]
    description: Option<String>,
}

#[derive(Debug, Subcommand)]
enum ActivityCommand {
    /// Schedule a new activity
    Add {
        child: String,
        title: String,
        #[command(flatten)]
        fields: ActivityFields,
    },
    /// Change an activity; omitted fields keep their value
    Update {
        child: String,
        /// Activity id or a unique prefix of it
        id: String,
        #[arg(short, long)]
        title: Option<String>,
        #[command(flatten)]
        fields: ActivityFields,
    },
    /// Delete an activity
    Delete { child: String, id: String },
    /// List a child's activities by scheduled time
    List { child: String },
    /// Mark an activity as completed, or back to not completed
    Toggle { child: String, id: String },
    /// Delete all of a child's activities
    Clear { child: String },
}

pub fn cmd(args: ActivityArgs, options: &GlobalOptions) -> Result<()> {
    let mut session = Session::open(options)?;
    match args.command {
        ActivityCommand::Add { child, title, fields } => handle_add(&mut session, &child, title, fields)?,
        ActivityCommand::Update { child, id, title, fields } => handle_update(&mut session, &child, &id, title, fields)?,
        ActivityCommand::Delete { child, id } => handle_delete(&mut session, options, &child, &id)?,
        ActivityCommand::List { child } => handle_list(&mut session, &child)?,
        ActivityCommand::Toggle { child, id } => handle_toggle(&mut session, &child, &id)?,
        ActivityCommand::Clear { child } => handle_clear(&mut session, options, &child)?,
    }
    session.save()
}

fn handle_add(session: &mut Session, child: &str, title: String, fields: ActivityFields) -> Result<()> {
    let child = session.child_name(child)?;
    let scheduled_at = match &fields.at {
        Some(text) => datetime_arg(text)?,
        None => chrono::Local::now().naive_local(),
    };
    let duration = match &fields.duration {
        Some(text) => duration_arg(text)?,
        None => Duration::zero(),
    };
    let new = NewActivity::new(
        &title,
        fields.description.as_deref().unwrap_or_default(),
        scheduled_at,
        fields.category.unwrap_or_default(),
        duration,
    );

    match ActivityManager::new(&mut session.user).add_activity(&child, new)? {
        Some(id) => msg_success!(Message::ActivityAdded(title, id.to_string())),
        None => msg_error!(Message::ActivityRejected(child, title)),
    }
    Ok(())
}

fn handle_update(session: &mut Session, child: &str, id: &str, title: Option<String>, fields: ActivityFields) -> Result<()> {
    let child = session.child_name(child)?;
    let Some(current) = find(session, &child, id)? else {
        msg_error!(Message::ActivityNotFound(id.to_string()));
        return Ok(());
    };

    let scheduled_at = match &fields.at {
        Some(text) => datetime_arg(text)?,
        None => current.scheduled_at,
    };
    let duration = match &fields.duration {
        Some(text) => duration_arg(text)?,
        None => current.duration,
    };
    let new = NewActivity::new(
        title.as_deref().unwrap_or(&current.title),
        fields.description.as_deref().unwrap_or(&current.description),
        scheduled_at,
        fields.category.unwrap_or(current.category),
        duration,
    );

    if ActivityManager::new(&mut session.user).update_activity(&child, current.id, new)? {
        msg_success!(Message::ActivityUpdated(current.id.to_string()));
    } else {
        msg_error!(Message::ActivityRejected(child, title.unwrap_or(current.title)));
    }
    Ok(())
}

fn handle_delete(session: &mut Session, options: &GlobalOptions, child: &str, id: &str) -> Result<()> {
    let child = session.child_name(child)?;
    let Some(current) = find(session, &child, id)? else {
        msg_error!(Message::ActivityNotFound(id.to_string()));
        return Ok(());
    };
    if !confirm(options, Message::ConfirmDeleteActivity(current.title.clone()))? {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    if ActivityManager::new(&mut session.user).delete_activity(&child, current.id) {
        msg_success!(Message::ActivityDeleted(current.id.to_string()));
    } else {
        msg_error!(Message::ActivityNotFound(current.id.to_string()));
    }
    Ok(())
}

fn handle_list(session: &mut Session, child: &str) -> Result<()> {
    let child = session.child_name(child)?;
    let activities = ActivityManager::new(&mut session.user).list_activities(&child);
    if activities.is_empty() {
        msg_info!(Message::NoActivitiesFound(child));
        return Ok(());
    }

    msg_print!(Message::ActivitiesHeader(child), true);
    View::activities(&activities)
}

fn handle_toggle(session: &mut Session, child: &str, id: &str) -> Result<()> {
    let child = session.child_name(child)?;
    let Some(current) = find(session, &child, id)? else {
        msg_error!(Message::ActivityNotFound(id.to_string()));
        return Ok(());
    };

    match ActivityManager::new(&mut session.user).toggle_completion(&child, current.id) {
        Some(true) => msg_success!(Message::ActivityCompleted(current.title)),
        Some(false) => msg_success!(Message::ActivityReopened(current.title)),
        None => msg_error!(Message::ActivityNotFound(current.id.to_string())),
    }
    Ok(())
}

fn handle_clear(session: &mut Session, options: &GlobalOptions, child: &str) -> Result<()> {
    let child = session.child_name(child)?;
    let count = session.child(&child).map(|c| c.activities.len()).unwrap_or(0);
    if count == 0 {
        msg_info!(Message::NoActivitiesFound(child));
        return Ok(());
    }
    if !confirm(options, Message::ConfirmClearActivities(child.clone(), count))? {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    if ActivityManager::new(&mut session.user).clear_activities(&child) {
        msg_success!(Message::ActivitiesCleared(child));
    }
    Ok(())
}

/// Looks up an activity of `child` by id text, cloning it out of the session.
fn find(session: &Session, child: &str, id: &str) -> Result<Option<Activity>> {
    let Some(owner) = session.child(child) else {
        return Ok(None);
    };
    let id = resolve_activity(owner, id)?;
    Ok(owner.activities.iter().find(|a| a.id == id).cloned())
}

fn datetime_arg(text: &str) -> Result<NaiveDateTime> {
    parse_datetime(text).ok_or_else(|| msg_error_anyhow!(Message::InvalidDateTime(text.to_string())))
}

fn duration_arg(text: &str) -> Result<Duration> {
    parse_duration(text).ok_or_else(|| msg_error_anyhow!(Message::InvalidDuration(text.to_string())))
}
