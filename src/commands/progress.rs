use super::session::Session;
use super::GlobalOptions;
use crate::{
    libs::{
        activity_manager::ActivityManager, messages::Message, progress::ProgressAnalyzer,
        suggestions::SuggestionGenerator, view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ProgressArgs {
    child: String,
}

/// Dashboard: daily summary, comparison, completed titles and today's suggestions.
pub fn cmd(args: ProgressArgs, options: &GlobalOptions) -> Result<()> {
    let mut session = Session::open(options)?;
    let child = session.child_name(&args.child)?;
    let activities = ActivityManager::new(&mut session.user).list_activities(&child);
    let recommendations = session.config.recommendations();
    let analyzer = ProgressAnalyzer::new(recommendations.clone());

    if activities.is_empty() {
        msg_info!(Message::NoActivitiesFound(child.clone()));
    } else {
        msg_print!(Message::DailySummaryHeader(child.clone()), true);
        View::daily_summary(&analyzer.analyze(&activities))?;
    }

    msg_print!(Message::ComparisonHeader, true);
    View::comparison(&analyzer.comparison(&activities))?;

    msg_print!(Message::CompletedTitlesHeader, true);
    let titles = analyzer.completed_titles(&activities);
    if titles.is_empty() {
        msg_print!(Message::NoCompletedActivities);
    }
    for title in titles {
        msg_print!(format!("  • {}", title));
    }

    msg_print!(Message::SuggestionsHeader(child), true);
    for suggestion in SuggestionGenerator::new(recommendations).suggestions(&activities) {
        msg_print!(format!("  • {}", suggestion));
    }
    Ok(())
}
