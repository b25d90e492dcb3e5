use super::session::Session;
use super::GlobalOptions;
use crate::{
    libs::{
        activity_manager::ActivityManager,
        export::{ExportData, ExportFormat, Exporter},
        messages::Message,
        progress::ProgressAnalyzer,
    },
    msg_error_anyhow, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    child: String,

    #[arg(value_enum, default_value = "activities")]
    data: ExportData,

    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs, options: &GlobalOptions) -> Result<()> {
    let mut session = Session::open(options)?;
    let child = session.child_name(&args.child)?;
    let activities = ActivityManager::new(&mut session.user).list_activities(&child);

    msg_info!(Message::ExportingData(child, format!("{:?}", args.format)));

    let exporter = Exporter::new(args.format, args.output);
    let result = match args.data {
        ExportData::Activities => exporter.export_activities(&activities),
        ExportData::Summary => {
            let analyzer = ProgressAnalyzer::new(session.config.recommendations());
            exporter.export_summary(&analyzer.analyze(&activities))
        }
    };
    result.map_err(|e| msg_error_anyhow!(Message::ExportFailed(format!("{:#}", e))))?;

    msg_success!(Message::ExportCompleted(exporter.output_path().display().to_string()));
    Ok(())
}
