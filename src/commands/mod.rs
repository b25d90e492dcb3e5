//! Command-line interface.
//!
//! Every subcommand follows the same cycle: open a [`Session`] (configuration
//! plus data file), run one manager or analyzer operation, report the result
//! through the `msg_*` macros and save the data file if anything changed.
//!
//! ```text
//! playplan child add Mia 2020-05-14
//! playplan activity add Mia "Park walk" --at "2024-03-15 10:00" --category physical --duration 45
//! playplan activity toggle Mia 3f2a
//! playplan progress Mia
//! playplan export Mia --format json
//! ```

pub mod activity;
pub mod child;
pub mod export;
pub mod init;
pub mod new;
pub mod progress;
pub mod session;
pub mod suggest;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Create an empty data file")]
    New,
    #[command(about = "Manage children", arg_required_else_help = true)]
    Child(child::ChildArgs),
    #[command(about = "Manage a child's activities", arg_required_else_help = true)]
    Activity(activity::ActivityArgs),
    #[command(about = "Show daily summary, comparison with recommendations and suggestions")]
    Progress(progress::ProgressArgs),
    #[command(about = "Suggest activities for today")]
    Suggest(suggest::SuggestArgs),
    #[command(about = "Export a child's activities or daily summary")]
    Export(export::ExportArgs),
}

/// Options accepted by every subcommand.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Data file to use instead of the configured one
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    /// Answer yes to confirmation prompts
    #[arg(short, long, global = true)]
    pub yes: bool,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(flatten)]
    options: GlobalOptions,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        let options = cli.options;
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::New => new::cmd(&options),
            Commands::Child(args) => child::cmd(args, &options),
            Commands::Activity(args) => activity::cmd(args, &options),
            Commands::Progress(args) => progress::cmd(args, &options),
            Commands::Suggest(args) => suggest::cmd(args, &options),
            Commands::Export(args) => export::cmd(args, &options),
        }
    }
}
