use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "evalscore",
    version,
    about = "Score and validate rubric, checklist and auto-evaluation methodologies"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors; reports are still printed to stdout
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Read configuration from this file instead of evalscore.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a methodology document or every document under a directory
    Score(ScoreCommand),
    /// Check methodology structure before it is attached to a task
    Validate(ValidateCommand),
    /// Select a level in a rubric or auto-evaluation criterion
    Select(SelectCommand),
    /// Toggle a checklist item
    Toggle(ToggleCommand),
    /// Check that an evaluated document only differs from the published one in its selections
    Verify(VerifyCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Args)]
pub struct ScoreCommand {
    pub path: PathBuf,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct ValidateCommand {
    pub path: PathBuf,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct SelectCommand {
    pub file: PathBuf,
    /// Dimension index (auto-evaluations only)
    #[arg(long)]
    pub dimension: Option<usize>,
    #[arg(long)]
    pub criterion: usize,
    #[arg(long)]
    pub level: usize,
    /// Rewrite the file instead of printing the updated document
    #[arg(long)]
    pub write: bool,
}

#[derive(Args)]
pub struct ToggleCommand {
    pub file: PathBuf,
    #[arg(long)]
    pub item: usize,
    /// Rewrite the file instead of printing the updated document
    #[arg(long)]
    pub write: bool,
}

#[derive(Args)]
pub struct VerifyCommand {
    pub published: PathBuf,
    pub evaluated: PathBuf,
}
