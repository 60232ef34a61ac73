use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(
    name = "gla",
    about = "Google Ads asset groups: diff, count, and check",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Configuration file (defaults to ./gla.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compute the update body turning a saved asset group into form values
    Diff(DiffArgs),
    /// Apply asset operations to a saved asset group
    Apply(ApplyArgs),
    /// Count text the way Google Ads does
    Count(CountArgs),
    /// Check form values against Google Ads asset limits
    Check(CheckArgs),
}

#[derive(Args)]
pub struct DiffArgs {
    #[arg(long)]
    pub group: PathBuf,
    #[arg(long)]
    pub values: PathBuf,
}

#[derive(Args)]
pub struct ApplyArgs {
    #[arg(long)]
    pub group: PathBuf,
    #[arg(long)]
    pub ops: PathBuf,
}

#[derive(Args)]
pub struct CountArgs {
    #[arg(long)]
    pub kind: Option<String>,
    #[arg(required = true)]
    pub texts: Vec<String>,
}

#[derive(Args)]
pub struct CheckArgs {
    #[arg(long)]
    pub values: PathBuf,
    #[arg(long)]
    pub kind: Option<String>,
    /// Skip minimum value counts
    #[arg(long)]
    pub draft: bool,
}
