use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "itsm-console")]
#[command(about = "ITSM console preferences and access checks")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
