//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::broker::BrokerCommand;
use crate::commands::tube::TubeCommand;

/// CLI tool for the hansa broker and tube web-services.
#[derive(Parser, Debug)]
#[command(name = "hansa")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Broker (marketplace) operations
    Broker(BrokerCommand),

    /// Tube (media catalogue) operations
    Tube(TubeCommand),
}
