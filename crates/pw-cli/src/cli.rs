//! CLI argument parsing using clap derive

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Patchwork triage - resolve merge trees and maintainers for patches
#[derive(Parser, Debug)]
#[command(name = "pw-triage")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Patchwork server API base URL
    #[arg(long, env = "PW_SERVER", global = true)]
    pub pw_server: Option<String>,

    /// Patchwork project
    #[arg(long, env = "PW_PROJECT", global = true)]
    pub pw_project: Option<String>,

    /// Patchwork authentication token
    #[arg(long, env = "PW_TOKEN", global = true)]
    pub pw_token: Option<String>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Whether an id names a single patch or a whole series.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Patch,
    Series,
}

/// The patch or series a command operates on.
#[derive(Args, Debug, Clone)]
pub struct ResourceArgs {
    /// Resource type
    #[arg(long = "type", value_enum)]
    pub kind: ResourceKind,

    /// Patch or series id
    pub id: u64,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the tree a patch or series should be merged through
    ListTrees {
        #[command(flatten)]
        resource: ResourceArgs,
    },

    /// Print the maintainers of the resolved tree, one per line
    ListMaintainers {
        #[command(flatten)]
        resource: ResourceArgs,
    },

    /// Delegate every patch in the set to the first reachable maintainer
    SetDelegate {
        #[command(flatten)]
        resource: ResourceArgs,

        /// Skip patches that already have a delegate
        #[arg(long)]
        skip_delegated: bool,
    },

    /// Print recheck requests found in recent patch comments, as JSON
    ListRechecks {
        /// Only consider comments newer than this timestamp
        #[arg(long)]
        since: String,

        /// Test context to collect; may be given multiple times
        #[arg(long = "context", required = true)]
        contexts: Vec<String>,
    },
}
