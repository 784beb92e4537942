//! Patchwork triage CLI
//!
//! Resolves, for a Patchwork patch or series, the upstream tree the change
//! should be merged through and the maintainers responsible for it, using
//! the MAINTAINERS file named by `MAINTAINERS_FILE_PATH`.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;
use pw_client::{ClientConfig, PatchworkClient};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose; results go to stdout, diagnostics to stderr
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let config = ClientConfig::from_parts(cli.pw_server, cli.pw_project, cli.pw_token)?;
    let client = PatchworkClient::new(config)?;

    match cli.command {
        Commands::ListTrees { resource } => commands::run_list_trees(&client, &resource),
        Commands::ListMaintainers { resource } => {
            commands::run_list_maintainers(&client, &resource)
        }
        Commands::SetDelegate {
            resource,
            skip_delegated,
        } => commands::run_set_delegate(&client, &resource, skip_delegated),
        Commands::ListRechecks { since, contexts } => {
            commands::run_list_rechecks(&client, &since, contexts)
        }
    }
}
