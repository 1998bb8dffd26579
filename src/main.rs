mod bootstrap;
mod commands;

use crate::bootstrap::{config, logging};
use anyhow::Result;
use clap::{Parser, Subcommand};
use updrop_transport::LocalBackend;

#[derive(Debug, Parser)]
#[command(name = "updrop")]
#[command(version, about = "Publish application update builds to a hosting backend")]
struct Cli {
    /// Configuration file
    #[arg(short, long, global = true, default_value = "updrop.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Upload artifact files for a build and update the manifest
    Publish(commands::publish::PublishArgs),

    /// List published builds
    List,

    /// Remove published builds and their manifest entries
    Remove(commands::remove::RemoveArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::initialize(cli.verbose);

    let config = config::load(&cli.config).await?;
    let backend = LocalBackend::new(
        config.publish.out_path.as_str(),
        config.publish.remote_url.clone(),
    );

    match cli.command {
        Commands::Publish(args) => commands::publish::run(&backend, args).await,
        Commands::List => commands::list::run(&backend).await,
        Commands::Remove(args) => commands::remove::run(&backend, args).await,
    }
}
