//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod analyze;
pub mod serve;

/// Moodscribe - AI Daily Journal
#[derive(Parser)]
#[command(name = "moodscribe")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the journal web server
    Serve(serve::ServeArgs),

    /// Analyze a single journal entry from the terminal
    Analyze(analyze::AnalyzeArgs),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Serve(args) => serve::execute(args).await,
            Commands::Analyze(args) => analyze::execute(args).await,
        }
    }
}
