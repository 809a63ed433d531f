//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::sync::Arc;

use moodscribe_client::AnalysisClient;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, default_value = "3030")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    let client = Arc::new(AnalysisClient::default_client());

    println!();
    println!("  {} {}", "Moodscribe".cyan().bold(), "Web Server".bold());
    println!();
    println!(
        "  {}  http://{}:{}",
        "Journal".green(),
        args.host,
        args.port
    );
    println!(
        "  {}      http://{}:{}/api/analyze",
        "API".green(),
        args.host,
        args.port
    );
    println!(
        "  {}   http://{}:{}/health",
        "Health".green(),
        args.host,
        args.port
    );
    println!();
    println!("  Analysis backend: {}", client.base_url().dimmed());
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    moodscribe_web::run_server(client, &args.host, args.port).await?;

    Ok(())
}
