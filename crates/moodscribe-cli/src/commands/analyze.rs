//! One-shot analysis command.

use anyhow::Result;
use clap::Args;

use moodscribe_client::AnalysisClient;
use moodscribe_core::journal;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Journal entry text to analyze
    pub entry: String,

    /// Print the result record as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: AnalyzeArgs) -> Result<()> {
    let client = AnalysisClient::default_client();
    let result = journal::process_submission(&client, Some(&args.entry)).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        crate::output::print_result(&result);
    }

    Ok(())
}
