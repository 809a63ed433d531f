//! Terminal output formatting.

use colored::Colorize;
use moodscribe_core::journal::JournalResult;

/// Print a single analysis result.
pub fn print_result(result: &JournalResult) {
    if !result.original.is_empty() {
        println!("{}", "Entry".bold());
        println!("  {}", result.original);
        println!();
    }

    match &result.summary {
        Some(summary) => {
            println!("{}", "Summary".cyan().bold());
            println!("  {}", summary);
        }
        None => println!("{}", "No summary returned.".dimmed()),
    }

    if let Some(recommendation) = &result.recommendation {
        println!();
        println!("{}", "Recommendation".green().bold());
        println!("  {}", recommendation);
    }
}
