//! User input utilities for interactive CLI prompts
//!
//! Provides the interactive filter prompt shown after validation, plus a
//! generic confirmation prompt.

use crate::app::services::validator::{FilterOptions, ValidationSummary};
use crate::{Error, Result};
use rust_decimal::Decimal;
use std::io::{self, Write};

/// Show observed regions and amount range, then prompt for filter criteria
///
/// Each prompt accepts empty input to skip that filter. Invalid amounts are
/// re-prompted rather than rejected.
pub fn prompt_filter_options(summary: &ValidationSummary) -> Result<FilterOptions> {
    display_filter_context(summary);

    let region = prompt_line("Filter by region (blank for all): ")?;
    let region = if region.is_empty() { None } else { Some(region) };

    let min_amount = prompt_amount("Minimum amount (blank for none): ")?;
    let max_amount = prompt_amount("Maximum amount (blank for none): ")?;

    Ok(FilterOptions {
        region,
        min_amount,
        max_amount,
    })
}

/// Print the regions and amount range observed in the valid data
fn display_filter_context(summary: &ValidationSummary) {
    println!("\nAvailable regions:");
    for region in &summary.regions {
        println!("  - {}", region);
    }

    match summary.amount_range {
        Some((min, max)) => println!("Transaction amounts range from {} to {}\n", min, max),
        None => println!("No valid transactions to filter\n"),
    }
}

/// Get user confirmation for an action
pub fn prompt_confirmation(message: &str, default_yes: bool) -> Result<bool> {
    let default_text = if default_yes { "Y/n" } else { "y/N" };
    let input = prompt_line(&format!("{} [{}]: ", message, default_text))?;

    if input.is_empty() {
        return Ok(default_yes);
    }

    match input.to_lowercase().as_str() {
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        _ => {
            println!("Please enter 'y' for yes or 'n' for no.");
            prompt_confirmation(message, default_yes)
        }
    }
}

/// Prompt until the user enters a valid decimal amount or leaves it blank
fn prompt_amount(message: &str) -> Result<Option<Decimal>> {
    loop {
        let input = prompt_line(message)?;
        if input.is_empty() {
            return Ok(None);
        }

        match input.parse::<Decimal>() {
            Ok(amount) => return Ok(Some(amount)),
            Err(_) => println!("Please enter a number, or leave blank to skip."),
        }
    }
}

/// Print a prompt and read one trimmed line from stdin
fn prompt_line(message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout()
        .flush()
        .map_err(|e| Error::io("Failed to flush stdout".to_string(), e))?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| Error::io("Failed to read user input".to_string(), e))?;

    Ok(input.trim().to_string())
}
