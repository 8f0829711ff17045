use crate::cli::print_json;
use crate::error::Result;
use crate::humanizer::humanize;
use crate::types::HumanizeOptions;

/// Execute the `humanize` command: print the cron expression for `text`.
///
/// Returns `Ok(false)` when the text was not understood.
pub fn execute(text: &str, options: &HumanizeOptions, json: bool) -> Result<bool> {
    let outcome = humanize(text, options);

    if json {
        print_json(&outcome)?;
        return Ok(outcome.success);
    }

    match &outcome.cron_expression {
        Some(cron) => println!("{cron}"),
        None => {
            println!("{}", outcome.error.as_deref().unwrap_or_default());
            let suggestions = outcome.suggestions.as_deref().unwrap_or_default();
            if !suggestions.is_empty() {
                println!("\nTry:");
                for suggestion in suggestions {
                    println!("  {suggestion}");
                }
            }
        }
    }

    Ok(outcome.success)
}
