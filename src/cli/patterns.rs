use crate::cli::print_json;
use crate::error::Result;
use crate::humanizer::supported_patterns;
use crate::types::Locale;

/// Execute the `patterns` command: list the phrases `humanize` understands.
pub fn execute(locale: Locale, json: bool) -> Result<()> {
    let patterns = supported_patterns(locale);

    if json {
        return print_json(&patterns);
    }

    println!("Supported phrases ({locale}):");
    for description in &patterns {
        println!("  - {description}");
    }
    println!("\n{} pattern(s) total", patterns.len());
    Ok(())
}
