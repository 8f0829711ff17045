use crate::cli::print_json;
use crate::error::Result;
use crate::formatter::format;
use crate::types::FormatOptions;

/// Execute the `format` command: describe the expression in words.
pub fn execute(expression: &str, options: &FormatOptions, json: bool) -> Result<()> {
    let text = format(expression, options)?;

    if json {
        print_json(&serde_json::json!({
            "expression": expression,
            "locale": options.locale,
            "text": text,
        }))?;
    } else {
        println!("{text}");
    }

    Ok(())
}
