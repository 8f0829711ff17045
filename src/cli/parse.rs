use crate::cli::print_json;
use crate::error::Result;
use crate::parser::parse;

/// Execute the `parse` command: print the per-field breakdown as JSON.
pub fn execute(expression: &str, allow_seconds: bool) -> Result<()> {
    let parsed = parse(expression, allow_seconds)?;
    print_json(&parsed)
}
