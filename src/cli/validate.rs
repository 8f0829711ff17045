use crate::cli::print_json;
use crate::error::Result;
use crate::validator::validate;

/// Execute the `validate` command: report whether the expression is valid.
///
/// Returns `Ok(false)` for an invalid expression so the binary can exit non-zero.
pub fn execute(expression: &str, allow_seconds: bool, json: bool) -> Result<bool> {
    let outcome = validate(expression, allow_seconds);

    if json {
        print_json(&outcome)?;
    } else if outcome.is_valid {
        println!("valid");
    } else {
        println!("invalid: {}", outcome.error.as_deref().unwrap_or_default());
        if let Some(field) = outcome.field {
            println!("field: {field}");
        }
    }

    Ok(outcome.is_valid)
}
