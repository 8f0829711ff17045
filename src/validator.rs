//! Cron expression validator
//!
//! Checks every token of an expression against the grammar of its field:
//! - `*` - any value
//! - `?` - no specific value (day of month / day of week only)
//! - `,` - list separator (e.g., `1,3,5`)
//! - `-` - range (e.g., `1-5`, `MON-FRI`)
//! - `/` - step (e.g., `*/5` or `0-30/5`)

use crate::error::{CronError, Result};
use crate::field::{is_plain_integer, FieldKind, SpecialKeyword};
use crate::types::ValidationOutcome;

/// Base of a stepped unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StepBase {
    /// `*/n`
    Any,
    /// `a-b/n`
    Range(u32, u32),
    /// `a/n`, from `a` to the field maximum
    From(u32),
}

/// One comma-separated element of a field token, bounds-checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Unit {
    Any,
    NoSpecific,
    Value(u32),
    Range(u32, u32),
    Step { base: StepBase, step: u32 },
}

/// A field token that passed validation
#[derive(Debug, Clone)]
pub(crate) struct CheckedField<'a> {
    pub kind: FieldKind,
    pub raw: &'a str,
    pub units: Vec<Unit>,
}

/// An expression that passed validation
#[derive(Debug, Clone)]
pub(crate) enum CheckedExpression<'a> {
    Special(SpecialKeyword),
    Fields(Vec<CheckedField<'a>>),
}

/// Validate a cron expression
///
/// # Examples
///
/// ```
/// use a3s_cron_text::{validate, FieldKind};
///
/// assert!(validate("0 9 * * 1-5", false).is_valid);
/// assert!(validate("@daily", false).is_valid);
///
/// let outcome = validate("0 24 * * *", false);
/// assert!(!outcome.is_valid);
/// assert_eq!(outcome.field, Some(FieldKind::Hour));
/// ```
pub fn validate(expression: &str, allow_seconds: bool) -> ValidationOutcome {
    match check_expression(expression, allow_seconds) {
        Ok(_) => ValidationOutcome::valid(),
        Err(e) => {
            tracing::debug!("Rejected cron expression '{}': {}", expression, e);
            ValidationOutcome::invalid(&e)
        }
    }
}

/// Validate a single field token in isolation
pub fn validate_field(token: &str, kind: FieldKind) -> Result<()> {
    parse_units(token, kind).map(|_| ())
}

/// Tokenize and check a full expression
pub(crate) fn check_expression(
    expression: &str,
    allow_seconds: bool,
) -> Result<CheckedExpression<'_>> {
    let tokens: Vec<&str> = expression.split_whitespace().collect();

    if tokens.len() == 1 && tokens[0].starts_with('@') {
        return tokens[0].parse().map(CheckedExpression::Special);
    }

    let layout = FieldKind::layout(allow_seconds);
    if tokens.len() != layout.len() {
        return Err(CronError::FieldCount {
            expected: layout.len(),
            actual: tokens.len(),
        });
    }

    let fields = layout
        .iter()
        .zip(tokens)
        .map(|(&kind, raw)| {
            Ok(CheckedField {
                kind,
                raw,
                units: parse_units(raw, kind)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CheckedExpression::Fields(fields))
}

/// Split a field token into bounds-checked units
pub(crate) fn parse_units(token: &str, kind: FieldKind) -> Result<Vec<Unit>> {
    if token.is_empty() {
        return Err(CronError::for_field(kind, "Empty field"));
    }

    token
        .split(',')
        .map(|part| {
            if part.is_empty() {
                return Err(CronError::for_field(
                    kind,
                    format!("Empty list element in '{}'", token),
                ));
            }
            parse_unit(part, kind)
        })
        .collect()
}

fn parse_unit(part: &str, kind: FieldKind) -> Result<Unit> {
    if let Some((base, step_str)) = part.split_once('/') {
        let step: u32 = is_plain_integer(step_str)
            .then(|| step_str.parse().ok())
            .flatten()
            .ok_or_else(|| {
                CronError::for_field(kind, format!("Invalid step value '{}'", step_str))
            })?;
        if step == 0 {
            return Err(CronError::for_field(kind, "Step value cannot be 0"));
        }
        let base = match base {
            "*" => StepBase::Any,
            "?" => {
                return Err(CronError::for_field(kind, "'?' cannot be used with a step"));
            }
            _ => match parse_bounds(base, kind)? {
                (start, Some(end)) => StepBase::Range(start, end),
                (start, None) => StepBase::From(start),
            },
        };
        return Ok(Unit::Step { base, step });
    }

    match part {
        "*" => Ok(Unit::Any),
        "?" if kind.allows_question_mark() => Ok(Unit::NoSpecific),
        "?" => Err(CronError::for_field(
            kind,
            "'?' is only allowed in day-of-month and day-of-week",
        )),
        _ => match parse_bounds(part, kind)? {
            (start, Some(end)) => Ok(Unit::Range(start, end)),
            (value, None) => Ok(Unit::Value(value)),
        },
    }
}

/// `a-b` yields `(a, Some(b))`, a bare value `(a, None)`
fn parse_bounds(part: &str, kind: FieldKind) -> Result<(u32, Option<u32>)> {
    if let Some((start_str, end_str)) = part.split_once('-') {
        let start = resolve_value(start_str, kind)?;
        let end = resolve_value(end_str, kind)?;
        if start > end {
            return Err(CronError::for_field(
                kind,
                format!("Invalid range {}-{}", start_str, end_str),
            ));
        }
        Ok((start, Some(end)))
    } else {
        Ok((resolve_value(part, kind)?, None))
    }
}

fn resolve_value(token: &str, kind: FieldKind) -> Result<u32> {
    let value = kind
        .resolve(token)
        .ok_or_else(|| CronError::for_field(kind, format!("Invalid value '{}'", token)))?;

    if value < kind.min() || value > kind.max() {
        return Err(CronError::for_field(
            kind,
            format!(
                "Value {} out of range ({}-{})",
                value,
                kind.min(),
                kind.max()
            ),
        ));
    }

    Ok(value)
}
