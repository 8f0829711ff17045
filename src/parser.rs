//! Cron expression parser
//!
//! Decomposes a validated expression into per-field value sets:
//! ```text
//! ┌───────────── minute (0-59)
//! │ ┌───────────── hour (0-23)
//! │ │ ┌───────────── day of month (1-31)
//! │ │ │ ┌───────────── month (1-12)
//! │ │ │ │ ┌───────────── day of week (0-6, 0=Sunday, 7 folds to 0)
//! │ │ │ │ │
//! * * * * *
//! ```
//!
//! A leading seconds field is accepted when seconds are enabled. Special
//! keywords are reported as such and left unexpanded.

use std::collections::BTreeSet;

use crate::error::{CronError, Result};
use crate::field::FieldKind;
use crate::types::{CronField, CronFields, ParsedExpression};
use crate::validator::{check_expression, CheckedExpression, CheckedField, StepBase, Unit};

/// Parse a cron expression
///
/// The expression is validated first; invalid input yields the same error the
/// validator reports, never a partial result.
///
/// # Examples
///
/// ```
/// use a3s_cron_text::parse;
///
/// let parsed = parse("0 9-17 * * 1-5", false).unwrap();
/// let hour = parsed.hour().unwrap();
/// assert_eq!(hour.values, vec![9, 10, 11, 12, 13, 14, 15, 16, 17]);
/// assert!(hour.is_range);
///
/// let parsed = parse("@hourly", false).unwrap();
/// assert!(parsed.is_special());
/// ```
pub fn parse(expression: &str, allow_seconds: bool) -> Result<ParsedExpression> {
    let fields = match check_expression(expression, allow_seconds)? {
        CheckedExpression::Special(keyword) => {
            return Ok(ParsedExpression::Special { keyword });
        }
        CheckedExpression::Fields(fields) => fields,
    };

    let mut parsed = fields.iter().map(expand_field);
    let second = if allow_seconds { parsed.next() } else { None };
    let (Some(minute), Some(hour), Some(day_of_month), Some(month), Some(day_of_week)) = (
        parsed.next(),
        parsed.next(),
        parsed.next(),
        parsed.next(),
        parsed.next(),
    ) else {
        return Err(CronError::InvalidExpression(format!(
            "Incomplete expression '{}'",
            expression
        )));
    };

    Ok(ParsedExpression::Fields(CronFields {
        second,
        minute,
        hour,
        day_of_month,
        month,
        day_of_week,
    }))
}

/// Expand one checked field into its value set and flags
fn expand_field(field: &CheckedField<'_>) -> CronField {
    let kind = field.kind;
    let mut values = BTreeSet::new();
    let mut is_wildcard = false;
    let mut is_range = false;
    let mut is_step = false;

    for unit in &field.units {
        match *unit {
            Unit::Any => {
                is_wildcard = true;
                insert_range(&mut values, kind, kind.min(), kind.max(), 1);
            }
            Unit::NoSpecific => {}
            Unit::Value(value) => insert_value(&mut values, kind, value),
            Unit::Range(start, end) => {
                is_range = true;
                insert_range(&mut values, kind, start, end, 1);
            }
            Unit::Step { base, step } => {
                is_step = true;
                let (start, end) = match base {
                    StepBase::Any => {
                        is_wildcard = true;
                        (kind.min(), kind.max())
                    }
                    StepBase::Range(start, end) => {
                        is_range = true;
                        (start, end)
                    }
                    StepBase::From(start) => (start, kind.max()),
                };
                insert_range(&mut values, kind, start, end, step);
            }
        }
    }

    CronField {
        raw: field.raw.to_string(),
        values: values.into_iter().collect(),
        is_wildcard,
        is_range,
        is_step,
        is_list: field.units.len() > 1,
    }
}

fn insert_range(values: &mut BTreeSet<u32>, kind: FieldKind, start: u32, end: u32, step: u32) {
    let mut current = Some(start);
    while let Some(value) = current.filter(|v| *v <= end) {
        insert_value(values, kind, value);
        current = value.checked_add(step);
    }
}

fn insert_value(values: &mut BTreeSet<u32>, kind: FieldKind, value: u32) {
    if kind == FieldKind::DayOfWeek && value == 7 {
        values.insert(0);
    } else {
        values.insert(value);
    }
}
