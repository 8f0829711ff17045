//! Field constraints and special keywords
//!
//! Static bounds for every cron field:
//! ```text
//! ┌───────────── second (0-59, only with seconds enabled)
//! │ ┌───────────── minute (0-59)
//! │ │ ┌───────────── hour (0-23)
//! │ │ │ ┌───────────── day of month (1-31)
//! │ │ │ │ ┌───────────── month (1-12 or JAN-DEC)
//! │ │ │ │ │ ┌───────────── day of week (0-7 or SUN-SAT, 7=Sunday)
//! │ │ │ │ │ │
//! * * * * * *
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CronError;

/// Month abbreviations, indexed from January
pub const MONTH_NAMES: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Day abbreviations, indexed from Sunday
pub const DAY_NAMES: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

/// Special keywords and their canonical 5-field expansions
pub const SPECIAL_KEYWORDS: [(&str, &str); 6] = [
    ("@yearly", "0 0 1 1 *"),
    ("@monthly", "0 0 1 * *"),
    ("@weekly", "0 0 * * 0"),
    ("@daily", "0 0 * * *"),
    ("@midnight", "0 0 * * *"),
    ("@hourly", "0 * * * *"),
];

/// Field kinds in positional order of a 6-field expression
pub const FIELD_KINDS: [FieldKind; 6] = [
    FieldKind::Second,
    FieldKind::Minute,
    FieldKind::Hour,
    FieldKind::DayOfMonth,
    FieldKind::Month,
    FieldKind::DayOfWeek,
];

/// One positional slot of a cron expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    Second,
    Minute,
    Hour,
    DayOfMonth,
    Month,
    DayOfWeek,
}

impl FieldKind {
    /// Inclusive lower bound
    pub fn min(self) -> u32 {
        match self {
            Self::DayOfMonth | Self::Month => 1,
            _ => 0,
        }
    }

    /// Inclusive upper bound
    pub fn max(self) -> u32 {
        match self {
            Self::Second | Self::Minute => 59,
            Self::Hour => 23,
            Self::DayOfMonth => 31,
            Self::Month => 12,
            Self::DayOfWeek => 7,
        }
    }

    /// Named aliases accepted for this field, if any
    pub fn named_values(self) -> Option<&'static [&'static str]> {
        match self {
            Self::Month => Some(&MONTH_NAMES),
            Self::DayOfWeek => Some(&DAY_NAMES),
            _ => None,
        }
    }

    /// Whether `?` ("no specific value") is allowed
    pub fn allows_question_mark(self) -> bool {
        matches!(self, Self::DayOfMonth | Self::DayOfWeek)
    }

    /// Wire name of the field
    pub fn name(self) -> &'static str {
        match self {
            Self::Second => "second",
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::DayOfMonth => "dayOfMonth",
            Self::Month => "month",
            Self::DayOfWeek => "dayOfWeek",
        }
    }

    /// Resolve a bare value or a case-insensitive name to its integer.
    ///
    /// Bounds are not checked here.
    pub fn resolve(self, token: &str) -> Option<u32> {
        if is_plain_integer(token) {
            return token.parse().ok();
        }
        let names = self.named_values()?;
        let offset = self.min();
        names
            .iter()
            .position(|name| name.eq_ignore_ascii_case(token))
            .map(|idx| idx as u32 + offset)
    }

    /// Field kinds for an expression with or without a seconds field
    pub fn layout(with_seconds: bool) -> &'static [FieldKind] {
        if with_seconds {
            &FIELD_KINDS
        } else {
            &FIELD_KINDS[1..]
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// `@`-prefixed shorthand for a fixed 5-field expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialKeyword {
    #[serde(rename = "@yearly")]
    Yearly,
    #[serde(rename = "@monthly")]
    Monthly,
    #[serde(rename = "@weekly")]
    Weekly,
    #[serde(rename = "@daily")]
    Daily,
    #[serde(rename = "@midnight")]
    Midnight,
    #[serde(rename = "@hourly")]
    Hourly,
}

impl SpecialKeyword {
    pub const ALL: [SpecialKeyword; 6] = [
        Self::Yearly,
        Self::Monthly,
        Self::Weekly,
        Self::Daily,
        Self::Midnight,
        Self::Hourly,
    ];

    pub fn as_str(self) -> &'static str {
        SPECIAL_KEYWORDS[self as usize].0
    }

    /// Canonical 5-field equivalent
    pub fn expansion(self) -> &'static str {
        SPECIAL_KEYWORDS[self as usize].1
    }
}

impl std::fmt::Display for SpecialKeyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SpecialKeyword {
    type Err = CronError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|keyword| keyword.as_str() == s)
            .ok_or_else(|| CronError::UnknownKeyword(s.to_string()))
    }
}

/// Non-empty run of ASCII digits, no sign
pub(crate) fn is_plain_integer(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// Expand a special keyword into its 5-field expression.
///
/// Matching is exact; `@Daily` is not a keyword.
pub fn expand_special(keyword: &str) -> Option<&'static str> {
    keyword
        .parse::<SpecialKeyword>()
        .ok()
        .map(SpecialKeyword::expansion)
}
