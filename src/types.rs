//! Core types for cron-text conversions

use serde::{Deserialize, Serialize};

use crate::error::{CronError, Result};
use crate::field::{FieldKind, SpecialKeyword};

/// Per-field parse result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CronField {
    /// Original token text
    pub raw: String,
    /// Selected values, ascending and unique (empty only for `?`)
    pub values: Vec<u32>,
    pub is_wildcard: bool,
    pub is_range: bool,
    pub is_step: bool,
    pub is_list: bool,
}

impl CronField {
    /// Step of a field made of exactly one stepped unit (`*/5`, `0-30/10`)
    pub fn step(&self) -> Option<u32> {
        if self.is_list {
            return None;
        }
        let (_, step) = self.raw.split_once('/')?;
        step.parse().ok()
    }

    /// Whether the token is a bare `*`
    pub fn is_pure_wildcard(&self) -> bool {
        self.raw == "*"
    }

    /// `?` token: no specific value
    pub fn is_unspecified(&self) -> bool {
        self.raw == "?"
    }

    /// Exactly one value selected
    pub fn is_single(&self) -> bool {
        self.values.len() == 1
    }

    pub fn first(&self) -> Option<u32> {
        self.values.first().copied()
    }

    pub fn last(&self) -> Option<u32> {
        self.values.last().copied()
    }
}

/// Fields of a regular (non-keyword) expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CronFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second: Option<CronField>,
    pub minute: CronField,
    pub hour: CronField,
    pub day_of_month: CronField,
    pub month: CronField,
    pub day_of_week: CronField,
}

impl CronFields {
    pub fn get(&self, kind: FieldKind) -> Option<&CronField> {
        match kind {
            FieldKind::Second => self.second.as_ref(),
            FieldKind::Minute => Some(&self.minute),
            FieldKind::Hour => Some(&self.hour),
            FieldKind::DayOfMonth => Some(&self.day_of_month),
            FieldKind::Month => Some(&self.month),
            FieldKind::DayOfWeek => Some(&self.day_of_week),
        }
    }
}

/// A parsed cron expression: either a special keyword or a full field set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ParsedExpression {
    /// `@daily` and friends; not expanded
    Special { keyword: SpecialKeyword },
    /// Every required field slot, validated
    Fields(CronFields),
}

impl ParsedExpression {
    pub fn is_special(&self) -> bool {
        matches!(self, Self::Special { .. })
    }

    pub fn special_keyword(&self) -> Option<SpecialKeyword> {
        match self {
            Self::Special { keyword } => Some(*keyword),
            Self::Fields(_) => None,
        }
    }

    pub fn fields(&self) -> Option<&CronFields> {
        match self {
            Self::Fields(fields) => Some(fields),
            Self::Special { .. } => None,
        }
    }

    pub fn field(&self, kind: FieldKind) -> Option<&CronField> {
        self.fields()?.get(kind)
    }

    pub fn second(&self) -> Option<&CronField> {
        self.field(FieldKind::Second)
    }

    pub fn minute(&self) -> Option<&CronField> {
        self.field(FieldKind::Minute)
    }

    pub fn hour(&self) -> Option<&CronField> {
        self.field(FieldKind::Hour)
    }

    pub fn day_of_month(&self) -> Option<&CronField> {
        self.field(FieldKind::DayOfMonth)
    }

    pub fn month(&self) -> Option<&CronField> {
        self.field(FieldKind::Month)
    }

    pub fn day_of_week(&self) -> Option<&CronField> {
        self.field(FieldKind::DayOfWeek)
    }
}

/// Result of validating an expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationOutcome {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<FieldKind>,
}

impl ValidationOutcome {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error: None,
            field: None,
        }
    }

    pub fn invalid(err: &CronError) -> Self {
        Self {
            is_valid: false,
            error: Some(err.to_string()),
            field: err.field(),
        }
    }

    /// Convert into a `Result`, keeping the message and field attribution
    pub fn into_result(self) -> Result<()> {
        if self.is_valid {
            return Ok(());
        }
        let message = self.error.unwrap_or_default();
        Err(match self.field {
            Some(field) => CronError::Field { field, message },
            None => CronError::InvalidExpression(message),
        })
    }
}

/// Why humanizing failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum HumanizeFailure {
    /// No pattern recognised the text
    NoMatch,
    /// A pattern produced a cron string the validator rejects
    InvalidGenerated,
}

/// Result of converting natural-language text to cron
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HumanizeOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cron_expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<HumanizeFailure>,
}

impl HumanizeOutcome {
    pub fn matched(cron: impl Into<String>) -> Self {
        Self {
            success: true,
            cron_expression: Some(cron.into()),
            error: None,
            suggestions: None,
            failure: None,
        }
    }

    pub fn failed(
        failure: HumanizeFailure,
        error: impl Into<String>,
        suggestions: Vec<String>,
    ) -> Self {
        Self {
            success: false,
            cron_expression: None,
            error: Some(error.into()),
            suggestions: Some(suggestions),
            failure: Some(failure),
        }
    }
}

/// Supported languages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Locale {
    type Err = CronError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "es" => Ok(Self::Es),
            other => Err(CronError::Config(format!("Unsupported locale '{}'", other))),
        }
    }
}

/// Options for rendering an expression as text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOptions {
    #[serde(default)]
    pub locale: Locale,
    #[serde(default = "default_true")]
    pub use_24_hour_format: bool,
    #[serde(default)]
    pub include_seconds: bool,
    #[serde(default)]
    pub verbose: bool,
}

fn default_true() -> bool {
    true
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            locale: Locale::En,
            use_24_hour_format: true,
            include_seconds: false,
            verbose: false,
        }
    }
}

impl FormatOptions {
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_24_hour_format(mut self, enabled: bool) -> Self {
        self.use_24_hour_format = enabled;
        self
    }

    pub fn with_seconds(mut self, enabled: bool) -> Self {
        self.include_seconds = enabled;
        self
    }

    pub fn with_verbose(mut self, enabled: bool) -> Self {
        self.verbose = enabled;
        self
    }
}

/// Options for converting text to cron
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HumanizeOptions {
    #[serde(default)]
    pub locale: Locale,
}

impl HumanizeOptions {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }
}
