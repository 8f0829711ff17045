//! # a3s-cron-text
//!
//! Cron expression validation, parsing, and natural-language conversion for
//! the A3S ecosystem, in English and Spanish.
//!
//! ## Overview
//!
//! `a3s-cron-text` converts between three forms of a schedule:
//! - compact cron syntax (`0 9 * * 1-5`, `@daily`)
//! - a structured field model ([`ParsedExpression`])
//! - natural language, both ways ([`format`] and [`humanize`])
//!
//! ## Quick Start
//!
//! ```rust
//! use a3s_cron_text::{format, humanize, parse, validate, FormatOptions, HumanizeOptions, Locale};
//!
//! # fn example() -> a3s_cron_text::Result<()> {
//! assert!(validate("*/15 * * * *", false).is_valid);
//!
//! let parsed = parse("0 9-17 * * 1-5", false)?;
//! assert_eq!(parsed.day_of_week().unwrap().values, vec![1, 2, 3, 4, 5]);
//!
//! let text = format("0 9 * * 1-5", &FormatOptions::default())?;
//! assert_eq!(text, "At 09:00, Monday through Friday");
//!
//! let outcome = humanize("cada 5 minutos", &HumanizeOptions::new(Locale::Es));
//! assert_eq!(outcome.cron_expression.as_deref(), Some("*/5 * * * *"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Architecture
//!
//! - **field**: bounds, named values, and special keywords per field
//! - **validator**: grammar and bounds checks with field attribution
//! - **parser**: expands each field into its sorted value set
//! - **formatter**: cron → text through per-locale string tables
//! - **humanizer**: text → cron through ordered per-locale pattern tables

pub mod cli;
pub mod config;
pub mod dirs;
pub mod error;
pub mod field;
pub mod formatter;
pub mod humanizer;
pub mod i18n;
pub mod parser;
pub mod time_text;
pub mod types;
pub mod validator;

// Re-export core types
pub use config::CronTextConfig;
pub use error::{CronError, Result};
pub use field::{
    expand_special, FieldKind, SpecialKeyword, DAY_NAMES, FIELD_KINDS, MONTH_NAMES,
    SPECIAL_KEYWORDS,
};
pub use types::{
    CronField, CronFields, FormatOptions, HumanizeFailure, HumanizeOptions, HumanizeOutcome,
    Locale, ParsedExpression, ValidationOutcome,
};

// Re-export operations
pub use formatter::format;
pub use humanizer::{humanize, supported_patterns, HumanizerPattern};
pub use parser::parse;
pub use time_text::{parse_day_of_week, parse_time_string, ClockTime};
pub use validator::{validate, validate_field};
