pub mod format;
pub mod humanize;
pub mod parse;
pub mod patterns;
pub mod validate;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::error::Result;
use crate::types::Locale;

/// A3S Cron Text - Cron validation and natural-language conversion
#[derive(Debug, Parser)]
#[command(name = "a3s-cron-text", version, about)]
pub struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file to use instead of ~/.a3s/cron-text/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check a cron expression
    Validate {
        /// Cron expression (e.g. "0 9 * * 1-5" or "@daily")
        #[arg(required = true, num_args = 1..)]
        expression: Vec<String>,

        /// Accept a leading seconds field
        #[arg(long)]
        seconds: bool,
    },

    /// Break a cron expression into per-field values
    Parse {
        /// Cron expression to parse
        #[arg(required = true, num_args = 1..)]
        expression: Vec<String>,

        /// Accept a leading seconds field
        #[arg(long)]
        seconds: bool,
    },

    /// Describe a cron expression in words
    Format {
        /// Cron expression to describe
        #[arg(required = true, num_args = 1..)]
        expression: Vec<String>,

        /// Output language (en, es)
        #[arg(long)]
        locale: Option<Locale>,

        /// Use 12-hour clock times
        #[arg(long)]
        twelve_hour: bool,

        /// Describe the seconds field
        #[arg(long)]
        seconds: bool,

        /// Add the explicit "every day" clause
        #[arg(long)]
        verbose: bool,
    },

    /// Convert a schedule description to a cron expression
    Humanize {
        /// Text such as "every day at 2am" or "cada 5 minutos"
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// Input language (en, es)
        #[arg(long)]
        locale: Option<Locale>,
    },

    /// List the phrases `humanize` understands
    Patterns {
        /// Language to list (en, es)
        #[arg(long)]
        locale: Option<Locale>,
    },
}

/// Words passed as separate arguments, rejoined with single spaces.
pub fn join_args(words: &[String]) -> String {
    words.join(" ")
}

/// Print a value as pretty JSON.
pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
