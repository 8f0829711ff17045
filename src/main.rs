use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use a3s_cron_text::cli::{join_args, Cli, Commands};
use a3s_cron_text::CronTextConfig;

fn main() -> anyhow::Result<ExitCode> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => CronTextConfig::load_from(path)?,
        None => CronTextConfig::load()?,
    };

    let success = match cli.command {
        Commands::Validate {
            expression,
            seconds,
        } => a3s_cron_text::cli::validate::execute(
            &join_args(&expression),
            seconds || config.allow_seconds,
            cli.json,
        )?,
        Commands::Parse {
            expression,
            seconds,
        } => {
            a3s_cron_text::cli::parse::execute(
                &join_args(&expression),
                seconds || config.allow_seconds,
            )?;
            true
        }
        Commands::Format {
            expression,
            locale,
            twelve_hour,
            seconds,
            verbose,
        } => {
            let mut options = config.format_options();
            if let Some(locale) = locale {
                options.locale = locale;
            }
            options.use_24_hour_format &= !twelve_hour;
            options.include_seconds |= seconds;
            options.verbose |= verbose;
            a3s_cron_text::cli::format::execute(&join_args(&expression), &options, cli.json)?;
            true
        }
        Commands::Humanize { text, locale } => {
            let mut options = config.humanize_options();
            if let Some(locale) = locale {
                options.locale = locale;
            }
            a3s_cron_text::cli::humanize::execute(&join_args(&text), &options, cli.json)?
        }
        Commands::Patterns { locale } => {
            a3s_cron_text::cli::patterns::execute(locale.unwrap_or(config.locale), cli.json)?;
            true
        }
    };

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
