//! Natural language to cron conversion
//!
//! Converts human-readable schedule descriptions to cron expressions by
//! walking an ordered, per-locale table of regex patterns. The first pattern
//! that matches the whole normalized text and yields a cron string wins.
//!
//! ## Supported Formats
//!
//! ### English
//! - "every minute" / "every 5 minutes"
//! - "every hour" / "every 2 hours"
//! - "every day" / "every day at 2am" / "at 14:30"
//! - "every monday" / "every friday at 5pm"
//! - "weekdays at 9am" / "on weekends at 10am"
//! - "every month" / "on the 15th of every month at 3pm"
//! - "every week" / "every year"
//!
//! ### Spanish (Español)
//! - "cada minuto" / "cada 5 minutos"
//! - "cada hora" / "cada 2 horas"
//! - "todos los días" / "todos los días a las 14:30" / "a las 2am"
//! - "todos los lunes" / "cada viernes a las 5pm"
//! - "días laborales a las 9am" / "fines de semana a las 10am"
//! - "cada mes" / "el día 15 de cada mes a las 3pm"
//! - "cada semana" / "cada año"

use regex::{Captures, Regex};
use std::sync::OnceLock;

use crate::i18n;
use crate::types::{HumanizeFailure, HumanizeOptions, HumanizeOutcome, Locale};
use crate::validator::validate;

/// Maximum number of suggestions returned on failure
const MAX_SUGGESTIONS: usize = 3;

/// Builds a cron string from the captures of a matched pattern.
///
/// Returns `None` when a captured time or day is not usable, which sends the
/// dispatch on to the next pattern.
pub type Generator = fn(&Captures<'_>, Locale) -> Option<String>;

/// One entry of a locale's pattern table
pub struct HumanizerPattern {
    pub regex: Regex,
    pub generate: Generator,
    pub description: &'static str,
}

impl HumanizerPattern {
    pub(crate) fn new(pattern: &str, generate: Generator, description: &'static str) -> Self {
        Self {
            regex: Regex::new(pattern).expect("humanizer patterns are valid regexes"),
            generate,
            description,
        }
    }
}

impl std::fmt::Debug for HumanizerPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HumanizerPattern")
            .field("regex", &self.regex.as_str())
            .field("description", &self.description)
            .finish()
    }
}

/// The ordered pattern table for a locale, built once per process
pub fn pattern_table(locale: Locale) -> &'static [HumanizerPattern] {
    static EN: OnceLock<Vec<HumanizerPattern>> = OnceLock::new();
    static ES: OnceLock<Vec<HumanizerPattern>> = OnceLock::new();

    match locale {
        Locale::En => EN.get_or_init(i18n::en_patterns),
        Locale::Es => ES.get_or_init(i18n::es_patterns),
    }
}

/// Descriptions of every phrase shape the locale understands, in match order
pub fn supported_patterns(locale: Locale) -> Vec<&'static str> {
    pattern_table(locale)
        .iter()
        .map(|pattern| pattern.description)
        .collect()
}

/// Convert natural-language text to a cron expression
///
/// # Examples
///
/// ```
/// use a3s_cron_text::{humanize, HumanizeOptions, Locale};
///
/// let outcome = humanize("every 5 minutes", &HumanizeOptions::default());
/// assert_eq!(outcome.cron_expression.as_deref(), Some("*/5 * * * *"));
///
/// let outcome = humanize("todos los días a las 14:30", &HumanizeOptions::new(Locale::Es));
/// assert_eq!(outcome.cron_expression.as_deref(), Some("30 14 * * *"));
/// ```
pub fn humanize(text: &str, options: &HumanizeOptions) -> HumanizeOutcome {
    let locale = options.locale;
    let normalized = normalize(text);

    for pattern in pattern_table(locale) {
        let Some(caps) = pattern.regex.captures(&normalized) else {
            continue;
        };
        let Some(cron) = (pattern.generate)(&caps, locale) else {
            tracing::debug!(
                "Pattern '{}' matched '{}' but produced no schedule",
                pattern.description,
                normalized
            );
            continue;
        };

        let validation = validate(&cron, false);
        if validation.is_valid {
            tracing::debug!("Humanized '{}' as '{}'", normalized, cron);
            return HumanizeOutcome::matched(cron);
        }

        let reason = validation.error.unwrap_or_default();
        tracing::warn!(
            "Pattern '{}' generated invalid cron '{}': {}",
            pattern.description,
            cron,
            reason
        );
        return HumanizeOutcome::failed(
            HumanizeFailure::InvalidGenerated,
            format!("Generated invalid cron: {}", reason),
            suggestions(&normalized, locale),
        );
    }

    HumanizeOutcome::failed(
        HumanizeFailure::NoMatch,
        i18n::strings(locale).no_match,
        suggestions(&normalized, locale),
    )
}

/// Lowercase, trim, and collapse whitespace runs to single spaces
fn normalize(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Canned phrases for keywords present in the text, in table order
fn suggestions(text: &str, locale: Locale) -> Vec<String> {
    i18n::strings(locale)
        .suggestions
        .iter()
        .filter(|(keywords, _)| keywords.iter().any(|keyword| text.contains(*keyword)))
        .flat_map(|(_, phrases)| phrases.iter())
        .take(MAX_SUGGESTIONS)
        .map(|phrase| phrase.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn en(text: &str) -> HumanizeOutcome {
        humanize(text, &HumanizeOptions::new(Locale::En))
    }

    fn es(text: &str) -> HumanizeOutcome {
        humanize(text, &HumanizeOptions::new(Locale::Es))
    }

    fn cron(outcome: HumanizeOutcome) -> String {
        assert!(outcome.success, "expected success: {:?}", outcome);
        outcome.cron_expression.unwrap()
    }

    // ========================================================================
    // English Tests
    // ========================================================================

    #[test]
    fn test_every_minute() {
        assert_eq!(cron(en("every minute")), "* * * * *");
    }

    #[test]
    fn test_every_n_minutes() {
        assert_eq!(cron(en("every 5 minutes")), "*/5 * * * *");
        assert_eq!(cron(en("every 15 minutes")), "*/15 * * * *");
        assert_eq!(cron(en("every 1 minute")), "*/1 * * * *");
    }

    #[test]
    fn test_every_hour() {
        assert_eq!(cron(en("every hour")), "0 * * * *");
        assert_eq!(cron(en("every 2 hours")), "0 */2 * * *");
    }

    #[test]
    fn test_daily() {
        assert_eq!(cron(en("every day")), "0 0 * * *");
        assert_eq!(cron(en("every day at 2am")), "0 2 * * *");
        assert_eq!(cron(en("every day at 14:30")), "30 14 * * *");
        assert_eq!(cron(en("at 2am")), "0 2 * * *");
        assert_eq!(cron(en("at 2:30 pm")), "30 14 * * *");
    }

    #[test]
    fn test_weekly() {
        assert_eq!(cron(en("every week")), "0 0 * * 0");
        assert_eq!(cron(en("every monday")), "0 0 * * 1");
        assert_eq!(cron(en("every monday at 10am")), "0 10 * * 1");
        assert_eq!(cron(en("every sun")), "0 0 * * 0");
    }

    #[test]
    fn test_weekdays_and_weekends() {
        assert_eq!(cron(en("weekdays at 9am")), "0 9 * * 1-5");
        assert_eq!(cron(en("on weekdays at 9am")), "0 9 * * 1-5");
        assert_eq!(cron(en("weekends at 10am")), "0 10 * * 0,6");
        assert_eq!(cron(en("on weekend at 10:15")), "15 10 * * 0,6");
    }

    #[test]
    fn test_monthly_and_yearly() {
        assert_eq!(cron(en("every month")), "0 0 1 * *");
        assert_eq!(cron(en("on the 1st of every month")), "0 0 1 * *");
        assert_eq!(cron(en("on the 15th of every month at 3pm")), "0 15 15 * *");
        assert_eq!(cron(en("every year")), "0 0 1 1 *");
    }

    #[test]
    fn test_normalization() {
        assert_eq!(cron(en("  EVERY   5\tMinutes ")), "*/5 * * * *");
        assert_eq!(cron(en("Every Day At 2AM")), "0 2 * * *");
    }

    // ========================================================================
    // Spanish Tests
    // ========================================================================

    #[test]
    fn test_spanish_minutes_and_hours() {
        assert_eq!(cron(es("cada minuto")), "* * * * *");
        assert_eq!(cron(es("cada 5 minutos")), "*/5 * * * *");
        assert_eq!(cron(es("cada hora")), "0 * * * *");
        assert_eq!(cron(es("cada 2 horas")), "0 */2 * * *");
    }

    #[test]
    fn test_spanish_daily() {
        assert_eq!(cron(es("todos los días")), "0 0 * * *");
        assert_eq!(cron(es("todos los días a las 14:30")), "30 14 * * *");
        assert_eq!(cron(es("todos los dias a las 2am")), "0 2 * * *");
        assert_eq!(cron(es("a las 9")), "0 9 * * *");
    }

    #[test]
    fn test_spanish_weekly() {
        assert_eq!(cron(es("cada semana")), "0 0 * * 0");
        assert_eq!(cron(es("todos los lunes")), "0 0 * * 1");
        assert_eq!(cron(es("cada viernes a las 5pm")), "0 17 * * 5");
        assert_eq!(cron(es("días de semana a las 9am")), "0 9 * * 1-5");
        assert_eq!(cron(es("fines de semana a las 10am")), "0 10 * * 0,6");
    }

    #[test]
    fn test_spanish_monthly_and_yearly() {
        assert_eq!(cron(es("cada mes")), "0 0 1 * *");
        assert_eq!(cron(es("el día 1 de cada mes")), "0 0 1 * *");
        assert_eq!(cron(es("el dia 15 de cada mes a las 3pm")), "0 15 15 * *");
        assert_eq!(cron(es("cada año")), "0 0 1 1 *");
    }

    // ========================================================================
    // Failures and Suggestions
    // ========================================================================

    #[test]
    fn test_no_match() {
        let outcome = en("not a real schedule");
        assert!(!outcome.success);
        assert_eq!(outcome.failure, Some(HumanizeFailure::NoMatch));
        assert!(outcome.cron_expression.is_none());
        assert!(outcome.error.unwrap().starts_with("Could not parse the text"));
        assert!(outcome.suggestions.unwrap().len() <= 3);
    }

    #[test]
    fn test_spanish_no_match_message() {
        let outcome = es("algo sin sentido");
        assert!(!outcome.success);
        assert!(outcome
            .error
            .unwrap()
            .starts_with("No se pudo interpretar el texto"));
    }

    #[test]
    fn test_invalid_time_falls_through() {
        // "every day at 25:00" matches a pattern whose generator rejects the time
        let outcome = en("every day at 25:00");
        assert!(!outcome.success);
        assert_eq!(outcome.failure, Some(HumanizeFailure::NoMatch));
        assert_eq!(
            outcome.suggestions.unwrap(),
            vec!["every day".to_string(), "every day at 9 am".to_string()]
        );
    }

    #[test]
    fn test_generated_invalid_cron() {
        let outcome = en("every 0 minutes");
        assert!(!outcome.success);
        assert_eq!(outcome.failure, Some(HumanizeFailure::InvalidGenerated));
        let error = outcome.error.unwrap();
        assert!(error.starts_with("Generated invalid cron: "), "{}", error);
        assert!(error.contains("Step value cannot be 0"));
        assert_eq!(
            outcome.suggestions.unwrap(),
            vec!["every 5 minutes".to_string(), "every 15 minutes".to_string()]
        );
    }

    #[test]
    fn test_suggestions_follow_table_order_and_cap() {
        let outcome = en("some minute hour day thing");
        assert_eq!(
            outcome.suggestions.unwrap(),
            vec![
                "every 5 minutes".to_string(),
                "every 15 minutes".to_string(),
                "every hour".to_string(),
            ]
        );

        let outcome = en("on monday please");
        assert_eq!(
            outcome.suggestions.unwrap(),
            vec![
                "every day".to_string(),
                "every day at 9 am".to_string(),
                "every monday at 10 am".to_string(),
            ]
        );
    }

    #[test]
    fn test_spanish_suggestions() {
        let outcome = es("una vez por semana");
        assert_eq!(
            outcome.suggestions.unwrap(),
            vec!["cada semana".to_string(), "todos los lunes".to_string()]
        );
    }

    #[test]
    fn test_empty_input() {
        let outcome = en("");
        assert!(!outcome.success);
        assert_eq!(outcome.suggestions, Some(vec![]));
    }

    #[test]
    fn test_supported_patterns() {
        let en = supported_patterns(Locale::En);
        let es = supported_patterns(Locale::Es);
        assert_eq!(en.len(), 15);
        assert_eq!(es.len(), 15);
        assert_eq!(en[0], "Every minute");
        assert_eq!(es[0], "Cada minuto");
    }

    #[test]
    fn test_every_success_revalidates() {
        for text in [
            "every minute",
            "every 7 hours",
            "every saturday at 11:59pm",
            "on the 31st of every month at 0:00",
        ] {
            let expr = cron(en(text));
            assert!(validate(&expr, false).is_valid, "{}", expr);
        }
    }
}
