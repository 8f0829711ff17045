//! Clock-time and day-name helpers shared by the humanizer patterns

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

use crate::i18n;
use crate::types::Locale;

/// Hour (0-23) and minute (0-59) of a clock time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
}

struct TimePatterns {
    // 2am, 14, 12pm
    hour_only: Regex,
    // 14:30, 2:30pm
    hour_minute: Regex,
}

fn time_patterns() -> &'static TimePatterns {
    static PATTERNS: OnceLock<TimePatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| TimePatterns {
        hour_only: Regex::new(r"(?i)^(\d{1,2})(am|pm)?$").expect("valid hour pattern"),
        hour_minute: Regex::new(r"(?i)^(\d{1,2}):(\d{2})(am|pm)?$")
            .expect("valid hour:minute pattern"),
    })
}

/// Parse a clock string like `2am`, `14`, `14:30`, `2:30 pm`
///
/// Returns `None` when the text is not a clock time or is out of range.
///
/// # Examples
///
/// ```
/// use a3s_cron_text::parse_time_string;
///
/// let time = parse_time_string("2:30 PM").unwrap();
/// assert_eq!((time.hour, time.minute), (14, 30));
/// assert!(parse_time_string("25:00").is_none());
/// ```
pub fn parse_time_string(text: &str) -> Option<ClockTime> {
    let cleaned: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let patterns = time_patterns();

    let (hour, minute, period) = if let Some(caps) = patterns.hour_only.captures(&cleaned) {
        (
            caps[1].parse::<u32>().ok()?,
            0,
            caps.get(2).map(|m| m.as_str().to_ascii_lowercase()),
        )
    } else if let Some(caps) = patterns.hour_minute.captures(&cleaned) {
        (
            caps[1].parse::<u32>().ok()?,
            caps[2].parse::<u32>().ok()?,
            caps.get(3).map(|m| m.as_str().to_ascii_lowercase()),
        )
    } else {
        return None;
    };

    let hour = match period.as_deref() {
        Some("pm") if hour != 12 => hour + 12,
        Some("am") if hour == 12 => 0,
        _ => hour,
    };

    (hour <= 23 && minute <= 59).then_some(ClockTime { hour, minute })
}

/// Find the weekday named in `text`, 0 = Sunday
///
/// Matches when the text contains a full day name of the locale, or when the
/// text is an abbreviation (three letters or more) of one. Accents are ignored.
pub fn parse_day_of_week(text: &str, locale: Locale) -> Option<u32> {
    let text = fold_accents(&text.to_lowercase());
    let days = &i18n::strings(locale).humanizer_days;

    days.iter()
        .map(|day| fold_accents(day))
        .position(|day| {
            text.contains(&day) || (text.chars().count() >= 3 && day.starts_with(text.as_str()))
        })
        .map(|idx| idx as u32)
}

fn fold_accents(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'á' => 'a',
            'é' => 'e',
            'í' => 'i',
            'ó' => 'o',
            'ú' | 'ü' => 'u',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(hour: u32, minute: u32) -> Option<ClockTime> {
        Some(ClockTime { hour, minute })
    }

    #[test]
    fn test_twelve_hour() {
        assert_eq!(parse_time_string("2am"), time(2, 0));
        assert_eq!(parse_time_string("2pm"), time(14, 0));
        assert_eq!(parse_time_string("12am"), time(0, 0));
        assert_eq!(parse_time_string("12pm"), time(12, 0));
        assert_eq!(parse_time_string("2 PM"), time(14, 0));
    }

    #[test]
    fn test_twenty_four_hour() {
        assert_eq!(parse_time_string("14"), time(14, 0));
        assert_eq!(parse_time_string("0"), time(0, 0));
        assert_eq!(parse_time_string("23"), time(23, 0));
    }

    #[test]
    fn test_with_minutes() {
        assert_eq!(parse_time_string("14:30"), time(14, 30));
        assert_eq!(parse_time_string("2:30pm"), time(14, 30));
        assert_eq!(parse_time_string("2:30 pm"), time(14, 30));
        assert_eq!(parse_time_string("9:15am"), time(9, 15));
        assert_eq!(parse_time_string("12:05AM"), time(0, 5));
    }

    #[test]
    fn test_invalid_times() {
        assert_eq!(parse_time_string("25:00"), None);
        assert_eq!(parse_time_string("14:60"), None);
        assert_eq!(parse_time_string("13pm"), None);
        assert_eq!(parse_time_string("invalid"), None);
        assert_eq!(parse_time_string(""), None);
        assert_eq!(parse_time_string("9:5"), None);
    }

    #[test]
    fn test_english_days() {
        assert_eq!(parse_day_of_week("sunday", Locale::En), Some(0));
        assert_eq!(parse_day_of_week("monday", Locale::En), Some(1));
        assert_eq!(parse_day_of_week("Friday", Locale::En), Some(5));
        assert_eq!(parse_day_of_week("saturday", Locale::En), Some(6));
        assert_eq!(parse_day_of_week("every tuesday", Locale::En), Some(2));
        assert_eq!(parse_day_of_week("wed", Locale::En), Some(3));
        assert_eq!(parse_day_of_week("invalidday", Locale::En), None);
        assert_eq!(parse_day_of_week("mo", Locale::En), None);
    }

    #[test]
    fn test_spanish_days() {
        assert_eq!(parse_day_of_week("domingo", Locale::Es), Some(0));
        assert_eq!(parse_day_of_week("lunes", Locale::Es), Some(1));
        assert_eq!(parse_day_of_week("viernes", Locale::Es), Some(5));
        assert_eq!(parse_day_of_week("sábado", Locale::Es), Some(6));
        assert_eq!(parse_day_of_week("miercoles", Locale::Es), Some(3));
        assert_eq!(parse_day_of_week("monday", Locale::Es), None);
    }
}
