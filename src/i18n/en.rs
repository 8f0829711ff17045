//! English strings and humanizer patterns

use regex::Captures;

use super::LocaleStrings;
use crate::humanizer::HumanizerPattern;
use crate::time_text::{parse_day_of_week, parse_time_string};
use crate::types::Locale;

pub static STRINGS: LocaleStrings = LocaleStrings {
    and: "and",
    through: "through",
    of: "of",
    on: "on",
    in_: "in",

    every_second: "every second",
    every_n_seconds: "every {} seconds",
    at_second: "at second {}",
    at_seconds: "at seconds {}",

    every_minute: "every minute",
    every_n_minutes: "every {} minutes",
    at_minute: "at minute {}",
    at_minutes: "at minutes {}",

    every_hour: "every hour",
    every_n_hours: "every {} hours",
    during_hours: "during hours {}",

    at_time: "at {}",
    between: "between {} and {}",

    every_day: "every day",
    every_n_days: "every {} days",
    on_day: "on day {}",
    on_days: "on days {}",

    every_month: "every month",
    every_n_months: "every {} months",

    day_names: [
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
    ],
    month_names: [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],

    am: "AM",
    pm: "PM",

    special_phrases: [
        "At midnight on January 1",
        "At midnight on day 1 of every month",
        "At midnight every Sunday",
        "At midnight",
        "At midnight",
        "Every hour",
    ],

    humanizer_days: [
        "sunday",
        "monday",
        "tuesday",
        "wednesday",
        "thursday",
        "friday",
        "saturday",
    ],
    no_match: "Could not parse the text. Try phrases like \"every 5 minutes\" or \"every day at 2 am\".",
    suggestions: &[
        (&["minute"], &["every 5 minutes", "every 15 minutes"]),
        (&["hour"], &["every hour", "every 2 hours"]),
        (&["day"], &["every day", "every day at 9 am"]),
        (&["week"], &["every week", "every monday"]),
        (&["month"], &["every month", "on the 1st of every month"]),
        (&["monday", "tuesday", "wednesday"], &["every monday at 10 am"]),
    ],
};

const DAY: &str = "monday|mon|tuesday|tue|wednesday|wed|thursday|thu|friday|fri|saturday|sat|sunday|sun";

/// Ordered English pattern table; the first full match wins
pub(crate) fn patterns() -> Vec<HumanizerPattern> {
    vec![
        HumanizerPattern::new(r"^every minute$", |_, _| Some("* * * * *".into()), "Every minute"),
        HumanizerPattern::new(
            r"^every (\d+) minutes?$",
            |caps, _| Some(format!("*/{} * * * *", &caps[1])),
            "Every N minutes",
        ),
        HumanizerPattern::new(r"^every hour$", |_, _| Some("0 * * * *".into()), "Every hour"),
        HumanizerPattern::new(
            r"^every (\d+) hours?$",
            |caps, _| Some(format!("0 */{} * * *", &caps[1])),
            "Every N hours",
        ),
        HumanizerPattern::new(
            r"^every day$",
            |_, _| Some("0 0 * * *".into()),
            "Every day at midnight",
        ),
        HumanizerPattern::new(r"^every day at (.+)$", daily_at, "Every day at specific time"),
        HumanizerPattern::new(
            r"^every week$",
            |_, _| Some("0 0 * * 0".into()),
            "Every week (Sunday at midnight)",
        ),
        HumanizerPattern::new(
            &format!(r"^every ({})$", DAY),
            weekly_on,
            "Every specific day of week",
        ),
        HumanizerPattern::new(
            &format!(r"^every ({}) at (.+)$", DAY),
            weekly_on_at,
            "Every specific day at specific time",
        ),
        HumanizerPattern::new(
            r"^every month$",
            |_, _| Some("0 0 1 * *".into()),
            "Every month (1st at midnight)",
        ),
        HumanizerPattern::new(
            r"^on the (\d{1,2})(?:st|nd|rd|th)? of every month(?: at (.+))?$",
            monthly_on,
            "Specific day of every month",
        ),
        HumanizerPattern::new(
            r"^every year$",
            |_, _| Some("0 0 1 1 *".into()),
            "Every year (Jan 1st at midnight)",
        ),
        HumanizerPattern::new(r"^at (.+)$", daily_at, "Daily at specific time"),
        HumanizerPattern::new(
            r"^(?:on )?weekdays? at (.+)$",
            weekdays_at,
            "Weekdays at specific time",
        ),
        HumanizerPattern::new(
            r"^(?:on )?weekends? at (.+)$",
            weekends_at,
            "Weekends at specific time",
        ),
    ]
}

fn daily_at(caps: &Captures<'_>, _: Locale) -> Option<String> {
    let time = parse_time_string(&caps[1])?;
    Some(format!("{} {} * * *", time.minute, time.hour))
}

fn weekly_on(caps: &Captures<'_>, locale: Locale) -> Option<String> {
    let day = parse_day_of_week(&caps[1], locale)?;
    Some(format!("0 0 * * {}", day))
}

fn weekly_on_at(caps: &Captures<'_>, locale: Locale) -> Option<String> {
    let day = parse_day_of_week(&caps[1], locale)?;
    let time = parse_time_string(&caps[2])?;
    Some(format!("{} {} * * {}", time.minute, time.hour, day))
}

fn monthly_on(caps: &Captures<'_>, _: Locale) -> Option<String> {
    let day: u32 = caps[1].parse().ok()?;
    if !(1..=31).contains(&day) {
        return None;
    }
    match caps.get(2) {
        Some(time) => {
            let time = parse_time_string(time.as_str())?;
            Some(format!("{} {} {} * *", time.minute, time.hour, day))
        }
        None => Some(format!("0 0 {} * *", day)),
    }
}

fn weekdays_at(caps: &Captures<'_>, _: Locale) -> Option<String> {
    let time = parse_time_string(&caps[1])?;
    Some(format!("{} {} * * 1-5", time.minute, time.hour))
}

fn weekends_at(caps: &Captures<'_>, _: Locale) -> Option<String> {
    let time = parse_time_string(&caps[1])?;
    Some(format!("{} {} * * 0,6", time.minute, time.hour))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(text: &str) -> Option<String> {
        patterns().iter().find_map(|p| {
            let caps = p.regex.captures(text)?;
            (p.generate)(&caps, Locale::En)
        })
    }

    #[test]
    fn test_pattern_order_prefers_specific_day_rules() {
        assert_eq!(generate("every day at 2am").as_deref(), Some("0 2 * * *"));
        assert_eq!(generate("every day").as_deref(), Some("0 0 * * *"));
    }

    #[test]
    fn test_weekday_abbreviation() {
        assert_eq!(generate("every fri at 5pm").as_deref(), Some("0 17 * * 5"));
    }

    #[test]
    fn test_monthly_out_of_range_day_skips() {
        assert_eq!(generate("on the 32nd of every month"), None);
    }

    #[test]
    fn test_descriptions_are_unique() {
        let table = patterns();
        let mut descriptions: Vec<&str> = table.iter().map(|p| p.description).collect();
        descriptions.sort_unstable();
        descriptions.dedup();
        assert_eq!(descriptions.len(), table.len());
    }
}
