//! Cron to natural language
//!
//! Renders a validated expression as one sentence built from clauses, in
//! order: seconds (opt-in), time of day, day of month and month, day of week.
//! Special keywords map straight to a canned phrase of the locale.

use std::collections::BTreeSet;

use crate::error::Result;
use crate::field::FieldKind;
use crate::i18n::{self, fill, join_list, LocaleStrings};
use crate::parser::parse;
use crate::types::{CronField, CronFields, FormatOptions, ParsedExpression};
use crate::validator::{parse_units, StepBase, Unit};

/// Maximum number of minute/hour combinations listed as clock times
const MAX_LISTED_TIMES: usize = 6;

/// Shortest run of consecutive values rendered as `X through Y`
const MIN_RUN: usize = 3;

/// Render a cron expression as text
///
/// A leading seconds field is recognised when the expression has six tokens;
/// it is described only with `include_seconds`.
///
/// # Examples
///
/// ```
/// use a3s_cron_text::{format, FormatOptions, Locale};
///
/// let text = format("0 9 * * 1-5", &FormatOptions::default()).unwrap();
/// assert_eq!(text, "At 09:00, Monday through Friday");
///
/// let options = FormatOptions::default().with_locale(Locale::Es);
/// assert_eq!(format("*/15 * * * *", &options).unwrap(), "Cada 15 minutos");
/// ```
pub fn format(expression: &str, options: &FormatOptions) -> Result<String> {
    let with_seconds =
        expression.split_whitespace().count() == FieldKind::layout(true).len();
    let strings = i18n::strings(options.locale);

    let fields = match parse(expression, with_seconds)? {
        ParsedExpression::Special { keyword } => {
            return Ok(strings.special_phrases[keyword as usize].to_string());
        }
        ParsedExpression::Fields(fields) => fields,
    };

    let renderer = Renderer { strings, options };
    Ok(capitalize(&renderer.sentence(&fields)))
}

struct Renderer<'a> {
    strings: &'static LocaleStrings,
    options: &'a FormatOptions,
}

impl Renderer<'_> {
    fn sentence(&self, fields: &CronFields) -> String {
        let mut clauses = Vec::new();

        if self.options.include_seconds {
            if let Some(second) = &fields.second {
                clauses.push(self.seconds(second));
            }
        }
        clauses.push(self.time_of_day(&fields.minute, &fields.hour));
        clauses.extend(self.calendar(&fields.day_of_month, &fields.month));
        clauses.extend(self.weekdays(&fields.day_of_week));

        if self.options.verbose
            && is_any(&fields.day_of_month)
            && is_any(&fields.month)
            && is_any(&fields.day_of_week)
        {
            clauses.push(self.strings.every_day.to_string());
        }

        clauses.join(", ")
    }

    fn seconds(&self, second: &CronField) -> String {
        let s = self.strings;
        if second.is_pure_wildcard() {
            return s.every_second.to_string();
        }
        if let Some(step) = wildcard_step(second) {
            return self.every(s.every_second, s.every_n_seconds, step);
        }
        match second.values.as_slice() {
            [value] => fill(s.at_second, &[&value.to_string()]),
            values => fill(s.at_seconds, &[&self.numbers(values)]),
        }
    }

    fn time_of_day(&self, minute: &CronField, hour: &CronField) -> String {
        let s = self.strings;

        // Hour windows read as ranges even when stepped
        if hour.is_range && !hour.is_list {
            if let (Some(first), Some(last)) = (hour.first(), hour.last()) {
                let mut window = match minute.values.as_slice() {
                    [m] => fill(s.between, &[&self.clock(first, *m), &self.clock(last, *m)]),
                    _ => fill(s.between, &[&self.clock(first, 0), &self.clock(last, 59)]),
                };
                if let Some(step) = hour.step().filter(|step| *step > 1) {
                    window = format!("{}, {}", window, fill(s.every_n_hours, &[&step.to_string()]));
                }
                if minute.is_single() {
                    return window;
                }
                return match self.minutes(minute, hour) {
                    Some(minutes) => format!("{}, {}", minutes, window),
                    None => window,
                };
            }
        }

        if let ([m], true) = (minute.values.as_slice(), is_finite(hour)) {
            let times: Vec<String> = hour.values.iter().map(|&h| self.clock(h, *m)).collect();
            return fill(s.at_time, &[&join_list(&times, s)]);
        }

        if is_finite(minute)
            && is_finite(hour)
            && minute.values.len() * hour.values.len() <= MAX_LISTED_TIMES
        {
            let times: Vec<String> = hour
                .values
                .iter()
                .flat_map(|&h| minute.values.iter().map(move |&m| (h, m)))
                .map(|(h, m)| self.clock(h, m))
                .collect();
            return fill(s.at_time, &[&join_list(&times, s)]);
        }

        [self.minutes(minute, hour), self.hours(hour, minute)]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn minutes(&self, minute: &CronField, hour: &CronField) -> Option<String> {
        let s = self.strings;
        if minute.is_pure_wildcard() {
            return Some(s.every_minute.to_string());
        }
        if let Some(step) = wildcard_step(minute) {
            return Some(self.every(s.every_minute, s.every_n_minutes, step));
        }
        match minute.values.as_slice() {
            [0] if hour.is_wildcard => None,
            [value] if hour.is_pure_wildcard() => Some(format!(
                "{} {} {}",
                fill(s.at_minute, &[&value.to_string()]),
                s.of,
                s.every_hour
            )),
            [value] => Some(fill(s.at_minute, &[&value.to_string()])),
            values => Some(fill(s.at_minutes, &[&self.numbers(values)])),
        }
    }

    fn hours(&self, hour: &CronField, minute: &CronField) -> Option<String> {
        let s = self.strings;
        if hour.is_pure_wildcard() {
            return (minute.values == [0]).then(|| s.every_hour.to_string());
        }
        if let Some(step) = wildcard_step(hour) {
            return Some(self.every(s.every_hour, s.every_n_hours, step));
        }
        match hour.values.as_slice() {
            [h] => Some(fill(s.between, &[&self.clock(*h, 0), &self.clock(*h, 59)])),
            values => Some(fill(s.during_hours, &[&self.numbers(values)])),
        }
    }

    /// Day-of-month and month, as one clause
    fn calendar(&self, day_of_month: &CronField, month: &CronField) -> Option<String> {
        let s = self.strings;

        let months = if is_any(month) {
            None
        } else if let Some(step) = wildcard_step(month) {
            Some(Period::Every(self.every(s.every_month, s.every_n_months, step)))
        } else {
            Some(Period::Named(self.names(&month.values, |v| {
                s.month_names[(v - 1) as usize]
            })))
        };

        if is_any(day_of_month) {
            return months.map(|period| match period {
                Period::Every(text) => text,
                Period::Named(names) => format!("{} {}", s.in_, names),
            });
        }

        if let Some(step) = wildcard_step(day_of_month) {
            let days = self.every(s.every_day, s.every_n_days, step);
            return Some(match months {
                None => days,
                Some(Period::Every(text)) => format!("{}, {}", days, text),
                Some(Period::Named(names)) => format!("{} {} {}", days, s.in_, names),
            });
        }

        let days = match day_of_month.values.as_slice() {
            [day] => fill(s.on_day, &[&day.to_string()]),
            values => fill(s.on_days, &[&self.numbers(values)]),
        };
        Some(match months {
            None => format!("{} {} {}", days, s.of, s.every_month),
            Some(Period::Every(text)) => format!("{}, {}", days, text),
            Some(Period::Named(names)) => format!("{} {} {}", days, s.of, names),
        })
    }

    /// Day-of-week clause following the token's own syntax: each `A-B`
    /// reads as `X through Y`, single days are listed
    fn weekdays(&self, day_of_week: &CronField) -> Option<String> {
        if is_any(day_of_week) {
            return None;
        }
        let s = self.strings;
        let name = |v: u32| s.day_names[(v % 7) as usize].to_string();

        let Ok(units) = parse_units(&day_of_week.raw, FieldKind::DayOfWeek) else {
            let names: Vec<String> = day_of_week.values.iter().map(|&v| name(v)).collect();
            return Some(format!("{} {}", s.on, join_list(&names, s)));
        };

        let mut items = Vec::new();
        let mut has_range = false;
        for unit in units {
            match unit {
                Unit::Value(v) => items.push(name(v)),
                Unit::Range(start, end) if start == end => items.push(name(start)),
                Unit::Range(start, end) => {
                    has_range = true;
                    // 0-7 covers the whole week once
                    let end = if end - start >= 7 { start + 6 } else { end };
                    items.push(format!("{} {} {}", name(start), s.through, name(end)));
                }
                Unit::Any => {
                    has_range = true;
                    items.push(format!("{} {} {}", name(0), s.through, name(6)));
                }
                Unit::Step { base, step } => {
                    let max = FieldKind::DayOfWeek.max();
                    let (start, end) = match base {
                        StepBase::Any => (0, max),
                        StepBase::Range(start, end) => (start, end),
                        StepBase::From(start) => (start, max),
                    };
                    let days: BTreeSet<u32> = (start..=end)
                        .step_by(step as usize)
                        .map(|v| v % 7)
                        .collect();
                    items.extend(days.into_iter().map(&name));
                }
                Unit::NoSpecific => {}
            }
        }

        let names = join_list(&items, s);
        if has_range {
            Some(names)
        } else {
            Some(format!("{} {}", s.on, names))
        }
    }

    fn every(&self, once: &str, template: &str, step: u32) -> String {
        if step == 1 {
            once.to_string()
        } else {
            fill(template, &[&step.to_string()])
        }
    }

    fn clock(&self, hour: u32, minute: u32) -> String {
        if self.options.use_24_hour_format {
            return format!("{:02}:{:02}", hour, minute);
        }
        let period = if hour < 12 {
            self.strings.am
        } else {
            self.strings.pm
        };
        let hour = match hour % 12 {
            0 => 12,
            h => h,
        };
        format!("{}:{:02} {}", hour, minute, period)
    }

    fn numbers(&self, values: &[u32]) -> String {
        self.names(values, |v| v.to_string())
    }

    /// List values, collapsing consecutive runs into `X through Y`
    fn names<T: ToString>(&self, values: &[u32], name: impl Fn(u32) -> T) -> String {
        let mut items = Vec::new();
        for (first, last) in runs(values) {
            if (last - first) as usize + 1 >= MIN_RUN {
                items.push(format!(
                    "{} {} {}",
                    name(first).to_string(),
                    self.strings.through,
                    name(last).to_string()
                ));
            } else {
                items.extend((first..=last).map(|v| name(v).to_string()));
            }
        }
        join_list(&items, self.strings)
    }
}

/// A month clause before it is attached to a day clause
enum Period {
    Every(String),
    Named(String),
}

/// `*` or `?`: the field does not restrict anything
fn is_any(field: &CronField) -> bool {
    field.is_pure_wildcard() || field.is_unspecified()
}

/// Neither a wildcard nor a step: an explicit set of values
fn is_finite(field: &CronField) -> bool {
    !field.is_wildcard && !field.is_step
}

/// Step of a `*/n` token
fn wildcard_step(field: &CronField) -> Option<u32> {
    if field.is_wildcard && field.is_step {
        field.step()
    } else {
        None
    }
}

/// Consecutive runs of sorted values as inclusive `(first, last)` pairs
fn runs(values: &[u32]) -> Vec<(u32, u32)> {
    let mut out: Vec<(u32, u32)> = Vec::new();
    for &value in values {
        match out.last_mut() {
            Some((_, last)) if *last + 1 == value => *last = value,
            _ => out.push((value, value)),
        }
    }
    out
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Locale;

    fn en(expr: &str) -> String {
        format(expr, &FormatOptions::default()).unwrap()
    }

    fn es(expr: &str) -> String {
        format(expr, &FormatOptions::default().with_locale(Locale::Es)).unwrap()
    }

    fn twelve_hour(expr: &str) -> String {
        format(expr, &FormatOptions::default().with_24_hour_format(false)).unwrap()
    }

    #[test]
    fn test_weekday_range() {
        assert_eq!(en("0 9 * * 1-5"), "At 09:00, Monday through Friday");
        assert_eq!(en("0 9 * * MON-FRI"), "At 09:00, Monday through Friday");
    }

    #[test]
    fn test_minute_steps() {
        assert_eq!(en("*/15 * * * *"), "Every 15 minutes");
        assert_eq!(es("*/15 * * * *"), "Cada 15 minutos");
        assert_eq!(en("*/1 * * * *"), "Every minute");
        assert_eq!(en("* * * * *"), "Every minute");
    }

    #[test]
    fn test_hours() {
        assert_eq!(en("0 * * * *"), "Every hour");
        assert_eq!(en("0 */2 * * *"), "Every 2 hours");
        assert_eq!(es("0 */2 * * *"), "Cada 2 horas");
        assert_eq!(en("30 * * * *"), "At minute 30 of every hour");
        assert_eq!(es("30 * * * *"), "En el minuto 30 de cada hora");
        assert_eq!(en("5 */2 * * *"), "At minute 5, every 2 hours");
    }

    #[test]
    fn test_hour_range_wins() {
        assert_eq!(twelve_hour("0 9-17 * * *"), "Between 9:00 AM and 5:00 PM");
        assert_eq!(en("0 9-17 * * *"), "Between 09:00 and 17:00");
        assert_eq!(
            en("0 10-20/5 * * *"),
            "Between 10:00 and 20:00, every 5 hours"
        );
        assert_eq!(
            en("0 9-17/2 * * *"),
            "Between 09:00 and 17:00, every 2 hours"
        );
        assert_eq!(
            es("0 9-17/2 * * *"),
            "Entre las 09:00 y las 17:00, cada 2 horas"
        );
        assert_eq!(
            en("*/30 8-18/5 * * *"),
            "Every 30 minutes, between 08:00 and 18:59, every 5 hours"
        );
        assert_eq!(
            en("*/15 9-17 * * 1-5"),
            "Every 15 minutes, between 09:00 and 17:59, Monday through Friday"
        );
        assert_eq!(
            format(
                "0 9-17 * * *",
                &FormatOptions::default()
                    .with_locale(Locale::Es)
                    .with_24_hour_format(false)
            )
            .unwrap(),
            "Entre las 9:00 AM y las 5:00 PM"
        );
    }

    #[test]
    fn test_listed_times() {
        assert_eq!(en("0 9,18 * * *"), "At 09:00 and 18:00");
        assert_eq!(en("0 9,12,18 * * *"), "At 09:00, 12:00 and 18:00");
        assert_eq!(en("0,30 9,17 * * *"), "At 09:00, 09:30, 17:00 and 17:30");
        assert_eq!(es("0 9,18 * * *"), "A las 09:00 y 18:00");
    }

    #[test]
    fn test_too_many_times_falls_back_to_phrases() {
        assert_eq!(
            en("0,15,30,45 9,12 * * *"),
            "At minutes 0, 15, 30 and 45, during hours 9 and 12"
        );
        assert_eq!(
            en("*/15 9 * * *"),
            "Every 15 minutes, between 09:00 and 09:59"
        );
    }

    #[test]
    fn test_twelve_hour_clock() {
        assert_eq!(twelve_hour("30 14 * * *"), "At 2:30 PM");
        assert_eq!(twelve_hour("0 0 * * *"), "At 12:00 AM");
        assert_eq!(twelve_hour("0 12 * * *"), "At 12:00 PM");
    }

    #[test]
    fn test_day_of_month_and_month() {
        assert_eq!(en("0 0 1 * *"), "At 00:00, on day 1 of every month");
        assert_eq!(es("0 0 1 * *"), "A las 00:00, el día 1 de cada mes");
        assert_eq!(en("0 0 1 1,7 *"), "At 00:00, on day 1 of January and July");
        assert_eq!(en("0 0 1,15 * *"), "At 00:00, on days 1 and 15 of every month");
        assert_eq!(en("0 12 * 1,7 *"), "At 12:00, in January and July");
        assert_eq!(es("0 12 * 1,7 *"), "A las 12:00, en enero y julio");
        assert_eq!(en("0 9 * 3-5 *"), "At 09:00, in March through May");
        assert_eq!(en("0 9 * */3 *"), "At 09:00, every 3 months");
        assert_eq!(en("0 9 1 */3 *"), "At 09:00, on day 1, every 3 months");
    }

    #[test]
    fn test_stepped_days() {
        assert_eq!(en("0 8 */2 * *"), "At 08:00, every 2 days");
        assert_eq!(es("0 8 */2 * *"), "A las 08:00, cada 2 días");
        assert_eq!(en("0 8 */2 6 *"), "At 08:00, every 2 days in June");
    }

    #[test]
    fn test_discrete_weekdays() {
        assert_eq!(
            en("0 9 * * 1,3,5"),
            "At 09:00, on Monday, Wednesday and Friday"
        );
        assert_eq!(
            es("0 9 * * 1,3,5"),
            "A las 09:00, el lunes, miércoles y viernes"
        );
        assert_eq!(en("0 0 * * 7"), "At 00:00, on Sunday");
        assert_eq!(en("0 9 * * 1,2,3"), "At 09:00, on Monday, Tuesday and Wednesday");
        assert_eq!(en("0 9 * * */2"), "At 09:00, on Sunday, Tuesday, Thursday and Saturday");
        assert_eq!(en("0 9 ? * MON"), "At 09:00, on Monday");
    }

    #[test]
    fn test_weekday_ranges_follow_token_syntax() {
        assert_eq!(en("0 9 * * 1-2"), "At 09:00, Monday through Tuesday");
        assert_eq!(en("0 9 * * 5-7"), "At 09:00, Friday through Sunday");
        assert_eq!(es("0 9 * * 5-7"), "A las 09:00, viernes hasta domingo");
        assert_eq!(en("0 9 * * 0-7"), "At 09:00, Sunday through Saturday");
        assert_eq!(en("0 9 * * 1-3,5"), "At 09:00, Monday through Wednesday and Friday");
        assert_eq!(en("0 9 * * 3-3"), "At 09:00, on Wednesday");
    }

    #[test]
    fn test_special_keywords() {
        assert_eq!(en("@daily"), "At midnight");
        assert_eq!(es("@daily"), "A medianoche");
        assert_eq!(en("@yearly"), "At midnight on January 1");
        assert_eq!(es("@hourly"), "Cada hora");
        assert_eq!(en("@weekly"), "At midnight every Sunday");
    }

    #[test]
    fn test_verbose() {
        let options = FormatOptions::default().with_verbose(true);
        assert_eq!(format("0 9 * * *", &options).unwrap(), "At 09:00, every day");
        assert_eq!(
            format("0 9 * * *", &options.with_locale(Locale::Es)).unwrap(),
            "A las 09:00, todos los días"
        );
        // day restrictions suppress the clause
        assert_eq!(
            format("0 9 * * 1-5", &options).unwrap(),
            "At 09:00, Monday through Friday"
        );
    }

    #[test]
    fn test_seconds() {
        assert_eq!(en("30 */5 * * * *"), "Every 5 minutes");

        let options = FormatOptions::default().with_seconds(true);
        assert_eq!(
            format("30 */5 * * * *", &options).unwrap(),
            "At second 30, every 5 minutes"
        );
        assert_eq!(
            format("*/10 * * * * *", &options).unwrap(),
            "Every 10 seconds, every minute"
        );
        // no seconds field, nothing to add
        assert_eq!(format("*/5 * * * *", &options).unwrap(), "Every 5 minutes");
    }

    #[test]
    fn test_invalid_expression() {
        let err = format("0 24 * * *", &FormatOptions::default()).unwrap_err();
        assert_eq!(err.field(), Some(FieldKind::Hour));

        assert!(format("* * *", &FormatOptions::default()).is_err());
        assert!(format("@fortnightly", &FormatOptions::default()).is_err());
    }

    #[test]
    fn test_runs() {
        assert_eq!(runs(&[1, 2, 3, 5, 7, 8]), vec![(1, 3), (5, 5), (7, 8)]);
        assert!(runs(&[]).is_empty());
    }
}
