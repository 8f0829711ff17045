//! Locale string tables
//!
//! Each supported locale provides one static [`LocaleStrings`] table used by
//! the formatter (cron → text) and the humanizer (text → cron). Phrase
//! templates use `{}` placeholders filled in order by [`fill`].

mod en;
mod es;

use crate::types::Locale;

/// Keywords found in the input and the phrases they suggest
pub type SuggestionRule = (&'static [&'static str], &'static [&'static str]);

/// Words and phrase templates for one language
#[derive(Debug)]
pub struct LocaleStrings {
    pub and: &'static str,
    pub through: &'static str,
    pub of: &'static str,
    pub on: &'static str,
    pub in_: &'static str,

    pub every_second: &'static str,
    pub every_n_seconds: &'static str,
    pub at_second: &'static str,
    pub at_seconds: &'static str,

    pub every_minute: &'static str,
    pub every_n_minutes: &'static str,
    pub at_minute: &'static str,
    pub at_minutes: &'static str,

    pub every_hour: &'static str,
    pub every_n_hours: &'static str,
    pub during_hours: &'static str,

    /// Single or listed clock times
    pub at_time: &'static str,
    /// Clock time window
    pub between: &'static str,

    pub every_day: &'static str,
    pub every_n_days: &'static str,
    pub on_day: &'static str,
    pub on_days: &'static str,

    pub every_month: &'static str,
    pub every_n_months: &'static str,

    pub day_names: [&'static str; 7],
    pub month_names: [&'static str; 12],

    pub am: &'static str,
    pub pm: &'static str,

    /// Canned phrases indexed like [`crate::field::SPECIAL_KEYWORDS`]
    pub special_phrases: [&'static str; 6],

    /// Lowercase day names matched by the humanizer, from Sunday
    pub humanizer_days: [&'static str; 7],
    pub no_match: &'static str,
    pub suggestions: &'static [SuggestionRule],
}

/// The string table for a locale
pub fn strings(locale: Locale) -> &'static LocaleStrings {
    match locale {
        Locale::En => &en::STRINGS,
        Locale::Es => &es::STRINGS,
    }
}

pub(crate) use en::patterns as en_patterns;
pub(crate) use es::patterns as es_patterns;

/// Replace `{}` placeholders in order
pub fn fill(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len() + 16);
    let mut rest = template;
    let mut args = args.iter();
    while let Some(idx) = rest.find("{}") {
        out.push_str(&rest[..idx]);
        out.push_str(args.next().copied().unwrap_or_default());
        rest = &rest[idx + 2..];
    }
    out.push_str(rest);
    out
}

/// Join items as `a, b and c` using the locale's conjunction
pub fn join_list(items: &[String], strings: &LocaleStrings) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} {} {}", init.join(", "), strings.and, last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill() {
        assert_eq!(fill("every {} minutes", &["5"]), "every 5 minutes");
        assert_eq!(
            fill("between {} and {}", &["09:00", "17:00"]),
            "between 09:00 and 17:00"
        );
        assert_eq!(fill("no placeholders", &["x"]), "no placeholders");
        assert_eq!(fill("{} and {}", &["a"]), "a and ");
    }

    #[test]
    fn test_join_list() {
        let en = strings(Locale::En);
        let es = strings(Locale::Es);
        let items: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        assert_eq!(join_list(&items, en), "a, b and c");
        assert_eq!(join_list(&items, es), "a, b y c");
        assert_eq!(join_list(&items[..1], en), "a");
        assert_eq!(join_list(&items[..2], en), "a and b");
        assert_eq!(join_list(&[], en), "");
    }

    #[test]
    fn test_tables_are_parallel() {
        for locale in [Locale::En, Locale::Es] {
            let table = strings(locale);
            assert_eq!(table.day_names.len(), 7);
            assert_eq!(table.month_names.len(), 12);
            assert!(!table.suggestions.is_empty());
            assert!(table
                .humanizer_days
                .iter()
                .all(|d| d.to_lowercase() == *d));
        }
    }
}
