//! Spanish strings and humanizer patterns

use regex::Captures;

use super::LocaleStrings;
use crate::humanizer::HumanizerPattern;
use crate::time_text::{parse_day_of_week, parse_time_string};
use crate::types::Locale;

pub static STRINGS: LocaleStrings = LocaleStrings {
    and: "y",
    through: "hasta",
    of: "de",
    on: "el",
    in_: "en",

    every_second: "cada segundo",
    every_n_seconds: "cada {} segundos",
    at_second: "en el segundo {}",
    at_seconds: "en los segundos {}",

    every_minute: "cada minuto",
    every_n_minutes: "cada {} minutos",
    at_minute: "en el minuto {}",
    at_minutes: "en los minutos {}",

    every_hour: "cada hora",
    every_n_hours: "cada {} horas",
    during_hours: "durante las horas {}",

    at_time: "a las {}",
    between: "entre las {} y las {}",

    every_day: "todos los días",
    every_n_days: "cada {} días",
    on_day: "el día {}",
    on_days: "los días {}",

    every_month: "cada mes",
    every_n_months: "cada {} meses",

    day_names: [
        "domingo",
        "lunes",
        "martes",
        "miércoles",
        "jueves",
        "viernes",
        "sábado",
    ],
    month_names: [
        "enero",
        "febrero",
        "marzo",
        "abril",
        "mayo",
        "junio",
        "julio",
        "agosto",
        "septiembre",
        "octubre",
        "noviembre",
        "diciembre",
    ],

    am: "AM",
    pm: "PM",

    special_phrases: [
        "A medianoche el 1 de enero",
        "A medianoche el día 1 de cada mes",
        "A medianoche todos los domingos",
        "A medianoche",
        "A medianoche",
        "Cada hora",
    ],

    humanizer_days: [
        "domingo",
        "lunes",
        "martes",
        "miércoles",
        "jueves",
        "viernes",
        "sábado",
    ],
    no_match: "No se pudo interpretar el texto. Intenta usar frases como \"cada 5 minutos\" o \"todos los días a las 2 am\".",
    suggestions: &[
        (&["minuto"], &["cada 5 minutos"]),
        (&["hora"], &["cada hora", "cada 2 horas"]),
        (&["día", "dia"], &["todos los días", "todos los días a las 9 am"]),
        (&["semana"], &["cada semana", "todos los lunes"]),
        (&["mes"], &["cada mes", "el día 1 de cada mes"]),
        (&["lunes", "martes", "miércoles"], &["todos los lunes a las 10 am"]),
    ],
};

const DIA: &str = "lunes|martes|mi[eé]rcoles|jueves|viernes|s[aá]bado|domingo";

/// Ordered Spanish pattern table; the first full match wins
pub(crate) fn patterns() -> Vec<HumanizerPattern> {
    vec![
        HumanizerPattern::new(r"^cada minuto$", |_, _| Some("* * * * *".into()), "Cada minuto"),
        HumanizerPattern::new(
            r"^cada (\d+) minutos?$",
            |caps, _| Some(format!("*/{} * * * *", &caps[1])),
            "Cada N minutos",
        ),
        HumanizerPattern::new(r"^cada hora$", |_, _| Some("0 * * * *".into()), "Cada hora"),
        HumanizerPattern::new(
            r"^cada (\d+) horas?$",
            |caps, _| Some(format!("0 */{} * * *", &caps[1])),
            "Cada N horas",
        ),
        HumanizerPattern::new(
            r"^todos los d[ií]as$",
            |_, _| Some("0 0 * * *".into()),
            "Todos los días a medianoche",
        ),
        HumanizerPattern::new(
            r"^todos los d[ií]as a las? (.+)$",
            daily_at,
            "Todos los días a una hora específica",
        ),
        HumanizerPattern::new(
            r"^cada semana$",
            |_, _| Some("0 0 * * 0".into()),
            "Cada semana (domingo a medianoche)",
        ),
        HumanizerPattern::new(
            &format!(r"^(?:todos los|cada) ({})$", DIA),
            weekly_on,
            "Cada día específico de la semana",
        ),
        HumanizerPattern::new(
            &format!(r"^(?:todos los|cada) ({}) a las? (.+)$", DIA),
            weekly_on_at,
            "Cada día específico a una hora específica",
        ),
        HumanizerPattern::new(
            r"^cada mes$",
            |_, _| Some("0 0 1 * *".into()),
            "Cada mes (día 1 a medianoche)",
        ),
        HumanizerPattern::new(
            r"^el d[ií]a (\d{1,2}) de cada mes(?: a las? (.+))?$",
            monthly_on,
            "Día específico de cada mes",
        ),
        HumanizerPattern::new(
            r"^cada a[ñn]o$",
            |_, _| Some("0 0 1 1 *".into()),
            "Cada año (1 de enero a medianoche)",
        ),
        HumanizerPattern::new(
            r"^a las? (.+)$",
            daily_at,
            "Diariamente a una hora específica",
        ),
        HumanizerPattern::new(
            r"^(?:d[ií]as de semana|d[ií]as laborales) a las? (.+)$",
            weekdays_at,
            "Días de semana a una hora específica",
        ),
        HumanizerPattern::new(
            r"^fines? de semana a las? (.+)$",
            weekends_at,
            "Fines de semana a una hora específica",
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
