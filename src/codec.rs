use std::fmt::Write;
use time::{Date, Month, OffsetDateTime};

/// Raw date value as supplied by the host (CLI argument, script, test).
/// Normalized to `Option<Date>` by [`parse`] before it ever reaches the
/// navigator state.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum RawValue {
    Empty,
    Date(Date),
    Text(String),
    /// Unix epoch milliseconds.
    Timestamp(i64),
    /// Multi-value input; the first parseable element wins.
    List(Vec<RawValue>),
}

/// Name tables used by the `F`/`M`/`D`/`l` pattern tokens.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Locale {
    pub(crate) months: [&'static str; 12],
    pub(crate) months_short: [&'static str; 12],
    pub(crate) weekdays: [&'static str; 7],
    pub(crate) weekdays_short: [&'static str; 7],
}

impl Locale {
    pub(crate) fn english() -> Locale {
        Locale {
            months: [
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
            months_short: [
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ],
            weekdays: [
                "Sunday",
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
            ],
            weekdays_short: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
        }
    }
}

impl Default for Locale {
    fn default() -> Locale {
        Locale::english()
    }
}

/// Renders `date` according to `pattern`.  `None` renders as the empty
/// string.  Unknown pattern characters pass through as literals; a backslash
/// escapes the following character.
///
/// Tokens: `d`/`j` day (padded/plain), `m`/`n` month number (padded/plain),
/// `y`/`Y` year (two/four digit), `F`/`M` month name (full/short), `l`/`D`
/// weekday name (full/short).
pub(crate) fn format(date: Option<Date>, pattern: &str, locale: &Locale) -> String {
    let Some(date) = date else {
        return String::new();
    };
    let month0 = usize::from(u8::from(date.month()) - 1);
    let weekday0 = usize::from(date.weekday().number_days_from_sunday());
    let mut out = String::with_capacity(pattern.len());
    let mut escaped = false;
    for ch in pattern.chars() {
        if escaped {
            out.push(ch);
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            'd' => {
                let _ = write!(out, "{:02}", date.day());
            }
            'j' => {
                let _ = write!(out, "{}", date.day());
            }
            'm' => {
                let _ = write!(out, "{:02}", u8::from(date.month()));
            }
            'n' => {
                let _ = write!(out, "{}", u8::from(date.month()));
            }
            'y' => {
                let _ = write!(out, "{:02}", date.year().rem_euclid(100));
            }
            'Y' => {
                let _ = write!(out, "{}", date.year());
            }
            'F' => out.push_str(locale.months[month0]),
            'M' => out.push_str(locale.months_short[month0]),
            'l' => out.push_str(locale.weekdays[weekday0]),
            'D' => out.push_str(locale.weekdays_short[weekday0]),
            other => out.push(other),
        }
    }
    out
}

/// Normalizes any raw host value to a `Date`.  Unparseable input yields
/// `None`, never an error.
pub(crate) fn parse(raw: &RawValue, pattern: &str, locale: &Locale) -> Option<Date> {
    match raw {
        RawValue::Empty => None,
        RawValue::Date(date) => Some(*date),
        RawValue::Text(text) => parse_text(text, pattern, locale),
        RawValue::Timestamp(millis) => {
            OffsetDateTime::from_unix_timestamp_nanos(i128::from(*millis) * 1_000_000)
                .ok()
                .map(|dt| dt.date())
        }
        RawValue::List(items) => items.iter().find_map(|item| parse(item, pattern, locale)),
    }
}

fn parse_text(text: &str, pattern: &str, locale: &Locale) -> Option<Date> {
    let mut input = text.trim();
    let mut year: Option<i32> = None;
    let mut month: Option<u8> = None;
    let mut day: Option<u8> = None;
    let mut escaped = false;
    for tok in pattern.chars() {
        if escaped {
            take_literal(&mut input, tok)?;
            escaped = false;
            continue;
        }
        match tok {
            '\\' => escaped = true,
            'd' | 'j' => day = Some(u8::try_from(take_digits(&mut input, 2)?).ok()?),
            'm' | 'n' => month = Some(u8::try_from(take_digits(&mut input, 2)?).ok()?),
            'y' => year = Some(2000 + i32::try_from(take_digits(&mut input, 2)?).ok()?),
            'Y' => year = Some(take_year(&mut input)?),
            'F' => month = Some(name_to_month(take_name(&mut input, &locale.months)?)),
            'M' => month = Some(name_to_month(take_name(&mut input, &locale.months_short)?)),
            // Weekday names are checked but contribute nothing to the result.
            'l' => {
                take_name(&mut input, &locale.weekdays)?;
            }
            'D' => {
                take_name(&mut input, &locale.weekdays_short)?;
            }
            other => take_literal(&mut input, other)?,
        }
    }
    if !input.is_empty() {
        return None;
    }
    let month = Month::try_from(month.unwrap_or(1)).ok()?;
    Date::from_calendar_date(year?, month, day.unwrap_or(1)).ok()
}

fn take_digits(input: &mut &str, max: usize) -> Option<u32> {
    let len = input
        .chars()
        .take_while(char::is_ascii_digit)
        .take(max)
        .count();
    if len == 0 {
        return None;
    }
    let (digits, rest) = input.split_at(len);
    let value = digits.parse::<u32>().ok()?;
    *input = rest;
    Some(value)
}

fn take_year(input: &mut &str) -> Option<i32> {
    let (negative, rest) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, *input),
    };
    let mut cursor = rest;
    let year = i32::try_from(take_digits(&mut cursor, 4)?).ok()?;
    *input = cursor;
    Some(if negative { -year } else { year })
}

fn take_name(input: &mut &str, names: &[&'static str]) -> Option<usize> {
    for (i, name) in names.iter().enumerate() {
        if let Some(head) = input.get(..name.len()) {
            if head.eq_ignore_ascii_case(name) {
                *input = &input[name.len()..];
                return Some(i);
            }
        }
    }
    None
}

fn take_literal(input: &mut &str, ch: char) -> Option<()> {
    *input = input.strip_prefix(ch)?;
    Some(())
}

fn name_to_month(index0: usize) -> u8 {
    u8::try_from(index0).unwrap_or(11) + 1
}
