use time::{Date, Duration, Month};

/// Moves `date` by `n` days, saturating at the ends of the supported range.
pub(crate) fn add_days(date: Date, n: i64) -> Date {
    date.checked_add(Duration::days(n))
        .unwrap_or(if n < 0 { Date::MIN } else { Date::MAX })
}

/// Moves `date` by `n` calendar months.  The day of the month is clamped to
/// the length of the target month, so Jan 31 + 1 month lands on the last day
/// of February rather than spilling into March.
pub(crate) fn add_months(date: Date, n: i32) -> Date {
    let months0 = (date.year() * 12 + i32::from(u8::from(date.month())) - 1).saturating_add(n);
    let year = months0.div_euclid(12);
    if year > Date::MAX.year() {
        return Date::MAX;
    }
    if year < Date::MIN.year() {
        return Date::MIN;
    }
    let month = month_from_index0(months0.rem_euclid(12));
    let day = date.day().min(month.length(year));
    Date::from_calendar_date(year, month, day).unwrap_or(date)
}

/// Moves `date` by `n` calendar years, clamping Feb 29 to Feb 28 in
/// non-leap targets.
pub(crate) fn add_years(date: Date, n: i32) -> Date {
    add_months(date, n.saturating_mul(12))
}

pub(crate) fn first_of_month(date: Date) -> Date {
    date.replace_day(1).unwrap_or(date)
}

pub(crate) fn last_of_month(date: Date) -> Date {
    date.replace_day(date.month().length(date.year()))
        .unwrap_or(date)
}

fn month_from_index0(index: i32) -> Month {
    match index {
        0 => Month::January,
        1 => Month::February,
        2 => Month::March,
        3 => Month::April,
        4 => Month::May,
        5 => Month::June,
        6 => Month::July,
        7 => Month::August,
        8 => Month::September,
        9 => Month::October,
        10 => Month::November,
        _ => Month::December,
    }
}
