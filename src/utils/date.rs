use chrono::{Datelike, NaiveDate, Weekday};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Expand a period into its dates:
/// - YYYY-MM-DD → that day
/// - YYYY-MM    → the whole month
/// - YYYY       → the whole year
pub fn generate_from_period(p: &str) -> Result<Vec<NaiveDate>, String> {
    let p = p.trim();

    // YYYY-MM-DD
    if let Some(d) = parse_date(p) {
        return Ok(vec![d]);
    }

    // YYYY-MM
    if let Ok(dm) = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d") {
        return Ok(all_days_of_month(dm.year(), dm.month()));
    }

    // YYYY
    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
    {
        return Ok(all_days_of_year(year));
    }

    Err(format!("Invalid period: {}", p))
}

/// Dates from the first day of `start` to the last day of `end`.
pub fn generate_range(start: &str, end: &str) -> Result<Vec<NaiveDate>, String> {
    let s = generate_from_period(start)?;
    let e = generate_from_period(end)?;

    let (Some(start_date), Some(end_date)) = (s.first().copied(), e.last().copied()) else {
        return Err(format!("Invalid range: {}:{}", start, end));
    };

    if end_date < start_date {
        return Err(format!("Range end {} is before start {}", end, start));
    }

    Ok(start_date
        .iter_days()
        .take_while(|d| *d <= end_date)
        .collect())
}

/// Resolve a `--period` value, `start:end` ranges included.
pub fn resolve_period(period: &str) -> Result<Vec<NaiveDate>, String> {
    match period.split_once(':') {
        Some((start, end)) => generate_range(start, end),
        None => generate_from_period(period),
    }
}

pub fn current_month_dates() -> Vec<NaiveDate> {
    let today = today();
    all_days_of_month(today.year(), today.month())
}

pub fn all_days_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|first| {
            first
                .iter_days()
                .take_while(|d| d.month() == month)
                .collect()
        })
        .unwrap_or_default()
}

pub fn all_days_of_year(year: i32) -> Vec<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .map(|first| first.iter_days().take_while(|d| d.year() == year).collect())
        .unwrap_or_default()
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "",
    }
}

pub fn weekday_short(wd: Weekday) -> &'static str {
    match wd {
        Weekday::Mon => "Mo",
        Weekday::Tue => "Tu",
        Weekday::Wed => "We",
        Weekday::Thu => "Th",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
        Weekday::Sun => "Su",
    }
}
