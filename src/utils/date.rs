use chrono::{Datelike, NaiveDate};

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// First and last day of the month containing `d`.
pub fn month_bounds(d: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = NaiveDate::from_ymd_opt(d.year(), d.month(), 1)
        .unwrap_or(d);
    let next_month = if d.month() == 12 {
        NaiveDate::from_ymd_opt(d.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(d.year(), d.month() + 1, 1)
    };
    let last = next_month
        .and_then(|n| n.pred_opt())
        .unwrap_or(d);
    (first, last)
}

/// First and last day of the year containing `d`.
pub fn year_bounds(d: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = NaiveDate::from_ymd_opt(d.year(), 1, 1).unwrap_or(d);
    let last = NaiveDate::from_ymd_opt(d.year(), 12, 31).unwrap_or(d);
    (first, last)
}
