use chrono::{Datelike, NaiveDate};

/// List every calendar month touched by the inclusive range `[start, end]`
/// as `"YYYYMM"` tokens, in chronological order, no duplicates.
pub fn month_range(start: NaiveDate, end: NaiveDate) -> Vec<String> {
    let mut year = start.year();
    let mut month = start.month();
    let mut tokens = Vec::new();

    while (year, month) <= (end.year(), end.month()) {
        tokens.push(format!("{}{:02}", year, month));
        month += 1;
        if month > 12 {
            year += 1;
            month = 1;
        }
    }

    tokens
}
