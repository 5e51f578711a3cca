use chrono::NaiveDate;

/// Parse a date cell like `"2024年1月15日"` (4-digit year, 1-2 digit month
/// and day). Returns `None` for anything else.
pub fn parse_cn_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    let (year, rest) = s.split_once('年')?;
    let (month, rest) = rest.split_once('月')?;
    let day = rest.strip_suffix('日')?;

    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if month.is_empty() || month.len() > 2 || day.is_empty() || day.len() > 2 {
        return None;
    }

    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    let day: u32 = day.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
