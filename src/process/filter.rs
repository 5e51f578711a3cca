use super::DailyWeather;
use chrono::NaiveDate;
use tracing::info;

/// Keep only records dated inside `[start, end]` (inclusive both ends) and
/// return them sorted ascending by date. Records from different months arrive
/// concatenated in fetch order; the sort makes the result independent of it.
pub fn filter_by_date(
    mut records: Vec<DailyWeather>,
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<DailyWeather> {
    records.retain(|r| start <= r.date && r.date <= end);
    records.sort_by_key(|r| r.date);
    info!(count = records.len(), "records inside date window");
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn rec(date: NaiveDate) -> DailyWeather {
        DailyWeather {
            date,
            weather_day_night: "晴 / 晴".into(),
            high_temp: "20℃".into(),
            low_temp: "12℃".into(),
            wind_day: "微风".into(),
            wind_night: "微风".into(),
        }
    }

    #[test]
    fn keeps_bounds_inclusive_and_sorts() {
        let records = vec![
            rec(d(2024, 2, 10)),
            rec(d(2024, 1, 15)),
            rec(d(2024, 1, 14)), // before window
            rec(d(2024, 2, 11)), // after window
            rec(d(2024, 2, 1)),
        ];
        let out = filter_by_date(records, d(2024, 1, 15), d(2024, 2, 10));
        let dates: Vec<NaiveDate> = out.iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![d(2024, 1, 15), d(2024, 2, 1), d(2024, 2, 10)]);
    }

    #[test]
    fn filtering_twice_is_idempotent() {
        let records = vec![rec(d(2024, 1, 20)), rec(d(2024, 1, 18))];
        let once = filter_by_date(records, d(2024, 1, 1), d(2024, 1, 31));
        let twice = filter_by_date(once.clone(), d(2024, 1, 1), d(2024, 1, 31));
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_input_is_empty_output() {
        let out = filter_by_date(Vec::new(), d(2024, 1, 1), d(2024, 1, 31));
        assert!(out.is_empty());
    }
}
