pub mod date_parser;
pub mod filter;

use crate::fetch::MonthPage;
use chrono::NaiveDate;
use scraper::{ElementRef, Html, Selector};
use tracing::warn;

/// One day of history as shown on a month page. All fields except the date
/// are kept as the site's display strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyWeather {
    pub date: NaiveDate,
    pub weather_day_night: String,
    pub high_temp: String,
    pub low_temp: String,
    pub wind_day: String,
    pub wind_night: String,
}

/// Extract the daily records from one month page, in document order.
///
/// A page without the expected `div.wdetail` / `table.b` structure yields an
/// empty vec; so does a page that decodes but contains no valid rows. Rows
/// that don't carry exactly the four expected cells, or whose date cell does
/// not parse, are skipped.
pub fn parse_month_page(page: &MonthPage) -> Vec<DailyWeather> {
    let (text, _, had_errors) = page.encoding.decode(&page.bytes);
    if had_errors {
        warn!(
            encoding = page.encoding.name(),
            "page contains byte sequences invalid for the detected encoding"
        );
    }

    let doc = Html::parse_document(&text);
    let detail_selector = Selector::parse("div.wdetail").expect("valid div.wdetail selector");
    let table_selector = Selector::parse("table.b").expect("valid table.b selector");
    let row_selector = Selector::parse("tr").expect("valid tr selector");
    let cell_selector = Selector::parse("td, th").expect("valid cell selector");

    let detail = match doc.select(&detail_selector).next() {
        Some(el) => el,
        None => {
            warn!("no div.wdetail container found; page structure may have changed");
            return Vec::new();
        }
    };
    let table = match detail.select(&table_selector).next() {
        Some(el) => el,
        None => {
            warn!("no table.b under div.wdetail; page structure may have changed");
            return Vec::new();
        }
    };

    let mut records = Vec::new();
    // first row is the header
    for row in table.select(&row_selector).skip(1) {
        let cells: Vec<String> = row.select(&cell_selector).map(cell_text).collect();
        if cells.len() != 4 {
            continue;
        }

        let date = match date_parser::parse_cn_date(&cells[0]) {
            Some(date) => date,
            None => {
                warn!(cell = %cells[0], "unparseable date cell, skipping row");
                continue;
            }
        };
        let (high_temp, low_temp) = split_pair(&cells[2]);
        let (wind_day, wind_night) = split_pair(&cells[3]);

        records.push(DailyWeather {
            date,
            weather_day_night: cells[1].clone(),
            high_temp,
            low_temp,
            wind_day,
            wind_night,
        });
    }

    records
}

/// Cell text with newlines and runs of whitespace collapsed to single spaces.
fn cell_text(cell: ElementRef) -> String {
    cell.text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split a `"day / night"`-style cell at the first `/`, trimming both halves.
/// Without a `/` the whole text becomes the first half.
pub fn split_pair(s: &str) -> (String, String) {
    match s.split_once('/') {
        Some((first, second)) => (first.trim().to_string(), second.trim().to_string()),
        None => (s.trim().to_string(), String::new()),
    }
}
