use crate::process::DailyWeather;
use anyhow::{Context, Result};
use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const SHEET_NAME: &str = "Last30DaysWeather";

const HEADER: [&str; 6] = [
    "日期",
    "天气状况(白天/夜间)",
    "最高气温",
    "最低气温",
    "风力风向(白天)",
    "风力风向(夜间)",
];

/// Write the records to `{out_dir}/{city}Last30DaysWeather.xlsx` and return
/// the path. An empty record set writes nothing and returns `None`.
pub fn write_workbook(
    records: &[DailyWeather],
    city: &str,
    out_dir: &Path,
) -> Result<Option<PathBuf>> {
    if records.is_empty() {
        warn!(city, "no records to write, skipping workbook");
        return Ok(None);
    }

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME).context("naming worksheet")?;

    for (col, title) in HEADER.iter().enumerate() {
        sheet
            .write_string(0, col as u16, *title)
            .context("writing header row")?;
    }

    for (i, rec) in records.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet
            .write_string(row, 0, rec.date.format("%Y-%m-%d").to_string())
            .and_then(|s| s.write_string(row, 1, &rec.weather_day_night))
            .and_then(|s| s.write_string(row, 2, &rec.high_temp))
            .and_then(|s| s.write_string(row, 3, &rec.low_temp))
            .and_then(|s| s.write_string(row, 4, &rec.wind_day))
            .and_then(|s| s.write_string(row, 5, &rec.wind_night))
            .with_context(|| format!("writing row for {}", rec.date))?;
    }

    let path = out_dir.join(format!("{}{}.xlsx", city, SHEET_NAME));
    workbook
        .save(&path)
        .with_context(|| format!("saving workbook {}", path.display()))?;
    info!(rows = records.len(), path = %path.display(), "workbook written");

    Ok(Some(path))
}
