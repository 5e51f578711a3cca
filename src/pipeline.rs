use crate::{export, fetch, process};
use anyhow::{Context, Result};
use chrono::{Duration, Local, NaiveDate};
use reqwest::blocking::Client;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{error, info};

/// Scrape one city's daily history for `[start, end]` and export it as a
/// workbook under `out_dir`. Months are fetched one at a time; a month that
/// fails to fetch contributes zero records and never aborts the run.
///
/// Returns the workbook path, or `None` when no record fell inside the window.
pub fn scrape_city(
    client: &Client,
    city: &str,
    start: NaiveDate,
    end: NaiveDate,
    out_dir: &Path,
) -> Result<Option<PathBuf>> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    let months = fetch::months::month_range(start, end);
    info!(city, %start, %end, months = months.len(), "scraping history window");

    let mut all_records = Vec::new();
    for year_month in &months {
        info!(%year_month, "fetching month page");
        match fetch::pages::fetch_month_page(client, city, year_month, out_dir) {
            Ok(page) => {
                let records = process::parse_month_page(&page);
                info!(%year_month, records = records.len(), "parsed month page");
                all_records.extend(records);
            }
            Err(err) => {
                error!("{}{} failed: {}", city, year_month, err);
            }
        }
    }

    let filtered = process::filter::filter_by_date(all_records, start, end);
    export::write_workbook(&filtered, city, out_dir)
}

/// Scrape the trailing 30-day window ending today (local time).
pub fn scrape_last_30_days(client: &Client, city: &str, out_dir: &Path) -> Result<Option<PathBuf>> {
    let end = Local::now().date_naive();
    let start = end - Duration::days(30);
    scrape_city(client, city, start, end, out_dir)
}
