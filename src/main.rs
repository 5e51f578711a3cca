use anyhow::Result;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use weatherscraper::{fetch, pipeline};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {:?}", info);
    }));

    // ─── 2) pick city + output dir ───────────────────────────────────
    let city = std::env::args().nth(1).unwrap_or_else(|| "shenzhen".to_string());
    let out_dir = PathBuf::from("output");

    // ─── 3) run the pipeline ─────────────────────────────────────────
    let client = fetch::pages::build_client()?;
    match pipeline::scrape_last_30_days(&client, &city, &out_dir)? {
        Some(path) => info!("weather data written to {}", path.display()),
        None => info!("no weather data inside window; nothing written"),
    }

    Ok(())
}
