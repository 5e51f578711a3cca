use anyhow::{Context, Result};
use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use reqwest::blocking::Client;
use std::{fs, path::Path, time::Duration};
use tracing::info;
use url::Url;

static BASE_URL: &str = "http://www.tianqihoubao.com/lishi/";

static USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Raw bytes of one month page plus the encoding sniffed from them.
#[derive(Debug)]
pub struct MonthPage {
    pub bytes: Vec<u8>,
    pub encoding: &'static Encoding,
}

/// Build the blocking client used for all month-page requests.
pub fn build_client() -> Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .context("building HTTP client")
}

/// URL of the monthly history page for `city`, e.g.
/// `http://www.tianqihoubao.com/lishi/shenzhen/month/202401.html`.
pub fn month_url(city: &str, year_month: &str) -> Result<Url> {
    let base = Url::parse(BASE_URL)?;
    base.join(&format!("{}/month/{}.html", city, year_month))
        .with_context(|| format!("building month URL for {}{}", city, year_month))
}

/// Fetch one month page, sniff its encoding and keep a raw copy under
/// `out_dir` as `{city}{YYYYMM}.html` for debugging.
///
/// Non-2xx responses and transport errors surface as `Err`; the caller
/// decides whether that month matters.
pub fn fetch_month_page(
    client: &Client,
    city: &str,
    year_month: &str,
    out_dir: &Path,
) -> Result<MonthPage> {
    let url = month_url(city, year_month)?;
    let resp = client
        .get(url.as_str())
        .send()
        .with_context(|| format!("requesting {}", url))?
        .error_for_status()
        .with_context(|| format!("fetching {}", url))?;
    let bytes = resp
        .bytes()
        .with_context(|| format!("reading body of {}", url))?
        .to_vec();

    let mut detector = EncodingDetector::new();
    detector.feed(&bytes, true);
    let encoding = detector.guess(None, true);
    info!(year_month, encoding = encoding.name(), "detected page encoding");

    let debug_path = out_dir.join(format!("{}{}.html", city, year_month));
    fs::write(&debug_path, &bytes)
        .with_context(|| format!("writing debug page {}", debug_path.display()))?;

    Ok(MonthPage { bytes, encoding })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_url_matches_site_layout() {
        let url = month_url("shenzhen", "202401").unwrap();
        assert_eq!(
            url.as_str(),
            "http://www.tianqihoubao.com/lishi/shenzhen/month/202401.html"
        );
    }

    // "天气后报深圳历史天气预报查询最高气温最低气温风力风向天气状况" in GBK
    const GBK_TITLE: &[u8] = &[
        0xCC, 0xEC, 0xC6, 0xF8, 0xBA, 0xF3, 0xB1, 0xA8, 0xC9, 0xEE, 0xDB, 0xDA, 0xC0, 0xFA, 0xCA,
        0xB7, 0xCC, 0xEC, 0xC6, 0xF8, 0xD4, 0xA4, 0xB1, 0xA8, 0xB2, 0xE9, 0xD1, 0xAF, 0xD7, 0xEE,
        0xB8, 0xDF, 0xC6, 0xF8, 0xCE, 0xC2, 0xD7, 0xEE, 0xB5, 0xCD, 0xC6, 0xF8, 0xCE, 0xC2, 0xB7,
        0xE7, 0xC1, 0xA6, 0xB7, 0xE7, 0xCF, 0xF2, 0xCC, 0xEC, 0xC6, 0xF8, 0xD7, 0xB4, 0xBF, 0xF6,
    ];

    #[test]
    fn sniffs_gbk_from_page_bytes() {
        let mut bytes = b"<html><head><title>".to_vec();
        for _ in 0..3 {
            bytes.extend_from_slice(GBK_TITLE);
        }
        bytes.extend_from_slice(b"</title></head><body></body></html>");

        let mut detector = EncodingDetector::new();
        detector.feed(&bytes, true);
        let encoding = detector.guess(None, true);
        assert_eq!(encoding, encoding_rs::GBK);

        let (text, _, had_errors) = encoding.decode(&bytes);
        assert!(!had_errors);
        assert!(text.contains("深圳历史天气"));
    }
}
