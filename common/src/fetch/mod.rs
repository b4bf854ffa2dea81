use eyre::{bail, Result, WrapErr};
use lazy_static::lazy_static;
use log::trace;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, DNT, USER_AGENT};
use std::fs;
use std::path::Path;
use std::time::Instant;

lazy_static! {
    pub static ref CLIENT: reqwest::Client = reqwest::Client::new();
    static ref HEADERS: HeaderMap = [
        (
            USER_AGENT,
            HeaderValue::from_static(
                "Mozilla/5.0 (X11; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/109.0"
            )
        ),
        (
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"
            )
        ),
        (ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5")),
        (DNT, HeaderValue::from_static("1")),
    ]
    .iter()
    .cloned()
    .collect();
}

/// Raw page HTML plus the address it came from, when known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub html: String,
    pub url: Option<String>,
}

pub fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

pub async fn fetch_page(url: &str) -> Result<String> {
    let start = Instant::now();
    let res = CLIENT.get(url).headers(HEADERS.clone()).send().await?;
    trace!(
        "Page request took {:?}, code {}",
        start.elapsed(),
        res.status()
    );
    if !res.status().is_success() {
        bail!(
            "Page request for {} returned non-success error code: {}",
            url,
            res.status()
        );
    }
    Ok(res.text().await?)
}

/// A saved page on disk, or a live one when `source` is a URL.
pub async fn load(source: &str) -> Result<Source> {
    if is_remote(source) {
        return Ok(Source {
            html: fetch_page(source).await?,
            url: Some(source.to_string()),
        });
    }
    let path = Path::new(source);
    let html = fs::read_to_string(path).wrap_err_with(|| format!("Could not read {:?}", path))?;
    Ok(Source { html, url: None })
}
