// src/core/net.rs
// Page fetching. Everything above this layer only sees `PageSource`, so the
// scrape pipeline can run against saved pages in tests.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::{SITE, TIMEOUT_SECS, USER_AGENT};
use crate::error::{Error, Result};

/// Anything that can turn a URL into page markup.
pub trait PageSource: Send + Sync {
    fn fetch(&self, url: &str) -> Result<String>;
}

/// Live HTTPS fetcher.
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .build()
            .map_err(|source| Error::Fetch { url: s!(SITE), source })?;
        Ok(Self { client })
    }
}

impl PageSource for HttpSource {
    fn fetch(&self, url: &str) -> Result<String> {
        let fetch_err = |source| Error::Fetch { url: s!(url), source };

        let resp = self.client.get(url).send().map_err(fetch_err)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status { url: s!(url), status: status.as_u16() });
        }
        let body = resp.bytes().map_err(fetch_err)?;
        logd!("GET {url} -> {} bytes", body.len());

        // Pages are nominally UTF-8; undecodable bytes are not worth failing over.
        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

/// Join a site-relative page reference (as found in option values) onto the
/// site root. Leading slashes on `page` are dropped so it never replaces `base`.
pub fn page_url(base: &str, page: &str) -> String {
    let page = page.trim_start_matches('/');
    join!(base.trim_end_matches('/'), "/", page)
}
