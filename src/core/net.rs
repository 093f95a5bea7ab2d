// src/core/net.rs
// Blocking HTTP GET. The operator site is HTTPS-only, so this wraps a real
// client (reqwest + rustls) instead of a raw socket.

use std::error::Error;
use std::time::Duration;

const TIMEOUT_SECS: u64 = 30;

pub struct Client {
    http: reqwest::blocking::Client,
}

impl Client {
    /// Build the shared client. This is the only fatal failure point of a run;
    /// everything downstream degrades to per-item skips.
    pub fn new() -> Result<Self, Box<dyn Error>> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("lotto_scrape/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .build()?;
        Ok(Self { http })
    }

    /// GET a page and return the body as text. Non-2xx is an error.
    pub fn get(&self, url: &str) -> Result<String, Box<dyn Error>> {
        let resp = self.http.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(format!("HTTP error: {} {}", status, url).into());
        }
        Ok(resp.text()?)
    }
}
