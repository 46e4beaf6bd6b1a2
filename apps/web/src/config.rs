use anyhow::{bail, Context, Result};
use axum::http::HeaderValue;

use crate::form::limits::DEFAULT_MAX_RESOLUTION;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values abort startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Where submitted forms are sent. Relative or absolute.
    pub collage_endpoint: String,
    /// Public origin used to make embed URLs absolute, e.g. `https://example.org`.
    pub public_url: Option<String>,
    pub max_resolution: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let collage_endpoint = lookup("COLLAGE_ENDPOINT").unwrap_or_else(|| "/collage".to_string());
        if collage_endpoint.trim().is_empty() {
            bail!("COLLAGE_ENDPOINT must not be empty");
        }
        // Redirects carry the endpoint in a Location header.
        HeaderValue::from_str(&collage_endpoint)
            .context("COLLAGE_ENDPOINT must be a valid header value")?;

        let max_resolution = lookup("MAX_RESOLUTION")
            .map(|v| v.parse::<u32>())
            .transpose()
            .context("MAX_RESOLUTION must be a positive integer")?
            .unwrap_or(DEFAULT_MAX_RESOLUTION);
        if max_resolution == 0 {
            bail!("MAX_RESOLUTION must be a positive integer");
        }

        Ok(Config {
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            collage_endpoint,
            public_url: lookup("PUBLIC_URL").filter(|v| !v.trim().is_empty()),
            max_resolution,
        })
    }
}
