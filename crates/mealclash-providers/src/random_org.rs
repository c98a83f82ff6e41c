//! random.org-backed source.
//!
//! Fetches one two-decimal fraction per roll from the random.org
//! `decimal-fractions` plain-text endpoint.

use std::time::Duration;

use tracing::debug;

use mealclash_core::error::RandomError;
use mealclash_core::traits::RandomSource;

const DEFAULT_BASE_URL: &str = "https://www.random.org";
const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Random source that asks random.org for each roll.
pub struct RandomOrg {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl RandomOrg {
    pub fn new(base_url: Option<String>, timeout_secs: Option<u64>) -> Result<Self, RandomError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)))
            .build()
            .map_err(|e| RandomError::Network(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }
}

impl RandomSource for RandomOrg {
    fn roll(&self) -> Result<f64, RandomError> {
        let url = format!(
            "{}/decimal-fractions/?num=1&dec=2&col=1&format=plain&rnd=new",
            self.base_url
        );
        let body = self
            .client
            .get(&url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.text())
            .map_err(|e| RandomError::Network(e.to_string()))?;

        let trimmed = body.trim();
        let value: f64 = trimmed
            .parse()
            .map_err(|_| RandomError::Malformed(trimmed.to_string()))?;
        if !(0.0..1.0).contains(&value) {
            return Err(RandomError::OutOfRange(value));
        }

        debug!(value, "fetched random.org roll");
        Ok(value)
    }
}
