//! HTTP client for a numbersapi-compatible service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::FactsConfig;

use super::{FactClient, LookupError};

/// Fetches plain-text facts from `{base_url}/{number}`.
pub struct LiveFactClient {
    client: Client,
    base_url: String,
}

impl LiveFactClient {
    /// Build a client for `config.base_url`.
    ///
    /// Fails with [`LookupError::Unavailable`] when the base URL is not an
    /// http(s) URL, since no request could ever succeed.
    pub fn new(config: &FactsConfig) -> Result<Self, LookupError> {
        let base_url = config.base_url.trim().trim_end_matches('/');
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(LookupError::Unavailable {
                reason: format!("'{}' is not an http(s) URL", config.base_url),
            });
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, number: i64) -> String {
        format!("{}/{}", self.base_url, number)
    }
}

#[async_trait]
impl FactClient for LiveFactClient {
    fn name(&self) -> &'static str {
        "live"
    }

    async fn fetch(&self, number: i64) -> Result<String, LookupError> {
        let url = self.url_for(number);
        tracing::debug!(url = %url, "Requesting number fact");

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            tracing::error!(status = %status, error = %body, "Fact service error");
            return Err(LookupError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        let text = text.trim();
        if text.is_empty() {
            return Err(LookupError::Empty);
        }

        tracing::debug!(status = %status, "Fact received from service");
        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_strips_trailing_slash() {
        let config = FactsConfig {
            base_url: "http://numbers.local/".to_string(),
            ..FactsConfig::default()
        };
        let client = LiveFactClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://numbers.local");
        assert_eq!(client.url_for(42), "http://numbers.local/42");
        assert_eq!(client.url_for(-1), "http://numbers.local/-1");
    }

    #[test]
    fn non_http_base_url_is_unavailable() {
        let config = FactsConfig {
            base_url: "numbersapi.com".to_string(),
            ..FactsConfig::default()
        };
        match LiveFactClient::new(&config) {
            Err(LookupError::Unavailable { reason }) => assert!(reason.contains("numbersapi.com")),
            Err(other) => panic!("Expected Unavailable, got {:?}", other),
            Ok(_) => panic!("Expected an error for a non-http base URL"),
        }
    }
}
