use std::time::Duration;

use reqwest::{Client, StatusCode};

/// Failure classes for one gateway call. Everything else that can go wrong
/// in a reply cycle is caught at the handler boundary as an unexpected error.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("fact API returned status {code} for URL: {url}")]
    Status { code: StatusCode, url: String },
    #[error("network error during fact API call: {0}")]
    Network(#[from] reqwest::Error),
}

#[derive(Clone, Debug)]
pub struct FactClient {
    client: Client,
    base_url: String,
}

impl FactClient {
    pub fn create(base_url: &str) -> anyhow::Result<Self> {
        Ok(Self {
            client: Client::builder().timeout(Duration::from_secs(10)).build()?,
            base_url: base_url.to_string(),
        })
    }

    fn fact_url(&self, number: &str) -> String {
        format!("{}{number}", self.base_url)
    }

    /// One GET, no retry. The body is an opaque plain-text fact.
    pub async fn fetch_fact(&self, number: &str) -> Result<String, QueryError> {
        let url = self.fact_url(number);
        let response = self.client.get(&url).send().await?;

        if response.status() != StatusCode::OK {
            return Err(QueryError::Status {
                code: response.status(),
                url,
            });
        }

        Ok(response.text().await?)
    }
}
