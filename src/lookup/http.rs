//! HTTP lookup service
//!
//! Issues `GET <url>?<param>=<query>` and returns the JSON body.

use futures::FutureExt;
use serde_json::Value;

use super::{LookupFuture, LookupService};
use crate::config::LookupConfig;
use crate::error::LookupError;

/// Lookup endpoint reached over HTTP
#[derive(Debug, Clone)]
pub struct HttpLookup {
    client: reqwest::Client,
    url: String,
    query_param: String,
}

impl HttpLookup {
    pub fn new(url: impl Into<String>, query_param: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
            query_param: query_param.into(),
        }
    }

    /// Create a lookup from configuration
    ///
    /// Returns an error if no endpoint URL is configured.
    pub fn from_config(config: &LookupConfig) -> Result<Self, LookupError> {
        let url = config
            .url
            .as_ref()
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| {
                LookupError::NotConfigured("Missing or empty url in [lookup] config".to_string())
            })?;

        Ok(Self::new(url.clone(), config.query_param.clone()))
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn query_param(&self) -> &str {
        &self.query_param
    }
}

impl LookupService for HttpLookup {
    fn lookup(&self, query: &str) -> LookupFuture {
        let request = self
            .client
            .get(&self.url)
            .query(&[(self.query_param.as_str(), query)]);

        async move {
            let response = request
                .send()
                .await
                .map_err(|e| LookupError::Network(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                let message = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                return Err(LookupError::Status {
                    code: status.as_u16(),
                    message,
                });
            }

            response
                .json::<Value>()
                .await
                .map_err(|e| LookupError::Parse(e.to_string()))
        }
        .boxed()
    }
}
