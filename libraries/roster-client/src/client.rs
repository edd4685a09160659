//! HTTP client for the records endpoint.

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::source::RecordSource;
use async_trait::async_trait;
use reqwest::Client;
use roster_core::{normalize, RawRecord, UserRecord};
use tracing::debug;
use url::Url;

/// Client for the remote record endpoint.
///
/// # Example
///
/// ```ignore
/// use roster_client::{ClientConfig, RosterClient};
///
/// let client = RosterClient::new(ClientConfig::new("http://localhost:3000/"))?;
/// let users = client.fetch_users().await?;
/// println!("Fetched {} users", users.len());
/// ```
#[derive(Debug, Clone)]
pub struct RosterClient {
    http: Client,
    url: Url,
}

impl RosterClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let raw_url = config.base_url.trim();
        if raw_url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        if !raw_url.starts_with("http://") && !raw_url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let url = Url::parse(raw_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;

        let mut builder = Client::builder().user_agent(format!(
            "roster/{}",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self { http, url })
    }

    /// The endpoint this client fetches from.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Fetch and decode the raw record array.
    ///
    /// Issues exactly one GET; there is no retry.
    pub async fn fetch_raw(&self) -> Result<Vec<RawRecord>> {
        debug!(url = %self.url, "Fetching user records");

        let response = self.http.get(self.url.clone()).send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                ClientError::Unreachable(e.to_string())
            } else {
                ClientError::Request(e)
            }
        })?;

        let status = response.status();

        if status.is_success() {
            let records: Vec<RawRecord> = response.json().await.map_err(|e| {
                ClientError::ParseError(format!("Failed to parse user records: {}", e))
            })?;

            debug!(records = records.len(), "Fetched user records");
            Ok(records)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    /// Fetch the raw records and normalize them.
    pub async fn fetch_users(&self) -> Result<Vec<UserRecord>> {
        let raw = self.fetch_raw().await?;
        let users = normalize(&raw)?;

        debug!(
            received = raw.len(),
            retained = users.len(),
            "Normalized user records"
        );

        Ok(users)
    }
}

#[async_trait]
impl RecordSource for RosterClient {
    async fn fetch_records(&self) -> Result<Vec<RawRecord>> {
        self.fetch_raw().await
    }
}
