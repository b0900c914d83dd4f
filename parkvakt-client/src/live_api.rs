//! Live-status API client.
//!
//! Thin reqwest wrapper behind the [`LiveDataSource`] trait so the
//! runtime can be driven by a mock source in tests.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::ClientError;

const USER_AGENT: &str = concat!("parkvakt/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// The subset of the live-status document this service consumes. Entries
/// stay untyped JSON; extraction tolerates whatever shape each one has.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LiveResponse {
    #[serde(default, rename = "liveData")]
    pub live_data: Vec<serde_json::Value>,
}

/// Source of live park data, one fetch per park per tick.
#[async_trait]
pub trait LiveDataSource: Send + Sync {
    async fn fetch_live(&self, url: &str) -> Result<LiveResponse, ClientError>;
}

/// Production source backed by an HTTP client.
#[derive(Debug, Clone)]
pub struct LiveApiClient {
    client: reqwest::Client,
}

impl LiveApiClient {
    pub fn new() -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(ClientError::Build)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl LiveDataSource for LiveApiClient {
    async fn fetch_live(&self, url: &str) -> Result<LiveResponse, ClientError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                url: url.to_owned(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                url: url.to_owned(),
                status,
            });
        }

        response
            .json::<LiveResponse>()
            .await
            .map_err(|source| ClientError::Decode {
                url: url.to_owned(),
                source,
            })
    }
}
