use std::time::Duration;

use futures_util::StreamExt;
use reporter_core::{ApiError, RepositoryModel};
use reporter_logging::{reporter_debug, reporter_info, reporter_warn};

use crate::{FetchError, RepositoryDecoder};

pub const DEFAULT_ENDPOINT: &str = "https://api.github.com/users/raywenderlich";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub endpoint: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

/// Source of the repository list. One call is one attempt; there is no retry.
#[async_trait::async_trait]
pub trait RepositoryFetcher: Send + Sync {
    async fn fetch(
        &self,
        decoder: &dyn RepositoryDecoder,
    ) -> Result<Vec<RepositoryModel>, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    settings: FetchSettings,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, FetchError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(FetchError::from)
    }

    async fn download(&self) -> Result<Vec<u8>, FetchError> {
        let url = reqwest::Url::parse(&self.settings.endpoint)
            .map_err(|err| FetchError::InvalidUrl(format!("{}: {err}", self.settings.endpoint)))?;
        let client = self.build_client()?;

        let response = client.get(url).send().await?;
        // No status check: an error body is handed to the decoder like any other.
        reporter_debug!(
            "GET {} -> {}",
            self.settings.endpoint,
            response.status()
        );

        let max_bytes = self.settings.max_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(FetchError::TooLarge {
                    max_bytes,
                    actual: content_len,
                });
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(FetchError::TooLarge {
                    max_bytes,
                    actual: next_len,
                });
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }
}

#[async_trait::async_trait]
impl RepositoryFetcher for ReqwestFetcher {
    async fn fetch(
        &self,
        decoder: &dyn RepositoryDecoder,
    ) -> Result<Vec<RepositoryModel>, ApiError> {
        let result = match self.download().await {
            Ok(bytes) => decoder.decode(&bytes).map_err(FetchError::from),
            Err(err) => Err(err),
        };

        match result {
            Ok(repositories) => {
                reporter_info!(
                    "Fetched {} repositories from {}",
                    repositories.len(),
                    self.settings.endpoint
                );
                Ok(repositories)
            }
            Err(err) => {
                reporter_warn!("Repository fetch from {} failed: {}", self.settings.endpoint, err);
                Err(err.into())
            }
        }
    }
}
