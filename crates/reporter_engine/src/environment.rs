use std::sync::Arc;

use reporter_core::{ApiError, RepositoryModel};

use crate::{
    FetchSettings, JsonDecoder, RepositoryDecoder, RepositoryFetcher, ReqwestFetcher, StubFetcher,
};

/// Capabilities the engine needs, chosen once at start-up.
#[derive(Clone)]
pub struct Environment {
    pub fetcher: Arc<dyn RepositoryFetcher>,
    pub decoder: Arc<dyn RepositoryDecoder>,
}

impl Environment {
    pub fn live(settings: FetchSettings) -> Self {
        Self {
            fetcher: Arc::new(ReqwestFetcher::new(settings)),
            decoder: Arc::new(JsonDecoder),
        }
    }

    pub fn stub() -> Self {
        Self {
            fetcher: Arc::new(StubFetcher),
            decoder: Arc::new(JsonDecoder),
        }
    }

    /// Runs the fetcher with this environment's decoder.
    pub async fn fetch(&self) -> Result<Vec<RepositoryModel>, ApiError> {
        self.fetcher.fetch(self.decoder.as_ref()).await
    }
}
