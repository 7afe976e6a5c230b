use reporter_core::{ApiError, RepositoryModel};

use crate::DecodeError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    RepositoriesLoaded(Result<Vec<RepositoryModel>, ApiError>),
}

/// Detailed fetch failure, logged at the fetcher boundary and then reduced to
/// [`ApiError::DownloadError`].
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("invalid endpoint url: {0}")]
    InvalidUrl(String),
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("response too large (max {max_bytes}, actual {actual})")]
    TooLarge { max_bytes: u64, actual: u64 },
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl From<FetchError> for ApiError {
    fn from(_: FetchError) -> Self {
        ApiError::DownloadError
    }
}
