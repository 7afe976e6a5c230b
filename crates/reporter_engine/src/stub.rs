use reporter_core::{ApiError, RepositoryModel};

use crate::{RepositoryDecoder, RepositoryFetcher};

/// The fixed records served by [`StubFetcher`].
pub fn sample_repositories() -> Vec<RepositoryModel> {
    vec![
        RepositoryModel::new(
            "Repo 1",
            "This is the first repo. It has a long descriptive text which spans many lines.",
            5,
            5,
            "Swift",
        ),
        RepositoryModel::new("Repo 2", "This is another repo.", 0, 5, "Python"),
        RepositoryModel::new("Repo 3", "This is the last repo.", 5, 0, "Rust"),
    ]
}

/// Zero-network fetcher for offline runs and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubFetcher;

#[async_trait::async_trait]
impl RepositoryFetcher for StubFetcher {
    async fn fetch(
        &self,
        _decoder: &dyn RepositoryDecoder,
    ) -> Result<Vec<RepositoryModel>, ApiError> {
        Ok(sample_repositories())
    }
}

/// Fetcher that always fails with [`ApiError::DownloadError`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingFetcher;

#[async_trait::async_trait]
impl RepositoryFetcher for FailingFetcher {
    async fn fetch(
        &self,
        _decoder: &dyn RepositoryDecoder,
    ) -> Result<Vec<RepositoryModel>, ApiError> {
        Err(ApiError::DownloadError)
    }
}
