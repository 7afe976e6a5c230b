use serde::Deserialize;

/// One repository as listed by the remote API.
///
/// Fields are private so a decoded value cannot be altered afterwards; equality
/// is by value across every field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct RepositoryModel {
    name: String,
    description: String,
    stars: i64,
    forks: i64,
    language: String,
}

impl RepositoryModel {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        stars: i64,
        forks: i64,
        language: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            stars,
            forks,
            language: language.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn stars(&self) -> i64 {
        self.stars
    }

    pub fn forks(&self) -> i64 {
        self.forks
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}

/// Failure reported to the state machine by a repository fetch.
///
/// Transport, status and decode failures all collapse into `DownloadError`;
/// the underlying detail is logged where it happens and not carried here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ApiError {
    #[error("download error")]
    DownloadError,
}
