use crate::{ApiError, RepositoryModel};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The repository screen became visible.
    OnAppear,
    /// A repository fetch finished.
    DataLoaded(Result<Vec<RepositoryModel>, ApiError>),
    /// User tapped the favorite button on a repository.
    FavoriteToggled(RepositoryModel),
}
