use crate::{LoadStatus, RepositoryModel};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub repositories: Vec<RepositoryRowView>,
    pub favorites: Vec<RepositoryModel>,
    pub load_status: LoadStatus,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRowView {
    pub repository: RepositoryModel,
    pub is_favorite: bool,
}
