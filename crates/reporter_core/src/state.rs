use crate::view_model::{AppViewModel, RepositoryRowView};
use crate::{ApiError, RepositoryModel};

/// Outcome of the most recent fetch, kept for the view.
///
/// This sits next to the repository list rather than inside it: a failed
/// fetch leaves `repositories` exactly as it was and is only recorded here,
/// so a view that ignores this field sees a failure as "nothing new loaded".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    NotLoaded,
    Loaded {
        count: usize,
    },
    Failed(ApiError),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    repositories: Vec<RepositoryModel>,
    favorites: Vec<RepositoryModel>,
    load_status: LoadStatus,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn repositories(&self) -> &[RepositoryModel] {
        &self.repositories
    }

    pub fn favorites(&self) -> &[RepositoryModel] {
        &self.favorites
    }

    pub fn load_status(&self) -> LoadStatus {
        self.load_status
    }

    pub fn is_favorite(&self, repository: &RepositoryModel) -> bool {
        self.favorites.contains(repository)
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            repositories: self
                .repositories
                .iter()
                .map(|repository| RepositoryRowView {
                    repository: repository.clone(),
                    is_favorite: self.is_favorite(repository),
                })
                .collect(),
            favorites: self.favorites.clone(),
            load_status: self.load_status,
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn replace_repositories(&mut self, repositories: Vec<RepositoryModel>) {
        self.load_status = LoadStatus::Loaded {
            count: repositories.len(),
        };
        self.repositories = repositories;
        self.dirty = true;
    }

    pub(crate) fn record_failure(&mut self, error: ApiError) {
        self.load_status = LoadStatus::Failed(error);
        self.dirty = true;
    }

    /// Removes every entry equal to `repository` if one is present, otherwise appends it.
    pub(crate) fn toggle_favorite(&mut self, repository: RepositoryModel) {
        if self.favorites.contains(&repository) {
            self.favorites.retain(|favorite| favorite != &repository);
        } else {
            self.favorites.push(repository);
        }
        self.dirty = true;
    }

    #[cfg(test)]
    pub(crate) fn with_favorites(favorites: Vec<RepositoryModel>) -> Self {
        Self {
            favorites,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str) -> RepositoryModel {
        RepositoryModel::new(name, "", 0, 0, "Rust")
    }

    #[test]
    fn toggle_removes_every_equal_entry() {
        let a = repo("a");
        let b = repo("b");
        let mut state = AppState::with_favorites(vec![a.clone(), b.clone(), a.clone()]);

        state.toggle_favorite(a.clone());

        assert_eq!(state.favorites(), &[b]);
        assert!(!state.is_favorite(&a));
    }

    #[test]
    fn consume_dirty_clears_flag() {
        let mut state = AppState::new();
        state.toggle_favorite(repo("a"));

        assert!(state.consume_dirty());
        assert!(!state.consume_dirty());
    }
}
