use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        // The fetch result comes back later as `DataLoaded`; nothing changes yet.
        Msg::OnAppear => vec![Effect::FetchRepositories],
        Msg::DataLoaded(Ok(repositories)) => {
            state.replace_repositories(repositories);
            Vec::new()
        }
        Msg::DataLoaded(Err(error)) => {
            state.record_failure(error);
            Vec::new()
        }
        Msg::FavoriteToggled(repository) => {
            state.toggle_favorite(repository);
            Vec::new()
        }
    };

    (state, effects)
}
