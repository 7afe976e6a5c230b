//! Reporter core: pure state machine and view-model helpers.
mod effect;
mod model;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use model::{ApiError, RepositoryModel};
pub use msg::Msg;
pub use state::{AppState, LoadStatus};
pub use update::update;
pub use view_model::{AppViewModel, RepositoryRowView};
