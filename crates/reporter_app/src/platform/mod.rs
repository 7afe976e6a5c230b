mod app;
mod command;
mod effects;
pub(crate) mod logging;
mod render;

pub use app::run_app;
