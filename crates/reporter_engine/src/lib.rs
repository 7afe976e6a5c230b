//! Reporter engine: repository fetching and effect execution.
mod decode;
mod engine;
mod environment;
mod fetch;
mod stub;
mod types;

pub use decode::{DecodeError, JsonDecoder, RepositoryDecoder};
pub use engine::{ChannelEventSink, EngineHandle, EventSink};
pub use environment::Environment;
pub use fetch::{FetchSettings, RepositoryFetcher, ReqwestFetcher, DEFAULT_ENDPOINT};
pub use stub::{sample_repositories, FailingFetcher, StubFetcher};
pub use types::{EngineEvent, FetchError};
