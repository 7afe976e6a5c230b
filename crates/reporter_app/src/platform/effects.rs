use std::io;
use std::sync::{mpsc, Arc};

use reporter_core::{Effect, Msg};
use reporter_engine::{EngineEvent, EngineHandle, Environment, EventSink};
use reporter_logging::{reporter_info, reporter_warn};

use super::app::AppEvent;

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(environment: Environment, events: mpsc::Sender<AppEvent>) -> io::Result<Self> {
        let engine = EngineHandle::new(environment, Arc::new(AppEventSink { events }))?;
        Ok(Self { engine })
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchRepositories => {
                    reporter_info!("FetchRepositories requested");
                    self.engine.fetch_repositories();
                }
            }
        }
    }
}

/// Feeds engine results back into the driver queue as reducer messages.
struct AppEventSink {
    events: mpsc::Sender<AppEvent>,
}

impl EventSink for AppEventSink {
    fn emit(&self, event: EngineEvent) {
        let msg = match event {
            EngineEvent::RepositoriesLoaded(result) => {
                if let Err(err) = &result {
                    reporter_warn!("Repository load failed: {}", err);
                }
                Msg::DataLoaded(result)
            }
        };
        let _ = self.events.send(AppEvent::Msg(msg));
    }
}
