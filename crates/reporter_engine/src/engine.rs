use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use reporter_logging::{reporter_debug, reporter_error};

use crate::{EngineEvent, Environment};

enum EngineCommand {
    FetchRepositories,
}

/// Receives engine results. Called from runtime worker threads.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

/// Runs fetch effects on a background tokio runtime.
///
/// Every request is spawned as its own task. Overlapping requests are neither
/// merged nor cancelled, so results arrive in completion order. Dropping the
/// handle shuts the runtime down and abandons in-flight fetches.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(environment: Environment, sink: Arc<dyn EventSink>) -> io::Result<Self> {
        let runtime = tokio::runtime::Runtime::new()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();

        thread::Builder::new()
            .name("reporter-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let environment = environment.clone();
                    let sink = sink.clone();
                    runtime.spawn(async move {
                        handle_command(&environment, command, sink.as_ref()).await;
                    });
                }
                reporter_debug!("Engine command channel closed; stopping runtime");
            })?;

        Ok(Self { cmd_tx })
    }

    pub fn fetch_repositories(&self) {
        if self.cmd_tx.send(EngineCommand::FetchRepositories).is_err() {
            reporter_error!("Engine worker is gone; fetch request dropped");
        }
    }
}

async fn handle_command(environment: &Environment, command: EngineCommand, sink: &dyn EventSink) {
    match command {
        EngineCommand::FetchRepositories => {
            let result = environment.fetch().await;
            sink.emit(EngineEvent::RepositoriesLoaded(result));
        }
    }
}
