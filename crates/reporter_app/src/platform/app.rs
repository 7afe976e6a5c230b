use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use reporter_core::{update, AppState, Effect, Msg};
use reporter_engine::Environment;
use reporter_logging::{reporter_info, reporter_warn};

use super::command::{parse_command, Command, HELP};
use super::effects::EffectRunner;
use super::logging;
use super::render::render;
use crate::cli::Cli;

/// Everything the driver loop reacts to, funnelled through one channel so
/// reducer calls never overlap.
#[derive(Debug)]
pub enum AppEvent {
    Msg(Msg),
    Input(String),
    InputClosed,
}

pub fn run_app(cli: Cli) -> anyhow::Result<()> {
    logging::initialize(&cli.log_settings());

    let environment = if cli.offline {
        reporter_info!("Offline mode: serving sample repositories");
        Environment::stub()
    } else {
        reporter_info!("Fetching repositories from {}", cli.endpoint);
        Environment::live(cli.fetch_settings())
    };

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let effects =
        EffectRunner::new(environment, event_tx.clone()).context("failed to start fetch engine")?;
    spawn_input_reader(event_tx).context("failed to start input reader")?;

    let mut store = Store::new(effects, io::stdout());
    store.print_line(HELP);
    store.start();

    for event in event_rx {
        if !store.handle_event(event) {
            break;
        }
    }

    reporter_info!("Shutting down");
    Ok(())
}

fn spawn_input_reader(events: mpsc::Sender<AppEvent>) -> io::Result<()> {
    thread::Builder::new()
        .name("reporter-input".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                match line {
                    Ok(line) => {
                        if events.send(AppEvent::Input(line)).is_err() {
                            return;
                        }
                    }
                    Err(err) => {
                        reporter_warn!("Failed to read input: {}", err);
                        break;
                    }
                }
            }
            let _ = events.send(AppEvent::InputClosed);
        })?;
    Ok(())
}

/// Owns the application state and applies every message to it.
///
/// Input typed while a fetch is in flight is held back and replayed once the
/// result has been applied, so commands always see the list they were typed
/// against.
struct Store<W: Write> {
    state: AppState,
    effects: EffectRunner,
    out: W,
    in_flight: usize,
    deferred: VecDeque<String>,
    input_closed: bool,
}

impl<W: Write> Store<W> {
    fn new(effects: EffectRunner, out: W) -> Self {
        Self {
            state: AppState::new(),
            effects,
            out,
            in_flight: 0,
            deferred: VecDeque::new(),
            input_closed: false,
        }
    }

    /// Draws the initial screen and signals that it appeared.
    fn start(&mut self) {
        self.render();
        self.dispatch(Msg::OnAppear);
    }

    /// Returns `false` once the loop should stop.
    fn handle_event(&mut self, event: AppEvent) -> bool {
        match event {
            AppEvent::Msg(msg) => {
                self.dispatch(msg);
                if !self.replay_deferred() {
                    return false;
                }
            }
            AppEvent::Input(line) => {
                if self.in_flight > 0 {
                    self.deferred.push_back(line);
                } else if !self.handle_input(&line) {
                    return false;
                }
            }
            AppEvent::InputClosed => self.input_closed = true,
        }
        !(self.input_closed && self.in_flight == 0 && self.deferred.is_empty())
    }

    fn dispatch(&mut self, msg: Msg) {
        if matches!(msg, Msg::DataLoaded(_)) {
            self.in_flight = self.in_flight.saturating_sub(1);
        }
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let dirty = state.consume_dirty();
        self.state = state;
        if dirty {
            self.render();
        }
        self.in_flight += effects
            .iter()
            .filter(|effect| matches!(effect, Effect::FetchRepositories))
            .count();
        self.effects.run(effects);
    }

    /// Runs held-back input until a command starts another fetch.
    /// Returns `false` when a replayed command asked to quit.
    fn replay_deferred(&mut self) -> bool {
        while self.in_flight == 0 {
            let Some(line) = self.deferred.pop_front() else {
                break;
            };
            if !self.handle_input(&line) {
                return false;
            }
        }
        true
    }

    /// Returns `false` when the user asked to quit.
    fn handle_input(&mut self, line: &str) -> bool {
        match parse_command(line) {
            Ok(Command::Quit) => return false,
            Ok(Command::Reload) => self.dispatch(Msg::OnAppear),
            Ok(Command::ToggleFavorite(position)) => {
                match self.state.repositories().get(position - 1).cloned() {
                    Some(repository) => self.dispatch(Msg::FavoriteToggled(repository)),
                    None => self.print_line(&format!("no repository #{position}")),
                }
            }
            Ok(Command::Help) => self.print_line(HELP),
            Err(hint) => self.print_line(&hint),
        }
        true
    }

    fn render(&mut self) {
        let text = render(&self.state.view());
        let _ = write!(self.out, "{text}");
        let _ = self.out.flush();
    }

    fn print_line(&mut self, text: &str) {
        let _ = writeln!(self.out, "{text}");
        let _ = self.out.flush();
    }
}
