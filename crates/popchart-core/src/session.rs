// File: crates/popchart-core/src/session.rs
// Summary: Drives a `ChartState`: dispatches actions, runs their effects (fetches, timer) and
// feeds fetch results and timer ticks back in from a single event channel.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, error};

use crate::chart_config::BarChartConfig;
use crate::config::Config;
use crate::fetch::{FetchController, FetchResult, PopulationSource};
use crate::playback::PlaybackTimer;
use crate::state::{Action, ChartState, Effect};

/// Everything that arrives from background threads.
#[derive(Debug)]
pub enum SessionEvent {
    Fetched(FetchResult),
    /// Carries the generation of the timer run that sent it.
    Tick(u64),
}

impl From<FetchResult> for SessionEvent {
    fn from(result: FetchResult) -> Self {
        SessionEvent::Fetched(result)
    }
}

pub struct Session<S: PopulationSource + 'static> {
    state: ChartState,
    fetcher: FetchController<S, SessionEvent>,
    timer: PlaybackTimer,
    /// Bumped on every timer start and cancel; ticks from older runs are dropped.
    timer_generation: u64,
    events_tx: Sender<SessionEvent>,
    events: Receiver<SessionEvent>,
}

impl<S: PopulationSource + 'static> Session<S> {
    /// Build the session and issue the first fetch for the initial year.
    pub fn new(config: &Config, source: S) -> Self {
        let (events_tx, events) = mpsc::channel();
        let mut session = Self {
            state: ChartState::new(config),
            fetcher: FetchController::new(Arc::new(source), events_tx.clone()),
            timer: PlaybackTimer::new(),
            timer_generation: 0,
            events_tx,
            events,
        };
        let effects = session.state.initial_effects();
        session.run(effects);
        session
    }

    pub fn state(&self) -> &ChartState {
        &self.state
    }

    pub fn source(&self) -> &S {
        self.fetcher.source()
    }

    pub fn chart(&self) -> Option<BarChartConfig> {
        self.state.chart()
    }

    pub fn timer_running(&self) -> bool {
        self.timer.is_running()
    }

    pub fn dispatch(&mut self, action: Action) {
        let effects = self.state.apply(action);
        self.run(effects);
    }

    /// Handle every event already queued without blocking. Returns how many were handled.
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;
        loop {
            match self.events.try_recv() {
                Ok(event) => {
                    self.handle(event);
                    handled += 1;
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => return handled,
            }
        }
    }

    /// Block up to `timeout` for one event and handle it. Returns `false` on timeout.
    pub fn wait_event(&mut self, timeout: Duration) -> bool {
        match self.events.recv_timeout(timeout) {
            Ok(event) => {
                self.handle(event);
                true
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => false,
        }
    }

    /// Wait until the newest issued request has been answered (or `timeout` passes).
    /// Returns `true` when nothing is left in flight.
    pub fn settle(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.state.is_loading() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() || !self.wait_event(remaining) {
                return !self.state.is_loading();
            }
        }
        true
    }

    fn handle(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::Fetched(FetchResult { id, query, outcome }) => {
                debug!(%id, year = query.year, ok = outcome.is_ok(), "fetch completed");
                self.dispatch(Action::DataFetched { id, outcome });
            }
            SessionEvent::Tick(generation) if generation == self.timer_generation => {
                self.dispatch(Action::Tick)
            }
            SessionEvent::Tick(generation) => {
                debug!(generation, current = self.timer_generation, "tick from a cancelled timer dropped");
            }
        }
    }

    fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Fetch(id, query) => self.fetcher.request(id, query),
                Effect::StartTimer(interval) => {
                    self.timer_generation += 1;
                    let generation = self.timer_generation;
                    let tx = self.events_tx.clone();
                    let started = self.timer.start(interval, move || {
                        if tx.send(SessionEvent::Tick(generation)).is_err() {
                            debug!("tick after session closed");
                        }
                    });
                    if let Err(e) = started {
                        error!("failed to start playback timer: {e}");
                        let effects = self.state.apply(Action::StopPlayback);
                        self.run(effects);
                    }
                }
                Effect::CancelTimer => {
                    self.timer_generation += 1;
                    self.timer.cancel();
                }
            }
        }
    }
}
