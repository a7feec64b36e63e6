// File: crates/popchart-core/src/state.rs
// Summary: Chart UI state and its reducer. Transitions are pure; side effects (fetching,
// timers) come back as `Effect`s for a driver to execute.

use std::time::Duration;

use tracing::{debug, error, warn};

use crate::chart_config::{build_bar_chart, BarChartConfig};
use crate::config::Config;
use crate::fetch::{FetchOutcome, RequestId};
use crate::query::BarchartQuery;
use crate::record::PopulationRecord;
use crate::region::Region;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Playback {
    #[default]
    Stopped,
    Playing,
}

#[derive(Debug)]
pub enum Action {
    ToggleRegion(Region),
    /// Slider input; clamped into the year bounds.
    SetYear(i32),
    StartPlayback,
    StopPlayback,
    /// The play/pause button: start when stopped, stop when playing.
    TogglePlayback,
    /// One time-lapse step.
    Tick,
    DataFetched { id: RequestId, outcome: FetchOutcome },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    Fetch(RequestId, BarchartQuery),
    StartTimer(Duration),
    CancelTimer,
}

#[derive(Clone, Debug)]
pub struct ChartState {
    year: i32,
    year_min: i32,
    year_max: i32,
    limit: u32,
    tick_interval: Duration,
    deactivated: Vec<Region>,
    data: Vec<PopulationRecord>,
    playback: Playback,
    next_request: u64,
    latest_request: Option<RequestId>,
    answered_request: Option<RequestId>,
}

impl Default for ChartState {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl ChartState {
    /// Starts at `year_min`, all regions active, playback stopped, no data.
    pub fn new(config: &Config) -> Self {
        Self {
            year: config.year_min,
            year_min: config.year_min,
            year_max: config.year_max,
            limit: config.limit,
            tick_interval: config.tick_interval(),
            deactivated: Vec::new(),
            data: Vec::new(),
            playback: Playback::Stopped,
            next_request: 0,
            latest_request: None,
            answered_request: None,
        }
    }

    pub fn year(&self) -> i32 { self.year }
    pub fn year_bounds(&self) -> (i32, i32) { (self.year_min, self.year_max) }
    pub fn playback(&self) -> Playback { self.playback }
    pub fn is_playing(&self) -> bool { self.playback == Playback::Playing }
    pub fn deactivated(&self) -> &[Region] { &self.deactivated }
    pub fn data(&self) -> &[PopulationRecord] { &self.data }
    pub fn latest_request(&self) -> Option<RequestId> { self.latest_request }

    /// The newest request has not been answered yet.
    pub fn is_loading(&self) -> bool {
        self.latest_request != self.answered_request
    }

    pub fn is_active(&self, region: Region) -> bool {
        !self.deactivated.contains(&region)
    }

    /// The request matching the current filters.
    pub fn query(&self) -> BarchartQuery {
        BarchartQuery::from_filters(self.year, &self.deactivated, self.limit)
    }

    /// Chart input for the current data; `None` while there is nothing to draw.
    pub fn chart(&self) -> Option<BarChartConfig> {
        build_bar_chart(self.year, &self.data)
    }

    /// Effects to run once when the component mounts: the first fetch.
    pub fn initial_effects(&mut self) -> Vec<Effect> {
        vec![self.issue_fetch()]
    }

    /// Year following `year` in the time-lapse; wraps from the last year back to the first.
    pub fn next_year(&self, year: i32) -> i32 {
        if year < self.year_max { year + 1 } else { self.year_min }
    }

    pub fn apply(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::ToggleRegion(region) => {
                if let Some(pos) = self.deactivated.iter().position(|r| *r == region) {
                    self.deactivated.remove(pos);
                } else {
                    self.deactivated.push(region);
                }
                debug!(%region, active = self.is_active(region), "region toggled");
                vec![self.issue_fetch()]
            }
            Action::SetYear(year) => {
                let clamped = year.clamp(self.year_min, self.year_max);
                if clamped != year {
                    debug!(requested = year, clamped, "year outside bounds");
                }
                self.change_year(clamped)
            }
            Action::StartPlayback => {
                if self.is_playing() {
                    return Vec::new();
                }
                self.playback = Playback::Playing;
                debug!(year = self.year, "playback started");
                vec![Effect::StartTimer(self.tick_interval)]
            }
            Action::StopPlayback => {
                if !self.is_playing() {
                    return Vec::new();
                }
                self.playback = Playback::Stopped;
                debug!(year = self.year, "playback stopped");
                vec![Effect::CancelTimer]
            }
            Action::TogglePlayback => {
                let next = if self.is_playing() { Action::StopPlayback } else { Action::StartPlayback };
                self.apply(next)
            }
            Action::Tick => {
                // A tick already queued when the timer was cancelled.
                if !self.is_playing() {
                    debug!("tick while stopped; ignored");
                    return Vec::new();
                }
                let next = self.next_year(self.year);
                self.change_year(next)
            }
            Action::DataFetched { id, outcome } => {
                self.accept(id, outcome);
                Vec::new()
            }
        }
    }

    fn change_year(&mut self, year: i32) -> Vec<Effect> {
        if year == self.year {
            return Vec::new();
        }
        self.year = year;
        vec![self.issue_fetch()]
    }

    fn issue_fetch(&mut self) -> Effect {
        self.next_request += 1;
        let id = RequestId(self.next_request);
        self.latest_request = Some(id);
        Effect::Fetch(id, self.query())
    }

    fn accept(&mut self, id: RequestId, outcome: FetchOutcome) {
        if self.latest_request != Some(id) {
            debug!(%id, latest = ?self.latest_request, "stale response ignored");
            return;
        }
        self.answered_request = Some(id);
        match outcome {
            Ok(rows) if rows.is_empty() => {
                warn!(%id, year = self.year, "empty data received; keeping previous chart");
            }
            Ok(rows) => {
                debug!(%id, rows = rows.len(), "year data replaced");
                self.data = rows;
            }
            Err(e) => {
                error!(%id, "error fetching data: {e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetch_id(effects: &[Effect]) -> RequestId {
        match effects {
            [Effect::Fetch(id, _)] => *id,
            other => panic!("expected a single fetch, got {other:?}"),
        }
    }

    #[test]
    fn initial_state() {
        let s = ChartState::default();
        assert_eq!(s.year(), 1950);
        assert_eq!(s.playback(), Playback::Stopped);
        assert!(Region::ALL.iter().all(|r| s.is_active(*r)));
        assert!(s.chart().is_none());
    }

    #[test]
    fn setting_same_year_does_not_refetch() {
        let mut s = ChartState::default();
        assert!(s.apply(Action::SetYear(1950)).is_empty());
        assert_eq!(s.apply(Action::SetYear(1960)).len(), 1);
    }

    #[test]
    fn toggle_playback_alternates() {
        let mut s = ChartState::default();
        assert_eq!(s.apply(Action::TogglePlayback), vec![Effect::StartTimer(Duration::from_secs(1))]);
        assert_eq!(s.apply(Action::TogglePlayback), vec![Effect::CancelTimer]);
        assert!(!s.is_playing());
    }

    #[test]
    fn request_ids_increase() {
        let mut s = ChartState::default();
        let a = fetch_id(&s.initial_effects());
        let b = fetch_id(&s.apply(Action::ToggleRegion(Region::Asia)));
        assert!(b > a);
        assert_eq!(s.latest_request(), Some(b));
    }
}
