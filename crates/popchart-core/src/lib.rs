// File: crates/popchart-core/src/lib.rs
// Summary: Core library entry point; exports the population chart state machine, data fetching,
// chart config building and rendering.

pub mod chart;
pub mod chart_config;
pub mod color;
pub mod config;
pub mod controls;
pub mod fetch;
pub mod format;
pub mod geometry;
pub mod grid;
pub mod playback;
pub mod query;
pub mod record;
pub mod region;
pub mod scale;
pub mod session;
pub mod state;
pub mod text;
pub mod theme;
pub mod types;

pub use chart::{BarChart, RenderOptions};
pub use chart_config::{build_bar_chart, BarChartConfig};
pub use color::Rgba;
pub use config::{Config, ConfigError};
pub use fetch::{FetchError, FetchResult, HttpSource, PopulationSource, RequestId};
pub use playback::PlaybackTimer;
pub use query::BarchartQuery;
pub use record::PopulationRecord;
pub use region::Region;
pub use session::{Session, SessionEvent};
pub use state::{Action, ChartState, Effect, Playback};
pub use theme::Theme;
