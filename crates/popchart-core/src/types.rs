// File: crates/popchart-core/src/types.rs
// Summary: Shared types and constants (year bounds, request limits, surface sizes, paddings).

use std::time::Duration;

/// First year the aggregation API has data for.
pub const YEAR_MIN: i32 = 1950;
/// Last year the aggregation API has data for.
pub const YEAR_MAX: i32 = 2021;
/// Rows requested per year; the API ranks and truncates server-side.
pub const DEFAULT_LIMIT: u32 = 12;
/// Time-lapse cadence.
pub const TICK_INTERVAL: Duration = Duration::from_millis(1000);

/// Default surface width in pixels.
pub const WIDTH: i32 = 1200;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 720;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    /// Wide left gutter: horizontal bars carry country names on the category axis.
    fn default() -> Self {
        Self::new(180, 48, 24, 48)
    }
}
