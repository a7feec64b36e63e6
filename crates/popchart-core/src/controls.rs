// File: crates/popchart-core/src/controls.rs
// Summary: View models for the filter toggles, year slider and play/pause button.

use crate::color::Rgba;
use crate::region::Region;
use crate::state::ChartState;

#[derive(Clone, Debug, PartialEq)]
pub struct RegionToggle {
    pub region: Region,
    pub active: bool,
    /// Legend swatch; same hue as the bars.
    pub swatch: Rgba,
}

/// One slot in the strip under the slider.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SliderTick {
    Year(i32),
    Mark,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct YearSlider {
    pub min: i32,
    pub max: i32,
    pub step: i32,
    pub value: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayButton {
    pub playing: bool,
}

impl PlayButton {
    /// Label of the action the button performs next.
    pub fn label(&self) -> &'static str {
        if self.playing { "Pause" } else { "Play" }
    }

    pub fn icon(&self) -> char {
        if self.playing { '\u{23F8}' } else { '\u{25B6}' }
    }
}

/// One toggle per region in display order.
pub fn region_toggles(state: &ChartState) -> Vec<RegionToggle> {
    Region::ALL
        .into_iter()
        .map(|region| RegionToggle { region, active: state.is_active(region), swatch: region.fill_color() })
        .collect()
}

pub fn year_slider(state: &ChartState) -> YearSlider {
    let (min, max) = state.year_bounds();
    YearSlider { min, max, step: 1, value: state.year() }
}

pub fn play_button(state: &ChartState) -> PlayButton {
    PlayButton { playing: state.is_playing() }
}

/// Tick strip for `[min, max]`: both ends labeled, every fifth year from `min` labeled, the rest
/// plain marks.
pub fn slider_ticks(min: i32, max: i32) -> Vec<SliderTick> {
    (min..=max)
        .map(|year| {
            if year == min || year == max || (year - min) % 5 == 0 {
                SliderTick::Year(year)
            } else {
                SliderTick::Mark
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Action;

    #[test]
    fn ticks_label_ends_and_fifths() {
        let ticks = slider_ticks(1950, 2021);
        assert_eq!(ticks.len(), 72);
        assert_eq!(ticks[0], SliderTick::Year(1950));
        assert_eq!(ticks[1], SliderTick::Mark);
        assert_eq!(ticks[5], SliderTick::Year(1955));
        assert_eq!(ticks[70], SliderTick::Year(2020));
        assert_eq!(ticks[71], SliderTick::Year(2021));
    }

    #[test]
    fn toggles_follow_state() {
        let mut state = ChartState::default();
        state.apply(Action::ToggleRegion(Region::Africa));
        let toggles = region_toggles(&state);
        assert_eq!(toggles.len(), 6);
        let africa = toggles.iter().find(|t| t.region == Region::Africa).unwrap();
        assert!(!africa.active);
        assert_eq!(africa.swatch, Region::Africa.fill_color());
        assert!(toggles.iter().filter(|t| t.active).count() == 5);
    }

    #[test]
    fn play_button_reflects_playback() {
        let mut state = ChartState::default();
        assert_eq!(play_button(&state).label(), "Play");
        state.apply(Action::StartPlayback);
        assert_eq!(play_button(&state).label(), "Pause");
        assert_eq!(year_slider(&state), YearSlider { min: 1950, max: 2021, step: 1, value: 1950 });
    }
}
