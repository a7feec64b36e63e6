// File: crates/popchart-core/src/theme.rs
// Summary: Light/Dark theming for the bar chart surface (bars keep their region colors).

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub category_label: skia::Color,
    /// Year and total annotations.
    pub annotation: skia::Color,
    /// Replaces the chart config's data label color; `None` keeps the config's.
    pub data_label: Option<skia::Color>,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 100, 100, 110),
            category_label: skia::Color::from_argb(255, 20, 20, 30),
            annotation: skia::Color::from_argb(255, 60, 60, 70),
            data_label: None,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 150, 150, 160),
            category_label: skia::Color::from_argb(255, 235, 235, 245),
            annotation: skia::Color::from_argb(255, 200, 200, 210),
            data_label: Some(skia::Color::from_argb(255, 235, 235, 245)),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_default()
}
