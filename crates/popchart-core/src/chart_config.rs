// File: crates/popchart-core/src/chart_config.rs
// Summary: Pure mapping from fetched year data to a declarative horizontal bar chart config.
// Notes:
// - The config serializes with Chart.js-style camelCase keys, so a web host can pass the JSON
//   straight to its chart library. The Skia backend in `chart.rs` draws the same value.

use serde::Serialize;

use crate::color::Rgba;
use crate::format::total_label;
use crate::record::{total_population, PopulationRecord};
use crate::region::colors_for;

pub const DATASET_LABEL: &str = "Population";
pub const YEAR_FONT_SIZE: f32 = 60.0;
pub const TOTAL_FONT_SIZE: f32 = 40.0;
pub const DATA_LABEL_FONT_SIZE: f32 = 14.0;
/// Category rows the year and total annotations sit on (bottom of a 12-row chart).
pub const YEAR_ANNOTATION_ROW: f64 = 9.0;
pub const TOTAL_ANNOTATION_ROW: f64 = 10.0;

/// Which axis carries the categories. `Y` gives horizontal bars.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexAxis {
    X,
    Y,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelAnchor {
    Start,
    Center,
    End,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<u64>,
    pub background_color: Vec<Rgba>,
    pub border_color: Vec<Rgba>,
    pub border_width: f32,
}

/// Value labels printed at the tip of every bar.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataLabels {
    pub display: bool,
    pub color: Rgba,
    pub align: LabelAnchor,
    pub anchor: LabelAnchor,
    pub font_size: f32,
}

/// Free text placed on the plot: horizontally at `x_value`, vertically on category row `y_value`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelAnnotation {
    pub id: &'static str,
    pub x_value: LabelAnchor,
    pub y_value: f64,
    pub content: String,
    pub font_size: f32,
    pub background_color: Rgba,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarChartConfig {
    pub index_axis: IndexAxis,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub data_labels: DataLabels,
    pub annotations: Vec<LabelAnnotation>,
    pub show_legend: bool,
    pub title: Option<String>,
    /// Sum of the dataset; mirrors the total annotation.
    pub total: u64,
}

impl BarChartConfig {
    /// The single population dataset.
    pub fn population(&self) -> &Dataset {
        &self.datasets[0]
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Build the chart for `year` from records in fetch order. `None` for empty data: nothing is
/// drawn and no total is computed.
pub fn build_bar_chart(year: i32, records: &[PopulationRecord]) -> Option<BarChartConfig> {
    let total = total_population(records)?;

    let (background_color, border_color): (Vec<Rgba>, Vec<Rgba>) = records.iter().map(|r| colors_for(&r.region)).unzip();
    let dataset = Dataset {
        label: DATASET_LABEL.to_string(),
        data: records.iter().map(|r| r.population).collect(),
        background_color,
        border_color,
        border_width: 1.0,
    };

    let transparent = Rgba::new(245, 245, 245, 0.0);
    let annotations = vec![
        LabelAnnotation {
            id: "year",
            x_value: LabelAnchor::Center,
            y_value: YEAR_ANNOTATION_ROW,
            content: year.to_string(),
            font_size: YEAR_FONT_SIZE,
            background_color: transparent,
        },
        LabelAnnotation {
            id: "total",
            x_value: LabelAnchor::Center,
            y_value: TOTAL_ANNOTATION_ROW,
            content: total_label(total),
            font_size: TOTAL_FONT_SIZE,
            background_color: transparent,
        },
    ];

    Some(BarChartConfig {
        index_axis: IndexAxis::Y,
        labels: records.iter().map(|r| r.country.clone()).collect(),
        datasets: vec![dataset],
        data_labels: DataLabels {
            display: true,
            color: Rgba::opaque(0, 0, 0),
            align: LabelAnchor::End,
            anchor: LabelAnchor::End,
            font_size: DATA_LABEL_FONT_SIZE,
        },
        annotations,
        show_legend: false,
        title: None,
        total,
    })
}
