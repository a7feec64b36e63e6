// File: crates/popchart-core/tests/chart_config.rs
// Purpose: Mapping from fetched rows to the declarative bar chart config.

use popchart_core::chart_config::{IndexAxis, LabelAnchor, DATASET_LABEL};
use popchart_core::region::UNKNOWN_REGION_COLOR;
use popchart_core::{build_bar_chart, PopulationRecord, Region};

fn sample() -> Vec<PopulationRecord> {
    vec![
        PopulationRecord::new("China", 1_412_360_000, "Asia"),
        PopulationRecord::new("Nigeria", 213_401_323, "Africa"),
        PopulationRecord::new("Mystery", 1_000, "Polar"),
    ]
}

#[test]
fn empty_data_builds_nothing() {
    assert!(build_bar_chart(1950, &[]).is_none());
}

#[test]
fn labels_and_values_keep_fetch_order() {
    let c = build_bar_chart(2021, &sample()).unwrap();
    assert_eq!(c.index_axis, IndexAxis::Y);
    assert_eq!(c.labels, ["China", "Nigeria", "Mystery"]);
    assert_eq!(c.datasets.len(), 1);
    let ds = c.population();
    assert_eq!(ds.label, DATASET_LABEL);
    assert_eq!(ds.data, [1_412_360_000, 213_401_323, 1_000]);
    assert_eq!(ds.border_width, 1.0);
}

#[test]
fn colors_follow_region_table_with_neutral_fallback() {
    let c = build_bar_chart(2021, &sample()).unwrap();
    let ds = c.population();
    assert_eq!(ds.background_color[0], Region::Asia.fill_color());
    assert_eq!(ds.border_color[0], Region::Asia.border_color());
    assert_eq!(ds.background_color[1].to_string(), "rgba(255, 99, 132, 0.6)");
    assert_eq!(ds.border_color[1].to_string(), "rgba(255, 99, 132, 1)");
    assert_eq!(ds.background_color[2], UNKNOWN_REGION_COLOR);
    assert_eq!(ds.border_color[2], UNKNOWN_REGION_COLOR);
}

#[test]
fn total_and_year_annotations() {
    let rows = vec![PopulationRecord::new("A", 100, "Asia"), PopulationRecord::new("B", 250, "Europe")];
    let c = build_bar_chart(1999, &rows).unwrap();
    assert_eq!(c.total, 350);
    let contents: Vec<&str> = c.annotations.iter().map(|a| a.content.as_str()).collect();
    assert_eq!(contents, ["1999", "Total:  350"]);
    assert!(c.annotations.iter().all(|a| a.x_value == LabelAnchor::Center));
    assert!(c.annotations[0].font_size > c.annotations[1].font_size);
}

#[test]
fn total_uses_group_separators() {
    let c = build_bar_chart(2021, &sample()).unwrap();
    assert_eq!(c.annotations[1].content, "Total:  1,625,762,323");
}

#[test]
fn serializes_with_chartjs_keys() {
    let c = build_bar_chart(2021, &sample()).unwrap();
    let v: serde_json::Value = serde_json::from_str(&c.to_json_pretty().unwrap()).unwrap();
    assert_eq!(v["indexAxis"], "y");
    assert_eq!(v["datasets"][0]["label"], "Population");
    assert_eq!(v["datasets"][0]["backgroundColor"][0], "rgba(54, 162, 235, 0.6)");
    assert_eq!(v["datasets"][0]["borderWidth"], 1.0);
    assert_eq!(v["dataLabels"]["anchor"], "end");
    assert_eq!(v["showLegend"], false);
}
