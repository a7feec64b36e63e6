// File: crates/popchart-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use popchart_core::{build_bar_chart, BarChart, PopulationRecord, RenderOptions};

#[test]
fn render_smoke_png() {
    let rows = vec![
        PopulationRecord::new("China", 554_419_275, "Asia"),
        PopulationRecord::new("India", 357_021_100, "Asia"),
        PopulationRecord::new("United States", 155_700_000, "North America"),
        PopulationRecord::new("Russia", 102_580_000, "Europe"),
    ];
    let config = build_bar_chart(1950, &rows).expect("non-empty data builds a chart");

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    BarChart::from_config(&config).render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = BarChart::from_config(&config).render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}
