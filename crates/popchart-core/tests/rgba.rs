// File: crates/popchart-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use popchart_core::{build_bar_chart, BarChart, PopulationRecord, Region, RenderOptions};

#[test]
fn render_rgba8_buffer() {
    let rows = vec![PopulationRecord::new("Brazil", 100, "South America")];
    let config = build_bar_chart(2000, &rows).unwrap();

    let mut opts = RenderOptions::default();
    opts.width = 400;
    opts.height = 200;
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = BarChart::from_config(&config).render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left corner is background: opaque white for the light theme.
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);

    // Just right of the value axis, mid-row, sits the single bar: region fill over white.
    let plot_left = opts.insets.left as usize;
    let y = (opts.insets.top as usize + (h as usize - opts.insets.bottom as usize)) / 2;
    let i = y * stride + (plot_left + 10) * 4;
    let fill = Region::SouthAmerica.fill_color();
    let blend = |c: u8| (c as f32 * fill.a + 255.0 * (1.0 - fill.a)).round() as i32;
    assert!((px[i] as i32 - blend(fill.r)).abs() <= 2, "red {}", px[i]);
    assert!((px[i + 1] as i32 - blend(fill.g)).abs() <= 2, "green {}", px[i + 1]);
    assert!((px[i + 2] as i32 - blend(fill.b)).abs() <= 2, "blue {}", px[i + 2]);
}
