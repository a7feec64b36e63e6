// File: crates/popchart-core/src/chart.rs
// Summary: Skia CPU raster backend: draws a `BarChartConfig` as horizontal bars and encodes PNG/RGBA.

use anyhow::{Context, Result};
use skia_safe as skia;

use crate::chart_config::{BarChartConfig, DataLabels, LabelAnchor};
use crate::format::{compact, group_thousands};
use crate::geometry::RectI32;
use crate::grid::value_ticks;
use crate::scale::{BandScale, LinearScale};
use crate::text::{Align, TextShaper};
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

/// Fraction of each category row left empty around its bar.
const BAR_PADDING: f32 = 0.2;
/// Headroom on the value axis so the data label at the longest bar still fits.
const VALUE_HEADROOM: f64 = 1.18;
const VALUE_TICKS: usize = 6;

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Text is skipped when false; useful for pixel-exact snapshots across platforms.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
        }
    }
}

/// A chart config bound to a drawing surface.
pub struct BarChart<'a> {
    config: &'a BarChartConfig,
}

impl<'a> BarChart<'a> {
    pub fn from_config(config: &'a BarChartConfig) -> Self {
        Self { config }
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.draw_surface(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Unpremultiplied RGBA8 pixels: `(pixels, width, height, row_bytes)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = self.draw_surface(opts)?;
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let row_bytes = opts.width.max(0) as usize * 4;
        let mut pixels = vec![0u8; row_bytes * opts.height.max(0) as usize];
        if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            anyhow::bail!("reading surface pixels failed");
        }
        Ok((pixels, opts.width, opts.height, row_bytes))
    }

    fn draw_surface(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create {}x{} raster surface", opts.width, opts.height))?;
        let canvas = surface.canvas();
        canvas.clear(opts.theme.background);

        let plot = RectI32::plot_area(opts.width, opts.height, &opts.insets);
        let dataset = self.config.population();
        let max_value = dataset.data.iter().copied().max().unwrap_or(0) as f64;
        let ticks = value_ticks((max_value * VALUE_HEADROOM).max(1.0), VALUE_TICKS);
        let vmax = ticks.last().copied().unwrap_or(1.0);
        let xs = LinearScale::new(plot.left as f32, plot.right as f32, 0.0, vmax);
        let rows = BandScale::new(plot.top as f32, plot.bottom as f32, self.config.labels.len(), BAR_PADDING);

        let shaper = opts.draw_labels.then(TextShaper::new);

        draw_grid(canvas, &plot, &xs, &ticks, &opts.theme, shaper.as_ref());
        draw_bars(canvas, self.config, &xs, &rows);
        if let Some(shaper) = &shaper {
            draw_category_labels(canvas, shaper, self.config, &plot, &rows, &opts.theme);
            draw_data_labels(canvas, shaper, self.config, &xs, &rows, &opts.theme);
            draw_annotations(canvas, shaper, self.config, &plot, &rows, &opts.theme);
        }
        Ok(surface)
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(
    canvas: &skia::Canvas,
    plot: &RectI32,
    xs: &LinearScale,
    ticks: &[f64],
    theme: &Theme,
    shaper: Option<&TextShaper>,
) {
    let mut grid = skia::Paint::default();
    grid.set_color(theme.grid);
    grid.set_anti_alias(true);
    grid.set_stroke_width(1.0);

    let (t, b) = (plot.top as f32, plot.bottom as f32);
    for &v in ticks {
        let x = xs.to_px(v);
        canvas.draw_line((x, t), (x, b), &grid);
        if let Some(shaper) = shaper {
            shaper.draw(canvas, &compact(v), x, b + 18.0, Align::Center, 12.0, theme.axis_label, false);
        }
    }

    let mut axis = skia::Paint::default();
    axis.set_color(theme.axis_line);
    axis.set_anti_alias(true);
    axis.set_stroke_width(1.5);
    let l = plot.left as f32;
    canvas.draw_line((l, t), (l, b), &axis);
    canvas.draw_line((l, b), (plot.right as f32, b), &axis);
}

fn draw_bars(canvas: &skia::Canvas, config: &BarChartConfig, xs: &LinearScale, rows: &BandScale) {
    let dataset = config.population();
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    let mut border = skia::Paint::default();
    border.set_anti_alias(true);
    border.set_style(skia::paint::Style::Stroke);
    border.set_stroke_width(dataset.border_width);

    let x0 = xs.to_px(0.0);
    for (i, &value) in dataset.data.iter().enumerate() {
        let (top, bottom) = rows.bar_span(i);
        let x1 = xs.to_px(value as f64).max(x0 + 1.0);
        let rect = skia::Rect::from_ltrb(x0, top, x1, bottom);
        if let Some(c) = dataset.background_color.get(i) {
            fill.set_color(c.to_skia());
            canvas.draw_rect(rect, &fill);
        }
        if let Some(c) = dataset.border_color.get(i) {
            border.set_color(c.to_skia());
            canvas.draw_rect(rect, &border);
        }
    }
}

fn draw_category_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    config: &BarChartConfig,
    plot: &RectI32,
    rows: &BandScale,
    theme: &Theme,
) {
    let x = plot.left as f32 - 8.0;
    for (i, label) in config.labels.iter().enumerate() {
        shaper.draw(canvas, label, x, rows.center(i as f64), Align::Right, 14.0, theme.category_label, false);
    }
}

fn draw_data_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    config: &BarChartConfig,
    xs: &LinearScale,
    rows: &BandScale,
    theme: &Theme,
) {
    let labels = &config.data_labels;
    if !labels.display {
        return;
    }
    let color = data_label_color(labels, theme);
    for (i, &value) in config.population().data.iter().enumerate() {
        let anchor_x = match labels.anchor {
            LabelAnchor::Start => xs.to_px(0.0),
            LabelAnchor::Center => (xs.to_px(0.0) + xs.to_px(value as f64)) * 0.5,
            LabelAnchor::End => xs.to_px(value as f64),
        };
        let (x, align) = match labels.align {
            LabelAnchor::Start => (anchor_x - 4.0, Align::Right),
            LabelAnchor::Center => (anchor_x, Align::Center),
            LabelAnchor::End => (anchor_x + 4.0, Align::Left),
        };
        shaper.draw(canvas, &group_thousands(value), x, rows.center(i as f64), align, labels.font_size, color, false);
    }
}

fn data_label_color(labels: &DataLabels, theme: &Theme) -> skia::Color {
    theme.data_label.unwrap_or_else(|| labels.color.to_skia())
}

fn draw_annotations(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    config: &BarChartConfig,
    plot: &RectI32,
    rows: &BandScale,
    theme: &Theme,
) {
    // Rows past the last bar are pinned to the bottom rows so short charts still show them.
    let last_row = rows.count.saturating_sub(1) as f64;
    let overflow = config
        .annotations
        .iter()
        .map(|a| a.y_value)
        .fold(0.0f64, f64::max)
        - last_row;
    for a in &config.annotations {
        let row = if overflow > 0.0 { (a.y_value - overflow).max(0.0) } else { a.y_value };
        let x = match a.x_value {
            LabelAnchor::Start => plot.left as f32 + 8.0,
            LabelAnchor::Center => (plot.left + plot.right) as f32 * 0.5,
            LabelAnchor::End => plot.right as f32 - 8.0,
        };
        let align = match a.x_value {
            LabelAnchor::Start => Align::Left,
            LabelAnchor::Center => Align::Center,
            LabelAnchor::End => Align::Right,
        };
        shaper.draw(canvas, &a.content, x, rows.center(row), align, a.font_size, theme.annotation, true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart_config::build_bar_chart;
    use crate::record::PopulationRecord;

    fn labels() -> DataLabels {
        let rows = [PopulationRecord::new("China", 554_419_275, "Asia")];
        build_bar_chart(1950, &rows).map(|c| c.data_labels).unwrap()
    }

    #[test]
    fn light_theme_keeps_config_label_color() {
        let labels = labels();
        assert_eq!(data_label_color(&labels, &Theme::light()), labels.color.to_skia());
    }

    #[test]
    fn dark_theme_labels_contrast_with_background() {
        let dark = Theme::dark();
        let c = data_label_color(&labels(), &dark);
        assert_ne!(c, skia::Color::BLACK);
        let luma = |c: skia::Color| c.r() as u32 + c.g() as u32 + c.b() as u32;
        assert!(luma(c) > luma(dark.background) + 300);
    }
}
