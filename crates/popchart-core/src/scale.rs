// File: crates/popchart-core/src/scale.rs
// Summary: Value (horizontal) and category band (vertical) scales for horizontal bar layout.

/// Linear map from a value range onto a pixel span.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub start_px: f32,
    pub end_px: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl LinearScale {
    pub fn new(start_px: f32, end_px: f32, vmin: f64, vmax: f64) -> Self {
        let mut s = Self { start_px, end_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let span = self.vmax - self.vmin;
        self.start_px + ((v - self.vmin) / span) as f32 * (self.end_px - self.start_px)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let span = self.vmax - self.vmin;
        self.vmin + ((px - self.start_px) / (self.end_px - self.start_px)) as f64 * span
    }
}

/// Equal-height rows for `count` categories between `top_px` and `bottom_px`, with a fraction
/// of each row left as padding around the bar.
#[derive(Clone, Copy, Debug)]
pub struct BandScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub count: usize,
    pub padding: f32,
}

impl BandScale {
    pub fn new(top_px: f32, bottom_px: f32, count: usize, padding: f32) -> Self {
        Self { top_px, bottom_px, count: count.max(1), padding: padding.clamp(0.0, 0.9) }
    }

    pub fn row_height(&self) -> f32 {
        (self.bottom_px - self.top_px) / self.count as f32
    }

    /// Vertical center of (possibly fractional) row `index`.
    pub fn center(&self, index: f64) -> f32 {
        self.top_px + (index as f32 + 0.5) * self.row_height()
    }

    /// Top and bottom of the bar drawn in row `index`.
    pub fn bar_span(&self, index: usize) -> (f32, f32) {
        let h = self.row_height();
        let inset = h * self.padding * 0.5;
        let top = self.top_px + index as f32 * h;
        (top + inset, top + h - inset)
    }
}
