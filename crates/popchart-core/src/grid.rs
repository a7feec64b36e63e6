// File: crates/popchart-core/src/grid.rs
// Summary: Tick layout helpers for the value axis.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Round `span / target_ticks` up to a 1/2/5 x 10^n step.
pub fn nice_step(span: f64, target_ticks: usize) -> f64 {
    if span <= 0.0 || target_ticks == 0 { return 1.0; }
    let raw = span / target_ticks as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let nice = if residual <= 1.0 { 1.0 } else if residual <= 2.0 { 2.0 } else if residual <= 5.0 { 5.0 } else { 10.0 };
    nice * magnitude
}

/// Ticks from 0 up to the first multiple of a nice step covering `max`.
pub fn value_ticks(max: f64, target_ticks: usize) -> Vec<f64> {
    let step = nice_step(max, target_ticks);
    let count = (max / step).ceil().max(1.0) as usize;
    linspace(0.0, step * count as f64, count + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nice_steps() {
        assert!((nice_step(100.0, 10) - 10.0).abs() < 1e-9);
        assert!((nice_step(1_400_000_000.0, 6) - 500_000_000.0).abs() < 1.0);
        assert_eq!(nice_step(0.0, 5), 1.0);
    }

    #[test]
    fn ticks_cover_max() {
        let t = value_ticks(1_400_000_000.0, 6);
        assert_eq!(t.first().copied(), Some(0.0));
        assert!(*t.last().unwrap() >= 1_400_000_000.0);
        assert_eq!(t.len(), 4);
    }
}
