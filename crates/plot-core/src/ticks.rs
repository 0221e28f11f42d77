// File: crates/plot-core/src/ticks.rs
// Summary: Simple grid/tick position helpers.

/// Evenly spaced positions from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 {
        return vec![start, end];
    }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}
