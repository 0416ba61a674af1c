//! Steps-post path expansion
//!
//! A sampled bus line is drawn as a staircase: the value at tick `i` holds
//! until tick `i + 1`, where the line jumps vertically to the next value.
//! Plotting the expanded vertices with a plain polyline therefore never
//! interpolates between samples.

/// Expand `(x, y)` samples into the vertices of a steps-post polyline
///
/// N samples produce 2N - 1 vertices. The last sample is not extended past
/// its own x coordinate.
pub fn steps_post(samples: &[(f64, f64)]) -> Vec<(f64, f64)> {
    let mut path = Vec::with_capacity(samples.len().saturating_mul(2).saturating_sub(1));

    let mut iter = samples.iter();
    let Some(&first) = iter.next() else {
        return path;
    };
    path.push(first);

    let mut held = first.1;
    for &(x, y) in iter {
        path.push((x, held));
        path.push((x, y));
        held = y;
    }

    path
}

/// Value of a steps-post series at an arbitrary x
///
/// Returns `None` before the first sample; past the last sample the last
/// value holds.
pub fn value_at(samples: &[(f64, f64)], x: f64) -> Option<f64> {
    let idx = samples.partition_point(|&(sx, _)| sx <= x);
    idx.checked_sub(1).map(|i| samples[i].1)
}

/// Samples of a tick-indexed column: `(tick, value)`
pub fn tick_samples(values: &[f64]) -> Vec<(f64, f64)> {
    values
        .iter()
        .enumerate()
        .map(|(tick, &v)| (tick as f64, v))
        .collect()
}
