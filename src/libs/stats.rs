//! Summary statistics over interval durations.

/// Minimum, maximum, mean and population standard deviation of a series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub stddev: f64,
}

/// Computes [`DurationStats`] for a series of durations.
///
/// Returns `None` for an empty series. The standard deviation is the
/// population one (divided by N, not N - 1), so a single value has a
/// deviation of exactly zero.
///
/// ```rust
/// use timekeeper::libs::stats::duration_stats;
///
/// let stats = duration_stats([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
/// assert_eq!(stats.mean, 5.0);
/// assert_eq!(stats.stddev, 2.0);
/// ```
pub fn duration_stats<I>(values: I) -> Option<DurationStats>
where
    I: IntoIterator<Item = f64>,
{
    let values: Vec<f64> = values.into_iter().collect();
    if values.is_empty() {
        return None;
    }

    let count = values.len() as f64;
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean = values.iter().sum::<f64>() / count;
    let variance = values.iter().map(|value| (value - mean).powi(2)).sum::<f64>() / count;

    Some(DurationStats {
        min,
        max,
        mean,
        stddev: variance.sqrt(),
    })
}
