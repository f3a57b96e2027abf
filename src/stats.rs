//! stats.rs — quick descriptive summary of a mass sample.

use ordered_float::OrderedFloat;

/// Count, extremes, mean and median of a sample (M☉).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassSummary {
    pub count:  usize,
    pub min:    f64,
    pub max:    f64,
    pub mean:   f64,
    pub median: f64,
}

impl MassSummary {
    /// `None` for an empty slice. NaNs sort above every other value.
    pub fn from_masses(masses: &[f64]) -> Option<Self> {
        if masses.is_empty() {
            return None;
        }
        let mut sorted: Vec<OrderedFloat<f64>> = masses.iter().copied().map(OrderedFloat).collect();
        sorted.sort_unstable();

        let n = sorted.len();
        let median = if n % 2 == 1 {
            sorted[n / 2].0
        } else {
            0.5 * (sorted[n / 2 - 1].0 + sorted[n / 2].0)
        };

        Some(Self {
            count: n,
            min: sorted[0].0,
            max: sorted[n - 1].0,
            mean: masses.iter().sum::<f64>() / n as f64,
            median,
        })
    }
}
