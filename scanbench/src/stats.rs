//! Sample statistics.
//!
//! Population standard deviation (divide by N) and a fixed-z normal
//! approximation for the 95% half-width. No small-sample correction.

/// z-score of a two-sided 95% interval.
pub const Z_95: f64 = 1.96;

/// Reduced form of one sample set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub mean: f64,
    pub std_dev: f64,
    /// Half-width of the 95% confidence interval around `mean`.
    pub interval95: f64,
    pub sample_count: usize,
}

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    Some(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// Population standard deviation, `None` for an empty slice.
pub fn std_dev(samples: &[f64]) -> Option<f64> {
    let mean = mean(samples)?;
    let variance = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / samples.len() as f64;
    Some(variance.sqrt())
}

/// `Z_95 * std_dev / sqrt(n)`.
pub fn interval95(std_dev: f64, n: usize) -> f64 {
    Z_95 * std_dev / (n as f64).sqrt()
}

pub fn compute_summary(samples: &[f64]) -> Option<Summary> {
    let mean = mean(samples)?;
    let std_dev = std_dev(samples)?;
    Some(Summary {
        mean,
        std_dev,
        interval95: interval95(std_dev, samples.len()),
        sample_count: samples.len(),
    })
}
