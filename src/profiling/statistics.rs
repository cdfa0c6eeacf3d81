//! Descriptive statistics over a slice of non-null numeric values.
//!
//! Every function here returns `None` when the statistic is undefined for the given sample
//! (empty input, too few values for the requested degrees of freedom, ...). Callers decide how
//! to surface that.
//!
//! - Quantiles use linear interpolation between closest ranks (Hyndman & Fan type 7).
//! - [`skewness`] is the adjusted Fisher–Pearson coefficient `G1`.
//! - [`kurtosis`] is the bias-corrected excess kurtosis `G2`.

use std::collections::HashMap;

use serde::Serialize;

/// Arithmetic mean.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Variance with `ddof` delta degrees of freedom (denominator `n - ddof`).
pub fn variance(values: &[f64], ddof: u8) -> Option<f64> {
    let n = values.len();
    let ddof = usize::from(ddof);
    if n <= ddof {
        return None;
    }
    let m = mean(values)?;
    let ss: f64 = values.iter().map(|x| (x - m).powi(2)).sum();
    Some(ss / (n - ddof) as f64)
}

/// Standard deviation, `sqrt(variance(values, ddof))`.
pub fn std_dev(values: &[f64], ddof: u8) -> Option<f64> {
    variance(values, ddof).map(f64::sqrt)
}

/// Quantile `q` in `[0, 1]` of data that is already sorted ascending.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    let n = sorted.len();
    if n == 0 || !(0.0..=1.0).contains(&q) {
        return None;
    }
    let h = (n - 1) as f64 * q;
    let lo = h.floor() as usize;
    let frac = h - h.floor();
    match sorted.get(lo + 1) {
        Some(next) => Some(sorted[lo] + frac * (next - sorted[lo])),
        None => Some(sorted[n - 1]),
    }
}

/// Sort a copy of `values` ascending. `values` must not contain `NaN`.
pub fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Adjusted Fisher–Pearson skewness. Needs at least 3 values; constant data has skewness 0.
pub fn skewness(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n < 3 {
        return None;
    }
    let (m2, m3, _) = central_moment_sums(values)?;
    if m2 == 0.0 {
        return Some(0.0);
    }
    let nf = n as f64;
    let g1 = (m3 / nf) / (m2 / nf).powf(1.5);
    Some(g1 * (nf * (nf - 1.0)).sqrt() / (nf - 2.0))
}

/// Bias-corrected excess kurtosis. Needs at least 4 values; constant data has kurtosis 0.
pub fn kurtosis(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n < 4 {
        return None;
    }
    let (m2, _, m4) = central_moment_sums(values)?;
    if m2 == 0.0 {
        return Some(0.0);
    }
    let nf = n as f64;
    let numerator = nf * (nf + 1.0) * (nf - 1.0) * m4;
    let denominator = (nf - 2.0) * (nf - 3.0) * m2 * m2;
    let adjustment = 3.0 * (nf - 1.0).powi(2) / ((nf - 2.0) * (nf - 3.0));
    Some(numerator / denominator - adjustment)
}

// Sums of squared, cubed and fourth-power deviations from the mean.
fn central_moment_sums(values: &[f64]) -> Option<(f64, f64, f64)> {
    let m = mean(values)?;
    Some(values.iter().fold((0.0, 0.0, 0.0), |(s2, s3, s4), x| {
        let d = x - m;
        let d2 = d * d;
        (s2 + d2, s3 + d2 * d, s4 + d2 * d2)
    }))
}

/// Most frequent value(s) of a sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Mode {
    /// Every value occurs exactly once.
    AllUnique,
    /// Every distinct value occurs the same number of times (more than once).
    UniformFrequency { frequency: usize },
    /// The value(s) sharing the highest frequency, ascending.
    Values { values: Vec<f64>, frequency: usize },
}

/// Compute the [`Mode`] of `values`. Returns `None` for an empty sample.
pub fn mode(values: &[f64]) -> Option<Mode> {
    if values.is_empty() {
        return None;
    }

    let mut counts: HashMap<u64, (f64, usize)> = HashMap::new();
    for &v in values {
        // Fold -0.0 into 0.0 so both count as one value.
        let v = if v == 0.0 { 0.0 } else { v };
        counts.entry(v.to_bits()).or_insert((v, 0)).1 += 1;
    }

    let frequency = counts.values().map(|(_, c)| *c).max()?;
    if frequency == 1 {
        return Some(Mode::AllUnique);
    }

    let mut modes: Vec<f64> = counts
        .values()
        .filter(|(_, c)| *c == frequency)
        .map(|(v, _)| *v)
        .collect();
    if modes.len() == counts.len() {
        return Some(Mode::UniformFrequency { frequency });
    }
    modes.sort_by(f64::total_cmp);
    Some(Mode::Values {
        values: modes,
        frequency,
    })
}
