//! Periodogram (power spectrum) via a single forward FFT
//!
//! Convention: P[k] = |X[k]|², with no division by the series length and no
//! mean removal. Bin k corresponds to k/n cycles per sample.

use num_complex::Complex64;

use crate::backend::ComplexTransform;

/// Power spectrum of a real series
///
/// # Returns
/// One value per frequency bin (same length as `series`). A single sample
/// yields `[1.0]`; an empty series yields an empty spectrum.
pub fn periodogram(transform: &dyn ComplexTransform, series: &[f64]) -> Vec<f64> {
    match series.len() {
        0 => return Vec::new(),
        1 => return vec![1.0],
        _ => {}
    }

    let mut buffer: Vec<Complex64> = series.iter().map(|&x| Complex64::new(x, 0.0)).collect();
    transform.forward(&mut buffer);

    buffer.iter().map(|c| c.norm_sqr()).collect()
}

/// Frequency of every bin in cycles per sample
pub fn frequencies(n: usize) -> Vec<f64> {
    (0..n).map(|k| k as f64 / n as f64).collect()
}

/// Strongest non-DC bin among the non-negative frequencies (1..=n/2)
///
/// # Returns
/// `(bin, frequency)` or `None` for series shorter than two samples.
pub fn dominant_frequency(transform: &dyn ComplexTransform, series: &[f64]) -> Option<(usize, f64)> {
    let n = series.len();
    if n < 2 {
        return None;
    }

    let spectrum = periodogram(transform, series);
    let (bin, _) = spectrum[1..=n / 2]
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.total_cmp(b))?;

    let bin = bin + 1;
    Some((bin, bin as f64 / n as f64))
}

/// Period (in samples) of the dominant non-DC bin
pub fn dominant_period(transform: &dyn ComplexTransform, series: &[f64]) -> Option<f64> {
    dominant_frequency(transform, series).map(|(bin, _)| series.len() as f64 / bin as f64)
}
