//! Autocorrelation via the Wiener–Khinchin theorem
//!
//! The demeaned series is zero-padded to the next power of two, transformed,
//! multiplied by its own conjugate (power spectral density) and transformed
//! back. The real part of bin k is the unnormalized autocovariance at lag k.

use log::{debug, warn};
use num_complex::Complex64;

use crate::backend::ComplexTransform;
use crate::error::{StatsError, StatsResult};
use crate::utils::{mean, padded_length};

/// Resolve the lag bound for a series of length `n`
///
/// Requests below 1 mean "all lags"; anything else is capped at `n`.
pub fn effective_lag(n: usize, requested_lag: isize) -> usize {
    if requested_lag < 1 {
        n
    } else {
        n.min(requested_lag as usize)
    }
}

/// Autocorrelation coefficients for lags 0..min(n, requested_lag)
///
/// # Arguments
/// * `transform` - FFT backend
/// * `series` - Input samples at unit time steps
/// * `requested_lag` - Number of coefficients to return (< 1 means n)
///
/// # Returns
/// Coefficients with `coefficients[0] == 1.0`, or an empty vector when the
/// series has fewer than two samples. Non-finite input (or a sum of squares
/// that overflows) keeps the length but yields non-finite coefficients.
pub fn autocorrelation(
    transform: &dyn ComplexTransform,
    series: &[f64],
    requested_lag: isize,
) -> Vec<f64> {
    let n = series.len();
    if n <= 1 {
        return Vec::new();
    }

    let autocov = autocovariance(transform, series);
    if !autocov[0].is_finite() {
        warn!(
            "acf: lag-0 autocovariance is {} for series of length {}; coefficients are not finite",
            autocov[0], n
        );
    }

    normalize(series, &autocov, effective_lag(n, requested_lag))
}

/// Autocorrelation that rejects non-finite input and overflowing series
///
/// # Errors
/// `InvalidArgument` when a sample is NaN or infinite, or when the lag-0
/// autocovariance overflows (|x| around 1e154 and above).
pub fn try_autocorrelation(
    transform: &dyn ComplexTransform,
    series: &[f64],
    requested_lag: isize,
) -> StatsResult<Vec<f64>> {
    let n = series.len();
    if n <= 1 {
        return Ok(Vec::new());
    }

    if let Some(pos) = series.iter().position(|x| !x.is_finite()) {
        return Err(StatsError::InvalidArgument(format!(
            "series value at index {pos} is not finite"
        )));
    }

    let autocov = autocovariance(transform, series);
    if !autocov[0].is_finite() {
        return Err(StatsError::InvalidArgument(format!(
            "autocovariance of series of length {n} overflows; rescale the input"
        )));
    }

    Ok(normalize(series, &autocov, effective_lag(n, requested_lag)))
}

/// Scale raw autocovariances into `nlag` coefficients (n >= 2, nlag >= 1)
fn normalize(series: &[f64], autocov: &[f64], nlag: usize) -> Vec<f64> {
    let n = series.len();
    let padded = autocov.len();
    if nlag > padded - n {
        debug!(
            "acf: lags beyond {} include circular wrap-around (n = {}, padded = {})",
            padded - n,
            n,
            padded
        );
    }

    let mut coefficients = Vec::with_capacity(nlag);
    coefficients.push(1.0);

    // acov[0] / n; both numerator and denominator carry the same FFT scale
    let normalizer = autocov[0] / n as f64;

    // Constants like 0.1 leave ~1e-17 residues after demeaning, so compare samples
    if is_constant(series) || normalizer <= 0.0 {
        warn!("acf: series of length {} has zero variance", n);
        coefficients.resize(nlag, 0.0);
        return coefficients;
    }

    let scale = n as f64 * normalizer;
    coefficients.extend(autocov[1..nlag].iter().map(|&c| c / scale));

    coefficients
}

fn is_constant(series: &[f64]) -> bool {
    series.iter().all(|&x| x == series[0])
}

/// Unnormalized circular autocovariance of the demeaned, zero-padded series
///
/// Output length is the padded length. Every bin carries a factor equal to
/// the padded length because the inverse transform is unnormalized.
pub fn autocovariance(transform: &dyn ComplexTransform, series: &[f64]) -> Vec<f64> {
    let n = series.len();
    let padded = padded_length(n);
    let mu = mean(series);

    debug!("acf: n = {}, padded length = {}", n, padded);

    let mut buffer = vec![Complex64::new(0.0, 0.0); padded];
    for (slot, &x) in buffer.iter_mut().zip(series.iter()) {
        *slot = Complex64::new(x - mu, 0.0);
    }

    transform.forward(&mut buffer);

    // Power spectral density: X[k] * conj(X[k])
    for c in buffer.iter_mut() {
        *c = *c * c.conj();
    }

    transform.inverse(&mut buffer);

    buffer.iter().map(|c| c.re).collect()
}
