//! Time-series statistics core
//!
//! FFT-based autocorrelation, Ljung-Box Q statistics and periodograms, with
//! optional Python bindings.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![allow(non_local_definitions)]

pub mod backend;
pub mod error;
pub mod portmanteau;
pub mod spectrum;
pub mod utils;

#[cfg(feature = "python")]
pub mod python_bindings;

pub use backend::{ChiSquareSurvival, ComplexTransform, RustFftTransform, StatrsChiSquare};
pub use error::{StatsError, StatsResult};
pub use portmanteau::{LjungBoxFormula, QStatKind, QStatResult};
pub use spectrum::{SpectralStats, StatsConfig};

/// Autocorrelation coefficients for lags 0..min(n, requested_lag)
///
/// `requested_lag < 1` returns every lag. Series shorter than two samples
/// yield an empty vector; non-finite samples yield NaN coefficients of the
/// usual length (use `SpectralStats::try_autocorrelation` to reject them).
pub fn autocorrelation(series: &[f64], requested_lag: isize) -> Vec<f64> {
    SpectralStats::default().autocorrelation(series, requested_lag)
}

/// Ljung-Box statistics and χ² p-values for an autocorrelation sequence
pub fn q_stat(coefficients: &[f64], nobs: usize, kind: QStatKind) -> StatsResult<QStatResult> {
    SpectralStats::default().q_stat(coefficients, nobs, kind)
}

/// Power spectrum |X[k]|² of a series
pub fn periodogram(series: &[f64]) -> Vec<f64> {
    SpectralStats::default().periodogram(series)
}
