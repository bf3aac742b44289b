//! High-level statistics engine
//!
//! Bundles the FFT and chi-square backends with a configuration so callers
//! can run the autocorrelation, Ljung-Box and periodogram routines without
//! threading backends through every call.

use super::{acf, periodogram};
use crate::backend::{ChiSquareSurvival, ComplexTransform, RustFftTransform, StatrsChiSquare};
use crate::error::{StatsError, StatsResult};
use crate::portmanteau::{self, LjungBoxFormula, QStatKind, QStatResult};

/// Engine configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsConfig {
    /// Arithmetic used by `q_stat` and `ljung_box_test`
    pub q_stat_formula: LjungBoxFormula,

    /// Default lag bound for `ljung_box_test` (< 1 means all lags)
    pub max_lag: isize,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            q_stat_formula: LjungBoxFormula::Reference,
            max_lag: 0,
        }
    }
}

/// Time-series statistics engine
pub struct SpectralStats {
    config: StatsConfig,
    transform: Box<dyn ComplexTransform>,
    survival: Box<dyn ChiSquareSurvival>,
}

impl Default for SpectralStats {
    fn default() -> Self {
        Self::new(StatsConfig::default())
    }
}

impl SpectralStats {
    /// Create engine with the `rustfft` and `statrs` backends
    pub fn new(config: StatsConfig) -> Self {
        Self::with_backends(config, Box::new(RustFftTransform::new()), Box::new(StatrsChiSquare))
    }

    /// Create engine with caller-supplied backends
    pub fn with_backends(
        config: StatsConfig,
        transform: Box<dyn ComplexTransform>,
        survival: Box<dyn ChiSquareSurvival>,
    ) -> Self {
        Self {
            config,
            transform,
            survival,
        }
    }

    /// Autocorrelation coefficients for lags 0..min(n, requested_lag)
    ///
    /// Returns an empty vector only for series shorter than two samples.
    /// Non-finite input keeps the length and produces NaN coefficients.
    pub fn autocorrelation(&self, series: &[f64], requested_lag: isize) -> Vec<f64> {
        acf::autocorrelation(self.transform.as_ref(), series, requested_lag)
    }

    /// Autocorrelation that reports non-finite input or overflow as an error
    pub fn try_autocorrelation(&self, series: &[f64], requested_lag: isize) -> StatsResult<Vec<f64>> {
        acf::try_autocorrelation(self.transform.as_ref(), series, requested_lag)
    }

    /// Ljung-Box statistics for a coefficient sequence
    pub fn q_stat(&self, coefficients: &[f64], nobs: usize, kind: QStatKind) -> StatsResult<QStatResult> {
        portmanteau::q_stat(
            self.survival.as_ref(),
            coefficients,
            nobs,
            kind,
            self.config.q_stat_formula,
        )
    }

    /// Ljung-Box statistics with the kind given by name (e.g. "ljung-box")
    pub fn q_stat_named(&self, coefficients: &[f64], nobs: usize, kind: &str) -> StatsResult<QStatResult> {
        let kind: QStatKind = kind.parse()?;
        self.q_stat(coefficients, nobs, kind)
    }

    /// Ljung-Box test on a raw series
    ///
    /// Computes the autocorrelation for lags 1..=nlags (all lags when
    /// `nlags < 1`) and feeds them to `q_stat` with `nobs = series.len()`.
    pub fn ljung_box_test(&self, series: &[f64], nlags: isize) -> StatsResult<QStatResult> {
        if series.is_empty() {
            return Err(StatsError::InvalidArgument(
                "number of observations must be positive".to_string(),
            ));
        }

        let requested = if nlags < 1 { 0 } else { nlags.saturating_add(1) };
        let coefficients = self.try_autocorrelation(series, requested)?;
        let lags = coefficients.get(1..).unwrap_or(&[]);

        self.q_stat(lags, series.len(), QStatKind::LjungBox)
    }

    /// Ljung-Box test using the configured `max_lag`
    pub fn ljung_box_test_default(&self, series: &[f64]) -> StatsResult<QStatResult> {
        self.ljung_box_test(series, self.config.max_lag)
    }

    /// Power spectrum |X[k]|², same length as `series`
    pub fn periodogram(&self, series: &[f64]) -> Vec<f64> {
        periodogram::periodogram(self.transform.as_ref(), series)
    }

    /// Strongest non-DC frequency bin
    pub fn dominant_frequency(&self, series: &[f64]) -> Option<(usize, f64)> {
        periodogram::dominant_frequency(self.transform.as_ref(), series)
    }

    /// Period in samples of the strongest non-DC bin
    pub fn dominant_period(&self, series: &[f64]) -> Option<f64> {
        periodogram::dominant_period(self.transform.as_ref(), series)
    }

    /// Update configuration
    pub fn update_config(&mut self, config: StatsConfig) {
        self.config = config;
    }

    /// Get current configuration
    pub fn config(&self) -> &StatsConfig {
        &self.config
    }
}
