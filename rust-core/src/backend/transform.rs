//! Complex FFT capability
//!
//! Both directions are unnormalized: `inverse(forward(x)) == len * x`.

use num_complex::Complex64;
use rustfft::{Fft, FftDirection, FftPlanner};
use std::sync::{Arc, Mutex, PoisonError};

/// In-place complex discrete Fourier transform
pub trait ComplexTransform: Send + Sync {
    /// Forward DFT: X[k] = sum x[n] * exp(-2πi kn/N)
    fn forward(&self, buffer: &mut [Complex64]);

    /// Inverse DFT without the 1/N factor
    fn inverse(&self, buffer: &mut [Complex64]);
}

/// `rustfft` backend
///
/// The planner caches one plan per length and direction; it is locked only
/// while planning, so transforms on different threads run concurrently.
pub struct RustFftTransform {
    planner: Mutex<FftPlanner<f64>>,
}

impl Default for RustFftTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl RustFftTransform {
    pub fn new() -> Self {
        Self {
            planner: Mutex::new(FftPlanner::new()),
        }
    }

    /// Cached plan for `len` points in `direction`
    pub fn plan(&self, len: usize, direction: FftDirection) -> Arc<dyn Fft<f64>> {
        // A panic while planning leaves the cache usable
        let mut planner = self.planner.lock().unwrap_or_else(PoisonError::into_inner);
        planner.plan_fft(len, direction)
    }
}

impl ComplexTransform for RustFftTransform {
    fn forward(&self, buffer: &mut [Complex64]) {
        if buffer.is_empty() {
            return;
        }
        self.plan(buffer.len(), FftDirection::Forward).process(buffer);
    }

    fn inverse(&self, buffer: &mut [Complex64]) {
        if buffer.is_empty() {
            return;
        }
        self.plan(buffer.len(), FftDirection::Inverse).process(buffer);
    }
}
