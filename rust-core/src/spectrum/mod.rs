//! Spectral-domain statistics: autocorrelation and periodogram

pub mod acf;
pub mod periodogram;
pub mod analysis;

pub use analysis::{SpectralStats, StatsConfig};
