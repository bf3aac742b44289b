//! Pluggable numeric backends: complex FFT and chi-square tail probabilities

pub mod transform;
pub mod distribution;

pub use transform::{ComplexTransform, RustFftTransform};
pub use distribution::{ChiSquareSurvival, StatrsChiSquare};
