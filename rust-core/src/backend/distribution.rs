//! Chi-square survival function capability

use statrs::distribution::{ChiSquared, ContinuousCDF};

use crate::error::{StatsError, StatsResult};

/// Upper-tail probability P(X > x) for X ~ χ²(dof)
pub trait ChiSquareSurvival: Send + Sync {
    fn survival(&self, dof: f64, x: f64) -> StatsResult<f64>;
}

/// `statrs` backend
#[derive(Debug, Default, Clone, Copy)]
pub struct StatrsChiSquare;

impl StatrsChiSquare {
    pub fn new() -> Self {
        Self
    }
}

impl ChiSquareSurvival for StatrsChiSquare {
    fn survival(&self, dof: f64, x: f64) -> StatsResult<f64> {
        if !(dof.is_finite() && dof > 0.0) {
            return Err(StatsError::InvalidArgument(format!(
                "degrees of freedom must be positive and finite (got {dof})"
            )));
        }
        if x.is_nan() {
            return Err(StatsError::InvalidArgument(
                "chi-square statistic is NaN".to_string(),
            ));
        }

        let dist = ChiSquared::new(dof).map_err(|e| StatsError::Distribution(e.to_string()))?;
        Ok(dist.sf(x).clamp(0.0, 1.0))
    }
}
