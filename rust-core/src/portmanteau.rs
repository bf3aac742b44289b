//! Ljung-Box portmanteau statistic over an autocorrelation sequence
//!
//! Coefficient i-1 is treated as the autocorrelation at lag i. Two variants
//! of the arithmetic are available:
//!
//! - [`LjungBoxFormula::Reference`]: each lag's statistic uses only that
//!   lag's term, Q[i] = n(n+2) ρ²ᵢ / (n - i), and every p-value is taken from
//!   χ²(m + 1) where m is the number of coefficients.
//! - [`LjungBoxFormula::Cumulative`]: the textbook statistic
//!   Q[i] = n(n+2) Σⱼ≤ᵢ ρ²ⱼ / (n - j) with p-values from χ²(i).

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::backend::ChiSquareSurvival;
use crate::error::{StatsError, StatsResult};
use crate::utils::cumulative_sum;

/// Portmanteau statistic family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QStatKind {
    #[default]
    LjungBox,
}

impl FromStr for QStatKind {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ljung-box" | "ljungbox" | "ljung_box" | "lb" => Ok(QStatKind::LjungBox),
            other => Err(StatsError::UnsupportedOption(format!(
                "unknown Q-statistic kind '{other}'"
            ))),
        }
    }
}

impl fmt::Display for QStatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QStatKind::LjungBox => write!(f, "ljung-box"),
        }
    }
}

/// How per-lag terms are turned into statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LjungBoxFormula {
    /// Per-lag term only, χ²(m + 1) for every lag
    #[default]
    Reference,

    /// Running sum of terms, χ²(lag) at each lag
    Cumulative,
}

/// Statistic and p-value per lag
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QStatResult {
    /// Q statistic through lag i + 1
    pub statistic: Vec<f64>,

    /// Chi-square upper-tail probability of `statistic[i]`
    pub pvalue: Vec<f64>,
}

impl QStatResult {
    pub fn len(&self) -> usize {
        self.statistic.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statistic.is_empty()
    }

    /// Whether each lag rejects the no-autocorrelation null at level `alpha`
    pub fn rejects_at(&self, alpha: f64) -> Vec<bool> {
        self.pvalue.iter().map(|&p| p < alpha).collect()
    }
}

/// Compute Q statistics and p-values for every lag in `coefficients`
///
/// # Arguments
/// * `survival` - Chi-square tail backend
/// * `coefficients` - Autocorrelations; entry i-1 belongs to lag i
/// * `nobs` - Number of observations the coefficients were estimated from
/// * `kind` - Statistic family
/// * `formula` - Per-lag or cumulative arithmetic
///
/// # Errors
/// `InvalidArgument` when `nobs` is zero, when a lag reaches `nobs` (the
/// `nobs - i` denominator would vanish) or when a coefficient is not finite.
pub fn q_stat(
    survival: &dyn ChiSquareSurvival,
    coefficients: &[f64],
    nobs: usize,
    kind: QStatKind,
    formula: LjungBoxFormula,
) -> StatsResult<QStatResult> {
    if nobs == 0 {
        return Err(StatsError::InvalidArgument(
            "number of observations must be positive".to_string(),
        ));
    }

    let m = coefficients.len();
    if m >= nobs {
        return Err(StatsError::InvalidArgument(format!(
            "{m} lags need more than {m} observations (got {nobs})"
        )));
    }

    if let Some(pos) = coefficients.iter().position(|c| !c.is_finite()) {
        return Err(StatsError::InvalidArgument(format!(
            "autocorrelation at index {pos} is not finite"
        )));
    }

    debug!("q_stat: kind = {}, formula = {:?}, lags = {}, nobs = {}", kind, formula, m, nobs);

    let n = nobs as f64;
    let scale = n * (n + 2.0);

    let statistic: Vec<f64> = match kind {
        QStatKind::LjungBox => {
            let terms = ljung_box_terms(coefficients, nobs);
            match formula {
                LjungBoxFormula::Reference => terms.iter().map(|t| scale * t).collect(),
                LjungBoxFormula::Cumulative => {
                    cumulative_sum(&terms).iter().map(|t| scale * t).collect()
                }
            }
        }
    };

    let pvalue = statistic
        .iter()
        .enumerate()
        .map(|(i, &q)| {
            let dof = match formula {
                LjungBoxFormula::Reference => (m + 1) as f64,
                LjungBoxFormula::Cumulative => (i + 1) as f64,
            };
            survival.survival(dof, q)
        })
        .collect::<StatsResult<Vec<f64>>>()?;

    Ok(QStatResult { statistic, pvalue })
}

/// Convert a signed observation count, rejecting values <= 0
pub fn observation_count(nobs: i64) -> StatsResult<usize> {
    match usize::try_from(nobs) {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(StatsError::InvalidArgument(
            "number of observations must be positive".to_string(),
        )),
    }
}

/// ρ²ᵢ / (nobs - i) for lags i = 1..=m; requires m < nobs
fn ljung_box_terms(coefficients: &[f64], nobs: usize) -> Vec<f64> {
    coefficients
        .iter()
        .enumerate()
        .map(|(idx, &rho)| rho * rho / (nobs - (idx + 1)) as f64)
        .collect()
}
