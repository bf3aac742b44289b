//! Python bindings for the statistics routines

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::error::StatsError;
use crate::portmanteau::{self, LjungBoxFormula, QStatKind};
use crate::spectrum::{SpectralStats, StatsConfig};

impl From<StatsError> for PyErr {
    fn from(err: StatsError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

fn as_slice<'a>(array: &'a PyReadonlyArray1<f64>) -> PyResult<&'a [f64]> {
    array
        .as_slice()
        .map_err(|e| PyValueError::new_err(format!("array must be contiguous: {e}")))
}

/// Autocorrelation coefficients
///
/// Args:
///     values: Input series as numpy array
///     nlag: Number of coefficients (< 1 means all lags)
///
/// Returns:
///     Coefficients for lags 0..nlag as numpy array
#[pyfunction]
#[pyo3(signature = (values, nlag=0))]
pub fn acf<'py>(
    py: Python<'py>,
    values: PyReadonlyArray1<f64>,
    nlag: isize,
) -> PyResult<&'py PyArray1<f64>> {
    let series = as_slice(&values)?;
    let coefficients = SpectralStats::default().try_autocorrelation(series, nlag)?;

    Ok(PyArray1::from_vec(py, coefficients))
}

/// Ljung-Box Q statistics
///
/// Args:
///     acf: Autocorrelations, entry i-1 belongs to lag i
///     nobs: Number of observations
///     kind: Statistic family (only "ljung-box")
///     cumulative: Use the running-sum statistic instead of per-lag terms
///
/// Returns:
///     Tuple (statistic, pvalue) of numpy arrays
#[pyfunction]
#[pyo3(signature = (acf, nobs, kind="ljung-box", cumulative=false))]
pub fn q_stat<'py>(
    py: Python<'py>,
    acf: PyReadonlyArray1<f64>,
    nobs: i64,
    kind: &str,
    cumulative: bool,
) -> PyResult<(&'py PyArray1<f64>, &'py PyArray1<f64>)> {
    let coefficients = as_slice(&acf)?;
    let nobs = portmanteau::observation_count(nobs)?;
    let kind: QStatKind = kind.parse()?;

    let config = StatsConfig {
        q_stat_formula: if cumulative {
            LjungBoxFormula::Cumulative
        } else {
            LjungBoxFormula::Reference
        },
        ..StatsConfig::default()
    };
    let result = SpectralStats::new(config).q_stat(coefficients, nobs, kind)?;

    Ok((
        PyArray1::from_vec(py, result.statistic),
        PyArray1::from_vec(py, result.pvalue),
    ))
}

/// Power spectrum |X[k]|²
///
/// Args:
///     values: Input series as numpy array
///
/// Returns:
///     Power per frequency bin as numpy array
#[pyfunction]
pub fn periodogram<'py>(
    py: Python<'py>,
    values: PyReadonlyArray1<f64>,
) -> PyResult<&'py PyArray1<f64>> {
    let series = as_slice(&values)?;
    let spectrum = SpectralStats::default().periodogram(series);

    Ok(PyArray1::from_vec(py, spectrum))
}
