//! PyO3 bindings for Python integration

use pyo3::prelude::*;

mod stats_bindings;

/// Python module definition
#[pymodule]
fn timeseries_stats(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(stats_bindings::acf, m)?)?;
    m.add_function(wrap_pyfunction!(stats_bindings::q_stat, m)?)?;
    m.add_function(wrap_pyfunction!(stats_bindings::periodogram, m)?)?;

    Ok(())
}
