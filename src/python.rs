use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::adjust;
use crate::series;
use crate::types::AdjustmentParams;

/// Adjust PV estimate based on input value, multiplier, azimuth, and tilt
#[pyfunction]
#[pyo3(name = "adjust_pv_estimate", signature = (input, multiplier, azimuth, tilt))]
fn py_adjust_pv_estimate(input: f64, multiplier: f64, azimuth: f64, tilt: f64) -> f64 {
    let params = AdjustmentParams {
        multiplier,
        azimuth,
        tilt,
    };
    adjust::adjust_with_trace(input, &params, adjust::trace_adjustment)
}

/// Adjust a column of PV estimates; `None` entries stay `None`
#[pyfunction]
#[pyo3(name = "adjust_pv_series", signature = (values, multiplier=1.0, azimuth=180.0, tilt=30.0))]
fn py_adjust_pv_series(
    values: Vec<Option<f64>>,
    multiplier: f64,
    azimuth: f64,
    tilt: f64,
) -> Vec<Option<f64>> {
    let params = AdjustmentParams {
        multiplier,
        azimuth,
        tilt,
    };
    series::adjust_series(&values, &params)
}

/// Module for adjusting PV estimates with multiplier, azimuth, and tilt
#[pymodule]
fn adjust_pv_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_adjust_pv_estimate, m)?)?;
    m.add_function(wrap_pyfunction!(py_adjust_pv_series, m)?)?;
    Ok(())
}
