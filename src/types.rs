use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::adjust::{OPTIMAL_AZIMUTH, OPTIMAL_TILT};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjustmentParams {
    pub multiplier: f64,
    pub azimuth: f64,
    pub tilt: f64,
}

impl Default for AdjustmentParams {
    fn default() -> Self {
        Self {
            multiplier: 1.0,
            azimuth: OPTIMAL_AZIMUTH,
            tilt: OPTIMAL_TILT,
        }
    }
}

/// Intermediate values of a single adjustment, as reported to trace sinks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Adjustment {
    pub input: f64,
    pub multiplier: f64,
    pub azimuth: f64,
    pub azimuth_factor: f64,
    pub tilt: f64,
    pub tilt_factor: f64,
    pub adjusted: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastPoint {
    pub period_end: DateTime<Utc>,
    pub pv_estimate: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjustedPoint {
    pub period_end: DateTime<Utc>,
    pub pv_estimate: Option<f64>,
    pub adjusted: Option<f64>,
}
