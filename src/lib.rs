pub mod adjust;
pub mod config;
pub mod series;
pub mod types;

#[cfg(feature = "python")]
mod python;

pub use adjust::{
    adjust_pv_estimate, adjust_with_trace, adjustment_breakdown, azimuth_factor, tilt_factor,
    trace_adjustment, AZIMUTH_FACTOR_FLOOR, AZIMUTH_LOSS_PER_DEGREE, OPTIMAL_AZIMUTH,
    OPTIMAL_TILT, TILT_FACTOR_FLOOR, TILT_LOSS_PER_DEGREE,
};

pub use config::{ConfigError, CorrectionModel};

pub use series::{
    adjust_forecast, adjust_series, adjusted_column_name, adjusted_file_name, monthly_forecast,
    parse_estimate,
};

pub use types::{AdjustedPoint, Adjustment, AdjustmentParams, ForecastPoint};
