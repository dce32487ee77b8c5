use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::adjust::{
    AZIMUTH_FACTOR_FLOOR, AZIMUTH_LOSS_PER_DEGREE, OPTIMAL_AZIMUTH, OPTIMAL_TILT,
    TILT_FACTOR_FLOOR, TILT_LOSS_PER_DEGREE,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid correction model JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{field} must be finite")]
    NonFinite { field: &'static str },

    #[error("{field} must not be negative (got {value})")]
    NegativeRate { field: &'static str, value: f64 },

    #[error("{field} must lie in (0, 1] (got {value})")]
    FloorOutOfRange { field: &'static str, value: f64 },
}

/// Constants of the orientation correction.
///
/// Each factor degrades linearly with the absolute deviation from its optimum
/// and is clamped from below at its floor. The default is the standard
/// Northern Hemisphere model: due south, 30° tilt, 0.5%/° and 0.3%/° losses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrectionModel {
    pub optimal_azimuth: f64,
    pub optimal_tilt: f64,
    pub azimuth_rate: f64,
    pub azimuth_floor: f64,
    pub tilt_rate: f64,
    pub tilt_floor: f64,
}

impl Default for CorrectionModel {
    fn default() -> Self {
        Self {
            optimal_azimuth: OPTIMAL_AZIMUTH,
            optimal_tilt: OPTIMAL_TILT,
            azimuth_rate: AZIMUTH_LOSS_PER_DEGREE,
            azimuth_floor: AZIMUTH_FACTOR_FLOOR,
            tilt_rate: TILT_LOSS_PER_DEGREE,
            tilt_floor: TILT_FACTOR_FLOOR,
        }
    }
}

impl CorrectionModel {
    /// Parses a (possibly partial) JSON document; omitted fields keep their
    /// default values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let model: Self = serde_json::from_str(json)?;
        model.validate()?;
        Ok(model)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("optimal_azimuth", self.optimal_azimuth),
            ("optimal_tilt", self.optimal_tilt),
            ("azimuth_rate", self.azimuth_rate),
            ("azimuth_floor", self.azimuth_floor),
            ("tilt_rate", self.tilt_rate),
            ("tilt_floor", self.tilt_floor),
        ];
        if let Some(&(field, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NonFinite { field });
        }
        for (field, value) in [
            ("azimuth_rate", self.azimuth_rate),
            ("tilt_rate", self.tilt_rate),
        ] {
            if value < 0.0 {
                return Err(ConfigError::NegativeRate { field, value });
            }
        }
        for (field, value) in [
            ("azimuth_floor", self.azimuth_floor),
            ("tilt_floor", self.tilt_floor),
        ] {
            if value <= 0.0 || value > 1.0 {
                return Err(ConfigError::FloorOutOfRange { field, value });
            }
        }
        Ok(())
    }
}
