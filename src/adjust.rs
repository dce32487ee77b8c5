use tracing::debug;

use crate::config::CorrectionModel;
use crate::types::{Adjustment, AdjustmentParams};

/// Due south, for a Northern Hemisphere installation.
pub const OPTIMAL_AZIMUTH: f64 = 180.0;
pub const OPTIMAL_TILT: f64 = 30.0;
pub const AZIMUTH_LOSS_PER_DEGREE: f64 = 0.005;
pub const TILT_LOSS_PER_DEGREE: f64 = 0.003;
pub const AZIMUTH_FACTOR_FLOOR: f64 = 0.5;
pub const TILT_FACTOR_FLOOR: f64 = 0.6;

/// `1 - rate * |angle - optimum|`, replaced by `floor` only when strictly
/// below it. A NaN angle yields NaN.
fn linear_loss_factor(angle: f64, optimum: f64, rate: f64, floor: f64) -> f64 {
    let factor = 1.0 - rate * (angle - optimum).abs();
    if factor < floor {
        floor
    } else {
        factor
    }
}

pub fn azimuth_factor(azimuth: f64) -> f64 {
    linear_loss_factor(
        azimuth,
        OPTIMAL_AZIMUTH,
        AZIMUTH_LOSS_PER_DEGREE,
        AZIMUTH_FACTOR_FLOOR,
    )
}

pub fn tilt_factor(tilt: f64) -> f64 {
    linear_loss_factor(tilt, OPTIMAL_TILT, TILT_LOSS_PER_DEGREE, TILT_FACTOR_FLOOR)
}

fn combine(input: f64, multiplier: f64, azimuth_factor: f64, tilt_factor: f64) -> f64 {
    let base = input * multiplier;
    base * (azimuth_factor * tilt_factor)
}

/// Scales `input` by `multiplier`, then by the azimuth and tilt factors.
///
/// Pure and total: every `f64` is accepted and NaN/infinities propagate.
pub fn adjust_pv_estimate(input: f64, multiplier: f64, azimuth: f64, tilt: f64) -> f64 {
    combine(input, multiplier, azimuth_factor(azimuth), tilt_factor(tilt))
}

pub fn adjustment_breakdown(input: f64, multiplier: f64, azimuth: f64, tilt: f64) -> Adjustment {
    let af = azimuth_factor(azimuth);
    let tf = tilt_factor(tilt);
    Adjustment {
        input,
        multiplier,
        azimuth,
        azimuth_factor: af,
        tilt,
        tilt_factor: tf,
        adjusted: combine(input, multiplier, af, tf),
    }
}

/// Adjusts `input` and hands the full breakdown to `sink` before returning.
pub fn adjust_with_trace<F>(input: f64, params: &AdjustmentParams, mut sink: F) -> f64
where
    F: FnMut(&Adjustment),
{
    let adjustment = adjustment_breakdown(input, params.multiplier, params.azimuth, params.tilt);
    sink(&adjustment);
    adjustment.adjusted
}

/// Default trace sink: one DEBUG event carrying every intermediate value.
pub fn trace_adjustment(adjustment: &Adjustment) {
    debug!(
        input = adjustment.input,
        multiplier = adjustment.multiplier,
        azimuth = adjustment.azimuth,
        azimuth_factor = adjustment.azimuth_factor,
        tilt = adjustment.tilt,
        tilt_factor = adjustment.tilt_factor,
        adjusted = adjustment.adjusted,
        "adjusting PV estimate"
    );
}

impl CorrectionModel {
    pub fn azimuth_factor(&self, azimuth: f64) -> f64 {
        linear_loss_factor(
            azimuth,
            self.optimal_azimuth,
            self.azimuth_rate,
            self.azimuth_floor,
        )
    }

    pub fn tilt_factor(&self, tilt: f64) -> f64 {
        linear_loss_factor(tilt, self.optimal_tilt, self.tilt_rate, self.tilt_floor)
    }

    pub fn breakdown(&self, input: f64, params: &AdjustmentParams) -> Adjustment {
        let af = self.azimuth_factor(params.azimuth);
        let tf = self.tilt_factor(params.tilt);
        Adjustment {
            input,
            multiplier: params.multiplier,
            azimuth: params.azimuth,
            azimuth_factor: af,
            tilt: params.tilt,
            tilt_factor: tf,
            adjusted: combine(input, params.multiplier, af, tf),
        }
    }

    pub fn adjust(&self, input: f64, params: &AdjustmentParams) -> f64 {
        self.breakdown(input, params).adjusted
    }
}
