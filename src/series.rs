use std::path::Path;

use chrono::{DateTime, TimeZone, Utc};

use crate::config::CorrectionModel;
use crate::types::{AdjustedPoint, AdjustmentParams, ForecastPoint};

impl ForecastPoint {
    pub fn new<Tz: TimeZone>(period_end: &DateTime<Tz>, pv_estimate: Option<f64>) -> Self {
        Self {
            period_end: period_end.with_timezone(&Utc),
            pv_estimate,
        }
    }
}

// Cells a CSV reader treats as missing before numeric coercion.
const MISSING_MARKERS: [&str; 8] = ["n/a", "#n/a", "na", "<na>", "null", "none", "nan", "-nan"];

/// Reads one forecast cell. Blank, missing-marker (`N/A`, `NaN`, ...) and
/// unparsable cells are missing. Infinities are kept as values.
pub fn parse_estimate(raw: &str) -> Option<f64> {
    let cell = raw.trim();
    if cell.is_empty()
        || MISSING_MARKERS
            .iter()
            .any(|marker| cell.eq_ignore_ascii_case(marker))
    {
        return None;
    }
    cell.parse::<f64>().ok().filter(|v| !v.is_nan())
}

pub fn adjust_series(values: &[Option<f64>], params: &AdjustmentParams) -> Vec<Option<f64>> {
    CorrectionModel::default().adjust_series(values, params)
}

pub fn adjust_forecast(points: &[ForecastPoint], params: &AdjustmentParams) -> Vec<AdjustedPoint> {
    CorrectionModel::default().adjust_forecast(points, params)
}

impl CorrectionModel {
    pub fn adjust_series(
        &self,
        values: &[Option<f64>],
        params: &AdjustmentParams,
    ) -> Vec<Option<f64>> {
        values
            .iter()
            .map(|v| v.map(|input| self.adjust(input, params)))
            .collect()
    }

    pub fn adjust_forecast(
        &self,
        points: &[ForecastPoint],
        params: &AdjustmentParams,
    ) -> Vec<AdjustedPoint> {
        points
            .iter()
            .map(|p| AdjustedPoint {
                period_end: p.period_end,
                pv_estimate: p.pv_estimate,
                adjusted: p.pv_estimate.map(|input| self.adjust(input, params)),
            })
            .collect()
    }
}

/// Stamps monthly totals on the first of each month, 00:00 UTC.
///
/// Values past December are dropped, as is everything for a year chrono
/// cannot represent.
pub fn monthly_forecast(year: i32, monthly: &[f64]) -> Vec<ForecastPoint> {
    monthly
        .iter()
        .zip(1..=12u32)
        .filter_map(|(&value, month)| {
            let period_end = Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0).single()?;
            Some(ForecastPoint {
                period_end,
                pv_estimate: Some(value),
            })
        })
        .collect()
}

pub fn adjusted_column_name(column: &str) -> String {
    format!("Adjusted_{}", column)
}

/// `adjusted_<stem>_<YYYYmmddHHMMSS><.ext>`, built from the base filename only.
pub fn adjusted_file_name(original: &str, at: DateTime<Utc>) -> String {
    let path = Path::new(original);
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    format!("adjusted_{}_{}{}", stem, at.format("%Y%m%d%H%M%S"), ext)
}
