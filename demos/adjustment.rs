use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use pv_adjust::adjust::{adjust_with_trace, adjustment_breakdown, trace_adjustment};
use pv_adjust::series::{adjust_forecast, monthly_forecast};
use pv_adjust::types::AdjustmentParams;

fn main() {
    // RUST_LOG=pv_adjust=debug shows the per-call trace
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let input = 1000.0;
    let params = AdjustmentParams {
        multiplier: 2.0,
        azimuth: 0.0,
        tilt: 90.0,
    };

    let b = adjustment_breakdown(input, params.multiplier, params.azimuth, params.tilt);
    println!("=== PV Estimate Adjustment Example ===");
    println!("Input: {:.1}", b.input);
    println!("Multiplier: {:.2}", b.multiplier);
    println!("Azimuth: {:.1}° (factor {:.3})", b.azimuth, b.azimuth_factor);
    println!("Tilt: {:.1}° (factor {:.3})", b.tilt, b.tilt_factor);
    println!("Adjusted: {:.1}", b.adjusted);
    println!();

    let traced = adjust_with_trace(input, &params, trace_adjustment);
    println!("Traced result: {:.1}", traced);
    println!();

    // PVWatts-style monthly AC output for a 4 kW array, kWh
    let ac_monthly = [
        98.0, 162.0, 301.0, 437.0, 498.0, 502.0, 511.0, 463.0, 346.0, 236.0, 121.0, 82.0,
    ];
    let west = AdjustmentParams {
        multiplier: 1.0,
        azimuth: 270.0,
        tilt: 40.0,
    };
    println!("--- Monthly output, west-facing 40° ---");
    for p in adjust_forecast(&monthly_forecast(2024, &ac_monthly), &west) {
        println!(
            "{}: {:>6.1} -> {:>6.1}",
            p.period_end.format("%Y-%m"),
            p.pv_estimate.unwrap_or_default(),
            p.adjusted.unwrap_or_default()
        );
    }
}
