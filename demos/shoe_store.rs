//! Shoe-store forecasting example (Meyr, 2008).
//!
//! Run with: cargo run --example shoe_store
//! Set RUST_LOG=debug to see bootstrap and update events.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use winters_forecast::bootstrap;
use winters_forecast::models::{SmoothingConstants, WintersForecaster};
use winters_forecast::utils::calculate_metrics;

const DAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "winters_forecast=info".into()),
        )
        .init();

    println!("=== Winters' Method: Shoe Store Example ===\n");

    let history = [
        4419.0, 3821.0, 3754.0, 3910.0, 4363.0, 4518.0, 27.3333,
        6190.4761, 5755.0, 5352.0, 5540.0, 5650.0, 6143.0, 30.4666,
        5158.0, 4779.0, 5464.0, 5828.0, 6714.0, 7872.0, 42.0,
    ];
    let week_four = [8152.0, 7986.0, 8891.0, 11107.0, 12478.0, 14960.0, 81.0];

    // 1. Bootstrap initial estimates
    println!("--- Initial estimates from 3 weeks of sales ---");
    let estimate = bootstrap::estimate(&history, 7).unwrap();
    println!("Trend level a: {:.2}", estimate.trend_level);
    println!("Trend slope b: {:.2}", estimate.trend_slope);
    for (day, c) in DAYS.iter().zip(&estimate.seasonal_coefficients) {
        println!("  c[{day}] = {c:.6}");
    }

    // 2. Forecast the coming week
    let smoothing = SmoothingConstants::new(0.8, 0.8, 0.3);
    let mut model = WintersForecaster::from_estimate(estimate, smoothing).unwrap();

    println!("\n--- Forecast for week 4 ---");
    for (h, value) in model.predict(7).iter() {
        println!("  {}: {:.2}", DAYS[(h - 1) % 7], value);
    }

    // 3. Observe week 4 day by day
    println!("\n--- Day-by-day updates ---");
    let mut fitted = Vec::with_capacity(week_four.len());
    for (day, &sales) in DAYS.iter().zip(&week_four) {
        fitted.push(model.next_forecast());
        model.add_observation(sales);
        println!(
            "  {day}: observed {sales:>8.1}, next forecast {:>8.1}",
            model.next_forecast()
        );
    }

    // 4. Evaluate the one-step-ahead forecasts
    let metrics = calculate_metrics(&week_four, &fitted, 7).unwrap();
    println!("\n--- One-step-ahead accuracy (week 4) ---");
    println!("MAE:   {:.2}", metrics.mae);
    println!("RMSE:  {:.2}", metrics.rmse);
    println!("SMAPE: {:.2}%", metrics.smape);
    if let Some(mape) = metrics.mape {
        println!("MAPE:  {mape:.2}%");
    }

    println!("\n=== Example Complete ===");
}
