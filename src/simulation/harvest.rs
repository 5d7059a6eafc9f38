use std::f64::consts::PI;

use rand::Rng;

use super::noise::sample_normal;
use crate::models::SimulationConfig;

/// Seasonal modulation of the harvest draw: `sin(month * pi / 6)`.
pub fn seasonal_factor(month: u8) -> f64 {
    (month as f64 * PI / 6.0).sin()
}

/// Uncapped harvest for a month.
///
/// A draw from `Normal(harvest_rate, harvest_std_dev)` is scaled by the
/// seasonal factor and offset by half the average rate. The absolute value
/// keeps the figure non-negative when the seasonal factor turns negative.
pub fn theoretical_harvest<R: Rng + ?Sized>(
    config: &SimulationConfig,
    month: u8,
    rng: &mut R,
) -> f64 {
    let raw = sample_normal(rng, config.harvest_rate, config.harvest_std_dev);
    (seasonal_factor(month) * raw + config.harvest_rate / 2.0).abs()
}

/// Harvest for a month, limited to the configured monthly cap.
pub fn capped_harvest<R: Rng + ?Sized>(
    config: &SimulationConfig,
    month: u8,
    rng: &mut R,
) -> f64 {
    theoretical_harvest(config, month, rng).min(config.harvest_cap)
}
