use std::ops::RangeInclusive;

use rand::Rng;

use super::harvest::capped_harvest;
use super::noise::sample_normal;
use crate::models::SimulationConfig;

/// Spring months during which the population breeds.
pub const MATING_SEASON: RangeInclusive<u8> = 3..=5;

pub fn is_mating_season(month: u8) -> bool {
    MATING_SEASON.contains(&month)
}

/// Logistic growth `r * P * (1 - P / K)`, or exactly zero outside the mating season.
pub fn growth_contribution(config: &SimulationConfig, population: f64, month: u8) -> f64 {
    if !is_mating_season(month) {
        return 0.0;
    }
    config.growth_rate * population * (1.0 - population / config.carrying_capacity)
}

/// Compute the population level that follows `population` in `month`.
///
/// Zero is absorbing: an extinct population returns zero without drawing from
/// `rng`. Otherwise growth minus the capped harvest is applied, census noise is
/// added and the result is clamped at zero. A NaN produced by degenerate
/// parameters also clamps to zero.
pub fn next_population<R: Rng + ?Sized>(
    config: &SimulationConfig,
    population: f64,
    month: u8,
    rng: &mut R,
) -> f64 {
    if population <= 0.0 {
        return 0.0;
    }

    let growth = growth_contribution(config, population, month);
    let harvest = capped_harvest(config, month, rng);
    let net_change = growth - harvest;
    let census_error = sample_normal(rng, 0.0, config.census_std_dev);

    (population + net_change + census_error).max(0.0)
}
