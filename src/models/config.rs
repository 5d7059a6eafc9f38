use serde::{Deserialize, Serialize};

/// Default starting population.
pub const DEFAULT_INITIAL_POPULATION: u64 = 250_000;
/// Default simulation horizon in months.
pub const DEFAULT_ITERATIONS: u32 = 72;
/// Management target the population is compared against.
pub const DEFAULT_TARGET_POPULATION: f64 = 85_000.0;
pub const DEFAULT_CARRYING_CAPACITY: f64 = 275_000.0;
pub const DEFAULT_GROWTH_RATE: f64 = 1.00685;
pub const DEFAULT_HARVEST_RATE: f64 = 16_000.0;
pub const DEFAULT_HARVEST_STD_DEV: f64 = 5_000.0;
pub const DEFAULT_HARVEST_CAP: f64 = 50_000.0;
/// Standard deviation of the monthly census measurement error.
pub const DEFAULT_CENSUS_STD_DEV: f64 = 1_000.0;

/// Parameters for a single simulation run.
///
/// Built once before the run starts and never mutated afterwards. No field is
/// validated: negative or zero values are carried into the model as given and
/// only the resulting population is clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Population at month 0
    pub initial_population: u64,
    /// Number of monthly iterations to run
    pub iterations: u32,
    /// Management target level (reference line only)
    pub target_population: f64,
    /// Logistic carrying capacity (K)
    pub carrying_capacity: f64,
    /// Logistic growth rate (r), applied during the mating season
    pub growth_rate: f64,
    /// Average number of geese harvested per month
    pub harvest_rate: f64,
    /// Standard deviation of the monthly harvest draw
    pub harvest_std_dev: f64,
    /// Hard ceiling on geese harvested per month
    pub harvest_cap: f64,
    /// Standard deviation of the census noise added each month
    pub census_std_dev: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            initial_population: DEFAULT_INITIAL_POPULATION,
            iterations: DEFAULT_ITERATIONS,
            target_population: DEFAULT_TARGET_POPULATION,
            carrying_capacity: DEFAULT_CARRYING_CAPACITY,
            growth_rate: DEFAULT_GROWTH_RATE,
            harvest_rate: DEFAULT_HARVEST_RATE,
            harvest_std_dev: DEFAULT_HARVEST_STD_DEV,
            harvest_cap: DEFAULT_HARVEST_CAP,
            census_std_dev: DEFAULT_CENSUS_STD_DEV,
        }
    }
}

/// User-supplied values that replace the compiled-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigOverrides {
    pub iterations: Option<u32>,
    pub initial_population: Option<u64>,
    pub carrying_capacity: Option<f64>,
    pub harvest_rate: Option<f64>,
    pub harvest_cap: Option<f64>,
}

impl SimulationConfig {
    /// Merge overrides onto the defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use goose_population_simulator::{ConfigOverrides, SimulationConfig};
    ///
    /// let config = SimulationConfig::resolve(&ConfigOverrides {
    ///     iterations: Some(12),
    ///     ..Default::default()
    /// });
    /// assert_eq!(config.iterations, 12);
    /// assert_eq!(config.initial_population, 250_000);
    /// ```
    pub fn resolve(overrides: &ConfigOverrides) -> Self {
        let defaults = Self::default();
        Self {
            initial_population: overrides
                .initial_population
                .unwrap_or(defaults.initial_population),
            iterations: overrides.iterations.unwrap_or(defaults.iterations),
            carrying_capacity: overrides
                .carrying_capacity
                .unwrap_or(defaults.carrying_capacity),
            harvest_rate: overrides.harvest_rate.unwrap_or(defaults.harvest_rate),
            harvest_cap: overrides.harvest_cap.unwrap_or(defaults.harvest_cap),
            ..defaults
        }
    }

    /// A configuration with every stochastic term switched off.
    pub fn deterministic(self) -> Self {
        Self {
            harvest_std_dev: 0.0,
            census_std_dev: 0.0,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::default();
        assert_eq!(config.initial_population, 250_000);
        assert_eq!(config.iterations, 72);
        assert_eq!(config.target_population, 85_000.0);
        assert_eq!(config.carrying_capacity, 275_000.0);
        assert_eq!(config.growth_rate, 1.00685);
        assert_eq!(config.harvest_rate, 16_000.0);
        assert_eq!(config.harvest_std_dev, 5_000.0);
        assert_eq!(config.harvest_cap, 50_000.0);
        assert_eq!(config.census_std_dev, 1_000.0);
    }

    #[test]
    fn test_resolve_without_overrides_is_default() {
        let config = SimulationConfig::resolve(&ConfigOverrides::default());
        assert_eq!(config, SimulationConfig::default());
    }

    #[test]
    fn test_resolve_applies_every_override() {
        let config = SimulationConfig::resolve(&ConfigOverrides {
            iterations: Some(10),
            initial_population: Some(1_000),
            carrying_capacity: Some(5_000.0),
            harvest_rate: Some(100.0),
            harvest_cap: Some(200.0),
        });
        assert_eq!(config.iterations, 10);
        assert_eq!(config.initial_population, 1_000);
        assert_eq!(config.carrying_capacity, 5_000.0);
        assert_eq!(config.harvest_rate, 100.0);
        assert_eq!(config.harvest_cap, 200.0);
        // untouched fields keep their defaults
        assert_eq!(config.growth_rate, DEFAULT_GROWTH_RATE);
        assert_eq!(config.harvest_std_dev, DEFAULT_HARVEST_STD_DEV);
        assert_eq!(config.target_population, DEFAULT_TARGET_POPULATION);
    }

    #[test]
    fn test_resolve_accepts_nonsensical_values() {
        let config = SimulationConfig::resolve(&ConfigOverrides {
            carrying_capacity: Some(-10.0),
            harvest_rate: Some(-500.0),
            harvest_cap: Some(-1.0),
            ..Default::default()
        });
        assert_eq!(config.carrying_capacity, -10.0);
        assert_eq!(config.harvest_rate, -500.0);
        assert_eq!(config.harvest_cap, -1.0);
    }

    #[test]
    fn test_deterministic_zeroes_noise_only() {
        let config = SimulationConfig::default().deterministic();
        assert_eq!(config.harvest_std_dev, 0.0);
        assert_eq!(config.census_std_dev, 0.0);
        assert_eq!(config.harvest_rate, DEFAULT_HARVEST_RATE);
    }

    #[test]
    fn test_config_json_roundtrip() {
        let config = SimulationConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SimulationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, config);
    }
}
