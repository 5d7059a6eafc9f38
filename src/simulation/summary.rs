use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

use crate::models::{SimulationConfig, SimulationState};

/// Descriptive statistics of a finished run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    #[serde(with = "crate::json_float")]
    pub initial_population: f64,
    #[serde(with = "crate::json_float")]
    pub final_population: f64,
    #[serde(with = "crate::json_float")]
    pub peak_population: f64,
    #[serde(with = "crate::json_float")]
    pub mean_population: f64,
    /// Sample standard deviation across all recorded levels (0 for a single level)
    #[serde(with = "crate::json_float")]
    pub std_dev_population: f64,
    pub months_survived: u32,
    /// Index of the first zero level, if the population died out
    pub extinction_month: Option<usize>,
    /// Recorded levels at or below the management target
    pub months_at_or_below_target: usize,
}

impl RunSummary {
    pub fn from_state(state: &SimulationState, config: &SimulationConfig) -> Self {
        let levels = &state.populations;
        let std_dev_population = if levels.len() > 1 {
            levels.iter().std_dev()
        } else {
            0.0
        };

        Self {
            initial_population: levels.first().copied().unwrap_or(0.0),
            final_population: state.current(),
            peak_population: state.max_population,
            mean_population: levels.iter().mean(),
            std_dev_population,
            months_survived: state.survived,
            extinction_month: levels.iter().position(|p| *p <= 0.0),
            months_at_or_below_target: levels
                .iter()
                .filter(|p| **p <= config.target_population)
                .count(),
        }
    }
}
