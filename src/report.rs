use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::models::{SimulationConfig, SimulationState};
use crate::simulation::RunSummary;

/// Everything needed to reproduce and inspect one run.
///
/// Degenerate parameters can drive levels to infinity. Non-finite levels and
/// summary values are written as the strings `"inf"`, `"-inf"` or `"NaN"` so
/// the report can always be read back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Seed of the random source, when the run was seeded
    pub seed: Option<u64>,
    pub config: SimulationConfig,
    pub summary: RunSummary,
    #[serde(with = "crate::json_float::seq")]
    pub populations: Vec<f64>,
}

impl SimulationReport {
    pub fn new(config: &SimulationConfig, state: &SimulationState, seed: Option<u64>) -> Self {
        Self {
            seed,
            config: config.clone(),
            summary: RunSummary::from_state(state, config),
            populations: state.populations.clone(),
        }
    }

    /// Serialize the report to JSON.
    pub fn to_json(&self, pretty: bool) -> Result<String, SimulationError> {
        let content = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::simulate;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_report_json_roundtrip() {
        let config = SimulationConfig {
            iterations: 12,
            ..SimulationConfig::default()
        };
        let state = simulate(&config, &mut ChaCha8Rng::seed_from_u64(4));
        let report = SimulationReport::new(&config, &state, Some(4));

        let json = report.to_json(false).unwrap();
        let parsed: SimulationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.seed, Some(4));
        assert_eq!(parsed.config, config);
        assert_eq!(parsed.populations.len(), 13);
        assert_eq!(parsed.summary.months_survived, state.survived);
    }

    #[test]
    fn test_negative_capacity_report_reads_back() {
        let config = SimulationConfig {
            carrying_capacity: -1.0,
            ..SimulationConfig::default()
        };
        let state = simulate(&config, &mut ChaCha8Rng::seed_from_u64(1));
        assert!(state.populations.iter().any(|p| p.is_infinite()));

        let report = SimulationReport::new(&config, &state, Some(1));
        let json = report.to_json(true).unwrap();
        assert!(json.contains("\"inf\""));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["populations"]
            .as_array()
            .unwrap()
            .iter()
            .all(|level| !level.is_null()));
        assert!(!value["summary"]["peak_population"].is_null());

        let parsed: SimulationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.populations, state.populations);
        assert_eq!(parsed.summary.peak_population, f64::INFINITY);
    }

    #[test]
    fn test_pretty_json_is_multiline() {
        let config = SimulationConfig::default();
        let state = SimulationState::new(config.initial_population);
        let report = SimulationReport::new(&config, &state, None);
        let json = report.to_json(true).unwrap();
        assert!(json.contains('\n'));
        assert!(json.contains("\"seed\": null"));
    }
}
