use rand::Rng;

use super::{simulate, step, RunSummary};
use crate::models::{SimulationConfig, SimulationState};

/// Unified simulation API over a fixed configuration.
pub struct Simulator<'a> {
    config: &'a SimulationConfig,
}

impl<'a> Simulator<'a> {
    pub fn new(config: &'a SimulationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimulationConfig {
        self.config
    }

    /// Fresh state at the configured initial population.
    pub fn initial_state(&self) -> SimulationState {
        SimulationState::new(self.config.initial_population)
    }

    /// Advance an existing state by one month.
    pub fn step<R: Rng + ?Sized>(&self, state: &mut SimulationState, rng: &mut R) -> f64 {
        step(self.config, state, rng)
    }

    /// Run the configured number of iterations.
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> SimulationState {
        simulate(self.config, rng)
    }

    pub fn summarize(&self, state: &SimulationState) -> RunSummary {
        RunSummary::from_state(state, self.config)
    }
}
