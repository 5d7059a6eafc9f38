use rand::Rng;
use tracing::{debug, info, warn};

use super::population::next_population;
use crate::models::{PopulationStatus, SimulationConfig, SimulationState};

/// Advance `state` by one month.
///
/// The month counter moves on every iteration whether or not the population
/// is still alive. Returns the newly appended level.
pub fn step<R: Rng + ?Sized>(
    config: &SimulationConfig,
    state: &mut SimulationState,
    rng: &mut R,
) -> f64 {
    let previous = state.current();
    if previous > 0.0 {
        state.survived += 1;
    }

    let month = state.advance_month();
    let next = next_population(config, previous, month, rng);
    state.record(next);

    debug!(
        iteration = state.iterations(),
        month,
        population = next,
        "population updated"
    );
    if PopulationStatus::of(previous) == PopulationStatus::Alive
        && PopulationStatus::of(next) == PopulationStatus::Extinct
    {
        warn!(iteration = state.iterations(), "population went extinct");
    }

    next
}

/// Run the full horizon and return the finished state.
pub fn simulate<R: Rng + ?Sized>(config: &SimulationConfig, rng: &mut R) -> SimulationState {
    let mut state = SimulationState::new(config.initial_population);
    state.populations.reserve(config.iterations as usize);

    info!(
        iterations = config.iterations,
        initial_population = config.initial_population,
        carrying_capacity = config.carrying_capacity,
        "starting simulation"
    );

    for _ in 0..config.iterations {
        step(config, &mut state, rng);
    }

    info!(
        final_population = state.current(),
        max_population = state.max_population,
        survived = state.survived,
        "simulation finished"
    );

    state
}
