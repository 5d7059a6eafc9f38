mod config;
mod state;

pub use config::{
    ConfigOverrides, SimulationConfig, DEFAULT_CARRYING_CAPACITY, DEFAULT_CENSUS_STD_DEV,
    DEFAULT_GROWTH_RATE, DEFAULT_HARVEST_CAP, DEFAULT_HARVEST_RATE, DEFAULT_HARVEST_STD_DEV,
    DEFAULT_INITIAL_POPULATION, DEFAULT_ITERATIONS, DEFAULT_TARGET_POPULATION,
};
pub use state::{PopulationStatus, SimulationState, MONTHS_PER_YEAR};
