mod harvest;
mod noise;
mod population;
mod simulator;
mod summary;
mod trajectory;

pub use harvest::{capped_harvest, seasonal_factor, theoretical_harvest};
pub use noise::sample_normal;
pub use population::{growth_contribution, is_mating_season, next_population, MATING_SEASON};
pub use simulator::Simulator;
pub use summary::RunSummary;
pub use trajectory::{simulate, step};
