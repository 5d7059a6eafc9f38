pub mod error;
mod json_float;
pub mod models;
pub mod report;
pub mod simulation;
pub mod visualization;

pub use error::SimulationError;
pub use models::{ConfigOverrides, PopulationStatus, SimulationConfig, SimulationState};
pub use report::SimulationReport;
pub use simulation::{RunSummary, Simulator};
