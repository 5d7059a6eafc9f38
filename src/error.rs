use thiserror::Error;

/// Errors that can occur while reporting a simulation run.
///
/// The population model itself never fails; only the output edges do.
#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Render error: {0}")]
    Render(String),
}
