use serde::{Deserialize, Serialize};

/// Number of months in the seasonal cycle.
pub const MONTHS_PER_YEAR: u8 = 12;

/// Whether a population level can still change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PopulationStatus {
    Alive,
    /// Terminal: a population of zero never recovers.
    Extinct,
}

impl PopulationStatus {
    pub fn of(population: f64) -> Self {
        if population > 0.0 {
            PopulationStatus::Alive
        } else {
            PopulationStatus::Extinct
        }
    }
}

/// Progressing state of a single run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    /// Current month of the year, 0-11
    pub month: u8,
    /// Population level per iteration; index 0 is the initial population
    pub populations: Vec<f64>,
    /// Highest level observed so far
    pub max_population: f64,
    /// Iterations that started with a strictly positive population
    pub survived: u32,
}

impl SimulationState {
    /// Start a run at month 0 with the given population.
    pub fn new(initial_population: u64) -> Self {
        let initial = initial_population as f64;
        Self {
            month: 0,
            populations: vec![initial],
            max_population: initial,
            survived: 0,
        }
    }

    /// Most recent population level.
    pub fn current(&self) -> f64 {
        self.populations.last().copied().unwrap_or(0.0)
    }

    pub fn status(&self) -> PopulationStatus {
        PopulationStatus::of(self.current())
    }

    /// Step the month counter forward with wraparound and return the new month.
    pub fn advance_month(&mut self) -> u8 {
        self.month = (self.month + 1) % MONTHS_PER_YEAR;
        self.month
    }

    /// Append the next level and update the running maximum.
    pub fn record(&mut self, population: f64) {
        if population > self.max_population {
            self.max_population = population;
        }
        self.populations.push(population);
    }

    /// Number of iterations run so far.
    pub fn iterations(&self) -> usize {
        self.populations.len().saturating_sub(1)
    }
}
