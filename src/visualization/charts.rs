use colored::Colorize;

use super::axes::{format_y_tick, ChartAxes};
use crate::models::{SimulationConfig, SimulationState};

/// Chart title shared by the terminal and SVG renderers.
pub const CHART_TITLE: &str = "Monthly Canada Goose Population in New York State";
pub const X_AXIS_LABEL: &str = "Month";
pub const Y_AXIS_LABEL: &str = "Population (ten thousands)";

/// What occupies one cell of the terminal chart, lowest priority first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Mark {
    Blank,
    MinorGrid,
    MajorGrid,
    Target,
    Capacity,
    Population,
}

impl Mark {
    fn render(self) -> String {
        match self {
            Mark::Blank => " ".to_string(),
            Mark::MinorGrid => ".".dimmed().to_string(),
            Mark::MajorGrid => "\u{00b7}".to_string(),
            Mark::Target => "\u{2500}".yellow().to_string(),
            Mark::Capacity => "\u{2501}".red().to_string(),
            Mark::Population => "\u{25cf}".cyan().bold().to_string(),
        }
    }
}

/// Character grid for the terminal chart, top row first.
#[derive(Debug, Clone)]
pub struct ChartGrid {
    pub axes: ChartAxes,
    /// Month represented by each column
    pub months: Vec<usize>,
    /// Value at the gridline of each row, top row first
    pub row_values: Vec<f64>,
    pub cells: Vec<Vec<Mark>>,
}

impl ChartGrid {
    pub fn new(state: &SimulationState, config: &SimulationConfig) -> Self {
        let axes = ChartAxes::new(state, config);
        let months = axes.column_months();
        let steps = (axes.y_max / axes.y_minor).round() as usize;
        let row_values: Vec<f64> = (0..=steps)
            .rev()
            .map(|i| i as f64 * axes.y_minor)
            .collect();

        // major rows are solid, minor rows only show the major columns
        let cells: Vec<Vec<Mark>> = (0..=steps)
            .map(|row| {
                let major_row = (steps - row) % 2 == 0;
                months
                    .iter()
                    .map(|month| match (major_row, axes.is_major_month(*month)) {
                        (true, _) => Mark::MajorGrid,
                        (false, true) => Mark::MinorGrid,
                        (false, false) => Mark::Blank,
                    })
                    .collect()
            })
            .collect();

        let mut grid = Self {
            axes,
            months,
            row_values,
            cells,
        };

        for col in 0..grid.months.len() {
            grid.place_level(config.target_population, col, Mark::Target);
            grid.place_level(config.carrying_capacity, col, Mark::Capacity);
            if let Some(level) = state.populations.get(grid.months[col]) {
                grid.place_level(*level, col, Mark::Population);
            }
        }

        grid
    }

    /// Row whose gridline is nearest to `value`, if it lies on the chart.
    pub fn row_of(&self, value: f64) -> Option<usize> {
        if !value.is_finite() || value < 0.0 || value > self.axes.y_max {
            return None;
        }
        let steps = self.row_values.len() - 1;
        let from_bottom = (value / self.axes.y_minor).round() as usize;
        Some(steps - from_bottom.min(steps))
    }

    pub fn mark_at(&self, row: usize, col: usize) -> Mark {
        self.cells[row][col]
    }

    fn place_level(&mut self, value: f64, col: usize, mark: Mark) {
        if let Some(row) = self.row_of(value) {
            let cell = &mut self.cells[row][col];
            if mark > *cell {
                *cell = mark;
            }
        }
    }
}

/// Format the population chart as a string.
pub fn format_population_chart(state: &SimulationState, config: &SimulationConfig) -> String {
    let grid = ChartGrid::new(state, config);
    let steps = grid.row_values.len() - 1;

    let mut output = String::new();
    output.push_str(&format!("\n{}\n", CHART_TITLE.bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(70)));
    output.push_str(&format!("  {}\n", Y_AXIS_LABEL.dimmed()));

    for (row, value) in grid.row_values.iter().enumerate() {
        let label = if (steps - row) % 2 == 0 {
            format_y_tick(*value)
        } else {
            String::new()
        };
        let line: String = grid.cells[row].iter().map(|m| m.render()).collect();
        output.push_str(&format!("  {label:>6} \u{2502}{line}\n"));
    }

    let width = grid.months.len();
    output.push_str(&format!("  {:>6} \u{2514}{}\n", "", "\u{2500}".repeat(width)));
    output.push_str(&format!("  {:>6}  {}\n", "", format_x_labels(&grid)));
    output.push_str(&format!(
        "  {:>6}  {}\n",
        "",
        format!("{:^width$}", X_AXIS_LABEL, width = width.max(X_AXIS_LABEL.len())).dimmed()
    ));

    output.push_str(&format!(
        "\n  {} Population   {} Target ({})   {} Carrying capacity ({})\n",
        Mark::Population.render(),
        Mark::Target.render(),
        format_y_tick(config.target_population),
        Mark::Capacity.render(),
        format_y_tick(config.carrying_capacity),
    ));

    output
}

/// Place month labels under major columns without overlapping.
fn format_x_labels(grid: &ChartGrid) -> String {
    let mut line = String::new();
    for (col, month) in grid.months.iter().enumerate() {
        if line.len() > col || !grid.axes.is_major_month(*month) {
            continue;
        }
        line.push_str(&" ".repeat(col - line.len()));
        line.push_str(&month.to_string());
    }
    line
}

/// Print the population chart.
pub fn print_population_chart(state: &SimulationState, config: &SimulationConfig) {
    print!("{}", format_population_chart(state, config));
}
