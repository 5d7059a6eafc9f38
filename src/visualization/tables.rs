use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, ContentArrangement, Table};

use crate::models::SimulationConfig;
use crate::simulation::RunSummary;

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

/// Format the resolved run parameters as a string.
pub fn format_parameter_table(config: &SimulationConfig) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Simulation Parameters".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(50)));

    let mut table = new_table(vec!["Parameter", "Value", "Unit"]);
    let rows = [
        ("Initial Population", format!("{}", config.initial_population), "geese"),
        ("Iterations", format!("{}", config.iterations), "months"),
        ("Target Population", format!("{:.0}", config.target_population), "geese"),
        ("Carrying Capacity", format!("{:.0}", config.carrying_capacity), "geese"),
        ("Growth Rate", format!("{}", config.growth_rate), ""),
        ("Harvest Rate", format!("{:.0}", config.harvest_rate), "geese/month"),
        ("Harvest Std Dev", format!("{:.0}", config.harvest_std_dev), "geese/month"),
        ("Harvest Limit", format!("{:.0}", config.harvest_cap), "geese/month"),
        ("Census Std Dev", format!("{:.0}", config.census_std_dev), "geese"),
    ];
    for (name, value, unit) in rows {
        table.add_row(vec![Cell::new(name), Cell::new(value), Cell::new(unit)]);
    }

    output.push_str(&format!("{table}"));
    output
}

/// Print the resolved run parameters.
pub fn print_parameter_table(config: &SimulationConfig) {
    print!("{}", format_parameter_table(config));
}

/// Format the run summary table as a string.
pub fn format_run_summary(summary: &RunSummary) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Run Summary".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(50)));

    let mut table = new_table(vec!["Metric", "Value", "Unit"]);
    table.add_row(vec![
        Cell::new("Initial Population"),
        Cell::new(format!("{:.0}", summary.initial_population)),
        Cell::new("geese"),
    ]);
    table.add_row(vec![
        Cell::new("Final Population"),
        Cell::new(format!("{:.0}", summary.final_population)),
        Cell::new("geese"),
    ]);
    table.add_row(vec![
        Cell::new("Peak Population"),
        Cell::new(format!("{:.0}", summary.peak_population)),
        Cell::new("geese"),
    ]);
    table.add_row(vec![
        Cell::new("Mean Population"),
        Cell::new(format!("{:.1}", summary.mean_population)),
        Cell::new("geese"),
    ]);
    table.add_row(vec![
        Cell::new("Std Dev"),
        Cell::new(format!("{:.1}", summary.std_dev_population)),
        Cell::new("geese"),
    ]);
    table.add_row(vec![
        Cell::new("Months Survived"),
        Cell::new(format!("{}", summary.months_survived)),
        Cell::new("months"),
    ]);
    table.add_row(vec![
        Cell::new("At or Below Target"),
        Cell::new(format!("{}", summary.months_at_or_below_target)),
        Cell::new("months"),
    ]);
    if let Some(month) = summary.extinction_month {
        table.add_row(vec![
            Cell::new("Extinct at"),
            Cell::new(format!("{month}")),
            Cell::new("month"),
        ]);
    }

    output.push_str(&format!("{table}"));
    output
}

/// Print the run summary table.
pub fn print_run_summary(summary: &RunSummary) {
    print!("{}", format_run_summary(summary));
}
