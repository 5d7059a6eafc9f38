use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use goose_population_simulator::{
    visualization::{print_parameter_table, print_population_chart, print_run_summary, render_svg},
    ConfigOverrides, SimulationConfig, SimulationReport, Simulator,
};

#[derive(Parser)]
#[command(
    name = "goose-sim",
    about = "Canada Goose Population Simulator - logistic growth with seasonal harvesting",
    version,
    author
)]
struct Cli {
    /// Number of monthly iterations to simulate [default: 72]
    #[arg(long)]
    iterations: Option<u32>,

    /// Starting population [default: 250000]. Applied to the run; the reference
    /// front-end parsed this flag but always started from 250000
    #[arg(long)]
    initial_population: Option<u64>,

    /// Carrying capacity of the habitat [default: 275000]
    #[arg(long, allow_negative_numbers = true)]
    carrying_capacity: Option<i64>,

    /// Average number of geese harvested per month [default: 16000]
    #[arg(long, allow_negative_numbers = true)]
    monthly_harvest_rate: Option<i64>,

    /// Maximum number of geese harvested in any month [default: 50000]
    #[arg(long, allow_negative_numbers = true)]
    monthly_harvest_limit: Option<i64>,

    /// Seed for the random source; a random seed is chosen and logged when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Also write the chart to this SVG file
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Print a JSON report instead of the chart and tables
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            iterations: self.iterations,
            initial_population: self.initial_population,
            carrying_capacity: self.carrying_capacity.map(|v| v as f64),
            harvest_rate: self.monthly_harvest_rate.map(|v| v as f64),
            harvest_cap: self.monthly_harvest_limit.map(|v| v as f64),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = SimulationConfig::resolve(&cli.overrides());
    if let Some(initial) = cli.initial_population {
        info!(initial, "starting population overridden");
    }

    let seed = cli.seed.unwrap_or_else(rand::random);
    info!(seed, "seeding random source");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let simulator = Simulator::new(&config);
    let state = simulator.run(&mut rng);

    if let Some(path) = &cli.svg {
        render_svg(&state, &config, path)?;
    }

    if cli.json {
        let report = SimulationReport::new(&config, &state, Some(seed));
        println!("{}", report.to_json(true)?);
        return Ok(());
    }

    print_parameter_table(&config);
    print_population_chart(&state, &config);
    print_run_summary(&simulator.summarize(&state));
    println!();

    if let Some(path) = &cli.svg {
        println!(
            "{} Chart written to {}",
            "Success:".green().bold(),
            path.display()
        );
    }
    println!("  {}", format!("Seed: {seed}").dimmed());

    Ok(())
}
