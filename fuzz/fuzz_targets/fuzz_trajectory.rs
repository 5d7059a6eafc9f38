#![no_main]

use libfuzzer_sys::fuzz_target;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use goose_population_simulator::{simulation::simulate, SimulationConfig};

fn read_f64(data: &[u8], index: usize) -> f64 {
    let start = index * 8;
    data.get(start..start + 8)
        .map(|bytes| f64::from_le_bytes(bytes.try_into().unwrap()))
        .unwrap_or(0.0)
}

fuzz_target!(|data: &[u8]| {
    let config = SimulationConfig {
        initial_population: read_f64(data, 0).abs().min(1.0e12) as u64,
        iterations: (read_f64(data, 1).abs() as u32).min(600),
        target_population: read_f64(data, 2),
        carrying_capacity: read_f64(data, 3),
        growth_rate: read_f64(data, 4),
        harvest_rate: read_f64(data, 5),
        harvest_std_dev: read_f64(data, 6),
        harvest_cap: read_f64(data, 7),
        census_std_dev: read_f64(data, 8),
    };
    let seed = read_f64(data, 9).to_bits();

    let state = simulate(&config, &mut ChaCha8Rng::seed_from_u64(seed));
    assert!(state.populations.iter().all(|p| *p >= 0.0));
});
