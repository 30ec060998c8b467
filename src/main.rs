//! Toroidal Life CLI - Run simulations from JSON configuration.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use toroidal_life::{
    compute::{Simulation, SimulationStats},
    schema::{LifeConfig, Seed},
};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 && args[1] == "--example" {
        print_example_config();
        return;
    }

    if args.len() < 2 {
        eprintln!("Usage: {} <config.json> [generations]", args[0]);
        eprintln!();
        eprintln!("Run a Game of Life simulation from JSON configuration.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  config.json  Path to simulation configuration file");
        eprintln!("  generations  Number of generations (default: 100)");
        eprintln!();
        eprintln!("Print an example configuration with --example.");
        process::exit(1);
    }

    let config_path = PathBuf::from(&args[1]);
    let generations: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(100);

    let config = LifeConfig::from_file(&config_path).unwrap_or_else(|e| {
        eprintln!("Error loading config: {}", e);
        process::exit(1);
    });

    // Load or create seed
    let seed = load_seed(&config_path.with_extension("seed.json"), &config);

    println!("Toroidal Life");
    println!("=============");
    println!("Grid: {}x{}", config.rows, config.cols);
    println!("Generations: {}", generations);
    println!();

    let mut simulation = Simulation::from_seed(config, &seed).unwrap_or_else(|e| {
        eprintln!("Error seeding grid: {}", e);
        process::exit(1);
    });

    print_stats("Initial state", &simulation.stats());

    println!("Running simulation...");
    let start = Instant::now();

    for i in 0..generations {
        simulation.step_once();

        // Print progress every 10%
        if (i + 1) % (generations / 10).max(1) == 0 {
            let stats = simulation.stats();
            let elapsed = start.elapsed().as_secs_f32();
            println!(
                "  Generation {}/{}: population={}, {:.1} gen/s",
                i + 1,
                generations,
                stats.population,
                (i + 1) as f32 / elapsed
            );
        }
    }

    let elapsed = start.elapsed();
    println!();
    print_stats("Final state", &simulation.stats());
    println!(
        "Time: {:.2}s ({:.1} gen/s)",
        elapsed.as_secs_f32(),
        generations as f32 / elapsed.as_secs_f32()
    );
    println!();
    print!("{}", simulation.grid());
}

fn load_seed(path: &Path, config: &LifeConfig) -> Seed {
    if !path.exists() {
        return Seed {
            pattern: toroidal_life::Pattern::Random {
                density: config.density,
                seed: None,
            },
        };
    }

    let seed_str = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading seed file: {}", e);
        process::exit(1);
    });
    serde_json::from_str(&seed_str).unwrap_or_else(|e| {
        eprintln!("Error parsing seed: {}", e);
        process::exit(1);
    })
}

fn print_stats(label: &str, stats: &SimulationStats) {
    println!("{}:", label);
    println!("  Generation: {}", stats.generation);
    println!("  Population: {}", stats.population);
    println!("  Density: {:.4}", stats.density());
    println!();
}

fn print_example_config() {
    let config = LifeConfig::default();
    let seed = Seed::default();

    match (
        serde_json::to_string_pretty(&config),
        serde_json::to_string_pretty(&seed),
    ) {
        (Ok(config), Ok(seed)) => {
            println!("Example configuration (config.json):");
            println!("{}", config);
            println!();
            println!("Example seed (config.seed.json):");
            println!("{}", seed);
        }
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("Error serializing example: {}", e);
            process::exit(1);
        }
    }
}
