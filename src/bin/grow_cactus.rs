//! Cactus growth simulator
//!
//! Plants a root in an empty world, sends growth signals into it and reports
//! the resulting network.
//!
//! Usage:
//!     grow_cactus [OPTIONS]
//!
//! Options:
//!     -t, --ticks <N>         Number of growth signals to send (default: 40)
//!     --seed <SEED>           Override the config seed
//!     -c, --config <PATH>     Load species config from a JSON file
//!     -h, --help              Show this help message

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use saguaro::branch::{CactusConfig, CactusSpecies, MapSignal, NodeCollector, NodeNetVolume, PartTable};
use saguaro::core::logging;
use saguaro::core::types::IVec3;
use saguaro::voxel::{Cell, Direction, FamilyId, Grid, WriteMode, World};

fn print_help() {
    eprintln!("grow_cactus - Cactus growth simulator");
    eprintln!();
    eprintln!("Usage: grow_cactus [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("    -t, --ticks <N>         Number of growth signals to send (default: 40)");
    eprintln!("    --seed <SEED>           Override the config seed");
    eprintln!("    -c, --config <PATH>     Load species config from a JSON file");
    eprintln!("    -h, --help              Show this help message");
    eprintln!();
    eprintln!("Example:");
    eprintln!("    grow_cactus -t 100 --seed 42");
    eprintln!("    RUST_LOG=saguaro=trace grow_cactus -c ./cactus.json");
}

#[derive(Debug)]
struct Args {
    ticks: u32,
    seed: Option<u64>,
    config: Option<PathBuf>,
}

fn parse_args() -> Result<Args, String> {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut ticks: u32 = 40;
    let mut seed: Option<u64> = None;
    let mut config: Option<PathBuf> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-t" | "--ticks" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --ticks".to_string());
                }
                ticks = args[i].parse().map_err(|_| format!("Invalid ticks: {}", args[i]))?;
            }
            "--seed" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --seed".to_string());
                }
                seed = Some(args[i].parse().map_err(|_| format!("Invalid seed: {}", args[i]))?);
            }
            "-c" | "--config" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --config".to_string());
                }
                config = Some(PathBuf::from(&args[i]));
            }
            other => {
                return Err(format!("Unknown option: {}", other));
            }
        }
        i += 1;
    }

    Ok(Args { ticks, seed, config })
}

fn main() {
    logging::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_help();
            std::process::exit(1);
        }
    };

    let mut config = match &args.config {
        Some(path) => match CactusConfig::load_sync(path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Failed to load config {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => CactusConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    let species = match CactusSpecies::new(FamilyId(1), config) {
        Ok(species) => species,
        Err(e) => {
            log::error!("Invalid species config: {}", e);
            std::process::exit(1);
        }
    };
    let parts = PartTable::new().with(*species.branch());

    let mut world = World::with_loaded_region(IVec3::new(-16, 0, -16), IVec3::new(31, 31, 31));
    let root = IVec3::new(8, 0, 8);
    world.set_cell(root, Cell::Rooty, WriteMode::GROWTH);

    log::info!("Growing {} ticks (seed {})", args.ticks, species.config().seed);
    let start = Instant::now();

    let mut succeeded = 0u32;
    let mut edit_count = world.take_edits().len();
    for tick in 0..args.ticks {
        let signal = species.grow(&mut world, root);
        if signal.success {
            succeeded += 1;
        }
        edit_count += world.take_edits().len();
        log::debug!(
            "tick {}: success={} steps={} tip={}",
            tick,
            signal.success,
            signal.num_steps(),
            root + signal.delta()
        );
    }

    let mut collector = NodeCollector::default();
    let mut volume = NodeNetVolume::new(*species.branch());
    let mut signal = MapSignal::new().inspect(&mut collector).inspect(&mut volume);
    parts.analyse(&mut world, Direction::Up.step(root), &mut signal);
    let (found, overflow) = (signal.found, signal.overflow);
    drop(signal);

    log::info!(
        "Grew in {:.2}ms: {}/{} signals succeeded",
        start.elapsed().as_secs_f64() * 1000.0,
        succeeded,
        args.ticks
    );
    log::info!("Nodes: {}, volume: {}", collector.len(), volume.volume());
    log::info!("Rooted: {}, overflow: {}", found, overflow);
    edit_count += world.take_edits().len();
    log::info!("Edits: {}, chunks touched: {}", edit_count, world.take_modified().len());
}
