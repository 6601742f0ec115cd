use anyhow::Result;
use clap::Parser;
use lithoscape_core::config::AppConfig;
use lithoscape_core::terrain::generation::generate_landscape;
use lithoscape_core::{init_logging, World};
use lithoscape_lib::export;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Override the configured RNG seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Override the configured tick limit
    #[arg(short, long)]
    ticks: Option<u64>,

    /// Where to write the terminal snapshot (count/diversity rasters)
    #[arg(short, long, default_value = "snapshot.json")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging();

    let mut config = match fs::read_to_string(&args.config) {
        Ok(content) => AppConfig::from_toml(&content)?,
        Err(e) => {
            tracing::warn!(path = %args.config, error = %e, "Config not read, using defaults");
            AppConfig::default()
        }
    };
    if let Some(seed) = args.seed {
        config.sim.seed = Some(seed);
    }
    if let Some(ticks) = args.ticks {
        config.sim.time_limit = ticks;
    }
    config.validate()?;
    tracing::info!(fingerprint = %config.fingerprint(), "Configuration loaded");

    // The demo generator and the simulation share one seed so a run is
    // reproducible end to end.
    let seed = config.sim.seed.unwrap_or_else(rand::random);
    config.sim.seed = Some(seed);
    let (raster, quarries) = generate_landscape(&config.landscape, seed);

    let mut world = World::new(raster, &quarries, config.sim.clone())?;

    if config.sim.visualize_each_tick {
        while !world.is_finished() {
            world.step()?;
            if let Some(snap) = &world.last_snapshot {
                tracing::debug!(
                    tick = snap.tick,
                    peak_count = snap.count.max_value(),
                    peak_diversity = snap.diversity.max_value(),
                    "Visualization refresh"
                );
            }
        }
    } else {
        world.run()?;
    }

    let snapshot = world.snapshot();
    export::write_snapshot_json(&args.output, &snapshot)?;

    println!(
        "Simulated {} ticks, {} foragers, {} artefacts deposited (seed {}).",
        world.tick,
        world.foragers.len(),
        snapshot.total_count(),
        world.seed()
    );
    Ok(())
}
