mod options;

use anyhow::{Context, Error as AnyError};
use clap::Parser;
use log::LevelFilter;
use oceankml::{build_map, create_parent_dirs, output_path, Config, NetcdfDataset};
use options::Cli;
use std::{path::Path, time::Instant};

fn main() -> Result<(), AnyError> {
    let Cli {
        debug,
        time,
        out,
        config,
    } = Cli::parse();

    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let start = Instant::now();

    let config = Config::load(&config)
        .with_context(|| format!("loading config {}", config.display()))?;

    let map = build_map(&config, |path: &Path| {
        NetcdfDataset::open(path).map_err(|e| {
            log::error!("opening {}: {e}", path.display());
            e
        })
    })?;

    let kml_path = output_path(&config.cruise, Some(&out))?;
    create_parent_dirs(&kml_path)
        .with_context(|| format!("creating parent of {}", kml_path.display()))?;
    map.save(&kml_path)
        .with_context(|| format!("writing {}", kml_path.display()))?;
    log::info!("File {} saved", kml_path.display());

    if time {
        println!(
            "Execution time: {}",
            humantime::format_duration(start.elapsed())
        );
    }

    Ok(())
}
