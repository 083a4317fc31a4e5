//! Cruise maps for Google Earth from oceanographic NetCDF files.
//!
//! CTD and XBT profiles become one pushpin per station, and the
//! thermosalinograph (TSG) record becomes the ship's track. Every
//! marker carries a popup with a link to a pre-rendered plot.
//!
//! ```no_run
//! use oceankml::{build_map, create_parent_dirs, output_path, Config, NetcdfDataset};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), oceankml::OceanError> {
//! let config = Config::load("config.toml")?;
//! let map = build_map(&config, |path: &Path| NetcdfDataset::open(path))?;
//! let path = output_path(&config.cruise, Some(Path::new("examples")))?;
//! create_parent_dirs(&path)?;
//! map.save(&path)?;
//! # Ok(())
//! # }
//! ```

mod config;
mod cruise;
mod dataset;
mod document;
mod error;
mod marker;
mod output;
mod template;

pub use crate::{
    config::{Config, StationConfig, TrackConfig, VariableNames, DISABLED},
    cruise::build_map,
    dataset::{ArraySource, MemoryDataset, NetcdfDataset},
    document::{CruiseMap, PUSHPIN_HREF},
    error::OceanError,
    marker::{station_markers, track_marker, Instrument, Marker, Shape},
    output::{create_parent_dirs, normalize, output_path},
    template::Template,
};
