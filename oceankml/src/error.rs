use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OceanError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Netcdf(#[from] netcdf::Error),

    #[error("{0}")]
    Config(#[from] figment::Error),

    #[error("config file {0} not found")]
    ConfigNotFound(PathBuf),

    #[error("missing config key {0}")]
    MissingKey(String),

    #[error("no variable {0} in {1}")]
    MissingVariable(String, PathBuf),

    #[error("variable {variable} has {found} values, expected {expected}")]
    LengthMismatch {
        variable: String,
        expected: usize,
        found: usize,
    },

    #[error("invalid template {0:?}, {1}")]
    Template(String, String),

    #[error("{0}")]
    Kml(#[from] kml::Error),
}
