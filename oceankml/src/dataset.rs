//! Named 1-D arrays read from instrument files.

use crate::OceanError;
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

/// A source of named one-dimensional numeric arrays.
pub trait ArraySource {
    /// Returns every value of variable `name` as `f64`.
    fn f64_array(&self, name: &str) -> Result<Vec<f64>, OceanError>;

    /// Returns every value of variable `name` as `i64`.
    fn i64_array(&self, name: &str) -> Result<Vec<i64>, OceanError>;
}

/// A NetCDF file opened for reading.
///
/// The underlying file is closed on drop.
pub struct NetcdfDataset {
    path: PathBuf,
    file: netcdf::File,
}

impl NetcdfDataset {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, OceanError> {
        let path = path.as_ref().to_owned();
        log::debug!("opening {}", path.display());
        let file = netcdf::open(&path)?;
        Ok(Self { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn variable(&self, name: &str) -> Result<netcdf::Variable<'_>, OceanError> {
        self.file
            .variable(name)
            .ok_or_else(|| OceanError::MissingVariable(name.to_owned(), self.path.clone()))
    }
}

impl ArraySource for NetcdfDataset {
    fn f64_array(&self, name: &str) -> Result<Vec<f64>, OceanError> {
        Ok(self.variable(name)?.get_values::<f64, _>(..)?)
    }

    fn i64_array(&self, name: &str) -> Result<Vec<i64>, OceanError> {
        Ok(self.variable(name)?.get_values::<i64, _>(..)?)
    }
}

/// Arrays held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryDataset {
    arrays: HashMap<String, Vec<f64>>,
}

impl MemoryDataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) variable `name`.
    #[must_use]
    pub fn with<V: Into<Vec<f64>>>(mut self, name: &str, values: V) -> Self {
        self.arrays.insert(name.to_owned(), values.into());
        self
    }

    fn get(&self, name: &str) -> Result<&[f64], OceanError> {
        self.arrays
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| OceanError::MissingVariable(name.to_owned(), PathBuf::from("<memory>")))
    }
}

impl ArraySource for MemoryDataset {
    fn f64_array(&self, name: &str) -> Result<Vec<f64>, OceanError> {
        self.get(name).map(<[f64]>::to_vec)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn i64_array(&self, name: &str) -> Result<Vec<i64>, OceanError> {
        Ok(self.get(name)?.iter().map(|v| *v as i64).collect())
    }
}
