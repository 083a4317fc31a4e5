//! TOML cruise configuration.
//!
//! ```toml
//! cruise    = "AMAZOMIX"
//! profile   = "PROFILE"
//! longitude = "LONGITUDE"
//! latitude  = "LATITUDE"
//! time      = "TIME"
//!
//! [ctd]
//! file        = "data/OS_AMAZOMIX_CTD.nc"
//! plots       = "http://host/amazomix/CTD/AMAZOMIX-{:05d}_CTD.png"
//! name        = "STA"
//! name_format = 5
//!
//! [tsg]
//! file   = "none"
//! plots  = "http://host/amazomix/TSG/AMAZOMIX_TSG_COLCOR_SCATTER.png"
//! params = "SSPS"
//! ```
//!
//! Keys are only checked when they are needed, so a disabled
//! instrument section may be reduced to `file = "none"`.

use crate::OceanError;
use figment::{
    providers::{Format, Toml},
    Figment,
};
use serde::Deserialize;
use std::path::Path;

/// File value which disables an instrument.
pub const DISABLED: &str = "none";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Cruise identifier, used (lowercased) as the output file name.
    #[serde(alias = "Cruise")]
    pub cruise: String,

    /// Shared name of the profile (station) index variable.
    #[serde(default, alias = "Profile")]
    pub profile: Option<String>,

    /// Shared name of the longitude variable.
    #[serde(default, alias = "Longitude")]
    pub longitude: Option<String>,

    /// Shared name of the latitude variable.
    #[serde(default, alias = "Latitude")]
    pub latitude: Option<String>,

    /// Shared name of the underway time variable.
    #[serde(default, alias = "Time")]
    pub time: Option<String>,

    #[serde(default)]
    pub ctd: Option<StationConfig>,

    #[serde(default)]
    pub xbt: Option<StationConfig>,

    #[serde(default)]
    pub tsg: Option<TrackConfig>,
}

/// Section for instruments producing discrete stations (CTD, XBT).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StationConfig {
    pub file: String,

    /// Plot image URL template, see [`Template`](crate::Template).
    pub plots: Option<String>,

    /// Label prefix.
    pub name: Option<String>,

    /// Zero-pad width of the index in labels.
    pub name_format: Option<usize>,

    /// Popup image width in pixels.
    pub width: Option<u32>,

    pub profile: Option<String>,
    pub longitude: Option<String>,
    pub latitude: Option<String>,
}

/// Section for the underway thermosalinograph track.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrackConfig {
    pub file: String,

    /// Static plot image URL.
    pub plots: Option<String>,

    /// Parameter label shown in the track name.
    pub params: Option<String>,

    /// Popup image width in pixels.
    pub width: Option<u32>,

    pub time: Option<String>,
    pub longitude: Option<String>,
    pub latitude: Option<String>,
}

/// Variable names resolved for one instrument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableNames {
    /// Profile index (stations) or time (track) variable.
    pub index: String,
    pub longitude: String,
    pub latitude: String,
}

impl Config {
    /// Reads the configuration at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, OceanError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(OceanError::ConfigNotFound(path.to_owned()));
        }
        let config: Self = Figment::new().merge(Toml::file(path)).extract()?;
        log::debug!("{config:#?}");
        Ok(config)
    }

    /// Parses a configuration from TOML text.
    pub fn from_toml_str(toml: &str) -> Result<Self, OceanError> {
        Ok(Figment::new().merge(Toml::string(toml)).extract()?)
    }

    pub fn ctd(&self) -> Result<&StationConfig, OceanError> {
        self.ctd.as_ref().ok_or_else(|| missing("ctd"))
    }

    pub fn xbt(&self) -> Result<&StationConfig, OceanError> {
        self.xbt.as_ref().ok_or_else(|| missing("xbt"))
    }

    pub fn tsg(&self) -> Result<&TrackConfig, OceanError> {
        self.tsg.as_ref().ok_or_else(|| missing("tsg"))
    }

    /// Returns `<cruise>.kml`, lowercased.
    pub fn kml_file_name(&self) -> String {
        format!("{}.kml", self.cruise.to_lowercase())
    }

    /// Variable names for the station section named `section`.
    pub fn station_names(
        &self,
        section: &str,
        station: &StationConfig,
    ) -> Result<VariableNames, OceanError> {
        Ok(VariableNames {
            index: pick(section, "profile", &station.profile, &self.profile)?,
            longitude: pick(section, "longitude", &station.longitude, &self.longitude)?,
            latitude: pick(section, "latitude", &station.latitude, &self.latitude)?,
        })
    }

    /// Variable names for the TSG track.
    pub fn track_names(&self, track: &TrackConfig) -> Result<VariableNames, OceanError> {
        Ok(VariableNames {
            index: pick("tsg", "time", &track.time, &self.time)?,
            longitude: pick("tsg", "longitude", &track.longitude, &self.longitude)?,
            latitude: pick("tsg", "latitude", &track.latitude, &self.latitude)?,
        })
    }
}

impl StationConfig {
    /// Returns the data file, or `None` when the instrument is disabled.
    pub fn source(&self) -> Option<&Path> {
        source(&self.file)
    }
}

impl TrackConfig {
    /// Returns the data file, or `None` when the instrument is disabled.
    pub fn source(&self) -> Option<&Path> {
        source(&self.file)
    }
}

fn source(file: &str) -> Option<&Path> {
    (file != DISABLED).then(|| Path::new(file))
}

/// Section value, else the shared top-level value.
fn pick(
    section: &str,
    key: &str,
    own: &Option<String>,
    shared: &Option<String>,
) -> Result<String, OceanError> {
    own.as_ref()
        .or(shared.as_ref())
        .cloned()
        .ok_or_else(|| missing(&format!("{section}.{key}")))
}

pub(crate) fn missing(key: &str) -> OceanError {
    OceanError::MissingKey(key.to_owned())
}

#[cfg(test)]
mod tests {
    use super::Config;
    use crate::OceanError;
    use std::path::Path;

    const AMAZOMIX: &str = r#"
        Cruise    = "AMAZOMIX"
        Profile   = "PROFILE"
        Longitude = "LONGITUDE"
        Latitude  = "LATITUDE"
        Time      = "TIME"

        [ctd]
        file        = "data/OS_AMAZOMIX_CTD.nc"
        plots       = "http://host/CTD/AMAZOMIX-{:05d}_CTD.png"
        name        = "STA"
        name_format = 5

        [xbt]
        file      = "none"
        longitude = "LON"

        [tsg]
        file   = "data/OS_AMAZOMIX_TSG.nc"
        plots  = "http://host/TSG/AMAZOMIX_TSG_COLCOR_SCATTER.png"
        params = "SSPS"
        time   = "DAYD"
    "#;

    #[test]
    fn test_capitalized_keys() {
        let config = Config::from_toml_str(AMAZOMIX).unwrap();
        assert_eq!(config.cruise, "AMAZOMIX");
        assert_eq!(config.profile.as_deref(), Some("PROFILE"));
        assert_eq!(config.kml_file_name(), "amazomix.kml");
        let ctd = config.ctd().unwrap();
        assert_eq!(ctd.name.as_deref(), Some("STA"));
        assert_eq!(ctd.name_format, Some(5));
        assert_eq!(ctd.source(), Some(Path::new("data/OS_AMAZOMIX_CTD.nc")));
    }

    #[test]
    fn test_none_disables_instrument() {
        let config = Config::from_toml_str(AMAZOMIX).unwrap();
        assert_eq!(config.xbt().unwrap().source(), None);
    }

    #[test]
    fn test_section_overrides_shared_names() {
        let config = Config::from_toml_str(AMAZOMIX).unwrap();
        let xbt = config.xbt().unwrap();
        let names = config.station_names("xbt", xbt).unwrap();
        assert_eq!(names.index, "PROFILE");
        assert_eq!(names.longitude, "LON");
        assert_eq!(names.latitude, "LATITUDE");

        let names = config.track_names(config.tsg().unwrap()).unwrap();
        assert_eq!(names.index, "DAYD");
    }

    #[test]
    fn test_missing_keys_are_reported_on_use() {
        let config = Config::from_toml_str(
            r#"
            cruise = "PIRATA"
            [tsg]
            file = "tsg.nc"
            "#,
        )
        .unwrap();
        assert!(matches!(config.ctd(), Err(OceanError::MissingKey(key)) if key == "ctd"));
        let err = config.track_names(config.tsg().unwrap()).unwrap_err();
        assert!(matches!(err, OceanError::MissingKey(key) if key == "tsg.time"));
    }

    #[test]
    fn test_missing_cruise_is_an_error() {
        assert!(matches!(
            Config::from_toml_str("profile = \"PROFILE\""),
            Err(OceanError::Config(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            Config::load("does/not/exist.toml"),
            Err(OceanError::ConfigNotFound(_))
        ));
    }
}
