//! Assembling a [`CruiseMap`] from every enabled instrument.

use crate::{
    config::Config,
    marker::{station_markers, track_marker, Instrument},
    ArraySource, CruiseMap, OceanError,
};
use std::path::Path;

/// Builds the map for `config`, opening instrument files with `open`.
///
/// Instruments are processed in order CTD, XBT, TSG. A disabled
/// instrument (`file = "none"`) is never opened. Each dataset is
/// dropped before the next one is opened.
pub fn build_map<S, F>(config: &Config, mut open: F) -> Result<CruiseMap, OceanError>
where
    S: ArraySource,
    F: FnMut(&Path) -> Result<S, OceanError>,
{
    let mut map = CruiseMap::new(config.cruise.clone());

    for instrument in [Instrument::Ctd, Instrument::Xbt] {
        let section = instrument.key();
        let station = match instrument {
            Instrument::Xbt => config.xbt()?,
            _ => config.ctd()?,
        };
        let Some(path) = station.source() else {
            log::debug!("{instrument} disabled");
            continue;
        };
        let names = config.station_names(section, station)?;
        let dataset = open(path)?;
        let markers = station_markers(instrument, station, &names, &dataset)?;
        let n = markers.len();
        markers.into_iter().for_each(|m| map.push(m));
        match instrument {
            Instrument::Ctd => log::info!("{instrument}: {n} stations"),
            _ => log::info!("{instrument}: {n} profiles"),
        }
    }

    let track = config.tsg()?;
    match track.source() {
        None => log::debug!("{} disabled", Instrument::Tsg),
        Some(path) => {
            let names = config.track_names(track)?;
            let dataset = open(path)?;
            let marker = track_marker(track, &names, &dataset)?;
            log::info!("{}: {} data", Instrument::Tsg, marker.shape.len());
            map.push(marker);
        }
    }

    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::build_map;
    use crate::{Config, Instrument, MemoryDataset, OceanError, Shape};
    use std::path::{Path, PathBuf};

    const CONFIG: &str = r#"
        cruise    = "AMAZOMIX"
        profile   = "PROFILE"
        longitude = "LONGITUDE"
        latitude  = "LATITUDE"
        time      = "TIME"

        [ctd]
        file        = "ctd.nc"
        plots       = "http://host/CTD/AMAZOMIX-{:05d}_CTD.png"
        name        = "STA"
        name_format = 5

        [xbt]
        file        = "xbt.nc"
        plots       = "http://host/XBT/AMAZOMIX-{:05d}_XBT.png"
        name        = "XBT"
        name_format = 3

        [tsg]
        file   = "tsg.nc"
        plots  = "http://host/TSG/AMAZOMIX_TSG_COLCOR_SCATTER.png"
        params = "SSPS"
    "#;

    fn open(path: &Path) -> Result<MemoryDataset, OceanError> {
        let dataset = match path.to_str() {
            Some("ctd.nc") => MemoryDataset::new()
                .with("PROFILE", [1.0, 2.0, 12.0])
                .with("LONGITUDE", [-47.0, -46.0, -45.0])
                .with("LATITUDE", [4.0, 5.0, 6.0]),
            Some("xbt.nc") => MemoryDataset::new()
                .with("PROFILE", [7.0, 8.0])
                .with("LONGITUDE", [-40.0, -39.0])
                .with("LATITUDE", [1.0, 2.0]),
            Some("tsg.nc") => MemoryDataset::new()
                .with("TIME", [0.0, 1.0, 2.0, 3.0, 4.0])
                .with("LONGITUDE", [-47.0, -46.5, -46.0, -45.5, -45.0])
                .with("LATITUDE", [4.0, 4.5, 5.0, 5.5, 6.0]),
            _ => return Err(OceanError::MissingVariable("?".into(), path.to_owned())),
        };
        Ok(dataset)
    }

    #[test]
    fn test_all_instruments() {
        let config = Config::from_toml_str(CONFIG).unwrap();
        let map = build_map(&config, open).unwrap();
        assert_eq!(map.name(), "AMAZOMIX");
        assert_eq!(map.count(Instrument::Ctd), 3);
        assert_eq!(map.count(Instrument::Xbt), 2);
        assert_eq!(map.count(Instrument::Tsg), 1);
        assert_eq!(map.markers()[2].label, "STA00012");
        assert_eq!(map.markers()[4].label, "XBT008");
        match &map.markers()[5].shape {
            Shape::Track(line) => assert_eq!(line.0.len(), 5),
            other => panic!("unexpected shape {other:?}"),
        }
    }

    #[test]
    fn test_disabled_instruments_are_not_opened() {
        let config = Config::from_toml_str(
            &CONFIG
                .replace("\"ctd.nc\"", "\"none\"")
                .replace("\"tsg.nc\"", "\"none\""),
        )
        .unwrap();
        let mut opened: Vec<PathBuf> = Vec::new();
        let map = build_map(&config, |path: &Path| {
            opened.push(path.to_owned());
            open(path)
        })
        .unwrap();
        assert_eq!(opened, [PathBuf::from("xbt.nc")]);
        assert_eq!(map.count(Instrument::Ctd), 0);
        assert_eq!(map.count(Instrument::Tsg), 0);
        assert_eq!(map.markers().len(), 2);
    }

    #[test]
    fn test_open_failure_aborts() {
        let config = Config::from_toml_str(&CONFIG.replace("xbt.nc", "missing.nc")).unwrap();
        assert!(matches!(
            build_map(&config, open),
            Err(OceanError::MissingVariable(_, path)) if path == Path::new("missing.nc")
        ));
    }
}
