//! Map markers built from instrument records.

use crate::{
    config::{missing, StationConfig, TrackConfig, VariableNames},
    ArraySource, OceanError, Template,
};
use geo::{Coord, LineString, Point};
use std::fmt;

/// Popup image width, in pixels, for station plots.
pub const STATION_PLOT_WIDTH: u32 = 700;

/// Popup image width, in pixels, for the underway plot.
pub const TRACK_PLOT_WIDTH: u32 = 500;

/// Width used for the index in station popups.
const POPUP_INDEX_WIDTH: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instrument {
    Ctd,
    Xbt,
    Tsg,
}

impl Instrument {
    /// Config section name, also used as style id.
    pub fn key(self) -> &'static str {
        match self {
            Self::Ctd => "ctd",
            Self::Xbt => "xbt",
            Self::Tsg => "tsg",
        }
    }

    /// What a single popup refers to.
    fn record_kind(self) -> &'static str {
        match self {
            Self::Ctd => "Station",
            Self::Xbt => "Profile",
            Self::Tsg => "Data",
        }
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ctd => "CTD",
            Self::Xbt => "XBT",
            Self::Tsg => "TSG",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// A single station, at elevation 0.
    Station(Point<f64>),

    /// The ship's underway track.
    Track(LineString<f64>),
}

impl Shape {
    /// Returns the number of positions in this shape.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        match self {
            Self::Station(_) => 1,
            Self::Track(line) => line.0.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub instrument: Instrument,
    pub label: String,
    /// Popup body (HTML).
    pub popup: String,
    pub shape: Shape,
}

/// Returns one station marker per record in `dataset`.
///
/// Labels are `<name><index>` with the index zero-padded to
/// `name_format` digits.
pub fn station_markers<S: ArraySource>(
    instrument: Instrument,
    station: &StationConfig,
    names: &VariableNames,
    dataset: &S,
) -> Result<Vec<Marker>, OceanError> {
    let section = instrument.key();
    let plots = station
        .plots
        .as_deref()
        .ok_or_else(|| missing(&format!("{section}.plots")))?;
    let prefix = station
        .name
        .as_deref()
        .ok_or_else(|| missing(&format!("{section}.name")))?;
    let label_width = station
        .name_format
        .ok_or_else(|| missing(&format!("{section}.name_format")))?;
    let plot_width = station.width.unwrap_or(STATION_PLOT_WIDTH);
    let template = Template::parse(plots)?;

    let profiles = dataset.i64_array(&names.index)?;
    let (lons, lats) = coordinates(dataset, names, profiles.len())?;

    let markers = profiles
        .iter()
        .zip(lons.iter().zip(lats.iter()))
        .map(|(&profile, (&lon, &lat))| {
            let url = template.render(profile);
            Marker {
                instrument,
                label: format!("{prefix}{profile:0label_width$}"),
                popup: format!(
                    "{instrument} {}: {profile:0w$}\n{}",
                    instrument.record_kind(),
                    image_tag(&url, plot_width),
                    w = POPUP_INDEX_WIDTH,
                ),
                shape: Shape::Station(Point::new(lon, lat)),
            }
        })
        .collect::<Vec<_>>();

    Ok(markers)
}

/// Returns a single line marker following every record in `dataset`.
pub fn track_marker<S: ArraySource>(
    track: &TrackConfig,
    names: &VariableNames,
    dataset: &S,
) -> Result<Marker, OceanError> {
    let plots = track.plots.as_deref().ok_or_else(|| missing("tsg.plots"))?;
    let params = track.params.as_deref().ok_or_else(|| missing("tsg.params"))?;
    let plot_width = track.width.unwrap_or(TRACK_PLOT_WIDTH);

    let n = dataset.f64_array(&names.index)?.len();
    let (lons, lats) = coordinates(dataset, names, n)?;
    let line: LineString<f64> = lons
        .into_iter()
        .zip(lats)
        .map(|(x, y)| Coord { x, y })
        .collect();

    Ok(Marker {
        instrument: Instrument::Tsg,
        label: format!("{} - {params}", Instrument::Tsg),
        popup: image_tag(plots, plot_width),
        shape: Shape::Track(line),
    })
}

fn image_tag(url: &str, width: u32) -> String {
    format!("<img src=\"{url}\" width=\"{width}\" />")
}

/// Reads longitude and latitude, truncated to the first `n` values.
fn coordinates<S: ArraySource>(
    dataset: &S,
    names: &VariableNames,
    n: usize,
) -> Result<(Vec<f64>, Vec<f64>), OceanError> {
    let read = |name: &str| -> Result<Vec<f64>, OceanError> {
        let mut values = dataset.f64_array(name)?;
        if values.len() < n {
            return Err(OceanError::LengthMismatch {
                variable: name.to_owned(),
                expected: n,
                found: values.len(),
            });
        }
        values.truncate(n);
        Ok(values)
    };
    Ok((read(&names.longitude)?, read(&names.latitude)?))
}
