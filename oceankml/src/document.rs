//! In-memory cruise map and its KML serialization.

use crate::{
    marker::{Instrument, Marker, Shape},
    OceanError,
};
use kml::{
    types::{
        AltitudeMode, Coord, Element, Geometry, Icon, IconStyle, LineString, LineStyle,
        Placemark, Point, Style,
    },
    Kml, KmlDocument, KmlVersion, KmlWriter,
};
use std::{
    collections::HashMap,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

const KML_NAMESPACE: &str = "http://www.opengis.net/kml/2.2";

/// Icon tinted by station styles.
pub const PUSHPIN_HREF: &str = "http://maps.google.com/mapfiles/kml/pushpin/wht-pushpin.png";

// KML colors are `aabbggrr`.
const RED: &str = "ff0000ff";
const CYAN: &str = "ffffff00";
const BLUE: &str = "ffff0000";

const TRACK_LINE_WIDTH: f64 = 3.0;

/// An append-only collection of markers for one cruise.
#[derive(Debug, Clone, PartialEq)]
pub struct CruiseMap {
    name: String,
    markers: Vec<Marker>,
}

impl CruiseMap {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            markers: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn push(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Returns the number of markers contributed by `instrument`.
    pub fn count(&self, instrument: Instrument) -> usize {
        self.markers
            .iter()
            .filter(|m| m.instrument == instrument)
            .count()
    }

    /// Returns the complete `<kml>` tree.
    ///
    /// Each instrument style is emitted once, ahead of the placemarks
    /// referencing it.
    pub fn to_kml(&self) -> Kml {
        let mut instruments: Vec<Instrument> = Vec::new();
        for marker in &self.markers {
            if !instruments.contains(&marker.instrument) {
                instruments.push(marker.instrument);
            }
        }

        let mut elements = Vec::with_capacity(1 + instruments.len() + self.markers.len());
        elements.push(Kml::Element(Element {
            name: "name".to_owned(),
            content: Some(self.name.clone()),
            ..Default::default()
        }));
        elements.extend(instruments.into_iter().map(|i| Kml::Style(style(i))));
        elements.extend(self.markers.iter().map(placemark));

        Kml::KmlDocument(KmlDocument {
            version: KmlVersion::V22,
            attrs: HashMap::from([("xmlns".to_owned(), KML_NAMESPACE.to_owned())]),
            elements: vec![Kml::Document {
                attrs: HashMap::new(),
                elements,
            }],
        })
    }

    /// Writes the document, with an XML declaration, to `out`.
    pub fn write<W: Write>(&self, mut out: W) -> Result<(), OceanError> {
        writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        let mut writer = KmlWriter::from_writer(&mut out);
        writer.write(&self.to_kml())?;
        out.flush()?;
        Ok(())
    }

    /// Returns the serialized document.
    pub fn render(&self) -> Result<String, OceanError> {
        let mut buf = Vec::new();
        self.write(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Writes the document to a file at `path`, replacing it if it
    /// exists.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), OceanError> {
        let file = File::create(path)?;
        self.write(BufWriter::new(file))
    }
}

fn style(instrument: Instrument) -> Style {
    let id = Some(instrument.key().to_owned());
    let pushpin = |color: &str| IconStyle {
        scale: 1.0,
        icon: Icon {
            href: PUSHPIN_HREF.to_owned(),
            ..Default::default()
        },
        color: color.to_owned(),
        ..Default::default()
    };
    match instrument {
        Instrument::Ctd => Style {
            id,
            icon: Some(pushpin(RED)),
            ..Default::default()
        },
        Instrument::Xbt => Style {
            id,
            icon: Some(pushpin(CYAN)),
            ..Default::default()
        },
        Instrument::Tsg => Style {
            id,
            line: Some(LineStyle {
                color: BLUE.to_owned(),
                width: TRACK_LINE_WIDTH,
                ..Default::default()
            }),
            ..Default::default()
        },
    }
}

fn placemark(marker: &Marker) -> Kml {
    let geometry = match &marker.shape {
        Shape::Station(p) => Geometry::Point(Point {
            altitude_mode: AltitudeMode::RelativeToGround,
            ..Point::new(p.x(), p.y(), Some(0.0))
        }),
        Shape::Track(line) => Geometry::LineString(LineString::from(
            line.coords()
                .map(|c| Coord {
                    x: c.x,
                    y: c.y,
                    z: None,
                })
                .collect::<Vec<_>>(),
        )),
    };
    Kml::Placemark(Placemark {
        name: Some(marker.label.clone()),
        description: Some(marker.popup.clone()),
        geometry: Some(geometry),
        style_url: Some(format!("#{}", marker.instrument.key())),
        ..Default::default()
    })
}
