use crate::models::{format_price, PropertyRecord};
use serde::Serialize;

/// Centre of Botswana, used when nothing is focused
pub const DEFAULT_CENTER: Coordinates = Coordinates {
    latitude: -24.6282,
    longitude: 25.9231,
};
pub const DEFAULT_ZOOM: u8 = 4;

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// What the map widget is told to show
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Viewport {
    pub center: Coordinates,
    pub zoom: u8,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl Viewport {
    /// Centre on a property, falling back to the default view when it has
    /// no coordinates.
    pub fn focused_on(record: &PropertyRecord, zoom: Option<u8>) -> Self {
        match coordinates(record) {
            Some(center) => Self {
                center,
                zoom: zoom.unwrap_or(DEFAULT_ZOOM),
            },
            None => Self::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MapMarker {
    pub id: String,
    pub title: String,
    pub position: Coordinates,
    pub price_label: String,
}

fn coordinates(record: &PropertyRecord) -> Option<Coordinates> {
    Some(Coordinates {
        latitude: record.location.latitude?,
        longitude: record.location.longitude?,
    })
}

/// One marker per record that has coordinates
pub fn markers<'a>(records: impl IntoIterator<Item = &'a PropertyRecord>) -> Vec<MapMarker> {
    records
        .into_iter()
        .filter_map(|r| {
            Some(MapMarker {
                id: r.id.clone(),
                title: r.title.clone(),
                position: coordinates(r)?,
                price_label: format_price(r.price, r.kind),
            })
        })
        .collect()
}
