use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::{Color, LatLng, MapsObject, ObjectId};

pub type PolygonId = ObjectId<Polygon>;

/// A closed, filled shape, optionally with holes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Polygon {
    pub polygon_id: PolygonId,
    #[serde(default)]
    pub consume_tap_events: bool,
    #[serde(default = "default_color")]
    pub fill_color: Color,
    #[serde(default)]
    pub geodesic: bool,
    #[serde(default)]
    pub points: Vec<LatLng>,
    #[serde(default)]
    pub holes: Vec<Vec<LatLng>>,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default = "default_color")]
    pub stroke_color: Color,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: i32,
    #[serde(default)]
    pub z_index: i32,
}

fn default_color() -> Color {
    Color::BLACK
}

fn default_visible() -> bool {
    true
}

fn default_stroke_width() -> i32 {
    10
}

impl Polygon {
    pub fn new(polygon_id: impl Into<PolygonId>) -> Self {
        Self {
            polygon_id: polygon_id.into(),
            consume_tap_events: false,
            fill_color: Color::BLACK,
            geodesic: false,
            points: Vec::new(),
            holes: Vec::new(),
            visible: true,
            stroke_color: Color::BLACK,
            stroke_width: default_stroke_width(),
            z_index: 0,
        }
    }
}

impl Hash for Polygon {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.polygon_id.hash(state)
    }
}

impl MapsObject for Polygon {
    const KIND: &'static str = "polygon";

    fn object_id(&self) -> &PolygonId {
        &self.polygon_id
    }
}
