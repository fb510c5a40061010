use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::{BitmapDescriptor, Cap, Color, JointType, LatLng, MapsObject, ObjectId, PatternItem};

pub type PolylineId = ObjectId<Polyline>;

/// An open line through a list of points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Polyline {
    pub polyline_id: PolylineId,
    #[serde(default)]
    pub consume_tap_events: bool,
    #[serde(default = "default_color")]
    pub color: Color,
    #[serde(default)]
    pub end_cap: Cap,
    #[serde(default)]
    pub geodesic: bool,
    #[serde(default)]
    pub joint_type: JointType,
    /// Stroke pattern; empty means a solid line.
    #[serde(default, rename = "pattern")]
    pub patterns: Vec<PatternItem>,
    #[serde(default)]
    pub points: Vec<LatLng>,
    #[serde(default)]
    pub start_cap: Cap,
    /// Image repeated along the stroke instead of a solid color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stamp_style: Option<BitmapDescriptor>,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default = "default_width")]
    pub width: i32,
    #[serde(default)]
    pub z_index: i32,
}

fn default_color() -> Color {
    Color::BLACK
}

fn default_visible() -> bool {
    true
}

fn default_width() -> i32 {
    10
}

impl Polyline {
    pub fn new(polyline_id: impl Into<PolylineId>) -> Self {
        Self {
            polyline_id: polyline_id.into(),
            consume_tap_events: false,
            color: Color::BLACK,
            end_cap: Cap::Butt,
            geodesic: false,
            joint_type: JointType::Mitered,
            patterns: Vec::new(),
            points: Vec::new(),
            start_cap: Cap::Butt,
            stamp_style: None,
            visible: true,
            width: default_width(),
            z_index: 0,
        }
    }
}

impl Hash for Polyline {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.polyline_id.hash(state)
    }
}

impl MapsObject for Polyline {
    const KIND: &'static str = "polyline";

    fn object_id(&self) -> &PolylineId {
        &self.polyline_id
    }
}
