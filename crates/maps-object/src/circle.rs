use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::{Color, LatLng, MapsObject, ObjectId};

pub type CircleId = ObjectId<Circle>;

/// A circle on the earth's surface; `radius` is in meters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Circle {
    pub circle_id: CircleId,
    #[serde(default)]
    pub consume_tap_events: bool,
    #[serde(default = "default_fill_color")]
    pub fill_color: Color,
    #[serde(default)]
    pub center: LatLng,
    #[serde(default)]
    pub radius: f64,
    #[serde(default = "default_stroke_color")]
    pub stroke_color: Color,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: i32,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub z_index: i32,
}

fn default_fill_color() -> Color {
    Color::TRANSPARENT
}

fn default_stroke_color() -> Color {
    Color::BLACK
}

fn default_stroke_width() -> i32 {
    10
}

fn default_visible() -> bool {
    true
}

impl Circle {
    pub fn new(circle_id: impl Into<CircleId>) -> Self {
        Self {
            circle_id: circle_id.into(),
            consume_tap_events: false,
            fill_color: Color::TRANSPARENT,
            center: LatLng::default(),
            radius: 0.0,
            stroke_color: Color::BLACK,
            stroke_width: default_stroke_width(),
            visible: true,
            z_index: 0,
        }
    }
}

impl Hash for Circle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.circle_id.hash(state)
    }
}

impl MapsObject for Circle {
    const KIND: &'static str = "circle";

    fn object_id(&self) -> &CircleId {
        &self.circle_id
    }
}
