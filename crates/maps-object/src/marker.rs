use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::{BitmapDescriptor, LatLng, MapsObject, ObjectId, Offset};

pub type MarkerId = ObjectId<Marker>;

/// Text shown in the popup above a tapped marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoWindow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    /// Anchor point relative to the marker image, `[0.5, 0.0]` is top center.
    #[serde(default = "InfoWindow::default_anchor")]
    pub anchor: Offset,
}

impl InfoWindow {
    fn default_anchor() -> Offset {
        Offset::new(0.5, 0.0)
    }
}

impl Default for InfoWindow {
    fn default() -> Self {
        Self {
            title: None,
            snippet: None,
            anchor: Self::default_anchor(),
        }
    }
}

/// A point of interest drawn as an icon at a single location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    pub marker_id: MarkerId,
    #[serde(default = "defaults::alpha")]
    pub alpha: f64,
    #[serde(default = "defaults::anchor")]
    pub anchor: Offset,
    #[serde(default)]
    pub consume_tap_events: bool,
    #[serde(default)]
    pub draggable: bool,
    #[serde(default)]
    pub flat: bool,
    #[serde(default)]
    pub icon: BitmapDescriptor,
    #[serde(default)]
    pub info_window: InfoWindow,
    #[serde(default)]
    pub position: LatLng,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default = "defaults::visible")]
    pub visible: bool,
    #[serde(default)]
    pub z_index: f64,
}

mod defaults {
    use crate::Offset;

    pub fn alpha() -> f64 {
        1.0
    }

    pub fn anchor() -> Offset {
        Offset::new(0.5, 1.0)
    }

    pub fn visible() -> bool {
        true
    }
}

impl Marker {
    /// A visible, opaque default marker at `(0, 0)`.
    pub fn new(marker_id: impl Into<MarkerId>) -> Self {
        Self {
            marker_id: marker_id.into(),
            alpha: defaults::alpha(),
            anchor: defaults::anchor(),
            consume_tap_events: false,
            draggable: false,
            flat: false,
            icon: BitmapDescriptor::default_marker(),
            info_window: InfoWindow::default(),
            position: LatLng::default(),
            rotation: 0.0,
            visible: defaults::visible(),
            z_index: 0.0,
        }
    }
}

// Equal markers share an id, so hashing the id alone agrees with `==`.
impl Hash for Marker {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.marker_id.hash(state)
    }
}

impl MapsObject for Marker {
    const KIND: &'static str = "marker";

    fn object_id(&self) -> &MarkerId {
        &self.marker_id
    }
}
