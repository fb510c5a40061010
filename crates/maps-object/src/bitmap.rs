//! Marker and cap images.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::MapsObjectError;

/// Image used for a marker icon or a custom polyline cap.
///
/// Encoded as a tagged list, e.g. `["defaultMarker"]`,
/// `["defaultMarker", 120.0]`, `["fromAssetImage", "pin.png", 2.0]` or
/// `["fromBytes", [137, 80, ...]]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "Value", try_from = "Value")]
pub enum BitmapDescriptor {
    /// The platform's default marker, optionally tinted with a hue in degrees.
    DefaultMarker { hue: Option<f64> },
    /// An image bundled with the application.
    AssetImage { name: String, scale: f64 },
    /// Encoded PNG bytes.
    Bytes(Vec<u8>),
}

impl BitmapDescriptor {
    pub const HUE_RED: f64 = 0.0;
    pub const HUE_ORANGE: f64 = 30.0;
    pub const HUE_YELLOW: f64 = 60.0;
    pub const HUE_GREEN: f64 = 120.0;
    pub const HUE_CYAN: f64 = 180.0;
    pub const HUE_AZURE: f64 = 210.0;
    pub const HUE_BLUE: f64 = 240.0;
    pub const HUE_VIOLET: f64 = 270.0;
    pub const HUE_MAGENTA: f64 = 300.0;
    pub const HUE_ROSE: f64 = 330.0;

    pub fn default_marker() -> Self {
        BitmapDescriptor::DefaultMarker { hue: None }
    }

    /// Default marker tinted with `hue`, which must be within `[0, 360)`.
    pub fn default_marker_with_hue(hue: f64) -> Result<Self, MapsObjectError> {
        if !(0.0..360.0).contains(&hue) {
            return Err(MapsObjectError::InvalidHue(hue));
        }
        Ok(BitmapDescriptor::DefaultMarker { hue: Some(hue) })
    }

    pub fn asset_image(name: impl Into<String>, scale: f64) -> Self {
        BitmapDescriptor::AssetImage {
            name: name.into(),
            scale,
        }
    }
}

impl Default for BitmapDescriptor {
    fn default() -> Self {
        Self::default_marker()
    }
}

impl From<BitmapDescriptor> for Value {
    fn from(bitmap: BitmapDescriptor) -> Self {
        match bitmap {
            BitmapDescriptor::DefaultMarker { hue: None } => json!(["defaultMarker"]),
            BitmapDescriptor::DefaultMarker { hue: Some(hue) } => json!(["defaultMarker", hue]),
            BitmapDescriptor::AssetImage { name, scale } => json!(["fromAssetImage", name, scale]),
            BitmapDescriptor::Bytes(bytes) => json!(["fromBytes", bytes]),
        }
    }
}

impl TryFrom<Value> for BitmapDescriptor {
    type Error = MapsObjectError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let invalid = || MapsObjectError::InvalidWireValue(format!("bitmap descriptor {value}"));
        let items = value.as_array().ok_or_else(invalid)?;
        match (items.first().and_then(Value::as_str), items.len()) {
            (Some("defaultMarker"), 1) => Ok(Self::default_marker()),
            (Some("defaultMarker"), 2) => {
                let hue = items[1].as_f64().ok_or_else(invalid)?;
                Self::default_marker_with_hue(hue)
            }
            (Some("fromAssetImage"), 2 | 3) => {
                let name = items[1].as_str().ok_or_else(invalid)?;
                let scale = match items.get(2) {
                    Some(scale) => scale.as_f64().ok_or_else(invalid)?,
                    None => 1.0,
                };
                Ok(Self::asset_image(name, scale))
            }
            (Some("fromBytes"), 2) => {
                let bytes = serde_json::from_value(items[1].clone()).map_err(|_| invalid())?;
                Ok(BitmapDescriptor::Bytes(bytes))
            }
            _ => Err(invalid()),
        }
    }
}
