use std::hash::{Hash, Hasher};

use serde::{Deserialize, Deserializer, Serialize};

use crate::{MapsObject, MapsObjectError, ObjectId};

pub type TileOverlayId = ObjectId<TileOverlay>;

/// A layer of raster tiles drawn over the base map.
///
/// The tile source itself lives on the platform side; only the display
/// attributes travel over the channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileOverlay {
    pub tile_overlay_id: TileOverlayId,
    #[serde(default = "default_true")]
    pub fade_in: bool,
    /// `0.0` is opaque, `1.0` fully transparent.
    #[serde(default, deserialize_with = "deserialize_transparency")]
    pub transparency: f64,
    #[serde(default)]
    pub z_index: i32,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default = "default_tile_size")]
    pub tile_size: i32,
}

fn default_true() -> bool {
    true
}

fn default_tile_size() -> i32 {
    256
}

fn check_transparency(transparency: f64) -> Result<f64, MapsObjectError> {
    if (0.0..=1.0).contains(&transparency) {
        Ok(transparency)
    } else {
        Err(MapsObjectError::InvalidTransparency(transparency))
    }
}

fn deserialize_transparency<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let transparency = f64::deserialize(deserializer)?;
    check_transparency(transparency).map_err(serde::de::Error::custom)
}

impl TileOverlay {
    pub fn new(tile_overlay_id: impl Into<TileOverlayId>) -> Self {
        Self {
            tile_overlay_id: tile_overlay_id.into(),
            fade_in: true,
            transparency: 0.0,
            z_index: 0,
            visible: true,
            tile_size: default_tile_size(),
        }
    }

    pub fn with_transparency(self, transparency: f64) -> Result<Self, MapsObjectError> {
        let transparency = check_transparency(transparency)?;
        Ok(Self { transparency, ..self })
    }
}

impl Hash for TileOverlay {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tile_overlay_id.hash(state)
    }
}

impl MapsObject for TileOverlay {
    const KIND: &'static str = "tileOverlay";

    fn object_id(&self) -> &TileOverlayId {
        &self.tile_overlay_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_transparency() {
        let overlay = TileOverlay::new("t").with_transparency(0.25).unwrap();
        assert_eq!(overlay.transparency, 0.25);
        assert_eq!(
            TileOverlay::new("t").with_transparency(1.5),
            Err(MapsObjectError::InvalidTransparency(1.5))
        );
    }

    #[test]
    fn test_decode_checks_transparency() {
        let decoded: TileOverlay =
            serde_json::from_value(serde_json::json!({"tileOverlayId": "t", "transparency": 0.75})).unwrap();
        assert_eq!(decoded.transparency, 0.75);

        let err = serde_json::from_value::<TileOverlay>(serde_json::json!({"tileOverlayId": "t", "transparency": 5.0}))
            .unwrap_err();
        assert!(err.to_string().contains("transparency must be within [0, 1], got 5"));

        let missing: TileOverlay = serde_json::from_value(serde_json::json!({"tileOverlayId": "t"})).unwrap();
        assert_eq!(missing.transparency, 0.0);
    }

    #[test]
    fn test_id_field() {
        assert_eq!(TileOverlay::id_field(), "tileOverlayId");
    }
}
