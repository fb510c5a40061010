//! Polyline styling: caps, joints and stroke patterns.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{BitmapDescriptor, MapsObjectError};

/// Shape drawn at the start or end of a polyline.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(into = "Value", try_from = "Value")]
pub enum Cap {
    #[default]
    Butt,
    Round,
    Square,
    /// A bitmap scaled so that `ref_width` pixels match the stroke width.
    Custom { bitmap: BitmapDescriptor, ref_width: f64 },
}

impl From<Cap> for Value {
    fn from(cap: Cap) -> Self {
        match cap {
            Cap::Butt => json!(["buttCap"]),
            Cap::Round => json!(["roundCap"]),
            Cap::Square => json!(["squareCap"]),
            Cap::Custom { bitmap, ref_width } => json!(["customCap", Value::from(bitmap), ref_width]),
        }
    }
}

impl TryFrom<Value> for Cap {
    type Error = MapsObjectError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let invalid = || MapsObjectError::InvalidWireValue(format!("cap {value}"));
        let items = value.as_array().ok_or_else(invalid)?;
        match (items.first().and_then(Value::as_str), items.len()) {
            (Some("buttCap"), 1) => Ok(Cap::Butt),
            (Some("roundCap"), 1) => Ok(Cap::Round),
            (Some("squareCap"), 1) => Ok(Cap::Square),
            (Some("customCap"), 3) => Ok(Cap::Custom {
                bitmap: BitmapDescriptor::try_from(items[1].clone())?,
                ref_width: items[2].as_f64().ok_or_else(invalid)?,
            }),
            _ => Err(invalid()),
        }
    }
}

/// How consecutive polyline segments are joined. Encoded as `0`, `1` or `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum JointType {
    #[default]
    Mitered,
    Bevel,
    Round,
}

impl From<JointType> for u8 {
    fn from(joint: JointType) -> Self {
        match joint {
            JointType::Mitered => 0,
            JointType::Bevel => 1,
            JointType::Round => 2,
        }
    }
}

impl TryFrom<u8> for JointType {
    type Error = MapsObjectError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(JointType::Mitered),
            1 => Ok(JointType::Bevel),
            2 => Ok(JointType::Round),
            other => Err(MapsObjectError::InvalidWireValue(format!("joint type {other}"))),
        }
    }
}

/// One element of a stroke pattern: `["dot"]`, `["dash", len]` or `["gap", len]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "Value", try_from = "Value")]
pub enum PatternItem {
    Dot,
    Dash(f64),
    Gap(f64),
}

impl From<PatternItem> for Value {
    fn from(item: PatternItem) -> Self {
        match item {
            PatternItem::Dot => json!(["dot"]),
            PatternItem::Dash(length) => json!(["dash", length]),
            PatternItem::Gap(length) => json!(["gap", length]),
        }
    }
}

impl TryFrom<Value> for PatternItem {
    type Error = MapsObjectError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let invalid = || MapsObjectError::InvalidWireValue(format!("pattern item {value}"));
        let items = value.as_array().ok_or_else(invalid)?;
        let length = || items.get(1).and_then(Value::as_f64).filter(|l| *l >= 0.0);
        match (items.first().and_then(Value::as_str), items.len()) {
            (Some("dot"), 1) => Ok(PatternItem::Dot),
            (Some("dash"), 2) => length().map(PatternItem::Dash).ok_or_else(invalid),
            (Some("gap"), 2) => length().map(PatternItem::Gap).ok_or_else(invalid),
            _ => Err(invalid()),
        }
    }
}
