use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum MapsObjectError {
    #[error("duplicate {kind} id `{id}`")]
    DuplicateObjectId { kind: &'static str, id: String },
    #[error("transparency must be within [0, 1], got {0}")]
    InvalidTransparency(f64),
    #[error("hue must be within [0, 360), got {0}")]
    InvalidHue(f64),
    #[error("invalid wire value: {0}")]
    InvalidWireValue(String),
}
