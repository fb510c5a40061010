//! Reconciliation of map-object snapshots.
//!
//! A map widget re-declares its markers, polygons, polylines, circles and
//! tile overlays on every rebuild. This crate turns each pair of consecutive
//! declarations into the smallest add/change/remove update for the platform
//! side, and serializes it for the method channel.
//!
//! - [`zip_objects`] pairs the two snapshots by object id.
//! - [`MapsObjectUpdates`] classifies the pairs and builds the channel payload.
//! - [`MarkerUpdates`] and friends fix the payload naming for one kind.
//! - [`MapObjectsController`] remembers what was sent and forwards new deltas
//!   to a [`MethodChannel`].
//!
//! # Example
//!
//! ```
//! use maps_object::{LatLng, Marker};
//! use maps_object_updates::MarkerUpdates;
//! use serde_json::json;
//!
//! let previous = vec![Marker::new("a"), Marker::new("b")];
//! let current = vec![
//!     Marker { position: LatLng::new(1.0, 2.0), ..Marker::new("a") },
//! ];
//!
//! let updates = MarkerUpdates::from_objects(&previous, &current);
//! let payload = updates.to_json().unwrap();
//! assert_eq!(payload["markerIdsToRemove"], json!(["b"]));
//! assert_eq!(payload["markersToChange"][0]["position"], json!([1.0, 2.0]));
//! assert!(payload.get("markersToAdd").is_none());
//! ```

pub mod channel;
pub mod cli;
pub mod controller;
pub mod error;
pub mod facades;
pub mod serializer;
pub mod snapshot;
pub mod updates;
pub mod zip;

pub use channel::{MethodCall, MethodChannel, RecordingChannel};
pub use controller::MapObjectsController;
pub use error::{ChannelError, ControllerError, SerializeError};
pub use facades::{CircleUpdates, MarkerUpdates, PolygonUpdates, PolylineUpdates, TileOverlayUpdates};
pub use serializer::{DiffSerializer, FullSerializer, ObjectSerializer};
pub use snapshot::Snapshot;
pub use updates::MapsObjectUpdates;
pub use zip::{zip_objects, ZipOptions};
