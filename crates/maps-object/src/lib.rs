//! Map overlay objects and their identities.
//!
//! Every overlay kind a map widget can declare (markers, polygons, polylines,
//! circles and tile overlays) is a plain value type carrying a kind-tagged
//! [`ObjectId`]. Two objects are the *same object* when their ids match and
//! *equal* when every attribute matches, which is what the reconciliation
//! engine in `maps-object-updates` relies on.
//!
//! The serde encoding of each kind is the wire format expected by the native
//! platform plugins (camelCase keys, `[lat, lng]` pairs, tagged lists for
//! bitmaps, caps and patterns).
//!
//! # Example
//!
//! ```
//! use maps_object::{key_by_object_id, LatLng, Marker, MapsObject};
//!
//! let home = Marker {
//!     position: LatLng::new(52.52, 13.405),
//!     ..Marker::new("home")
//! };
//! let work = Marker::new("work");
//!
//! let keyed = key_by_object_id(vec![home.clone(), work]);
//! assert_eq!(keyed.get(home.object_id()), Some(&home));
//! assert_eq!(Marker::KIND, "marker");
//! ```

pub mod bitmap;
pub mod circle;
pub mod error;
pub mod geometry;
pub mod keyed;
pub mod marker;
pub mod object;
pub mod object_id;
pub mod polygon;
pub mod polyline;
pub mod style;
pub mod tile_overlay;

pub use bitmap::BitmapDescriptor;
pub use circle::{Circle, CircleId};
pub use error::MapsObjectError;
pub use geometry::{Color, LatLng, Offset};
pub use keyed::{find_duplicate_object_id, index_by_object_id, key_by_object_id, try_key_by_object_id};
pub use marker::{InfoWindow, Marker, MarkerId};
pub use object::MapsObject;
pub use object_id::ObjectId;
pub use polygon::{Polygon, PolygonId};
pub use polyline::{Polyline, PolylineId};
pub use style::{Cap, JointType, PatternItem};
pub use tile_overlay::{TileOverlay, TileOverlayId};
