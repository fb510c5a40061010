//! Typed update sets for each map object kind.
//!
//! These fix the object name used in the channel payload and rename the
//! accessors after the kind (`markers_to_add`, `marker_ids_to_remove`, ...).
//! Everything else is delegated to [`MapsObjectUpdates`].

use std::fmt;
use std::ops::Deref;

use indexmap::IndexMap;
use maps_object::{
    Circle, CircleId, MapsObject, Marker, MarkerId, Polygon, PolygonId, Polyline, PolylineId, TileOverlay,
    TileOverlayId,
};

use crate::{MapsObjectUpdates, ZipOptions};

macro_rules! object_updates {
    (
        $(#[$meta:meta])*
        $name:ident($kind:ty, $id:ty) {
            add: $to_add:ident,
            remove: $ids_to_remove:ident,
            change: $to_change:ident $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Hash)]
        pub struct $name(MapsObjectUpdates<$kind>);

        impl $name {
            pub fn from_objects(previous: &[$kind], current: &[$kind]) -> Self {
                Self(MapsObjectUpdates::from_objects(previous, current, <$kind>::KIND))
            }

            pub fn from_objects_with_options(previous: &[$kind], current: &[$kind], options: &ZipOptions) -> Self {
                Self(MapsObjectUpdates::from_objects_with_options(
                    previous,
                    current,
                    <$kind>::KIND,
                    options,
                ))
            }

            pub fn from_maps(previous: &IndexMap<$id, $kind>, current: &IndexMap<$id, $kind>) -> Self {
                Self(MapsObjectUpdates::from_maps(previous, current, <$kind>::KIND))
            }

            pub fn $to_add(&self) -> &[$kind] {
                self.0.objects_to_add()
            }

            pub fn $ids_to_remove(&self) -> &[$id] {
                self.0.object_ids_to_remove()
            }

            pub fn $to_change(&self) -> &[$kind] {
                self.0.objects_to_change()
            }

            pub fn into_inner(self) -> MapsObjectUpdates<$kind> {
                self.0
            }
        }

        impl Deref for $name {
            type Target = MapsObjectUpdates<$kind>;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl From<$name> for MapsObjectUpdates<$kind> {
            fn from(updates: $name) -> Self {
                updates.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt_as(stringify!($name), f)
            }
        }
    };
}

object_updates! {
    /// Marker changes, sent as `markersToAdd` / `markersToChange` / `markerIdsToRemove`.
    MarkerUpdates(Marker, MarkerId) {
        add: markers_to_add,
        remove: marker_ids_to_remove,
        change: markers_to_change,
    }
}

object_updates! {
    PolygonUpdates(Polygon, PolygonId) {
        add: polygons_to_add,
        remove: polygon_ids_to_remove,
        change: polygons_to_change,
    }
}

object_updates! {
    PolylineUpdates(Polyline, PolylineId) {
        add: polylines_to_add,
        remove: polyline_ids_to_remove,
        change: polylines_to_change,
    }
}

object_updates! {
    CircleUpdates(Circle, CircleId) {
        add: circles_to_add,
        remove: circle_ids_to_remove,
        change: circles_to_change,
    }
}

object_updates! {
    /// Tile overlay changes, sent as `tileOverlaysToAdd` / `tileOverlaysToChange` / `tileOverlayIdsToRemove`.
    TileOverlayUpdates(TileOverlay, TileOverlayId) {
        add: tile_overlays_to_add,
        remove: tile_overlay_ids_to_remove,
        change: tile_overlays_to_change,
    }
}
