use std::fmt::Debug;

use serde::Serialize;

use crate::ObjectId;

/// A map object that can take part in reconciliation.
///
/// Implementors are immutable values: `PartialEq` compares every attribute,
/// and [`object_id`](MapsObject::object_id) names the object across
/// snapshots. Two objects with the same id but different attributes are a
/// *change*, never a new object.
pub trait MapsObject: Clone + PartialEq + Debug + Serialize {
    /// Kind label, e.g. `"marker"` or `"tileOverlay"`.
    ///
    /// Used to name serialized update fields (`markersToAdd`) and channel
    /// methods (`markers#update`).
    const KIND: &'static str;

    fn object_id(&self) -> &ObjectId<Self>;

    /// Key under which the id appears in the object's wire encoding.
    fn id_field() -> String {
        format!("{}Id", Self::KIND)
    }
}
