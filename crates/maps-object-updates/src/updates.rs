//! The add/change/remove delta between two snapshots of one object kind.

use std::fmt;
use std::hash::{Hash, Hasher};

use indexmap::IndexMap;
use maps_object::{MapsObject, ObjectId};
use serde_json::{Map, Value};
use tracing::debug;

use crate::serializer::{FullSerializer, ObjectSerializer};
use crate::zip::{zip_objects, ZipOptions};
use crate::SerializeError;

/// Update set computed from a previous and a current snapshot.
///
/// Every id touched by the transition lands in exactly one list:
/// - [`objects_to_add`](Self::objects_to_add): only in `current`, in `current` order,
/// - [`objects_to_change`](Self::objects_to_change): in both but unequal, in `current` order,
/// - [`object_ids_to_remove`](Self::object_ids_to_remove): only in `previous`.
///
/// Objects present and equal in both snapshots appear nowhere.
///
/// Equality and hashing consider the three lists (order included) and
/// nothing else.
///
/// # Examples
///
/// ```
/// use maps_object::{Marker, MarkerId};
/// use maps_object_updates::MapsObjectUpdates;
///
/// let previous = vec![Marker::new("a"), Marker::new("b")];
/// let current = vec![Marker::new("a"), Marker::new("c")];
/// let updates = MapsObjectUpdates::from_objects(&previous, &current, "marker");
///
/// assert_eq!(updates.objects_to_add(), &[Marker::new("c")]);
/// assert_eq!(updates.object_ids_to_remove(), &[MarkerId::new("b")]);
/// assert!(updates.objects_to_change().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct MapsObjectUpdates<T: MapsObject> {
    object_name: String,
    objects_to_add: Vec<T>,
    object_ids_to_remove: Vec<ObjectId<T>>,
    objects_to_change: Vec<T>,
    previous_of_changed: Vec<T>,
}

impl<T: MapsObject> MapsObjectUpdates<T> {
    /// Diff two ordered snapshots with the default [`ZipOptions`].
    pub fn from_objects(previous: &[T], current: &[T], object_name: impl Into<String>) -> Self {
        Self::from_objects_with_options(previous, current, object_name, &ZipOptions::default())
    }

    pub fn from_objects_with_options(
        previous: &[T],
        current: &[T],
        object_name: impl Into<String>,
        options: &ZipOptions,
    ) -> Self {
        let mut updates = Self {
            object_name: object_name.into(),
            objects_to_add: Vec::new(),
            object_ids_to_remove: Vec::new(),
            objects_to_change: Vec::new(),
            previous_of_changed: Vec::new(),
        };
        zip_objects(previous, current, options, |prev, curr| match (prev, curr) {
            (None, Some(curr)) => updates.objects_to_add.push(curr.clone()),
            (Some(prev), Some(curr)) => {
                if prev != curr {
                    updates.objects_to_change.push(curr.clone());
                    updates.previous_of_changed.push(prev.clone());
                }
            }
            (Some(prev), None) => updates.object_ids_to_remove.push(prev.object_id().clone()),
            (None, None) => {}
        });
        debug!(
            kind = T::KIND,
            add = updates.objects_to_add.len(),
            change = updates.objects_to_change.len(),
            remove = updates.object_ids_to_remove.len(),
            "computed object updates"
        );
        updates
    }

    /// Diff two id-keyed snapshots, taking each map's values in iteration order.
    pub fn from_maps(
        previous: &IndexMap<ObjectId<T>, T>,
        current: &IndexMap<ObjectId<T>, T>,
        object_name: impl Into<String>,
    ) -> Self {
        let previous: Vec<T> = previous.values().cloned().collect();
        let current: Vec<T> = current.values().cloned().collect();
        Self::from_objects(&previous, &current, object_name)
    }

    pub fn object_name(&self) -> &str {
        &self.object_name
    }

    pub fn objects_to_add(&self) -> &[T] {
        &self.objects_to_add
    }

    pub fn object_ids_to_remove(&self) -> &[ObjectId<T>] {
        &self.object_ids_to_remove
    }

    pub fn objects_to_change(&self) -> &[T] {
        &self.objects_to_change
    }

    /// Previous value of each entry of [`objects_to_change`](Self::objects_to_change), same index.
    pub fn previous_of_changed(&self) -> &[T] {
        &self.previous_of_changed
    }

    /// Whether sending this update to the platform would do anything.
    pub fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.objects_to_add.is_empty() && self.object_ids_to_remove.is_empty() && self.objects_to_change.is_empty()
    }

    /// Channel payload with every object sent in full.
    ///
    /// Keys are `{name}sToAdd`, `{name}sToChange` and `{name}IdsToRemove`;
    /// a key is left out when its list is empty.
    pub fn to_json(&self) -> Result<Value, SerializeError> {
        self.to_json_with(&FullSerializer)
    }

    pub fn to_json_with<S: ObjectSerializer>(&self, serializer: &S) -> Result<Value, SerializeError> {
        let name = &self.object_name;
        let mut json = Map::new();
        if !self.objects_to_add.is_empty() {
            json.insert(format!("{name}sToAdd"), serializer.serialize(&self.objects_to_add, None)?);
        }
        if !self.objects_to_change.is_empty() {
            json.insert(
                format!("{name}sToChange"),
                serializer.serialize(&self.objects_to_change, Some(&self.previous_of_changed))?,
            );
        }
        if !self.object_ids_to_remove.is_empty() {
            let ids = self
                .object_ids_to_remove
                .iter()
                .map(|id| Value::String(id.value().to_owned()))
                .collect();
            json.insert(format!("{name}IdsToRemove"), Value::Array(ids));
        }
        Ok(Value::Object(json))
    }

    pub(crate) fn fmt_as(&self, type_name: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids: Vec<&str> = self.object_ids_to_remove.iter().map(ObjectId::value).collect();
        write!(
            f,
            "{type_name}(add: {:?}, remove: {:?}, change: {:?})",
            self.objects_to_add, ids, self.objects_to_change
        )
    }
}

impl<T: MapsObject> PartialEq for MapsObjectUpdates<T> {
    fn eq(&self, other: &Self) -> bool {
        self.objects_to_add == other.objects_to_add
            && self.object_ids_to_remove == other.object_ids_to_remove
            && self.objects_to_change == other.objects_to_change
    }
}

impl<T: MapsObject + Eq> Eq for MapsObjectUpdates<T> {}

impl<T: MapsObject + Hash> Hash for MapsObjectUpdates<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.objects_to_add.hash(state);
        self.object_ids_to_remove.hash(state);
        self.objects_to_change.hash(state);
    }
}

impl<T: MapsObject> fmt::Display for MapsObjectUpdates<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_as(&format!("MapsObjectUpdates<{}>", self.object_name), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maps_object::{key_by_object_id, LatLng, Marker, MarkerId};
    use serde_json::json;
    use std::collections::hash_map::DefaultHasher;

    fn moved(id: &str, lat: f64) -> Marker {
        Marker {
            position: LatLng::new(lat, 0.0),
            ..Marker::new(id)
        }
    }

    fn hash_of<H: Hash>(value: &H) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_classification() {
        let previous = vec![moved("keep", 1.0), moved("edit", 1.0), moved("drop", 1.0)];
        let current = vec![moved("new", 1.0), moved("keep", 1.0), moved("edit", 2.0)];
        let updates = MapsObjectUpdates::from_objects(&previous, &current, "marker");
        assert_eq!(updates.objects_to_add(), &[moved("new", 1.0)]);
        assert_eq!(updates.objects_to_change(), &[moved("edit", 2.0)]);
        assert_eq!(updates.previous_of_changed(), &[moved("edit", 1.0)]);
        assert_eq!(updates.object_ids_to_remove(), &[MarkerId::new("drop")]);
        assert!(updates.is_not_empty());
    }

    #[test]
    fn test_unchanged_is_empty() {
        let snapshot = vec![moved("a", 1.0), moved("b", 2.0)];
        let updates = MapsObjectUpdates::from_objects(&snapshot, &snapshot, "marker");
        assert!(updates.is_empty());
        assert!(!updates.is_not_empty());
        assert_eq!(updates.to_json().unwrap(), json!({}));
    }

    #[test]
    fn test_from_maps() {
        let previous = key_by_object_id(vec![moved("a", 1.0), moved("b", 1.0)]);
        let current = key_by_object_id(vec![moved("b", 5.0), moved("c", 1.0)]);
        let updates = MapsObjectUpdates::from_maps(&previous, &current, "marker");
        assert_eq!(updates.objects_to_add(), &[moved("c", 1.0)]);
        assert_eq!(updates.objects_to_change(), &[moved("b", 5.0)]);
        assert_eq!(updates.object_ids_to_remove(), &[MarkerId::new("a")]);
    }

    #[test]
    fn test_equality_ignores_name_and_previous_values() {
        let a = MapsObjectUpdates::from_objects(&[moved("x", 1.0)], &[moved("x", 2.0)], "marker");
        let b = MapsObjectUpdates::from_objects(&[moved("x", 3.0)], &[moved("x", 2.0)], "pin");
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_equality_is_order_sensitive() {
        let a = MapsObjectUpdates::from_objects(&[], &[moved("x", 1.0), moved("y", 1.0)], "marker");
        let b = MapsObjectUpdates::from_objects(&[], &[moved("y", 1.0), moved("x", 1.0)], "marker");
        assert_ne!(a, b);
    }

    #[test]
    fn test_display() {
        let updates = MapsObjectUpdates::from_objects(&[Marker::new("a")], &[], "marker");
        assert_eq!(
            updates.to_string(),
            "MapsObjectUpdates<marker>(add: [], remove: [\"a\"], change: [])"
        );
    }

    #[test]
    fn test_to_json_key_naming() {
        let previous = vec![moved("a", 1.0), moved("b", 1.0)];
        let current = vec![moved("a", 2.0), moved("c", 1.0)];
        let updates = MapsObjectUpdates::from_objects(&previous, &current, "marker");
        let json = updates.to_json().unwrap();
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["markersToAdd", "markersToChange", "markerIdsToRemove"]);
        assert_eq!(json["markerIdsToRemove"], json!(["b"]));
        assert_eq!(json["markersToAdd"][0]["markerId"], json!("c"));
        assert_eq!(json["markersToChange"][0]["position"], json!([2.0, 0.0]));
    }
}
