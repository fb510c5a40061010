//! Keying helpers: turn a collection of objects into an id-indexed map.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::{MapsObject, MapsObjectError, ObjectId};

/// Key `objects` by their id.
///
/// A later object whose id was already seen replaces the earlier value (the
/// entry keeps the position of the first occurrence). This is the permissive
/// variant; use [`try_key_by_object_id`] to reject duplicates instead.
pub fn key_by_object_id<T, I>(objects: I) -> IndexMap<ObjectId<T>, T>
where
    T: MapsObject,
    I: IntoIterator<Item = T>,
{
    objects
        .into_iter()
        .map(|object| (object.object_id().clone(), object))
        .collect()
}

/// Borrowing counterpart of [`key_by_object_id`], same last-wins rule.
pub fn index_by_object_id<'a, T, I>(objects: I) -> IndexMap<&'a ObjectId<T>, &'a T>
where
    T: MapsObject + 'a,
    I: IntoIterator<Item = &'a T>,
{
    objects
        .into_iter()
        .map(|object| (object.object_id(), object))
        .collect()
}

/// Key `objects` by their id, failing on the first repeated id.
pub fn try_key_by_object_id<T, I>(objects: I) -> Result<IndexMap<ObjectId<T>, T>, MapsObjectError>
where
    T: MapsObject,
    I: IntoIterator<Item = T>,
{
    let mut keyed = IndexMap::new();
    for object in objects {
        let id = object.object_id().clone();
        if keyed.contains_key(&id) {
            return Err(MapsObjectError::DuplicateObjectId {
                kind: T::KIND,
                id: id.into_inner(),
            });
        }
        keyed.insert(id, object);
    }
    Ok(keyed)
}

/// Returns the first id that occurs more than once in `objects`.
pub fn find_duplicate_object_id<T: MapsObject>(objects: &[T]) -> Option<&ObjectId<T>> {
    let mut seen = HashSet::with_capacity(objects.len());
    objects
        .iter()
        .map(MapsObject::object_id)
        .find(|id| !seen.insert(*id))
}
