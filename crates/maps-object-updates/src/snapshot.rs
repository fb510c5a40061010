use maps_object::{MapsObject, ObjectId};

use crate::{MapsObjectUpdates, ZipOptions};

/// The last collection of one object kind the platform was told about.
#[derive(Debug, Clone)]
pub struct Snapshot<T: MapsObject> {
    objects: Vec<T>,
    options: ZipOptions,
}

impl<T: MapsObject> Default for Snapshot<T> {
    fn default() -> Self {
        Self::new(ZipOptions::default())
    }
}

impl<T: MapsObject> Snapshot<T> {
    pub fn new(options: ZipOptions) -> Self {
        Self {
            objects: Vec::new(),
            options,
        }
    }

    pub fn objects(&self) -> &[T] {
        &self.objects
    }

    pub fn get(&self, id: &ObjectId<T>) -> Option<&T> {
        self.objects.iter().find(|object| object.object_id() == id)
    }

    /// Updates that turn this snapshot into `current`. The snapshot is left as is.
    pub fn diff(&self, current: &[T]) -> MapsObjectUpdates<T> {
        MapsObjectUpdates::from_objects_with_options(&self.objects, current, T::KIND, &self.options)
    }

    pub fn replace(&mut self, current: Vec<T>) {
        self.objects = current;
    }

    /// [`diff`](Self::diff) against `current`, then make `current` the snapshot.
    pub fn update(&mut self, current: Vec<T>) -> MapsObjectUpdates<T> {
        let updates = self.diff(&current);
        self.replace(current);
        updates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maps_object::{Circle, CircleId};

    #[test]
    fn test_update_replaces_snapshot() {
        let mut snapshot = Snapshot::default();
        let first = snapshot.update(vec![Circle::new("c1")]);
        assert_eq!(first.objects_to_add().len(), 1);
        assert_eq!(snapshot.objects(), &[Circle::new("c1")]);

        let second = snapshot.update(vec![Circle::new("c1")]);
        assert!(second.is_empty());

        let third = snapshot.update(vec![]);
        assert_eq!(third.object_ids_to_remove(), &[CircleId::new("c1")]);
        assert!(snapshot.objects().is_empty());
    }

    #[test]
    fn test_diff_does_not_replace() {
        let snapshot = Snapshot::<Circle>::default();
        let updates = snapshot.diff(&[Circle::new("c1")]);
        assert!(updates.is_not_empty());
        assert!(snapshot.objects().is_empty());
        assert_eq!(snapshot.get(&CircleId::new("c1")), None);
    }
}
