use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identifier of a map object of kind `T`.
///
/// The kind is a phantom parameter: a `MarkerId` and a `CircleId` holding the
/// same token are different types and cannot be compared. Within one kind,
/// equality, ordering and hashing only look at the token.
///
/// On the wire an id is its bare token string.
///
/// # Examples
///
/// ```
/// use maps_object::{Marker, MarkerId};
///
/// let a = MarkerId::new("m1");
/// let b: MarkerId = "m1".into();
/// assert_eq!(a, b);
/// assert_eq!(a.value(), "m1");
/// ```
pub struct ObjectId<T> {
    value: String,
    // `fn() -> T` keeps the id `Send + Sync` whatever `T` is.
    _kind: PhantomData<fn() -> T>,
}

impl<T> ObjectId<T> {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            _kind: PhantomData,
        }
    }

    /// The raw token.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn into_inner(self) -> String {
        self.value
    }
}

impl<T> Clone for ObjectId<T> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<T> PartialEq for ObjectId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for ObjectId<T> {}

impl<T> PartialOrd for ObjectId<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for ObjectId<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

// Must hash exactly like `str` for the `Borrow<str>` impl below to be sound.
impl<T> Hash for ObjectId<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state)
    }
}

impl<T> Borrow<str> for ObjectId<T> {
    fn borrow(&self) -> &str {
        &self.value
    }
}

impl<T> fmt::Debug for ObjectId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ObjectId").field(&self.value).finish()
    }
}

impl<T> fmt::Display for ObjectId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<T> From<&str> for ObjectId<T> {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl<T> From<String> for ObjectId<T> {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl<T> Serialize for ObjectId<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

impl<'de, T> Deserialize<'de> for ObjectId<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct Pin;

    #[test]
    fn test_equality_is_by_token() {
        let a = ObjectId::<Pin>::new("a");
        assert_eq!(a, ObjectId::new("a".to_string()));
        assert_ne!(a, ObjectId::new("b"));
    }

    #[test]
    fn test_lookup_by_str() {
        let mut map = HashMap::new();
        map.insert(ObjectId::<Pin>::new("a"), 1);
        assert_eq!(map.get("a"), Some(&1));
        assert_eq!(map.get("z"), None);
    }

    #[test]
    fn test_wire_form_is_bare_string() {
        let id = ObjectId::<Pin>::new("pin_7");
        assert_eq!(serde_json::to_value(&id).unwrap(), serde_json::json!("pin_7"));
        let back: ObjectId<Pin> = serde_json::from_str("\"pin_7\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_debug_and_display() {
        let id = ObjectId::<Pin>::new("x");
        assert_eq!(format!("{id:?}"), "ObjectId(\"x\")");
        assert_eq!(id.to_string(), "x");
    }
}
