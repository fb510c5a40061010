//! Encoding of added and changed objects for the channel.

use maps_object::MapsObject;
use serde_json::{Map, Value};

use crate::SerializeError;

/// Encodes a list of objects for an update message.
///
/// For change lists `previous` holds, index for index, the value each object
/// had in the previous snapshot, so an implementation may send only what
/// changed. It is `None` for add lists.
pub trait ObjectSerializer {
    fn serialize<T: MapsObject>(&self, objects: &[T], previous: Option<&[T]>) -> Result<Value, SerializeError>;
}

/// Sends every object in full. This is what the platform plugins expect.
#[derive(Debug, Clone, Copy, Default)]
pub struct FullSerializer;

impl ObjectSerializer for FullSerializer {
    fn serialize<T: MapsObject>(&self, objects: &[T], _previous: Option<&[T]>) -> Result<Value, SerializeError> {
        encode(T::KIND, objects)
    }
}

/// Sends changed objects as their id plus the top-level fields whose encoding
/// differs from the previous value.
///
/// Objects without a previous value are sent in full.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiffSerializer;

impl ObjectSerializer for DiffSerializer {
    fn serialize<T: MapsObject>(&self, objects: &[T], previous: Option<&[T]>) -> Result<Value, SerializeError> {
        let id_field = T::id_field();
        let mut out = Vec::with_capacity(objects.len());
        for (i, object) in objects.iter().enumerate() {
            let current = encode(T::KIND, object)?;
            let prev = match previous.and_then(|p| p.get(i)) {
                Some(prev) => encode(T::KIND, prev)?,
                None => {
                    out.push(current);
                    continue;
                }
            };
            match (current, prev) {
                (Value::Object(current), Value::Object(prev)) => {
                    out.push(Value::Object(changed_fields(current, &prev, &id_field)));
                }
                (current, _) => out.push(current),
            }
        }
        Ok(Value::Array(out))
    }
}

fn changed_fields(current: Map<String, Value>, prev: &Map<String, Value>, id_field: &str) -> Map<String, Value> {
    current
        .into_iter()
        .filter(|(key, value)| key == id_field || prev.get(key) != Some(value))
        .collect()
}

fn encode<V: serde::Serialize + ?Sized>(kind: &'static str, value: &V) -> Result<Value, SerializeError> {
    serde_json::to_value(value).map_err(|source| SerializeError { kind, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use maps_object::{LatLng, Marker};
    use serde_json::json;

    #[test]
    fn test_full_serializer_ignores_previous() {
        let before = Marker::new("m");
        let after = Marker {
            alpha: 0.5,
            ..Marker::new("m")
        };
        let value = FullSerializer.serialize(&[after.clone()], Some(&[before][..])).unwrap();
        assert_eq!(value, json!([serde_json::to_value(&after).unwrap()]));
    }

    #[test]
    fn test_diff_serializer_sends_changed_fields_only() {
        let before = Marker::new("m");
        let after = Marker {
            alpha: 0.5,
            position: LatLng::new(1.0, 2.0),
            ..Marker::new("m")
        };
        let value = DiffSerializer.serialize(&[after], Some(&[before][..])).unwrap();
        assert_eq!(value, json!([{"markerId": "m", "alpha": 0.5, "position": [1.0, 2.0]}]));
    }

    #[test]
    fn test_diff_serializer_without_previous_sends_full() {
        let marker = Marker::new("m");
        let value = DiffSerializer.serialize(&[marker.clone()], None).unwrap();
        assert_eq!(value, json!([serde_json::to_value(&marker).unwrap()]));
    }
}
