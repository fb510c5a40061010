#![allow(dead_code)]

use maps_object::{MapsObject, ObjectId};
use serde::Serialize;

pub type TestObjectId = ObjectId<TestObject>;

/// Minimal map object: an id plus one attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestObject {
    pub test_object_id: TestObjectId,
    pub data: i32,
}

impl MapsObject for TestObject {
    const KIND: &'static str = "testObject";

    fn object_id(&self) -> &TestObjectId {
        &self.test_object_id
    }
}

pub fn obj(id: &str) -> TestObject {
    obj_with(id, 0)
}

pub fn obj_with(id: &str, data: i32) -> TestObject {
    TestObject {
        test_object_id: TestObjectId::new(id),
        data,
    }
}

pub fn id(id: &str) -> TestObjectId {
    TestObjectId::new(id)
}

pub fn sorted_ids(ids: &[TestObjectId]) -> Vec<String> {
    let mut ids: Vec<String> = ids.iter().map(|id| id.value().to_string()).collect();
    ids.sort();
    ids
}
