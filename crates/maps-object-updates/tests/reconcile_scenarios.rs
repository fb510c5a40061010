mod common;

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use common::{id, obj, obj_with, sorted_ids, TestObject};
use maps_object_updates::{MapsObjectUpdates, ZipOptions};
use serde_json::json;

fn updates(previous: &[TestObject], current: &[TestObject]) -> MapsObjectUpdates<TestObject> {
    MapsObjectUpdates::from_objects(previous, current, "testObject")
}

fn hash_of(value: &MapsObjectUpdates<TestObject>) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn single_object_removed() {
    let result = updates(&[obj("m1")], &[]);
    assert_eq!(result.object_ids_to_remove(), &[id("m1")]);
    assert!(result.objects_to_add().is_empty());
    assert!(result.objects_to_change().is_empty());
}

#[test]
fn duplicate_previous_removed_once() {
    let unchecked = ZipOptions::unchecked();
    let result = MapsObjectUpdates::from_objects_with_options(&[obj("m1"), obj("m1")], &[], "testObject", &unchecked);
    assert_eq!(result.object_ids_to_remove(), &[id("m1")]);
    assert!(result.objects_to_add().is_empty());
    assert!(result.objects_to_change().is_empty());
}

#[test]
fn reorder_with_removal() {
    let result = updates(&[obj("m2"), obj("m1"), obj("m3")], &[obj("m1"), obj("m2")]);
    assert_eq!(result.object_ids_to_remove(), &[id("m3")]);
    assert!(result.objects_to_add().is_empty());
    assert!(result.objects_to_change().is_empty());
}

#[test]
fn replace_one_object() {
    let result = updates(&[obj("m1"), obj("m2")], &[obj("m1"), obj("m3")]);
    assert_eq!(result.object_ids_to_remove(), &[id("m2")]);
    assert_eq!(result.objects_to_add(), &[obj("m3")]);
    assert!(result.objects_to_change().is_empty());
}

fn mixed() -> MapsObjectUpdates<TestObject> {
    let previous = [obj("to1"), obj("to2"), obj_with("to3", 1)];
    let current = [obj("to2"), obj_with("to3", 2), obj("to4")];
    updates(&previous, &current)
}

#[test]
fn add_change_and_remove() {
    let result = mixed();
    assert_eq!(result.object_ids_to_remove(), &[id("to1")]);
    assert_eq!(result.objects_to_add(), &[obj("to4")]);
    assert_eq!(result.objects_to_change(), &[obj_with("to3", 2)]);
    assert_eq!(result.previous_of_changed(), &[obj_with("to3", 1)]);
}

#[test]
fn json_has_only_non_empty_keys() {
    let json = mixed().to_json().unwrap();
    assert_eq!(
        json,
        json!({
            "testObjectsToAdd": [{"testObjectId": "to4", "data": 0}],
            "testObjectsToChange": [{"testObjectId": "to3", "data": 2}],
            "testObjectIdsToRemove": ["to1"],
        })
    );

    let only_removal = updates(&[obj("a")], &[]).to_json().unwrap();
    assert_eq!(only_removal, json!({"testObjectIdsToRemove": ["a"]}));
}

#[test]
fn equal_update_sets_hash_equal() {
    let a = mixed();
    let b = mixed();
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn different_update_sets_are_unequal() {
    let base = mixed();
    let other_change = updates(&[obj_with("to3", 1)], &[obj_with("to3", 3)]);
    assert_ne!(base, other_change);

    let add_order_a = updates(&[], &[obj("a"), obj("b")]);
    let add_order_b = updates(&[], &[obj("b"), obj("a")]);
    assert_ne!(add_order_a, add_order_b);
}

#[test]
fn add_and_change_follow_current_order() {
    let previous = [obj_with("c", 1), obj_with("a", 1), obj("x")];
    let current = [obj("n1"), obj_with("a", 2), obj("n2"), obj_with("c", 2)];
    let result = updates(&previous, &current);
    assert_eq!(result.objects_to_add(), &[obj("n1"), obj("n2")]);
    assert_eq!(result.objects_to_change(), &[obj_with("a", 2), obj_with("c", 2)]);
    assert_eq!(sorted_ids(result.object_ids_to_remove()), ["x"]);
}

#[test]
fn trailing_removals_are_reported() {
    let previous = [obj("a"), obj("b"), obj("c")];
    let result = updates(&previous, &[obj("a")]);
    assert_eq!(sorted_ids(result.object_ids_to_remove()), ["b", "c"]);
}

#[test]
fn same_order_edits_are_changes() {
    let previous: Vec<_> = (0..100).map(|i| obj_with(&format!("o{i}"), i)).collect();
    let current: Vec<_> = (0..100).map(|i| obj_with(&format!("o{i}"), if i % 10 == 0 { -i } else { i })).collect();
    let result = updates(&previous, &current);
    let changed: Vec<_> = result.objects_to_change().iter().map(|o| o.data).collect();
    assert_eq!(changed, [-10, -20, -30, -40, -50, -60, -70, -80, -90]);
    assert!(result.objects_to_add().is_empty());
    assert!(result.object_ids_to_remove().is_empty());
}

#[test]
#[should_panic(expected = "duplicate testObject id `d`")]
fn duplicate_current_panics_with_check() {
    let checked = ZipOptions {
        check_duplicates: true,
    };
    MapsObjectUpdates::from_objects_with_options(&[obj("a")], &[obj("d"), obj("d")], "testObject", &checked);
}

#[test]
fn duplicate_current_degrades_without_check() {
    let result = MapsObjectUpdates::from_objects_with_options(
        &[obj_with("d", 1)],
        &[obj_with("d", 2), obj_with("d", 3)],
        "testObject",
        &ZipOptions::unchecked(),
    );
    // first matching pair: positional fast path
    assert_eq!(result.objects_to_change(), &[obj_with("d", 2)]);
    assert_eq!(result.objects_to_add(), &[obj_with("d", 3)]);
    assert!(result.object_ids_to_remove().is_empty());
}
