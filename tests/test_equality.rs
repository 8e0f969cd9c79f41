use std::collections::HashSet;

use optio::{apply, is_none, none, Emptiness, Empty, Option};
use pretty_assertions::assert_eq;

#[test]
fn test_some_equals_same_value() {
    assert_eq!(Option::Some(1), Option::Some(1));
    assert!(Option::Some(1) != Option::Some(2));
}

#[test]
fn test_some_never_equals_none() {
    assert!(Option::Some(1) != Option::None);
    assert!(Option::None != Option::Some(1));
    assert!(Option::Some(1) != none());
}

#[test]
fn test_none_equals_none() {
    assert_eq!(Option::<i32>::None, Option::None);
    assert!(Option::<String>::None == none());
    assert!(none() == Option::<Vec<u8>>::None);
}

#[test]
fn test_untyped_and_typed_empties_are_equal() {
    let typed: Option<&str> = apply(None);
    let untyped: Empty = none();
    assert!(typed == untyped);
    assert!(untyped == typed);
    assert!(is_none(Some(&typed)) && is_none(Some(&untyped)));
}

#[test]
fn test_empties_of_unrelated_types_compare_equal() {
    let ints: Option<i32> = Option::None;
    let names: Option<String> = Option::None;
    let values: [&dyn Emptiness; 2] = [&ints, &names];
    assert!(values.iter().all(|v| is_none(Some(*v))));
}

#[test]
fn test_is_none_is_true_for_none() {
    assert!(is_none(Some(&none())));
}

#[test]
fn test_is_none_is_true_for_typed_none() {
    assert!(is_none(Some(&apply::<String>(None))));
}

#[test]
fn test_is_none_is_false_for_some() {
    assert!(!is_none(Some(&apply(Some("value")))));
}

#[test]
fn test_is_none_is_false_for_missing_input() {
    assert!(!is_none::<Option<i32>>(None));
    assert!(!is_none::<dyn Emptiness>(None));
}

#[test]
fn test_hash_agrees_with_equality() {
    let mut set = HashSet::new();
    set.insert(Option::Some(1));
    set.insert(apply(Some(1)));
    set.insert(Option::None);
    set.insert(none().into());
    assert_eq!(set.len(), 2);
}
