//! ResourceData built from msgpack payloads, the way Terraform sends plans

#![allow(clippy::disallowed_methods)] // Allow unwrap() in tests for clarity

use std::collections::HashMap;
use tfplug::{DiffSuppressor, Dynamic, DynamicValue, ResourceData, TfplugError};

fn object(pairs: Vec<(&str, Dynamic)>) -> DynamicValue {
    DynamicValue::new(Dynamic::Map(
        pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect::<HashMap<_, _>>(),
    ))
}

#[test]
fn decodes_prior_and_planned_state_from_msgpack() {
    let prior = object(vec![
        ("id", Dynamic::string("MY_DB")),
        ("comment", Dynamic::string("before")),
        ("tags", Dynamic::string_list(["a", "b"])),
        (
            "show_output",
            Dynamic::List(vec![Dynamic::Map(HashMap::from([(
                "comment".to_string(),
                Dynamic::string("before"),
            )]))]),
        ),
    ]);
    let planned = object(vec![
        ("id", Dynamic::string("MY_DB")),
        ("comment", Dynamic::string("after")),
        ("tags", Dynamic::string_list(["a"])),
        ("show_output", Dynamic::Unknown),
    ]);

    let data = ResourceData::from_msgpack(
        &prior.encode_msgpack().unwrap(),
        &planned.encode_msgpack().unwrap(),
    )
    .unwrap();

    assert_eq!(data.id(), Some("MY_DB"));
    assert_eq!(data.get("comment"), Some(&Dynamic::string("after")));

    let (old, new) = data.get_change("tags");
    assert_eq!(old.string_members().len(), 2);
    assert_eq!(new.string_members(), vec!["a"]);

    // unknown planned blocks fall back to the prior state
    let show = data.single_block("show_output").unwrap();
    assert_eq!(show.get("comment"), Some(&Dynamic::string("before")));
}

/// msgpack map with string values, plus attributes Terraform marks unknown
fn plan_with_unknown(known: &[(&str, &str)], unknown: &[&str]) -> Vec<u8> {
    fn push_str(bytes: &mut Vec<u8>, s: &str) {
        bytes.push(0xa0 | s.len() as u8);
        bytes.extend_from_slice(s.as_bytes());
    }

    let mut bytes = vec![0x80 | (known.len() + unknown.len()) as u8];
    for (key, value) in known {
        push_str(&mut bytes, key);
        push_str(&mut bytes, value);
    }
    for key in unknown {
        push_str(&mut bytes, key);
        // fixext1, extension type 0
        bytes.extend_from_slice(&[0xd4, 0x00, 0x00]);
    }
    bytes
}

#[test]
fn decodes_terraform_unknown_extension_in_plan() {
    let prior = object(vec![
        ("id", Dynamic::string("X")),
        (
            "show_output",
            Dynamic::List(vec![Dynamic::Map(HashMap::from([(
                "comment".to_string(),
                Dynamic::string("current"),
            )]))]),
        ),
    ]);
    let planned = plan_with_unknown(&[("id", "X")], &["show_output"]);

    let data = ResourceData::from_msgpack(&prior.encode_msgpack().unwrap(), &planned).unwrap();

    assert_eq!(data.id(), Some("X"));
    assert!(data.get_change("show_output").1.is_unknown());
    let show = data.single_block("show_output").unwrap();
    assert_eq!(show.get("comment"), Some(&Dynamic::string("current")));
}

#[test]
fn create_plan_has_no_identity() {
    let planned = object(vec![("comment", Dynamic::string("new"))]);
    let data = ResourceData::from_msgpack(&[], &planned.encode_msgpack().unwrap()).unwrap();

    assert!(!data.has_identity());
    assert!(matches!(
        data.single_block("show_output"),
        Err(TfplugError::AttributeNotFound(_))
    ));
}

#[test]
fn non_object_state_is_rejected() {
    let scalar = DynamicValue::new(Dynamic::string("oops"))
        .encode_msgpack()
        .unwrap();
    assert!(matches!(
        ResourceData::from_msgpack(&scalar, &[]),
        Err(TfplugError::TypeMismatch { .. })
    ));
}

#[test]
fn closures_plug_in_as_suppressors() {
    let ignore_case =
        |_: &str, old: &str, new: &str, _: &ResourceData| old.eq_ignore_ascii_case(new);
    let data = ResourceData::new();

    assert!(ignore_case.suppress("name", "abc", "ABC", &data));
    assert!(!ignore_case.suppress("name", "abc", "xyz", &data));
}
