use std::{
    collections::{BTreeMap, HashMap, HashSet, VecDeque},
    rc::Rc,
    sync::Arc,
    time::SystemTime,
};

use xmlrpc::{
    classify,
    descriptor::{ArrayType, Composite, Member, TypeDescriptor},
    type_name, wire_type, wire_type_name, Describe, WireType,
};

#[test_log::test]
fn primitives() {
    assert_eq!(wire_type::<i32>(), WireType::Int32);
    assert_eq!(wire_type::<i64>(), WireType::Int64);
    assert_eq!(wire_type::<bool>(), WireType::Boolean);
    assert_eq!(wire_type::<String>(), WireType::String);
    assert_eq!(wire_type::<&str>(), WireType::String);
    assert_eq!(wire_type::<f64>(), WireType::Double);
    assert_eq!(wire_type::<SystemTime>(), WireType::DateTime);
    assert_eq!(wire_type::<()>(), WireType::Void);

    for invalid in [
        wire_type::<u8>(),
        wire_type::<u32>(),
        wire_type::<u64>(),
        wire_type::<f32>(),
        wire_type::<char>(),
    ] {
        assert_eq!(invalid, WireType::Invalid);
    }
}

#[test_log::test]
fn wrappers_are_transparent() {
    assert_eq!(wire_type::<Option<i32>>(), WireType::Int32);
    assert_eq!(wire_type::<Box<String>>(), WireType::String);
    assert_eq!(wire_type::<Rc<Option<bool>>>(), WireType::Boolean);
    assert_eq!(wire_type::<Arc<Vec<f64>>>(), WireType::Array);
    assert_eq!(wire_type::<Option<u64>>(), WireType::Invalid);
}

#[test_log::test]
fn byte_sequences_are_binary() {
    assert_eq!(wire_type::<Vec<u8>>(), WireType::Binary);
    assert_eq!(wire_type::<[u8]>(), WireType::Binary);
    assert_eq!(wire_type::<[u8; 16]>(), WireType::Binary);
    assert_eq!(wire_type::<Option<Vec<u8>>>(), WireType::Binary);
    assert_eq!(wire_type::<Vec<Vec<u8>>>(), WireType::Array);
}

#[test_log::test]
fn arrays() {
    assert_eq!(wire_type::<Vec<i32>>(), WireType::Array);
    assert_eq!(wire_type::<[String; 3]>(), WireType::Array);
    assert_eq!(wire_type::<Vec<u64>>(), WireType::Invalid);

    let grid = TypeDescriptor::Array(ArrayType::new(TypeDescriptor::DOUBLE, 2));
    assert_eq!(classify(&grid), WireType::MultiArray);
    let invalid_grid =
        TypeDescriptor::Array(ArrayType::new_owned(TypeDescriptor::Unsupported("u16"), 2));
    assert_eq!(classify(&invalid_grid), WireType::Invalid);
    let anything = TypeDescriptor::Array(ArrayType::new(TypeDescriptor::ANY, 1));
    assert_eq!(classify(&anything), WireType::Array);
}

#[test_log::test]
fn collections() {
    assert_eq!(wire_type::<HashMap<String, i32>>(), WireType::Map);
    assert_eq!(wire_type::<BTreeMap<String, u64>>(), WireType::Map);
    assert_eq!(wire_type::<HashSet<String>>(), WireType::Sequence);
    assert_eq!(wire_type::<VecDeque<u64>>(), WireType::Sequence);
}

#[test_log::test]
fn dynamic_values() {
    assert_eq!(wire_type::<serde_json::Value>(), WireType::Struct);
    assert_eq!(
        wire_type::<serde_json::Map<String, serde_json::Value>>(),
        WireType::Struct
    );
    assert_eq!(wire_type::<Vec<serde_json::Value>>(), WireType::Array);
}

#[test_log::test]
fn any_member_rescues_composite() {
    let broken = TypeDescriptor::Composite(Composite::new_owned(
        "Reading",
        vec![
            Member::new("sensor", TypeDescriptor::STRING),
            Member::new_owned("raw", TypeDescriptor::Unsupported("u16")),
        ],
    ));
    assert_eq!(classify(&broken), WireType::Invalid);

    let lenient = TypeDescriptor::Composite(Composite::new_owned(
        "Reading",
        vec![
            Member::new("sensor", TypeDescriptor::STRING),
            Member::new_owned("raw", TypeDescriptor::Any),
        ],
    ));
    assert_eq!(classify(&lenient), WireType::Struct);
}

#[derive(Describe)]
#[allow(unused)]
struct Folder {
    name: String,
    parent: Option<Box<Folder>>,
    subfolders: Vec<Folder>,
}

#[test_log::test]
fn self_referencing_composite() {
    assert_eq!(wire_type::<Folder>(), WireType::Struct);
    // Classification leaves no state behind.
    assert_eq!(wire_type::<Folder>(), WireType::Struct);
    assert_eq!(wire_type::<Vec<Folder>>(), WireType::Array);
}

#[test_log::test]
fn names() {
    assert_eq!(wire_type_name::<i32>(), Some("integer"));
    assert_eq!(wire_type_name::<i64>(), Some("i8"));
    assert_eq!(wire_type_name::<SystemTime>(), Some("dateTime"));
    assert_eq!(wire_type_name::<Vec<u8>>(), Some("base64"));
    assert_eq!(wire_type_name::<Folder>(), Some("struct"));
    assert_eq!(wire_type_name::<HashMap<String, bool>>(), Some("struct"));
    assert_eq!(wire_type_name::<HashSet<String>>(), Some("array"));
    assert_eq!(wire_type_name::<Vec<i32>>(), Some("array"));
    assert_eq!(wire_type_name::<()>(), Some("void"));
    assert_eq!(wire_type_name::<u64>(), None);

    let grid = TypeDescriptor::Array(ArrayType::new(TypeDescriptor::INT32, 3));
    assert_eq!(type_name(&grid), Some("array"));
}
