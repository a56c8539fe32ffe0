//! Shared helpers for integration tests

#![allow(dead_code)]

use replica_core::gc::GcRef;
use replica_core::{JsArray, JsObject, Value};
use rustc_hash::FxHashSet;

/// Blank record from entries
pub fn obj(entries: Vec<(&str, Value)>) -> Value {
    Value::object(GcRef::new(JsObject::from_entries(entries)))
}

/// Array from values
pub fn arr(values: Vec<Value>) -> Value {
    Value::array(GcRef::new(JsArray::from_values(values)))
}

/// Own property of a record value
pub fn prop(value: &Value, key: &str) -> Value {
    value
        .as_object()
        .and_then(|o| o.get_own(key))
        .unwrap_or_else(|| panic!("missing property {key} on {}", value.type_name()))
}

/// Sorted own keys of a record value
pub fn sorted_keys(value: &Value) -> Vec<String> {
    let mut keys: Vec<String> = value
        .as_object()
        .expect("record")
        .own_keys()
        .iter()
        .map(|k| k.to_string())
        .collect();
    keys.sort();
    keys
}

/// Cycle-aware structural equality.
///
/// Pairs already under comparison are assumed equal, so cyclic graphs of the
/// same shape compare equal.
pub fn structurally_equal(a: &Value, b: &Value) -> bool {
    let mut assumed = FxHashSet::default();
    equal(a, b, &mut assumed)
}

fn equal(a: &Value, b: &Value, assumed: &mut FxHashSet<(usize, usize)>) -> bool {
    if let (Some(ia), Some(ib)) = (a.heap_id(), b.heap_id()) {
        if !assumed.insert((ia, ib)) {
            return true;
        }
    }

    match (a, b) {
        (Value::Object(x), Value::Object(y)) => {
            let same_template = match (x.prototype(), y.prototype()) {
                (None, None) => true,
                (Some(p), Some(q)) => p.ptr_eq(q),
                _ => false,
            };
            let mut kx = x.own_keys();
            let mut ky = y.own_keys();
            kx.sort();
            ky.sort();
            same_template
                && kx == ky
                && kx.iter().all(|k| match (x.get_own(k), y.get_own(k)) {
                    (Some(vx), Some(vy)) => equal(&vx, &vy, assumed),
                    _ => false,
                })
        }
        (Value::Array(x), Value::Array(y)) => {
            let (vx, vy) = (x.to_vec(), y.to_vec());
            vx.len() == vy.len() && vx.iter().zip(&vy).all(|(p, q)| equal(p, q, assumed))
        }
        (Value::Boxed(x), Value::Boxed(y)) => x.primitive() == y.primitive(),
        (Value::Date(x), Value::Date(y)) => {
            Value::number(x.time_value()) == Value::number(y.time_value())
        }
        (Value::RegExp(x), Value::RegExp(y)) => {
            x.source == y.source && x.flags == y.flags && x.last_index() == y.last_index()
        }
        (Value::ArrayBuffer(x), Value::ArrayBuffer(y)) => x.to_vec() == y.to_vec(),
        (Value::TypedArray(x), Value::TypedArray(y)) => {
            x.kind() == y.kind()
                && x.byte_offset() == y.byte_offset()
                && x.length() == y.length()
                && x.buffer().to_vec() == y.buffer().to_vec()
        }
        (Value::Blob(x), Value::Blob(y)) => {
            x.bytes() == y.bytes() && x.content_type() == y.content_type()
        }
        (Value::Host(x), Value::Host(y)) => x.type_name() == y.type_name(),
        _ => a == b,
    }
}

/// Identities of every copyable reference reachable from `value`.
///
/// Functions and record templates are shared by design and left out.
pub fn reachable_ids(value: &Value) -> FxHashSet<usize> {
    let mut seen = FxHashSet::default();
    let mut stack = vec![value.clone()];
    while let Some(current) = stack.pop() {
        if current.is_function() {
            continue;
        }
        let Some(id) = current.heap_id() else {
            continue;
        };
        if !seen.insert(id) {
            continue;
        }
        match &current {
            Value::Object(o) => stack.extend(o.own_entries().into_iter().map(|(_, v)| v)),
            Value::Array(a) => stack.extend(a.to_vec()),
            Value::TypedArray(ta) => stack.push(Value::array_buffer(ta.buffer().clone())),
            _ => {}
        }
    }
    seen
}
