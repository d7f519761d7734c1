//! Card data model
//!
//! Cards are user-written YAML, so the model reads leniently: a known key is
//! only lifted into its typed field when its value has the expected shape.
//! Anything else stays in the owning record's `extra` mapping and is written
//! back untouched.

pub mod document;
pub mod element;
pub mod style;

pub use document::{CARD_TYPE, Document};
pub use element::{Action, Element, ElementKind};
pub use style::Style;

use serde_yaml::{Mapping, Value};

/// Remove `key` from `fields` if `read` accepts its value
fn take<T>(fields: &mut Mapping, key: &str, read: impl FnOnce(&Value) -> Option<T>) -> Option<T> {
    let value = read(fields.get(key)?)?;
    fields.shift_remove(key);
    Some(value)
}

/// String-valued key; other scalars and nulls are left in place
fn take_text(fields: &mut Mapping, key: &str) -> Option<String> {
    take(fields, key, |value| value.as_str().map(str::to_string))
}

fn take_mapping(fields: &mut Mapping, key: &str) -> Option<Mapping> {
    take(fields, key, |value| value.as_mapping().cloned())
}

fn put(fields: &mut Mapping, key: &str, value: Value) {
    fields.insert(Value::String(key.to_string()), value);
}

fn put_some(fields: &mut Mapping, key: &str, value: Option<Value>) {
    if let Some(value) = value {
        put(fields, key, value);
    }
}

/// Append unread keys after the modelled ones. A typed field written by the
/// editor wins over a raw value of the same key.
fn append_extra(fields: &mut Mapping, extra: Mapping) {
    for (key, value) in extra {
        if !fields.contains_key(&key) {
            fields.insert(key, value);
        }
    }
}
