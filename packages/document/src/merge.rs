//! # Path-addressed deep merge
//!
//! The single write primitive behind every visual editor panel.
//!
//! ## Semantics
//!
//! Given a document, a key path, and a patch:
//!
//! - Maps merge recursively, key by key
//! - Sequences are replaced wholesale, never merged element-wise
//! - Scalars replace scalars
//! - [`Patch::Absent`] deletes the key outright
//!
//! Any intermediate along the path that is not a plain map is overwritten
//! with an empty one. This is lossy on purpose: the merge is total over its
//! input space and never errors, which keeps slider drags and rapid-fire
//! editor updates unconditionally safe.
//!
//! The input document is never mutated. Every call yields a structurally
//! new tree with no shared substructure.

use crate::PathKey;
use serde_json::{Map, Value};

/// A value to merge in at a path. `Absent` is the deletion sentinel: the
/// addressed key disappears from the result rather than being set to null.
#[derive(Debug, Clone, PartialEq)]
pub enum Patch {
    Absent,
    Value(Value),
}

impl From<Value> for Patch {
    fn from(value: Value) -> Self {
        Patch::Value(value)
    }
}

impl From<Option<Value>> for Patch {
    fn from(value: Option<Value>) -> Self {
        match value {
            Some(value) => Patch::Value(value),
            None => Patch::Absent,
        }
    }
}

/// Merge `patch` into `document` at `path`, returning the new document.
///
/// An empty path replaces the whole document (or, for `Absent`, returns it
/// unchanged). A non-map root is coerced to an empty map before the walk.
pub fn merge(document: &Value, path: &[PathKey], patch: Patch) -> Value {
    let (last, parents) = match path.split_last() {
        Some(split) => split,
        None => {
            return match patch {
                Patch::Absent => document.clone(),
                Patch::Value(value) => value,
            };
        }
    };

    let mut next = match document {
        Value::Object(map) => Value::Object(map.clone()),
        _ => Value::Object(Map::new()),
    };

    let mut cursor = next
        .as_object_mut()
        .expect("root was just coerced to a map");

    for key in parents {
        let slot = cursor
            .entry(key.as_map_key().into_owned())
            .or_insert_with(|| Value::Object(Map::new()));
        if !slot.is_object() {
            *slot = Value::Object(Map::new());
        }
        cursor = slot
            .as_object_mut()
            .expect("intermediate was just coerced to a map");
    }

    let last = last.as_map_key().into_owned();

    match patch {
        Patch::Absent => {
            cursor.remove(&last);
        }
        Patch::Value(incoming) => {
            let resolved = match (cursor.get(&last), incoming) {
                (Some(Value::Object(existing)), Value::Object(incoming)) => {
                    Value::Object(merge_maps(existing, &incoming))
                }
                (_, incoming) => incoming,
            };
            cursor.insert(last, resolved);
        }
    }

    next
}

/// Recursive key-by-key map merge. Nested maps merge; everything else in
/// `incoming` (sequences included) replaces the existing entry.
pub fn merge_maps(target: &Map<String, Value>, incoming: &Map<String, Value>) -> Map<String, Value> {
    let mut result = target.clone();

    for (key, value) in incoming {
        let resolved = match (result.get(key), value) {
            (Some(Value::Object(existing)), Value::Object(inner)) => {
                Value::Object(merge_maps(existing, inner))
            }
            (_, value) => value.clone(),
        };
        result.insert(key.clone(), resolved);
    }

    result
}
