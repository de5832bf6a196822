//! # JSON-mode reconciliation
//!
//! The raw-JSON editor shows either the whole config or a single module
//! (`typography`, `colors`, `layout`, `identity`). What the user sees is a
//! view; what gets applied must be reconciled back into the full document
//! without clobbering modules that were not on screen.
//!
//! When scoped to one module, anything in the pasted text outside that
//! module's key is ignored. This prevents a stale full-document paste from
//! silently wiping sibling modules, but can surprise a user who pastes a
//! full config into a narrow view, so the ignored keys are reported back
//! for the UI to surface as a warning.

use crate::DocumentError;
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// A recognized top-level config module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Colors,
    Typography,
    Layout,
    Identity,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Colors,
        Section::Typography,
        Section::Layout,
        Section::Identity,
    ];

    /// The top-level document key this module lives under.
    pub fn key(&self) -> &'static str {
        match self {
            Section::Colors => "colors",
            Section::Typography => "typography",
            Section::Layout => "layout",
            Section::Identity => "identity",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Section {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.key() == s)
            .ok_or_else(|| DocumentError::UnknownModule(s.to_string()))
    }
}

/// What part of the document the JSON editor currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditScope {
    /// The whole config: the parsed text is the next document, wholesale.
    All,
    /// A single module: only that key is taken from the parsed text.
    Module(Section),
}

/// Result of a reconciled JSON edit.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonEdit {
    /// The next document.
    pub next: Value,
    /// Top-level keys present in the pasted text that were ignored because
    /// they fell outside the edited module. Empty for [`EditScope::All`].
    pub ignored_keys: Vec<String>,
}

/// Re-synthesize a (possibly partial) JSON edit into a full document.
///
/// Fails without touching anything when the text does not parse or its root
/// is not an object. For a module scope, sibling modules in `current` are
/// carried over untouched; a module key absent from the parsed text deletes
/// that module (same absence-means-delete rule as the patch engine).
pub fn apply_json_edit(
    current: &Value,
    scope: EditScope,
    text: &str,
) -> Result<JsonEdit, DocumentError> {
    let parsed: Value = serde_json::from_str(text)?;

    let mut parsed = match parsed {
        Value::Object(map) => map,
        other => {
            return Err(DocumentError::RootNotAnObject {
                found: json_type(&other),
            })
        }
    };

    let section = match scope {
        EditScope::All => {
            return Ok(JsonEdit {
                next: Value::Object(parsed),
                ignored_keys: Vec::new(),
            })
        }
        EditScope::Module(section) => section,
    };

    let key = section.key();
    let ignored_keys: Vec<String> = parsed.keys().filter(|k| *k != key).cloned().collect();

    let mut next = match current {
        Value::Object(map) => map.clone(),
        _ => Map::new(),
    };

    match parsed.remove(key) {
        Some(module) => {
            next.insert(key.to_string(), module);
        }
        None => {
            next.remove(key);
        }
    }

    Ok(JsonEdit {
        next: Value::Object(next),
        ignored_keys,
    })
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_doc() -> Value {
        json!({
            "colors": { "primitives": { "palette": { "blue500": "#3366FF" } } },
            "typography": { "textStyles": { "body": { "label": "Body" } } },
            "layout": { "spacing": { "md": { "desktop": 16 } } }
        })
    }

    #[test]
    fn test_all_scope_is_authoritative_replace() {
        let edit = apply_json_edit(&sample_doc(), EditScope::All, r#"{"colors":{}}"#).unwrap();
        assert_eq!(edit.next, json!({ "colors": {} }));
        assert!(edit.ignored_keys.is_empty());
    }

    #[test]
    fn test_module_scope_preserves_siblings() {
        let doc = sample_doc();
        let text = r#"{ "typography": { "textStyles": {} } }"#;
        let edit = apply_json_edit(&doc, EditScope::Module(Section::Typography), text).unwrap();

        assert_eq!(edit.next["typography"], json!({ "textStyles": {} }));
        assert_eq!(edit.next["colors"], doc["colors"]);
        assert_eq!(edit.next["layout"], doc["layout"]);
        assert!(edit.ignored_keys.is_empty());
    }

    #[test]
    fn test_module_scope_reports_ignored_keys() {
        // A full-document paste while a narrow module view is active: only
        // the edited module lands, the rest is reported, not applied.
        let doc = sample_doc();
        let text = r#"{ "typography": {}, "colors": { "hacked": true }, "extra": 1 }"#;
        let edit = apply_json_edit(&doc, EditScope::Module(Section::Typography), text).unwrap();

        assert_eq!(edit.next["colors"], doc["colors"]);
        assert_eq!(edit.ignored_keys, vec!["colors".to_string(), "extra".to_string()]);
    }

    #[test]
    fn test_module_key_absent_from_text_deletes_module() {
        let doc = sample_doc();
        let edit = apply_json_edit(&doc, EditScope::Module(Section::Layout), "{}").unwrap();
        assert!(edit.next.get("layout").is_none());
        assert_eq!(edit.next["colors"], doc["colors"]);
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let err = apply_json_edit(&sample_doc(), EditScope::All, "{ not json");
        assert!(matches!(err, Err(DocumentError::InvalidJson(_))));
    }

    #[test]
    fn test_non_object_root_is_rejected() {
        let err = apply_json_edit(&sample_doc(), EditScope::All, "[1, 2, 3]");
        assert!(matches!(
            err,
            Err(DocumentError::RootNotAnObject { found: "an array" })
        ));
    }

    #[test]
    fn test_section_round_trips_through_from_str() {
        for section in Section::ALL {
            assert_eq!(section.key().parse::<Section>().unwrap(), section);
        }
        assert!("fonts".parse::<Section>().is_err());
    }
}
