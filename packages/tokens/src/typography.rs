//! Breakpoint variant inheritance.
//!
//! A typography style stores per-breakpoint variant records under
//! `variants`; only some breakpoints need to be set explicitly. Two
//! resolution strategies exist at deliberately different granularities:
//!
//! - [`resolve_variant`] is whole-record: the nearest breakpoint at or
//!   above the requested one that has *any* record wins outright. This
//!   feeds rendering.
//! - [`inheritance_source`] is per-property: it names the breakpoint a
//!   single property is actually inherited from. This feeds the
//!   "inherited from desktop" editor badges.

use serde_json::{json, Map, Value};
use std::fmt;
use std::str::FromStr;

/// Responsive breakpoints, in cascade order. Desktop is the root; tablet
/// inherits from desktop; mobile inherits from tablet, then desktop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Breakpoint {
    Desktop,
    Tablet,
    Mobile,
}

impl Breakpoint {
    pub const CASCADE: [Breakpoint; 3] = [Breakpoint::Desktop, Breakpoint::Tablet, Breakpoint::Mobile];

    pub fn key(&self) -> &'static str {
        match self {
            Breakpoint::Desktop => "desktop",
            Breakpoint::Tablet => "tablet",
            Breakpoint::Mobile => "mobile",
        }
    }

    fn position(&self) -> usize {
        match self {
            Breakpoint::Desktop => 0,
            Breakpoint::Tablet => 1,
            Breakpoint::Mobile => 2,
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Breakpoint {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Breakpoint::CASCADE
            .into_iter()
            .find(|bp| bp.key() == s)
            .ok_or(())
    }
}

/// Resolve the effective variant record for a breakpoint.
///
/// Walks backward from the requested breakpoint to desktop and returns the
/// first record that exists at all. Coarse by design: the fallback is the
/// whole record, not per-property. Returns an empty record when no
/// breakpoint has one.
pub fn resolve_variant(style: &Value, breakpoint: Breakpoint) -> Map<String, Value> {
    let variants = style.get("variants");

    for bp in Breakpoint::CASCADE[..=breakpoint.position()].iter().rev() {
        if let Some(Value::Object(record)) = variants.and_then(|v| v.get(bp.key())) {
            return record.clone();
        }
    }

    Map::new()
}

/// Name the breakpoint a property is inherited from, or `None` when it is
/// explicitly set at `breakpoint` itself (or set nowhere upstream).
pub fn inheritance_source(
    style: &Value,
    breakpoint: Breakpoint,
    property: &str,
) -> Option<Breakpoint> {
    let variants = style.get("variants")?;

    if variants
        .get(breakpoint.key())
        .and_then(|record| record.get(property))
        .is_some()
    {
        return None;
    }

    for bp in Breakpoint::CASCADE[..breakpoint.position()].iter().rev() {
        if variants
            .get(bp.key())
            .and_then(|record| record.get(property))
            .is_some()
        {
            return Some(*bp);
        }
    }

    None
}

/// Factory for a freshly added typography style: desktop and mobile
/// variants with sensible defaults, using the first available font family.
pub fn new_text_style(font_families: &Map<String, Value>, label: &str) -> Value {
    let font_family = font_families
        .keys()
        .next()
        .map(String::as_str)
        .unwrap_or("primary");

    json!({
        "label": label,
        "editable": true,
        "variants": {
            "desktop": {
                "fontFamily": font_family,
                "fontSize": 16,
                "lineHeight": 24,
                "fontWeight": 400,
                "letterSpacing": 0,
                "alignment": "left",
                "case": "none",
                "decoration": "none",
                "italic": false
            },
            "mobile": {
                "fontFamily": font_family,
                "fontSize": 14,
                "lineHeight": 20,
                "fontWeight": 400,
                "letterSpacing": 0,
                "alignment": "left",
                "case": "none",
                "decoration": "none",
                "italic": false
            }
        }
    })
}
