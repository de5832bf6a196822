//! Font family primitives.
//!
//! The document stores only URLs for font binaries; actual loading into a
//! rendering environment is a presentation concern. What belongs here is
//! the typed shape of a font family and the `@font-face` rules derivable
//! from it.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    Normal,
    Italic,
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontStyle::Normal => f.write_str("normal"),
            FontStyle::Italic => f.write_str("italic"),
        }
    }
}

/// One (weight, style) source with up to three format URLs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSource {
    pub weight: u16,
    pub style: FontStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub woff2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub woff: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttf: Option<String>,
}

impl FontSource {
    /// Best available URL and its CSS format name, preferring the more
    /// compressed web formats.
    pub fn best_url(&self) -> Option<(&str, &'static str)> {
        if let Some(url) = self.woff2.as_deref().filter(|u| !u.is_empty()) {
            return Some((url, "woff2"));
        }
        if let Some(url) = self.woff.as_deref().filter(|u| !u.is_empty()) {
            return Some((url, "woff"));
        }
        if let Some(url) = self.ttf.as_deref().filter(|u| !u.is_empty()) {
            return Some((url, "truetype"));
        }
        None
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontFamily {
    pub id: String,
    pub label: String,
    pub family: String,
    #[serde(default)]
    pub fallback: Vec<String>,
    #[serde(default)]
    pub sources: Vec<FontSource>,
}

/// Emit `@font-face` rules for every source that has a usable URL.
pub fn font_face_css(font: &FontFamily) -> String {
    let mut rules = Vec::new();

    for source in &font.sources {
        let Some((url, format)) = source.best_url() else {
            continue;
        };
        rules.push(format!(
            "@font-face {{\n  font-family: \"{}\";\n  src: url(\"{}\") format(\"{}\");\n  font-weight: {};\n  font-style: {};\n  font-display: swap;\n}}",
            font.family, url, format, source.weight, source.style
        ));
    }

    rules.join("\n\n")
}
