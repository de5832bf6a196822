//! Palette token resolution.

use serde_json::{Map, Value};

/// Resolve a color token through the palette.
///
/// A hit returns the stored literal. A miss returns `token` unchanged, so
/// callers can pass either a palette key or a raw color literal through the
/// same code path; a dangling semantic reference renders as its raw string
/// instead of failing.
pub fn resolve_palette_color<'a>(palette: &'a Map<String, Value>, token: &'a str) -> &'a str {
    palette.get(token).and_then(Value::as_str).unwrap_or(token)
}

/// Append a two-digit hex alpha channel to `hex` when `opacity` is below 1.
pub fn with_alpha(hex: &str, opacity: f64) -> String {
    if opacity >= 1.0 {
        return hex.to_string();
    }
    let alpha = (opacity.max(0.0) * 255.0).round() as u8;
    format!("{hex}{alpha:02x}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn palette() -> Map<String, Value> {
        json!({ "blue500": "#3366FF" })
            .as_object()
            .unwrap()
            .clone()
    }

    #[test]
    fn test_palette_hit_returns_literal() {
        assert_eq!(resolve_palette_color(&palette(), "blue500"), "#3366FF");
    }

    #[test]
    fn test_palette_miss_passes_token_through() {
        // "primary" is a semantic role, not a palette key: it comes back
        // unchanged rather than erroring.
        assert_eq!(resolve_palette_color(&palette(), "primary"), "primary");
    }

    #[test]
    fn test_alpha_suffix() {
        assert_eq!(with_alpha("#3366FF", 1.0), "#3366FF");
        assert_eq!(with_alpha("#3366FF", 0.5), "#3366FF80");
        assert_eq!(with_alpha("#3366FF", 0.0), "#3366FF00");
    }
}
