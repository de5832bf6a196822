//! Gradient normalization, CSS emission, and stop editing.
//!
//! Legacy configs carried gradient stops as a keyed map; current ones use a
//! sequence. Everything here normalizes first, so both shapes flow through
//! the same code path.

use crate::color::with_alpha;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::cmp::Ordering;

/// A gradient never drops below this many stops.
pub const MIN_STOPS: usize = 2;

/// One color stop: a palette token reference, a 0-100 position, and an
/// optional 0-1 opacity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub color: String,
    pub position: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

/// Partial update for a single stop.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StopPatch {
    pub color: Option<String>,
    pub position: Option<f64>,
    pub opacity: Option<f64>,
}

/// Normalize a stops value to an ordered sequence.
///
/// Accepts a sequence, or a legacy keyed map (taken in value order).
/// Anything else, and entries that do not look like stops, normalize away.
pub fn normalize_stops(stops: &Value) -> Vec<GradientStop> {
    let raw: Vec<&Value> = match stops {
        Value::Array(items) => items.iter().collect(),
        Value::Object(map) => map.values().collect(),
        _ => Vec::new(),
    };

    raw.into_iter()
        .filter_map(|stop| serde_json::from_value(stop.clone()).ok())
        .collect()
}

/// Render a gradient value as a CSS gradient expression.
///
/// Stop colors resolve through the palette with a `#000000` fallback;
/// opacity below 1 becomes a hex alpha suffix. Zero stops after
/// normalization yields the literal `"transparent"` rather than malformed
/// syntax.
pub fn gradient_css(gradient: &Value, palette: &Map<String, Value>) -> String {
    let stops = normalize_stops(gradient.get("stops").unwrap_or(&Value::Null));

    if stops.is_empty() {
        return "transparent".to_string();
    }

    let stop_list = stops
        .iter()
        .map(|stop| {
            let hex = palette
                .get(&stop.color)
                .and_then(Value::as_str)
                .unwrap_or("#000000");
            let color = with_alpha(hex, stop.opacity.unwrap_or(1.0));
            format!("{} {}%", color, format_css_number(stop.position))
        })
        .collect::<Vec<_>>()
        .join(", ");

    match gradient.get("type").and_then(Value::as_str) {
        Some("radial") => format!("radial-gradient({stop_list})"),
        _ => {
            let angle = gradient.get("angle").and_then(Value::as_f64).unwrap_or(0.0);
            format!("linear-gradient({}deg, {stop_list})", format_css_number(angle))
        }
    }
}

/// Format a number the way CSS expects: no trailing `.0` on whole values.
pub fn format_css_number(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// Merge a patch into one stop and re-sort by position ascending.
///
/// Duplicate positions are tolerated. An out-of-range index is a no-op
/// apart from the re-sort; it never appends a stop built from the patch
/// alone. New stops come only from [`add_stop`].
pub fn update_stop(stops: &[GradientStop], index: usize, patch: &StopPatch) -> Vec<GradientStop> {
    let mut next = stops.to_vec();

    if let Some(stop) = next.get_mut(index) {
        if let Some(color) = &patch.color {
            stop.color = color.clone();
        }
        if let Some(position) = patch.position {
            stop.position = position;
        }
        if let Some(opacity) = patch.opacity {
            stop.opacity = Some(opacity);
        }
    }

    next.sort_by(|a, b| {
        a.position
            .partial_cmp(&b.position)
            .unwrap_or(Ordering::Equal)
    });
    next
}

/// Append a stop at the midpoint, reusing the first stop's color.
pub fn add_stop(stops: &[GradientStop]) -> Vec<GradientStop> {
    let mut next = stops.to_vec();
    next.push(GradientStop {
        color: stops.first().map(|s| s.color.clone()).unwrap_or_default(),
        position: 50.0,
        opacity: Some(1.0),
    });
    next
}

/// Remove a stop, unless that would leave fewer than [`MIN_STOPS`].
pub fn remove_stop(stops: &[GradientStop], index: usize) -> Vec<GradientStop> {
    if stops.len() <= MIN_STOPS || index >= stops.len() {
        return stops.to_vec();
    }
    let mut next = stops.to_vec();
    next.remove(index);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn palette() -> Map<String, Value> {
        json!({ "blue500": "#3366FF", "gray900": "#111827" })
            .as_object()
            .unwrap()
            .clone()
    }

    fn stops() -> Vec<GradientStop> {
        vec![
            GradientStop { color: "blue500".into(), position: 0.0, opacity: None },
            GradientStop { color: "gray900".into(), position: 100.0, opacity: None },
        ]
    }

    #[test]
    fn test_linear_gradient_css() {
        let gradient = json!({
            "type": "linear",
            "angle": 90,
            "stops": [
                { "color": "blue500", "position": 0 },
                { "color": "gray900", "position": 100 }
            ]
        });
        assert_eq!(
            gradient_css(&gradient, &palette()),
            "linear-gradient(90deg, #3366FF 0%, #111827 100%)"
        );
    }

    #[test]
    fn test_radial_gradient_has_no_angle() {
        let gradient = json!({
            "type": "radial",
            "stops": [
                { "color": "blue500", "position": 0 },
                { "color": "gray900", "position": 100 }
            ]
        });
        assert_eq!(
            gradient_css(&gradient, &palette()),
            "radial-gradient(#3366FF 0%, #111827 100%)"
        );
    }

    #[test]
    fn test_missing_angle_defaults_to_zero() {
        let gradient = json!({
            "type": "linear",
            "stops": [
                { "color": "blue500", "position": 0 },
                { "color": "blue500", "position": 100 }
            ]
        });
        assert!(gradient_css(&gradient, &palette()).starts_with("linear-gradient(0deg,"));
    }

    #[test]
    fn test_opacity_becomes_alpha_suffix() {
        let gradient = json!({
            "type": "linear",
            "angle": 0,
            "stops": [
                { "color": "blue500", "position": 0, "opacity": 0.5 },
                { "color": "gray900", "position": 100, "opacity": 1.0 }
            ]
        });
        assert_eq!(
            gradient_css(&gradient, &palette()),
            "linear-gradient(0deg, #3366FF80 0%, #111827 100%)"
        );
    }

    #[test]
    fn test_unknown_stop_color_falls_back_to_black() {
        let gradient = json!({
            "type": "linear",
            "angle": 0,
            "stops": [
                { "color": "nope", "position": 0 },
                { "color": "blue500", "position": 100 }
            ]
        });
        assert!(gradient_css(&gradient, &palette()).contains("#000000 0%"));
    }

    #[test]
    fn test_legacy_map_stops_normalize_by_value_order() {
        let gradient = json!({
            "type": "linear",
            "angle": 45,
            "stops": {
                "a": { "color": "blue500", "position": 0 },
                "b": { "color": "gray900", "position": 100 }
            }
        });
        assert_eq!(
            gradient_css(&gradient, &palette()),
            "linear-gradient(45deg, #3366FF 0%, #111827 100%)"
        );
    }

    #[test]
    fn test_zero_stops_renders_transparent() {
        for gradient in [
            json!({ "type": "linear", "angle": 0 }),
            json!({ "type": "linear", "stops": [] }),
            json!({ "type": "radial", "stops": "oops" }),
        ] {
            assert_eq!(gradient_css(&gradient, &palette()), "transparent");
        }
    }

    #[test]
    fn test_update_stop_re_sorts_by_position() {
        let patch = StopPatch { position: Some(150.0), ..Default::default() };
        let next = update_stop(&stops(), 0, &patch);
        assert_eq!(next[0].color, "gray900");
        assert_eq!(next[1].position, 150.0);
    }

    #[test]
    fn test_update_stop_out_of_range_never_appends() {
        let patch = StopPatch {
            color: Some("gray900".into()),
            position: Some(25.0),
            opacity: None,
        };
        let next = update_stop(&stops(), 5, &patch);
        assert_eq!(next, stops());
    }

    #[test]
    fn test_add_stop_reuses_first_color() {
        let next = add_stop(&stops());
        assert_eq!(next.len(), 3);
        assert_eq!(next[2].color, "blue500");
        assert_eq!(next[2].position, 50.0);
        assert_eq!(next[2].opacity, Some(1.0));
    }

    #[test]
    fn test_remove_stop_floor_of_two() {
        // Removing at the floor is a no-op.
        assert_eq!(remove_stop(&stops(), 0), stops());

        let three = add_stop(&stops());
        let next = remove_stop(&three, 2);
        assert_eq!(next.len(), 2);
    }

    #[test]
    fn test_css_number_formatting() {
        assert_eq!(format_css_number(50.0), "50");
        assert_eq!(format_css_number(12.5), "12.5");
        assert_eq!(format_css_number(-90.0), "-90");
    }
}
