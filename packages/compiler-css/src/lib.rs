//! Compile a brand config document to a stylesheet.
//!
//! Output, in order: `@font-face` rules for uploaded font sources, a
//! `:root` block of custom properties (palette colors, light-mode semantic
//! roles as one level of `var()` indirection, spacing, gradients), then a
//! `.text-<key>` class per typography style with a mobile media query.
//!
//! Defensive over missing sections: a config with no `typography` key
//! compiles to a stylesheet without text classes, it does not error. The
//! document is user-built and schema-flexible; the compiler takes what it
//! recognizes and skips the rest.

use brandkit_tokens::{
    font_face_css, format_css_number, gradient_css, resolve_variant, Breakpoint, FontFamily,
};
use serde_json::{Map, Value};

const MOBILE_MAX_WIDTH: &str = "768px";

/// Compile `config` (the brand config, not the wrapped draft) to CSS text.
pub fn compile_brand_css(config: &Value) -> String {
    let mut lines: Vec<String> = Vec::new();

    emit_font_faces(config, &mut lines);
    emit_root_block(config, &mut lines);
    emit_text_styles(config, &mut lines);

    let mut css = lines.join("\n");
    css.push('\n');
    css
}

fn palette(config: &Value) -> Option<&Map<String, Value>> {
    config
        .pointer("/colors/primitives/palette")
        .and_then(Value::as_object)
}

fn emit_font_faces(config: &Value, lines: &mut Vec<String>) {
    let Some(families) = config
        .pointer("/typography/primitives/fontFamilies")
        .and_then(Value::as_object)
    else {
        return;
    };

    for family in families.values() {
        let Ok(font) = serde_json::from_value::<FontFamily>(family.clone()) else {
            continue;
        };
        let rules = font_face_css(&font);
        if !rules.is_empty() {
            lines.push(rules);
            lines.push(String::new());
        }
    }
}

fn emit_root_block(config: &Value, lines: &mut Vec<String>) {
    lines.push(":root {".to_string());

    if let Some(palette) = palette(config) {
        for (key, value) in palette {
            if let Some(hex) = value.as_str() {
                lines.push(format!("  --color-{key}: {hex};"));
            }
        }
    }

    if let Some(semantic) = config
        .pointer("/colors/modes/light/semantic")
        .and_then(Value::as_object)
    {
        for (role, token) in semantic {
            if let Some(token) = token.as_str() {
                lines.push(format!("  --color-{role}: var(--color-{token});"));
            }
        }
    }

    if let Some(spacing) = config.pointer("/layout/spacing").and_then(Value::as_object) {
        for (key, value) in spacing {
            // Either a flat literal or a per-breakpoint map.
            let px = value
                .get("desktop")
                .and_then(Value::as_f64)
                .or_else(|| value.as_f64());
            if let Some(px) = px {
                lines.push(format!("  --space-{key}: {}px;", format_css_number(px)));
            }
        }
    }

    if let (Some(palette), Some(gradients)) = (
        palette(config),
        config
            .pointer("/colors/primitives/gradients")
            .and_then(Value::as_object),
    ) {
        for (key, gradient) in gradients {
            lines.push(format!("  --gradient-{key}: {};", gradient_css(gradient, palette)));
        }
    }

    lines.push("}".to_string());
}

fn emit_text_styles(config: &Value, lines: &mut Vec<String>) {
    let Some(styles) = config
        .pointer("/typography/textStyles")
        .and_then(Value::as_object)
    else {
        return;
    };

    for (key, style) in styles {
        let desktop = resolve_variant(style, Breakpoint::Desktop);
        let mobile = resolve_variant(style, Breakpoint::Mobile);

        lines.push(String::new());
        lines.push(format!(".text-{key} {{"));
        if let Some(family) = font_family_name(config, &desktop) {
            lines.push(format!("  font-family: {family};"));
        }
        push_px(lines, "  ", "font-size", desktop.get("fontSize"));
        push_px(lines, "  ", "line-height", desktop.get("lineHeight"));
        push_raw(lines, "  ", "font-weight", desktop.get("fontWeight"));
        lines.push("}".to_string());

        lines.push(format!("@media (max-width: {MOBILE_MAX_WIDTH}) {{"));
        lines.push(format!("  .text-{key} {{"));
        push_px(lines, "    ", "font-size", mobile.get("fontSize"));
        push_px(lines, "    ", "line-height", mobile.get("lineHeight"));
        push_raw(lines, "    ", "font-weight", mobile.get("fontWeight"));
        lines.push("  }".to_string());
        lines.push("}".to_string());
    }
}

/// Resolve a variant's `fontFamily` token to its CSS family name.
fn font_family_name(config: &Value, variant: &Map<String, Value>) -> Option<String> {
    let token = variant.get("fontFamily")?.as_str()?;
    config
        .pointer(&format!("/typography/primitives/fontFamilies/{token}/family"))
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn push_px(lines: &mut Vec<String>, indent: &str, property: &str, value: Option<&Value>) {
    if let Some(n) = value.and_then(Value::as_f64) {
        lines.push(format!("{indent}{property}: {}px;", format_css_number(n)));
    }
}

fn push_raw(lines: &mut Vec<String>, indent: &str, property: &str, value: Option<&Value>) {
    if let Some(n) = value.and_then(Value::as_f64) {
        lines.push(format!("{indent}{property}: {};", format_css_number(n)));
    }
}
