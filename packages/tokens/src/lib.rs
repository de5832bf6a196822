//! # Brandkit Tokens
//!
//! Pure read-side helpers that resolve semantic tokens to usable values:
//! palette lookups, gradient normalization and CSS emission, breakpoint
//! variant inheritance, and the small editing primitives for gradient
//! stops. None of these touch the document store; they are consumed by
//! preview and editor panels over whatever draft is current.

mod color;
mod font;
mod gradient;
mod typography;

pub use color::{resolve_palette_color, with_alpha};
pub use font::{font_face_css, FontFamily, FontSource, FontStyle};
pub use gradient::{
    add_stop, format_css_number, gradient_css, normalize_stops, remove_stop, update_stop,
    GradientStop, StopPatch, MIN_STOPS,
};
pub use typography::{inheritance_source, new_text_style, resolve_variant, Breakpoint};
