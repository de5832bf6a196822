//! # Brandkit Document
//!
//! Document model and patch engine for brand token configs.
//!
//! A brand config is a deeply nested, schema-flexible JSON tree: editor
//! panels add and remove keys dynamically (custom color categories, new
//! typography styles, new font weights), so the document is represented as
//! `serde_json::Value` rather than a fixed struct. Typed structs exist only
//! at stable boundaries.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ document: Value model + patch engine        │
//! │  - Path-addressed deep merge                │
//! │  - Deletion-by-absence semantics            │
//! │  - JSON-mode reconciliation                 │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: draft lifecycle + save              │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core principles
//!
//! 1. **Every mutation produces a new tree**: the merge never aliases its
//!    input, so identity-based change detection works and concurrent reads
//!    of the saved baseline never observe partial writes.
//! 2. **Total over its input space**: the merge coerces unexpected shapes
//!    rather than erroring. Robustness over strictness.
//! 3. **Absent means deleted**: unsetting a field removes the key entirely,
//!    never leaves a null placeholder, so inheritance and defaults can take
//!    over downstream.

mod error;
mod merge;
mod path;
mod reconcile;

pub use error::DocumentError;
pub use merge::{merge, merge_maps, Patch};
pub use path::PathKey;
pub use reconcile::{apply_json_edit, EditScope, JsonEdit, Section};
