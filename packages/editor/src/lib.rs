//! # Brandkit Editor
//!
//! The document store behind every editing surface.
//!
//! ## Lifecycle
//!
//! ```text
//! Fetch → Clone → Patch/Replace → Save → Adopt
//!   ↓       ↓          ↓           ↓       ↓
//!  API    draft     dirty=true   busy   new baseline
//! ```
//!
//! The store holds the server-confirmed baseline and a working draft. The
//! draft is always a full deep clone of the baseline's config, wrapped
//! under a stable root key; no substructure is ever shared between the
//! two. Visual editors mutate through path-addressed patches; the raw-JSON
//! editor goes through an authoritative whole-document replace.
//!
//! ## Core principles
//!
//! 1. **Server authority**: a successful save adopts the server's returned
//!    document as the new baseline, not the local draft.
//! 2. **Failed saves lose nothing**: on error the draft is left untouched
//!    so the user can retry.
//! 3. **Epoch-guarded completion**: switching brands mid-save must not let
//!    the late response resurrect stale data. Every `load`/`clear` bumps an
//!    epoch; a save completion from a superseded epoch is discarded.
//! 4. **No singletons**: stores are plain owned values with injectable
//!    state, so tests instantiate as many independent instances as they
//!    like.

mod api;
mod errors;
mod store;

pub use api::{ActiveBrand, AssetUpload, BrandIdentity, BrandPersistence, PersistenceError};
pub use errors::StoreError;
pub use store::{BrandStore, SaveOutcome, SaveTicket, DOCUMENT_ROOT};
