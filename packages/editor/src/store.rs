//! # Brand document store
//!
//! One store instance per editing context: the server-confirmed baseline,
//! the working draft, dirty/busy flags, and the save lifecycle.
//!
//! Mutations are synchronous; the only asynchronous operation is the save
//! round-trip, which is split into `begin_save`/`complete_save` so the
//! completion can be epoch-checked against brand switches that happened
//! while the request was in flight. The async [`BrandStore::save`] wrapper
//! drives both phases for single-owner callers.
//!
//! The store does not serialize concurrent saves internally; callers are
//! expected to disable the trigger while `busy` (two overlapping saves are
//! undefined with respect to which response wins).

use crate::{ActiveBrand, BrandPersistence, StoreError};
use brandkit_document::{merge, Patch, PathKey};
use serde_json::{json, Value};

/// Stable root key the draft config is wrapped under. Patch paths are
/// rooted at the draft, so they start with this key.
pub const DOCUMENT_ROOT: &str = "brand";

/// Draft document store for one brand editing session.
#[derive(Debug, Default)]
pub struct BrandStore {
    saved: Option<ActiveBrand>,
    draft: Option<Value>,
    dirty: bool,
    busy: bool,
    epoch: u64,
}

/// How a save attempt concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The server's response was adopted as the new baseline.
    Saved,
    /// The store moved to a different epoch while the request was in
    /// flight; the response was discarded and state left alone.
    Stale,
    /// Nothing loaded, nothing to save.
    Skipped,
}

/// In-flight save handle: the epoch the save started under and the config
/// snapshot to send.
#[derive(Debug, Clone)]
pub struct SaveTicket {
    epoch: u64,
    pub config: Value,
}

impl BrandStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt a fetched brand wholesale. Replaces all prior state; there is
    /// no merging across brand switches.
    pub fn load(&mut self, response: ActiveBrand) {
        self.epoch += 1;
        self.draft = Some(json!({ DOCUMENT_ROOT: response.config.clone() }));
        self.saved = Some(response);
        self.dirty = false;
        self.busy = false;
        tracing::debug!(epoch = self.epoch, "brand loaded");
    }

    /// Drop everything, e.g. when switching brands before the next one
    /// loads, so stale data is never rendered against a new identity.
    pub fn clear(&mut self) {
        self.epoch += 1;
        self.saved = None;
        self.draft = None;
        self.dirty = false;
        self.busy = false;
    }

    /// Patch the draft at a path. Safe to call at slider-drag rates: each
    /// call reads the latest draft, so no intermediate update is lost.
    pub fn patch(&mut self, path: &[PathKey], value: impl Into<Patch>) {
        let Some(draft) = &self.draft else {
            tracing::warn!("patch ignored: no brand loaded");
            return;
        };
        self.draft = Some(merge(draft, path, value.into()));
        self.dirty = true;
    }

    /// Authoritative whole-config replace, used only by the raw-JSON
    /// editing path. Bypasses merge semantics; validates nothing beyond
    /// "is a map".
    pub fn replace_whole(&mut self, new_config: Value) -> Result<(), StoreError> {
        if !new_config.is_object() {
            return Err(StoreError::NotAnObject);
        }
        self.draft = Some(json!({ DOCUMENT_ROOT: new_config }));
        self.dirty = true;
        Ok(())
    }

    /// Start a save: flips `busy` and snapshots the config to send.
    /// Returns `None` when nothing is loaded.
    pub fn begin_save(&mut self) -> Option<SaveTicket> {
        let config = self.config().cloned()?;
        self.busy = true;
        Some(SaveTicket {
            epoch: self.epoch,
            config,
        })
    }

    /// Finish a save with the persistence call's result.
    ///
    /// A completion from a superseded epoch is discarded silently, success
    /// or failure: the brand it belonged to is gone. Otherwise a success
    /// adopts the server's document as the new baseline and a fresh draft
    /// clone; a failure leaves the draft untouched and propagates.
    pub fn complete_save(
        &mut self,
        ticket: SaveTicket,
        result: Result<ActiveBrand, crate::PersistenceError>,
    ) -> Result<SaveOutcome, StoreError> {
        if self.epoch != ticket.epoch {
            tracing::debug!(
                started = ticket.epoch,
                current = self.epoch,
                "discarding save completion from a superseded session"
            );
            return Ok(SaveOutcome::Stale);
        }

        self.busy = false;
        let saved = result.map_err(StoreError::from)?;

        self.draft = Some(json!({ DOCUMENT_ROOT: saved.config.clone() }));
        self.saved = Some(saved);
        self.dirty = false;
        Ok(SaveOutcome::Saved)
    }

    /// Save the current draft through `api`. Convenience wrapper over
    /// `begin_save`/`complete_save` for callers that own the store across
    /// the await.
    pub async fn save(&mut self, api: &dyn BrandPersistence) -> Result<SaveOutcome, StoreError> {
        let Some(ticket) = self.begin_save() else {
            return Ok(SaveOutcome::Skipped);
        };
        let result = api.save_brand_config(&ticket.config).await;
        self.complete_save(ticket, result)
    }

    /// The whole draft document (config wrapped under [`DOCUMENT_ROOT`]).
    pub fn draft(&self) -> Option<&Value> {
        self.draft.as_ref()
    }

    /// The draft's config, unwrapped.
    pub fn config(&self) -> Option<&Value> {
        self.draft.as_ref().and_then(|d| d.get(DOCUMENT_ROOT))
    }

    /// The last server-confirmed baseline.
    pub fn saved(&self) -> Option<&ActiveBrand> {
        self.saved.as_ref()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BrandIdentity;
    use brandkit_document::path;

    fn active_brand(config: Value) -> ActiveBrand {
        ActiveBrand {
            brand: BrandIdentity {
                id: "b-1".to_string(),
                name: "Acme".to_string(),
                created_at: None,
            },
            config,
        }
    }

    #[test]
    fn test_load_clones_config_into_draft() {
        let mut store = BrandStore::new();
        store.load(active_brand(json!({ "colors": { "primitives": {} } })));

        assert!(!store.is_dirty());
        assert_eq!(store.config(), Some(&json!({ "colors": { "primitives": {} } })));
        assert_eq!(store.epoch(), 1);
    }

    #[test]
    fn test_patch_marks_dirty_and_preserves_baseline() {
        let mut store = BrandStore::new();
        store.load(active_brand(json!({ "colors": { "primitives": { "palette": {} } } })));

        store.patch(
            &path![DOCUMENT_ROOT, "colors", "primitives", "palette", "blue500"],
            json!("#3366FF"),
        );

        assert!(store.is_dirty());
        assert_eq!(
            store.config().unwrap()["colors"]["primitives"]["palette"]["blue500"],
            json!("#3366FF")
        );
        // The saved baseline never sees draft edits.
        assert_eq!(
            store.saved().unwrap().config,
            json!({ "colors": { "primitives": { "palette": {} } } })
        );
    }

    #[test]
    fn test_patch_without_load_is_a_no_op() {
        let mut store = BrandStore::new();
        store.patch(&path![DOCUMENT_ROOT, "colors"], json!({}));
        assert!(store.draft().is_none());
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_delete_patch_removes_key() {
        let mut store = BrandStore::new();
        store.load(active_brand(json!({ "layout": { "spacing": { "md": 16, "lg": 24 } } })));

        store.patch(
            &path![DOCUMENT_ROOT, "layout", "spacing", "md"],
            Patch::Absent,
        );

        let spacing = &store.config().unwrap()["layout"]["spacing"];
        assert!(spacing.get("md").is_none());
        assert_eq!(spacing["lg"], json!(24));
    }

    #[test]
    fn test_replace_whole_requires_a_map() {
        let mut store = BrandStore::new();
        store.load(active_brand(json!({ "colors": {} })));

        assert!(matches!(
            store.replace_whole(json!([1, 2])),
            Err(StoreError::NotAnObject)
        ));
        assert!(!store.is_dirty());

        store.replace_whole(json!({ "typography": {} })).unwrap();
        assert!(store.is_dirty());
        assert_eq!(store.config(), Some(&json!({ "typography": {} })));
    }

    #[test]
    fn test_clear_resets_everything_and_bumps_epoch() {
        let mut store = BrandStore::new();
        store.load(active_brand(json!({ "colors": {} })));
        store.patch(&path![DOCUMENT_ROOT, "x"], json!(1));

        let epoch_before = store.epoch();
        store.clear();

        assert!(store.draft().is_none());
        assert!(store.saved().is_none());
        assert!(!store.is_dirty());
        assert!(!store.is_busy());
        assert_eq!(store.epoch(), epoch_before + 1);
    }

    #[test]
    fn test_begin_save_without_draft_yields_no_ticket() {
        let mut store = BrandStore::new();
        assert!(store.begin_save().is_none());
        assert!(!store.is_busy());
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let mut store = BrandStore::new();
        store.load(active_brand(json!({ "colors": { "old": true } })));
        store.patch(&path![DOCUMENT_ROOT, "colors", "edited"], json!(true));

        let ticket = store.begin_save().unwrap();

        // Brand switch while the save is in flight.
        store.load(active_brand(json!({ "colors": { "new": true } })));

        let outcome = store
            .complete_save(ticket, Ok(active_brand(json!({ "colors": { "old": true, "edited": true } }))))
            .unwrap();

        assert_eq!(outcome, SaveOutcome::Stale);
        // The new brand's state is untouched by the late response.
        assert_eq!(store.config(), Some(&json!({ "colors": { "new": true } })));
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_stale_completion_swallows_errors_too() {
        let mut store = BrandStore::new();
        store.load(active_brand(json!({})));
        let ticket = store.begin_save().unwrap();
        store.clear();

        let outcome = store
            .complete_save(ticket, Err(crate::PersistenceError::Transport("boom".into())))
            .unwrap();
        assert_eq!(outcome, SaveOutcome::Stale);
    }
}
