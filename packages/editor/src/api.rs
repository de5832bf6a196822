//! Boundary traits and wire shapes.
//!
//! The store depends only on these shapes; how they are transported is the
//! client crate's business.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// The brand (tenant) identity a config belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandIdentity {
    pub id: String,
    pub name: String,
    #[serde(default, rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// The (identity, config) pair exchanged with the persistence service.
/// The config stays schema-flexible: it is whatever the editors built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveBrand {
    pub brand: BrandIdentity,
    pub config: Value,
}

#[derive(Error, Debug)]
pub enum PersistenceError {
    /// No credential available; nothing was sent.
    #[error("not authenticated")]
    NotAuthenticated,

    /// The server rejected the session. The transport layer has already
    /// torn the session down by the time this surfaces.
    #[error("session rejected by server")]
    Unauthorized,

    #[error("api error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("transport error: {0}")]
    Transport(String),
}

/// Remote persistence for brand configs.
#[async_trait]
pub trait BrandPersistence: Send + Sync {
    async fn fetch_active_brand(&self) -> Result<ActiveBrand, PersistenceError>;

    /// Persist a config; the response is the server's authoritative copy.
    async fn save_brand_config(&self, config: &Value) -> Result<ActiveBrand, PersistenceError>;
}

/// Binary asset upload. The document only ever stores the returned URL.
#[async_trait]
pub trait AssetUpload: Send + Sync {
    async fn upload(
        &self,
        bytes: Vec<u8>,
        file_name: &str,
        folder: &str,
    ) -> Result<String, PersistenceError>;
}
