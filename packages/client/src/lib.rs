//! # Brandkit Client
//!
//! HTTP transport behind the [`BrandPersistence`] and [`AssetUpload`]
//! boundary traits. The store never sees any of this; it only sees the
//! traits.
//!
//! Authorization is handled uniformly here rather than per call site: every
//! request carries the bearer credential from the [`TokenStore`], and any
//! 401 tears the session down (clears the stored credential) before the
//! error surfaces.

mod auth;
mod http;

pub use auth::{MemoryTokenStore, TokenStore};
pub use http::HttpBrandClient;
