//! The reqwest-backed brand service client.

use crate::TokenStore;
use async_trait::async_trait;
use brandkit_editor::{ActiveBrand, AssetUpload, BrandPersistence, PersistenceError};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

/// HTTP client for the brand backend.
///
/// Endpoints follow the backend's user-scoped routes: the active brand at
/// `GET /brand/user/active`, config saves at `PUT /brand/user/config`,
/// asset uploads at `POST /upload`.
pub struct HttpBrandClient {
    base_url: String,
    http: reqwest::Client,
    tokens: Arc<dyn TokenStore>,
}

impl HttpBrandClient {
    pub fn new(base_url: impl Into<String>, tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
            tokens,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn bearer(&self) -> Result<String, PersistenceError> {
        self.tokens.token().ok_or(PersistenceError::NotAuthenticated)
    }

    /// Uniform status handling. A 401 clears the stored credential before
    /// surfacing, so every call site gets session teardown for free.
    async fn check(&self, response: reqwest::Response) -> Result<reqwest::Response, PersistenceError> {
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            self.tokens.clear();
            tracing::warn!("session rejected by server, credential cleared");
            return Err(PersistenceError::Unauthorized);
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(PersistenceError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }
}

fn transport(err: reqwest::Error) -> PersistenceError {
    PersistenceError::Transport(err.to_string())
}

#[async_trait]
impl BrandPersistence for HttpBrandClient {
    async fn fetch_active_brand(&self) -> Result<ActiveBrand, PersistenceError> {
        let token = self.bearer()?;

        let response = self
            .http
            .get(format!("{}/brand/user/active", self.base_url))
            .bearer_auth(token)
            .send()
            .await
            .map_err(transport)?;

        let response = self.check(response).await?;
        response.json().await.map_err(transport)
    }

    async fn save_brand_config(&self, config: &Value) -> Result<ActiveBrand, PersistenceError> {
        // The save endpoint wants the brand id; resolve it from the active
        // brand rather than trusting a cached one.
        let active = self.fetch_active_brand().await?;
        let token = self.bearer()?;

        let body = json!({ "brandId": active.brand.id, "config": config });

        let response = self
            .http
            .put(format!("{}/brand/user/config", self.base_url))
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .map_err(transport)?;

        let response = self.check(response).await?;
        response.json().await.map_err(transport)
    }
}

#[derive(Deserialize)]
struct UploadResponse {
    url: String,
}

#[async_trait]
impl AssetUpload for HttpBrandClient {
    async fn upload(
        &self,
        bytes: Vec<u8>,
        file_name: &str,
        folder: &str,
    ) -> Result<String, PersistenceError> {
        let token = self.bearer()?;

        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new()
            .part("image", part)
            .text("folder", folder.to_string());

        let response = self
            .http
            .post(format!("{}/upload", self.base_url))
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await
            .map_err(transport)?;

        let response = self.check(response).await?;
        let parsed: UploadResponse = response.json().await.map_err(transport)?;
        Ok(parsed.url)
    }
}
