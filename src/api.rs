//! API client — typed calls over the request pipeline.
//!
//! Paths are relative to the versioned API root (`employees/`,
//! `documents/doc-001/download/`). Every call goes through the outermost
//! pipeline stage, so demo mode, bearer attachment and refresh apply
//! uniformly. This is where non-2xx responses become [`ApiError::Status`].

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::http::{ApiError, ApiRequest, ApiResponse, Method, Transport};

/// Paginated list envelope: `{count, next, previous, results}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

/// Binary payload with its declared MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    base_url: String,
}

impl ApiClient {
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { transport, base_url }
    }

    /// Absolute URL for `path` with `params` percent-encoded into the query.
    #[must_use]
    pub fn url(&self, path: &str, params: &[(&str, &str)]) -> String {
        let mut url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        for (i, (key, value)) in params.iter().enumerate() {
            let sep = if i == 0 && !url.contains('?') { '?' } else { '&' };
            url.push(sep);
            url.push_str(&urlencoding::encode(key));
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        url
    }

    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let response = self.transport.send(&request).await?;
        if response.is_success() {
            return Ok(response);
        }
        tracing::debug!(method = %request.method, url = %request.url, status = response.status, "api call failed");
        Err(ApiError::Status { status: response.status, body: response.text() })
    }

    async fn send_json<T, B>(&self, method: Method, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        let request = ApiRequest::new(method, self.url(path, &[])).with_json(body);
        self.execute(request).await?.json_body()
    }

    /// # Errors
    ///
    /// [`ApiError::Status`] for non-2xx, [`ApiError::Decode`] for an unexpected body,
    /// or whatever the pipeline returned.
    pub async fn get<T: DeserializeOwned>(&self, path: &str, params: &[(&str, &str)]) -> Result<T, ApiError> {
        self.execute(ApiRequest::get(self.url(path, params)))
            .await?
            .json_body()
    }

    /// # Errors
    ///
    /// See [`ApiClient::get`].
    pub async fn get_paginated<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<Paginated<T>, ApiError> {
        self.get(path, params).await
    }

    /// # Errors
    ///
    /// [`ApiError::Encode`] if `body` cannot be serialised; otherwise see [`ApiClient::get`].
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(Method::Post, path, body).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::post`].
    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(Method::Patch, path, body).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::post`].
    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(Method::Put, path, body).await
    }

    /// Delete a resource; the (usually empty) body is discarded.
    ///
    /// # Errors
    ///
    /// [`ApiError::Status`] for non-2xx.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(ApiRequest::new(Method::Delete, self.url(path, &[])))
            .await
            .map(|_| ())
    }

    /// Fetch a binary payload (PDF, spreadsheet, export).
    ///
    /// # Errors
    ///
    /// [`ApiError::Status`] for non-2xx.
    pub async fn download(&self, path: &str) -> Result<Blob, ApiError> {
        let response = self.execute(ApiRequest::get(self.url(path, &[]))).await?;
        Ok(Blob { content_type: response.content_type, bytes: response.body })
    }
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
