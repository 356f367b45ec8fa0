//! API utilities for frontend-backend communication
//!
//! [`ApiClient`] is built with an explicit [`Session`]; nothing here reads the
//! token from storage. Every request is bounded by [`REQUEST_TIMEOUT_MS`].

use futures::future::{select, Either};
use gloo_net::http::{RequestBuilder, Response};
use gloo_timers::future::TimeoutFuture;
use serde::{de::DeserializeOwned, Serialize};
use std::future::Future;
use thiserror::Error;

pub const REQUEST_TIMEOUT_MS: u32 = 5_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Failed to send request: {0}")]
    Network(String),
    #[error("Request timed out after {0} ms")]
    Timeout(u32),
    #[error("Request failed: {0}")]
    Status(u16),
    #[error("Failed to serialize request: {0}")]
    Encode(String),
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Authenticated session handed to the transport at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    access_token: String,
}

impl Session {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
        }
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server. Empty when there is no window.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Path of a REST collection, e.g. `fees` -> `/api/fees`
pub fn collection_path(collection: &str) -> String {
    format!("/api/{}", collection.trim_matches('/'))
}

/// Path of one member of a collection; the id is percent-encoded.
pub fn member_path(collection: &str, id: &str) -> String {
    format!(
        "{}/{}",
        collection_path(collection),
        urlencoding::encode(id)
    )
}

/// Races `future` against the request timeout.
pub async fn with_timeout<F: Future>(future: F) -> Result<F::Output, ApiError> {
    let timeout = TimeoutFuture::new(REQUEST_TIMEOUT_MS);
    futures::pin_mut!(future);
    futures::pin_mut!(timeout);
    match select(future, timeout).await {
        Either::Left((output, _)) => Ok(output),
        Either::Right(((), _)) => Err(ApiError::Timeout(REQUEST_TIMEOUT_MS)),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base: String,
    session: Option<Session>,
}

impl ApiClient {
    pub fn new(base: impl Into<String>, session: Option<Session>) -> Self {
        Self {
            base: base.into(),
            session,
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.session {
            Some(session) => builder.header("Authorization", &session.authorization_header()),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = with_timeout(self.authorize(builder).send())
            .await?
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(response)
    }

    async fn send_json<B: Serialize>(
        &self,
        builder: RequestBuilder,
        body: &B,
    ) -> Result<Response, ApiError> {
        let request = self
            .authorize(builder)
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let response = with_timeout(request.send())
            .await?
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// The data-fetch contract: `GET /api/{collection}` as a list of records.
    pub async fn fetch_collection<T: DeserializeOwned>(
        &self,
        collection: &str,
    ) -> Result<Vec<T>, ApiError> {
        self.get(&collection_path(collection)).await
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(RequestBuilder::new(&self.url(path))).await?;
        Self::decode(response).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let builder = RequestBuilder::new(&self.url(path)).method(gloo_net::http::Method::POST);
        let response = self.send_json(builder, body).await?;
        Self::decode(response).await
    }

    /// POST whose response body is ignored.
    pub async fn post_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let builder = RequestBuilder::new(&self.url(path)).method(gloo_net::http::Method::POST);
        self.send_json(builder, body).await.map(|_| ())
    }

    pub async fn put<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let builder = RequestBuilder::new(&self.url(path)).method(gloo_net::http::Method::PUT);
        self.send_json(builder, body).await.map(|_| ())
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let builder = RequestBuilder::new(&self.url(path)).method(gloo_net::http::Method::DELETE);
        self.send(builder).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_paths() {
        assert_eq!(collection_path("fees"), "/api/fees");
        assert_eq!(collection_path("/meter-readings/"), "/api/meter-readings");
        assert_eq!(member_path("fees", "a b"), "/api/fees/a%20b");
    }

    #[test]
    fn test_url_joins_base_and_path() {
        let client = ApiClient::new("http://localhost:3000", None);
        assert_eq!(client.url("/api/bills"), "http://localhost:3000/api/bills");
        assert!(client.session().is_none());
    }

    #[test]
    fn test_session_header() {
        let session = Session::new("tok123");
        assert_eq!(session.authorization_header(), "Bearer tok123");
        let client = ApiClient::new("", Some(session.clone()));
        assert_eq!(client.session(), Some(&session));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ApiError::Status(404).to_string(), "Request failed: 404");
        assert_eq!(
            ApiError::Timeout(REQUEST_TIMEOUT_MS).to_string(),
            "Request timed out after 5000 ms"
        );
    }
}
