//! The API client seam and its HTTP implementation.

use std::sync::Arc;

use async_trait::async_trait;
use registrar_auth::SessionContext;
use reqwest::{Method, RequestBuilder, Url};
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::shape::message_of;

/// Query parameters for a `GET`, in the order they are sent.
pub type Query = [(&'static str, String)];

/// The requests a registry screen issues.
///
/// Paths are relative to the API base URL. Every method resolves to the
/// decoded JSON body (`Value::Null` for an empty body) on a 2xx status and
/// to [`Error::Api`] otherwise. Envelope checks are left to the caller.
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// `GET path?query`
    async fn get(&self, path: &str, query: &Query) -> Result<Value>;

    /// `POST path` with a JSON body
    async fn post(&self, path: &str, body: &Value) -> Result<Value>;

    /// `PUT path` with a JSON body
    async fn put(&self, path: &str, body: &Value) -> Result<Value>;

    /// `DELETE path`
    async fn delete(&self, path: &str) -> Result<Value>;
}

/// [`ApiClient`] over `reqwest`.
///
/// When a session is attached, its token is sent as a bearer
/// `Authorization` header on every request.
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    http: reqwest::Client,
    base: Url,
    session: Option<Arc<SessionContext>>,
}

impl HttpApiClient {
    /// Create a client for `config.base_url`.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut raw = config.base_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let base = Url::parse(&raw)
            .map_err(|e| Error::config(format!("invalid base URL '{}': {e}", config.base_url)))?;
        let http = reqwest::Client::builder()
            .user_agent(concat!("registrar/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base,
            session: None,
        })
    }

    /// Attach the session whose token authorizes requests.
    pub fn with_session(mut self, session: Arc<SessionContext>) -> Self {
        self.session = Some(session);
        self
    }

    /// The normalized base URL (always ends in `/`).
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn url(&self, path: &str, query: &Query) -> Result<Url> {
        let mut url = self
            .base
            .join(path.trim_start_matches('/'))
            .map_err(|e| Error::config(format!("invalid path '{path}': {e}")))?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let builder = self.http.request(method, url);
        match self.session.as_ref().and_then(|s| s.token()) {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, method: Method, url: Url, body: Option<&Value>) -> Result<Value> {
        tracing::debug!(%method, %url, "Sending request");
        let mut builder = self.request(method.clone(), url.clone());
        if let Some(body) = body {
            builder = builder.json(body);
        }
        let response = builder.send().await.map_err(|e| {
            tracing::warn!(%method, %url, error = %e, "Request failed");
            Error::Http(e)
        })?;

        let status = response.status();
        let bytes = response.bytes().await?;
        tracing::debug!(%method, %url, status = status.as_u16(), len = bytes.len(), "Response received");

        if !status.is_success() {
            let message = serde_json::from_slice::<Value>(&bytes)
                .ok()
                .as_ref()
                .and_then(message_of);
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl ApiClient for HttpApiClient {
    async fn get(&self, path: &str, query: &Query) -> Result<Value> {
        let url = self.url(path, query)?;
        self.send(Method::GET, url, None).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value> {
        let url = self.url(path, &[])?;
        self.send(Method::POST, url, Some(body)).await
    }

    async fn put(&self, path: &str, body: &Value) -> Result<Value> {
        let url = self.url(path, &[])?;
        self.send(Method::PUT, url, Some(body)).await
    }

    async fn delete(&self, path: &str) -> Result<Value> {
        let url = self.url(path, &[])?;
        self.send(Method::DELETE, url, None).await
    }
}
