//! The Billforge API client and its dispatch core.
//!
//! Every operation funnels through one send path: build the URL, attach
//! query parameters, serialize the body, execute exactly one exchange
//! through the transport, then branch on the status class. Success bodies
//! decode against the declared envelope; anything else becomes a typed
//! [`Error::Api`] carrying the request, response, and best-effort decoded
//! error body.
//!
//! Calls are stateless and independent: no retries, no caching, no shared
//! mutable state, and no sequencing guarantees between calls.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use billforge_core::{Envelope, ErrorEnvelope, Page};

use crate::config::{Config, ConfigError};
use crate::error::{Error, Result};
use crate::params::QueryParams;
use crate::transport::{HttpTransport, Request, Response, Transport, TransportError};

/// Hook that may wrap or replace the transport before each call.
///
/// Exposed for injecting instrumentation, retries, or request rewriting
/// without changing the client; the client itself never adds such behavior.
pub type TransportHook = dyn Fn(Arc<dyn Transport>) -> Arc<dyn Transport> + Send + Sync;

/// Billforge API client.
///
/// Cheap to clone; clones share the underlying transport.
#[derive(Clone)]
pub struct Client {
    config: Config,
    transport: Arc<dyn Transport>,
    transform: Option<Arc<TransportHook>>,
}

impl Client {
    /// Build a client with the default reqwest-backed transport.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let transport = Arc::new(HttpTransport::new(config.timeout));
        Self {
            config,
            transport,
            transform: None,
        }
    }

    /// Build a client from `BILLFORGE_API_KEY` and `BILLFORGE_API_URL`.
    ///
    /// # Errors
    ///
    /// Returns an error if `BILLFORGE_API_KEY` is unset.
    pub fn from_env() -> std::result::Result<Self, ConfigError> {
        Ok(Self::new(Config::from_env()?))
    }

    /// Replace the transport the client sends requests through.
    #[must_use]
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = transport;
        self
    }

    /// Install a hook that may wrap or replace the transport before each
    /// call.
    #[must_use]
    pub fn with_transform(
        mut self,
        transform: impl Fn(Arc<dyn Transport>) -> Arc<dyn Transport> + Send + Sync + 'static,
    ) -> Self {
        self.transform = Some(Arc::new(transform));
        self
    }

    /// The configuration the client was built with.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Url::parse(&format!("{}{path}", self.config.base_url))
            .map_err(|err| TransportError::with_source("invalid request URL", err).into())
    }

    fn auth_header(&self) -> Result<HeaderValue> {
        HeaderValue::from_str(&format!("Bearer {}", self.config.api_key))
            .map_err(|err| TransportError::with_source("invalid API key", err).into())
    }

    /// Execute one exchange and enforce the status-class branch.
    async fn send_raw(
        &self,
        operation: &'static str,
        method: Method,
        path: &str,
        query: &QueryParams,
        body: Option<Vec<u8>>,
    ) -> Result<Response> {
        let mut url = self.endpoint(path)?;
        query.apply(&mut url);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, self.auth_header()?);
        if body.is_some() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        tracing::debug!(operation, %method, %url, "sending request");

        let request = Request {
            method: method.clone(),
            url: url.clone(),
            headers,
            body,
        };

        let transport = match &self.transform {
            Some(transform) => transform(Arc::clone(&self.transport)),
            None => Arc::clone(&self.transport),
        };

        let response = transport.execute(request).await?;

        if response.status.is_success() {
            Ok(response)
        } else {
            Err(self.api_error(operation, method, url, &response))
        }
    }

    /// Build the typed error for a non-success response: best-effort decode
    /// of the error body, falling back to the raw text.
    fn api_error(
        &self,
        operation: &'static str,
        method: Method,
        url: Url,
        response: &Response,
    ) -> Error {
        let body = String::from_utf8_lossy(&response.body).into_owned();
        let decoded: Option<ErrorEnvelope> = serde_json::from_slice(&response.body).ok();
        let (error, request_id) = match decoded {
            Some(envelope) => (
                Some(envelope.error),
                envelope.meta.and_then(|meta| meta.request_id),
            ),
            None => (None, None),
        };

        tracing::debug!(
            operation,
            status = %response.status,
            code = error.as_ref().map(|detail| detail.code.as_str()),
            "API returned an error"
        );

        Error::Api {
            operation,
            method,
            url,
            status: response.status,
            error,
            body,
            request_id,
        }
    }

    fn decode<T: DeserializeOwned>(operation: &'static str, response: &Response) -> Result<T> {
        serde_json::from_slice(&response.body).map_err(|source| Error::Decode { operation, source })
    }

    fn encode<B: Serialize + ?Sized>(operation: &'static str, body: &B) -> Result<Vec<u8>> {
        serde_json::to_vec(body).map_err(|source| Error::Serialize { operation, source })
    }

    /// GET a single entity.
    pub(crate) async fn get_entity<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        path: &str,
        query: &QueryParams,
    ) -> Result<T> {
        let response = self
            .send_raw(operation, Method::GET, path, query, None)
            .await?;
        let envelope: Envelope<T> = Self::decode(operation, &response)?;
        Ok(envelope.data)
    }

    /// GET a page of entities.
    pub(crate) async fn get_page<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        path: &str,
        query: &QueryParams,
    ) -> Result<Page<T>> {
        let response = self
            .send_raw(operation, Method::GET, path, query, None)
            .await?;
        Self::decode(operation, &response)
    }

    /// Send a JSON body and decode the returned entity.
    pub(crate) async fn send_entity<T, B>(
        &self,
        operation: &'static str,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = Self::encode(operation, body)?;
        let response = self
            .send_raw(operation, method, path, &QueryParams::new(), Some(body))
            .await?;
        let envelope: Envelope<T> = Self::decode(operation, &response)?;
        Ok(envelope.data)
    }

    /// POST without a body and decode the returned entity.
    pub(crate) async fn post_empty<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        path: &str,
    ) -> Result<T> {
        let response = self
            .send_raw(operation, Method::POST, path, &QueryParams::new(), None)
            .await?;
        let envelope: Envelope<T> = Self::decode(operation, &response)?;
        Ok(envelope.data)
    }

    /// DELETE, expecting an empty success response.
    pub(crate) async fn delete_entity(&self, operation: &'static str, path: &str) -> Result<()> {
        self.send_raw(operation, Method::DELETE, path, &QueryParams::new(), None)
            .await?;
        Ok(())
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.config.base_url)
            .finish_non_exhaustive()
    }
}
