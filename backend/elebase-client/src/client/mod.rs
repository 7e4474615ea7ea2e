use crate::config::{ClientConfig, ClientSettings};
use crate::diagnostics::{DiagnosticEntry, DiagnosticsSink, LogSink};
use crate::error::ClientError;
use crate::request::RequestBuilder;
use crate::response;
use crate::transport::{ReqwestTransport, Transport, default_headers};

use models::{
    ApiTarget, EchoContext, HttpMethod, NormalizedResponse, RequestDescriptor, RequestOptions,
};

use std::sync::Arc;

use serde_json::Value;

/// Key of the item array inside a paged list envelope.
const LIST_INDEX_KEY: &str = "index";

/// Client for one Elebase API.
///
/// Cheap to clone; clones share the configuration, the connection pool and
/// the diagnostics sink. Each verb call is independent: nothing is queued,
/// retried or rate limited here.
#[derive(Clone)]
pub struct ElebaseClient<T: Transport = ReqwestTransport> {
    config: Arc<ClientConfig>,
    transport: T,
    sink: Arc<dyn DiagnosticsSink>,
}

impl ElebaseClient<ReqwestTransport> {
    /// Client for the content API.
    pub fn content(settings: ClientSettings) -> Result<Self, ClientError> {
        Self::from_config(ClientConfig::content(settings)?)
    }

    /// Client for the geo API.
    pub fn geo(settings: ClientSettings) -> Result<Self, ClientError> {
        Self::from_config(ClientConfig::geo(settings)?)
    }

    pub fn from_config(config: ClientConfig) -> Result<Self, ClientError> {
        let transport = ReqwestTransport::new(config.base_url().clone(), config.http())?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: Transport> ElebaseClient<T> {
    /// Client over a caller-provided transport.
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self {
            config: Arc::new(config),
            transport,
            sink: Arc::new(LogSink),
        }
    }

    /// Route diagnostics to `sink` instead of the `log` facade.
    ///
    /// The sink is only called when `http.logging` is enabled.
    pub fn with_sink(mut self, sink: impl DiagnosticsSink + 'static) -> Self {
        self.sink = Arc::new(sink);
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub async fn get(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<NormalizedResponse, ClientError> {
        self.send(RequestDescriptor::new(HttpMethod::Get, path, options))
            .await
    }

    pub async fn post(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<NormalizedResponse, ClientError> {
        self.send(RequestDescriptor::new(HttpMethod::Post, path, options))
            .await
    }

    /// Alias of [`Self::post`].
    pub async fn create(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<NormalizedResponse, ClientError> {
        self.post(path, options).await
    }

    pub async fn put(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<NormalizedResponse, ClientError> {
        self.send(RequestDescriptor::new(HttpMethod::Put, path, options))
            .await
    }

    /// Alias of [`Self::put`].
    pub async fn update(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<NormalizedResponse, ClientError> {
        self.put(path, options).await
    }

    pub async fn delete(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<NormalizedResponse, ClientError> {
        self.send(RequestDescriptor::new(HttpMethod::Delete, path, options))
            .await
    }

    /// Build, send, normalize, log, then either fail or return the response.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Validation`] before any network activity
    /// - [`ClientError::Transport`] when the round trip itself fails
    /// - [`ClientError::Request`] when the service answers with status > 304,
    ///   after the transaction has been logged
    pub async fn send(
        &self,
        descriptor: RequestDescriptor,
    ) -> Result<NormalizedResponse, ClientError> {
        let target = self.config.target();
        let context = EchoContext {
            target,
            path: descriptor.path.clone(),
            first: descriptor.options.first,
        };
        let first = context.first;

        let request = RequestBuilder::new(&self.config).build(descriptor)?;
        let raw = self.transport.send(&request).await?;
        let transaction = response::normalize(raw, &request, context)
            .with_default_headers(&default_headers(self.config.http()));

        if self.config.http().logging {
            self.sink
                .record(&DiagnosticEntry::from_transaction(&transaction));
        }

        let mut response = transaction.into_result()?;

        if first && target == ApiTarget::Content {
            unwrap_first(&mut response.data);
        }

        Ok(response)
    }
}

/// Replace a `{"index": [...]}` list envelope with its first item, or null
/// when the list is empty. Other shapes are left alone.
fn unwrap_first(data: &mut Value) {
    let first = match data.get_mut(LIST_INDEX_KEY) {
        Some(Value::Array(items)) => {
            if items.is_empty() {
                Value::Null
            } else {
                items.swap_remove(0)
            }
        }
        _ => return,
    };

    *data = first;
}
