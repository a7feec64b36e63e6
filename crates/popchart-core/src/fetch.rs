// File: crates/popchart-core/src/fetch.rs
// Summary: Data fetch controller: HTTP source for `/api/barchart` plus off-thread dispatch
// with request ids so only the newest response is applied.

use std::fmt;
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tracing::{debug, error};

use crate::query::{BarchartQuery, InvalidBaseUrl};
use crate::record::PopulationRecord;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error(transparent)]
    InvalidUrl(#[from] InvalidBaseUrl),
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },
    #[error("{url} answered HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("malformed response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("empty or undefined data received from {url}")]
    Empty { url: String },
    #[error("could not start fetch worker: {0}")]
    Spawn(#[source] std::io::Error),
}

pub type FetchOutcome = Result<Vec<PopulationRecord>, FetchError>;

/// Anything that can answer a [`BarchartQuery`]. The HTTP client in production, fixtures in tests.
pub trait PopulationSource: Send + Sync {
    fn fetch(&self, query: &BarchartQuery) -> FetchOutcome;
}

/// Production source backed by `reqwest::blocking`.
pub struct HttpSource {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self::with_client(base_url, client))
    }

    /// Use a preconfigured client (proxy settings, custom TLS, ...).
    pub fn with_client(base_url: impl Into<String>, client: reqwest::blocking::Client) -> Self {
        Self { base_url: base_url.into(), client }
    }
}

impl PopulationSource for HttpSource {
    fn fetch(&self, query: &BarchartQuery) -> FetchOutcome {
        let url = query.url(&self.base_url)?;
        let url_str = url.to_string();
        debug!(url = %url_str, "fetching population page");

        let response = self.client.get(url).send().map_err(|e| FetchError::Transport {
            url: url_str.clone(),
            message: if e.is_timeout() {
                "timed out".to_string()
            } else if e.is_connect() {
                "could not connect".to_string()
            } else {
                e.to_string()
            },
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { url: url_str, status: status.as_u16() });
        }

        let body = response
            .text()
            .map_err(|e| FetchError::Transport { url: url_str.clone(), message: e.to_string() })?;
        decode_body(&url_str, &body)
    }
}

/// `null`, a blank body and `[]` all count as "no data".
fn decode_body(url: &str, body: &str) -> FetchOutcome {
    if body.trim().is_empty() {
        return Err(FetchError::Empty { url: url.to_string() });
    }
    let rows: Option<Vec<PopulationRecord>> = serde_json::from_str(body)
        .map_err(|source| FetchError::Decode { url: url.to_string(), source })?;
    match rows {
        Some(rows) if !rows.is_empty() => Ok(rows),
        _ => Err(FetchError::Empty { url: url.to_string() }),
    }
}

/// Monotonic tag for issued requests; larger means newer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A finished request, delivered back to the event loop that issued it.
#[derive(Debug)]
pub struct FetchResult {
    pub id: RequestId,
    pub query: BarchartQuery,
    pub outcome: FetchOutcome,
}

/// Runs each fetch on its own worker thread and posts the [`FetchResult`] into `sink`.
///
/// Requests are never cancelled mid-flight; callers compare [`RequestId`]s and drop stale
/// results. Once the receiving side is gone, late results are discarded.
pub struct FetchController<S, E> {
    source: Arc<S>,
    sink: Sender<E>,
}

impl<S, E> FetchController<S, E>
where
    S: PopulationSource + 'static,
    E: From<FetchResult> + Send + 'static,
{
    pub fn new(source: Arc<S>, sink: Sender<E>) -> Self {
        Self { source, sink }
    }

    pub fn source(&self) -> &Arc<S> {
        &self.source
    }

    /// Every request is answered through `sink`, including ones whose worker never started.
    pub fn request(&self, id: RequestId, query: BarchartQuery) {
        if let Err(e) = self.spawn_worker(id, query.clone()) {
            error!(%id, "failed to spawn fetch worker: {e}");
            self.post(FetchResult { id, query, outcome: Err(FetchError::Spawn(e)) });
        }
    }

    fn spawn_worker(&self, id: RequestId, query: BarchartQuery) -> std::io::Result<()> {
        let source = Arc::clone(&self.source);
        let sink = self.sink.clone();
        thread::Builder::new().name(format!("popchart-fetch-{}", id.0)).spawn(move || {
            let outcome = source.fetch(&query);
            if sink.send(E::from(FetchResult { id, query, outcome })).is_err() {
                debug!(%id, "fetch finished after its receiver closed; dropping result");
            }
        })?;
        Ok(())
    }

    fn post(&self, result: FetchResult) {
        let id = result.id;
        if self.sink.send(E::from(result)).is_err() {
            debug!(%id, "receiver closed; dropping result");
        }
    }
}
