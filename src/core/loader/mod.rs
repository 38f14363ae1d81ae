#[cfg(test)]
mod tests;

use crate::core::note::Note;
use crossbeam::channel::{Receiver, Sender, unbounded};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    thread,
    time::Duration,
};
use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str = "https://pianoroll.ai/random_notes";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    #[error("HTTP error! Status: {status}")]
    Http { status: u16 },
    #[error("transport error: {0}")]
    Transport(String),
    #[error("malformed note data: {0}")]
    MalformedData(String),
}

pub enum LoaderMsg {
    Loaded(Vec<Note>),
    Failed(LoadError),
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct LoadRequest {
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for LoadRequest {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Shared flag telling a running load its result is no longer wanted
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Where notes come from
pub trait NoteSource: Send + 'static {
    fn fetch(&self, request: &LoadRequest) -> Result<Vec<Note>, LoadError>;
}

/// Blocking GET bounded by the request timeout
pub struct HttpSource;

impl NoteSource for HttpSource {
    fn fetch(&self, request: &LoadRequest) -> Result<Vec<Note>, LoadError> {
        let agent = ureq::AgentBuilder::new().timeout(request.timeout).build();
        let response = agent
            .get(&request.endpoint)
            .call()
            .map_err(|err| match err {
                ureq::Error::Status(status, _) => LoadError::Http { status },
                ureq::Error::Transport(transport) => LoadError::Transport(transport.to_string()),
            })?;
        let body = response
            .into_string()
            .map_err(|err| LoadError::Transport(err.to_string()))?;
        parse_notes(&body)
    }
}

/// Parse the flat JSON array served by the notes endpoint
pub fn parse_notes(body: &str) -> Result<Vec<Note>, LoadError> {
    serde_json::from_str(body).map_err(|err| LoadError::MalformedData(err.to_string()))
}

/// A load running on its own thread
pub struct LoadHandle {
    rx: Receiver<LoaderMsg>,
    token: CancellationToken,
}

impl LoadHandle {
    /// Non blocking, meant to be called every frame
    pub fn poll(&self) -> Option<LoaderMsg> {
        self.rx.try_recv().ok()
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }
}

pub fn spawn_loader(source: impl NoteSource, request: LoadRequest) -> LoadHandle {
    let (tx, rx) = unbounded();
    let token = CancellationToken::default();
    let worker_token = token.clone();

    thread::spawn(move || run_load(&source, &request, &worker_token, &tx));

    LoadHandle { rx, token }
}

fn run_load(
    source: &impl NoteSource,
    request: &LoadRequest,
    token: &CancellationToken,
    tx: &Sender<LoaderMsg>,
) {
    log::info!("Loading notes from {}", request.endpoint);
    let msg = if token.is_cancelled() {
        LoaderMsg::Cancelled
    } else {
        let result = source.fetch(request);
        // The request itself cannot be interrupted, a late result is dropped
        if token.is_cancelled() {
            LoaderMsg::Cancelled
        } else {
            match result {
                Ok(notes) => {
                    log::info!("Loaded {} notes", notes.len());
                    LoaderMsg::Loaded(notes)
                }
                Err(err) => {
                    log::error!("Error loading data: {err}");
                    LoaderMsg::Failed(err)
                }
            }
        }
    };
    if matches!(msg, LoaderMsg::Cancelled) {
        log::info!("Load from {} cancelled", request.endpoint);
    }
    // Receiver gone means nobody waits for this load anymore
    let _ = tx.send(msg);
}
