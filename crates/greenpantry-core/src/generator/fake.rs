//! Fake generation backend for tests.
//!
//! Returns a scripted payload or error without any network access, and
//! records how it was called so tests can assert on the boundary.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use super::{GenerationBackend, GenerationRequest};
use crate::error::BackendError;

#[derive(Debug)]
enum Script {
    Text(String),
    Empty,
    Fail(BackendError),
}

/// Shared count of backend invocations.
#[derive(Debug, Clone, Default)]
pub struct CallCounter(Arc<AtomicUsize>);

impl CallCounter {
    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// Shared slot holding the most recent request a [`FakeBackend`] received.
#[derive(Debug, Clone, Default)]
pub struct LastRequest(Arc<Mutex<Option<GenerationRequest>>>);

impl LastRequest {
    pub fn get(&self) -> Option<GenerationRequest> {
        self.0.lock().ok().and_then(|slot| slot.clone())
    }
}

/// A scripted [`GenerationBackend`].
#[derive(Debug)]
pub struct FakeBackend {
    script: Script,
    delay: Option<Duration>,
    calls: CallCounter,
    last_request: LastRequest,
}

impl FakeBackend {
    fn scripted(script: Script) -> Self {
        Self {
            script,
            delay: None,
            calls: CallCounter::default(),
            last_request: LastRequest::default(),
        }
    }

    /// Always answer with `text`.
    pub fn with_response(text: &str) -> Self {
        Self::scripted(Script::Text(text.to_string()))
    }

    /// Always answer with no text at all.
    pub fn empty() -> Self {
        Self::scripted(Script::Empty)
    }

    /// Always fail with (a copy of) `error`.
    pub fn failing(error: BackendError) -> Self {
        Self::scripted(Script::Fail(error))
    }

    /// Sleep before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn call_counter(&self) -> CallCounter {
        self.calls.clone()
    }

    pub fn last_request_handle(&self) -> LastRequest {
        self.last_request.clone()
    }
}

// reqwest::Error cannot be cloned, so transport errors replay as Malformed.
fn replay(error: &BackendError) -> BackendError {
    match error {
        BackendError::Http(e) => BackendError::Malformed(e.to_string()),
        BackendError::Api { status, message } => BackendError::Api {
            status: *status,
            message: message.clone(),
        },
        BackendError::Malformed(m) => BackendError::Malformed(m.clone()),
        BackendError::Timeout { secs } => BackendError::Timeout { secs: *secs },
    }
}

#[async_trait]
impl GenerationBackend for FakeBackend {
    async fn generate(&self, request: &GenerationRequest) -> Result<Option<String>, BackendError> {
        self.calls.0.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut slot) = self.last_request.0.lock() {
            *slot = Some(request.clone());
        }

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match &self.script {
            Script::Text(text) => Ok(Some(text.clone())),
            Script::Empty => Ok(None),
            Script::Fail(error) => Err(replay(error)),
        }
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}
