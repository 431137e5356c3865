//! Recipe generation.
//!
//! [`RecipeGenerator`] turns an ingredient list into a prompt, makes exactly
//! one call to a [`GenerationBackend`] and parses the schema-constrained
//! JSON it returns. Every failure cause is logged here and then collapsed
//! into [`GenerationFailure`]; callers never see the raw error.
//!
//! The backend is a trait object so tests can swap the HTTP client for
//! [`FakeBackend`].

pub mod fake;
pub mod gemini;
pub mod prompt;

pub use fake::FakeBackend;
pub use gemini::GeminiBackend;
pub use prompt::{build_prompt, recipe_schema, RECIPE_COUNT};

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{BackendError, GenerationFailure};
use crate::recipe::{parse_recipes, Recipe};

/// Everything the external service needs for one call.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// Model identifier, e.g. "gemini-3-flash-preview".
    pub model: String,
    pub prompt: String,
    /// Output schema descriptor the response must conform to.
    pub schema: Value,
}

/// A single request/response exchange with a text generation service.
#[async_trait]
pub trait GenerationBackend: Send + Sync + fmt::Debug {
    /// Run one generation. `Ok(None)` means the service returned no text.
    async fn generate(&self, request: &GenerationRequest) -> Result<Option<String>, BackendError>;

    /// Short backend name used in logs (e.g. "gemini", "fake").
    fn name(&self) -> &'static str;
}

/// Builds requests, calls the backend once and parses the result.
#[derive(Debug)]
pub struct RecipeGenerator {
    backend: Box<dyn GenerationBackend>,
    model: String,
    timeout: Option<Duration>,
}

impl RecipeGenerator {
    pub fn new(backend: Box<dyn GenerationBackend>, model: impl Into<String>) -> Self {
        Self {
            backend,
            model: model.into(),
            timeout: None,
        }
    }

    /// Fail the call if the backend has not answered within `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Request the model to use for `ingredients`.
    pub fn request_for(&self, ingredients: &[String]) -> GenerationRequest {
        GenerationRequest {
            model: self.model.clone(),
            prompt: build_prompt(ingredients),
            schema: recipe_schema(),
        }
    }

    /// Generate recipes for `ingredients`.
    ///
    /// An empty list short-circuits to `Ok(vec![])` without calling the
    /// backend. Otherwise exactly one backend call is made.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationFailure`] for any transport, service, timeout or
    /// parse failure. No partial results are returned.
    pub async fn generate(&self, ingredients: &[String]) -> Result<Vec<Recipe>, GenerationFailure> {
        if ingredients.is_empty() {
            return Ok(Vec::new());
        }

        let request = self.request_for(ingredients);
        tracing::debug!(
            backend = self.backend.name(),
            model = %self.model,
            ingredients = ingredients.len(),
            "requesting recipes"
        );

        let text = match self.call(&request).await {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(backend = self.backend.name(), error = %e, "error generating recipes");
                return Err(GenerationFailure);
            }
        };

        let Some(text) = text else {
            tracing::warn!(backend = self.backend.name(), "generation returned no text");
            return Ok(Vec::new());
        };

        match parse_recipes(&text) {
            Ok(recipes) => {
                tracing::info!(count = recipes.len(), "received recipes");
                Ok(recipes)
            }
            Err(e) => {
                tracing::error!(error = %e, payload_len = text.len(), "response did not match recipe schema");
                Err(GenerationFailure)
            }
        }
    }

    async fn call(&self, request: &GenerationRequest) -> Result<Option<String>, BackendError> {
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.backend.generate(request))
                .await
                .map_err(|_| BackendError::Timeout {
                    secs: limit.as_secs(),
                })?,
            None => self.backend.generate(request).await,
        }
    }
}
