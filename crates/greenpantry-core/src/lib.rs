//! # GreenPantry Core Library
//!
//! This library provides the core logic for GreenPantry, which turns a list
//! of ingredients into AI-generated recipe suggestions. It follows a
//! CLI-first layout: everything lives here, and the `greenpantry` binary is
//! a thin view layer over the same types.
//!
//! ## Architecture
//!
//! - **Ingredient Store**: ordered, de-duplicated ingredient names
//! - **Recipe Generator**: prompt + response schema, one call to a
//!   [`GenerationBackend`] (Gemini in production, a fake in tests)
//! - **Session**: the `Idle -> Loading -> Success | Error` state machine
//!   and per-card expand/collapse state
//!
//! ## Key Components
//!
//! - [`IngredientStore`]: ingredient list
//! - [`RecipeGenerator`]: generation contract
//! - [`Session`]: single state container for the view layer
//! - [`Config`]: application configuration

pub mod config;
pub mod credentials;
pub mod error;
pub mod generator;
pub mod pantry;
pub mod recipe;
pub mod session;

pub use config::Config;
pub use error::{BackendError, ConfigError, CoreError, CredentialError, GenerationFailure};
pub use generator::{FakeBackend, GeminiBackend, GenerationBackend, GenerationRequest, RecipeGenerator};
pub use pantry::IngredientStore;
pub use recipe::{Difficulty, Recipe};
pub use session::{GenerationTicket, RecipeCard, Session, Status};
