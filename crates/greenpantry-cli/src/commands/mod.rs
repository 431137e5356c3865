pub mod auth;
pub mod completions;
pub mod config;
pub mod kitchen;
pub mod suggest;

use greenpantry_core::credentials;
use greenpantry_core::{Config, RecipeGenerator};

use crate::render::Renderer;

/// Load config and resolve the API key, then build the generator.
pub fn generator_from_env() -> Result<(Config, RecipeGenerator), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let (key, source) = credentials::api_key()?;
    tracing::debug!(%source, model = %config.gemini.model, "using Gemini API key");
    let generator = config.build_generator(&key);
    Ok((config, generator))
}

pub fn renderer_for(config: &Config) -> Renderer {
    Renderer::new(config.display.placeholder.as_str())
}
