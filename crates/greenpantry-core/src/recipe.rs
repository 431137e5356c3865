//! Recipe records returned by the generator.

use serde::{Deserialize, Serialize};

/// A generated dish. Field names follow the response schema (camelCase).
///
/// Recipes are never edited after they arrive; a new generation replaces
/// the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub name: String,
    pub description: String,
    /// Ingredient lines including quantities.
    pub ingredients: Vec<String>,
    /// Ordered cooking steps.
    pub instructions: Vec<String>,
    pub prep_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    pub difficulty: String,
    /// Approximate calories per serving.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<u32>,
}

impl Recipe {
    pub fn difficulty_level(&self) -> Difficulty {
        Difficulty::from_label(&self.difficulty)
    }
}

/// Coarse classification of the free-form difficulty label, used for
/// badge styling only. The label itself is always displayed as received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Other,
}

impl Difficulty {
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Other,
        }
    }
}

/// Parse a JSON array of recipes as produced under the response schema.
///
/// A blank payload is an empty list, not an error.
pub fn parse_recipes(text: &str) -> Result<Vec<Recipe>, serde_json::Error> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(text)
}
