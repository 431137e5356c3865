//! Prompt text and response schema for recipe generation.

use indoc::formatdoc;
use serde_json::{json, Value};

/// Number of recipes requested per generation.
pub const RECIPE_COUNT: usize = 3;

/// Pantry items the model may use without them being listed.
pub const STAPLES: &[&str] = &["oil", "salt", "pepper", "sugar", "flour", "water"];

/// Build the instruction sent to the model for the given ingredients.
pub fn build_prompt(ingredients: &[String]) -> String {
    formatdoc! {"
        I have the following ingredients in my fridge: {ingredients}.
        Please generate {count} distinct and delicious recipes I can make using these ingredients.
        You may assume I have basic pantry staples like {staples}.
        Focus on creating a balanced variety (e.g., one quick meal, one comfort food, one healthy option).
        ",
        ingredients = ingredients.join(", "),
        count = RECIPE_COUNT,
        staples = staples_phrase(),
    }
}

fn staples_phrase() -> String {
    match STAPLES.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{}, and {last}", rest.join(", ")),
        Some((last, _)) => (*last).to_string(),
        None => String::new(),
    }
}

/// Response schema in the Gemini OpenAPI-subset format: an array of
/// recipe objects.
pub fn recipe_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "name": { "type": "STRING", "description": "Name of the dish" },
                "description": { "type": "STRING", "description": "A short, appetizing description" },
                "ingredients": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" },
                    "description": "Full list of ingredients with quantities"
                },
                "instructions": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" },
                    "description": "Step-by-step cooking instructions"
                },
                "prepTime": { "type": "STRING", "description": "Preparation time e.g. '15 mins'" },
                "cookTime": { "type": "STRING", "description": "Cooking time e.g. '30 mins'" },
                "servings": { "type": "INTEGER", "description": "Number of servings" },
                "difficulty": { "type": "STRING", "description": "Difficulty level (Easy, Medium, Hard)" },
                "calories": { "type": "INTEGER", "description": "Approximate calories per serving" }
            },
            "required": ["name", "description", "ingredients", "instructions", "prepTime", "difficulty"]
        }
    })
}
