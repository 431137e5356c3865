//! Plain-text rendering of the session: ingredient chips, banners and
//! recipe cards.

use std::fmt::Write;

use greenpantry_core::{Difficulty, IngredientStore, Recipe, RecipeCard, Session, Status};

pub const EMPTY_PANTRY_HINT: &str = "No ingredients added yet.\nAdd items to start cooking!";
pub const READY_HINT: &str = "Ready to cook? Run `find` to get recipe ideas.";
pub const LOADING_LINE: &str = "Finding recipes...";
pub const NO_RESULTS_LINE: &str = "No recipes came back. Try different ingredients.";

/// Rendering settings.
#[derive(Debug, Clone)]
pub struct Renderer {
    /// Shown for optional fields the model left out.
    pub placeholder: String,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            placeholder: "—".into(),
        }
    }
}

fn badge(recipe: &Recipe) -> String {
    let level = match recipe.difficulty_level() {
        Difficulty::Easy => "*",
        Difficulty::Medium => "**",
        Difficulty::Hard | Difficulty::Other => "***",
    };
    format!("[{level} {}]", recipe.difficulty.trim().to_uppercase())
}

impl Renderer {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
        }
    }

    fn or_placeholder<T: ToString>(&self, value: Option<T>) -> String {
        value
            .map(|v| v.to_string())
            .unwrap_or_else(|| self.placeholder.clone())
    }

    /// Ingredient chips, or the empty-list hint.
    pub fn ingredients(&self, store: &IngredientStore) -> String {
        if store.is_empty() {
            return EMPTY_PANTRY_HINT.to_string();
        }
        store
            .iter()
            .map(|item| format!("[{item} x]"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// One card. `number` is the 1-based position shown to the user.
    pub fn card(&self, number: usize, card: &RecipeCard) -> String {
        let r = &card.recipe;
        let mut out = String::new();
        let _ = writeln!(out, "{number}. {} {}", badge(r), r.name);
        let _ = writeln!(out, "   {}", r.description);
        let _ = writeln!(
            out,
            "   {} prep | {} serv | {} kcal",
            r.prep_time,
            self.or_placeholder(r.servings),
            self.or_placeholder(r.calories),
        );

        if !card.expanded {
            let _ = writeln!(out, "   > View Recipe (show {number})");
            return out;
        }

        let _ = writeln!(out, "   Cook time: {}", self.or_placeholder(r.cook_time.as_deref()));
        let _ = writeln!(out);
        let _ = writeln!(out, "   Ingredients");
        for line in &r.ingredients {
            let _ = writeln!(out, "     - {line}");
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "   Instructions");
        for (i, step) in r.instructions.iter().enumerate() {
            let _ = writeln!(out, "     {}. {step}", i + 1);
        }
        let _ = writeln!(out, "   < Hide Recipe (show {number})");
        out
    }

    /// Results header plus every card.
    pub fn results(&self, cards: &[RecipeCard]) -> String {
        let mut out = format!("Suggested Recipes ({} Found)\n\n", cards.len());
        for (i, card) in cards.iter().enumerate() {
            out.push_str(&self.card(i + 1, card));
            out.push('\n');
        }
        out
    }

    /// Everything below the input box for the current state.
    pub fn session(&self, session: &Session) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "What's in your fridge?");
        let _ = writeln!(out, "{}", self.ingredients(session.ingredients()));
        let _ = writeln!(out);

        match session.status() {
            Status::Loading => {
                let _ = writeln!(out, "{LOADING_LINE}");
            }
            Status::Error => {
                if let Some(message) = session.error() {
                    let _ = writeln!(out, "!! {message}");
                }
            }
            Status::Success if session.cards().is_empty() => {
                let _ = writeln!(out, "{NO_RESULTS_LINE}");
            }
            Status::Success => out.push_str(&self.results(session.cards())),
            Status::Idle => {}
        }

        if session.shows_ready_hint() && session.status() != Status::Success {
            let _ = writeln!(out, "{READY_HINT}");
        }
        out
    }
}
