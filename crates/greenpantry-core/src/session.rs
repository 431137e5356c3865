//! Session state machine.
//!
//! A [`Session`] is the single state container handed to the view layer:
//! the ingredient list, the generation status, the current recipe cards
//! and the error banner.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Loading -> (Success | Error)
//! Success | Error -> Loading          (new attempt clears old results first)
//! any -> Idle                         (clear)
//! ```
//!
//! Generation is split into [`Session::begin_generation`] and
//! [`Session::finish_generation`] so a caller can render the `Loading`
//! state while the call is in flight. Each attempt gets a
//! [`GenerationTicket`]; only the latest ticket may settle the session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::GenerationFailure;
use crate::generator::RecipeGenerator;
use crate::pantry::IngredientStore;
use crate::recipe::Recipe;

/// Banner text shown when the last attempt failed.
pub const ERROR_BANNER: &str = "Failed to generate recipes. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Nothing generated yet, or the session was cleared.
    Idle,
    /// A generation call is in flight.
    Loading,
    /// The last call returned a (possibly empty) recipe list.
    Success,
    /// The last call failed.
    Error,
}

/// Identifies one generation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GenerationTicket(u64);

/// A recipe plus its local expand/collapse state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeCard {
    pub recipe: Recipe,
    pub expanded: bool,
}

impl RecipeCard {
    pub fn new(recipe: Recipe) -> Self {
        Self {
            recipe,
            expanded: false,
        }
    }

    /// Flip between collapsed and expanded; returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    ingredients: IngredientStore,
    status: Status,
    cards: Vec<RecipeCard>,
    error: Option<&'static str>,
    generated_at: Option<DateTime<Utc>>,
    issued: u64,
    in_flight: Option<GenerationTicket>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            ingredients: IngredientStore::new(),
            status: Status::Idle,
            cards: Vec::new(),
            error: None,
            generated_at: None,
            issued: 0,
            in_flight: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn ingredients(&self) -> &IngredientStore {
        &self.ingredients
    }

    pub fn cards(&self) -> &[RecipeCard] {
        &self.cards
    }

    pub fn recipes(&self) -> impl Iterator<Item = &Recipe> {
        self.cards.iter().map(|c| &c.recipe)
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    /// When the current recipe list arrived.
    pub fn generated_at(&self) -> Option<DateTime<Utc>> {
        self.generated_at
    }

    pub fn is_loading(&self) -> bool {
        self.status == Status::Loading
    }

    /// Whether the "Find Recipes" action is enabled.
    pub fn can_generate(&self) -> bool {
        !self.ingredients.is_empty() && !self.is_loading()
    }

    pub fn shows_error_banner(&self) -> bool {
        self.status == Status::Error
    }

    pub fn shows_results(&self) -> bool {
        self.status == Status::Success && !self.cards.is_empty()
    }

    /// Idle prompt: ingredients entered, nothing generated or shown yet.
    pub fn shows_ready_hint(&self) -> bool {
        !self.is_loading()
            && self.cards.is_empty()
            && !self.ingredients.is_empty()
            && self.error.is_none()
    }

    // ── Ingredient commands ──────────────────────────────────────────

    /// Add one ingredient. Ignored while a generation is in flight.
    pub fn add_ingredient(&mut self, name: &str) -> bool {
        !self.is_loading() && self.ingredients.add(name)
    }

    /// Add comma-separated ingredients. Ignored while loading.
    pub fn add_ingredients(&mut self, input: &str) -> usize {
        if self.is_loading() {
            return 0;
        }
        self.ingredients.add_many(input)
    }

    /// Remove an ingredient. Ignored while loading.
    pub fn remove_ingredient(&mut self, name: &str) -> bool {
        !self.is_loading() && self.ingredients.remove(name)
    }

    /// Drop ingredients and results and return to `Idle`.
    ///
    /// Any in-flight ticket is invalidated.
    pub fn clear(&mut self) {
        self.ingredients.clear();
        self.cards.clear();
        self.error = None;
        self.generated_at = None;
        self.in_flight = None;
        self.status = Status::Idle;
    }

    // ── Generation ───────────────────────────────────────────────────

    /// Enter `Loading` and hand out a ticket for the new attempt.
    ///
    /// Prior recipes and error are cleared before returning so stale
    /// results never coexist with a new request. Returns `None` when the
    /// action is disabled (no ingredients, or already loading).
    pub fn begin_generation(&mut self) -> Option<(GenerationTicket, Vec<String>)> {
        if !self.can_generate() {
            return None;
        }
        self.issued += 1;
        let ticket = GenerationTicket(self.issued);
        self.in_flight = Some(ticket);
        self.cards.clear();
        self.error = None;
        self.generated_at = None;
        self.status = Status::Loading;
        Some((ticket, self.ingredients.items().to_vec()))
    }

    /// Apply the outcome of the attempt identified by `ticket`.
    ///
    /// Outcomes of any attempt other than the one in flight are dropped.
    /// Returns `true` when the session was updated.
    pub fn finish_generation(
        &mut self,
        ticket: GenerationTicket,
        result: Result<Vec<Recipe>, GenerationFailure>,
    ) -> bool {
        if self.in_flight != Some(ticket) {
            tracing::debug!(?ticket, "discarding stale generation result");
            return false;
        }
        self.in_flight = None;

        match result {
            Ok(recipes) => {
                self.cards = recipes.into_iter().map(RecipeCard::new).collect();
                self.error = None;
                self.generated_at = Some(Utc::now());
                self.status = Status::Success;
            }
            Err(GenerationFailure) => {
                self.cards.clear();
                self.error = Some(ERROR_BANNER);
                self.generated_at = None;
                self.status = Status::Error;
            }
        }
        true
    }

    /// Run a full attempt against `generator`. A no-op when disabled.
    pub async fn generate(&mut self, generator: &RecipeGenerator) -> Status {
        let Some((ticket, ingredients)) = self.begin_generation() else {
            return self.status;
        };
        let result = generator.generate(&ingredients).await;
        self.finish_generation(ticket, result);
        self.status
    }

    // ── Cards ────────────────────────────────────────────────────────

    /// Toggle card `index` only. Returns its new expanded state, or `None`
    /// for an out-of-range index.
    pub fn toggle_card(&mut self, index: usize) -> Option<bool> {
        self.cards.get_mut(index).map(RecipeCard::toggle)
    }

    pub fn expand_all(&mut self) {
        self.cards.iter_mut().for_each(|c| c.expanded = true);
    }

    pub fn collapse_all(&mut self) {
        self.cards.iter_mut().for_each(|c| c.expanded = false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BackendError;
    use crate::generator::FakeBackend;

    fn recipe(name: &str) -> Recipe {
        Recipe {
            name: name.into(),
            description: format!("{name} description"),
            ingredients: vec!["1 thing".into()],
            instructions: vec!["Cook.".into()],
            prep_time: "5 mins".into(),
            cook_time: None,
            servings: Some(2),
            difficulty: "Easy".into(),
            calories: None,
        }
    }

    fn with_ingredients(items: &[&str]) -> Session {
        let mut session = Session::new();
        for item in items {
            session.add_ingredient(item);
        }
        session
    }

    #[test]
    fn starts_idle_and_disabled() {
        let session = Session::new();
        assert_eq!(session.status(), Status::Idle);
        assert!(!session.can_generate());
        assert!(!session.shows_ready_hint());
    }

    #[test]
    fn begin_requires_ingredients() {
        let mut session = Session::new();
        assert!(session.begin_generation().is_none());
        assert_eq!(session.status(), Status::Idle);
    }

    #[test]
    fn begin_enters_loading_and_snapshots_ingredients() {
        let mut session = with_ingredients(&["chicken", "spinach"]);
        assert!(session.shows_ready_hint());
        let (_, sent) = session.begin_generation().unwrap();
        assert_eq!(sent, ["chicken", "spinach"]);
        assert_eq!(session.status(), Status::Loading);
        assert!(!session.can_generate());
        assert!(!session.shows_ready_hint());
    }

    #[test]
    fn begin_is_disabled_while_loading() {
        let mut session = with_ingredients(&["rice"]);
        session.begin_generation().unwrap();
        assert!(session.begin_generation().is_none());
    }

    #[test]
    fn success_replaces_recipes() {
        let mut session = with_ingredients(&["rice"]);
        let (ticket, _) = session.begin_generation().unwrap();
        assert!(session.finish_generation(ticket, Ok(vec![recipe("A"), recipe("B"), recipe("C")])));
        assert_eq!(session.status(), Status::Success);
        assert_eq!(session.cards().len(), 3);
        assert!(session.shows_results());
        assert!(session.generated_at().is_some());
        assert!(session.cards().iter().all(|c| !c.expanded));
    }

    #[test]
    fn empty_success_shows_no_results() {
        let mut session = with_ingredients(&["rice"]);
        let (ticket, _) = session.begin_generation().unwrap();
        session.finish_generation(ticket, Ok(Vec::new()));
        assert_eq!(session.status(), Status::Success);
        assert!(!session.shows_results());
        assert!(!session.shows_error_banner());
    }

    #[test]
    fn failure_sets_banner_and_clears_recipes() {
        let mut session = with_ingredients(&["rice"]);
        let (ticket, _) = session.begin_generation().unwrap();
        session.finish_generation(ticket, Ok(vec![recipe("A")]));

        let (ticket, _) = session.begin_generation().unwrap();
        session.finish_generation(ticket, Err(GenerationFailure));

        assert_eq!(session.status(), Status::Error);
        assert!(session.cards().is_empty());
        assert_eq!(session.error(), Some(ERROR_BANNER));
        assert!(session.shows_error_banner());
    }

    #[test]
    fn retrigger_from_success_clears_before_result() {
        let mut session = with_ingredients(&["rice"]);
        let (ticket, _) = session.begin_generation().unwrap();
        session.finish_generation(ticket, Ok(vec![recipe("A"), recipe("B")]));

        session.begin_generation().unwrap();
        assert_eq!(session.status(), Status::Loading);
        assert!(session.cards().is_empty());
        assert!(session.generated_at().is_none());
    }

    #[test]
    fn retrigger_from_error_clears_banner() {
        let mut session = with_ingredients(&["rice"]);
        let (ticket, _) = session.begin_generation().unwrap();
        session.finish_generation(ticket, Err(GenerationFailure));

        session.begin_generation().unwrap();
        assert_eq!(session.status(), Status::Loading);
        assert_eq!(session.error(), None);
        assert!(!session.shows_error_banner());
    }

    #[test]
    fn stale_ticket_is_ignored() {
        let mut session = with_ingredients(&["rice"]);
        let (old, _) = session.begin_generation().unwrap();
        session.clear();
        session.add_ingredient("beans");
        let (current, _) = session.begin_generation().unwrap();

        assert!(!session.finish_generation(old, Ok(vec![recipe("Stale")])));
        assert_eq!(session.status(), Status::Loading);

        assert!(session.finish_generation(current, Ok(vec![recipe("Fresh")])));
        assert_eq!(session.cards()[0].recipe.name, "Fresh");
    }

    #[test]
    fn ticket_settles_only_once() {
        let mut session = with_ingredients(&["rice"]);
        let (ticket, _) = session.begin_generation().unwrap();
        assert!(session.finish_generation(ticket, Ok(vec![recipe("A")])));
        assert!(!session.finish_generation(ticket, Err(GenerationFailure)));
        assert_eq!(session.status(), Status::Success);
    }

    #[test]
    fn ingredient_edits_ignored_while_loading() {
        let mut session = with_ingredients(&["rice"]);
        session.begin_generation().unwrap();
        assert!(!session.add_ingredient("beans"));
        assert_eq!(session.add_ingredients("beans, corn"), 0);
        assert!(!session.remove_ingredient("rice"));
        assert_eq!(session.ingredients().items(), &["rice"]);
    }

    #[test]
    fn removing_ingredients_keeps_results() {
        let mut session = with_ingredients(&["rice"]);
        let (ticket, _) = session.begin_generation().unwrap();
        session.finish_generation(ticket, Ok(vec![recipe("A")]));
        session.remove_ingredient("rice");
        assert_eq!(session.cards().len(), 1);
        assert!(!session.can_generate());
    }

    #[test]
    fn clear_returns_to_idle() {
        let mut session = with_ingredients(&["rice"]);
        let (ticket, _) = session.begin_generation().unwrap();
        session.finish_generation(ticket, Err(GenerationFailure));
        session.clear();
        assert_eq!(session.status(), Status::Idle);
        assert!(session.ingredients().is_empty());
        assert_eq!(session.error(), None);
    }

    #[test]
    fn toggling_one_card_leaves_others() {
        let mut session = with_ingredients(&["rice"]);
        let (ticket, _) = session.begin_generation().unwrap();
        session.finish_generation(ticket, Ok(vec![recipe("A"), recipe("B"), recipe("C")]));

        assert_eq!(session.toggle_card(0), Some(true));
        let expanded: Vec<bool> = session.cards().iter().map(|c| c.expanded).collect();
        assert_eq!(expanded, [true, false, false]);

        assert_eq!(session.toggle_card(2), Some(true));
        assert_eq!(session.toggle_card(0), Some(false));
        let expanded: Vec<bool> = session.cards().iter().map(|c| c.expanded).collect();
        assert_eq!(expanded, [false, false, true]);

        assert_eq!(session.toggle_card(7), None);
    }

    #[test]
    fn expand_and_collapse_all() {
        let mut session = with_ingredients(&["rice"]);
        let (ticket, _) = session.begin_generation().unwrap();
        session.finish_generation(ticket, Ok(vec![recipe("A"), recipe("B")]));
        session.expand_all();
        assert!(session.cards().iter().all(|c| c.expanded));
        session.collapse_all();
        assert!(session.cards().iter().all(|c| !c.expanded));
    }

    #[tokio::test]
    async fn generate_runs_full_cycle() {
        let backend = FakeBackend::with_response(
            r#"[{"name":"Fried Rice","description":"d","ingredients":["rice"],
                "instructions":["Fry."],"prepTime":"5 mins","difficulty":"Easy"}]"#,
        );
        let generator = RecipeGenerator::new(Box::new(backend), "m");
        let mut session = with_ingredients(&["rice"]);

        assert_eq!(session.generate(&generator).await, Status::Success);
        assert_eq!(session.cards()[0].recipe.name, "Fried Rice");
    }

    #[tokio::test]
    async fn generate_failure_clears_previous_list() {
        let ok = RecipeGenerator::new(
            Box::new(FakeBackend::with_response(
                r#"[{"name":"A","description":"d","ingredients":["x"],"instructions":["y"],
                    "prepTime":"1 min","difficulty":"Easy"}]"#,
            )),
            "m",
        );
        let broken = RecipeGenerator::new(
            Box::new(FakeBackend::with_response("not json at all")),
            "m",
        );
        let mut session = with_ingredients(&["rice"]);

        session.generate(&ok).await;
        assert_eq!(session.cards().len(), 1);

        assert_eq!(session.generate(&broken).await, Status::Error);
        assert!(session.cards().is_empty());
        assert_eq!(session.error(), Some(ERROR_BANNER));
    }

    #[tokio::test]
    async fn generate_without_ingredients_never_calls_backend() {
        let backend = FakeBackend::failing(BackendError::Malformed("unused".into()));
        let calls = backend.call_counter();
        let generator = RecipeGenerator::new(Box::new(backend), "m");
        let mut session = Session::new();

        assert_eq!(session.generate(&generator).await, Status::Idle);
        assert_eq!(calls.get(), 0);
    }
}
