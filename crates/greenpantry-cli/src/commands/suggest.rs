use clap::Args;
use greenpantry_core::{RecipeGenerator, Session, Status};

use crate::render::{Renderer, EMPTY_PANTRY_HINT};

#[derive(Args, Debug, Default)]
pub struct SuggestArgs {
    /// Ingredients; commas inside one argument split it further
    pub ingredients: Vec<String>,
    /// Show every card expanded
    #[arg(long)]
    pub expand: bool,
    /// Print recipes as a JSON array
    #[arg(long)]
    pub json: bool,
}

/// What a single `suggest` run produced.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Text for stdout.
    Printed(String),
    /// Text for stderr; the process should exit non-zero.
    Failed(String),
}

fn session_from(args: &SuggestArgs) -> Session {
    let mut session = Session::new();
    for arg in &args.ingredients {
        session.add_ingredients(arg);
    }
    session
}

/// Generate once for an already populated session and render the result.
pub async fn suggest(
    mut session: Session,
    generator: &RecipeGenerator,
    renderer: &Renderer,
    args: &SuggestArgs,
) -> Result<Outcome, serde_json::Error> {
    session.generate(generator).await;

    if session.status() == Status::Error {
        let message = session.error().unwrap_or_default();
        return Ok(Outcome::Failed(message.to_string()));
    }

    if args.json {
        let recipes: Vec<_> = session.recipes().collect();
        return Ok(Outcome::Printed(serde_json::to_string_pretty(&recipes)?));
    }

    if args.expand {
        session.expand_all();
    }
    Ok(Outcome::Printed(renderer.session(&session)))
}

pub async fn run(args: SuggestArgs) -> Result<(), Box<dyn std::error::Error>> {
    let session = session_from(&args);
    if session.ingredients().is_empty() {
        println!("{EMPTY_PANTRY_HINT}");
        return Ok(());
    }

    let (config, generator) = super::generator_from_env()?;
    let renderer = super::renderer_for(&config);
    let args = SuggestArgs {
        expand: args.expand || config.display.expand_cards,
        ..args
    };

    match suggest(session, &generator, &renderer, &args).await? {
        Outcome::Printed(text) => println!("{text}"),
        Outcome::Failed(message) => {
            eprintln!("{message}");
            std::process::exit(1);
        }
    }
    Ok(())
}
