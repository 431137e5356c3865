//! Interactive kitchen loop.
//!
//! Reads one command per line from stdin and re-renders the session after
//! every state change.

use std::io::{self, BufRead, Write};

use greenpantry_core::{RecipeGenerator, Session};

use crate::render::Renderer;

const HELP: &str = "\
Commands:
  add <items>    add ingredients (comma separated)
  remove <item>  remove an ingredient
  list           show the current screen
  find           find recipes for the current ingredients
  show <n>       expand or collapse recipe card n
  expand         expand every card
  collapse       collapse every card
  clear          remove all ingredients and results
  help           show this help
  quit           leave the kitchen";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Remove(String),
    List,
    Find,
    Show(usize),
    Expand,
    Collapse,
    Clear,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((w, r)) => (w, r.trim()),
            None => (line, ""),
        };

        let needs_arg = |what: &str| {
            if rest.is_empty() {
                Err(format!("usage: {word} <{what}>"))
            } else {
                Ok(rest.to_string())
            }
        };

        let cmd = match word.to_ascii_lowercase().as_str() {
            "add" => Command::Add(needs_arg("items")?),
            "remove" | "rm" => Command::Remove(needs_arg("item")?),
            "list" | "ls" => Command::List,
            "find" => Command::Find,
            "show" => {
                let n: usize = needs_arg("n")?
                    .parse()
                    .map_err(|_| format!("not a card number: {rest}"))?;
                Command::Show(n)
            }
            "expand" => Command::Expand,
            "collapse" => Command::Collapse,
            "clear" => Command::Clear,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(format!("unknown command: {other} (try `help`)")),
        };
        Ok(Some(cmd))
    }
}

pub struct Kitchen {
    session: Session,
    generator: RecipeGenerator,
    renderer: Renderer,
    expand_new_cards: bool,
}

impl Kitchen {
    pub fn new(generator: RecipeGenerator, renderer: Renderer) -> Self {
        Self {
            session: Session::new(),
            generator,
            renderer,
            expand_new_cards: false,
        }
    }

    pub fn expand_new_cards(mut self, expand: bool) -> Self {
        self.expand_new_cards = expand;
        self
    }

    #[allow(dead_code)]
    pub fn session(&self) -> &Session {
        &self.session
    }

    fn render(&self, out: &mut impl Write) -> io::Result<()> {
        write!(out, "{}", self.renderer.session(&self.session))
    }

    /// Apply one command. Returns `false` when the loop should stop.
    pub async fn handle(&mut self, cmd: Command, out: &mut impl Write) -> io::Result<bool> {
        match cmd {
            Command::Add(items) => {
                self.session.add_ingredients(&items);
                self.render(out)?;
            }
            Command::Remove(item) => {
                if !self.session.remove_ingredient(&item) {
                    writeln!(out, "not in the list: {item}")?;
                }
                self.render(out)?;
            }
            Command::List => self.render(out)?,
            Command::Find => self.find(out).await?,
            Command::Show(n) => {
                let toggled = n.checked_sub(1).and_then(|i| self.session.toggle_card(i));
                match toggled {
                    Some(_) => self.render(out)?,
                    None => writeln!(out, "no recipe card {n}")?,
                }
            }
            Command::Expand => {
                self.session.expand_all();
                self.render(out)?;
            }
            Command::Collapse => {
                self.session.collapse_all();
                self.render(out)?;
            }
            Command::Clear => {
                self.session.clear();
                self.render(out)?;
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    async fn find(&mut self, out: &mut impl Write) -> io::Result<()> {
        let Some((ticket, ingredients)) = self.session.begin_generation() else {
            if self.session.is_loading() {
                writeln!(out, "Still finding recipes...")?;
            } else {
                writeln!(out, "Add at least one ingredient first.")?;
            }
            return Ok(());
        };
        self.render(out)?;
        out.flush()?;

        let result = self.generator.generate(&ingredients).await;
        self.session.finish_generation(ticket, result);
        if self.expand_new_cards {
            self.session.expand_all();
        }
        self.render(out)
    }

    /// Drive the loop until `quit` or end of input.
    pub async fn run_loop(&mut self, input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
        self.render(out)?;
        write!(out, "> ")?;
        out.flush()?;
        for line in input.lines() {
            let line = line?;
            match Command::parse(&line) {
                Ok(Some(cmd)) => {
                    if !self.handle(cmd, out).await? {
                        break;
                    }
                }
                Ok(None) => {}
                Err(msg) => writeln!(out, "{msg}")?,
            }
            write!(out, "> ")?;
            out.flush()?;
        }
        writeln!(out)?;
        Ok(())
    }
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (config, generator) = super::generator_from_env()?;
    let mut kitchen = Kitchen::new(generator, super::renderer_for(&config))
        .expand_new_cards(config.display.expand_cards);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    kitchen.run_loop(stdin.lock(), &mut stdout).await?;
    Ok(())
}
