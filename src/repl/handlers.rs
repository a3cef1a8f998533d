//! Command Handlers
//!
//! Executes parsed commands against the session and the API client.

use std::io::Write;

use tracing::info;

use crate::api::PokeApiClient;
use crate::error::{PokedexError, Result};
use crate::models::LocationPage;
use crate::repl::command::{Command, COMMANDS};
use crate::repl::session::{CatchRoll, RandomRoll, Session};

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Everything a command can touch: client, session and catch draws.
pub struct Repl {
    client: PokeApiClient,
    session: Session,
    roller: Box<dyn CatchRoll>,
    catch_threshold: u32,
}

impl Repl {
    pub fn new(client: PokeApiClient, catch_threshold: u32) -> Self {
        Self::with_roller(client, catch_threshold, Box::new(RandomRoll))
    }

    /// Creates a Repl with a custom source of catch draws.
    pub fn with_roller(
        client: PokeApiClient,
        catch_threshold: u32,
        roller: Box<dyn CatchRoll>,
    ) -> Self {
        Self {
            client,
            session: Session::new(),
            roller,
            catch_threshold,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn client(&self) -> &PokeApiClient {
        &self.client
    }

    // == Execute ==
    /// Runs one command, writing its output to `out`.
    ///
    /// Errors leave the session untouched.
    pub async fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow> {
        match command {
            Command::Help => self.help(out)?,
            Command::Map => self.map(out).await?,
            Command::MapBack => self.map_back(out).await?,
            Command::Explore(location) => self.explore(&location, out).await?,
            Command::Catch(name) => self.catch(&name, out).await?,
            Command::Inspect(name) => self.inspect(&name, out)?,
            Command::Pokedex => self.pokedex(out)?,
            Command::Cache => {
                let stats = self.client.cache().stats().await;
                writeln!(out, "{}", stats)?;
            }
            Command::Exit => {
                writeln!(out, "Closing the Pokedex... Goodbye!")?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    fn help<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Welcome to the Pokedex!")?;
        writeln!(out, "Usage:")?;
        writeln!(out)?;
        for info in COMMANDS {
            writeln!(out, " - {}: {}", info.usage, info.description)?;
        }
        writeln!(out)?;
        Ok(())
    }

    async fn map<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let page = self
            .client
            .list_locations(self.session.next_page.as_deref())
            .await?;
        self.show_page(&page, out)
    }

    async fn map_back<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let Some(previous) = self.session.previous_page.as_deref() else {
            return Err(PokedexError::FirstPage);
        };
        let page = self.client.list_locations(Some(previous)).await?;
        self.show_page(&page, out)
    }

    fn show_page<W: Write>(&mut self, page: &LocationPage, out: &mut W) -> Result<()> {
        self.session.set_cursors(page);
        writeln!(out, "Locations:")?;
        for location in &page.results {
            writeln!(out, " - {}", location.name)?;
        }
        Ok(())
    }

    async fn explore<W: Write>(&mut self, location: &str, out: &mut W) -> Result<()> {
        let detail = self.client.get_location(location).await?;
        writeln!(out, "Exploring {}...", location)?;
        if detail.areas.is_empty() {
            writeln!(out, "No areas found")?;
        } else {
            writeln!(out, "Areas:")?;
            for area in &detail.areas {
                writeln!(out, " - {}", area.name)?;
            }
        }
        Ok(())
    }

    // == Catch ==
    /// Draws in `[0, base_experience)`; the catch succeeds when the draw
    /// does not exceed the threshold. An escape is not an error.
    async fn catch<W: Write>(&mut self, name: &str, out: &mut W) -> Result<()> {
        let pokemon = self.client.get_pokemon(name).await?;
        writeln!(out, "Throwing a Pokeball at {}...", name)?;

        let roll = self.roller.roll(pokemon.base_experience());
        if roll > self.catch_threshold {
            writeln!(out, "{} escaped!", name)?;
            return Ok(());
        }

        info!(pokemon = name, roll, "caught");
        self.session.record_catch(name, pokemon);
        writeln!(out, "{} was caught!", name)?;
        writeln!(out, "You may now inspect it with the inspect command.")?;
        Ok(())
    }

    fn inspect<W: Write>(&self, name: &str, out: &mut W) -> Result<()> {
        let caught = self
            .session
            .caught(name)
            .ok_or_else(|| PokedexError::NotCaught(name.to_string()))?;
        let pokemon = &caught.pokemon;

        writeln!(out, "Name: {}", pokemon.name)?;
        writeln!(out, "Height: {}", pokemon.height)?;
        writeln!(out, "Weight: {}", pokemon.weight)?;
        writeln!(out, "Stats:")?;
        for stat in &pokemon.stats {
            writeln!(out, "  -{}: {}", stat.stat.name, stat.base_stat)?;
        }
        writeln!(out, "Types:")?;
        for kind in &pokemon.types {
            writeln!(out, "  - {}", kind.kind.name)?;
        }
        writeln!(out, "Caught: {}", caught.caught_at.format("%Y-%m-%d %H:%M:%S UTC"))?;
        Ok(())
    }

    fn pokedex<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.session.caught_count() == 0 {
            writeln!(out, "Your Pokedex is empty. Go catch some pokemon!")?;
            return Ok(());
        }
        writeln!(out, "Your Pokedex:")?;
        for (name, _) in self.session.caught_iter() {
            writeln!(out, " - {}", name)?;
        }
        Ok(())
    }
}
