//! Session State
//!
//! Pagination cursors and caught pokemon, kept in memory for one run.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::models::{LocationPage, Pokemon};

/// A pokemon record and when it was caught.
#[derive(Debug, Clone)]
pub struct CaughtPokemon {
    pub pokemon: Pokemon,
    pub caught_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct Session {
    /// Cursor for `map`; `None` means the first page
    pub next_page: Option<String>,
    /// Cursor for `mapb`; `None` means no previous page
    pub previous_page: Option<String>,
    caught: BTreeMap<String, CaughtPokemon>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves both cursors to the neighbours of `page`.
    pub fn set_cursors(&mut self, page: &LocationPage) {
        self.next_page = page.next.clone();
        self.previous_page = page.previous.clone();
    }

    /// Records a catch, replacing an earlier catch of the same name.
    pub fn record_catch(&mut self, name: &str, pokemon: Pokemon) {
        self.caught.insert(
            name.to_string(),
            CaughtPokemon {
                pokemon,
                caught_at: Utc::now(),
            },
        );
    }

    pub fn caught(&self, name: &str) -> Option<&CaughtPokemon> {
        self.caught.get(name)
    }

    /// Caught pokemon in name order.
    pub fn caught_iter(&self) -> impl Iterator<Item = (&String, &CaughtPokemon)> {
        self.caught.iter()
    }

    pub fn caught_count(&self) -> usize {
        self.caught.len()
    }
}

// == Catch Roll ==
/// Source of catch draws.
pub trait CatchRoll: Send {
    /// Draws an integer in `[0, upper)`, or 0 when `upper` is 0.
    fn roll(&mut self, upper: u32) -> u32;
}

/// Uniform draw from the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomRoll;

impl CatchRoll for RandomRoll {
    fn roll(&mut self, upper: u32) -> u32 {
        if upper == 0 {
            0
        } else {
            rand::rng().random_range(0..upper)
        }
    }
}
