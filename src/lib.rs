//! Pokedex - An interactive explorer for the PokeAPI
//!
//! Pages through locations, explores them and catches pokemon, with remote
//! responses memoized in a TTL cache swept by a background task.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
mod tasks;

pub use api::PokeApiClient;
pub use cache::ExpiringCache;
pub use config::Config;
pub use error::{PokedexError, Result};
pub use repl::{run, Repl};
