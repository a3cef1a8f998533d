//! Error types for the Pokedex
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the API client and the command loop.
///
/// Every variant is recoverable at the REPL level: the command loop prints
/// the message and prompts again.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Connection failure, timeout or body read failure
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Remote API answered with a status code >= 400
    #[error("Bad status code {status} from {url}")]
    Status { url: String, status: u16 },

    /// Payload (cached or fetched) is not the expected JSON shape
    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// A required positional argument was not given
    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    /// More arguments than the command accepts
    #[error("Unexpected arguments: {0}")]
    UnexpectedArguments(String),

    /// First token did not name a known command
    #[error("invalid command: {0}")]
    UnknownCommand(String),

    /// `mapb` issued while already on the first page
    #[error("You are on the first page")]
    FirstPage,

    /// `inspect` on a pokemon missing from the session
    #[error("you have not caught {0}")]
    NotCaught(String),

    /// Client configuration that cannot work, such as a zero TTL
    #[error("Invalid configuration: {0}")]
    InvalidConfig(&'static str),

    /// Terminal read/write failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex.
pub type Result<T> = std::result::Result<T, PokedexError>;
