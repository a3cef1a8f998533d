//! Record shapes returned by the remote API
//!
//! Only the fields the command loop reads are modelled; unknown JSON fields
//! are ignored on decode.

pub mod location;
pub mod pokemon;

use serde::Deserialize;

pub use location::{Location, LocationPage};
pub use pokemon::{Pokemon, PokemonStat, PokemonType};

/// A `{ name, url }` reference to another API resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}
