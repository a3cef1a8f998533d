//! Pokemon records (`GET /pokemon/{name}`)

use serde::Deserialize;

use super::NamedResource;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    /// Null for a handful of forms; treated as zero
    #[serde(default)]
    pub base_experience: Option<u32>,
    pub height: u32,
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub effort: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PokemonType {
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

impl Pokemon {
    pub fn base_experience(&self) -> u32 {
        self.base_experience.unwrap_or(0)
    }
}
