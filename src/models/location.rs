//! Location records
//!
//! Paginated listing (`GET /location/`) and single location detail
//! (`GET /location/{name}`).

use serde::Deserialize;

use super::NamedResource;

/// One page of the location listing.
///
/// `next` and `previous` are cursors: absolute URLs of the neighbouring
/// pages, used verbatim as request URLs and cache keys.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LocationPage {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

/// A single location and the areas inside it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Location {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub areas: Vec<NamedResource>,
    #[serde(default)]
    pub region: Option<NamedResource>,
}
