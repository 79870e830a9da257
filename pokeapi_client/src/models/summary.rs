//! List-endpoint payloads: one summary row per Pokémon plus page links.

use serde::{Deserialize, Serialize};

/// A single entry in the paginated `/pokemon` listing.
///
/// The `url` points at the detail resource and encodes the numeric id as its
/// trailing path segment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PokemonSummary {
    /// Pokémon name, lowercase as served by the API.
    pub name: String,
    /// Detail resource locator, e.g. `https://pokeapi.co/api/v2/pokemon/25/`.
    pub url: String,
}

impl PokemonSummary {
    /// Extracts the numeric id from the detail locator, if it parses.
    pub fn id_from_url(&self) -> Option<u32> {
        self.url.trim_end_matches('/').rsplit('/').next()?.parse().ok()
    }
}

/// Response envelope of `GET /pokemon?limit&offset`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse {
    /// Total number of resources available on the server.
    pub count: u32,
    /// Locator of the next page; `None` on the last page.
    pub next: Option<String>,
    /// Locator of the previous page; `None` on the first page.
    pub previous: Option<String>,
    /// The rows of the current page.
    pub results: Vec<PokemonSummary>,
}
