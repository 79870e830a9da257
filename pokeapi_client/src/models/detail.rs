//! Detail-endpoint payload for `GET /pokemon/{name_or_id}`.
//!
//! The API serves a much larger document; serde ignores the fields we do not
//! model. Only what the team builder consumes is declared here.

use serde::{Deserialize, Serialize};

/// Full per-Pokémon record as fetched from the remote catalog.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PokemonDetail {
    /// Unique, stable numeric id.
    pub id: i32,
    /// Name, lowercase as served by the API.
    pub name: String,
    /// Sprite locators.
    pub sprites: Sprites,
    /// Type tags, at most two, ordered by their `slot` field.
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    /// Base stat line.
    #[serde(default)]
    pub stats: Vec<StatSlot>,
    /// Height in decimetres.
    pub height: i32,
    /// Weight in hectograms.
    pub weight: i32,
}

/// The `sprites` object; both locators may be absent.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Sprites {
    /// Default front-facing sprite.
    pub front_default: Option<String>,
    /// Nested alternative artwork collections.
    pub other: Option<OtherSprites>,
}

/// The `sprites.other` object.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtherSprites {
    /// Official artwork variant, higher resolution than the sprite sheet.
    #[serde(rename = "official-artwork")]
    pub official_artwork: Option<OfficialArtwork>,
}

/// The `sprites.other.official-artwork` object.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OfficialArtwork {
    /// Front-facing official artwork locator.
    pub front_default: Option<String>,
}

/// One entry of the `types` array.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TypeSlot {
    /// Position of this type for the Pokémon (1-based).
    pub slot: i32,
    /// The type resource itself.
    #[serde(rename = "type")]
    pub type_ref: NamedResource,
}

/// One entry of the `stats` array.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StatSlot {
    /// Base value of the stat, 0..=255.
    pub base_stat: i32,
    /// The stat resource (name like "hp", "attack").
    pub stat: NamedResource,
}

/// A `{name, url}` reference as used throughout the API.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NamedResource {
    /// Resource name.
    pub name: String,
    /// Resource locator.
    pub url: String,
}

impl PokemonDetail {
    /// Preferred display image: official artwork, falling back to the default
    /// front sprite.
    pub fn image_url(&self) -> Option<&str> {
        self.sprites
            .other
            .as_ref()
            .and_then(|o| o.official_artwork.as_ref())
            .and_then(|a| a.front_default.as_deref())
            .or(self.sprites.front_default.as_deref())
    }

    /// Type names ordered by their declared slot.
    pub fn type_names(&self) -> Vec<&str> {
        let mut slots: Vec<&TypeSlot> = self.types.iter().collect();
        slots.sort_by_key(|t| t.slot);
        slots.into_iter().map(|t| t.type_ref.name.as_str()).collect()
    }

    /// `(stat name, base value)` pairs in the order the API served them.
    pub fn base_stats(&self) -> Vec<(&str, i32)> {
        self.stats
            .iter()
            .map(|s| (s.stat.name.as_str(), s.base_stat))
            .collect()
    }
}
