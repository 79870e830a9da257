//! Wire models for the PokeAPI endpoints.

pub mod detail;
pub mod summary;

pub use detail::PokemonDetail;
pub use summary::{ListResponse, PokemonSummary};
