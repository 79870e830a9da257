//! Locally persisted Pokémon team with a live snapshot view.
//!
//! The store keeps at most [`team::TEAM_CAPACITY`] rows in a single SQLite
//! table; the manager layers the add/replace/remove decision logic on top.

#![deny(missing_docs)]

pub mod db;
pub mod models;
pub mod schema;
pub mod team;
