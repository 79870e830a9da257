//! Async client for the public PokeAPI catalog.
//!
//! This crate covers the remote side of the team builder:
//! - [`source`] — HTTP access to the list and detail endpoints, behind the
//!   [`source::CatalogSource`] trait so tests can substitute an in-memory source.
//! - [`models`] — serde DTOs for the wire payloads.
//! - [`paging`] — cursor-based page loading that bridges the list endpoint and
//!   the exact-match detail lookup.
//! - [`search`] — a debounced, last-filter-wins search feed.

pub mod models;
pub mod paging;
pub mod search;
pub mod source;
