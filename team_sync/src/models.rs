//! Diesel models mapping to [`crate::schema::team_member`].
//!
//! A persisted row deliberately carries only what the team grid needs to
//! render (id, name, image); it is never widened back into a full remote
//! detail record with fabricated types or stats.

use diesel::prelude::*;

/// A row in [`crate::schema::team_member`]: one occupied team slot.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Identifiable, AsChangeset, Selectable)]
#[diesel(table_name = crate::schema::team_member, check_for_backend(diesel::sqlite::Sqlite))]
pub struct TeamMemberRow {
    /// Pokémon id from the remote catalog (primary key).
    pub id: i32,
    /// Display name.
    pub name: String,
    /// Image locator captured when the member was added; may be empty.
    pub image_url: String,
    /// Slot index, expected in `[0, TEAM_CAPACITY)`.
    pub slot_position: i32,
}

/// Insertable/changeset form of [`TeamMemberRow`].
#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::team_member)]
pub struct NewTeamMember<'a> {
    /// Pokémon id (primary key).
    pub id: i32,
    /// Display name.
    pub name: &'a str,
    /// Image locator; empty when none is known.
    pub image_url: &'a str,
    /// Slot index.
    pub slot_position: i32,
}
