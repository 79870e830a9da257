//! Row-level statements for the team table.

use diesel::prelude::*;
use diesel::{ExpressionMethods, RunQueryDsl, SqliteConnection, insert_into};

use crate::models::{NewTeamMember, TeamMemberRow};
use crate::schema::team_member::dsl as tm;
use crate::team::{TEAM_CAPACITY, TeamError};

/// Insert or overwrite the member occupying `slot`, identified by `key`.
///
/// Runs in a `BEGIN IMMEDIATE` transaction: the target slot is cleared first,
/// then the row is upserted by primary key so a member moving between slots
/// keeps a single row. `slot` must be in `[0, TEAM_CAPACITY)`.
pub fn upsert_member(
    conn: &mut SqliteConnection,
    key: i32,
    name_: &str,
    image_url_: &str,
    slot: usize,
) -> Result<(), TeamError> {
    if slot >= TEAM_CAPACITY {
        return Err(TeamError::SlotOutOfRange(slot));
    }
    let slot_i32 = slot as i32;
    conn.immediate_transaction::<_, diesel::result::Error, _>(|conn| {
        diesel::delete(tm::team_member.filter(tm::slot_position.eq(slot_i32).and(tm::id.ne(key))))
            .execute(conn)?;
        let row = NewTeamMember {
            id: key,
            name: name_,
            image_url: image_url_,
            slot_position: slot_i32,
        };
        insert_into(tm::team_member)
            .values(&row)
            .on_conflict(tm::id)
            .do_update()
            .set((
                tm::name.eq(name_),
                tm::image_url.eq(image_url_),
                tm::slot_position.eq(slot_i32),
            ))
            .execute(conn)?;
        Ok(())
    })?;
    Ok(())
}

/// Delete whatever occupies `slot`; no-op when the slot is empty.
pub fn delete_by_slot(conn: &mut SqliteConnection, slot: usize) -> Result<usize, TeamError> {
    if slot >= TEAM_CAPACITY {
        return Err(TeamError::SlotOutOfRange(slot));
    }
    let n = diesel::delete(tm::team_member.filter(tm::slot_position.eq(slot as i32)))
        .execute(conn)?;
    Ok(n)
}

/// Delete the member with the given key regardless of slot; no-op when absent.
pub fn delete_by_key(conn: &mut SqliteConnection, key: i32) -> Result<usize, TeamError> {
    let n = diesel::delete(tm::team_member.filter(tm::id.eq(key))).execute(conn)?;
    Ok(n)
}

/// Look up a member by key.
pub fn find_by_key(
    conn: &mut SqliteConnection,
    key: i32,
) -> Result<Option<TeamMemberRow>, TeamError> {
    let row = tm::team_member
        .filter(tm::id.eq(key))
        .select(TeamMemberRow::as_select())
        .first(conn)
        .optional()?;
    Ok(row)
}

/// Number of occupied slots.
pub fn count_members(conn: &mut SqliteConnection) -> Result<i64, TeamError> {
    let n = tm::team_member.count().get_result(conn)?;
    Ok(n)
}

/// All rows ordered by slot.
pub fn load_members(conn: &mut SqliteConnection) -> Result<Vec<TeamMemberRow>, TeamError> {
    let rows = tm::team_member
        .order(tm::slot_position.asc())
        .select(TeamMemberRow::as_select())
        .load(conn)?;
    Ok(rows)
}
