//! Owning store handle with a live snapshot view.

use diesel::SqliteConnection;
use tokio::sync::watch;

use crate::db::connection::connect_sqlite;
use crate::team::{TEAM_CAPACITY, TeamError, repo};

/// One occupied slot as exposed to observers.
///
/// Deliberately narrower than a remote detail record: a persisted member has
/// no types, stats, height, or weight, and is never zero-filled to look like
/// it does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamMember {
    /// Pokémon id from the remote catalog.
    pub id: i32,
    /// Display name.
    pub name: String,
    /// Image locator; may be empty.
    pub image_url: String,
    /// Slot index in `[0, TEAM_CAPACITY)`.
    pub slot: usize,
}

/// The materialized team: one entry per slot, `None` where empty.
pub type TeamSnapshot = [Option<TeamMember>; TEAM_CAPACITY];

/// Durable capacity-6 keyed collection over SQLite.
///
/// Every mutation publishes exactly one fresh [`TeamSnapshot`] through a watch
/// channel; subscribers observe the latest snapshot plus all subsequent ones,
/// in mutation order.
pub struct TeamStore {
    conn: SqliteConnection,
    snapshots: watch::Sender<TeamSnapshot>,
}

impl TeamStore {
    /// Opens the database at `database_url` (migrations must already be run)
    /// and seeds the channel with the current contents.
    pub fn open(database_url: &str) -> anyhow::Result<Self> {
        let mut conn = connect_sqlite(database_url)?;
        let initial = materialize(&mut conn)?;
        let (snapshots, _) = watch::channel(initial);
        Ok(Self { conn, snapshots })
    }

    /// Subscribes to the live view.
    pub fn subscribe(&self) -> watch::Receiver<TeamSnapshot> {
        self.snapshots.subscribe()
    }

    /// The latest published snapshot.
    pub fn snapshot(&self) -> TeamSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Insert or overwrite the member at `member.slot`.
    pub fn upsert(&mut self, member: &TeamMember) -> Result<(), TeamError> {
        repo::upsert_member(
            &mut self.conn,
            member.id,
            &member.name,
            &member.image_url,
            member.slot,
        )?;
        self.publish()
    }

    /// Clear a slot; no-op when already empty.
    pub fn delete_by_slot(&mut self, slot: usize) -> Result<(), TeamError> {
        repo::delete_by_slot(&mut self.conn, slot)?;
        self.publish()
    }

    /// Remove a member wherever it sits; no-op when absent.
    pub fn delete_by_key(&mut self, key: i32) -> Result<(), TeamError> {
        repo::delete_by_key(&mut self.conn, key)?;
        self.publish()
    }

    /// Whether a member with this key is on the team.
    pub fn exists_by_key(&mut self, key: i32) -> Result<bool, TeamError> {
        Ok(repo::find_by_key(&mut self.conn, key)?.is_some())
    }

    /// Number of occupied slots.
    pub fn count(&mut self) -> Result<usize, TeamError> {
        Ok(repo::count_members(&mut self.conn)? as usize)
    }

    fn publish(&mut self) -> Result<(), TeamError> {
        let snapshot = materialize(&mut self.conn)?;
        self.snapshots.send_replace(snapshot);
        Ok(())
    }
}

/// Builds a snapshot from the persisted rows.
///
/// A row whose slot falls outside the valid range indicates corrupted state;
/// it is skipped and logged rather than failing the whole snapshot.
fn materialize(conn: &mut SqliteConnection) -> Result<TeamSnapshot, TeamError> {
    let mut snapshot = TeamSnapshot::default();
    for row in repo::load_members(conn)? {
        let slot = row.slot_position;
        if slot < 0 || slot as usize >= TEAM_CAPACITY {
            tracing::warn!(id = row.id, name = %row.name, slot, "skipping row with corrupt slot");
            continue;
        }
        snapshot[slot as usize] = Some(TeamMember {
            id: row.id,
            name: row.name,
            image_url: row.image_url,
            slot: slot as usize,
        });
    }
    Ok(snapshot)
}
