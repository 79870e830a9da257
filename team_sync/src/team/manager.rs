//! Add/replace/remove decision logic over the team store.

use pokeapi_client::models::PokemonDetail;

use crate::team::{TEAM_CAPACITY, TeamError, TeamMember, TeamStore};

/// A detail record proposed for insertion, not yet committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Pokémon id from the remote catalog.
    pub id: i32,
    /// Display name.
    pub name: String,
    /// Image locator; empty when the record carries none.
    pub image_url: String,
}

impl Candidate {
    /// Builds a candidate from a freshly fetched detail record.
    pub fn from_detail(detail: &PokemonDetail) -> Self {
        let image_url = detail.image_url().unwrap_or_default().to_string();
        if image_url.is_empty() {
            tracing::warn!(name = %detail.name, "candidate has no usable image locator");
        }
        Self {
            id: detail.id,
            name: detail.name.clone(),
            image_url,
        }
    }

    fn into_member(self, slot: usize) -> TeamMember {
        TeamMember {
            id: self.id,
            name: self.name,
            image_url: self.image_url,
            slot,
        }
    }
}

#[derive(Debug)]
enum ManagerState {
    Idle,
    AwaitingReplacement(Candidate),
}

/// Notice returned by [`TeamManager::submit`].
///
/// This is user-facing feedback only; the storage effect of every operation
/// is observed through the store's watch channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The candidate was placed at the lowest-numbered empty slot.
    Inserted(usize),
    /// The candidate's key is already on the team; nothing was written.
    Duplicate,
    /// The team is full; a replacement slot must be chosen or the attempt
    /// cancelled.
    ReplacementRequired,
}

/// State machine over `{Idle, AwaitingReplacement}`.
///
/// Holds only transient interaction state; the store owns all persisted rows.
#[derive(Debug)]
pub struct TeamManager {
    state: ManagerState,
}

impl TeamManager {
    /// Starts in the idle state.
    pub fn new() -> Self {
        Self {
            state: ManagerState::Idle,
        }
    }

    /// Whether a replacement choice is pending.
    pub fn awaiting_replacement(&self) -> bool {
        matches!(self.state, ManagerState::AwaitingReplacement(_))
    }

    /// The candidate held while a replacement choice is pending.
    pub fn pending(&self) -> Option<&Candidate> {
        match &self.state {
            ManagerState::AwaitingReplacement(c) => Some(c),
            ManagerState::Idle => None,
        }
    }

    /// Proposes a candidate for the team.
    ///
    /// Duplicates are rejected before capacity is considered: a candidate
    /// already on a full team yields [`SubmitOutcome::Duplicate`], not the
    /// replacement flow.
    pub fn submit(
        &mut self,
        store: &mut TeamStore,
        candidate: Candidate,
    ) -> Result<SubmitOutcome, TeamError> {
        if !matches!(self.state, ManagerState::Idle) {
            return Err(TeamError::InvalidState);
        }
        if store.exists_by_key(candidate.id)? {
            tracing::debug!(id = candidate.id, "duplicate submission rejected");
            return Ok(SubmitOutcome::Duplicate);
        }
        let snapshot = store.snapshot();
        match snapshot.iter().position(|s| s.is_none()) {
            Some(slot) => {
                store.upsert(&candidate.into_member(slot))?;
                Ok(SubmitOutcome::Inserted(slot))
            }
            None => {
                self.state = ManagerState::AwaitingReplacement(candidate);
                Ok(SubmitOutcome::ReplacementRequired)
            }
        }
    }

    /// Commits the pending candidate into `slot`, evicting its occupant.
    ///
    /// If the candidate's key already sits in a different slot, that
    /// occurrence is removed first so the key never appears twice.
    pub fn confirm_replacement(
        &mut self,
        store: &mut TeamStore,
        slot: usize,
    ) -> Result<(), TeamError> {
        let ManagerState::AwaitingReplacement(candidate) = &self.state else {
            return Err(TeamError::InvalidState);
        };
        if slot >= TEAM_CAPACITY {
            // Invalid choice leaves the pending candidate in place.
            return Err(TeamError::SlotOutOfRange(slot));
        }
        let candidate = candidate.clone();

        let snapshot = store.snapshot();
        let elsewhere = snapshot
            .iter()
            .flatten()
            .any(|m| m.id == candidate.id && m.slot != slot);
        if elsewhere {
            store.delete_by_key(candidate.id)?;
        }
        store.upsert(&candidate.into_member(slot))?;
        self.state = ManagerState::Idle;
        Ok(())
    }

    /// Abandons the pending replacement; no storage mutation.
    pub fn cancel_replacement(&mut self) {
        self.state = ManagerState::Idle;
    }

    /// Clears a slot; no-op when the slot is already empty.
    pub fn remove_from_slot(&mut self, store: &mut TeamStore, slot: usize) -> Result<(), TeamError> {
        if !matches!(self.state, ManagerState::Idle) {
            return Err(TeamError::InvalidState);
        }
        if slot >= TEAM_CAPACITY {
            return Err(TeamError::SlotOutOfRange(slot));
        }
        store.delete_by_slot(slot)
    }
}

impl Default for TeamManager {
    fn default() -> Self {
        Self::new()
    }
}
