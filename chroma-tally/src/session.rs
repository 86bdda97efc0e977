//! session.rs
//!
//! One participant's voting session: holds the "already voted" flag, drives
//! a vote through `Idle -> Submitting -> Settled` and keeps the latest tally.
//!
//! Sessions are independent objects. Two sessions over the same store share
//! nothing but the store, so one participant voting never affects another's
//! flag.

use std::fmt;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chroma_common::{ChromaError, ColorOption, Palette, Result, VoteError, VoteRecord, VoteStore};
use tokio::sync::{Mutex, RwLock as AsyncRwLock};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::tally::{
    engine::{compute, TallySnapshot},
    guard::can_vote,
};

/// Tracing target for accepted and rejected votes.
pub const VOTE_TARGET: &str = "vote";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    /// Ready to accept a vote request.
    Idle,
    /// A record is on its way to the store.
    Submitting,
    /// The store accepted this session's vote.
    Settled,
}

impl fmt::Display for SubmissionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SubmissionPhase::Idle => "Idle",
            SubmissionPhase::Submitting => "Submitting",
            SubmissionPhase::Settled => "Settled",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug)]
struct SessionState {
    id: Uuid,
    phase: SubmissionPhase,
    has_voted: bool,
}

impl SessionState {
    fn fresh() -> Self {
        Self {
            id: Uuid::new_v4(),
            phase: SubmissionPhase::Idle,
            has_voted: false,
        }
    }
}

pub struct VoteSession<S> {
    store: S,
    palette: Palette,
    // Held for the whole of a submission, so a second request waits for the
    // first to resolve instead of racing it past the guard.
    latch: Mutex<()>,
    // Serializes list + recompute so an older listing never replaces a newer
    // snapshot.
    reload: Mutex<()>,
    // Plain lock: flag and phase change together with no await in between.
    state: RwLock<SessionState>,
    snapshot: AsyncRwLock<TallySnapshot>,
}

impl<S: VoteStore> VoteSession<S> {
    /// A session with an all-zero snapshot. Nothing is read from the store.
    pub fn new(store: S, palette: Palette) -> Self {
        let snapshot = TallySnapshot::empty(&palette);
        Self {
            store,
            palette,
            latch: Mutex::new(()),
            reload: Mutex::new(()),
            state: RwLock::new(SessionState::fresh()),
            snapshot: AsyncRwLock::new(snapshot),
        }
    }

    /// Creates a session and loads the current results.
    ///
    /// A failed first load is logged and leaves the empty snapshot in place;
    /// callers can `refresh` later.
    pub async fn open(store: S, palette: Palette) -> Self {
        let session = Self::new(store, palette);
        if let Err(e) = session.refresh().await {
            warn!("⚠️ Initial load failed for session {}: {}", session.id(), e);
        }
        session
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn id(&self) -> Uuid {
        self.state().id
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.state().phase
    }

    pub fn has_voted(&self) -> bool {
        self.state().has_voted
    }

    fn state(&self) -> RwLockReadGuard<'_, SessionState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn state_mut(&self) -> RwLockWriteGuard<'_, SessionState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// The most recently computed results.
    pub async fn snapshot(&self) -> TallySnapshot {
        self.snapshot.read().await.clone()
    }

    /// Re-reads every record and recomputes the tally.
    ///
    /// On store failure the previous snapshot is kept and the error returned.
    /// Concurrent refreshes run one after another.
    pub async fn refresh(&self) -> std::result::Result<TallySnapshot, VoteError> {
        let _reload = self.reload.lock().await;
        let records = self.store.list().await?;
        let snapshot = compute(&records, &self.palette);

        let skipped = records.len() as u64 - snapshot.total_votes;
        if skipped > 0 {
            debug!("Ignored {} records with unknown options", skipped);
        }

        *self.snapshot.write().await = snapshot.clone();
        Ok(snapshot)
    }

    /// Casts this session's vote for the palette option named `option_name`
    /// and returns the refreshed tally.
    ///
    /// A name outside the palette fails with `UnknownOption` before the
    /// workflow starts. Otherwise the only failures are the workflow's own:
    /// `AlreadyVoted` once the session has voted, without touching the store,
    /// and `StoreUnavailable` if the store rejects the record, in which case
    /// the session is back to `Idle` and may retry.
    pub async fn request_vote(&self, option_name: &str) -> Result<TallySnapshot> {
        let option = self
            .palette
            .find(option_name)
            .ok_or_else(|| ChromaError::UnknownOption(option_name.to_string()))?;
        Ok(self.submit(option).await?)
    }

    async fn submit(&self, option: &ColorOption) -> std::result::Result<TallySnapshot, VoteError> {
        let _latch = self.latch.lock().await;

        let session_id = {
            let mut state = self.state_mut();
            if !can_vote(state.has_voted) {
                info!(target: VOTE_TARGET, "EVENT:REJECT session={} option={} reason=already_voted", state.id, option.name);
                return Err(VoteError::AlreadyVoted);
            }
            state.phase = SubmissionPhase::Submitting;
            state.id
        };

        let record = VoteRecord::new(option.name.clone());
        let outcome = self.store.create(record).await;
        {
            let mut state = self.state_mut();
            match &outcome {
                Ok(_) => {
                    state.has_voted = true;
                    state.phase = SubmissionPhase::Settled;
                }
                Err(_) => state.phase = SubmissionPhase::Idle,
            }
        }
        if let Err(e) = outcome {
            warn!("❌ Vote for {} failed in session {}: {}", option.name, session_id, e);
            return Err(e.into());
        }
        info!(target: VOTE_TARGET, "EVENT:VOTE session={} option={}", session_id, option.name);

        // The vote is stored either way; a failed reload only means the
        // caller sees the previous results until the next refresh.
        match self.refresh().await {
            Ok(snapshot) => Ok(snapshot),
            Err(e) => {
                warn!("⚠️ Vote stored but results reload failed: {}", e);
                Ok(self.snapshot().await)
            }
        }
    }

    /// Starts a new session in place: new id, `Idle`, flag cleared.
    ///
    /// Waits for an in-flight submission to resolve first. The snapshot is
    /// kept; call `refresh` to reload it.
    pub async fn restart(&self) {
        let _latch = self.latch.lock().await;
        let mut state = self.state_mut();
        let previous = state.id;
        *state = SessionState::fresh();
        info!("🔄 Session {} restarted as {}", previous, state.id);
    }
}
