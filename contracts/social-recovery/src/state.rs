//! # Wallet State Machine
//!
//! [`WalletState`] pairs the bounded [`WalletConfig`] (owner, guardian set,
//! threshold, recovery nonce) with a [`RecoveryLedger`] that holds one
//! record per proposal and one per vote. Every mutating method takes the
//! acting address explicitly, so a transition is a function of
//! `(state, caller, arguments)` alone.
//!
//! ## Invariants
//! - `guardian_count` always equals the number of entries in `guardians`.
//! - `owners` holds exactly the current owner once initialized.
//! - Recovery ids are allocated `0, 1, 2, ...` and never reused.
//! - A proposal that is no longer active is never modified again.
//!
//! `remove_guardian` is the one operation whose effect survives its own
//! error: the guardian is removed even when the remaining count falls below
//! the threshold and `InvalidThreshold` is returned.

use soroban_sdk::{Address, Env, Map, Vec};

use crate::errors::WalletError;
use crate::types::{RecoveryProposal, VoteKey, WalletConfig};

/// Per-proposal records. Each proposal and each vote is addressed by its own
/// key so that the number of proposals never affects the config entry.
pub trait RecoveryLedger {
    fn proposal(&self, recovery_id: u64) -> Option<RecoveryProposal>;
    fn set_proposal(&mut self, recovery_id: u64, proposal: &RecoveryProposal);
    fn has_vote(&self, recovery_id: u64, guardian: &Address) -> bool;
    fn record_vote(&mut self, recovery_id: u64, guardian: &Address);
}

/// Ledger backed by in-memory maps, for running the state machine outside a
/// contract.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MemoryLedger {
    pub recoveries: Map<u64, RecoveryProposal>,
    pub votes: Map<VoteKey, bool>,
}

impl MemoryLedger {
    pub fn new(env: &Env) -> Self {
        Self {
            recoveries: Map::new(env),
            votes: Map::new(env),
        }
    }
}

impl RecoveryLedger for MemoryLedger {
    fn proposal(&self, recovery_id: u64) -> Option<RecoveryProposal> {
        self.recoveries.get(recovery_id)
    }

    fn set_proposal(&mut self, recovery_id: u64, proposal: &RecoveryProposal) {
        self.recoveries.set(recovery_id, proposal.clone());
    }

    fn has_vote(&self, recovery_id: u64, guardian: &Address) -> bool {
        self.votes
            .get(VoteKey {
                recovery_id,
                guardian: guardian.clone(),
            })
            .unwrap_or(false)
    }

    fn record_vote(&mut self, recovery_id: u64, guardian: &Address) {
        self.votes.set(
            VoteKey {
                recovery_id,
                guardian: guardian.clone(),
            },
            true,
        );
    }
}

#[derive(Clone, Debug)]
pub struct WalletState<L = MemoryLedger> {
    pub config: WalletConfig,
    pub ledger: L,
}

impl WalletState<MemoryLedger> {
    /// An uninitialized wallet: no owner, no guardians, no proposals.
    pub fn new(env: &Env) -> Self {
        Self::with_ledger(WalletConfig::new(env), MemoryLedger::new(env))
    }
}

impl<L: RecoveryLedger> WalletState<L> {
    pub fn with_ledger(config: WalletConfig, ledger: L) -> Self {
        Self { config, ledger }
    }

    fn require_owner(&self, caller: &Address) -> Result<(), WalletError> {
        if !self.config.owners.get(caller.clone()).unwrap_or(false) {
            return Err(WalletError::Unauthorized);
        }
        Ok(())
    }

    fn load_recovery(&self, recovery_id: u64) -> Result<RecoveryProposal, WalletError> {
        let recovery = self
            .ledger
            .proposal(recovery_id)
            .ok_or(WalletError::RecoveryNotActive)?;
        recovery.require_active()?;
        Ok(recovery)
    }

    /// One-shot setup. The threshold is stored as given; it is validated
    /// against the guardian count only by later guardian/threshold updates.
    pub fn initialize(&mut self, new_owner: Address, threshold: u32) -> Result<(), WalletError> {
        if self.config.owner.is_some() {
            return Err(WalletError::Unauthorized);
        }

        self.config.owner = Some(new_owner.clone());
        self.config.threshold = threshold;
        self.config.owners.set(new_owner, true);
        Ok(())
    }

    /// Appoints `guardian`. The threshold is not re-checked here, so a
    /// threshold given to `initialize` may stay above the guardian count.
    pub fn add_guardian(&mut self, caller: &Address, guardian: Address) -> Result<(), WalletError> {
        self.require_owner(caller)?;

        if self.is_guardian(&guardian) {
            return Err(WalletError::Unauthorized);
        }

        self.config.guardians.set(guardian, true);
        self.config.guardian_count += 1;
        Ok(())
    }

    /// Removes `guardian`. If the remaining count drops below the threshold
    /// the removal stands and `InvalidThreshold` is returned.
    pub fn remove_guardian(
        &mut self,
        caller: &Address,
        guardian: &Address,
    ) -> Result<(), WalletError> {
        self.require_owner(caller)?;

        if !self.is_guardian(guardian) {
            return Err(WalletError::InvalidGuardian);
        }

        self.config.guardians.remove(guardian.clone());
        self.config.guardian_count -= 1;

        if self.config.threshold > self.config.guardian_count {
            return Err(WalletError::InvalidThreshold);
        }
        Ok(())
    }

    /// Proposals already created keep the threshold they snapshotted.
    pub fn update_threshold(
        &mut self,
        caller: &Address,
        new_threshold: u32,
    ) -> Result<(), WalletError> {
        self.require_owner(caller)?;

        if new_threshold == 0 || new_threshold > self.config.guardian_count {
            return Err(WalletError::InvalidThreshold);
        }

        self.config.threshold = new_threshold;
        Ok(())
    }

    /// Opens a new proposal with the initiator's vote already counted and
    /// returns its id.
    pub fn initiate_recovery(
        &mut self,
        caller: &Address,
        proposed_owner: Address,
    ) -> Result<u64, WalletError> {
        if !self.is_guardian(caller) {
            return Err(WalletError::InvalidGuardian);
        }

        let recovery_id = self.config.recovery_nonce;
        self.ledger.set_proposal(
            recovery_id,
            &RecoveryProposal {
                initiator: caller.clone(),
                proposed_owner,
                vote_count: 1,
                threshold: self.config.threshold,
                active: true,
                completed: false,
            },
        );
        self.ledger.record_vote(recovery_id, caller);
        self.config.recovery_nonce += 1;

        Ok(recovery_id)
    }

    /// Adds the caller's vote. Guardian membership is checked against the
    /// live guardian set, not the set at initiation.
    pub fn support_recovery(
        &mut self,
        caller: &Address,
        recovery_id: u64,
    ) -> Result<(), WalletError> {
        let mut recovery = self.load_recovery(recovery_id)?;

        if !self.is_guardian(caller) {
            return Err(WalletError::InvalidGuardian);
        }
        if self.has_voted(recovery_id, caller) {
            return Err(WalletError::AlreadyVoted);
        }

        self.ledger.record_vote(recovery_id, caller);
        recovery.vote_count += 1;
        self.ledger.set_proposal(recovery_id, &recovery);
        Ok(())
    }

    /// Transfers ownership to the proposed owner. Any caller may execute
    /// once the votes reach the threshold snapshotted at initiation.
    ///
    /// Returns the previous owner.
    pub fn execute_recovery(
        &mut self,
        _caller: &Address,
        recovery_id: u64,
    ) -> Result<Option<Address>, WalletError> {
        let mut recovery = self.load_recovery(recovery_id)?;

        if recovery.vote_count < recovery.threshold {
            return Err(WalletError::ThresholdNotMet);
        }

        recovery.active = false;
        recovery.completed = true;
        self.ledger.set_proposal(recovery_id, &recovery);

        let new_owner = recovery.proposed_owner;
        let old_owner = self.config.owner.take();
        if let Some(ref old) = old_owner {
            self.config.owners.remove(old.clone());
        }
        self.config.owners.set(new_owner.clone(), true);
        self.config.owner = Some(new_owner);

        Ok(old_owner)
    }

    pub fn cancel_recovery(
        &mut self,
        caller: &Address,
        recovery_id: u64,
    ) -> Result<(), WalletError> {
        self.require_owner(caller)?;

        let mut recovery = self.load_recovery(recovery_id)?;
        recovery.active = false;
        self.ledger.set_proposal(recovery_id, &recovery);
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────────────────────

    pub fn is_guardian(&self, address: &Address) -> bool {
        self.config.guardians.get(address.clone()).unwrap_or(false)
    }

    pub fn has_voted(&self, recovery_id: u64, guardian: &Address) -> bool {
        self.ledger.has_vote(recovery_id, guardian)
    }

    pub fn recovery(&self, recovery_id: u64) -> Option<RecoveryProposal> {
        self.ledger.proposal(recovery_id)
    }

    pub fn guardian_list(&self) -> Vec<Address> {
        self.config.guardians.keys()
    }
}
