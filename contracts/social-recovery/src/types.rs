use soroban_sdk::{contracttype, Address, Env, Map};

use crate::errors::WalletError;

/// Lifecycle position of a recovery proposal.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum RecoveryState {
    Active,
    Completed,
    Cancelled,
}

/// A guardian-initiated proposal to hand the wallet to a new owner.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct RecoveryProposal {
    pub initiator: Address,
    pub proposed_owner: Address,
    pub vote_count: u32,
    /// Threshold in force when the proposal was created
    pub threshold: u32,
    pub active: bool,
    pub completed: bool,
}

impl RecoveryProposal {
    pub fn state(&self) -> RecoveryState {
        if self.active {
            RecoveryState::Active
        } else if self.completed {
            RecoveryState::Completed
        } else {
            RecoveryState::Cancelled
        }
    }

    /// Rejects votes, executions and cancellations on a terminal proposal.
    ///
    /// The completed check sits behind the active check, so a completed
    /// proposal reports `RecoveryNotActive`.
    pub(crate) fn require_active(&self) -> Result<(), WalletError> {
        if !self.active {
            return Err(WalletError::RecoveryNotActive);
        }
        if self.completed {
            return Err(WalletError::RecoveryCompleted);
        }
        Ok(())
    }
}

/// Vote ledger key: one entry per guardian per recovery.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct VoteKey {
    pub recovery_id: u64,
    pub guardian: Address,
}

/// Owner-controlled wallet settings, kept together in one bounded entry.
///
/// Proposals and votes are not part of it; they live in a `RecoveryLedger`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct WalletConfig {
    pub owner: Option<Address>,
    pub threshold: u32,
    pub guardian_count: u32,
    /// Id the next recovery proposal receives
    pub recovery_nonce: u64,
    pub guardians: Map<Address, bool>,
    /// Holds exactly the current owner once initialized
    pub owners: Map<Address, bool>,
}

impl WalletConfig {
    pub fn new(env: &Env) -> Self {
        Self {
            owner: None,
            threshold: 0,
            guardian_count: 0,
            recovery_nonce: 0,
            guardians: Map::new(env),
            owners: Map::new(env),
        }
    }
}
