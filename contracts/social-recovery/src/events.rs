//! # Social Recovery Wallet – Event Logging
//!
//! One `#[contractevent]` struct per successful state change. The macro
//! derives the snake_case struct name as the leading topic (for example
//! `guardian_added_event`) and packs every field into the data map.
//!
//! Events are published only after the state transition has been applied
//! and persisted; a failed operation emits nothing.
use soroban_sdk::{contractevent, Address, Env};

/// Emitted once, when the wallet receives its first owner.
#[contractevent]
#[derive(Clone, Debug)]
pub struct WalletInitializedEvent {
    pub owner: Address,
    pub threshold: u32,
}

/// Emitted when the owner appoints a guardian.
#[contractevent]
#[derive(Clone, Debug)]
pub struct GuardianAddedEvent {
    pub owner: Address,
    pub guardian: Address,
    pub guardian_count: u32,
}

/// Emitted when the owner removes a guardian.
#[contractevent]
#[derive(Clone, Debug)]
pub struct GuardianRemovedEvent {
    pub owner: Address,
    pub guardian: Address,
    pub guardian_count: u32,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct ThresholdUpdatedEvent {
    pub owner: Address,
    pub threshold: u32,
}

/// Emitted when a guardian opens a recovery proposal.
///
/// # Fields
/// * `recovery_id` – Id allocated to the proposal.
/// * `initiator` – Guardian that opened it; their vote is already counted.
/// * `proposed_owner` – Address that receives the wallet on execution.
/// * `threshold` – Votes required, fixed at creation.
#[contractevent]
#[derive(Clone, Debug)]
pub struct RecoveryInitiatedEvent {
    pub recovery_id: u64,
    pub initiator: Address,
    pub proposed_owner: Address,
    pub threshold: u32,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct RecoverySupportedEvent {
    pub recovery_id: u64,
    pub guardian: Address,
    pub vote_count: u32,
}

/// Emitted when ownership changes hands through a completed recovery.
///
/// # Fields
/// * `recovery_id` – The executed proposal.
/// * `executor` – Address that triggered execution; need not be a guardian.
/// * `old_owner` – Owner before execution.
/// * `new_owner` – Owner after execution.
#[contractevent]
#[derive(Clone, Debug)]
pub struct RecoveryExecutedEvent {
    pub recovery_id: u64,
    pub executor: Address,
    pub old_owner: Option<Address>,
    pub new_owner: Address,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct RecoveryCancelledEvent {
    pub recovery_id: u64,
    pub owner: Address,
}

pub fn emit_wallet_initialized(env: &Env, owner: &Address, threshold: u32) {
    WalletInitializedEvent {
        owner: owner.clone(),
        threshold,
    }
    .publish(env);
}

pub fn emit_guardian_added(env: &Env, owner: &Address, guardian: &Address, guardian_count: u32) {
    GuardianAddedEvent {
        owner: owner.clone(),
        guardian: guardian.clone(),
        guardian_count,
    }
    .publish(env);
}

pub fn emit_guardian_removed(env: &Env, owner: &Address, guardian: &Address, guardian_count: u32) {
    GuardianRemovedEvent {
        owner: owner.clone(),
        guardian: guardian.clone(),
        guardian_count,
    }
    .publish(env);
}

pub fn emit_threshold_updated(env: &Env, owner: &Address, threshold: u32) {
    ThresholdUpdatedEvent {
        owner: owner.clone(),
        threshold,
    }
    .publish(env);
}

pub fn emit_recovery_initiated(
    env: &Env,
    recovery_id: u64,
    initiator: &Address,
    proposed_owner: &Address,
    threshold: u32,
) {
    RecoveryInitiatedEvent {
        recovery_id,
        initiator: initiator.clone(),
        proposed_owner: proposed_owner.clone(),
        threshold,
    }
    .publish(env);
}

pub fn emit_recovery_supported(env: &Env, recovery_id: u64, guardian: &Address, vote_count: u32) {
    RecoverySupportedEvent {
        recovery_id,
        guardian: guardian.clone(),
        vote_count,
    }
    .publish(env);
}

pub fn emit_recovery_executed(
    env: &Env,
    recovery_id: u64,
    executor: &Address,
    old_owner: Option<Address>,
    new_owner: &Address,
) {
    RecoveryExecutedEvent {
        recovery_id,
        executor: executor.clone(),
        old_owner,
        new_owner: new_owner.clone(),
    }
    .publish(env);
}

pub fn emit_recovery_cancelled(env: &Env, recovery_id: u64, owner: &Address) {
    RecoveryCancelledEvent {
        recovery_id,
        owner: owner.clone(),
    }
    .publish(env);
}
