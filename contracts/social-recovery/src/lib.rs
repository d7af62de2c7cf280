//! # Social Recovery Wallet
//!
//! A single-owner wallet whose ownership can be recovered by its guardians.
//!
//! The owner appoints guardians and an approval threshold. If the owner's
//! credentials are lost, a guardian proposes a new owner, the other guardians
//! vote, and once the votes reach the threshold anyone may execute the
//! recovery to transfer ownership.
//!
//! The state machine itself lives in [`state::WalletState`]; this contract
//! loads the wallet config from instance storage, requires the caller's
//! authorization, applies the transition, persists the result and emits an
//! event. Each recovery proposal and each vote has its own persistent entry,
//! so reading the config costs the same however many proposals exist.
//!
//! Failed invocations are rolled back by the host, so the
//! `remove_guardian` removal that [`state::WalletState`] keeps alongside an
//! `InvalidThreshold` error does not persist through this entry point.

#![no_std]

use soroban_sdk::{contract, contractimpl, log, Address, Env, Vec};

pub mod errors;
pub mod events;
pub mod state;
pub mod storage;
pub mod types;

pub use errors::WalletError;
pub use state::{MemoryLedger, RecoveryLedger, WalletState};
pub use types::{RecoveryProposal, RecoveryState, VoteKey, WalletConfig};

use events::{
    emit_guardian_added, emit_guardian_removed, emit_recovery_cancelled, emit_recovery_executed,
    emit_recovery_initiated, emit_recovery_supported, emit_threshold_updated,
    emit_wallet_initialized,
};
use storage::{load_config, load_state, save_state};

#[cfg(test)]
mod tests;

#[contract]
pub struct SocialRecoveryWallet;

#[contractimpl]
impl SocialRecoveryWallet {
    /// Set the wallet owner and guardian threshold. Callable once.
    ///
    /// The threshold is not checked against the guardian count here; the
    /// wallet has no guardians yet.
    ///
    /// # Errors
    /// - `Unauthorized` - The wallet already has an owner
    pub fn initialize(env: Env, new_owner: Address, threshold: u32) -> Result<(), WalletError> {
        let mut state = load_state(&env);
        state.initialize(new_owner.clone(), threshold)?;
        save_state(&env, &state);

        log!(&env, "initialize owner={} threshold={}", new_owner, threshold);
        emit_wallet_initialized(&env, &new_owner, threshold);
        Ok(())
    }

    /// Owner: appoint a guardian.
    ///
    /// # Errors
    /// - `Unauthorized` - Caller is not the owner, or `guardian` already is one
    pub fn add_guardian(env: Env, caller: Address, guardian: Address) -> Result<(), WalletError> {
        caller.require_auth();

        let mut state = load_state(&env);
        state.add_guardian(&caller, guardian.clone())?;
        save_state(&env, &state);

        emit_guardian_added(&env, &caller, &guardian, state.config.guardian_count);
        Ok(())
    }

    /// Owner: remove a guardian.
    ///
    /// # Errors
    /// - `Unauthorized` - Caller is not the owner
    /// - `InvalidGuardian` - `guardian` is not a guardian
    /// - `InvalidThreshold` - The removal would leave fewer guardians than the threshold
    pub fn remove_guardian(
        env: Env,
        caller: Address,
        guardian: Address,
    ) -> Result<(), WalletError> {
        caller.require_auth();

        let mut state = load_state(&env);
        state.remove_guardian(&caller, &guardian)?;
        save_state(&env, &state);

        emit_guardian_removed(&env, &caller, &guardian, state.config.guardian_count);
        Ok(())
    }

    /// Owner: change the number of votes required for future recoveries.
    ///
    /// # Errors
    /// - `Unauthorized` - Caller is not the owner
    /// - `InvalidThreshold` - `new_threshold` is zero or exceeds the guardian count
    pub fn update_threshold(
        env: Env,
        caller: Address,
        new_threshold: u32,
    ) -> Result<(), WalletError> {
        caller.require_auth();

        let mut state = load_state(&env);
        state.update_threshold(&caller, new_threshold)?;
        save_state(&env, &state);

        emit_threshold_updated(&env, &caller, new_threshold);
        Ok(())
    }

    /// Guardian: propose `proposed_owner` as the new owner.
    ///
    /// The initiator's vote is counted immediately.
    ///
    /// # Returns
    /// The id of the new recovery proposal
    ///
    /// # Errors
    /// - `InvalidGuardian` - Caller is not a guardian
    pub fn initiate_recovery(
        env: Env,
        caller: Address,
        proposed_owner: Address,
    ) -> Result<u64, WalletError> {
        caller.require_auth();

        let mut state = load_state(&env);
        let recovery_id = state.initiate_recovery(&caller, proposed_owner.clone())?;
        save_state(&env, &state);

        log!(
            &env,
            "initiate_recovery id={} initiator={} proposed_owner={}",
            recovery_id,
            caller,
            proposed_owner
        );
        emit_recovery_initiated(&env, recovery_id, &caller, &proposed_owner, state.config.threshold);
        Ok(recovery_id)
    }

    /// Guardian: vote for an active recovery.
    ///
    /// # Errors
    /// - `RecoveryNotActive` - Unknown id, or the recovery was executed or cancelled
    /// - `RecoveryCompleted` - The recovery was executed
    /// - `InvalidGuardian` - Caller is not a current guardian
    /// - `AlreadyVoted` - Caller already voted on this recovery
    pub fn support_recovery(
        env: Env,
        caller: Address,
        recovery_id: u64,
    ) -> Result<(), WalletError> {
        caller.require_auth();

        let mut state = load_state(&env);
        state.support_recovery(&caller, recovery_id)?;
        save_state(&env, &state);

        let vote_count = state
            .recovery(recovery_id)
            .map(|r| r.vote_count)
            .unwrap_or_default();
        emit_recovery_supported(&env, recovery_id, &caller, vote_count);
        Ok(())
    }

    /// Anyone: execute a recovery whose votes reached its threshold.
    ///
    /// # Errors
    /// - `RecoveryNotActive` - Unknown id, or the recovery was executed or cancelled
    /// - `RecoveryCompleted` - The recovery was executed
    /// - `ThresholdNotMet` - Fewer votes than the threshold fixed at initiation
    pub fn execute_recovery(
        env: Env,
        caller: Address,
        recovery_id: u64,
    ) -> Result<(), WalletError> {
        caller.require_auth();

        let mut state = load_state(&env);
        let old_owner = state.execute_recovery(&caller, recovery_id)?;
        save_state(&env, &state);

        if let Some(new_owner) = state.config.owner.clone() {
            log!(&env, "execute_recovery id={} new_owner={}", recovery_id, new_owner);
            emit_recovery_executed(&env, recovery_id, &caller, old_owner, &new_owner);
        }
        Ok(())
    }

    /// Owner: cancel an active recovery.
    ///
    /// # Errors
    /// - `Unauthorized` - Caller is not the current owner
    /// - `RecoveryNotActive` - Unknown id, or the recovery was executed or cancelled
    /// - `RecoveryCompleted` - The recovery was executed
    pub fn cancel_recovery(
        env: Env,
        caller: Address,
        recovery_id: u64,
    ) -> Result<(), WalletError> {
        caller.require_auth();

        let mut state = load_state(&env);
        state.cancel_recovery(&caller, recovery_id)?;
        save_state(&env, &state);

        emit_recovery_cancelled(&env, recovery_id, &caller);
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────────────────────

    pub fn get_owner(env: Env) -> Option<Address> {
        load_config(&env).owner
    }

    pub fn get_threshold(env: Env) -> u32 {
        load_config(&env).threshold
    }

    pub fn is_guardian(env: Env, address: Address) -> bool {
        load_state(&env).is_guardian(&address)
    }

    /// Full proposal record, or `None` for an id that was never allocated.
    pub fn get_recovery_status(env: Env, recovery_id: u64) -> Option<RecoveryProposal> {
        load_state(&env).recovery(recovery_id)
    }

    pub fn has_voted(env: Env, recovery_id: u64, guardian: Address) -> bool {
        load_state(&env).has_voted(recovery_id, &guardian)
    }

    pub fn get_guardian_count(env: Env) -> u32 {
        load_config(&env).guardian_count
    }

    /// Id the next `initiate_recovery` call will receive.
    pub fn get_recovery_nonce(env: Env) -> u64 {
        load_config(&env).recovery_nonce
    }

    pub fn get_guardians(env: Env) -> Vec<Address> {
        load_state(&env).guardian_list()
    }

    pub fn is_initialized(env: Env) -> bool {
        storage::is_initialized(&env)
    }
}
