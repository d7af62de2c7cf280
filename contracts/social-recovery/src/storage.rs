use soroban_sdk::{contracttype, Address, Env};

use crate::state::{RecoveryLedger, WalletState};
use crate::types::{RecoveryProposal, WalletConfig};

#[derive(Clone)]
#[contracttype]
pub enum WalletDataKey {
    /// Owner, guardians, threshold and nonce (instance storage)
    Config,

    /// One recovery proposal per id (persistent storage)
    Recovery(u64),
    /// One entry per guardian vote on a proposal (persistent storage)
    Vote(u64, Address),
}

/// Proposals and votes kept under their own persistent keys.
#[derive(Clone)]
pub struct PersistentLedger<'a> {
    env: &'a Env,
}

impl<'a> PersistentLedger<'a> {
    pub fn new(env: &'a Env) -> Self {
        Self { env }
    }
}

impl RecoveryLedger for PersistentLedger<'_> {
    fn proposal(&self, recovery_id: u64) -> Option<RecoveryProposal> {
        self.env
            .storage()
            .persistent()
            .get(&WalletDataKey::Recovery(recovery_id))
    }

    fn set_proposal(&mut self, recovery_id: u64, proposal: &RecoveryProposal) {
        self.env
            .storage()
            .persistent()
            .set(&WalletDataKey::Recovery(recovery_id), proposal);
    }

    fn has_vote(&self, recovery_id: u64, guardian: &Address) -> bool {
        self.env
            .storage()
            .persistent()
            .has(&WalletDataKey::Vote(recovery_id, guardian.clone()))
    }

    fn record_vote(&mut self, recovery_id: u64, guardian: &Address) {
        self.env
            .storage()
            .persistent()
            .set(&WalletDataKey::Vote(recovery_id, guardian.clone()), &true);
    }
}

/// Reads the wallet config, or a fresh uninitialized one if nothing has been
/// stored yet.
pub fn load_config(env: &Env) -> WalletConfig {
    env.storage()
        .instance()
        .get(&WalletDataKey::Config)
        .unwrap_or_else(|| WalletConfig::new(env))
}

pub fn save_config(env: &Env, config: &WalletConfig) {
    env.storage().instance().set(&WalletDataKey::Config, config);
}

/// Wallet state over contract storage. Ledger writes go straight to
/// persistent storage; the config is written back by [`save_state`].
pub fn load_state(env: &Env) -> WalletState<PersistentLedger<'_>> {
    WalletState::with_ledger(load_config(env), PersistentLedger::new(env))
}

pub fn save_state<L: RecoveryLedger>(env: &Env, state: &WalletState<L>) {
    save_config(env, &state.config);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&WalletDataKey::Config)
}
