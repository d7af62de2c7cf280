//! Storage layout: proposals and votes live under their own persistent keys,
//! so the instance config read by every call does not grow with them.

use super::test_helpers::setup_with_guardians;
use crate::storage::{load_config, WalletDataKey};
use soroban_sdk::{testutils::Address as _, xdr::ToXdr, Address, Env};

fn config_size(env: &Env, contract_id: &Address) -> u32 {
    env.as_contract(contract_id, || load_config(env).to_xdr(env).len())
}

#[test]
fn test_config_size_does_not_grow_with_proposals() {
    let (env, client, owner, (g1, g2, _)) = setup_with_guardians(2);
    client.initiate_recovery(&g1, &Address::generate(&env));
    let baseline = config_size(&env, &client.address);

    for _ in 0..50 {
        client.initiate_recovery(&g2, &Address::generate(&env));
    }

    assert_eq!(client.get_recovery_nonce(), 51);
    assert_eq!(config_size(&env, &client.address), baseline);
    assert_eq!(client.get_owner(), Some(owner));
}

#[test]
fn test_proposals_and_votes_use_persistent_keys() {
    let (env, client, _owner, (g1, g2, _)) = setup_with_guardians(2);
    let id = client.initiate_recovery(&g1, &Address::generate(&env));
    client.support_recovery(&g2, &id);

    env.as_contract(&client.address, || {
        let persistent = env.storage().persistent();
        assert!(persistent.has(&WalletDataKey::Recovery(id)));
        assert!(persistent.has(&WalletDataKey::Vote(id, g1.clone())));
        assert!(persistent.has(&WalletDataKey::Vote(id, g2.clone())));
        assert!(!persistent.has(&WalletDataKey::Recovery(id + 1)));

        let instance = env.storage().instance();
        assert!(instance.has(&WalletDataKey::Config));
        assert!(!instance.has(&WalletDataKey::Recovery(id)));
    });
}

#[test]
fn test_wallet_stays_usable_after_many_proposals() {
    let (env, client, owner, (g1, g2, g3)) = setup_with_guardians(2);
    for _ in 0..50 {
        client.initiate_recovery(&g3, &Address::generate(&env));
    }

    client.cancel_recovery(&owner, &0);
    client.add_guardian(&owner, &Address::generate(&env));
    assert_eq!(client.get_guardian_count(), 4);

    let new_owner = Address::generate(&env);
    let id = client.initiate_recovery(&g1, &new_owner);
    assert_eq!(id, 50);
    client.support_recovery(&g2, &id);
    client.execute_recovery(&g1, &id);
    assert_eq!(client.get_owner(), Some(new_owner));
}
