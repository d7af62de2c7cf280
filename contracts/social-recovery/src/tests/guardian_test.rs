use super::test_helpers::{setup_wallet, setup_with_guardians};
use crate::WalletError;
use soroban_sdk::{testutils::Address as _, Address};

#[test]
fn test_add_guardian() {
    let (env, client, owner) = setup_wallet(2);
    let guardian = Address::generate(&env);

    client.add_guardian(&owner, &guardian);

    assert!(client.is_guardian(&guardian));
    assert_eq!(client.get_guardian_count(), 1);
    assert_eq!(client.get_guardians().len(), 1);
}

#[test]
fn test_add_guardian_non_owner_returns_unauthorized() {
    let (env, client, _owner) = setup_wallet(2);
    let rando = Address::generate(&env);
    let guardian = Address::generate(&env);

    let result = client.try_add_guardian(&rando, &guardian);
    assert_eq!(result, Err(Ok(WalletError::Unauthorized)));
    assert!(!client.is_guardian(&guardian));
    assert_eq!(client.get_guardian_count(), 0);
}

#[test]
fn test_add_existing_guardian_returns_unauthorized() {
    let (env, client, owner) = setup_wallet(1);
    let guardian = Address::generate(&env);
    client.add_guardian(&owner, &guardian);

    let result = client.try_add_guardian(&owner, &guardian);
    assert_eq!(result, Err(Ok(WalletError::Unauthorized)));
    assert_eq!(client.get_guardian_count(), 1);
}

#[test]
fn test_owner_can_be_own_guardian() {
    let (_env, client, owner) = setup_wallet(1);
    client.add_guardian(&owner, &owner);
    assert!(client.is_guardian(&owner));
}

#[test]
fn test_add_guardian_keeps_unchecked_initial_threshold() {
    let (env, client, owner) = setup_wallet(5);
    let guardian = Address::generate(&env);

    client.add_guardian(&owner, &guardian);

    // The initial threshold is only validated by update_threshold and
    // remove_guardian, so it may exceed the guardian count.
    assert_eq!(client.get_threshold(), 5);
    assert_eq!(client.get_guardian_count(), 1);
    assert_eq!(
        client.try_update_threshold(&owner, &5),
        Err(Ok(WalletError::InvalidThreshold))
    );
    client.update_threshold(&owner, &1);
    assert_eq!(client.get_threshold(), 1);
}

#[test]
fn test_remove_guardian() {
    let (env, client, owner) = setup_wallet(1);
    let g1 = Address::generate(&env);
    let g2 = Address::generate(&env);
    client.add_guardian(&owner, &g1);
    client.add_guardian(&owner, &g2);

    client.remove_guardian(&owner, &g1);

    assert!(!client.is_guardian(&g1));
    assert!(client.is_guardian(&g2));
    assert_eq!(client.get_guardian_count(), 1);
}

#[test]
fn test_remove_unknown_guardian_returns_invalid_guardian() {
    let (env, client, owner) = setup_wallet(1);
    let result = client.try_remove_guardian(&owner, &Address::generate(&env));
    assert_eq!(result, Err(Ok(WalletError::InvalidGuardian)));
}

#[test]
fn test_remove_guardian_non_owner_returns_unauthorized() {
    let (env, client, _owner, (g1, _, _)) = setup_with_guardians(1);
    let rando = Address::generate(&env);

    let result = client.try_remove_guardian(&rando, &g1);
    assert_eq!(result, Err(Ok(WalletError::Unauthorized)));
    assert!(client.is_guardian(&g1));
}

#[test]
fn test_remove_guardian_below_threshold_is_rolled_back_by_host() {
    // The state machine keeps the removal, but a failed contract call is
    // reverted as a whole.
    let (env, client, owner) = setup_wallet(2);
    let g1 = Address::generate(&env);
    let g2 = Address::generate(&env);
    client.add_guardian(&owner, &g1);
    client.add_guardian(&owner, &g2);

    let result = client.try_remove_guardian(&owner, &g1);
    assert_eq!(result, Err(Ok(WalletError::InvalidThreshold)));
    assert!(client.is_guardian(&g1));
    assert_eq!(client.get_guardian_count(), 2);
}

#[test]
fn test_remove_then_readd_guardian() {
    let (_env, client, owner, (g1, _, _)) = setup_with_guardians(1);
    client.remove_guardian(&owner, &g1);
    client.add_guardian(&owner, &g1);
    assert!(client.is_guardian(&g1));
    assert_eq!(client.get_guardian_count(), 3);
}

#[test]
fn test_update_threshold() {
    let (_env, client, owner, _) = setup_with_guardians(1);
    client.update_threshold(&owner, &2);
    assert_eq!(client.get_threshold(), 2);

    client.update_threshold(&owner, &3);
    assert_eq!(client.get_threshold(), 3);
}

#[test]
fn test_update_threshold_above_guardian_count_returns_error() {
    let (env, client, owner) = setup_wallet(1);
    client.add_guardian(&owner, &Address::generate(&env));
    client.add_guardian(&owner, &Address::generate(&env));

    let result = client.try_update_threshold(&owner, &3);
    assert_eq!(result, Err(Ok(WalletError::InvalidThreshold)));
    assert_eq!(client.get_threshold(), 1);
}

#[test]
fn test_update_threshold_zero_returns_error() {
    let (_env, client, owner, _) = setup_with_guardians(2);
    let result = client.try_update_threshold(&owner, &0);
    assert_eq!(result, Err(Ok(WalletError::InvalidThreshold)));
    assert_eq!(client.get_threshold(), 2);
}

#[test]
#[should_panic(expected = "Error(Contract, #1)")]
fn test_update_threshold_non_owner_panics() {
    let (env, client, _owner, _) = setup_with_guardians(1);
    client.update_threshold(&Address::generate(&env), &2);
}

#[test]
fn test_threshold_invariant_after_successful_updates() {
    let (env, client, owner) = setup_wallet(1);
    for _ in 0..4 {
        client.add_guardian(&owner, &Address::generate(&env));
        let threshold = client.get_threshold();
        let count = client.get_guardian_count();
        assert!(threshold >= 1 && threshold <= count);
    }
    for t in 1..=4u32 {
        client.update_threshold(&owner, &t);
        let count = client.get_guardian_count();
        assert!(client.get_threshold() >= 1 && client.get_threshold() <= count);
    }
}
