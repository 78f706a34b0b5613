use anchor_lang::prelude::*;

use crate::error::AirdropError;
use crate::event::TokensWithdrawn;
use crate::test::harness::*;

#[test]
fn test_owner_sets_reward_amount() {
    let mut h = Harness::new();

    let old = h.set_reward_amount(h.owner, 200).unwrap();

    assert_eq!(old, REWARD);
    assert_eq!(h.config.reward_amount, 200);
}

#[test]
fn test_non_owner_cannot_set_reward_amount() {
    let mut h = Harness::new();
    let intruder = Pubkey::new_unique();

    assert_error(h.set_reward_amount(intruder, 200), AirdropError::Unauthorized);
    assert_eq!(h.config.reward_amount, REWARD);
}

#[test]
fn test_owner_withdraws() {
    let mut h = Harness::new();
    let owner = h.owner;
    let before = h.check_balance(&owner);

    let event = h.withdraw(owner, 1_000).unwrap();

    assert_eq!(
        event,
        TokensWithdrawn {
            airdrop: h.key,
            owner,
            amount: 1_000,
            remaining: FUNDING - 1_000,
        }
    );
    assert_eq!(h.check_balance(&owner), before + 1_000);
    assert_eq!(h.vault_balance(), FUNDING - 1_000);
}

#[test]
fn test_over_withdrawal_rejected() {
    let mut h = Harness::new();
    let owner = h.owner;
    let before = h.check_balance(&owner);

    assert_error(h.withdraw(owner, FUNDING + 1), AirdropError::InsufficientBalance);

    assert_eq!(h.check_balance(&owner), before);
    assert_eq!(h.vault_balance(), FUNDING);
}

#[test]
fn test_withdraw_ignores_unclaimed_obligations() {
    let mut h = Harness::new();
    let user = Pubkey::new_unique();
    h.add_to_whitelist(h.owner, &[user]).unwrap();

    h.withdraw(h.owner, FUNDING).unwrap();

    assert_eq!(h.vault_balance(), 0);
    assert_error(h.claim(user), AirdropError::InsufficientBalance);
}

#[test]
fn test_non_owner_cannot_withdraw() {
    let mut h = Harness::new();
    let intruder = Pubkey::new_unique();

    assert_error(h.withdraw(intruder, 1_000), AirdropError::Unauthorized);
    assert_eq!(h.check_balance(&intruder), 0);
    assert_eq!(h.vault_balance(), FUNDING);
}

#[test]
fn test_unauthorized_checked_before_balance() {
    let mut h = Harness::new();
    let intruder = Pubkey::new_unique();

    assert_error(h.withdraw(intruder, FUNDING * 10), AirdropError::Unauthorized);
}

#[test]
fn test_ownership_transfer() {
    let mut h = Harness::new();
    let old_owner = h.owner;
    let new_owner = Pubkey::new_unique();

    assert_eq!(h.transfer_ownership(old_owner, new_owner).unwrap(), old_owner);
    assert_eq!(h.config.owner, new_owner);

    assert_error(h.set_reward_amount(old_owner, 1), AirdropError::Unauthorized);
    assert_error(h.withdraw(old_owner, 1), AirdropError::Unauthorized);
    assert_error(
        h.add_to_whitelist(old_owner, &[old_owner]),
        AirdropError::Unauthorized,
    );

    h.set_reward_amount(new_owner, 1).unwrap();
    h.withdraw(new_owner, 500).unwrap();
    assert_eq!(h.check_balance(&new_owner), 500);
}

#[test]
fn test_non_owner_cannot_transfer_ownership() {
    let mut h = Harness::new();
    let intruder = Pubkey::new_unique();

    assert_error(
        h.transfer_ownership(intruder, intruder),
        AirdropError::Unauthorized,
    );
    assert_eq!(h.config.owner, h.owner);
}

#[test]
fn test_ownership_cannot_go_to_default_key() {
    let mut h = Harness::new();

    assert_error(
        h.transfer_ownership(h.owner, Pubkey::default()),
        AirdropError::InvalidOwner,
    );
    assert_eq!(h.config.owner, h.owner);
}

#[test]
fn test_failed_admin_calls_leave_state_unchanged() {
    let mut h = Harness::new();
    let intruder = Pubkey::new_unique();
    let config_before = h.config.clone();

    let _ = h.add_to_whitelist(intruder, &[intruder]);
    let _ = h.set_reward_amount(intruder, 0);
    let _ = h.withdraw(intruder, 1);
    let _ = h.transfer_ownership(intruder, intruder);

    assert_eq!(h.config, config_before);
    assert!(h.recipients.is_empty());
    assert_eq!(h.vault_balance(), FUNDING);
}
