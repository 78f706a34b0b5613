use anchor_lang::prelude::*;

use crate::constants::MAX_WHITELIST_BATCH;
use crate::error::AirdropError;
use crate::event::Whitelisted;
use crate::test::harness::*;

#[test]
fn test_owner_whitelists_batch() {
    let mut h = Harness::new();
    let a = Pubkey::new_unique();
    let b = Pubkey::new_unique();

    let events = h.add_to_whitelist(h.owner, &[a, b]).unwrap();

    assert!(h.recipient(&a).is_whitelisted());
    assert!(h.recipient(&b).is_whitelisted());
    assert_eq!(
        events,
        vec![
            Whitelisted { airdrop: h.key, identity: a },
            Whitelisted { airdrop: h.key, identity: b },
        ]
    );
}

#[test]
fn test_duplicates_are_idempotent() {
    let mut h = Harness::new();
    let a = Pubkey::new_unique();

    let events = h.add_to_whitelist(h.owner, &[a, a]).unwrap();
    h.add_to_whitelist(h.owner, &[a]).unwrap();

    assert_eq!(events.len(), 2);
    let record = h.recipient(&a);
    assert!(record.is_whitelisted());
    assert_eq!(record.task_completions(), 0);
    assert!(!record.has_claimed());
}

#[test]
fn test_empty_batch_is_noop() {
    let mut h = Harness::new();
    let events = h.add_to_whitelist(h.owner, &[]).unwrap();
    assert!(events.is_empty());
    assert!(h.recipients.is_empty());
}

#[test]
fn test_non_owner_cannot_whitelist() {
    let mut h = Harness::new();
    let intruder = Pubkey::new_unique();

    assert_error(
        h.add_to_whitelist(intruder, &[intruder]),
        AirdropError::Unauthorized,
    );
    assert!(!h.recipient(&intruder).is_whitelisted());
}

#[test]
fn test_authorization_checked_before_batch_size() {
    let mut h = Harness::new();
    let intruder = Pubkey::new_unique();
    let batch: Vec<Pubkey> = (0..=MAX_WHITELIST_BATCH).map(|_| Pubkey::new_unique()).collect();

    assert_error(h.add_to_whitelist(intruder, &batch), AirdropError::Unauthorized);
}

#[test]
fn test_batch_size_is_bounded() {
    let mut h = Harness::new();
    let full: Vec<Pubkey> = (0..MAX_WHITELIST_BATCH).map(|_| Pubkey::new_unique()).collect();
    let oversized: Vec<Pubkey> = (0..=MAX_WHITELIST_BATCH).map(|_| Pubkey::new_unique()).collect();

    assert_eq!(h.add_to_whitelist(h.owner, &full).unwrap().len(), MAX_WHITELIST_BATCH);
    assert_error(
        h.add_to_whitelist(h.owner, &oversized),
        AirdropError::WhitelistBatchTooLarge,
    );
    assert!(oversized.iter().all(|id| !h.recipient(id).is_whitelisted()));
}

#[test]
fn test_recipient_accounts_must_match_identities() {
    let h = Harness::new();
    let ids = [Pubkey::new_unique(), Pubkey::new_unique()];

    assert_error(
        crate::instructions::validate_whitelist_batch(&h.config, &h.owner, &ids, 1),
        AirdropError::RecipientAccountMismatch,
    );
}

#[test]
fn test_full_batch_fits_one_packet() {
    // 32 bytes of instruction data, a 32 byte account key and a 1 byte index per identity
    let per_identity = 65;
    let fixed = 280;
    assert!(fixed + per_identity * MAX_WHITELIST_BATCH <= 1232);
}
