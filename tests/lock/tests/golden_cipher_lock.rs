//! Golden cipher lock tests.
//!
//! Proves:
//! 1. The canonical naval fixture produces its locked ciphertext
//! 2. Conversion is self-inverse under the same settings
//! 3. A longer message stays locked across more rotor steps
//! 4. Fresh machines built from the same description agree byte-for-byte
//!
//! The expected strings are fixed. If any of these tests fail, rotor
//! wiring, stepping, or the signal path has regressed.

use cipher_lock_tests::fixtures::{
    fixture_machine, FIXTURE_CIPHER, FIXTURE_CIPHER_LONG, FIXTURE_PLAIN, FIXTURE_PLAIN_LONG,
};

// ---------------------------------------------------------------------------
// 1. Canonical ciphertext
// ---------------------------------------------------------------------------

/// ACCEPTANCE: GOLDEN-001-LOCK
#[test]
fn canonical_fixture_produces_locked_ciphertext() {
    let mut machine = fixture_machine();
    assert_eq!(machine.convert(FIXTURE_PLAIN).unwrap(), FIXTURE_CIPHER);
}

/// ACCEPTANCE: GOLDEN-001-LOCK
#[test]
fn first_character_alone_matches() {
    let mut machine = fixture_machine();
    assert_eq!(machine.convert("F").unwrap(), "Q");
}

// ---------------------------------------------------------------------------
// 2. Self-inverse
// ---------------------------------------------------------------------------

/// ACCEPTANCE: GOLDEN-002-LOCK
#[test]
fn ciphertext_decodes_back_to_plaintext() {
    let mut machine = fixture_machine();
    assert_eq!(machine.convert(FIXTURE_CIPHER).unwrap(), FIXTURE_PLAIN);
}

// ---------------------------------------------------------------------------
// 3. Longer message
// ---------------------------------------------------------------------------

/// ACCEPTANCE: GOLDEN-003-LOCK
#[test]
fn long_fixture_stays_locked() {
    let mut machine = fixture_machine();
    assert_eq!(
        machine.convert(FIXTURE_PLAIN_LONG).unwrap(),
        FIXTURE_CIPHER_LONG
    );
}

/// ACCEPTANCE: GOLDEN-003-LOCK
#[test]
fn long_fixture_decodes_back() {
    let mut machine = fixture_machine();
    assert_eq!(
        machine.convert(FIXTURE_CIPHER_LONG).unwrap(),
        FIXTURE_PLAIN_LONG
    );
}

// ---------------------------------------------------------------------------
// 4. Cross-machine determinism
// ---------------------------------------------------------------------------

/// ACCEPTANCE: GOLDEN-004-LOCK
#[test]
fn fresh_machines_agree() {
    for _ in 0..3 {
        let mut machine = fixture_machine();
        assert_eq!(machine.convert(FIXTURE_PLAIN).unwrap(), FIXTURE_CIPHER);
    }
}

/// ACCEPTANCE: GOLDEN-004-LOCK
#[test]
fn whitespace_in_plaintext_is_ignored() {
    let mut spaced = fixture_machine();
    let mut plain = fixture_machine();
    let out_spaced = spaced.convert("FROM HIS SHOULDER\tHIAWATHA").unwrap();
    let out_plain = plain.convert(FIXTURE_PLAIN).unwrap();
    assert_eq!(out_spaced, out_plain);
}
