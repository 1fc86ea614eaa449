//! Transcript artifact lock tests.
//!
//! Proves:
//! 1. Transcript rendering is byte-deterministic across fresh machines
//! 2. The artifact schema surface is stable: top-level keys, schema
//!    tag, and per-record keys
//! 3. Record count equals the number of converted letters

use cipher_lock_tests::fixtures::{fixture_machine, FIXTURE_PLAIN};
use enigma_engine::trace::TraceRecord;
use enigma_harness::transcript::{render_transcript, TRANSCRIPT_SCHEMA};

fn rendered_fixture() -> Vec<u8> {
    let mut machine = fixture_machine();
    let mut records: Vec<TraceRecord> = Vec::new();
    machine.convert_traced(FIXTURE_PLAIN, &mut records).unwrap();
    render_transcript(&machine, &records).unwrap()
}

// ---------------------------------------------------------------------------
// 1. Byte determinism
// ---------------------------------------------------------------------------

/// ACCEPTANCE: TRANSCRIPT-001-LOCK
#[test]
fn rendering_is_byte_identical_across_fresh_machines() {
    let first = rendered_fixture();
    let second = rendered_fixture();
    assert_eq!(first, second);
}

// ---------------------------------------------------------------------------
// 2. Schema surface
// ---------------------------------------------------------------------------

/// ACCEPTANCE: TRANSCRIPT-002-LOCK
#[test]
fn schema_surface_is_stable() {
    let parsed: serde_json::Value = serde_json::from_slice(&rendered_fixture()).unwrap();
    let keys: Vec<&String> = parsed.as_object().unwrap().keys().collect();
    assert_eq!(
        keys,
        [
            "alphabet",
            "final_settings",
            "record_count",
            "records",
            "rotors",
            "schema_version",
        ]
    );
    assert_eq!(parsed["schema_version"], TRANSCRIPT_SCHEMA);

    let record = parsed["records"][0].as_object().unwrap();
    let record_keys: Vec<&String> = record.keys().collect();
    assert_eq!(record_keys, ["input", "output", "settings", "tapped"]);
}

// ---------------------------------------------------------------------------
// 3. Record count
// ---------------------------------------------------------------------------

/// ACCEPTANCE: TRANSCRIPT-003-LOCK
#[test]
fn one_record_per_converted_letter() {
    let parsed: serde_json::Value = serde_json::from_slice(&rendered_fixture()).unwrap();
    assert_eq!(
        parsed["record_count"].as_u64().unwrap(),
        FIXTURE_PLAIN.len() as u64
    );
    assert_eq!(
        parsed["records"].as_array().unwrap().len(),
        FIXTURE_PLAIN.len()
    );
}
