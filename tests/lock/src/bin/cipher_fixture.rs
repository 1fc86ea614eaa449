//! Binary that converts the canonical fixture and prints deterministic
//! output lines for cross-process verification.
//!
//! Usage: `cipher_fixture`
//! Output: three lines, each `key=value`:
//!   `cipher`=QVPQS...
//!   `final_settings`=....
//!   `record_count`=23

use cipher_lock_tests::fixtures::{fixture_machine, FIXTURE_PLAIN};
use enigma_engine::trace::TraceRecord;

fn main() {
    let mut machine = fixture_machine();
    let mut records: Vec<TraceRecord> = Vec::new();
    let cipher = machine
        .convert_traced(FIXTURE_PLAIN, &mut records)
        .expect("fixture conversion failed");

    println!("cipher={cipher}");
    println!("final_settings={}", machine.rotor_settings());
    println!("record_count={}", records.len());
}
