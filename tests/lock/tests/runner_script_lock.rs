//! End-to-end runner lock tests.
//!
//! Proves:
//! 1. A description file on disk parses, builds, and drives a full
//!    script to the locked grouped output
//! 2. Mid-script settings lines reset the machine
//! 3. Script errors carry the failing line number

use std::io::Write;

use cipher_lock_tests::fixtures::FIXTURE_SETTINGS;
use enigma_config::descriptor::MachineDescription;
use enigma_config::historical::NAVAL_DESCRIPTION;
use enigma_harness::runner::{RunError, Runner};

fn runner_from_disk() -> Runner {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(NAVAL_DESCRIPTION.as_bytes()).unwrap();
    let description = MachineDescription::parse_file(file.path()).unwrap();
    Runner::new(description.build().unwrap())
}

// ---------------------------------------------------------------------------
// 1. Full script from a description file
// ---------------------------------------------------------------------------

/// ACCEPTANCE: RUNNER-001-LOCK
#[test]
fn script_from_disk_produces_locked_output() {
    let script = format!("{FIXTURE_SETTINGS}\nFROM HIS SHOULDER HIAWATHA\n");
    let mut runner = runner_from_disk();
    let out = runner.process(&script).unwrap();
    assert_eq!(out, "\nQVPQS OKOIL PUBKJ ZPISF XDW\n");
}

// ---------------------------------------------------------------------------
// 2. Mid-script reconfiguration
// ---------------------------------------------------------------------------

/// ACCEPTANCE: RUNNER-002-LOCK
#[test]
fn encode_then_decode_in_one_script() {
    let script = format!(
        "{FIXTURE_SETTINGS}\nFROM HIS SHOULDER HIAWATHA\n{FIXTURE_SETTINGS}\nQVPQS OKOIL PUBKJ ZPISF XDW\n"
    );
    let mut runner = runner_from_disk();
    let out = runner.process(&script).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[1], "QVPQS OKOIL PUBKJ ZPISF XDW");
    assert_eq!(lines[3], "FROMH ISSHO ULDER HIAWA THA");
}

// ---------------------------------------------------------------------------
// 3. Line-tagged errors
// ---------------------------------------------------------------------------

/// ACCEPTANCE: RUNNER-003-LOCK
#[test]
fn message_before_settings_reports_its_line() {
    let mut runner = runner_from_disk();
    let err = runner.process("\nHELLO\n").unwrap_err();
    assert!(matches!(err, RunError::NotConfigured { line: 2 }));
}

/// ACCEPTANCE: RUNNER-003-LOCK
#[test]
fn unknown_rotor_reports_its_line() {
    let script = "* B Beta III IV IX AXLE\n";
    let mut runner = runner_from_disk();
    let err = runner.process(script).unwrap_err();
    assert!(matches!(err, RunError::Settings { line: 1, .. }));
}
