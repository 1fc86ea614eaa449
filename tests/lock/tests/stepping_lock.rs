//! Rotor stepping lock tests.
//!
//! Proves:
//! 1. In a three-slot machine, the middle rotor advances exactly once
//!    while the fast rotor completes a full revolution
//! 2. The four-rotor HELLO WORLD fixture holds: ciphertext, settings
//!    after the run, and self-inverse decode
//!
//! All expectations here were derived independently of the engine and
//! are locked against regression.

use cipher_lock_tests::fixtures::fixture_machine;
use enigma_config::descriptor::MachineDescription;
use enigma_config::historical;
use enigma_engine::machine::Machine;

/// Naval rotor set re-counted for `num_rotors` slots and
/// `num_pawls` pawls.
fn resized_machine(num_rotors: usize, num_pawls: usize) -> Machine {
    let description = MachineDescription {
        num_rotors,
        num_pawls,
        ..historical::naval()
    };
    description.build().unwrap()
}

// ---------------------------------------------------------------------------
// 1. Middle rotor over one revolution of the fast rotor
// ---------------------------------------------------------------------------

/// ACCEPTANCE: STEP-001-LOCK
#[test]
fn middle_rotor_advances_once_per_fast_revolution() {
    let mut machine = resized_machine(3, 2);
    machine.insert_rotors(&["B", "I", "III"]).unwrap();
    machine.set_rotors("AA").unwrap();

    let mut middle_changes = 0;
    let mut previous = machine.rotor_settings();
    for _ in 0..26 {
        machine.convert_index(0).unwrap();
        let current = machine.rotor_settings();
        if current.as_bytes()[0] != previous.as_bytes()[0] {
            middle_changes += 1;
        }
        previous = current;
    }

    assert_eq!(middle_changes, 1);
    assert_eq!(machine.rotor_settings(), "BA");
}

/// ACCEPTANCE: STEP-001-LOCK
#[test]
fn fast_rotor_advances_every_character() {
    let mut machine = resized_machine(3, 2);
    machine.insert_rotors(&["B", "I", "III"]).unwrap();
    machine.set_rotors("AA").unwrap();

    for expected in ["AB", "AC", "AD"] {
        machine.convert_index(0).unwrap();
        assert_eq!(machine.rotor_settings(), expected);
    }
}

// ---------------------------------------------------------------------------
// 2. Four-rotor fixture
// ---------------------------------------------------------------------------

/// ACCEPTANCE: STEP-002-LOCK
#[test]
fn hello_world_fixture_holds() {
    let mut machine = resized_machine(4, 3);
    machine.insert_rotors(&["B", "I", "II", "III"]).unwrap();
    machine.set_rotors("AAA").unwrap();

    assert_eq!(machine.convert("HELLO WORLD").unwrap(), "DCSBUQBMEH");
    assert_eq!(machine.rotor_settings(), "AAK");
}

/// ACCEPTANCE: STEP-002-LOCK
#[test]
fn hello_world_fixture_decodes_back() {
    let mut machine = resized_machine(4, 3);
    machine.insert_rotors(&["B", "I", "II", "III"]).unwrap();
    machine.set_rotors("AAA").unwrap();

    assert_eq!(machine.convert("DCSBUQBMEH").unwrap(), "HELLOWORLD");
}

// ---------------------------------------------------------------------------
// 3. Settings are restored by dialing, not by conversion
// ---------------------------------------------------------------------------

/// ACCEPTANCE: STEP-003-LOCK
#[test]
fn redialing_restores_the_starting_position() {
    let mut machine = fixture_machine();
    machine.convert("FROMHIS").unwrap();
    assert_ne!(machine.rotor_settings(), "AXLE");
    machine.set_rotors("AXLE").unwrap();
    assert_eq!(machine.rotor_settings(), "AXLE");
}
