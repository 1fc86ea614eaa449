//! Four-letter toy machine lock test.
//!
//! Proves the full description-to-conversion path on the smallest
//! machine that exercises every rotor class: a reflector, a fixed
//! rotor, and one moving rotor over the alphabet ABCD.

use enigma_config::descriptor::MachineDescription;

const TOY: &str = "\
ABCD
3 1
R1  R   (AB) (CD)
F1  N   (AD) (BC)
M1  MA  (ABCD)
";

/// ACCEPTANCE: TOY-001-LOCK
#[test]
fn toy_fixture_holds() {
    let description = MachineDescription::parse(TOY).unwrap();
    let mut machine = description.build().unwrap();
    machine.insert_rotors(&["R1", "F1", "M1"]).unwrap();
    machine.set_rotors("AA").unwrap();
    assert_eq!(machine.convert("AAAA").unwrap(), "DDDD");
}

/// ACCEPTANCE: TOY-001-LOCK
#[test]
fn toy_fixture_decodes_back() {
    let description = MachineDescription::parse(TOY).unwrap();
    let mut machine = description.build().unwrap();
    machine.insert_rotors(&["R1", "F1", "M1"]).unwrap();
    machine.set_rotors("AA").unwrap();
    assert_eq!(machine.convert("DDDD").unwrap(), "AAAA");
}

/// ACCEPTANCE: TOY-002-LOCK
#[test]
fn fast_rotor_wraps_after_a_full_revolution() {
    let description = MachineDescription::parse(TOY).unwrap();
    let mut machine = description.build().unwrap();
    machine.insert_rotors(&["R1", "F1", "M1"]).unwrap();
    machine.set_rotors("AA").unwrap();

    for expected in ["AB", "AC", "AD", "AA"] {
        machine.convert_index(0).unwrap();
        assert_eq!(machine.rotor_settings(), expected);
    }
}
