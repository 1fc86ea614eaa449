//! Single source of truth for the canonical lock fixture.
//!
//! Used by both the `cipher_fixture` binary and the golden lock tests.
//! Any change here changes both, preventing silent drift between what
//! the cross-process fixture produces and what the in-process tests
//! expect.
//!
//! Configuration: naval machine, rotors B Beta III IV I, setting AXLE,
//! plugboard (HQ) (EX) (IP) (TR) (BY).

use enigma_config::historical;
use enigma_config::settings::SettingsLine;
use enigma_engine::machine::Machine;

/// Settings line for the canonical fixture.
pub const FIXTURE_SETTINGS: &str = "* B Beta III IV I AXLE (HQ) (EX) (IP) (TR) (BY)";

/// Canonical plaintext.
pub const FIXTURE_PLAIN: &str = "FROMHISSHOULDERHIAWATHA";

/// Ciphertext of [`FIXTURE_PLAIN`] under [`FIXTURE_SETTINGS`].
pub const FIXTURE_CIPHER: &str = "QVPQSOKOILPUBKJZPISFXDW";

/// A longer plaintext that exercises more rotor steps.
pub const FIXTURE_PLAIN_LONG: &str = "FROMHISSHOULDERHIAWATHATOOKTHECAMERAOFROSEWOOD";

/// Ciphertext of [`FIXTURE_PLAIN_LONG`] under [`FIXTURE_SETTINGS`].
pub const FIXTURE_CIPHER_LONG: &str = "QVPQSOKOILPUBKJZPISFXDWBHCNSCXNUOAATZXSRCFYDGU";

/// Build the canonical fixture machine, configured and ready to
/// convert.
///
/// # Panics
///
/// Panics if the built-in description or the fixture settings line is
/// rejected; both are fixed text, so that only surfaces regressions.
#[must_use]
pub fn fixture_machine() -> Machine {
    let mut machine = historical::naval_machine().expect("built-in description must build");
    let line = SettingsLine::parse(FIXTURE_SETTINGS, machine.num_rotors())
        .expect("fixture settings line must parse");
    line.apply(&mut machine)
        .expect("fixture settings line must apply");
    machine
}
