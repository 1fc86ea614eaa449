//! Shared helpers for the cipher benchmark suites.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

use enigma_config::historical;
use enigma_config::settings::SettingsLine;
use enigma_engine::machine::Machine;

/// Settings line used across the benchmark suites.
pub const BENCH_SETTINGS: &str = "* B Beta III IV I AXLE (HQ) (EX) (IP) (TR) (BY)";

/// Build a configured naval machine for benchmarking.
///
/// # Panics
///
/// Panics if the built-in description or settings line is rejected.
/// Benchmark setup failures are fatal.
#[must_use]
pub fn bench_machine() -> Machine {
    let mut machine = historical::naval_machine().expect("built-in description must build");
    let line = SettingsLine::parse(BENCH_SETTINGS, machine.num_rotors())
        .expect("bench settings line must parse");
    line.apply(&mut machine)
        .expect("bench settings line must apply");
    machine
}

/// A message of `len` letters cycling through the alphabet.
#[must_use]
pub fn bench_message(len: usize) -> String {
    (0..len)
        .map(|i| char::from(b'A' + u8::try_from(i % 26).unwrap_or(0)))
        .collect()
}
