//! Settings line parsing and application.
//!
//! A settings line selects rotors, dials in their positions, and wires
//! the plugboard:
//!
//! ```text
//! * B Beta III IV I AXLE (HQ) (EX) (IP) (TR) (BY)
//! ```
//!
//! The line starts with `*`, then one name per machine slot, then the
//! ring setting (one character per rotating or fixed slot), then zero or
//! more plugboard cycles. Applying a settings line always rewires the
//! plugboard, so a line with no cycles resets it to the identity.

use std::fmt;
use std::sync::Arc;

use enigma_engine::machine::{Machine, MachineError};
use enigma_engine::permutation::{Permutation, PermutationError};

/// A parsed settings line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsLine {
    pub rotors: Vec<String>,
    pub setting: String,
    pub plugboard: String,
}

/// Typed failure for settings parsing and application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// The line did not start with `*`.
    MissingMarker,
    /// The line ended before all rotor names and the setting appeared.
    TooFewTokens { expected: usize, got: usize },
    /// The plugboard cycles failed engine validation.
    Plugboard(PermutationError),
    /// The machine rejected the selection or setting.
    Machine(MachineError),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingMarker => write!(f, "settings line must start with '*'"),
            Self::TooFewTokens { expected, got } => write!(
                f,
                "settings line needs at least {expected} tokens after '*', got {got}"
            ),
            Self::Plugboard(err) => write!(f, "plugboard: {err}"),
            Self::Machine(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for SettingsError {}

impl From<PermutationError> for SettingsError {
    fn from(err: PermutationError) -> Self {
        Self::Plugboard(err)
    }
}

impl From<MachineError> for SettingsError {
    fn from(err: MachineError) -> Self {
        Self::Machine(err)
    }
}

impl SettingsLine {
    /// Parse a settings line for a machine with `num_rotors` slots.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] if the `*` marker is absent or the line
    /// has fewer than `num_rotors + 1` tokens after it.
    pub fn parse(line: &str, num_rotors: usize) -> Result<Self, SettingsError> {
        let mut tokens = line.split_whitespace();
        if tokens.next() != Some("*") {
            return Err(SettingsError::MissingMarker);
        }
        let tokens: Vec<&str> = tokens.collect();
        if tokens.len() < num_rotors + 1 {
            return Err(SettingsError::TooFewTokens {
                expected: num_rotors + 1,
                got: tokens.len(),
            });
        }
        let rotors = tokens[..num_rotors]
            .iter()
            .map(|name| (*name).to_string())
            .collect();
        let setting = tokens[num_rotors].to_string();
        let plugboard = tokens[num_rotors + 1..].join(" ");
        Ok(Self {
            rotors,
            setting,
            plugboard,
        })
    }

    /// Apply this line to a machine: insert the rotors, dial the
    /// setting, and rewire the plugboard.
    ///
    /// The plugboard is always replaced, even when the cycle list is
    /// empty, so consecutive settings lines never leak plugs.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] wrapping the first engine rejection.
    pub fn apply(&self, machine: &mut Machine) -> Result<(), SettingsError> {
        let names: Vec<&str> = self.rotors.iter().map(String::as_str).collect();
        machine.insert_rotors(&names)?;
        machine.set_rotors(&self.setting)?;
        let plugboard = Permutation::new(&self.plugboard, Arc::clone(machine.alphabet()))?;
        machine.set_plugboard(plugboard)?;
        Ok(())
    }
}
