//! `Rotor`: a wired permutation plus rotational state.
//!
//! A rotor is one disc in the machine: a fixed wiring (shared, never
//! mutated) and a current rotational offset (`setting`, per instance).
//! The variants differ only in mechanical capability:
//!
//! - `Reflector` -- never rotates, no notches, wiring must be a derangement;
//!   consulted once per character to turn the forward pass around.
//! - `Fixed` -- never rotates, no notches.
//! - `Moving` -- rotates, carries notch characters that trigger its left
//!   neighbor's advance.
//!
//! The offset arithmetic in [`Rotor::convert_forward`] and
//! [`Rotor::convert_backward`] models the physical rotation of the wired
//! disc against a fixed contact ring: one static wiring yields
//! alphabet-size-many distinct effective mappings as the rotor turns.
//!
//! Rotors are validated once at construction and then act as immutable
//! templates; a machine clones a template into a slot and mutates only the
//! clone's `setting`.

use std::fmt;
use std::sync::Arc;

use crate::permutation::Permutation;

/// Variant-specific rotor capability and data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RotorKind {
    /// Non-rotating derangement consulted in the single middle pass.
    Reflector,
    /// Non-rotating, non-reflecting rotor.
    Fixed,
    /// Rotating rotor with notch characters.
    Moving { notches: Vec<char> },
}

/// A named rotor: shared wiring, per-instance rotational setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    name: String,
    permutation: Arc<Permutation>,
    kind: RotorKind,
    setting: usize,
}

/// Typed failure for rotor construction and setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RotorError {
    /// A reflector wiring left some character mapped to itself.
    NotDerangement { name: String },
    /// A notch character is not in the rotor's alphabet.
    NotchOutsideAlphabet { name: String, ch: char },
    /// An absolute setting character is not in the rotor's alphabet.
    SettingOutsideAlphabet { ch: char },
}

impl fmt::Display for RotorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotDerangement { name } => {
                write!(f, "reflector {name:?} wiring is not a derangement")
            }
            Self::NotchOutsideAlphabet { name, ch } => {
                write!(f, "rotor {name:?} notch {ch:?} is not in the alphabet")
            }
            Self::SettingOutsideAlphabet { ch } => {
                write!(f, "setting character {ch:?} is not in the alphabet")
            }
        }
    }
}

impl std::error::Error for RotorError {}

impl Rotor {
    /// Construct a reflector.
    ///
    /// # Errors
    ///
    /// Returns [`RotorError::NotDerangement`] if any character maps to
    /// itself under `permutation`.
    pub fn reflector(name: &str, permutation: Arc<Permutation>) -> Result<Self, RotorError> {
        if !permutation.derangement() {
            return Err(RotorError::NotDerangement {
                name: name.to_string(),
            });
        }
        Ok(Self {
            name: name.to_string(),
            permutation,
            kind: RotorKind::Reflector,
            setting: 0,
        })
    }

    /// Construct a non-rotating, non-reflecting rotor.
    #[must_use]
    pub fn fixed(name: &str, permutation: Arc<Permutation>) -> Self {
        Self {
            name: name.to_string(),
            permutation,
            kind: RotorKind::Fixed,
            setting: 0,
        }
    }

    /// Construct a moving rotor with the given notch characters.
    ///
    /// # Errors
    ///
    /// Returns [`RotorError::NotchOutsideAlphabet`] if any notch character
    /// is not a member of the wiring's alphabet.
    pub fn moving(
        name: &str,
        permutation: Arc<Permutation>,
        notches: &str,
    ) -> Result<Self, RotorError> {
        let mut notch_chars = Vec::new();
        for ch in notches.chars() {
            if !permutation.alphabet().contains(ch) {
                return Err(RotorError::NotchOutsideAlphabet {
                    name: name.to_string(),
                    ch,
                });
            }
            notch_chars.push(ch);
        }
        Ok(Self {
            name: name.to_string(),
            permutation,
            kind: RotorKind::Moving {
                notches: notch_chars,
            },
            setting: 0,
        })
    }

    /// Canonical rotor name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The variant discriminant.
    #[must_use]
    pub fn kind(&self) -> &RotorKind {
        &self.kind
    }

    /// The shared wiring.
    #[must_use]
    pub fn permutation(&self) -> &Arc<Permutation> {
        &self.permutation
    }

    /// Current rotational offset, always in `[0, alphabet size)`.
    #[must_use]
    pub fn setting(&self) -> usize {
        self.setting
    }

    /// Notch characters; empty for non-moving variants.
    #[must_use]
    pub fn notches(&self) -> &[char] {
        match &self.kind {
            RotorKind::Moving { notches } => notches,
            RotorKind::Reflector | RotorKind::Fixed => &[],
        }
    }

    /// Whether this rotor is capable of rotating.
    #[must_use]
    pub fn rotates(&self) -> bool {
        matches!(self.kind, RotorKind::Moving { .. })
    }

    /// Whether this rotor is a reflector.
    #[must_use]
    pub fn reflecting(&self) -> bool {
        matches!(self.kind, RotorKind::Reflector)
    }

    /// True iff the character at the current setting is a notch.
    ///
    /// Always false for non-moving variants.
    #[must_use]
    pub fn at_notch(&self) -> bool {
        let RotorKind::Moving { notches } = &self.kind else {
            return false;
        };
        let Ok(ch) = self
            .permutation
            .alphabet()
            .to_char(self.setting % self.permutation.size())
        else {
            return false;
        };
        notches.contains(&ch)
    }

    /// Set the rotational offset from a setting character.
    ///
    /// # Errors
    ///
    /// Returns [`RotorError::SettingOutsideAlphabet`] if `ch` is not a
    /// member of the alphabet.
    pub fn set(&mut self, ch: char) -> Result<(), RotorError> {
        let index = self
            .permutation
            .alphabet()
            .index_of(ch)
            .ok_or(RotorError::SettingOutsideAlphabet { ch })?;
        self.setting = index;
        Ok(())
    }

    /// Set the rotational offset from an index, wrapped into range.
    pub fn set_index(&mut self, index: usize) {
        self.setting = index % self.permutation.size();
    }

    /// Advance one position, wrapping modulo the alphabet size.
    ///
    /// Caller contract: check [`rotates`](Self::rotates) first. The machine
    /// is the only internal caller and never advances a non-rotating slot.
    pub fn advance(&mut self) {
        self.setting = (self.setting + 1) % self.permutation.size();
    }

    /// Apply the wiring in the forward direction, adjusted for rotation:
    /// `wrap(permute(wrap(c + setting)) - setting)`.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn convert_forward(&self, c: usize) -> usize {
        let contact = self.permutation.wrap(c as i64 + self.setting as i64);
        let wired = self.permutation.permute(contact);
        self.permutation.wrap(wired as i64 - self.setting as i64)
    }

    /// Apply the wiring in the inverse direction, adjusted for rotation:
    /// `wrap(invert(wrap(c + setting)) - setting)`.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn convert_backward(&self, c: usize) -> usize {
        let contact = self.permutation.wrap(c as i64 + self.setting as i64);
        let wired = self.permutation.invert(contact);
        self.permutation.wrap(wired as i64 - self.setting as i64)
    }
}
