//! `Machine`: rotor slots, plugboard, stepping, and the signal path.
//!
//! A machine owns session state: `R` rotor slots (slot 0 = reflector,
//! slot `R-1` = fastest rotor), `P` pawls (the `P` rightmost slots are the
//! only ones capable of stepping), a plugboard permutation, and a shared
//! rotor inventory to select from.
//!
//! Configuration is phased and fail-closed:
//!
//! 1. [`Machine::insert_rotors`] -- select templates by name into slots
//! 2. [`Machine::set_rotors`] -- absolute initial settings for slots `1..R`
//! 3. [`Machine::set_plugboard`] -- optional plugboard replacement
//!
//! Each phase validates completely before mutating, so a failed call never
//! leaves a partially-configured machine.
//!
//! # Stepping
//!
//! Before every character, slots are marked to advance in one pass over
//! pre-advance notch state: the rightmost slot always, and every rotating
//! slot whose right neighbor is at its notch. All marked slots then advance
//! together. Completing the marking pass before any rotor moves is what
//! reproduces the double-stepping behavior of the mechanical stepping
//! levers.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use crate::alphabet::Alphabet;
use crate::inventory::RotorInventory;
use crate::permutation::Permutation;
use crate::rotor::Rotor;
use crate::trace::{NullTrace, TraceRecord, TraceSink};

/// A complete rotor cipher machine.
#[derive(Debug, Clone)]
pub struct Machine {
    alphabet: Arc<Alphabet>,
    num_rotors: usize,
    num_pawls: usize,
    inventory: Arc<RotorInventory>,
    slots: Vec<Rotor>,
    plugboard: Permutation,
}

/// Typed failure for machine construction, configuration, and conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MachineError {
    /// A machine needs at least a reflector and one rotor slot.
    TooFewSlots { num_rotors: usize },
    /// Pawl count must be strictly less than the slot count.
    TooManyPawls { num_pawls: usize, num_rotors: usize },
    /// The selection did not name exactly one rotor per slot.
    SelectionSizeMismatch { expected: usize, got: usize },
    /// The selection named more rotors than the inventory holds.
    SelectionExceedsInventory { got: usize, available: usize },
    /// A selected name is not in the inventory.
    UnknownRotor { name: String },
    /// The same rotor was selected twice.
    DuplicateSelection { name: String },
    /// Slot 0 must hold a reflector.
    MissingReflector { name: String },
    /// A reflector was selected for a slot other than 0.
    MisplacedReflector { name: String, slot: usize },
    /// A slot's rotor capability contradicts the pawl layout: moving
    /// rotors belong in exactly the P rightmost slots.
    PawlMismatch { name: String, slot: usize },
    /// The settings string must cover slots 1..R, one character each.
    SettingLengthMismatch { expected: usize, got: usize },
    /// A settings character is outside the alphabet.
    SettingNotInAlphabet { ch: char },
    /// Digit characters are rejected in settings strings as a
    /// configuration-format guard.
    SettingDigit { ch: char },
    /// The plugboard permutation spans a different alphabet.
    PlugboardAlphabetMismatch { expected: usize, got: usize },
    /// Conversion was attempted before any rotors were inserted.
    RotorsNotInserted,
    /// A message character is outside the alphabet.
    CharNotInAlphabet { ch: char },
    /// A character index is outside `[0, alphabet size)`.
    IndexOutOfRange { index: usize, size: usize },
}

impl fmt::Display for MachineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewSlots { num_rotors } => {
                write!(f, "machine needs more than one rotor slot, got {num_rotors}")
            }
            Self::TooManyPawls {
                num_pawls,
                num_rotors,
            } => write!(
                f,
                "pawl count {num_pawls} must be less than slot count {num_rotors}"
            ),
            Self::SelectionSizeMismatch { expected, got } => {
                write!(f, "expected {expected} rotor names, got {got}")
            }
            Self::SelectionExceedsInventory { got, available } => write!(
                f,
                "selected {got} rotors but the inventory holds only {available}"
            ),
            Self::UnknownRotor { name } => write!(f, "no rotor named {name:?} in inventory"),
            Self::DuplicateSelection { name } => {
                write!(f, "rotor {name:?} selected more than once")
            }
            Self::MissingReflector { name } => {
                write!(f, "slot 0 must hold a reflector, got {name:?}")
            }
            Self::MisplacedReflector { name, slot } => {
                write!(f, "reflector {name:?} selected for slot {slot}")
            }
            Self::PawlMismatch { name, slot } => write!(
                f,
                "rotor {name:?} in slot {slot} contradicts the pawl layout"
            ),
            Self::SettingLengthMismatch { expected, got } => {
                write!(f, "settings string must be {expected} characters, got {got}")
            }
            Self::SettingNotInAlphabet { ch } => {
                write!(f, "settings character {ch:?} is not in the alphabet")
            }
            Self::SettingDigit { ch } => {
                write!(f, "settings character {ch:?} is a digit")
            }
            Self::PlugboardAlphabetMismatch { expected, got } => write!(
                f,
                "plugboard spans alphabet of size {got}, machine uses {expected}"
            ),
            Self::RotorsNotInserted => write!(f, "no rotors inserted"),
            Self::CharNotInAlphabet { ch } => {
                write!(f, "message character {ch:?} is not in the alphabet")
            }
            Self::IndexOutOfRange { index, size } => {
                write!(f, "character index {index} out of range for alphabet of size {size}")
            }
        }
    }
}

impl std::error::Error for MachineError {}

impl Machine {
    /// Build a machine shell: slots are empty until
    /// [`insert_rotors`](Self::insert_rotors); the plugboard starts as the
    /// identity.
    ///
    /// # Errors
    ///
    /// Returns [`MachineError`] if `num_rotors < 2` or
    /// `num_pawls >= num_rotors`.
    pub fn new(
        alphabet: Arc<Alphabet>,
        num_rotors: usize,
        num_pawls: usize,
        inventory: Arc<RotorInventory>,
    ) -> Result<Self, MachineError> {
        if num_rotors < 2 {
            return Err(MachineError::TooFewSlots { num_rotors });
        }
        if num_pawls >= num_rotors {
            return Err(MachineError::TooManyPawls {
                num_pawls,
                num_rotors,
            });
        }
        let plugboard = Permutation::identity(Arc::clone(&alphabet));
        Ok(Self {
            alphabet,
            num_rotors,
            num_pawls,
            inventory,
            slots: Vec::new(),
            plugboard,
        })
    }

    /// Number of rotor slots.
    #[must_use]
    pub fn num_rotors(&self) -> usize {
        self.num_rotors
    }

    /// Number of pawls, i.e. slots capable of stepping.
    #[must_use]
    pub fn num_pawls(&self) -> usize {
        self.num_pawls
    }

    /// The machine's alphabet.
    #[must_use]
    pub fn alphabet(&self) -> &Arc<Alphabet> {
        &self.alphabet
    }

    /// The current plugboard permutation.
    #[must_use]
    pub fn plugboard(&self) -> &Permutation {
        &self.plugboard
    }

    /// The rotor in slot `k`, if rotors have been inserted.
    #[must_use]
    pub fn rotor(&self, k: usize) -> Option<&Rotor> {
        self.slots.get(k)
    }

    /// Current setting character per non-reflector slot, left to right.
    ///
    /// The diagnostic snapshot exposed to tracing and the harness; empty
    /// before insertion.
    #[must_use]
    pub fn rotor_settings(&self) -> String {
        self.slots
            .iter()
            .skip(1)
            .filter_map(|rotor| self.alphabet.to_char(rotor.setting()).ok())
            .collect()
    }

    /// Select rotors from the inventory into slots, by case-insensitive
    /// name. `names[0]` is the reflector. Fresh clones are taken from the
    /// templates, so all settings start at 0; re-insertion fully replaces
    /// any prior selection.
    ///
    /// # Errors
    ///
    /// Returns [`MachineError`] if the selection is larger than the
    /// inventory, does not match the slot count, names an unknown rotor,
    /// repeats a rotor, does not put a reflector (and only slot 0's rotor
    /// reflects) first, or places moving rotors anywhere but the P
    /// rightmost slots.
    pub fn insert_rotors(&mut self, names: &[&str]) -> Result<(), MachineError> {
        if names.len() > self.inventory.len() {
            return Err(MachineError::SelectionExceedsInventory {
                got: names.len(),
                available: self.inventory.len(),
            });
        }
        if names.len() != self.num_rotors {
            return Err(MachineError::SelectionSizeMismatch {
                expected: self.num_rotors,
                got: names.len(),
            });
        }

        let mut chosen = Vec::with_capacity(names.len());
        let mut seen = BTreeSet::new();
        for &name in names {
            let template = self
                .inventory
                .get(name)
                .ok_or_else(|| MachineError::UnknownRotor {
                    name: name.to_string(),
                })?;
            if !seen.insert(template.name().to_uppercase()) {
                return Err(MachineError::DuplicateSelection {
                    name: template.name().to_string(),
                });
            }
            chosen.push(template.clone());
        }

        if !chosen[0].reflecting() {
            return Err(MachineError::MissingReflector {
                name: chosen[0].name().to_string(),
            });
        }
        let pawl_block = self.num_rotors - self.num_pawls;
        for (slot, rotor) in chosen.iter().enumerate().skip(1) {
            if rotor.reflecting() {
                return Err(MachineError::MisplacedReflector {
                    name: rotor.name().to_string(),
                    slot,
                });
            }
            if rotor.rotates() != (slot >= pawl_block) {
                return Err(MachineError::PawlMismatch {
                    name: rotor.name().to_string(),
                    slot,
                });
            }
        }

        self.slots = chosen;
        Ok(())
    }

    /// Apply an initial setting string to slots `1..R`, one character per
    /// slot, left to right. Validates the whole string before touching any
    /// rotor.
    ///
    /// # Errors
    ///
    /// Returns [`MachineError`] if no rotors are inserted, the length is
    /// not `R-1`, or any character is a digit or outside the alphabet.
    pub fn set_rotors(&mut self, setting: &str) -> Result<(), MachineError> {
        if self.slots.is_empty() {
            return Err(MachineError::RotorsNotInserted);
        }
        let expected = self.num_rotors - 1;
        let chars: Vec<char> = setting.chars().collect();
        if chars.len() != expected {
            return Err(MachineError::SettingLengthMismatch {
                expected,
                got: chars.len(),
            });
        }
        let mut indices = Vec::with_capacity(expected);
        for &ch in &chars {
            if ch.is_ascii_digit() {
                return Err(MachineError::SettingDigit { ch });
            }
            let index = self
                .alphabet
                .index_of(ch)
                .ok_or(MachineError::SettingNotInAlphabet { ch })?;
            indices.push(index);
        }
        for (rotor, index) in self.slots.iter_mut().skip(1).zip(indices) {
            rotor.set_index(index);
        }
        Ok(())
    }

    /// Replace the plugboard permutation outright.
    ///
    /// The plugboard need not be a derangement; the identity is valid.
    ///
    /// # Errors
    ///
    /// Returns [`MachineError::PlugboardAlphabetMismatch`] if the
    /// permutation spans a different alphabet size.
    pub fn set_plugboard(&mut self, plugboard: Permutation) -> Result<(), MachineError> {
        if plugboard.size() != self.alphabet.size() {
            return Err(MachineError::PlugboardAlphabetMismatch {
                expected: self.alphabet.size(),
                got: plugboard.size(),
            });
        }
        self.plugboard = plugboard;
        Ok(())
    }

    /// Convert one character index: advance the rotors, then run the
    /// signal path. Mutates rotor settings on every call, including
    /// failed conversions of later characters in a message.
    ///
    /// # Errors
    ///
    /// Returns [`MachineError`] if no rotors are inserted or `c` is out of
    /// range.
    pub fn convert_index(&mut self, c: usize) -> Result<usize, MachineError> {
        self.convert_index_traced(c, &mut NullTrace)
    }

    /// [`convert_index`](Self::convert_index) with a diagnostic sink.
    ///
    /// # Errors
    ///
    /// Returns [`MachineError`] if no rotors are inserted or `c` is out of
    /// range.
    pub fn convert_index_traced(
        &mut self,
        c: usize,
        sink: &mut dyn TraceSink,
    ) -> Result<usize, MachineError> {
        if self.slots.is_empty() {
            return Err(MachineError::RotorsNotInserted);
        }
        let size = self.alphabet.size();
        if c >= size {
            return Err(MachineError::IndexOutOfRange { index: c, size });
        }

        self.advance_rotors();

        let tapped = self.plugboard.permute(c);
        let through = self.apply_rotors(tapped);
        let output = self.plugboard.permute(through);

        let record = TraceRecord {
            settings: self.rotor_settings(),
            input: self.char_at(c)?,
            tapped: self.char_at(tapped)?,
            output: self.char_at(output)?,
        };
        sink.record(&record);

        Ok(output)
    }

    /// Convert a message, dropping whitespace, accumulating rotor state
    /// across the whole call.
    ///
    /// # Errors
    ///
    /// Returns [`MachineError`] if no rotors are inserted or a
    /// non-whitespace character is outside the alphabet. Rotor state
    /// advanced by characters converted before the failure is retained.
    pub fn convert(&mut self, msg: &str) -> Result<String, MachineError> {
        self.convert_traced(msg, &mut NullTrace)
    }

    /// [`convert`](Self::convert) with a diagnostic sink.
    ///
    /// # Errors
    ///
    /// Returns [`MachineError`] if no rotors are inserted or a
    /// non-whitespace character is outside the alphabet.
    pub fn convert_traced(
        &mut self,
        msg: &str,
        sink: &mut dyn TraceSink,
    ) -> Result<String, MachineError> {
        let mut out = String::new();
        for ch in msg.chars() {
            if ch.is_whitespace() {
                continue;
            }
            let index = self
                .alphabet
                .index_of(ch)
                .ok_or(MachineError::CharNotInAlphabet { ch })?;
            let converted = self.convert_index_traced(index, sink)?;
            out.push(self.char_at(converted)?);
        }
        Ok(out)
    }

    /// One marking pass over pre-advance notch state, then simultaneous
    /// advance of every marked rotating slot.
    fn advance_rotors(&mut self) {
        let r = self.slots.len();
        let mut marked = vec![false; r];
        for i in 0..r {
            if i == r - 1 {
                marked[i] = true;
            } else if self.slots[i].rotates() && self.slots[i + 1].at_notch() {
                marked[i] = true;
            }
        }
        for (rotor, mark) in self.slots.iter_mut().zip(marked) {
            if mark && rotor.rotates() {
                rotor.advance();
            }
        }
    }

    /// Forward pass right to left through every slot, then backward pass
    /// left to right excluding the reflector.
    fn apply_rotors(&self, mut c: usize) -> usize {
        for rotor in self.slots.iter().rev() {
            c = rotor.convert_forward(c);
        }
        for rotor in self.slots.iter().skip(1) {
            c = rotor.convert_backward(c);
        }
        c
    }

    /// Character at a signal-path index, re-surfaced as a machine error.
    fn char_at(&self, index: usize) -> Result<char, MachineError> {
        self.alphabet
            .to_char(index)
            .map_err(|_| MachineError::IndexOutOfRange {
                index,
                size: self.alphabet.size(),
            })
    }
}
