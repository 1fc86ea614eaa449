//! Enigma Config: textual machine descriptions and settings lines.
//!
//! This crate is the plumbing layer between configuration text and the
//! engine: it parses machine descriptions (alphabet, slot and pawl counts,
//! rotor inventory) and `*`-prefixed settings lines (rotor order, initial
//! setting, plugboard), and assembles live [`enigma_engine::machine::Machine`]
//! instances. It owns no cipher logic — all validation of cycle strings,
//! notches, and selections is delegated to the engine's constructors.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod descriptor;
pub mod historical;
pub mod settings;
