//! Enigma Engine: the deterministic core of the rotor cipher machine.
//!
//! # API Surface
//!
//! The engine exposes four layers, leaves first:
//!
//! - [`alphabet::Alphabet`] -- bidirectional char/index mapping
//! - [`permutation::Permutation`] -- cycle-notation bijection with forward and inverse lookup
//! - [`rotor::Rotor`] -- a permutation plus rotational state and variant behavior
//! - [`machine::Machine`] -- rotor slots, plugboard, stepping, and the per-character signal path
//!
//! # Module Dependency Direction
//!
//! `alphabet` ← `permutation` ← `rotor` ← `inventory` ← `machine`
//!
//! One-way only. No cycles. `trace` depends only on `alphabet` output types
//! (plain chars and strings) and is consumed by `machine`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod alphabet;
pub mod inventory;
pub mod machine;
pub mod permutation;
pub mod rotor;
pub mod trace;
