//! Shared fixtures for the lock tests and the `cipher_fixture` binary.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod fixtures;
