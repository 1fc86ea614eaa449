//! Harness: scripted message processing over the cipher engine.
//!
//! The harness turns configuration text and message scripts into
//! output, using only the `enigma-config` and `enigma-engine` APIs. It
//! owns no cipher logic.
//!
//! Two pieces:
//! - [`runner`]: line-oriented script processing (settings lines,
//!   messages, five-letter output groups).
//! - [`transcript`]: deterministic JSON rendering of a traced run.
//!
//! The `enigma` binary wraps the runner in a command-line front end.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod runner;
pub mod transcript;
