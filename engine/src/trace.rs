//! Per-character diagnostic trace.
//!
//! Conversion optionally reports each character's journey to an explicit
//! [`TraceSink`] passed into the call. This replaces a hidden global
//! verbose flag: callers that want the trace own the sink; everyone else
//! pays nothing ([`NullTrace`]).

use std::fmt;

/// One character's trace: rotor settings after stepping, the input
/// character, the character after the first plugboard pass, and the
/// final output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceRecord {
    /// Setting character per non-reflector slot, left to right.
    pub settings: String,
    /// The character fed in.
    pub input: char,
    /// The character after the entry plugboard pass.
    pub tapped: char,
    /// The character produced.
    pub output: char,
}

impl fmt::Display for TraceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} -> {} -> {}",
            self.settings, self.input, self.tapped, self.output
        )
    }
}

/// Receiver for per-character trace records.
pub trait TraceSink {
    /// Observe one converted character.
    fn record(&mut self, record: &TraceRecord);
}

/// Sink that discards every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTrace;

impl TraceSink for NullTrace {
    fn record(&mut self, _record: &TraceRecord) {}
}

/// Collecting sink for tests and transcript building.
impl TraceSink for Vec<TraceRecord> {
    fn record(&mut self, record: &TraceRecord) {
        self.push(record.clone());
    }
}
