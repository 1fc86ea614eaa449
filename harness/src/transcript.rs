//! Conversion transcript rendering.
//!
//! `render_transcript()` is a pure function from a machine and its
//! collected trace records to a JSON artifact. The machine state is
//! authoritative; the transcript is a derived view, and re-rendering the
//! same run must be byte-identical. `serde_json` maps are ordered, so
//! serializing the same value always yields the same bytes.

use enigma_engine::machine::Machine;
use enigma_engine::trace::TraceRecord;

/// Schema tag for the transcript artifact.
pub const TRANSCRIPT_SCHEMA: &str = "conversion_transcript.v1";

/// Render a transcript artifact as JSON bytes.
///
/// The artifact captures the machine identity (alphabet, inserted rotor
/// names, settings after the run) and one record per converted
/// character, in conversion order.
///
/// # Errors
///
/// Returns a [`serde_json::Error`] if serialization fails.
pub fn render_transcript(
    machine: &Machine,
    records: &[TraceRecord],
) -> Result<Vec<u8>, serde_json::Error> {
    let alphabet: String = machine.alphabet().chars().iter().collect();
    let rotors: Vec<&str> = (0..machine.num_rotors())
        .filter_map(|slot| machine.rotor(slot))
        .map(|rotor| rotor.name())
        .collect();
    let entries: Vec<serde_json::Value> = records
        .iter()
        .map(|record| {
            serde_json::json!({
                "input": record.input.to_string(),
                "output": record.output.to_string(),
                "settings": record.settings,
                "tapped": record.tapped.to_string(),
            })
        })
        .collect();

    let transcript = serde_json::json!({
        "alphabet": alphabet,
        "final_settings": machine.rotor_settings(),
        "record_count": entries.len(),
        "records": entries,
        "rotors": rotors,
        "schema_version": TRANSCRIPT_SCHEMA,
    });

    serde_json::to_vec(&transcript)
}
