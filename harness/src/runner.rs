//! Message runner: drives a machine over a settings-and-messages script.
//!
//! Input is line-oriented. A line starting with `*` reconfigures the
//! machine through [`SettingsLine`]; any other non-blank line is a
//! message, converted and rendered in five-letter groups. Blank lines
//! pass through unchanged. Converting before the first settings line is
//! an error.

use std::fmt;

use enigma_config::settings::{SettingsError, SettingsLine};
use enigma_engine::machine::{Machine, MachineError};
use enigma_engine::trace::{NullTrace, TraceSink};

/// Width of output letter groups.
const GROUP_WIDTH: usize = 5;

/// Error during a runner pass, tagged with the 1-based input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// A message line appeared before any settings line.
    NotConfigured { line: usize },
    /// A settings line failed to parse or apply.
    Settings { line: usize, source: SettingsError },
    /// A message line failed to convert.
    Convert { line: usize, source: MachineError },
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotConfigured { line } => {
                write!(f, "line {line}: message before any settings line")
            }
            Self::Settings { line, source } => write!(f, "line {line}: {source}"),
            Self::Convert { line, source } => write!(f, "line {line}: {source}"),
        }
    }
}

impl std::error::Error for RunError {}

/// Drives one machine over an input script.
pub struct Runner {
    machine: Machine,
    configured: bool,
}

impl Runner {
    #[must_use]
    pub fn new(machine: Machine) -> Self {
        Self {
            machine,
            configured: false,
        }
    }

    /// The driven machine.
    #[must_use]
    pub fn machine(&self) -> &Machine {
        &self.machine
    }

    /// Process a whole script, returning the output text.
    ///
    /// # Errors
    ///
    /// Returns [`RunError`] on the first failing line.
    pub fn process(&mut self, input: &str) -> Result<String, RunError> {
        self.process_traced(input, &mut NullTrace)
    }

    /// [`process`](Self::process) with a diagnostic sink fed one record
    /// per converted character.
    ///
    /// # Errors
    ///
    /// Returns [`RunError`] on the first failing line.
    pub fn process_traced(
        &mut self,
        input: &str,
        sink: &mut dyn TraceSink,
    ) -> Result<String, RunError> {
        let mut out = String::new();
        for (line_no, line) in input.lines().enumerate() {
            let line_no = line_no + 1;
            let rendered = self.process_line(line_no, line, sink)?;
            out.push_str(&rendered);
            out.push('\n');
        }
        Ok(out)
    }

    /// Process one script line, returning its rendered output without a
    /// trailing newline. Settings lines and blank lines render empty.
    ///
    /// # Errors
    ///
    /// Returns [`RunError`] if the line fails to parse, apply, or
    /// convert.
    pub fn process_line(
        &mut self,
        line_no: usize,
        line: &str,
        sink: &mut dyn TraceSink,
    ) -> Result<String, RunError> {
        if line.trim_start().starts_with('*') {
            let parsed = SettingsLine::parse(line, self.machine.num_rotors()).map_err(
                |source| RunError::Settings {
                    line: line_no,
                    source,
                },
            )?;
            parsed
                .apply(&mut self.machine)
                .map_err(|source| RunError::Settings {
                    line: line_no,
                    source,
                })?;
            self.configured = true;
            return Ok(String::new());
        }
        if line.trim().is_empty() {
            return Ok(String::new());
        }
        if !self.configured {
            return Err(RunError::NotConfigured { line: line_no });
        }
        let converted =
            self.machine
                .convert_traced(line, sink)
                .map_err(|source| RunError::Convert {
                    line: line_no,
                    source,
                })?;
        Ok(group_letters(&converted))
    }
}

/// Render converted text in space-separated five-letter groups.
#[must_use]
pub fn group_letters(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / GROUP_WIDTH);
    for (i, ch) in text.chars().enumerate() {
        if i > 0 && i % GROUP_WIDTH == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}
