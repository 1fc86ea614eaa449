//! Machine description parsing.
//!
//! # Format
//!
//! Line-oriented text, blank lines ignored:
//!
//! ```text
//! ABCDEFGHIJKLMNOPQRSTUVWXYZ      alphabet
//! 5 3                             slot count, pawl count
//! I   MQ  (AELTPHQXRU) (BKNW) ... one rotor per line
//! B   R   (AE) (BN) (CK) ...
//!     (DQ) (FU) ...               continuation: first token opens with '('
//! ```
//!
//! A rotor line is `NAME TYPE CYCLES...`. The type token is `R`
//! (reflector), `N` (fixed), or `M` followed immediately by the notch
//! characters (`MQ`, `MZM`). A line whose first token starts with `(`
//! continues the previous rotor's cycles.
//!
//! Parsing is structural only; cycle strings, notches, and counts are
//! validated by the engine constructors when [`MachineDescription::build`]
//! assembles the machine, so a malformed description can never produce a
//! usable machine.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use enigma_engine::alphabet::{Alphabet, AlphabetError};
use enigma_engine::inventory::{InventoryError, RotorInventory};
use enigma_engine::machine::{Machine, MachineError};
use enigma_engine::permutation::{Permutation, PermutationError};
use enigma_engine::rotor::{Rotor, RotorError};

/// Parsed rotor type token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RotorClass {
    /// `R`: non-rotating derangement.
    Reflector,
    /// `N`: non-rotating, non-reflecting.
    Fixed,
    /// `M<notches>`: rotating, with notch characters.
    Moving { notches: String },
}

/// One rotor line: name, class, and accumulated cycle text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotorDescriptor {
    pub name: String,
    pub class: RotorClass,
    pub cycles: String,
}

/// A parsed machine description: everything needed to build a machine
/// shell and its rotor inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineDescription {
    pub alphabet: String,
    pub num_rotors: usize,
    pub num_pawls: usize,
    pub rotors: Vec<RotorDescriptor>,
}

/// Typed failure for description parsing and machine assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Reading the description file failed.
    Io { detail: String },
    /// The description had no alphabet line.
    MissingAlphabet,
    /// The description had no slot/pawl count line.
    MissingCounts,
    /// The count line was not two integers.
    BadCounts { line: usize, detail: String },
    /// A rotor line was structurally malformed.
    RotorLine { line: usize, detail: String },
    /// The alphabet line failed engine validation.
    Alphabet(AlphabetError),
    /// A rotor's cycle string failed engine validation.
    Cycles {
        rotor: String,
        source: PermutationError,
    },
    /// A rotor's class constraints failed engine validation.
    Rotor(RotorError),
    /// The rotor set failed inventory validation.
    Inventory(InventoryError),
    /// The machine shell rejected the counts.
    Machine(MachineError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { detail } => write!(f, "reading description: {detail}"),
            Self::MissingAlphabet => write!(f, "description has no alphabet line"),
            Self::MissingCounts => write!(f, "description has no slot/pawl count line"),
            Self::BadCounts { line, detail } => {
                write!(f, "line {line}: bad slot/pawl counts: {detail}")
            }
            Self::RotorLine { line, detail } => write!(f, "line {line}: {detail}"),
            Self::Alphabet(err) => write!(f, "alphabet line: {err}"),
            Self::Cycles { rotor, source } => write!(f, "rotor {rotor:?}: {source}"),
            Self::Rotor(err) => write!(f, "{err}"),
            Self::Inventory(err) => write!(f, "{err}"),
            Self::Machine(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<AlphabetError> for ConfigError {
    fn from(err: AlphabetError) -> Self {
        Self::Alphabet(err)
    }
}

impl From<RotorError> for ConfigError {
    fn from(err: RotorError) -> Self {
        Self::Rotor(err)
    }
}

impl From<InventoryError> for ConfigError {
    fn from(err: InventoryError) -> Self {
        Self::Inventory(err)
    }
}

impl From<MachineError> for ConfigError {
    fn from(err: MachineError) -> Self {
        Self::Machine(err)
    }
}

impl MachineDescription {
    /// Parse a description from text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on missing alphabet or count lines,
    /// malformed counts, or structurally invalid rotor lines.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty());

        let (_, alphabet) = lines.next().ok_or(ConfigError::MissingAlphabet)?;
        let (count_line, counts) = lines.next().ok_or(ConfigError::MissingCounts)?;
        let (num_rotors, num_pawls) = parse_counts(count_line, counts)?;

        let mut rotors: Vec<RotorDescriptor> = Vec::new();
        for (line_no, line) in lines {
            let mut tokens = line.split_whitespace();
            let Some(first) = tokens.next() else {
                continue;
            };
            if first.starts_with('(') {
                // Continuation of the previous rotor's cycles.
                let Some(last) = rotors.last_mut() else {
                    return Err(ConfigError::RotorLine {
                        line: line_no,
                        detail: "cycle continuation before any rotor".to_string(),
                    });
                };
                last.cycles.push(' ');
                last.cycles.push_str(first);
                for token in tokens {
                    last.cycles.push(' ');
                    last.cycles.push_str(token);
                }
                continue;
            }

            let class_token = tokens.next().ok_or_else(|| ConfigError::RotorLine {
                line: line_no,
                detail: format!("rotor {first:?} has no type token"),
            })?;
            let class = parse_class(line_no, first, class_token)?;
            let cycles = tokens.collect::<Vec<&str>>().join(" ");
            rotors.push(RotorDescriptor {
                name: first.to_string(),
                class,
                cycles,
            });
        }

        Ok(Self {
            alphabet: alphabet.to_string(),
            num_rotors,
            num_pawls,
            rotors,
        })
    }

    /// Parse a description from a file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or any
    /// [`parse`](Self::parse) failure.
    pub fn parse_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|err| ConfigError::Io {
            detail: format!("{}: {err}", path.display()),
        })?;
        Self::parse(&text)
    }

    /// Assemble a machine shell from this description.
    ///
    /// All deep validation happens here, through the engine constructors:
    /// alphabet invariants, cycle syntax, reflector derangements, notch
    /// membership, inventory name collisions, slot/pawl counts. The
    /// returned machine has no rotors inserted yet.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] wrapping the first engine rejection.
    pub fn build(&self) -> Result<Machine, ConfigError> {
        let alphabet = Arc::new(Alphabet::new(&self.alphabet)?);
        let mut rotors = Vec::with_capacity(self.rotors.len());
        for descriptor in &self.rotors {
            let wiring = Permutation::new(&descriptor.cycles, Arc::clone(&alphabet)).map_err(
                |source| ConfigError::Cycles {
                    rotor: descriptor.name.clone(),
                    source,
                },
            )?;
            let wiring = Arc::new(wiring);
            let rotor = match &descriptor.class {
                RotorClass::Reflector => Rotor::reflector(&descriptor.name, wiring)?,
                RotorClass::Fixed => Rotor::fixed(&descriptor.name, wiring),
                RotorClass::Moving { notches } => {
                    Rotor::moving(&descriptor.name, wiring, notches)?
                }
            };
            rotors.push(rotor);
        }
        let inventory = Arc::new(RotorInventory::new(rotors)?);
        Ok(Machine::new(
            alphabet,
            self.num_rotors,
            self.num_pawls,
            inventory,
        )?)
    }
}

/// Parse the `R P` count line.
fn parse_counts(line_no: usize, line: &str) -> Result<(usize, usize), ConfigError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(ConfigError::BadCounts {
            line: line_no,
            detail: format!("expected two integers, got {} tokens", tokens.len()),
        });
    }
    let parse = |token: &str| {
        token.parse::<usize>().map_err(|_| ConfigError::BadCounts {
            line: line_no,
            detail: format!("{token:?} is not an integer"),
        })
    };
    Ok((parse(tokens[0])?, parse(tokens[1])?))
}

/// Parse a rotor type token: `R`, `N`, or `M<notches>`.
fn parse_class(line_no: usize, name: &str, token: &str) -> Result<RotorClass, ConfigError> {
    let bad = |detail: String| ConfigError::RotorLine {
        line: line_no,
        detail,
    };
    match token.chars().next() {
        Some('M') => Ok(RotorClass::Moving {
            notches: token[1..].to_string(),
        }),
        Some('R') if token.len() == 1 => Ok(RotorClass::Reflector),
        Some('N') if token.len() == 1 => Ok(RotorClass::Fixed),
        Some('R' | 'N') => Err(bad(format!(
            "rotor {name:?}: type {token:?} takes no notches"
        ))),
        _ => Err(bad(format!("rotor {name:?}: unknown type token {token:?}"))),
    }
}
