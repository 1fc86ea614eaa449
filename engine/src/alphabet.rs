//! `Alphabet`: the ordered set of encodable symbols.
//!
//! An alphabet maps characters to dense indices and back. Index = position
//! in the construction string. The bijection is enforced at construction
//! time: whitespace and duplicate characters are rejected, so every later
//! lookup is either an exact hit or a typed failure.
//!
//! Alphabets are immutable after construction and shared read-only via
//! `Arc` by the permutations, rotors, and machines built over them.

use std::collections::BTreeMap;
use std::fmt;

/// An ordered, duplicate-free set of non-whitespace characters.
///
/// The reverse index is stored in a `BTreeMap` so membership checks and
/// `to_int` are O(log n) regardless of alphabet size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
    index: BTreeMap<char, usize>,
}

/// Typed failure for alphabet construction and lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlphabetError {
    /// The construction string was empty.
    Empty,
    /// The construction string contained a whitespace character.
    WhitespaceChar { ch: char },
    /// The construction string repeated a character.
    DuplicateChar { ch: char },
    /// A queried character is not a member of the alphabet.
    CharNotInAlphabet { ch: char },
    /// A queried index is outside `[0, size)`.
    IndexOutOfRange { index: usize, size: usize },
}

impl fmt::Display for AlphabetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "alphabet must not be empty"),
            Self::WhitespaceChar { ch } => {
                write!(f, "alphabet must not contain whitespace: {ch:?}")
            }
            Self::DuplicateChar { ch } => {
                write!(f, "alphabet must not repeat characters: {ch:?}")
            }
            Self::CharNotInAlphabet { ch } => {
                write!(f, "character {ch:?} is not in the alphabet")
            }
            Self::IndexOutOfRange { index, size } => {
                write!(f, "index {index} out of range for alphabet of size {size}")
            }
        }
    }
}

impl std::error::Error for AlphabetError {}

impl Alphabet {
    /// Build an alphabet from an ordered character string.
    ///
    /// # Errors
    ///
    /// Returns [`AlphabetError`] if the string is empty, contains
    /// whitespace, or repeats a character.
    pub fn new(chars: &str) -> Result<Self, AlphabetError> {
        if chars.is_empty() {
            return Err(AlphabetError::Empty);
        }
        let mut ordered = Vec::new();
        let mut index = BTreeMap::new();
        for ch in chars.chars() {
            if ch.is_whitespace() {
                return Err(AlphabetError::WhitespaceChar { ch });
            }
            if index.insert(ch, ordered.len()).is_some() {
                return Err(AlphabetError::DuplicateChar { ch });
            }
            ordered.push(ch);
        }
        Ok(Self {
            chars: ordered,
            index,
        })
    }

    /// The default upper-case A-Z alphabet.
    #[must_use]
    pub fn upper() -> Self {
        // Static string passes every construction check.
        match Self::new("ABCDEFGHIJKLMNOPQRSTUVWXYZ") {
            Ok(alphabet) => alphabet,
            Err(_) => unreachable!("default alphabet is valid"),
        }
    }

    /// Number of symbols.
    #[must_use]
    pub fn size(&self) -> usize {
        self.chars.len()
    }

    /// Membership test.
    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        self.index.contains_key(&ch)
    }

    /// The character at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`AlphabetError::IndexOutOfRange`] if `index >= size()`.
    pub fn to_char(&self, index: usize) -> Result<char, AlphabetError> {
        self.chars
            .get(index)
            .copied()
            .ok_or(AlphabetError::IndexOutOfRange {
                index,
                size: self.chars.len(),
            })
    }

    /// The index of `ch`. Inverse of [`to_char`](Self::to_char).
    ///
    /// # Errors
    ///
    /// Returns [`AlphabetError::CharNotInAlphabet`] if `ch` is not a member.
    pub fn to_int(&self, ch: char) -> Result<usize, AlphabetError> {
        self.index
            .get(&ch)
            .copied()
            .ok_or(AlphabetError::CharNotInAlphabet { ch })
    }

    /// The index of `ch`, or `None` if absent.
    ///
    /// Lookup-only form for callers that treat absence as flow control
    /// rather than a hard error.
    #[must_use]
    pub fn index_of(&self, ch: char) -> Option<usize> {
        self.index.get(&ch).copied()
    }

    /// The characters in index order.
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}
