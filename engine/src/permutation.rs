//! `Permutation`: a cycle-notation bijection over an alphabet's index space.
//!
//! A permutation is parsed from a string of parenthesized cycles,
//! `"(cccc) (cc) ..."`: each cycle `(c0 c1 .. cm)` maps `c0→c1→..→cm→c0`.
//! Characters absent from every cycle map to themselves. Whitespace is
//! ignored; everything else outside parentheses is rejected.
//!
//! Parsing is fail-closed: unbalanced parentheses, characters outside the
//! alphabet, and characters repeated across cycles abort construction.
//! A partially-built permutation would silently corrupt every character
//! a machine later converts, so no such value can exist.
//!
//! Forward and inverse tables are dense `Vec<usize>` lookups satisfying
//! `inverse[forward[i]] == i` for every index.

use std::fmt;
use std::sync::Arc;

use crate::alphabet::{Alphabet, AlphabetError};

/// A bijection on alphabet indices with forward and inverse lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    alphabet: Arc<Alphabet>,
    forward: Vec<usize>,
    inverse: Vec<usize>,
}

/// Typed failure for cycle-notation parsing. Fail-closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermutationError {
    /// A `)` appeared with no matching `(`.
    UnopenedCycle,
    /// A `(` was never closed before the end of the string.
    UnclosedCycle,
    /// A `(` appeared inside an open cycle.
    NestedCycle,
    /// A cycle referenced a character outside the alphabet.
    CharOutsideAlphabet { ch: char },
    /// A character appeared more than once across all cycles.
    RepeatedChar { ch: char },
    /// A non-whitespace character appeared outside any cycle.
    StrayChar { ch: char },
}

impl fmt::Display for PermutationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnopenedCycle => write!(f, "cycle notation: ')' with no matching '('"),
            Self::UnclosedCycle => write!(f, "cycle notation: '(' was never closed"),
            Self::NestedCycle => write!(f, "cycle notation: '(' inside an open cycle"),
            Self::CharOutsideAlphabet { ch } => {
                write!(f, "cycle notation: {ch:?} is not in the alphabet")
            }
            Self::RepeatedChar { ch } => {
                write!(f, "cycle notation: {ch:?} appears in more than one position")
            }
            Self::StrayChar { ch } => {
                write!(f, "cycle notation: unexpected {ch:?} outside parentheses")
            }
        }
    }
}

impl std::error::Error for PermutationError {}

impl Permutation {
    /// Parse a permutation from cycle notation over `alphabet`.
    ///
    /// # Errors
    ///
    /// Returns [`PermutationError`] on malformed cycle syntax: unbalanced
    /// or nested parentheses, characters outside the alphabet, repeated
    /// characters, or stray text between cycles.
    pub fn new(cycles: &str, alphabet: Arc<Alphabet>) -> Result<Self, PermutationError> {
        let n = alphabet.size();
        let mut forward: Vec<Option<usize>> = vec![None; n];
        let mut inverse: Vec<Option<usize>> = vec![None; n];
        let mut open: Option<Vec<usize>> = None;

        for ch in cycles.chars() {
            match ch {
                '(' => {
                    if open.is_some() {
                        return Err(PermutationError::NestedCycle);
                    }
                    open = Some(Vec::new());
                }
                ')' => {
                    let cycle = open.take().ok_or(PermutationError::UnopenedCycle)?;
                    close_cycle(&cycle, &mut forward, &mut inverse);
                }
                ch if ch.is_whitespace() => {}
                ch => {
                    let Some(cycle) = open.as_mut() else {
                        return Err(PermutationError::StrayChar { ch });
                    };
                    let index = alphabet
                        .index_of(ch)
                        .ok_or(PermutationError::CharOutsideAlphabet { ch })?;
                    if forward[index].is_some() || cycle.contains(&index) {
                        return Err(PermutationError::RepeatedChar { ch });
                    }
                    cycle.push(index);
                }
            }
        }
        if open.is_some() {
            return Err(PermutationError::UnclosedCycle);
        }

        // Close the permutation to totality: unassigned indices are fixed points.
        let forward: Vec<usize> = forward
            .into_iter()
            .enumerate()
            .map(|(i, target)| target.unwrap_or(i))
            .collect();
        let inverse: Vec<usize> = inverse
            .into_iter()
            .enumerate()
            .map(|(i, source)| source.unwrap_or(i))
            .collect();

        Ok(Self {
            alphabet,
            forward,
            inverse,
        })
    }

    /// The identity permutation (every index maps to itself).
    #[must_use]
    pub fn identity(alphabet: Arc<Alphabet>) -> Self {
        let n = alphabet.size();
        Self {
            alphabet,
            forward: (0..n).collect(),
            inverse: (0..n).collect(),
        }
    }

    /// Alphabet size. A permutation always spans its whole alphabet.
    #[must_use]
    pub fn size(&self) -> usize {
        self.forward.len()
    }

    /// True mathematical modulo of `p` into `[0, size)`, including for
    /// negative `p`.
    #[must_use]
    pub fn wrap(&self, p: i64) -> usize {
        #[allow(clippy::cast_possible_wrap)]
        let n = self.forward.len() as i64;
        #[allow(clippy::cast_sign_loss)]
        {
            p.rem_euclid(n) as usize
        }
    }

    /// Apply the forward mapping to index `p` (taken modulo the size).
    #[must_use]
    pub fn permute(&self, p: usize) -> usize {
        self.forward[p % self.forward.len()]
    }

    /// Apply the inverse mapping to index `c` (taken modulo the size).
    #[must_use]
    pub fn invert(&self, c: usize) -> usize {
        self.inverse[c % self.inverse.len()]
    }

    /// Apply the forward mapping to a character of the alphabet.
    ///
    /// Agrees with the index form:
    /// `to_int(permute_char(to_char(i))) == permute(i)`.
    ///
    /// # Errors
    ///
    /// Returns [`AlphabetError::CharNotInAlphabet`] if `ch` is not a member.
    pub fn permute_char(&self, ch: char) -> Result<char, AlphabetError> {
        let index = self.alphabet.to_int(ch)?;
        self.alphabet.to_char(self.forward[index])
    }

    /// Apply the inverse mapping to a character of the alphabet.
    ///
    /// # Errors
    ///
    /// Returns [`AlphabetError::CharNotInAlphabet`] if `ch` is not a member.
    pub fn invert_char(&self, ch: char) -> Result<char, AlphabetError> {
        let index = self.alphabet.to_int(ch)?;
        self.alphabet.to_char(self.inverse[index])
    }

    /// True iff the forward mapping has no fixed point.
    ///
    /// Reflector wirings must be derangements; plugboards need not be.
    #[must_use]
    pub fn derangement(&self) -> bool {
        self.forward.iter().enumerate().all(|(i, &target)| i != target)
    }

    /// The alphabet this permutation spans.
    #[must_use]
    pub fn alphabet(&self) -> &Arc<Alphabet> {
        &self.alphabet
    }
}

/// Wire one closed cycle into the forward and inverse tables.
///
/// A singleton cycle maps its element to itself in both directions.
/// Empty cycles (`"()"`) are accepted as no-ops.
fn close_cycle(cycle: &[usize], forward: &mut [Option<usize>], inverse: &mut [Option<usize>]) {
    let m = cycle.len();
    for (i, &from) in cycle.iter().enumerate() {
        let to = cycle[(i + 1) % m];
        forward[from] = Some(to);
        inverse[to] = Some(from);
    }
}
