//! `RotorInventory`: the immutable set of rotor templates, keyed by name.
//!
//! Machines select rotors from an inventory by case-insensitive name.
//! The canonical key is the upper-cased name; duplicate canonical names
//! are rejected once at build time, so every later lookup is unambiguous.
//!
//! Templates are immutable. Insertion clones a template into a machine
//! slot, so one inventory may back any number of machine instances
//! (shared behind `Arc`) without synchronization.

use std::collections::BTreeMap;
use std::fmt;

use crate::rotor::Rotor;

/// Map from canonical (upper-cased) rotor name to template.
#[derive(Debug, Clone)]
pub struct RotorInventory {
    rotors: BTreeMap<String, Rotor>,
}

/// Typed failure for inventory construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// Two templates share a canonical name.
    DuplicateName { name: String },
}

impl fmt::Display for InventoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateName { name } => {
                write!(f, "duplicate rotor name {name:?} in inventory")
            }
        }
    }
}

impl std::error::Error for InventoryError {}

impl RotorInventory {
    /// Build an inventory from rotor templates.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::DuplicateName`] if two templates collide
    /// on their canonical (case-folded) name.
    pub fn new(rotors: Vec<Rotor>) -> Result<Self, InventoryError> {
        let mut map = BTreeMap::new();
        for rotor in rotors {
            let key = canonical(rotor.name());
            if map.contains_key(&key) {
                return Err(InventoryError::DuplicateName {
                    name: rotor.name().to_string(),
                });
            }
            map.insert(key, rotor);
        }
        Ok(Self { rotors: map })
    }

    /// Look up a template by name, case-insensitively.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Rotor> {
        self.rotors.get(&canonical(name))
    }

    /// Whether a name is present, case-insensitively.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.rotors.contains_key(&canonical(name))
    }

    /// Number of templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rotors.len()
    }

    /// Whether the inventory is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rotors.is_empty()
    }

    /// Templates in canonical-name order.
    pub fn iter(&self) -> impl Iterator<Item = &Rotor> {
        self.rotors.values()
    }
}

/// Canonical key for case-insensitive rotor lookup.
fn canonical(name: &str) -> String {
    name.to_uppercase()
}
