//! The built-in naval machine description.
//!
//! Five slots, three pawls, and the twelve rotors of the German naval
//! fleet: moving rotors I through VIII, the fixed thin rotors Beta and
//! Gamma, and the thin reflectors B and C. Wiring is given in cycle
//! notation over the upper-case Latin alphabet.

use enigma_engine::machine::Machine;

use crate::descriptor::{ConfigError, MachineDescription};

/// Description text for the naval machine, in the format accepted by
/// [`MachineDescription::parse`].
pub const NAVAL_DESCRIPTION: &str = "\
ABCDEFGHIJKLMNOPQRSTUVWXYZ
5 3
I     MQ   (AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)
II    ME   (FIXVYOMW) (CDKLHUP) (ESZ) (BJ) (GR) (NT) (A) (Q)
III   MV   (ABDHPEJT) (CFLVMZOYQIRWUKXSG) (N)
IV    MJ   (AEPLIYWCOXMRFZBSTGJQNH) (DV) (KU)
V     MZ   (AVOLDRWFIUQ) (BZKSMNHYC) (EGTJPX)
VI    MZM  (AJQDVLEOZWIYTS) (CGMNHFUX) (BPRK)
VII   MZM  (ANOUPFRIMBZTLWKSVEGCJYDHXQ)
VIII  MZM  (AFLSETWUNDHOZVICQ) (BKJ) (GXY) (MPR)
Beta  N    (ALBEVFCYODJWUGNMQTZSKPR) (HIX)
Gamma N    (AFNIRLBSQWVXGUZDKMTPCOYJHE)
B     R    (AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO)
           (MP) (RX) (SZ) (TV)
C     R    (AR) (BD) (CO) (EJ) (FN) (GT) (HK) (IV) (LM)
           (PW) (QZ) (SX) (UY)
";

/// The naval machine description.
#[must_use]
pub fn naval() -> MachineDescription {
    match MachineDescription::parse(NAVAL_DESCRIPTION) {
        Ok(description) => description,
        Err(_) => unreachable!("built-in description is valid"),
    }
}

/// Build a naval machine shell: five slots, three pawls, no rotors
/// inserted yet.
///
/// # Errors
///
/// Returns [`ConfigError`] if assembly fails; the built-in description
/// is valid, so this only surfaces engine regressions.
pub fn naval_machine() -> Result<Machine, ConfigError> {
    naval().build()
}
