use std::fmt;

use thiserror::Error;

use crate::bond::Bond;
use crate::configuration::Configuration;
use crate::graph::GraphError;

/// Errors produced when reading or writing a SMILES string.
///
/// Every variant raised while reading carries the character offset of the
/// offending token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SmilesError {
    /// The input string was empty or contained only whitespace.
    #[error("empty SMILES string")]
    EmptyInput,
    /// An unexpected character was encountered at the given position.
    #[error("unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { pos: usize, ch: char },
    /// An unrecognized element symbol was found.
    #[error("invalid element '{text}' at position {pos}")]
    InvalidElement { pos: usize, text: String },
    /// A lower-case symbol was used for an element that cannot be aromatic.
    #[error("element '{text}' at position {pos} cannot be aromatic")]
    InvalidAromatic { pos: usize, text: String },
    /// A bracket atom `[` was opened but never closed with `]`.
    #[error("unclosed bracket atom starting at position {pos}")]
    UnclosedBracket { pos: usize },
    /// A ring-opening digit was never matched by a ring-closing digit.
    #[error("unclosed ring {digit} opened at position {pos}")]
    UnclosedRing { digit: u16, pos: usize },
    /// A parenthesis was opened without a matching close, or vice versa.
    #[error("unmatched parenthesis at position {pos}")]
    UnmatchedParen { pos: usize },
    /// A branch was opened and immediately closed.
    #[error("empty branch at position {pos}")]
    EmptyBranch { pos: usize },
    /// A charge specifier inside a bracket atom could not be parsed.
    #[error("invalid charge at position {pos}")]
    InvalidCharge { pos: usize },
    /// An isotope number overflowed.
    #[error("invalid isotope at position {pos}")]
    InvalidIsotope { pos: usize },
    /// An atom class (`:n`) could not be parsed.
    #[error("invalid atom class at position {pos}")]
    InvalidAtomClass { pos: usize },
    /// `%` was not followed by two digits.
    #[error("invalid ring number at position {pos}")]
    InvalidRingNumber { pos: usize },
    /// A ring digit, bond or branch appeared before any atom.
    #[error("'{ch}' at position {pos} has no preceding atom")]
    NoPrecedingAtom { pos: usize, ch: char },
    /// Two bond symbols in a row, e.g. `C=-C`.
    #[error("duplicate bond symbol at position {pos}")]
    DuplicateBond { pos: usize },
    /// A bond symbol not followed by an atom or ring number.
    #[error("bond symbol at position {pos} is not followed by an atom")]
    DanglingBond { pos: usize },
    /// Both ends of a ring closure specify incompatible bond types.
    #[error("conflicting bond types '{first}' and '{second}' on ring closure {digit} at position {pos}")]
    RingBondConflict {
        digit: u16,
        pos: usize,
        first: Bond,
        second: Bond,
    },
    /// A ring closure that bonds an atom to itself, e.g. `C11`.
    #[error("ring closure {digit} at position {pos} bonds an atom to itself")]
    RingSelfLoop { digit: u16, pos: usize },
    /// A ring closure duplicating an existing bond, e.g. `C1C1`.
    #[error("ring closure {digit} at position {pos} duplicates an existing bond")]
    RingParallelEdge { digit: u16, pos: usize },
    /// A malformed or out-of-range stereo descriptor such as `@T` or `@TB21`.
    #[error("invalid stereo descriptor '{text}' at position {pos}")]
    InvalidConfiguration { pos: usize, text: String },
    /// A stereo descriptor on an atom with the wrong number of neighbors.
    #[error("{configuration} at position {pos} needs {expected} neighbors but the atom has {found}")]
    StereoNeighborCount {
        pos: usize,
        configuration: Configuration,
        expected: usize,
        found: usize,
    },
    /// An allene descriptor whose cumulated system could not be resolved.
    #[error("invalid extended tetrahedral center at position {pos}: {reason}")]
    InvalidAllene { pos: usize, reason: String },
    /// An atom with two directional bonds of the same kind.
    #[error("conflicting directional bonds on the atom at position {pos}")]
    DirectionalConflict { pos: usize },
    /// More rings open at once than the notation can number.
    #[error("more than {max} ring closures open at once")]
    RingNumbersExhausted { max: usize },
    /// A bracket atom can only be written with 0 to 9 hydrogens.
    #[error("vertex {u} has {count} hydrogens, more than a bracket atom can hold")]
    TooManyHydrogens { u: usize, count: u8 },
    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl SmilesError {
    /// Character offset of the problem, when there is one.
    pub fn position(&self) -> Option<usize> {
        use SmilesError::*;
        match self {
            UnexpectedChar { pos, .. }
            | InvalidElement { pos, .. }
            | InvalidAromatic { pos, .. }
            | UnclosedBracket { pos }
            | UnclosedRing { pos, .. }
            | UnmatchedParen { pos }
            | EmptyBranch { pos }
            | InvalidCharge { pos }
            | InvalidIsotope { pos }
            | InvalidAtomClass { pos }
            | InvalidRingNumber { pos }
            | NoPrecedingAtom { pos, .. }
            | DuplicateBond { pos }
            | DanglingBond { pos }
            | RingBondConflict { pos, .. }
            | RingSelfLoop { pos, .. }
            | RingParallelEdge { pos, .. }
            | InvalidConfiguration { pos, .. }
            | StereoNeighborCount { pos, .. }
            | InvalidAllene { pos, .. }
            | DirectionalConflict { pos } => Some(*pos),
            EmptyInput | RingNumbersExhausted { .. } | TooManyHydrogens { .. } | Graph(_) => None,
        }
    }
}

/// A problem the loose parser recovered from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmilesWarning {
    pub pos: usize,
    pub message: String,
}

impl SmilesWarning {
    pub fn new(pos: usize, message: impl Into<String>) -> Self {
        Self {
            pos,
            message: message.into(),
        }
    }
}

impl From<&SmilesError> for SmilesWarning {
    fn from(e: &SmilesError) -> Self {
        Self::new(e.position().unwrap_or(0), e.to_string())
    }
}

impl fmt::Display for SmilesWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (position {})", self.message, self.pos)
    }
}
