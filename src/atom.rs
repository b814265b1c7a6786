use crate::element::Element;

/// Label of a vertex in a [`Graph`](crate::Graph).
///
/// `Atom` stores what a SMILES atom token says about the atom and nothing
/// more. Hydrogens are either written (`Some`, bracket atoms) or implied by
/// the default valence of an organic-subset atom (`None`); the implied count
/// depends on the bonds and is resolved by
/// [`Graph::hydrogens`](crate::Graph::hydrogens).
///
/// # Examples
///
/// ```
/// use chemcrab_smiles::{Atom, Element};
///
/// let ammonium = Atom {
///     element: Element::N,
///     charge: 1,
///     hydrogens: Some(4),
///     ..Atom::bracket(Element::N)
/// };
/// assert!(ammonium.bracket);
/// assert_eq!(ammonium.hydrogens, Some(4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Atom {
    pub element: Element,
    /// Mass number, `None` for natural abundance.
    pub isotope: Option<u16>,
    pub charge: i8,
    /// Written hydrogen count; `None` means implied by valence.
    pub hydrogens: Option<u8>,
    /// Lower-case (aromatic) atom.
    pub aromatic: bool,
    /// Atom class (`:n`), `0` when absent.
    pub atom_class: u16,
    /// Verbatim text of an arbitrary atom such as `[R1]`.
    pub label: Option<String>,
    /// Written between square brackets.
    pub bracket: bool,
}

impl Default for Atom {
    fn default() -> Self {
        Self::organic(Element::Unknown)
    }
}

impl Atom {
    /// Bare organic-subset atom, e.g. `C` or `Cl`.
    pub fn organic(element: Element) -> Self {
        Self {
            element,
            isotope: None,
            charge: 0,
            hydrogens: None,
            aromatic: false,
            atom_class: 0,
            label: None,
            bracket: false,
        }
    }

    /// Bare aromatic atom, e.g. `c` or `n`.
    pub fn aromatic(element: Element) -> Self {
        Self {
            aromatic: true,
            ..Self::organic(element)
        }
    }

    /// Bracket atom with no hydrogens, charge or isotope, e.g. `[Fe]`.
    pub fn bracket(element: Element) -> Self {
        Self {
            hydrogens: Some(0),
            bracket: true,
            ..Self::organic(element)
        }
    }

    /// Arbitrary atom carrying an unparsed label, e.g. `[R1]`.
    pub fn arbitrary(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::bracket(Element::Unknown)
        }
    }

    pub fn is_arbitrary(&self) -> bool {
        self.label.is_some()
    }

    /// Symbol as it would be written, honouring the aromatic flag.
    pub fn symbol(&self) -> String {
        if let Some(label) = &self.label {
            return label.clone();
        }
        let symbol = self.element.symbol();
        if self.aromatic {
            symbol.to_ascii_lowercase()
        } else {
            symbol.to_string()
        }
    }

    /// Whether the atom can only be written in brackets.
    pub fn needs_bracket(&self) -> bool {
        !self.element.is_organic_subset()
            || self.label.is_some()
            || self.isotope.is_some()
            || self.charge != 0
            || self.atom_class != 0
    }

    /// The same atom with the aromatic flag set.
    pub fn to_aromatic(&self) -> Atom {
        Atom {
            aromatic: true,
            ..self.clone()
        }
    }

    /// The same atom with the aromatic flag cleared.
    pub fn to_aliphatic(&self) -> Atom {
        Atom {
            aromatic: false,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn organic_atoms_imply_hydrogens() {
        let c = Atom::organic(Element::C);
        assert_eq!(c.hydrogens, None);
        assert!(!c.bracket);
        assert!(!c.needs_bracket());
        assert_eq!(c.symbol(), "C");
    }

    #[test]
    fn aromatic_symbol_is_lower_case() {
        assert_eq!(Atom::aromatic(Element::Se).symbol(), "se");
        assert_eq!(Atom::aromatic(Element::C).to_aliphatic().symbol(), "C");
    }

    #[test]
    fn bracket_requirements() {
        assert!(Atom::bracket(Element::Fe).needs_bracket());
        let c13 = Atom {
            isotope: Some(13),
            ..Atom::organic(Element::C)
        };
        assert!(c13.needs_bracket());
        let charged = Atom {
            charge: -1,
            ..Atom::organic(Element::O)
        };
        assert!(charged.needs_bracket());
    }

    #[test]
    fn arbitrary_atoms_keep_their_label() {
        let r = Atom::arbitrary("R1");
        assert!(r.is_arbitrary());
        assert_eq!(r.element, Element::Unknown);
        assert_eq!(r.symbol(), "R1");
        assert!(r.needs_bracket());
    }
}
