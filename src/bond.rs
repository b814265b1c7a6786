use std::fmt;

/// Label of an edge as written in SMILES.
///
/// `Implicit` is an unwritten bond between two atoms (single, or aromatic
/// when both ends are aromatic). `Up` and `Down` are the directional single
/// bonds `/` and `\`; they only have meaning relative to the endpoint they
/// are read from, see [`Edge::bond_from`](crate::Edge::bond_from).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Bond {
    /// `.` disconnection.
    Dot,
    #[default]
    Implicit,
    /// Unwritten bond between two aromatic atoms.
    ImplicitAromatic,
    Single,
    Double,
    Triple,
    Quadruple,
    Aromatic,
    Up,
    Down,
}

impl Bond {
    /// Bond order contributed to each endpoint's valence.
    pub fn order(self) -> u8 {
        match self {
            Bond::Dot => 0,
            Bond::Implicit
            | Bond::ImplicitAromatic
            | Bond::Single
            | Bond::Aromatic
            | Bond::Up
            | Bond::Down => 1,
            Bond::Double => 2,
            Bond::Triple => 3,
            Bond::Quadruple => 4,
        }
    }

    /// The label as seen from the other endpoint.
    pub fn inverse(self) -> Bond {
        match self {
            Bond::Up => Bond::Down,
            Bond::Down => Bond::Up,
            b => b,
        }
    }

    /// Written symbol; empty for implicit bonds.
    pub fn symbol(self) -> &'static str {
        match self {
            Bond::Dot => ".",
            Bond::Implicit | Bond::ImplicitAromatic => "",
            Bond::Single => "-",
            Bond::Double => "=",
            Bond::Triple => "#",
            Bond::Quadruple => "$",
            Bond::Aromatic => ":",
            Bond::Up => "/",
            Bond::Down => "\\",
        }
    }

    pub fn from_symbol(ch: char) -> Option<Bond> {
        Some(match ch {
            '.' => Bond::Dot,
            '-' => Bond::Single,
            '=' => Bond::Double,
            '#' => Bond::Triple,
            '$' => Bond::Quadruple,
            ':' => Bond::Aromatic,
            '/' => Bond::Up,
            '\\' => Bond::Down,
            _ => return None,
        })
    }

    pub fn is_directional(self) -> bool {
        matches!(self, Bond::Up | Bond::Down)
    }

    /// Bonds that may take part in a delocalized (alternating) system.
    pub fn is_aromatic(self) -> bool {
        matches!(self, Bond::Aromatic | Bond::ImplicitAromatic)
    }
}

impl fmt::Display for Bond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directional_bonds_invert() {
        assert_eq!(Bond::Up.inverse(), Bond::Down);
        assert_eq!(Bond::Down.inverse(), Bond::Up);
        assert_eq!(Bond::Double.inverse(), Bond::Double);
        assert_eq!(Bond::Implicit.inverse(), Bond::Implicit);
    }

    #[test]
    fn orders() {
        assert_eq!(Bond::Dot.order(), 0);
        assert_eq!(Bond::Implicit.order(), 1);
        assert_eq!(Bond::Up.order(), 1);
        assert_eq!(Bond::Double.order(), 2);
        assert_eq!(Bond::Quadruple.order(), 4);
    }

    #[test]
    fn symbols_parse_back() {
        for b in [
            Bond::Dot,
            Bond::Single,
            Bond::Double,
            Bond::Triple,
            Bond::Quadruple,
            Bond::Aromatic,
            Bond::Up,
            Bond::Down,
        ] {
            let ch = b.symbol().chars().next().unwrap();
            assert_eq!(Bond::from_symbol(ch), Some(b));
        }
        assert_eq!(Bond::from_symbol('x'), None);
        assert_eq!(Bond::Implicit.to_string(), "");
    }
}
