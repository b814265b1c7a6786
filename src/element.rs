/// Chemical elements as they appear in SMILES atoms.
///
/// `Unknown` is the `*` wildcard; it also backs arbitrary (unparsed) atom
/// labels accepted in loose mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Element {
    Unknown = 0,
    H = 1,
    He = 2,
    Li = 3,
    Be = 4,
    B = 5,
    C = 6,
    N = 7,
    O = 8,
    F = 9,
    Ne = 10,
    Na = 11,
    Mg = 12,
    Al = 13,
    Si = 14,
    P = 15,
    S = 16,
    Cl = 17,
    Ar = 18,
    K = 19,
    Ca = 20,
    Sc = 21,
    Ti = 22,
    V = 23,
    Cr = 24,
    Mn = 25,
    Fe = 26,
    Co = 27,
    Ni = 28,
    Cu = 29,
    Zn = 30,
    Ga = 31,
    Ge = 32,
    As = 33,
    Se = 34,
    Br = 35,
    Kr = 36,
    Rb = 37,
    Sr = 38,
    Y = 39,
    Zr = 40,
    Nb = 41,
    Mo = 42,
    Tc = 43,
    Ru = 44,
    Rh = 45,
    Pd = 46,
    Ag = 47,
    Cd = 48,
    In = 49,
    Sn = 50,
    Sb = 51,
    Te = 52,
    I = 53,
    Xe = 54,
    Cs = 55,
    Ba = 56,
    La = 57,
    Ce = 58,
    Pr = 59,
    Nd = 60,
    Pm = 61,
    Sm = 62,
    Eu = 63,
    Gd = 64,
    Tb = 65,
    Dy = 66,
    Ho = 67,
    Er = 68,
    Tm = 69,
    Yb = 70,
    Lu = 71,
    Hf = 72,
    Ta = 73,
    W = 74,
    Re = 75,
    Os = 76,
    Ir = 77,
    Pt = 78,
    Au = 79,
    Hg = 80,
    Tl = 81,
    Pb = 82,
    Bi = 83,
    Po = 84,
    At = 85,
    Rn = 86,
    Fr = 87,
    Ra = 88,
    Ac = 89,
    Th = 90,
    Pa = 91,
    U = 92,
    Np = 93,
    Pu = 94,
    Am = 95,
    Cm = 96,
    Bk = 97,
    Cf = 98,
    Es = 99,
    Fm = 100,
    Md = 101,
    No = 102,
    Lr = 103,
    Rf = 104,
    Db = 105,
    Sg = 106,
    Bh = 107,
    Hs = 108,
    Mt = 109,
    Ds = 110,
    Rg = 111,
    Cn = 112,
    Nh = 113,
    Fl = 114,
    Mc = 115,
    Lv = 116,
    Ts = 117,
    Og = 118,
}

impl Element {
    pub fn from_atomic_num(n: u8) -> Option<Element> {
        ELEMENTS.get(n as usize).copied()
    }

    pub fn from_symbol(s: &str) -> Option<Element> {
        SYMBOLS
            .iter()
            .position(|sym| *sym == s)
            .map(|i| ELEMENTS[i])
    }

    /// Element for a lower-case aromatic symbol such as `c` or `se`.
    pub fn from_aromatic_symbol(s: &str) -> Option<Element> {
        let mut chars = s.chars();
        let first = chars.next()?.to_ascii_uppercase();
        let symbol: String = std::iter::once(first).chain(chars).collect();
        Element::from_symbol(&symbol).filter(|e| e.aromatic_allowed())
    }

    pub fn atomic_num(self) -> u8 {
        self as u8
    }

    pub fn symbol(self) -> &'static str {
        SYMBOLS[self as usize]
    }

    pub fn default_valences(self) -> &'static [u8] {
        match self {
            Element::H => &[1],
            Element::B => &[3],
            Element::C => &[4],
            Element::N => &[3, 5],
            Element::O => &[2],
            Element::F | Element::Cl | Element::Br | Element::At => &[1],
            Element::Si | Element::Ge => &[4],
            Element::P | Element::As => &[3, 5],
            Element::S | Element::Se | Element::Te => &[2, 4, 6],
            Element::I => &[1, 3, 5, 7],
            _ => &[],
        }
    }

    /// Elements that may be written without brackets.
    pub fn is_organic_subset(self) -> bool {
        matches!(
            self,
            Element::Unknown
                | Element::B
                | Element::C
                | Element::N
                | Element::O
                | Element::P
                | Element::S
                | Element::F
                | Element::Cl
                | Element::Br
                | Element::I
        )
    }

    /// Elements with a lower-case (aromatic) spelling.
    pub fn aromatic_allowed(self) -> bool {
        matches!(
            self,
            Element::Unknown
                | Element::B
                | Element::C
                | Element::N
                | Element::O
                | Element::P
                | Element::S
                | Element::Se
                | Element::As
                | Element::Te
        )
    }

    /// Hydrogens implied on a bare atom with the given bond-order sum.
    ///
    /// Picks the lowest default valence that accommodates the bonds; an
    /// aromatic atom gives one of its free valences to the delocalized
    /// system. Elements without default valences imply no hydrogens.
    pub fn implied_hydrogens(self, bond_order_sum: u8, aromatic: bool) -> u8 {
        let valences = self.default_valences();
        let Some(&target) = valences.iter().find(|&&v| v >= bond_order_sum) else {
            return 0;
        };
        let mut h = target - bond_order_sum;
        if aromatic && h > 0 {
            h -= 1;
        }
        h
    }
}

static ELEMENTS: [Element; 119] = [
    Element::Unknown,
    Element::H, Element::He, Element::Li, Element::Be, Element::B, Element::C,
    Element::N, Element::O, Element::F, Element::Ne, Element::Na, Element::Mg,
    Element::Al, Element::Si, Element::P, Element::S, Element::Cl, Element::Ar,
    Element::K, Element::Ca, Element::Sc, Element::Ti, Element::V, Element::Cr,
    Element::Mn, Element::Fe, Element::Co, Element::Ni, Element::Cu, Element::Zn,
    Element::Ga, Element::Ge, Element::As, Element::Se, Element::Br, Element::Kr,
    Element::Rb, Element::Sr, Element::Y, Element::Zr, Element::Nb, Element::Mo,
    Element::Tc, Element::Ru, Element::Rh, Element::Pd, Element::Ag, Element::Cd,
    Element::In, Element::Sn, Element::Sb, Element::Te, Element::I, Element::Xe,
    Element::Cs, Element::Ba, Element::La, Element::Ce, Element::Pr, Element::Nd,
    Element::Pm, Element::Sm, Element::Eu, Element::Gd, Element::Tb, Element::Dy,
    Element::Ho, Element::Er, Element::Tm, Element::Yb, Element::Lu, Element::Hf,
    Element::Ta, Element::W, Element::Re, Element::Os, Element::Ir, Element::Pt,
    Element::Au, Element::Hg, Element::Tl, Element::Pb, Element::Bi, Element::Po,
    Element::At, Element::Rn, Element::Fr, Element::Ra, Element::Ac, Element::Th,
    Element::Pa, Element::U, Element::Np, Element::Pu, Element::Am, Element::Cm,
    Element::Bk, Element::Cf, Element::Es, Element::Fm, Element::Md, Element::No,
    Element::Lr, Element::Rf, Element::Db, Element::Sg, Element::Bh, Element::Hs,
    Element::Mt, Element::Ds, Element::Rg, Element::Cn, Element::Nh, Element::Fl,
    Element::Mc, Element::Lv, Element::Ts, Element::Og,
];

static SYMBOLS: [&str; 119] = [
    "*",
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne",
    "Na", "Mg", "Al", "Si", "P", "S", "Cl", "Ar", "K", "Ca",
    "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn",
    "Ga", "Ge", "As", "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr",
    "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In", "Sn",
    "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd",
    "Pm", "Sm", "Eu", "Gd", "Tb", "Dy", "Ho", "Er", "Tm", "Yb",
    "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg",
    "Tl", "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th",
    "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk", "Cf", "Es", "Fm",
    "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds",
    "Rg", "Cn", "Nh", "Fl", "Mc", "Lv", "Ts", "Og",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_atomic_num_round_trip() {
        for n in 0u8..=118 {
            let e = Element::from_atomic_num(n).unwrap();
            assert_eq!(e.atomic_num(), n);
        }
    }

    #[test]
    fn from_atomic_num_boundaries() {
        assert_eq!(Element::from_atomic_num(0), Some(Element::Unknown));
        assert!(Element::from_atomic_num(119).is_none());
        assert!(Element::from_atomic_num(255).is_none());
        assert_eq!(Element::from_atomic_num(1), Some(Element::H));
        assert_eq!(Element::from_atomic_num(118), Some(Element::Og));
    }

    #[test]
    fn from_symbol_exact_match() {
        assert_eq!(Element::from_symbol("He"), Some(Element::He));
        assert_eq!(Element::from_symbol("Fe"), Some(Element::Fe));
        assert_eq!(Element::from_symbol("*"), Some(Element::Unknown));
    }

    #[test]
    fn from_symbol_case_sensitive() {
        assert!(Element::from_symbol("he").is_none());
        assert!(Element::from_symbol("HE").is_none());
        assert!(Element::from_symbol("").is_none());
        assert!(Element::from_symbol("Xx").is_none());
    }

    #[test]
    fn aromatic_symbols() {
        assert_eq!(Element::from_aromatic_symbol("c"), Some(Element::C));
        assert_eq!(Element::from_aromatic_symbol("se"), Some(Element::Se));
        assert_eq!(Element::from_aromatic_symbol("as"), Some(Element::As));
        assert_eq!(Element::from_aromatic_symbol("f"), None);
        assert_eq!(Element::from_aromatic_symbol("fe"), None);
    }

    #[test]
    fn symbol_round_trip() {
        for n in 0u8..=118 {
            let e = Element::from_atomic_num(n).unwrap();
            assert_eq!(Element::from_symbol(e.symbol()), Some(e));
        }
    }

    #[test]
    fn implied_hydrogens_follow_default_valences() {
        assert_eq!(Element::C.implied_hydrogens(0, false), 4);
        assert_eq!(Element::C.implied_hydrogens(2, true), 1);
        assert_eq!(Element::N.implied_hydrogens(2, true), 0);
        assert_eq!(Element::N.implied_hydrogens(4, false), 1);
        assert_eq!(Element::S.implied_hydrogens(2, true), 0);
        assert_eq!(Element::S.implied_hydrogens(3, false), 1);
        assert_eq!(Element::Fe.implied_hydrogens(0, false), 0);
        assert_eq!(Element::C.implied_hydrogens(5, false), 0);
    }

    #[test]
    fn organic_subset() {
        assert!(Element::C.is_organic_subset());
        assert!(Element::Br.is_organic_subset());
        assert!(Element::Unknown.is_organic_subset());
        assert!(!Element::Fe.is_organic_subset());
        assert!(!Element::H.is_organic_subset());
    }

    #[test]
    fn all_symbols_unique() {
        use std::collections::HashSet;
        let symbols: HashSet<&str> = SYMBOLS.iter().copied().collect();
        assert_eq!(symbols.len(), 119);
    }
}
