mod char_buffer;
pub mod error;
mod generator;
mod parser;
mod ring_numbering;
mod tokenizer;

pub use char_buffer::CharBuffer;
pub use error::{SmilesError, SmilesWarning};
pub use generator::{Generator, GeneratorConfig, RingNumberingKind};
pub use parser::{ParseMode, Parsed, Parser, ParserConfig};
pub use ring_numbering::{
    IterativeRingNumbering, ReuseRingNumbering, RingNumbering, MAX_RING_NUMBER,
};
pub use tokenizer::{tokenize, AtomToken, Token, Tokenizer};

use crate::graph::Graph;

/// Parse a SMILES string, rejecting anything that is not valid OpenSMILES.
pub fn parse_smiles(s: &str) -> Result<Graph, SmilesError> {
    Ok(Parser::default().parse(s)?.graph)
}

/// Parse a SMILES string, recovering from what can be recovered from.
///
/// Unknown bracket atoms, conflicting ring bonds and unusable stereo
/// annotations become [`SmilesWarning`]s. Structural problems (unclosed
/// rings, brackets or branches) are still errors.
pub fn parse_smiles_loose(s: &str) -> Result<Parsed, SmilesError> {
    Parser::new(ParserConfig::new().loose()).parse(s)
}

/// Write `g` as SMILES with the default generator settings.
pub fn to_smiles(g: &Graph) -> Result<String, SmilesError> {
    Generator::default().generate(g)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bond::Bond;
    use crate::configuration::Configuration;
    use crate::element::Element;

    fn bond(g: &Graph, u: usize, v: usize) -> Bond {
        g.edge(u, v).map(|e| e.bond()).unwrap()
    }

    // ---- Simple molecules ----

    #[test]
    fn methane() {
        let g = parse_smiles("C").unwrap();
        assert_eq!(g.order(), 1);
        assert_eq!(g.size(), 0);
        assert_eq!(g.atom(0).element, Element::C);
        assert_eq!(g.hydrogens(0), 4);
    }

    #[test]
    fn ethane() {
        let g = parse_smiles("CC").unwrap();
        assert_eq!(g.order(), 2);
        assert_eq!(g.size(), 1);
        assert_eq!(g.hydrogens(0), 3);
        assert_eq!(g.hydrogens(1), 3);
    }

    #[test]
    fn ethene() {
        let g = parse_smiles("C=C").unwrap();
        assert_eq!(g.hydrogens(0), 2);
        assert_eq!(g.hydrogens(1), 2);
        assert_eq!(bond(&g, 0, 1), Bond::Double);
    }

    #[test]
    fn ethyne() {
        let g = parse_smiles("C#C").unwrap();
        assert_eq!(g.hydrogens(0), 1);
        assert_eq!(bond(&g, 0, 1), Bond::Triple);
    }

    #[test]
    fn quadruple_bond() {
        let g = parse_smiles("[Rh]$[Rh]").unwrap();
        assert_eq!(bond(&g, 0, 1), Bond::Quadruple);
        assert_eq!(to_smiles(&g).unwrap(), "[Rh]$[Rh]");
    }

    #[test]
    fn hydrides() {
        for (smiles, h) in [
            ("O", 2),
            ("N", 3),
            ("F", 1),
            ("Cl", 1),
            ("Br", 1),
            ("I", 1),
            ("P", 3),
            ("S", 2),
            ("B", 3),
        ] {
            let g = parse_smiles(smiles).unwrap();
            assert_eq!(g.hydrogens(0), h, "{smiles}");
        }
    }

    #[test]
    fn acetic_acid() {
        let g = parse_smiles("CC(=O)O").unwrap();
        assert_eq!(g.order(), 4);
        assert_eq!(g.hydrogens(0), 3); // CH3
        assert_eq!(g.hydrogens(1), 0); // C(=O)O
        assert_eq!(g.hydrogens(2), 0); // =O
        assert_eq!(g.hydrogens(3), 1); // OH
    }

    #[test]
    fn hypervalent_defaults() {
        let g = parse_smiles("CS(=O)(=O)C").unwrap();
        assert_eq!(g.hydrogens(1), 0);
        let g = parse_smiles("P(=O)(O)(O)O").unwrap();
        assert_eq!(g.hydrogens(0), 0);
        let g = parse_smiles("CS(=O)C").unwrap();
        assert_eq!(g.hydrogens(1), 0);
    }

    // ---- Branches and rings ----

    #[test]
    fn isobutane() {
        let g = parse_smiles("CC(C)C").unwrap();
        assert_eq!(g.size(), 3);
        assert_eq!(g.hydrogens(1), 1);
        assert_eq!(g.degree(1), 3);
    }

    #[test]
    fn cyclohexane() {
        let g = parse_smiles("C1CCCCC1").unwrap();
        assert_eq!(g.order(), 6);
        assert_eq!(g.size(), 6);
        for u in 0..6 {
            assert_eq!(g.hydrogens(u), 2);
        }
        assert!(g.all_edges().all(|e| e.bond() == Bond::Implicit));
        assert_eq!(g.topologies().count(), 0);
        assert_eq!(to_smiles(&g).unwrap(), "C1CCCCC1");
    }

    #[test]
    fn bicyclo() {
        let g = parse_smiles("C1CC2C1CC2").unwrap();
        assert_eq!(g.order(), 6);
        assert_eq!(g.size(), 7);
    }

    #[test]
    fn ring_with_double_bonds() {
        let g = parse_smiles("C1=CC=CC=C1").unwrap();
        assert_eq!(g.all_edges().filter(|e| e.bond() == Bond::Double).count(), 3);
        for u in 0..6 {
            assert_eq!(g.hydrogens(u), 1);
        }
    }

    // ---- Aromatics ----

    #[test]
    fn benzene() {
        let g = parse_smiles("c1ccccc1").unwrap();
        assert!(g.atoms().iter().all(|a| a.aromatic));
        for u in 0..6 {
            assert_eq!(g.hydrogens(u), 1);
        }
    }

    #[test]
    fn pyridine_and_pyrrole() {
        let g = parse_smiles("c1ccncc1").unwrap();
        assert_eq!(g.hydrogens(3), 0);
        let g = parse_smiles("[nH]1cccc1").unwrap();
        assert_eq!(g.hydrogens(0), 1);
        assert_eq!(g.hydrogens(1), 1);
    }

    #[test]
    fn caffeine() {
        let g = parse_smiles("Cn1cnc2c1c(=O)n(c(=O)n2C)C").unwrap();
        assert_eq!(g.order(), 14);
        assert_eq!(g.size(), 15);
    }

    // ---- Bracket atoms ----

    #[test]
    fn charged_and_isotopic() {
        let g = parse_smiles("[O-]").unwrap();
        assert_eq!(g.atom(0).charge, -1);
        assert_eq!(g.hydrogens(0), 0);
        let g = parse_smiles("[13C]").unwrap();
        assert_eq!(g.atom(0).isotope, Some(13));
        assert_eq!(g.hydrogens(0), 0);
        let g = parse_smiles("[2H]").unwrap();
        assert_eq!(g.atom(0).element, Element::H);
        assert_eq!(g.atom(0).isotope, Some(2));
    }

    #[test]
    fn nitro_group() {
        let g = parse_smiles("C[N+](=O)[O-]").unwrap();
        assert_eq!(g.atom(1).charge, 1);
        assert_eq!(g.atom(3).charge, -1);
        assert_eq!(to_smiles(&g).unwrap(), "C[N+](=O)[O-]");
    }

    #[test]
    fn atom_class_preserved() {
        let g = parse_smiles("[C:1]").unwrap();
        assert_eq!(g.atom(0).atom_class, 1);
        assert_eq!(to_smiles(&g).unwrap(), "[C:1]");
    }

    // ---- Stereo ----

    #[test]
    fn tetrahedral() {
        let g = parse_smiles("[C@](F)(Cl)(Br)I").unwrap();
        assert_eq!(
            g.topology_of(0).map(|t| t.configuration()),
            Some(Configuration::TH1)
        );
        let g = parse_smiles("[C@@](F)(Cl)(Br)I").unwrap();
        assert_eq!(
            g.topology_of(0).map(|t| t.configuration()),
            Some(Configuration::TH2)
        );
        assert!(g.has_flag(Graph::HAS_ATM_STRO));
    }

    #[test]
    fn double_bond_labels() {
        let g = parse_smiles("F/C=C/F").unwrap();
        assert_eq!(g.edge(0, 1).map(|e| e.bond_from(0)), Some(Bond::Up));
        assert_eq!(g.edge(2, 3).map(|e| e.bond_from(2)), Some(Bond::Up));
        let g = parse_smiles("F/C=C\\F").unwrap();
        assert_eq!(g.edge(2, 3).map(|e| e.bond_from(2)), Some(Bond::Down));
        assert!(g.has_flag(Graph::HAS_BND_STRO));
    }

    // ---- Errors ----

    #[test]
    fn malformed_input() {
        for smiles in ["", "   ", "C(C", "C)C", "C1CC", "X", "[C", "C=1CCCCC#1"] {
            assert!(parse_smiles(smiles).is_err(), "{smiles}");
        }
    }

    #[test]
    fn errors_report_position() {
        let err = parse_smiles("CC(C").unwrap_err();
        assert_eq!(err.position(), Some(2));
        assert_eq!(err.to_string(), "unmatched parenthesis at position 2");
    }

    #[test]
    fn loose_parsing_collects_warnings() {
        let parsed = parse_smiles_loose("C=1CCCCC#1 [R1]").unwrap();
        assert_eq!(parsed.warnings.len(), 1);
        assert_eq!(parsed.graph.title(), Some("[R1]"));

        let parsed = parse_smiles_loose("[R1]CC[Xx]").unwrap();
        assert_eq!(parsed.warnings.len(), 2);
        assert_eq!(parsed.warnings[0].pos, 1);
        assert_eq!(to_smiles(&parsed.graph).unwrap(), "[R1]CC[Xx]");
    }
}
