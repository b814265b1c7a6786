//! Builds a [`Graph`] from SMILES tokens.
//!
//! Atoms become vertices in the order they are written. For every atom the
//! parser also records its neighbors in written order (previous atom, ring
//! bonds at the position of their digit, then branches and the chain) so the
//! stereo descriptors, which refer to that order, can be resolved once the
//! whole string has been read.

use tracing::{debug, warn};

use crate::bond::Bond;
use crate::configuration::{Configuration, ConfigurationType};
use crate::edge::Edge;
use crate::element::Element;
use crate::graph::Graph;
use crate::smiles::error::{SmilesError, SmilesWarning};
use crate::smiles::tokenizer::{AtomToken, Token, Tokenizer};
use crate::topology::Topology;

const RING_NUMBERS: usize = 100;
const RESERVED: usize = usize::MAX;

/// How forgiving the parser is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Every problem is an error.
    #[default]
    Strict,
    /// Recoverable problems become warnings: unknown bracket atoms are kept
    /// as labelled arbitrary atoms, conflicting ring bonds become single and
    /// unusable stereo annotations are dropped.
    Loose,
}

#[derive(Debug, Clone, Default)]
pub struct ParserConfig {
    pub mode: ParseMode,
}

impl ParserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(mut self, mode: ParseMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn loose(self) -> Self {
        self.mode(ParseMode::Loose)
    }
}

/// A parsed graph and the problems recovered from along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed {
    pub graph: Graph,
    pub warnings: Vec<SmilesWarning>,
}

#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn parse(&self, input: &str) -> Result<Parsed, SmilesError> {
        let input = input.trim_start();
        if input.is_empty() {
            return Err(SmilesError::EmptyInput);
        }
        let loose = self.config.mode == ParseMode::Loose;
        let mut tokenizer = Tokenizer::new(input, loose);
        let mut state = State::new(loose);
        while let Some(token) = tokenizer.next_token()? {
            state.token(token)?;
        }
        state.finish(tokenizer.position())?;
        if state.g.is_empty() {
            return Err(SmilesError::EmptyInput);
        }
        state.resolve()?;

        let mut warnings = tokenizer.take_warnings();
        warnings.append(&mut state.warnings);
        warnings.sort_by_key(|w| w.pos);

        let mut g = state.g;
        if let Some(title) = tokenizer.title() {
            g.set_title(title);
        }
        debug!(
            atoms = g.order(),
            bonds = g.size(),
            warnings = warnings.len(),
            "parsed SMILES"
        );
        Ok(Parsed { graph: g, warnings })
    }
}

#[derive(Debug, Clone, Copy)]
struct RingBond {
    u: usize,
    bond: Option<Bond>,
    pos: usize,
    /// Index in the arrangement of `u` reserved for the partner.
    slot: usize,
}

#[derive(Debug, Clone, Copy)]
struct Stereo {
    u: usize,
    configuration: Configuration,
    pos: usize,
}

struct State {
    loose: bool,
    g: Graph,
    prev: Option<usize>,
    branches: Vec<(usize, usize)>,
    pending: Option<(Bond, usize)>,
    rings: Vec<Option<RingBond>>,
    /// Neighbors of each atom in written order.
    arrangement: Vec<Vec<usize>>,
    /// Atoms that begin the string or follow a `.`.
    starts: Vec<bool>,
    positions: Vec<usize>,
    stereo: Vec<Stereo>,
    warnings: Vec<SmilesWarning>,
    just_opened: bool,
}

impl State {
    fn new(loose: bool) -> Self {
        Self {
            loose,
            g: Graph::new(),
            prev: None,
            branches: Vec::new(),
            pending: None,
            rings: vec![None; RING_NUMBERS],
            arrangement: Vec::new(),
            starts: Vec::new(),
            positions: Vec::new(),
            stereo: Vec::new(),
            warnings: Vec::new(),
            just_opened: false,
        }
    }

    /// Report `err`, or in loose mode record it as a warning and carry on.
    fn recover(&mut self, err: SmilesError) -> Result<(), SmilesError> {
        if !self.loose {
            return Err(err);
        }
        let warning = SmilesWarning::from(&err);
        warn!(pos = warning.pos, "{}", warning.message);
        self.warnings.push(warning);
        Ok(())
    }

    fn token(&mut self, token: Token) -> Result<(), SmilesError> {
        let opened = matches!(token, Token::OpenParen(_));
        match token {
            Token::Atom(atom) => self.atom(atom)?,
            Token::Bond { bond, pos } => {
                if self.prev.is_none() {
                    let ch = bond.symbol().chars().next().unwrap_or('-');
                    return Err(SmilesError::NoPrecedingAtom { pos, ch });
                }
                if self.pending.is_some() {
                    return Err(SmilesError::DuplicateBond { pos });
                }
                self.pending = Some((bond, pos));
            }
            Token::Ring { number, pos } => self.ring(number, pos)?,
            Token::OpenParen(pos) => {
                let Some(u) = self.prev else {
                    return Err(SmilesError::NoPrecedingAtom { pos, ch: '(' });
                };
                self.no_pending()?;
                self.branches.push((u, pos));
            }
            Token::CloseParen(pos) => {
                self.no_pending()?;
                let Some((u, _)) = self.branches.pop() else {
                    return Err(SmilesError::UnmatchedParen { pos });
                };
                if self.just_opened {
                    return Err(SmilesError::EmptyBranch { pos });
                }
                self.prev = Some(u);
            }
            Token::Dot(pos) => {
                if self.prev.is_none() {
                    return Err(SmilesError::NoPrecedingAtom { pos, ch: '.' });
                }
                self.no_pending()?;
                self.prev = None;
            }
        }
        self.just_opened = opened;
        Ok(())
    }

    fn no_pending(&self) -> Result<(), SmilesError> {
        match self.pending {
            Some((_, pos)) => Err(SmilesError::DanglingBond { pos }),
            None => Ok(()),
        }
    }

    /// Unwritten bond between `u` and `v`.
    fn implicit(&self, u: usize, v: usize) -> Bond {
        if self.g.atom(u).aromatic && self.g.atom(v).aromatic {
            Bond::ImplicitAromatic
        } else {
            Bond::Implicit
        }
    }

    fn atom(&mut self, token: AtomToken) -> Result<(), SmilesError> {
        let v = self.g.add_atom(token.atom);
        self.arrangement.push(Vec::new());
        self.positions.push(token.pos);
        self.starts.push(self.prev.is_none());

        if let Some(u) = self.prev {
            let bond = match self.pending.take() {
                Some((bond, _)) => bond,
                None => self.implicit(u, v),
            };
            self.g.add_edge(Edge::new(u, v, bond))?;
            self.arrangement[u].push(v);
            self.arrangement[v].push(u);
        }
        if token.configuration != Configuration::Unknown {
            self.stereo.push(Stereo {
                u: v,
                configuration: token.configuration,
                pos: token.pos,
            });
        }
        self.prev = Some(v);
        Ok(())
    }

    fn ring(&mut self, number: u16, pos: usize) -> Result<(), SmilesError> {
        let Some(v) = self.prev else {
            let ch = char::from_digit(u32::from(number), 10).unwrap_or('%');
            return Err(SmilesError::NoPrecedingAtom { pos, ch });
        };
        let written = self.pending.take().map(|(bond, _)| bond);
        let index = number as usize;

        let Some(open) = self.rings[index].take() else {
            let slot = self.arrangement[v].len();
            self.arrangement[v].push(RESERVED);
            self.rings[index] = Some(RingBond {
                u: v,
                bond: written,
                pos,
                slot,
            });
            return Ok(());
        };

        let u = open.u;
        if u == v {
            return Err(SmilesError::RingSelfLoop { digit: number, pos });
        }
        if self.g.adjacent(u, v) {
            return Err(SmilesError::RingParallelEdge { digit: number, pos });
        }
        // Labels are kept as read from the opening atom.
        let bond = match (open.bond, written) {
            (None, None) => self.implicit(u, v),
            (Some(first), None) => first,
            (None, Some(second)) => second.inverse(),
            (Some(first), Some(second)) if first == second || first == second.inverse() => first,
            (Some(first), Some(second)) => {
                self.recover(SmilesError::RingBondConflict {
                    digit: number,
                    pos,
                    first,
                    second,
                })?;
                Bond::Single
            }
        };
        self.g.add_edge(Edge::new(u, v, bond))?;
        self.arrangement[u][open.slot] = v;
        self.arrangement[v].push(u);
        Ok(())
    }

    fn finish(&mut self, end: usize) -> Result<(), SmilesError> {
        self.no_pending()?;
        if let Some(&(_, pos)) = self.branches.first() {
            return Err(SmilesError::UnmatchedParen { pos });
        }
        if let Some((digit, ring)) = self
            .rings
            .iter()
            .enumerate()
            .filter_map(|(d, r)| r.map(|r| (d, r)))
            .min_by_key(|(_, r)| r.pos)
        {
            return Err(SmilesError::UnclosedRing {
                digit: digit as u16,
                pos: ring.pos,
            });
        }
        debug!(end, "tokens consumed");
        Ok(())
    }

    /// Checks and stereo that need the finished graph.
    fn resolve(&mut self) -> Result<(), SmilesError> {
        if self.loose {
            self.aromatic_wildcards()?;
        }
        self.directional_bonds()?;
        let stereo = std::mem::take(&mut self.stereo);
        for s in stereo {
            match self.topology(s) {
                Ok(Some(t)) => self.g.add_topology(t)?,
                Ok(None) => {}
                Err(err) => self.recover(err)?,
            }
        }
        Ok(())
    }

    /// Wildcards between aromatic atoms are taken to be aromatic themselves.
    fn aromatic_wildcards(&mut self) -> Result<(), SmilesError> {
        for u in 0..self.g.order() {
            let atom = self.g.atom(u);
            if atom.element != Element::Unknown || atom.aromatic {
                continue;
            }
            let aromatic_neighbors = self
                .g
                .neighbors(u)
                .filter(|&v| self.g.atom(v).aromatic)
                .count();
            if aromatic_neighbors < 2 {
                continue;
            }
            let atom = atom.to_aromatic();
            self.g.set_atom(u, atom);
            let implicit: Vec<Edge> = self
                .g
                .edges(u)
                .iter()
                .filter(|e| e.bond() == Bond::Implicit && self.g.atom(e.other(u)).aromatic)
                .copied()
                .collect();
            for e in implicit {
                self.g.replace_edge(e.with_bond_from(u, Bond::ImplicitAromatic))?;
            }
        }
        Ok(())
    }

    /// An atom of a double bond may have at most one `/` and one `\` on its
    /// other bonds.
    fn directional_bonds(&mut self) -> Result<(), SmilesError> {
        for u in 0..self.g.order() {
            let edges = self.g.edges(u);
            if edges.iter().filter(|e| e.bond() == Bond::Double).count() != 1 {
                continue;
            }
            let count = |dir: Bond| edges.iter().filter(|e| e.bond_from(u) == dir).count();
            if count(Bond::Up) < 2 && count(Bond::Down) < 2 {
                continue;
            }
            self.recover(SmilesError::DirectionalConflict {
                pos: self.positions[u],
            })?;
            let directional: Vec<Edge> = self
                .g
                .edges(u)
                .iter()
                .filter(|e| e.bond().is_directional())
                .copied()
                .collect();
            for e in directional {
                self.g.replace_edge(e.with_bond_from(u, Bond::Implicit))?;
            }
        }
        Ok(())
    }

    /// Where an implicit hydrogen (or lone pair) of `u` sits among its
    /// written neighbors.
    fn hydrogen_index(&self, u: usize) -> usize {
        if self.starts[u] {
            0
        } else {
            1
        }
    }

    /// Written neighbors of `u` with its implicit hydrogens in place.
    fn with_hydrogens(&self, u: usize) -> Vec<usize> {
        let mut around = self.arrangement[u].clone();
        let at = self.hydrogen_index(u).min(around.len());
        for _ in 0..self.g.hydrogens(u) {
            around.insert(at, u);
        }
        around
    }

    fn topology(&self, s: Stereo) -> Result<Option<Topology>, SmilesError> {
        let c = Topology::to_explicit(&self.g, s.u, s.configuration);
        if c == Configuration::Unknown {
            return Err(SmilesError::InvalidConfiguration {
                pos: s.pos,
                text: s.configuration.symbol().to_string(),
            });
        }
        let kind = c.kind();
        let Some(expected) = kind.neighbor_count() else {
            return Ok(None);
        };
        if kind == ConfigurationType::ExtendedTetrahedral {
            return self.allene(s.u, c, s.pos).map(Some);
        }

        let mut around = self.with_hydrogens(s.u);
        let lone_pair = matches!(
            kind,
            ConfigurationType::Tetrahedral | ConfigurationType::DoubleBond
        );
        // a lone pair sits with the implicit hydrogens, e.g. [S@](=O) or [N@H]
        if lone_pair && around.len() + 1 == expected {
            let at = self.hydrogen_index(s.u).min(around.len());
            around.insert(at, s.u);
        }
        if around.len() != expected {
            return Err(SmilesError::StereoNeighborCount {
                pos: s.pos,
                configuration: c,
                expected,
                found: around.len(),
            });
        }
        Ok(Topology::create(s.u, &around, c))
    }

    /// Substituents of both ends of the cumulated system centered on `u`,
    /// first end first.
    fn allene(&self, u: usize, c: Configuration, pos: usize) -> Result<Topology, SmilesError> {
        let invalid = |reason: &str| SmilesError::InvalidAllene {
            pos,
            reason: reason.to_string(),
        };
        let center = &self.arrangement[u];
        if center.len() != 2 || self.g.edges(u).iter().any(|e| e.bond() != Bond::Double) {
            return Err(invalid("the center needs exactly two double bonds"));
        }
        let mut vs = Vec::with_capacity(4);
        for &first in center {
            let (end, via) = terminus(&self.g, u, first);
            let mut around = self.with_hydrogens(end);
            around.retain(|&x| x != via);
            if around.len() != 2 {
                return Err(invalid("each end needs two substituents"));
            }
            vs.extend(around);
        }
        Topology::create(u, &vs, c).ok_or_else(|| invalid("unsupported descriptor"))
    }
}

/// Walk along cumulated double bonds from `u` through `first` to the end of
/// the chain, returning the end atom and the chain atom bonded to it.
pub(crate) fn terminus(g: &Graph, u: usize, first: usize) -> (usize, usize) {
    let (mut prev, mut cur) = (u, first);
    for _ in 0..g.order() {
        let edges = g.edges(cur);
        if edges.len() != 2 || edges.iter().any(|e| e.bond() != Bond::Double) {
            break;
        }
        let next = edges
            .iter()
            .map(|e| e.other(cur))
            .find(|&x| x != prev)
            .unwrap_or(prev);
        prev = cur;
        cur = next;
    }
    (cur, prev)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Graph {
        Parser::default().parse(s).unwrap().graph
    }

    fn parse_err(s: &str) -> SmilesError {
        Parser::default().parse(s).unwrap_err()
    }

    fn loose(s: &str) -> Parsed {
        Parser::new(ParserConfig::new().loose()).parse(s).unwrap()
    }

    #[test]
    fn chain_and_branches() {
        let g = parse("CC(C)(C)O");
        assert_eq!(g.order(), 5);
        assert_eq!(g.size(), 4);
        assert_eq!(g.neighbors(1).collect::<Vec<_>>(), vec![0, 2, 3, 4]);
        assert_eq!(g.hydrogens(1), 0);
        assert_eq!(g.hydrogens(4), 1);
    }

    #[test]
    fn ring_closure_bonds() {
        let g = parse("C1CCCCC1");
        assert_eq!(g.size(), 6);
        assert!(g.adjacent(0, 5));
        assert_eq!(g.edge(0, 5).map(|e| e.bond()), Some(Bond::Implicit));

        let g = parse("C=1CCCCC1");
        assert_eq!(g.edge(0, 5).map(|e| e.bond()), Some(Bond::Double));
        let g = parse("C1CCCCC=1");
        assert_eq!(g.edge(0, 5).map(|e| e.bond()), Some(Bond::Double));
        let g = parse("C=1CCCCC=1");
        assert_eq!(g.edge(0, 5).map(|e| e.bond()), Some(Bond::Double));
    }

    #[test]
    fn ring_closure_conflict() {
        assert!(matches!(
            parse_err("C=1CCCCC#1"),
            SmilesError::RingBondConflict {
                digit: 1,
                pos: 9,
                first: Bond::Double,
                second: Bond::Triple,
            }
        ));
        let parsed = loose("C=1CCCCC#1");
        assert_eq!(parsed.warnings.len(), 1);
        assert_eq!(
            parsed.graph.edge(0, 5).map(|e| e.bond()),
            Some(Bond::Single)
        );
    }

    #[test]
    fn directional_ring_bond_read_from_opener() {
        let g = parse("C/1=C/C1");
        assert_eq!(g.edge(0, 2).map(|e| e.bond_from(0)), Some(Bond::Up));
        let g = parse("C1=C/C/1");
        assert_eq!(g.edge(0, 2).map(|e| e.bond_from(2)), Some(Bond::Up));
    }

    #[test]
    fn aromatic_bonds() {
        let g = parse("c1ccccc1-c1ccccc1");
        assert_eq!(g.edge(0, 1).map(|e| e.bond()), Some(Bond::ImplicitAromatic));
        assert_eq!(g.edge(0, 5).map(|e| e.bond()), Some(Bond::ImplicitAromatic));
        assert_eq!(g.edge(5, 6).map(|e| e.bond()), Some(Bond::Single));
        assert!(g.has_flag(Graph::HAS_AROM));
        let g = parse("Cc1ccccc1");
        assert_eq!(g.edge(0, 1).map(|e| e.bond()), Some(Bond::Implicit));
    }

    #[test]
    fn disconnected_components() {
        let g = parse("[Na+].[Cl-]");
        assert_eq!(g.order(), 2);
        assert_eq!(g.size(), 0);
        assert_eq!(g.atom(0).charge, 1);
        assert_eq!(g.atom(1).charge, -1);
    }

    #[test]
    fn ring_number_reuse() {
        let g = parse("C1CC1C1CC1");
        assert_eq!(g.size(), 7);
        assert!(g.adjacent(0, 2));
        assert!(g.adjacent(3, 5));
        let g = parse("C%10CC%10");
        assert!(g.adjacent(0, 2));
    }

    #[test]
    fn title() {
        let g = parse("CCO ethanol");
        assert_eq!(g.title(), Some("ethanol"));
        assert_eq!(g.order(), 3);
    }

    #[test]
    fn structural_errors() {
        assert_eq!(parse_err(""), SmilesError::EmptyInput);
        assert_eq!(parse_err("   "), SmilesError::EmptyInput);
        assert_eq!(parse_err("C1CC"), SmilesError::UnclosedRing { digit: 1, pos: 1 });
        assert_eq!(parse_err("C(C"), SmilesError::UnmatchedParen { pos: 1 });
        assert_eq!(parse_err("CC)C"), SmilesError::UnmatchedParen { pos: 2 });
        assert_eq!(parse_err("C()C"), SmilesError::EmptyBranch { pos: 2 });
        assert_eq!(parse_err("C=-C"), SmilesError::DuplicateBond { pos: 2 });
        assert_eq!(parse_err("CC="), SmilesError::DanglingBond { pos: 2 });
        assert_eq!(parse_err("C=.C"), SmilesError::DanglingBond { pos: 1 });
        assert_eq!(
            parse_err("=C"),
            SmilesError::NoPrecedingAtom { pos: 0, ch: '=' }
        );
        assert_eq!(
            parse_err("1CC1"),
            SmilesError::NoPrecedingAtom { pos: 0, ch: '1' }
        );
        assert_eq!(parse_err("C11"), SmilesError::RingSelfLoop { digit: 1, pos: 2 });
        assert_eq!(
            parse_err("C1C1"),
            SmilesError::RingParallelEdge { digit: 1, pos: 3 }
        );
    }

    #[test]
    fn loose_mode_is_still_strict_about_structure() {
        let parser = Parser::new(ParserConfig::new().loose());
        assert!(parser.parse("C1CC").is_err());
        assert!(parser.parse("C(C").is_err());
        assert!(parser.parse("[CH4").is_err());
    }

    #[test]
    fn loose_mode_arbitrary_atoms() {
        let parsed = loose("c1cc[R]cc1");
        assert_eq!(parsed.warnings.len(), 1);
        let g = parsed.graph;
        assert_eq!(g.atom(3).label.as_deref(), Some("R"));
        assert!(g.atom(3).aromatic);
        assert_eq!(g.edge(2, 3).map(|e| e.bond()), Some(Bond::ImplicitAromatic));
        assert!(Parser::default().parse("c1cc[R]cc1").is_err());
    }

    #[test]
    fn loose_mode_aromatic_wildcard() {
        let g = loose("c1cc*cc1").graph;
        assert!(g.atom(3).aromatic);
        let g = Parser::default().parse("c1cc*cc1").unwrap().graph;
        assert!(!g.atom(3).aromatic);
    }

    #[test]
    fn tetrahedral_with_implicit_hydrogen() {
        let g = parse("N[C@@H](C)C(=O)O");
        let t = g.topology_of(1).unwrap();
        assert_eq!(t.neighbors(), &[0, 1, 2, 3]);
        assert_eq!(t.configuration(), Configuration::TH2);

        // hydrogen first when the center starts the string
        let g = parse("[C@@H](N)(C)C(=O)O");
        let t = g.topology_of(0).unwrap();
        assert_eq!(t.neighbors(), &[0, 1, 2, 3]);
    }

    #[test]
    fn ring_bond_takes_the_position_of_its_digit() {
        let g = parse("C[C@H]1CCCCO1");
        let t = g.topology_of(1).unwrap();
        assert_eq!(t.neighbors(), &[0, 1, 6, 2]);
    }

    #[test]
    fn lone_pair_on_sulfoxide() {
        let g = parse("C[S@](=O)CC");
        let t = g.topology_of(1).unwrap();
        assert_eq!(t.configuration(), Configuration::TH1);
        assert_eq!(t.neighbors(), &[0, 1, 2, 3]);
    }

    #[test]
    fn lone_pair_beside_hydrogen() {
        let g = parse("C[N@H]CC");
        let t = g.topology_of(1).unwrap();
        assert_eq!(t.kind(), ConfigurationType::Tetrahedral);
        assert_eq!(t.configuration(), Configuration::TH1);
        assert_eq!(t.neighbors(), &[0, 1, 1, 2]);

        let g = parse("[P@@H](C)CC");
        let t = g.topology_of(0).unwrap();
        assert_eq!(t.configuration(), Configuration::TH2);
        assert_eq!(t.neighbors(), &[0, 0, 1, 2]);
    }

    #[test]
    fn wrong_neighbor_count() {
        assert!(matches!(
            parse_err("[C@TH1](F)(Cl)(Br)(I)C"),
            SmilesError::StereoNeighborCount { .. }
        ));
        assert!(matches!(
            parse_err("C[C@TH1](F)"),
            SmilesError::StereoNeighborCount {
                expected: 4,
                found: 2,
                ..
            }
        ));
        let parsed = loose("C[C@TH1](F)");
        assert_eq!(parsed.warnings.len(), 1);
        assert!(parsed.graph.topology_of(1).is_none());
    }

    #[test]
    fn allene() {
        let g = parse("CC=[C@]=CC");
        let t = g.topology_of(2).unwrap();
        assert_eq!(t.kind(), ConfigurationType::ExtendedTetrahedral);
        assert_eq!(t.configuration(), Configuration::AL1);
        // hydrogens of the ends stand in as the ends themselves
        assert_eq!(t.neighbors(), &[0, 1, 3, 4]);
        assert!(g.has_flag(Graph::HAS_EXT_STRO));

        let g = parse("OC(F)=[C@@]=C(Cl)Br");
        let t = g.topology_of(3).unwrap();
        assert_eq!(t.neighbors(), &[0, 2, 5, 6]);
        assert_eq!(t.configuration(), Configuration::AL2);
    }

    #[test]
    fn directional_conflict() {
        assert_eq!(
            parse_err("F/C(\\Cl)=C/F"),
            SmilesError::DirectionalConflict { pos: 2 }
        );
        assert!(Parser::default().parse("F/C(/Cl)=C/F").is_ok());
        let parsed = loose("F/C(\\Cl)=C/F");
        assert_eq!(parsed.warnings.len(), 1);
        assert!(!parsed.graph.edge(0, 1).unwrap().bond().is_directional());
    }

    #[test]
    fn octahedral_center() {
        let g = parse("C[Co@OH2](F)(Cl)(Br)(I)N");
        let t = g.topology_of(1).unwrap();
        assert_eq!(t.kind(), ConfigurationType::Octahedral);
        assert_eq!(t.configuration(), Configuration::OH2);
    }
}
