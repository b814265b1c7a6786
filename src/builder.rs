//! Fluent construction of a [`Graph`] without going through SMILES text.
//!
//! ```
//! use chemcrab_smiles::{to_smiles, Atom, Bond, Element, GraphBuilder};
//!
//! let mut gb = GraphBuilder::new();
//! let f1 = gb.add_atom(Atom::organic(Element::F));
//! let c1 = gb.add_atom(Atom::organic(Element::C));
//! let c2 = gb.add_atom(Atom::organic(Element::C));
//! let f2 = gb.add_atom(Atom::organic(Element::F));
//! gb.add_bond(f1, c1, Bond::Implicit).unwrap();
//! gb.add_bond(c1, c2, Bond::Double).unwrap();
//! gb.add_bond(c2, f2, Bond::Implicit).unwrap();
//! gb.geometric(c1, c2).trans(f1, f2);
//! let g = gb.build().unwrap();
//! assert_eq!(to_smiles(&g).unwrap(), "F/C=C/F");
//! ```

use thiserror::Error;

use crate::atom::Atom;
use crate::bond::Bond;
use crate::configuration::{Configuration, ConfigurationType};
use crate::edge::Edge;
use crate::graph::{Graph, GraphError};
use crate::topology::Topology;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuilderError {
    #[error("{configuration} on vertex {u} needs {expected} neighbors, got {found}")]
    NeighborCount {
        u: usize,
        configuration: Configuration,
        expected: usize,
        found: usize,
    },
    #[error("{configuration} does not describe a {kind:?} center (vertex {u})")]
    WrongGeometry {
        u: usize,
        kind: ConfigurationType,
        configuration: Configuration,
    },
    #[error("vertices {u} and {v} are not joined by a double bond")]
    NotADoubleBond { u: usize, v: usize },
    #[error("vertex {x} is not a substituent of vertex {u}")]
    NotASubstituent { u: usize, x: usize },
    #[error("conflicting bond directions around the double bond {u}={v}")]
    ConflictingDirection { u: usize, v: usize },
    #[error(transparent)]
    Graph(#[from] GraphError),
}

#[derive(Debug, Clone, Copy)]
struct Geometric {
    u: usize,
    v: usize,
    x: usize,
    y: usize,
    trans: bool,
}

/// Accumulates atoms, bonds and stereo, then produces a [`Graph`].
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    g: Graph,
    geometric: Vec<Geometric>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            g: Graph::with_capacity(n),
            geometric: Vec::new(),
        }
    }

    pub fn add_atom(&mut self, atom: Atom) -> usize {
        self.g.add_atom(atom)
    }

    pub fn add_edge(&mut self, e: Edge) -> Result<&mut Self, BuilderError> {
        self.g.add_edge(e)?;
        Ok(self)
    }

    pub fn add_bond(&mut self, u: usize, v: usize, bond: Bond) -> Result<&mut Self, BuilderError> {
        self.add_edge(Edge::new(u, v, bond))
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.g.set_title(title);
        self
    }

    /// Tetrahedral center `u`; list three neighbors seen from a fourth.
    pub fn tetrahedral(&mut self, u: usize) -> CenterBuilder<'_> {
        CenterBuilder::new(self, u, ConfigurationType::Tetrahedral)
    }

    /// Allene-like center `u`; neighbors are the substituents of its ends.
    pub fn extended_tetrahedral(&mut self, u: usize) -> CenterBuilder<'_> {
        CenterBuilder::new(self, u, ConfigurationType::ExtendedTetrahedral)
    }

    pub fn square_planar(&mut self, u: usize) -> CenterBuilder<'_> {
        CenterBuilder::new(self, u, ConfigurationType::SquarePlanar)
    }

    pub fn trigonal_bipyramidal(&mut self, u: usize) -> CenterBuilder<'_> {
        CenterBuilder::new(self, u, ConfigurationType::TrigonalBipyramidal)
    }

    pub fn octahedral(&mut self, u: usize) -> CenterBuilder<'_> {
        CenterBuilder::new(self, u, ConfigurationType::Octahedral)
    }

    /// Cis/trans geometry of the double bond `u`=`v`.
    pub fn geometric(&mut self, u: usize, v: usize) -> GeometricBuilder<'_> {
        GeometricBuilder { gb: self, u, v }
    }

    /// Assign directional labels for the declared double bonds and return
    /// the graph.
    ///
    /// Double bonds are labelled in the order they were declared; a label
    /// already placed on a shared single bond (conjugated systems) fixes
    /// the labels of the next double bond.
    pub fn build(mut self) -> Result<Graph, BuilderError> {
        for d in std::mem::take(&mut self.geometric) {
            self.assign(d)?;
        }
        Ok(self.g)
    }

    fn substituent(&self, u: usize, x: usize) -> Result<Edge, BuilderError> {
        match self.g.edge(u, x) {
            Some(e) if e.bond().order() == 1 => Ok(*e),
            _ => Err(BuilderError::NotASubstituent { u, x }),
        }
    }

    fn assign(&mut self, d: Geometric) -> Result<(), BuilderError> {
        let Geometric { u, v, x, y, trans } = d;
        if self.g.edge(u, v).map(|e| e.bond()) != Some(Bond::Double) {
            return Err(BuilderError::NotADoubleBond { u, v });
        }
        let ex = self.substituent(u, x)?;
        let ey = self.substituent(v, y)?;

        // x/u=v/y is trans, x/u=v\y is cis
        let same = |b: Bond| if trans { b } else { b.inverse() };
        let (current_x, current_y) = (ex.bond_from(x), ey.bond_from(v));
        let lx = if current_x.is_directional() {
            current_x
        } else if current_y.is_directional() {
            same(current_y)
        } else {
            Bond::Up
        };
        let ly = same(lx);
        if (current_x.is_directional() && current_x != lx)
            || (current_y.is_directional() && current_y != ly)
        {
            return Err(BuilderError::ConflictingDirection { u, v });
        }
        // read from the center, a second substituent on the same end must
        // carry the opposite label
        if self.clashes(u, &[v, x], lx.inverse()) || self.clashes(v, &[u, y], ly) {
            return Err(BuilderError::ConflictingDirection { u, v });
        }
        self.g.replace_edge(ex.with_bond_from(x, lx))?;
        self.g.replace_edge(ey.with_bond_from(v, ly))?;
        Ok(())
    }

    /// Whether a bond of `center`, other than those to `skip`, already reads
    /// `label` from `center`.
    fn clashes(&self, center: usize, skip: &[usize], label: Bond) -> bool {
        self.g
            .edges(center)
            .iter()
            .any(|e| !skip.contains(&e.other(center)) && e.bond_from(center) == label)
    }
}

/// Declares one stereo center; finish with [`build`](Self::build).
pub struct CenterBuilder<'a> {
    gb: &'a mut GraphBuilder,
    u: usize,
    kind: ConfigurationType,
    from: Option<usize>,
    neighbors: Vec<usize>,
    configuration: Configuration,
}

impl<'a> CenterBuilder<'a> {
    fn new(gb: &'a mut GraphBuilder, u: usize, kind: ConfigurationType) -> Self {
        Self {
            gb,
            u,
            kind,
            from: None,
            neighbors: Vec::new(),
            configuration: Configuration::Unknown,
        }
    }

    /// The neighbor the rest are viewed from; it is listed first.
    pub fn looking_from(mut self, v: usize) -> Self {
        self.from = Some(v);
        self
    }

    /// Remaining neighbors in order. Use the center itself for an implicit
    /// hydrogen or lone pair.
    pub fn neighbors(mut self, vs: &[usize]) -> Self {
        self.neighbors = vs.to_vec();
        self
    }

    /// `@`/`@@` or an explicit descriptor of this geometry.
    pub fn winding(mut self, c: Configuration) -> Self {
        self.configuration = c;
        self
    }

    pub fn build(self) -> Result<&'a mut GraphBuilder, BuilderError> {
        let u = self.u;
        let c = self.configuration.explicit_for(self.kind);
        if c.kind() != self.kind {
            return Err(BuilderError::WrongGeometry {
                u,
                kind: self.kind,
                configuration: self.configuration,
            });
        }
        let vs: Vec<usize> = self.from.into_iter().chain(self.neighbors).collect();
        let expected = self.kind.neighbor_count().unwrap_or(0);
        let Some(t) = Topology::create(u, &vs, c) else {
            return Err(BuilderError::NeighborCount {
                u,
                configuration: c,
                expected,
                found: vs.len(),
            });
        };
        self.gb.g.add_topology(t)?;
        Ok(self.gb)
    }
}

/// Declares the geometry of one double bond.
pub struct GeometricBuilder<'a> {
    gb: &'a mut GraphBuilder,
    u: usize,
    v: usize,
}

impl<'a> GeometricBuilder<'a> {
    /// `x` (on `u`) and `y` (on `v`) on the same side.
    pub fn cis(self, x: usize, y: usize) -> &'a mut GraphBuilder {
        self.declare(x, y, false)
    }

    /// `x` (on `u`) and `y` (on `v`) on opposite sides.
    pub fn trans(self, x: usize, y: usize) -> &'a mut GraphBuilder {
        self.declare(x, y, true)
    }

    fn declare(self, x: usize, y: usize, trans: bool) -> &'a mut GraphBuilder {
        self.gb.geometric.push(Geometric {
            u: self.u,
            v: self.v,
            x,
            y,
            trans,
        });
        self.gb
    }
}
