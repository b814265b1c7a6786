use petgraph::graph::{NodeIndex, UnGraph};
use thiserror::Error;

use crate::atom::Atom;
use crate::bond::Bond;
use crate::configuration::ConfigurationType;
use crate::edge::Edge;
use crate::topology::Topology;

/// Errors raised when a [`Graph`] would lose its invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("vertex {u} is out of range for a graph of order {order}")]
    VertexOutOfRange { u: usize, order: usize },
    #[error("self loop on vertex {u}")]
    SelfLoop { u: usize },
    #[error("vertices {u} and {v} are already bonded")]
    ParallelEdge { u: usize, v: usize },
    #[error("vertices {u} and {v} are not bonded")]
    NoSuchEdge { u: usize, v: usize },
}

/// A molecule as written in SMILES: labelled vertices, ordered adjacency
/// lists and per-vertex stereo.
///
/// Vertices are numbered `0..order()` in the order they were added. Each
/// adjacency list keeps the order edges were added in, which is also the
/// order the generator visits them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    atoms: Vec<Atom>,
    adjacency: Vec<Vec<Edge>>,
    topologies: Vec<Option<Topology>>,
    size: usize,
    flags: u32,
    title: Option<String>,
}

impl Graph {
    /// Some atoms or bonds are aromatic.
    pub const HAS_AROM: u32 = 0x1;
    /// Some atoms have a tetrahedral, trigonal or higher-order center.
    pub const HAS_ATM_STRO: u32 = 0x2;
    /// Some atoms are allene-like (extended tetrahedral) centers.
    pub const HAS_EXT_STRO: u32 = 0x4;
    /// Some bonds are directional (`/` or `\`).
    pub const HAS_BND_STRO: u32 = 0x8;
    pub const HAS_STRO: u32 = Self::HAS_ATM_STRO | Self::HAS_EXT_STRO | Self::HAS_BND_STRO;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            atoms: Vec::with_capacity(n),
            adjacency: Vec::with_capacity(n),
            topologies: Vec::with_capacity(n),
            ..Self::default()
        }
    }

    /// Number of vertices.
    pub fn order(&self) -> usize {
        self.atoms.len()
    }

    /// Number of edges.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn add_atom(&mut self, atom: Atom) -> usize {
        if atom.aromatic {
            self.flags |= Self::HAS_AROM;
        }
        self.atoms.push(atom);
        self.adjacency.push(Vec::new());
        self.topologies.push(None);
        self.atoms.len() - 1
    }

    pub fn atom(&self, u: usize) -> &Atom {
        &self.atoms[u]
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn set_atom(&mut self, u: usize, atom: Atom) {
        if atom.aromatic {
            self.flags |= Self::HAS_AROM;
        }
        self.atoms[u] = atom;
    }

    fn check(&self, u: usize) -> Result<(), GraphError> {
        if u < self.order() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                u,
                order: self.order(),
            })
        }
    }

    /// Add `e` to the adjacency lists of both endpoints.
    pub fn add_edge(&mut self, e: Edge) -> Result<(), GraphError> {
        let u = e.either();
        let v = e.other(u);
        self.check(u)?;
        self.check(v)?;
        if u == v {
            return Err(GraphError::SelfLoop { u });
        }
        if self.adjacent(u, v) {
            return Err(GraphError::ParallelEdge { u, v });
        }
        if e.bond().is_aromatic() {
            self.flags |= Self::HAS_AROM;
        }
        if e.bond().is_directional() {
            self.flags |= Self::HAS_BND_STRO;
        }
        self.adjacency[u].push(e);
        self.adjacency[v].push(e);
        self.size += 1;
        Ok(())
    }

    /// Replace the label of the existing edge between the endpoints of `e`.
    pub fn replace_edge(&mut self, e: Edge) -> Result<(), GraphError> {
        let u = e.either();
        let v = e.other(u);
        self.check(u)?;
        self.check(v)?;
        let mut found = false;
        for x in [u, v] {
            if let Some(slot) = self.adjacency[x].iter_mut().find(|f| f.other(x) == e.other(x)) {
                *slot = e;
                found = true;
            }
        }
        if !found {
            return Err(GraphError::NoSuchEdge { u, v });
        }
        if e.bond().is_directional() {
            self.flags |= Self::HAS_BND_STRO;
        }
        Ok(())
    }

    pub fn degree(&self, u: usize) -> usize {
        self.adjacency[u].len()
    }

    /// Edges of `u` in insertion order.
    pub fn edges(&self, u: usize) -> &[Edge] {
        &self.adjacency[u]
    }

    /// Every edge once, ordered by its lower endpoint.
    pub fn all_edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(u, es)| es.iter().filter(move |e| e.other(u) > u))
    }

    pub fn edge(&self, u: usize, v: usize) -> Option<&Edge> {
        self.adjacency.get(u)?.iter().find(|e| e.other(u) == v)
    }

    pub fn adjacent(&self, u: usize, v: usize) -> bool {
        self.edge(u, v).is_some()
    }

    pub fn neighbors(&self, u: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency[u].iter().map(move |e| e.other(u))
    }

    /// Sum of the bond orders around `u`, hydrogens excluded.
    pub fn bond_order_sum(&self, u: usize) -> u8 {
        self.adjacency[u]
            .iter()
            .fold(0u8, |acc, e| acc.saturating_add(e.bond().order()))
    }

    /// Hydrogens on `u`: the written count, or the count implied by the
    /// default valence for atoms that do not state one.
    pub fn hydrogens(&self, u: usize) -> u8 {
        let atom = &self.atoms[u];
        match atom.hydrogens {
            Some(h) => h,
            None => atom
                .element
                .implied_hydrogens(self.bond_order_sum(u), atom.aromatic),
        }
    }

    /// Attach `t` to its center, replacing any previous one.
    pub fn add_topology(&mut self, t: Topology) -> Result<(), GraphError> {
        let u = t.atom();
        self.check(u)?;
        self.flags |= match t.kind() {
            ConfigurationType::ExtendedTetrahedral => Self::HAS_EXT_STRO,
            _ => Self::HAS_ATM_STRO,
        };
        self.topologies[u] = Some(t);
        Ok(())
    }

    pub fn topology_of(&self, u: usize) -> Option<&Topology> {
        self.topologies.get(u)?.as_ref()
    }

    pub fn topologies(&self) -> impl Iterator<Item = &Topology> + '_ {
        self.topologies.iter().flatten()
    }

    pub fn flags(&self) -> u32 {
        self.flags
    }

    pub fn has_flag(&self, flag: u32) -> bool {
        self.flags & flag != 0
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        let title = title.into();
        self.title = if title.is_empty() { None } else { Some(title) };
    }

    /// Copy into a petgraph graph. Node `i` is vertex `i`; directional
    /// labels are stored as read from the lower-numbered endpoint.
    pub fn to_petgraph(&self) -> UnGraph<Atom, Bond> {
        let mut g = UnGraph::with_capacity(self.order(), self.size);
        for atom in &self.atoms {
            g.add_node(atom.clone());
        }
        for e in self.all_edges() {
            let u = e.either().min(e.other(e.either()));
            let v = e.other(u);
            g.add_edge(NodeIndex::new(u), NodeIndex::new(v), e.bond_from(u));
        }
        g
    }
}
