//! Writes a [`Graph`] as SMILES.
//!
//! Generation runs in two passes. The prepare pass walks each component
//! depth first (from its lowest-numbered vertex, following adjacency order)
//! and records the spanning tree and ring closures. The write pass then emits
//! atoms, bonds, branches and ring digits from those records, numbering rings
//! with the configured [`RingNumbering`] strategy.
//!
//! Stereo descriptors are recomputed for the order neighbors end up written
//! in, so parsing the output gives back the same arrangement in space.

use crate::atom::Atom;
use crate::bond::Bond;
use crate::configuration::{Configuration, ConfigurationType};
use crate::element::Element;
use crate::graph::Graph;
use crate::smiles::error::SmilesError;
use crate::smiles::parser::terminus;
use crate::smiles::ring_numbering::{
    write_ring_number, IterativeRingNumbering, RingNumbering, ReuseRingNumbering,
};
use crate::topology::Topology;

const UNVISITED: usize = usize::MAX;

/// Ring-number allocation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RingNumberingKind {
    /// Lowest free number, reused as soon as a ring closes.
    #[default]
    Reuse,
    /// Keep counting upwards, wrapping after 99.
    Iterative,
}

#[derive(Debug, Clone, Default)]
pub struct GeneratorConfig {
    pub ring_numbering: RingNumberingKind,
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ring_numbering(mut self, kind: RingNumberingKind) -> Self {
        self.ring_numbering = kind;
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn generate(&self, g: &Graph) -> Result<String, SmilesError> {
        let rnums: Box<dyn RingNumbering> = match self.config.ring_numbering {
            RingNumberingKind::Reuse => Box::new(ReuseRingNumbering::default()),
            RingNumberingKind::Iterative => Box::new(IterativeRingNumbering::default()),
        };
        let prepared = Prepared::new(g);
        let mut out = String::with_capacity(g.order() * 2);
        Writer {
            g,
            p: &prepared,
            rnums,
            numbers: vec![0; prepared.n_rings],
        }
        .write(&mut out)?;
        if let Some(title) = g.title() {
            out.push(' ');
            out.push_str(title);
        }
        Ok(out)
    }
}

#[derive(Debug, Clone, Copy)]
struct RingBond {
    partner: usize,
    ring: usize,
}

/// Spanning forest and ring closures, in the order they will be written.
struct Prepared {
    roots: Vec<usize>,
    parent: Vec<Option<usize>>,
    children: Vec<Vec<usize>>,
    opens: Vec<Vec<RingBond>>,
    closes: Vec<Vec<RingBond>>,
    n_rings: usize,
}

impl Prepared {
    fn new(g: &Graph) -> Self {
        let n = g.order();
        let mut p = Prepared {
            roots: Vec::new(),
            parent: vec![None; n],
            children: vec![Vec::new(); n],
            opens: vec![Vec::new(); n],
            closes: vec![Vec::new(); n],
            n_rings: 0,
        };
        let mut rank = vec![UNVISITED; n];
        let mut visited = 0;
        let mut stack: Vec<(usize, usize)> = Vec::new();

        for root in 0..n {
            if rank[root] != UNVISITED {
                continue;
            }
            p.roots.push(root);
            rank[root] = visited;
            visited += 1;
            stack.push((root, 0));

            while let Some((v, i)) = stack.last_mut() {
                let v = *v;
                let Some(e) = g.edges(v).get(*i) else {
                    stack.pop();
                    continue;
                };
                *i += 1;
                let w = e.other(v);
                if rank[w] == UNVISITED {
                    rank[w] = visited;
                    visited += 1;
                    p.parent[w] = Some(v);
                    p.children[v].push(w);
                    stack.push((w, 0));
                } else if rank[w] < rank[v] && p.parent[v] != Some(w) {
                    let ring = p.n_rings;
                    p.n_rings += 1;
                    p.opens[w].push(RingBond { partner: v, ring });
                    p.closes[v].push(RingBond { partner: w, ring });
                }
            }
        }
        p
    }

    /// Neighbors of `v` in the order they are written around it.
    fn written_order(&self, v: usize) -> Vec<usize> {
        self.parent[v]
            .into_iter()
            .chain(self.opens[v].iter().map(|r| r.partner))
            .chain(self.closes[v].iter().map(|r| r.partner))
            .chain(self.children[v].iter().copied())
            .collect()
    }

    /// As [`written_order`](Self::written_order), with `v` itself where an
    /// implicit hydrogen or lone pair is read.
    fn with_self(&self, v: usize) -> Vec<usize> {
        let mut order = self.written_order(v);
        let at = if self.parent[v].is_some() { 1 } else { 0 };
        order.insert(at.min(order.len()), v);
        order
    }

    /// Descriptor of `t` for the written neighbor order.
    fn descriptor(&self, g: &Graph, t: &Topology, rank: &mut [usize]) -> Configuration {
        let v = t.atom();
        let listed: Vec<usize> = if t.kind() == ConfigurationType::ExtendedTetrahedral {
            let mut listed = Vec::with_capacity(4);
            for first in self.written_order(v).into_iter().take(2) {
                let (end, via) = terminus(g, v, first);
                listed.extend(self.with_self(end).into_iter().filter(|&x| x != via));
            }
            listed
        } else {
            self.with_self(v)
        };
        for (i, &x) in listed.iter().enumerate() {
            rank[x] = i;
        }
        let c = t.order_by(rank).configuration();
        for &x in &listed {
            rank[x] = UNVISITED;
        }

        let shorthand = c.shorthand();
        if shorthand != Configuration::Unknown && Topology::to_explicit(g, v, shorthand) == c {
            shorthand
        } else {
            c
        }
    }
}

enum Step {
    Atom { v: usize, branch: bool },
    CloseBranch,
}

struct Writer<'a> {
    g: &'a Graph,
    p: &'a Prepared,
    rnums: Box<dyn RingNumbering>,
    /// Number currently assigned to each ring closure.
    numbers: Vec<usize>,
}

impl Writer<'_> {
    fn write(&mut self, out: &mut String) -> Result<(), SmilesError> {
        let p = self.p;
        let mut rank = vec![UNVISITED; self.g.order()];
        let mut stack: Vec<Step> = Vec::new();
        for (i, &root) in p.roots.iter().enumerate() {
            if i > 0 {
                out.push('.');
            }
            self.rnums.reset();
            stack.push(Step::Atom {
                v: root,
                branch: false,
            });
            while let Some(step) = stack.pop() {
                let (v, branch) = match step {
                    Step::CloseBranch => {
                        out.push(')');
                        continue;
                    }
                    Step::Atom { v, branch } => (v, branch),
                };
                if branch {
                    out.push('(');
                }
                if let Some(u) = p.parent[v] {
                    out.push_str(self.bond_symbol(u, v));
                }
                self.write_vertex(v, &mut rank, out)?;

                let children = &p.children[v];
                if let Some((&last, rest)) = children.split_last() {
                    stack.push(Step::Atom {
                        v: last,
                        branch: false,
                    });
                    for &w in rest.iter().rev() {
                        stack.push(Step::CloseBranch);
                        stack.push(Step::Atom { v: w, branch: true });
                    }
                }
            }
        }
        Ok(())
    }

    /// Atom token, ring digits and any expanded hydrogens of `v`.
    fn write_vertex(
        &mut self,
        v: usize,
        rank: &mut [usize],
        out: &mut String,
    ) -> Result<(), SmilesError> {
        let (g, p) = (self.g, self.p);
        let atom = g.atom(v);
        let configuration = g
            .topology_of(v)
            .map_or(Configuration::Unknown, |t| p.descriptor(g, t, rank));
        let hydrogens = g.hydrogens(v);
        let expand = atom.element == Element::H && hydrogens > 0 && g.topology_of(v).is_none();

        if expand {
            write_bracket(atom, Configuration::Unknown, 0, out);
        } else if configuration == Configuration::Unknown && can_write_bare(g, v) {
            out.push_str(&atom.symbol());
        } else {
            // the H count is a single digit
            if hydrogens > 9 {
                return Err(SmilesError::TooManyHydrogens {
                    u: v,
                    count: hydrogens,
                });
            }
            write_bracket(atom, configuration, hydrogens, out);
        }

        for r in &p.opens[v] {
            let rnum = self.rnums.next()?;
            self.rnums.mark_used(rnum);
            self.numbers[r.ring] = rnum;
            out.push_str(self.bond_symbol(v, r.partner));
            write_ring_number(rnum, out);
        }
        for r in &p.closes[v] {
            let rnum = self.numbers[r.ring];
            self.rnums.free(rnum);
            write_ring_number(rnum, out);
        }

        if expand {
            let more = !p.children[v].is_empty();
            for i in 0..hydrogens {
                if i + 1 == hydrogens && !more {
                    out.push_str("[H]");
                } else {
                    out.push_str("([H])");
                }
            }
        }
        Ok(())
    }

    /// Symbol of the bond `u`-`v` read from `u`; empty when implied.
    fn bond_symbol(&self, u: usize, v: usize) -> &'static str {
        let Some(e) = self.g.edge(u, v) else {
            return "";
        };
        let aromatic = self.g.atom(u).aromatic && self.g.atom(v).aromatic;
        match e.bond_from(u) {
            Bond::Single if aromatic => "-",
            Bond::Single | Bond::Implicit | Bond::ImplicitAromatic => "",
            b => b.symbol(),
        }
    }
}

/// Organic-subset atoms whose hydrogens are exactly what their bonds imply.
fn can_write_bare(g: &Graph, v: usize) -> bool {
    let atom = g.atom(v);
    if atom.needs_bracket() || g.topology_of(v).is_some() {
        return false;
    }
    if atom.aromatic && !atom.element.aromatic_allowed() {
        return false;
    }
    let implied = atom
        .element
        .implied_hydrogens(g.bond_order_sum(v), atom.aromatic);
    g.hydrogens(v) == implied
}

fn write_bracket(atom: &Atom, configuration: Configuration, hydrogens: u8, out: &mut String) {
    out.push('[');
    if let Some(label) = &atom.label {
        out.push_str(label);
        out.push(']');
        return;
    }
    if let Some(isotope) = atom.isotope {
        out.push_str(&isotope.to_string());
    }
    out.push_str(&atom.symbol());
    out.push_str(configuration.symbol());
    match hydrogens {
        0 => {}
        1 => out.push('H'),
        h => {
            out.push('H');
            out.push_str(&h.to_string());
        }
    }
    match atom.charge {
        0 => {}
        1 => out.push('+'),
        -1 => out.push('-'),
        c if c > 0 => {
            out.push('+');
            out.push_str(&c.to_string());
        }
        c => out.push_str(&c.to_string()),
    }
    if atom.atom_class != 0 {
        out.push(':');
        out.push_str(&atom.atom_class.to_string());
    }
    out.push(']');
}
