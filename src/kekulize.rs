//! Kekulization assigns alternating single and double bonds to aromatic ring systems.
//!
//! The input is a [`Graph`] whose aromatic bonds come from lower-case SMILES
//! atoms (e.g. `c1ccccc1`). The output is a copy with every aromatic bond
//! replaced by a single or double bond and every atom written aliphatic.
//! The atoms that still need a double bond are paired up with a perfect
//! matching from the [`matching`](crate::matching) engine.
//!
//! If no valid assignment exists (e.g. an odd-membered ring with the wrong
//! electron count), [`kekulize`] returns a [`KekulizeError`].

use thiserror::Error;
use tracing::debug;

use crate::atom::Atom;
use crate::bond::Bond;
use crate::edge::Edge;
use crate::element::Element;
use crate::graph::{Graph, GraphError};
use crate::matching::{ArbitraryMatching, ElectronAssignment, Matching, MaximumMatching};
use crate::support::IntSet;

/// Error returned when no valid Kekulé structure exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KekulizeError {
    /// The given atoms could not be assigned a double bond.
    #[error("cannot kekulize aromatic system: unmatched atoms {0:?}")]
    Unkekulizable(Vec<usize>),
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Replace the aromatic bonds of `g` with a Kekulé structure.
///
/// Bonds between two atoms that both need a double bond become `=` when the
/// matching pairs them; every other aromatic bond becomes single. Hydrogen
/// counts, stereo and non-aromatic bonds carry over unchanged. A graph with
/// no aromatic atoms is returned as is.
pub fn kekulize(g: &Graph) -> Result<Graph, KekulizeError> {
    if !g.has_flag(Graph::HAS_AROM) {
        return Ok(g.clone());
    }

    let n = g.order();
    let mut subset = IntSet::none_of(n);
    for u in 0..n {
        if needs_double(g, u) {
            subset.add(u);
        }
    }

    let mut m = Matching::empty(n);
    if !subset.is_empty() {
        if !ElectronAssignment::verify_subset(g, &subset) {
            return Err(KekulizeError::Unkekulizable(subset.iter().collect()));
        }
        let mut n_matched = ArbitraryMatching::initial(g, &mut m, &subset);
        if n_matched < subset.len() {
            n_matched += ArbitraryMatching::dfs(g, &mut m, &subset);
        }
        if n_matched < subset.len() {
            n_matched = MaximumMatching::maximise(g, &mut m, n_matched, &subset);
        }
        if n_matched < subset.len() {
            let unmatched: Vec<usize> = subset.iter().filter(|&v| m.unmatched(v)).collect();
            debug!(?unmatched, "no perfect matching");
            return Err(KekulizeError::Unkekulizable(unmatched));
        }
    }

    let mut out = Graph::with_capacity(n);
    for u in 0..n {
        out.add_atom(g.atom(u).to_aliphatic());
    }
    for e in g.all_edges() {
        let u = e.either();
        let v = e.other(u);
        let bond = match e.bond() {
            Bond::Aromatic | Bond::ImplicitAromatic if m.other(u) == Some(v) => Bond::Double,
            Bond::Aromatic => Bond::Single,
            Bond::ImplicitAromatic => Bond::Implicit,
            b => b,
        };
        out.add_edge(Edge::new(u, v, bond))?;
    }

    // Atoms whose implied hydrogens changed with their bonds keep the
    // original count written out.
    for u in 0..n {
        let atom = g.atom(u);
        if atom.hydrogens.is_none() && out.hydrogens(u) != g.hydrogens(u) {
            out.set_atom(
                u,
                Atom {
                    hydrogens: Some(g.hydrogens(u)),
                    bracket: true,
                    ..out.atom(u).clone()
                },
            );
        }
    }

    for t in g.topologies() {
        out.add_topology(t.clone())?;
    }
    if let Some(title) = g.title() {
        out.set_title(title);
    }
    debug!(pairs = m.pairs().count(), "kekulized");
    Ok(out)
}

/// An aromatic atom one bond short of its valence.
fn needs_double(g: &Graph, u: usize) -> bool {
    let atom = g.atom(u);
    if !atom.aromatic || !g.edges(u).iter().any(|e| e.bond().is_aromatic()) {
        return false;
    }
    let used = g.bond_order_sum(u) + g.hydrogens(u);
    let Some(target) = target_valence(atom.element, used, atom.charge) else {
        return false;
    };
    let gap = target - used;
    let is_bare_charged = gap == 2 && g.hydrogens(u) == 0 && atom.charge != 0;
    gap == 1 || is_bare_charged
}

fn target_valence(elem: Element, current_used: u8, formal_charge: i8) -> Option<u8> {
    let charge = formal_charge as i16;
    elem.default_valences()
        .iter()
        .filter_map(|&v| {
            let adjusted = v as i16 + charge;
            if adjusted > 0 {
                Some(adjusted as u8)
            } else {
                None
            }
        })
        .find(|&v| v >= current_used)
}
