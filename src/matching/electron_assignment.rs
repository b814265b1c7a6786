use tracing::debug;

use crate::graph::Graph;
use crate::support::{IntSet, UnionFind};

/// Feasibility check for placing alternating double bonds.
pub struct ElectronAssignment;

impl ElectronAssignment {
    /// Whether every connected delocalized system of `g` has an even number
    /// of atoms.
    ///
    /// Only aromatic bonds (written or implied) join atoms into a system. A
    /// system with an odd number of atoms cannot be covered by double bonds,
    /// so there is no point running the matching on it. `true` does not
    /// guarantee a perfect matching exists.
    pub fn verify(g: &Graph) -> bool {
        let mut subset = IntSet::none_of(g.order());
        for e in g.all_edges().filter(|e| e.bond().is_aromatic()) {
            let u = e.either();
            subset.add(u);
            subset.add(e.other(u));
        }
        Self::verify_subset(g, &subset)
    }

    /// As [`verify`](Self::verify), restricted to the vertices of `subset`.
    pub fn verify_subset(g: &Graph, subset: &IntSet) -> bool {
        let n = g.order();
        let mut uf = UnionFind::new(n);
        for e in g.all_edges() {
            if !e.bond().is_aromatic() {
                continue;
            }
            let u = e.either();
            let v = e.other(u);
            if subset.contains(u) && subset.contains(v) {
                uf.union(u, v);
            }
        }

        let mut sizes = vec![0usize; n];
        for v in subset.iter() {
            sizes[uf.find(v)] += 1;
        }
        let odd = sizes.iter().filter(|&&s| s % 2 == 1).count();
        if odd > 0 {
            debug!(odd, "delocalized systems with an odd number of atoms");
        }
        odd == 0
    }
}
