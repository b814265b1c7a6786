use std::collections::{HashMap, VecDeque};

use tracing::debug;

use crate::graph::Graph;
use crate::support::{IntSet, Tuple, UnionFind};

use super::{eligible, Matching};

const NIL: usize = usize::MAX;

/// Edmonds' blossom algorithm over the vertices of a subset.
///
/// Grows an alternating forest from every free vertex. An edge between two
/// even vertices of different trees is an augmenting path; within the same
/// tree it closes an odd cycle, which is contracted into its base with a
/// union-find so the search can continue through it. Each augmentation
/// restarts the search with a fresh forest.
pub struct MaximumMatching<'a> {
    graph: &'a Graph,
    matching: &'a mut Matching,
    subset: &'a IntSet,
    /// For an even vertex, the odd vertex it is matched to in the forest
    /// (itself for a root).
    even: Vec<usize>,
    /// For an odd vertex, the even vertex that reached it.
    odd: Vec<usize>,
    queue: VecDeque<usize>,
    uf: UnionFind,
    /// The edge whose discovery contracted each formerly-odd vertex into a
    /// blossom.
    bridges: HashMap<usize, Tuple>,
    v_ancestors: IntSet,
    w_ancestors: IntSet,
    path: Vec<usize>,
}

impl<'a> MaximumMatching<'a> {
    /// Augment `m` until it is maximum over `subset`.
    ///
    /// `n_matched` is the number of vertices `m` already matches; the
    /// returned count includes those plus two for every augmentation.
    pub fn maximise(g: &'a Graph, m: &'a mut Matching, n_matched: usize, subset: &'a IntSet) -> usize {
        let n = g.order();
        let mut mm = MaximumMatching {
            graph: g,
            matching: m,
            subset,
            even: vec![NIL; n],
            odd: vec![NIL; n],
            queue: VecDeque::with_capacity(n),
            uf: UnionFind::new(n),
            bridges: HashMap::new(),
            v_ancestors: IntSet::none_of(n),
            w_ancestors: IntSet::none_of(n),
            path: Vec::with_capacity(n),
        };
        let mut n_matched = n_matched;
        while mm.augment() {
            n_matched += 2;
        }
        debug!(n_matched, subset = subset.len(), "maximum matching");
        n_matched
    }

    /// Search for and apply one augmenting path.
    fn augment(&mut self) -> bool {
        self.even.fill(NIL);
        self.odd.fill(NIL);
        self.uf.clear();
        self.bridges.clear();
        self.queue.clear();

        for v in self.subset.iter() {
            if self.matching.unmatched(v) {
                self.even[v] = v;
                self.queue.push_back(v);
            }
        }

        while let Some(v) = self.queue.pop_front() {
            let graph = self.graph;
            for e in graph.edges(v) {
                let Some(w) = eligible(e, v, self.subset) else {
                    continue;
                };
                if self.even[self.uf.find(w)] != NIL {
                    if self.check(v, w) {
                        return true;
                    }
                } else if self.odd[w] == NIL {
                    self.odd[w] = v;
                    // w is not even, so it was matched when the forest was
                    // seeded from every free vertex
                    let Some(u) = self.matching.other(w) else {
                        continue;
                    };
                    if self.even[self.uf.find(u)] == NIL {
                        self.even[u] = w;
                        self.queue.push_back(u);
                    }
                }
            }
        }
        false
    }

    /// Handle an edge between even vertices `v` and `w`: contract a blossom
    /// or augment along the path between two roots.
    fn check(&mut self, v: usize, w: usize) -> bool {
        if self.uf.connected(v, w) {
            return false;
        }

        self.v_ancestors.clear();
        self.w_ancestors.clear();
        let mut v_curr = v;
        let mut w_curr = w;

        loop {
            v_curr = self.parent(true, v_curr);
            w_curr = self.parent(false, w_curr);

            if v_curr == w_curr {
                self.blossom(v, w, v_curr);
                return false;
            }

            if self.uf.find(self.even[v_curr]) == v_curr
                && self.uf.find(self.even[w_curr]) == w_curr
            {
                self.augment_from(v);
                self.augment_from(w);
                self.matching.match_pair(v, w);
                return true;
            }

            if self.w_ancestors.contains(v_curr) {
                self.blossom(v, w, v_curr);
                return false;
            }
            if self.v_ancestors.contains(w_curr) {
                self.blossom(v, w, w_curr);
                return false;
            }
        }
    }

    /// Step from `curr` to the next even vertex towards its root, recording
    /// the vertices passed in the chosen ancestor set.
    fn parent(&mut self, from_v: bool, curr: usize) -> usize {
        let curr = self.uf.find(curr);
        let ancestors = if from_v {
            &mut self.v_ancestors
        } else {
            &mut self.w_ancestors
        };
        ancestors.add(curr);
        let parent = self.uf.find(self.even[curr]);
        if parent == curr {
            return curr;
        }
        ancestors.add(parent);
        self.uf.find(self.odd[parent])
    }

    fn blossom(&mut self, v: usize, w: usize, base: usize) {
        let base = self.uf.find(base);
        let base_even = self.even[base];
        let supports1 = self.blossom_supports(v, w, base);
        let supports2 = self.blossom_supports(w, v, base);

        for &s in &supports1 {
            self.uf.union(s, supports1[0]);
        }
        for &s in &supports2 {
            self.uf.union(s, supports2[0]);
        }
        let rep = self.uf.find(base);
        self.even[rep] = base_even;
        debug!(v, w, base, "contracted blossom");
    }

    /// Vertices on the tree path from `v` down to `base`. The odd vertices
    /// on it become even: they get `(v, w)` as their bridge and are queued.
    fn blossom_supports(&mut self, v: usize, w: usize, base: usize) -> Vec<usize> {
        let bridge = Tuple::of(v, w);
        let mut path = vec![self.uf.find(v)];
        while let Some(&last) = path.last() {
            if last == base {
                break;
            }
            let u = self.even[last];
            path.push(u);
            self.bridges.insert(u, bridge);
            self.queue.push_back(u);
            path.push(self.uf.find(self.odd[u]));
        }
        path
    }

    /// Flip the matching along the path from `v` back to its root.
    fn augment_from(&mut self, v: usize) {
        self.build_path(v);
        let path = std::mem::take(&mut self.path);
        for i in (2..path.len()).step_by(2) {
            self.matching.match_pair(path[i], path[i - 1]);
        }
        self.path = path;
    }

    /// Fill `self.path` with the alternating path from `start` to its
    /// root, expanding contracted blossoms through their bridges.
    ///
    /// Expanding a blossom needs the path from one end of its bridge down
    /// to the vertex being lifted, reversed. Those sub-paths are tracked on
    /// an explicit stack of frames instead of by recursion.
    fn build_path(&mut self, start: usize) {
        struct Frame {
            start: usize,
            goal: usize,
            begin: usize,
            resume: usize,
        }

        self.path.clear();
        let mut frames = vec![Frame {
            start,
            goal: NIL,
            begin: 0,
            resume: NIL,
        }];

        while let Some(top) = frames.last_mut() {
            if self.odd[top.start] != NIL {
                let Some(&bridge) = self.bridges.get(&top.start) else {
                    break;
                };
                top.resume = bridge.second();
                let goal = top.start;
                frames.push(Frame {
                    start: bridge.first(),
                    goal,
                    begin: self.path.len(),
                    resume: NIL,
                });
                continue;
            }

            self.path.push(top.start);
            let finished = match self.matching.other(top.start) {
                None => true,
                Some(partner) => {
                    self.path.push(partner);
                    if partner == top.goal {
                        true
                    } else {
                        top.start = self.odd[partner];
                        false
                    }
                }
            };
            if !finished {
                continue;
            }

            let Some(done) = frames.pop() else {
                break;
            };
            let Some(parent) = frames.last_mut() else {
                break;
            };
            self.path[done.begin..].reverse();
            parent.start = parent.resume;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom::Atom;
    use crate::bond::Bond;
    use crate::edge::Edge;
    use crate::element::Element;
    use crate::matching::ArbitraryMatching;
    use crate::smiles::parse_smiles;

    fn graph(n: usize, edges: &[(usize, usize)]) -> Graph {
        let mut g = Graph::new();
        for _ in 0..n {
            g.add_atom(Atom::aromatic(Element::C));
        }
        for &(u, v) in edges {
            g.add_edge(Edge::new(u, v, Bond::Aromatic)).unwrap();
        }
        g
    }

    fn assert_valid(g: &Graph, m: &Matching) {
        for pair in m.pairs() {
            assert!(g.adjacent(pair.first(), pair.second()));
            assert_eq!(m.other(pair.second()), Some(pair.first()));
        }
    }

    #[test]
    fn finds_path_augmentation() {
        // 0-1-2-3 with 1-2 matched: the only maximum matching is 0-1, 2-3.
        let g = graph(4, &[(0, 1), (1, 2), (2, 3)]);
        let mut m = Matching::empty(4);
        m.match_pair(1, 2);
        let subset = IntSet::all_of(4);
        assert_eq!(MaximumMatching::maximise(&g, &mut m, 2, &subset), 4);
        assert_eq!(m.other(0), Some(1));
        assert_eq!(m.other(3), Some(2));
    }

    #[test]
    fn augments_through_a_blossom() {
        // Triangle 0-1-2 with 3 hanging off 0 and 4 off 1. With 0-1 matched
        // the search from 2 closes the triangle into a blossom; the path
        // from 4 then has to be lifted back out of it.
        let g = graph(5, &[(0, 1), (1, 2), (2, 0), (0, 3), (1, 4)]);
        let mut m = Matching::empty(5);
        m.match_pair(0, 1);
        let subset = IntSet::all_of(5);
        assert_eq!(MaximumMatching::maximise(&g, &mut m, 2, &subset), 4);
        assert_eq!(m.len(), 4);
        assert_valid(&g, &m);
    }

    /// Size of a maximum matching by trying every subset of edges.
    fn brute_force(n: usize, edges: &[(usize, usize)]) -> usize {
        let mut best = 0;
        for mask in 0u32..(1 << edges.len()) {
            let mut used = vec![false; n];
            let mut ok = true;
            let mut count = 0;
            for (i, &(u, v)) in edges.iter().enumerate() {
                if mask & (1 << i) == 0 {
                    continue;
                }
                if used[u] || used[v] {
                    ok = false;
                    break;
                }
                used[u] = true;
                used[v] = true;
                count += 2;
            }
            if ok {
                best = best.max(count);
            }
        }
        best
    }

    #[test]
    fn agrees_with_brute_force() {
        let cases: Vec<(usize, Vec<(usize, usize)>)> = vec![
            (5, vec![(0, 1), (1, 2), (2, 0), (0, 3), (1, 4)]),
            (6, vec![(0, 1), (1, 2), (2, 3), (3, 4), (4, 0), (2, 5)]),
            (8, vec![(0, 1), (1, 2), (2, 3), (3, 4), (4, 0), (0, 5), (5, 6), (6, 7), (7, 5)]),
            (
                10,
                vec![
                    (0, 1), (1, 2), (2, 3), (3, 4), (4, 0),
                    (0, 5), (1, 6), (2, 7), (3, 8), (4, 9),
                    (5, 7), (7, 9), (9, 6), (6, 8), (8, 5),
                ],
            ),
            (7, vec![(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 5), (5, 3), (5, 6)]),
        ];
        for (n, edges) in cases {
            let g = graph(n, &edges);
            let subset = IntSet::all_of(n);
            let expected = brute_force(n, &edges);
            for seed in [false, true] {
                let mut m = Matching::empty(n);
                let seeded = if seed {
                    ArbitraryMatching::initial(&g, &mut m, &subset)
                } else {
                    0
                };
                let found = MaximumMatching::maximise(&g, &mut m, seeded, &subset);
                assert_eq!(found, expected, "{edges:?}");
                assert_eq!(m.len(), expected);
                assert_valid(&g, &m);
            }
        }
    }

    #[test]
    fn covers_feasible_subset() {
        let g = parse_smiles("c1ccc2cc3ccccc3cc2c1").unwrap();
        let subset = IntSet::all_of(g.order());
        let mut m = Matching::empty(g.order());
        let seeded = ArbitraryMatching::initial(&g, &mut m, &subset);
        let n = MaximumMatching::maximise(&g, &mut m, seeded, &subset);
        assert_eq!(n, g.order());
        assert_eq!(m.len(), g.order());
        assert_valid(&g, &m);
    }

    #[test]
    fn odd_cycle_leaves_one_free() {
        let g = graph(5, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]);
        let subset = IntSet::all_of(5);
        let mut m = Matching::empty(5);
        assert_eq!(MaximumMatching::maximise(&g, &mut m, 0, &subset), 4);
        assert_valid(&g, &m);
    }

    #[test]
    fn respects_subset_and_single_bonds() {
        let mut g = graph(4, &[(0, 1), (2, 3)]);
        g.add_edge(Edge::new(1, 2, Bond::Single)).unwrap();
        let subset = IntSet::of(4, &[1, 2]);
        let mut m = Matching::empty(4);
        assert_eq!(MaximumMatching::maximise(&g, &mut m, 0, &subset), 0);
        assert!(m.is_empty());
    }
}
