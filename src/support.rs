//! Small fixed-capacity containers used by the matching engine.
//!
//! None of these grow after construction: every structure is sized to the
//! order of the graph being matched and discarded when the call returns.

use petgraph::unionfind::UnionFind as Forest;

/// A stack of vertex ids with a fixed capacity.
#[derive(Debug, Clone)]
pub struct IntStack {
    xs: Vec<usize>,
    capacity: usize,
}

impl IntStack {
    pub fn new(capacity: usize) -> Self {
        Self {
            xs: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Push `x`; pushes beyond the capacity are ignored and return `false`.
    pub fn push(&mut self, x: usize) -> bool {
        if self.xs.len() == self.capacity {
            return false;
        }
        self.xs.push(x);
        true
    }

    pub fn pop(&mut self) -> Option<usize> {
        self.xs.pop()
    }

    pub fn peek(&self) -> Option<usize> {
        self.xs.last().copied()
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn clear(&mut self) {
        self.xs.clear();
    }
}

/// A set of vertex ids drawn from `0..universe`.
///
/// Backed by a bitset; membership tests of ids outside the universe are
/// simply `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntSet {
    words: Vec<u64>,
    universe: usize,
}

impl IntSet {
    /// An empty set over `0..universe`.
    pub fn none_of(universe: usize) -> Self {
        Self {
            words: vec![0; universe.div_ceil(64)],
            universe,
        }
    }

    /// The full set `0..universe`.
    pub fn all_of(universe: usize) -> Self {
        let mut set = Self::none_of(universe);
        for x in 0..universe {
            set.add(x);
        }
        set
    }

    /// A set containing exactly `xs`.
    pub fn of(universe: usize, xs: &[usize]) -> Self {
        let mut set = Self::none_of(universe);
        for &x in xs {
            set.add(x);
        }
        set
    }

    pub fn universe(&self) -> usize {
        self.universe
    }

    pub fn add(&mut self, x: usize) {
        if x < self.universe {
            self.words[x / 64] |= 1 << (x % 64);
        }
    }

    pub fn remove(&mut self, x: usize) {
        if x < self.universe {
            self.words[x / 64] &= !(1 << (x % 64));
        }
    }

    pub fn contains(&self, x: usize) -> bool {
        x < self.universe && self.words[x / 64] & (1 << (x % 64)) != 0
    }

    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    pub fn clear(&mut self) {
        self.words.iter_mut().for_each(|w| *w = 0);
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.universe).filter(move |&x| self.contains(x))
    }
}

/// Disjoint-set forest over `0..n` used to collapse contracted blossoms.
///
/// Wraps petgraph's union-find and adds the reset the matching loop needs
/// between augmentations.
#[derive(Debug, Clone)]
pub struct UnionFind {
    forest: Forest<usize>,
    n: usize,
}

impl UnionFind {
    pub fn new(n: usize) -> Self {
        Self {
            forest: Forest::new(n),
            n,
        }
    }

    /// Representative of the set containing `x`.
    pub fn find(&mut self, x: usize) -> usize {
        self.forest.find_mut(x)
    }

    /// Merge the sets of `x` and `y`; returns `false` if already merged.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        self.forest.union(x, y)
    }

    pub fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Every element back in its own singleton set.
    pub fn clear(&mut self) {
        self.forest = Forest::new(self.n);
    }
}

/// An ordered pair of vertex ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tuple {
    first: usize,
    second: usize,
}

impl Tuple {
    pub fn of(first: usize, second: usize) -> Self {
        Self { first, second }
    }

    pub fn first(&self) -> usize {
        self.first
    }

    pub fn second(&self) -> usize {
        self.second
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_respects_capacity() {
        let mut s = IntStack::new(2);
        assert!(s.push(1));
        assert!(s.push(2));
        assert!(!s.push(3));
        assert_eq!(s.len(), 2);
        assert_eq!(s.peek(), Some(2));
        assert_eq!(s.pop(), Some(2));
        assert_eq!(s.pop(), Some(1));
        assert_eq!(s.pop(), None);
        assert!(s.is_empty());
    }

    #[test]
    fn set_membership() {
        let mut set = IntSet::none_of(130);
        assert!(set.is_empty());
        set.add(0);
        set.add(64);
        set.add(129);
        set.add(500);
        assert!(set.contains(0));
        assert!(set.contains(64));
        assert!(set.contains(129));
        assert!(!set.contains(500));
        assert_eq!(set.len(), 3);
        set.remove(64);
        assert!(!set.contains(64));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 129]);
    }

    #[test]
    fn all_of_contains_everything() {
        let set = IntSet::all_of(70);
        assert_eq!(set.len(), 70);
        assert!(set.contains(69));
        assert!(!set.contains(70));
    }

    #[test]
    fn union_find_merges_and_resets() {
        let mut uf = UnionFind::new(5);
        assert!(!uf.connected(0, 4));
        uf.union(0, 1);
        uf.union(1, 4);
        assert!(uf.connected(0, 4));
        assert!(!uf.union(0, 4));
        uf.clear();
        assert!(!uf.connected(0, 4));
    }

    #[test]
    fn tuple_accessors() {
        let t = Tuple::of(3, 7);
        assert_eq!(t.first(), 3);
        assert_eq!(t.second(), 7);
        assert_ne!(t, Tuple::of(7, 3));
    }
}
