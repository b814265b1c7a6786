use std::hash::{Hash, Hasher};

use crate::bond::Bond;

/// A bond between two vertices of a [`Graph`](crate::Graph).
///
/// The stored label is the one read from `u` towards `v`. An edge is equal
/// to the same edge written the other way round with the inverse label, so
/// `{u, v, /}` and `{v, u, \}` compare equal.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    u: usize,
    v: usize,
    bond: Bond,
}

impl Edge {
    pub fn new(u: usize, v: usize, bond: Bond) -> Self {
        Self { u, v, bond }
    }

    /// One endpoint (the one the label is relative to).
    pub fn either(&self) -> usize {
        self.u
    }

    /// The endpoint that is not `x`.
    ///
    /// Passing a vertex that is not an endpoint returns `u`.
    pub fn other(&self, x: usize) -> usize {
        if x == self.u {
            self.v
        } else {
            self.u
        }
    }

    pub fn contains(&self, x: usize) -> bool {
        x == self.u || x == self.v
    }

    /// The label as stored, relative to [`either`](Self::either).
    pub fn bond(&self) -> Bond {
        self.bond
    }

    /// The label read from endpoint `x`.
    pub fn bond_from(&self, x: usize) -> Bond {
        if x == self.u {
            self.bond
        } else {
            self.bond.inverse()
        }
    }

    /// Same endpoints with the label replaced, `bond` read from `x`.
    pub fn with_bond_from(&self, x: usize, bond: Bond) -> Edge {
        let bond = if x == self.u { bond } else { bond.inverse() };
        Edge { bond, ..*self }
    }

    /// The same edge with `u` and `v` swapped.
    pub fn flip(&self) -> Edge {
        Edge::new(self.v, self.u, self.bond.inverse())
    }

    fn canonical(&self) -> (usize, usize, Bond) {
        if self.u <= self.v {
            (self.u, self.v, self.bond)
        } else {
            (self.v, self.u, self.bond.inverse())
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}
