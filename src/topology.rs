//! Stereo centers and their re-ranking.
//!
//! A [`Topology`] records a center, its neighbors in the order they were
//! listed, and the descriptor that applies to that order. Reordering the
//! neighbors (for example to match the order a generator writes them in)
//! changes the descriptor but not the arrangement in space; [`Topology::order_by`]
//! computes the new descriptor.
//!
//! Tetrahedral, extended tetrahedral and trigonal centers are fully
//! described by the parity of the listing. Square-planar, trigonal
//! bipyramidal and octahedral centers are described by a permutation class:
//! the descriptor number identifies a placement of the listed neighbors on
//! the corners of the shape, and two listings describe the same center when
//! a rotation of the shape maps one placement onto the other.

use lazy_static::lazy_static;

use crate::bond::Bond;
use crate::configuration::{Configuration, ConfigurationType};
use crate::element::Element;
use crate::graph::Graph;

/// A stereo center.
///
/// A neighbor equal to the center `u` (or, for allenes, to the terminus it
/// belongs to) stands for an implicit hydrogen or a lone pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Topology {
    Tetrahedral {
        u: usize,
        vs: [usize; 4],
        /// `1` for `TH1`, `-1` for `TH2`.
        parity: i8,
    },
    /// Allene-like center; `vs` are the substituents of the two termini.
    ExtendedTetrahedral {
        u: usize,
        vs: [usize; 4],
        parity: i8,
    },
    Trigonal {
        u: usize,
        vs: [usize; 3],
        parity: i8,
    },
    SquarePlanar {
        u: usize,
        vs: [usize; 4],
        /// Descriptor number, `1..=3`.
        class: u8,
    },
    TrigonalBipyramidal {
        u: usize,
        vs: [usize; 5],
        class: u8,
    },
    Octahedral {
        u: usize,
        vs: [usize; 6],
        class: u8,
    },
}

impl Topology {
    /// Center `u` with neighbors `vs` listed in the order `c` refers to.
    ///
    /// `c` must be an explicit descriptor (not `@`/`@@`, see
    /// [`to_explicit`](Self::to_explicit)) and `vs` must have the number of
    /// neighbors its geometry requires; otherwise there is no topology.
    pub fn create(u: usize, vs: &[usize], c: Configuration) -> Option<Topology> {
        let parity = if c.number() == 1 { 1 } else { -1 };
        let class = c.number() as u8;
        let topology = match c.kind() {
            ConfigurationType::Tetrahedral => Topology::Tetrahedral {
                u,
                vs: vs.try_into().ok()?,
                parity,
            },
            ConfigurationType::ExtendedTetrahedral => Topology::ExtendedTetrahedral {
                u,
                vs: vs.try_into().ok()?,
                parity,
            },
            ConfigurationType::DoubleBond => Topology::Trigonal {
                u,
                vs: vs.try_into().ok()?,
                parity,
            },
            ConfigurationType::SquarePlanar => Topology::SquarePlanar {
                u,
                vs: vs.try_into().ok()?,
                class,
            },
            ConfigurationType::TrigonalBipyramidal => Topology::TrigonalBipyramidal {
                u,
                vs: vs.try_into().ok()?,
                class,
            },
            ConfigurationType::Octahedral => Topology::Octahedral {
                u,
                vs: vs.try_into().ok()?,
                class,
            },
            ConfigurationType::None | ConfigurationType::Implicit => return None,
        };
        Some(topology)
    }

    /// The center atom.
    pub fn atom(&self) -> usize {
        match self {
            Topology::Tetrahedral { u, .. }
            | Topology::ExtendedTetrahedral { u, .. }
            | Topology::Trigonal { u, .. }
            | Topology::SquarePlanar { u, .. }
            | Topology::TrigonalBipyramidal { u, .. }
            | Topology::Octahedral { u, .. } => *u,
        }
    }

    /// Neighbors in listing order.
    pub fn neighbors(&self) -> &[usize] {
        match self {
            Topology::Tetrahedral { vs, .. }
            | Topology::ExtendedTetrahedral { vs, .. }
            | Topology::SquarePlanar { vs, .. } => vs.as_slice(),
            Topology::Trigonal { vs, .. } => vs.as_slice(),
            Topology::TrigonalBipyramidal { vs, .. } => vs.as_slice(),
            Topology::Octahedral { vs, .. } => vs.as_slice(),
        }
    }

    pub fn kind(&self) -> ConfigurationType {
        match self {
            Topology::Tetrahedral { .. } => ConfigurationType::Tetrahedral,
            Topology::ExtendedTetrahedral { .. } => ConfigurationType::ExtendedTetrahedral,
            Topology::Trigonal { .. } => ConfigurationType::DoubleBond,
            Topology::SquarePlanar { .. } => ConfigurationType::SquarePlanar,
            Topology::TrigonalBipyramidal { .. } => ConfigurationType::TrigonalBipyramidal,
            Topology::Octahedral { .. } => ConfigurationType::Octahedral,
        }
    }

    /// Descriptor for the current listing.
    pub fn configuration(&self) -> Configuration {
        let n = match self {
            Topology::Tetrahedral { parity, .. }
            | Topology::ExtendedTetrahedral { parity, .. }
            | Topology::Trigonal { parity, .. } => {
                if *parity > 0 {
                    1
                } else {
                    2
                }
            }
            Topology::SquarePlanar { class, .. }
            | Topology::TrigonalBipyramidal { class, .. }
            | Topology::Octahedral { class, .. } => *class as usize,
        };
        Configuration::of(self.kind(), n).unwrap_or(Configuration::Unknown)
    }

    /// The same center with its neighbors sorted by `rank` (indexed by
    /// vertex id) and the descriptor adjusted so the arrangement in space
    /// is unchanged.
    pub fn order_by(&self, rank: &[usize]) -> Topology {
        match *self {
            Topology::Tetrahedral { u, mut vs, parity } => {
                let p = sort_parity(&mut vs, rank);
                Topology::Tetrahedral {
                    u,
                    vs,
                    parity: parity * p,
                }
            }
            Topology::ExtendedTetrahedral { u, mut vs, parity } => {
                let p = sort_parity(&mut vs, rank);
                Topology::ExtendedTetrahedral {
                    u,
                    vs,
                    parity: parity * p,
                }
            }
            Topology::Trigonal { u, mut vs, parity } => {
                let p = sort_parity(&mut vs, rank);
                Topology::Trigonal {
                    u,
                    vs,
                    parity: parity * p,
                }
            }
            Topology::SquarePlanar { u, vs, class } => {
                let (vs, class) = reclassify(&SQUARE_PLANAR, vs, class, rank);
                Topology::SquarePlanar { u, vs, class }
            }
            Topology::TrigonalBipyramidal { u, vs, class } => {
                let (vs, class) = reclassify(&TRIGONAL_BIPYRAMIDAL, vs, class, rank);
                Topology::TrigonalBipyramidal { u, vs, class }
            }
            Topology::Octahedral { u, vs, class } => {
                let (vs, class) = reclassify(&OCTAHEDRAL, vs, class, rank);
                Topology::Octahedral { u, vs, class }
            }
        }
    }

    /// The explicit descriptor that `@`/`@@` stands for on atom `u` of `g`.
    ///
    /// The geometry is chosen from the valence (neighbors plus hydrogens):
    ///
    /// * 4: tetrahedral
    /// * 3: tetrahedral when a lone pair completes it (sulfoxide-like S/Se,
    ///   neutral trivalent N/P), trigonal otherwise
    /// * 2: extended tetrahedral between two double bonds, trigonal next to
    ///   one double bond
    /// * 5: trigonal bipyramidal, 6: octahedral
    ///
    /// Anything else has no geometry and gives `Unknown`. Explicit
    /// descriptors are returned unchanged.
    pub fn to_explicit(g: &Graph, u: usize, c: Configuration) -> Configuration {
        if !c.is_shorthand() {
            return c;
        }
        let valence = g.degree(u) + g.hydrogens(u) as usize;
        let kind = match valence {
            4 => ConfigurationType::Tetrahedral,
            3 if has_lone_pair(g, u) => ConfigurationType::Tetrahedral,
            3 => ConfigurationType::DoubleBond,
            2 => match count_bonds(g, u, Bond::Double) {
                2 => ConfigurationType::ExtendedTetrahedral,
                1 => ConfigurationType::DoubleBond,
                _ => return Configuration::Unknown,
            },
            5 => ConfigurationType::TrigonalBipyramidal,
            6 => ConfigurationType::Octahedral,
            _ => return Configuration::Unknown,
        };
        c.explicit_for(kind)
    }
}

fn count_bonds(g: &Graph, u: usize, bond: Bond) -> usize {
    g.edges(u).iter().filter(|e| e.bond() == bond).count()
}

fn has_lone_pair(g: &Graph, u: usize) -> bool {
    let atom = g.atom(u);
    match atom.element {
        Element::S | Element::Se => {
            count_bonds(g, u, Bond::Double) == 1 && g.degree(u) + g.hydrogens(u) as usize == 3
        }
        Element::N | Element::P => {
            atom.charge == 0 && usize::from(g.bond_order_sum(u)) + usize::from(g.hydrogens(u)) == 3
        }
        _ => false,
    }
}

/// Sort `vs` by rank, returning `1` for an even permutation and `-1` for
/// an odd one.
fn sort_parity(vs: &mut [usize], rank: &[usize]) -> i8 {
    let mut swaps = 0;
    for i in 1..vs.len() {
        let mut j = i;
        while j > 0 && rank[vs[j - 1]] > rank[vs[j]] {
            vs.swap(j - 1, j);
            swaps += 1;
            j -= 1;
        }
    }
    if swaps % 2 == 0 {
        1
    } else {
        -1
    }
}

fn reclassify<const N: usize>(
    geometry: &Geometry,
    vs: [usize; N],
    class: u8,
    rank: &[usize],
) -> ([usize; N], u8) {
    let mut order: Vec<usize> = (0..N).collect();
    order.sort_by_key(|&i| rank[vs[i]]);

    let layout = &geometry.layouts[class as usize - 1];
    let placed: Vec<usize> = order.iter().map(|&i| layout[i]).collect();
    let class = geometry
        .classify(&placed)
        .map_or(class, |c| c as u8 + 1);

    let mut sorted = vs;
    for (k, &i) in order.iter().enumerate() {
        sorted[k] = vs[i];
    }
    (sorted, class)
}

/// Corner positions of a shape and the placements each descriptor stands for.
struct Geometry {
    /// Proper rotations as permutations of the corners.
    rotations: Vec<Vec<usize>>,
    /// `layouts[c - 1][i]` is the corner of the `i`th listed neighbor for
    /// descriptor number `c`.
    layouts: Vec<Vec<usize>>,
}

impl Geometry {
    fn new(generators: &[&[usize]], layouts: Vec<Vec<usize>>) -> Self {
        let n = generators[0].len();
        let mut rotations: Vec<Vec<usize>> = vec![(0..n).collect()];
        let mut i = 0;
        while i < rotations.len() {
            for g in generators {
                let next: Vec<usize> = rotations[i].iter().map(|&p| g[p]).collect();
                if !rotations.contains(&next) {
                    rotations.push(next);
                }
            }
            i += 1;
        }
        Self { rotations, layouts }
    }

    /// Index of the layout some rotation maps onto `placed`.
    fn classify(&self, placed: &[usize]) -> Option<usize> {
        self.layouts.iter().position(|layout| {
            self.rotations
                .iter()
                .any(|g| layout.iter().zip(placed).all(|(&p, &q)| g[p] == q))
        })
    }
}

// Square corners in cyclic order 0, 1, 2, 3.
fn square_planar() -> Geometry {
    Geometry::new(
        &[&[1, 2, 3, 0], &[0, 3, 2, 1]],
        vec![
            // U: 0 trans 2
            vec![0, 1, 2, 3],
            // 4: 0 trans 1
            vec![0, 2, 1, 3],
            // Z: 0 trans 3
            vec![0, 1, 3, 2],
        ],
    )
}

// Equatorial corners 0, 1, 2 run anticlockwise seen from axial corner 3;
// corner 4 is the other axial position.
fn trigonal_bipyramidal() -> Geometry {
    const AXES: [(usize, usize, bool); 20] = [
        (0, 4, true),
        (0, 4, false),
        (0, 3, true),
        (0, 3, false),
        (0, 2, true),
        (0, 2, false),
        (0, 1, true),
        (0, 1, false),
        (1, 4, true),
        (1, 3, true),
        (1, 4, false),
        (1, 3, false),
        (1, 2, true),
        (1, 2, false),
        (2, 4, true),
        (2, 3, true),
        (3, 4, true),
        (3, 4, false),
        (2, 3, false),
        (2, 4, false),
    ];
    let layouts = AXES
        .iter()
        .map(|&(from, to, anticlockwise)| {
            let mut layout = vec![0; 5];
            layout[from] = 3;
            layout[to] = 4;
            let rest: Vec<usize> = (0..5).filter(|&i| i != from && i != to).collect();
            let corners = if anticlockwise { [0, 1, 2] } else { [0, 2, 1] };
            for (&i, &corner) in rest.iter().zip(&corners) {
                layout[i] = corner;
            }
            layout
        })
        .collect();
    Geometry::new(&[&[1, 2, 0, 3, 4], &[0, 2, 1, 4, 3]], layouts)
}

#[derive(Clone, Copy)]
enum Shape {
    U,
    Z,
    Four,
}

// Corners 0..4 are +x, +y, -x, -y; 4 is +z and 5 is -z. The first listed
// neighbor sits at +z.
fn octahedral() -> Geometry {
    use Shape::*;
    const AXES: [(usize, Shape, bool); 30] = [
        (5, U, true),
        (5, U, false),
        (4, U, true),
        (5, Z, true),
        (4, Z, true),
        (3, U, true),
        (3, Z, true),
        (5, Four, false),
        (4, Four, false),
        (5, Four, true),
        (4, Four, true),
        (3, Four, false),
        (3, Four, true),
        (5, Z, false),
        (4, Z, false),
        (4, U, false),
        (3, Z, false),
        (3, U, false),
        (2, U, true),
        (2, Z, true),
        (2, Four, false),
        (2, Four, true),
        (2, Z, false),
        (2, U, false),
        (1, U, true),
        (1, Z, true),
        (1, Four, false),
        (1, Four, true),
        (1, Z, false),
        (1, U, false),
    ];
    let layouts = AXES
        .iter()
        .map(|&(to, shape, anticlockwise)| {
            let mut layout = vec![0; 6];
            layout[0] = 4;
            layout[to] = 5;
            let r: Vec<usize> = (1..6).filter(|&i| i != to).collect();
            let cycle = match shape {
                U => [r[0], r[1], r[2], r[3]],
                Z => [r[0], r[1], r[3], r[2]],
                Four => [r[0], r[2], r[1], r[3]],
            };
            let corners = if anticlockwise {
                [0, 1, 2, 3]
            } else {
                [0, 3, 2, 1]
            };
            for (&i, &corner) in cycle.iter().zip(&corners) {
                layout[i] = corner;
            }
            layout
        })
        .collect();
    Geometry::new(
        &[&[1, 2, 3, 0, 4, 5], &[0, 4, 2, 5, 3, 1]],
        layouts,
    )
}

lazy_static! {
    static ref SQUARE_PLANAR: Geometry = square_planar();
    static ref TRIGONAL_BIPYRAMIDAL: Geometry = trigonal_bipyramidal();
    static ref OCTAHEDRAL: Geometry = octahedral();
}
