//! SMILES line notation: a parser, a generator and the graph they share.
//!
//! ```
//! use chemcrab_smiles::{kekulize, parse_smiles, to_smiles};
//!
//! let g = parse_smiles("c1ccccc1O phenol").unwrap();
//! assert_eq!(g.order(), 7);
//! assert_eq!(g.title(), Some("phenol"));
//!
//! let k = kekulize(&g).unwrap();
//! assert_eq!(to_smiles(&k).unwrap().matches('=').count(), 3);
//! ```

pub mod atom;
pub mod bond;
pub mod builder;
pub mod configuration;
pub mod edge;
pub mod element;
pub mod graph;
pub mod kekulize;
pub mod matching;
pub mod smiles;
pub mod support;
pub mod topology;

pub use atom::Atom;
pub use bond::Bond;
pub use builder::{BuilderError, GraphBuilder};
pub use configuration::{Configuration, ConfigurationType};
pub use edge::Edge;
pub use element::Element;
pub use graph::{Graph, GraphError};
pub use kekulize::{kekulize, KekulizeError};
pub use matching::{ArbitraryMatching, ElectronAssignment, Matching, MaximumMatching};
pub use smiles::{
    parse_smiles, parse_smiles_loose, to_smiles, Generator, GeneratorConfig, ParseMode, Parsed,
    Parser, ParserConfig, RingNumberingKind, SmilesError, SmilesWarning,
};
pub use topology::Topology;
