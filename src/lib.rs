//! Exact maximum-clique solver: a bit-parallel, colouring-bounded
//! branch-and-bound search (the MCS/BBMC family) over dense graphs of a
//! few hundred to a few thousand vertices.

// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]

/// fixed-capacity, word-parallel bitsets
pub mod bitset;

/// adjacency-matrix graph representation built from bitset rows
pub mod bitgraph;

/// degree-descending vertex reordering
pub mod order;

/// greedy colouring bound used to prune the search tree
pub mod coloring;

/// the shared best-clique-so-far, safe under concurrent updates
pub mod incumbent;

/// the bit-parallel branch-and-bound search engine
pub mod search;

/// search configuration shared by the driver and the CLI
pub mod params;

/// typed errors for the parsing and driver-setup boundary
pub mod error;

/// DIMACS graph format: input model and parser
pub mod dimacs;

/// assembles the reordered bit-graph, runs the engine, translates results back
pub mod driver;

pub use driver::{solve, SolveReport};
pub use error::GraphError;
pub use params::{SearchMode, SearchParams};
