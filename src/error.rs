//! Typed errors for the parsing and driver-setup boundary.
//!
//! The search engine itself (`search.rs`) never returns a `Result`: it is
//! total on any validly constructed [`crate::bitgraph::AnyBitGraph`]. Errors
//! only arise before the core is entered, while turning untrusted input
//! into that bit-graph.

use thiserror::Error;

/// Something went wrong building a [`crate::bitgraph::AnyBitGraph`] from
/// user input, before the search ever starts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A line of the DIMACS input could not be interpreted.
    #[error("line {line}: {reason}")]
    Parse {
        /// 1-based line number in the source file.
        line: usize,
        /// Human-readable description of what was wrong with the line.
        reason: String,
    },

    /// The instance has more vertices than the largest supported bit-graph
    /// width can represent.
    #[error("graph has {n} vertices, but the largest supported width holds only {max}")]
    TooManyVertices {
        /// Vertex count of the rejected instance.
        n: usize,
        /// Largest vertex count any supported width can represent.
        max: usize,
    },
}
