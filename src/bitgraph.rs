//! Square adjacency-matrix graph representation, one bitset per row.
//!
//! Mirrors [`FixedBitSet`]'s width-per-instantiation design: a
//! [`BitGraph<W>`] holds one row per vertex, each row a `FixedBitSet<W>`.
//! [`AnyBitGraph`] dispatches over a small fixed family of widths so the
//! driver can pick the tightest-fitting capacity for a given input without
//! forcing the whole crate to pay for the largest supported size.

use crate::bitset::FixedBitSet;
use crate::error::GraphError;

/// Supported bitset widths, in words. `W * 64` is the vertex capacity of
/// that width: 64, 128, 256, 512, 1024.
const SUPPORTED_WIDTHS: [usize; 5] = [1, 2, 4, 8, 16];

/// Adjacency matrix over `n` vertices, represented as `n` rows of
/// `FixedBitSet<W>`. The diagonal is always zero; adjacency is always
/// populated symmetrically by [`BitGraph::add_edge`].
#[derive(Clone, Debug)]
pub struct BitGraph<const W: usize> {
    n: usize,
    rows: Vec<FixedBitSet<W>>,
}

impl<const W: usize> BitGraph<W> {
    /// Builds an edgeless graph over `n` vertices.
    ///
    /// `n` must not exceed `FixedBitSet::<W>::CAPACITY`; the driver is
    /// responsible for picking a `W` that fits (see [`AnyBitGraph::build`]).
    pub fn new(n: usize) -> Self {
        debug_assert!(n <= FixedBitSet::<W>::CAPACITY);
        Self { n, rows: vec![FixedBitSet::default(); n] }
    }

    /// Number of vertices.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Adds the (undirected) edge `{u, v}`. Idempotent; `u == v` is a caller
    /// error (the parser rejects self-loops before this point is reached).
    pub fn add_edge(&mut self, u: usize, v: usize) {
        debug_assert!(u != v);
        self.rows[u].set(v);
        self.rows[v].set(u);
    }

    /// Degree of vertex `v` (row popcount).
    pub fn degree(&self, v: usize) -> usize {
        self.rows[v].popcount()
    }

    /// `b <- b & row[v]`: restricts `b` to the neighbours of `v`.
    pub fn intersect_with_row(&self, v: usize, b: &mut FixedBitSet<W>) {
        b.intersect_with(&self.rows[v]);
    }

    /// `b <- b & !row[v]`: restricts `b` to the non-neighbours of `v`.
    pub fn intersect_with_row_complement(&self, v: usize, b: &mut FixedBitSet<W>) {
        b.intersect_with_complement(&self.rows[v]);
    }
}

/// A [`BitGraph`] behind the smallest supported width that fits its vertex
/// count, chosen once at construction time.
///
/// The search engine is generic over the width (so its hot loops work over
/// fixed-size arrays); callers that don't want to thread a const generic
/// through the whole driver match on this enum once, at the top.
#[derive(Clone, Debug)]
pub enum AnyBitGraph {
    W1(BitGraph<1>),
    W2(BitGraph<2>),
    W4(BitGraph<4>),
    W8(BitGraph<8>),
    W16(BitGraph<16>),
}

impl AnyBitGraph {
    /// Builds the smallest-fitting bit-graph over `n` vertices, populated
    /// from `edges` (pairs of *internal* vertex ids, 0-indexed).
    ///
    /// Returns [`GraphError::TooManyVertices`] if `n` exceeds the largest
    /// supported width's capacity.
    pub fn build(n: usize, edges: impl IntoIterator<Item = (usize, usize)>) -> Result<Self, GraphError> {
        let max_capacity = SUPPORTED_WIDTHS.last().copied().unwrap_or(0) * 64;
        if n > max_capacity {
            return Err(GraphError::TooManyVertices { n, max: max_capacity });
        }

        macro_rules! build_with {
            ($variant:ident, $w:literal) => {{
                let mut g: BitGraph<$w> = BitGraph::new(n);
                for (u, v) in edges {
                    g.add_edge(u, v);
                }
                return Ok(AnyBitGraph::$variant(g));
            }};
        }

        if n <= 1 * 64 {
            build_with!(W1, 1)
        } else if n <= 2 * 64 {
            build_with!(W2, 2)
        } else if n <= 4 * 64 {
            build_with!(W4, 4)
        } else if n <= 8 * 64 {
            build_with!(W8, 8)
        } else {
            build_with!(W16, 16)
        }
    }

    /// Number of vertices, regardless of the underlying width.
    pub fn size(&self) -> usize {
        match self {
            AnyBitGraph::W1(g) => g.size(),
            AnyBitGraph::W2(g) => g.size(),
            AnyBitGraph::W4(g) => g.size(),
            AnyBitGraph::W8(g) => g.size(),
            AnyBitGraph::W16(g) => g.size(),
        }
    }

    /// Degree of vertex `v`, regardless of the underlying width.
    pub fn degree(&self, v: usize) -> usize {
        match self {
            AnyBitGraph::W1(g) => g.degree(v),
            AnyBitGraph::W2(g) => g.degree(v),
            AnyBitGraph::W4(g) => g.degree(v),
            AnyBitGraph::W8(g) => g.degree(v),
            AnyBitGraph::W16(g) => g.degree(v),
        }
    }
}
