//! The driver: assembles a [`BitGraph`] from a parsed [`Graph`], seeds the
//! incumbent, runs the search engine, and translates the result back to
//! original vertex ids.
//!
//! This is plain orchestration around the core (`bitset`, `bitgraph`,
//! `coloring`, `incumbent`, `search`), which stays oblivious to DIMACS,
//! CLI flags, or wall-clock bookkeeping.

use std::time::Instant;

use crate::bitgraph::AnyBitGraph;
use crate::dimacs::Graph;
use crate::error::GraphError;
use crate::incumbent::Incumbent;
use crate::order::Order;
use crate::params::SearchParams;
use crate::search::Solver;

/// The outcome of a solve: the best clique found (in original vertex ids),
/// the total number of `expand` invocations, wall-clock elapsed time, and
/// whether the search was cut short by the abort flag.
#[derive(Debug, Clone)]
pub struct SolveReport {
    /// Vertices of the best clique found, labelled with original ids.
    pub clique: Vec<usize>,
    /// Total number of `expand` invocations across the whole search.
    pub nodes: u64,
    /// Wall-clock time spent inside [`solve`].
    pub elapsed: std::time::Duration,
    /// Whether `params.abort` was observed raised before the search
    /// reached quiescence. A `true` value means the clique may be
    /// suboptimal.
    pub aborted: bool,
}

/// Solves maximum clique on `graph` under `params`.
///
/// Builds the reordered bit-graph, seeds the incumbent
/// (step 4), runs `expand` from the full candidate set (steps 5–6), and
/// translates the result back through the reordering (step 7).
///
/// Returns [`GraphError::TooManyVertices`] if `graph` exceeds the largest
/// supported bit-graph width; the search itself is never entered in that
/// case.
pub fn solve(graph: &Graph, params: &SearchParams) -> Result<SolveReport, GraphError> {
    let start = Instant::now();
    let order = Order::compute(graph);
    let n = graph.size();

    let internal_edges: Vec<(usize, usize)> = (0..n)
        .flat_map(|u| {
            graph
                .neighbors(u)
                .iter()
                .filter(move |&&v| v > u)
                .map(move |&v| (order.rank_of(u), order.rank_of(v)))
        })
        .collect();

    let bit_graph = AnyBitGraph::build(n, internal_edges)?;
    let incumbent = Incumbent::new(params.prime);

    let nodes = run_on(&bit_graph, &incumbent, params);

    let (_, internal_clique) = incumbent.snapshot();
    let clique = order.translate_to_original(&internal_clique);

    Ok(SolveReport { clique, nodes, elapsed: start.elapsed(), aborted: params.abort.load(std::sync::atomic::Ordering::Relaxed) })
}

fn run_on(bit_graph: &AnyBitGraph, incumbent: &Incumbent, params: &SearchParams) -> u64 {
    macro_rules! run {
        ($g:ident) => {{
            let solver = Solver::new($g, incumbent, params);
            solver.run()
        }};
    }

    match bit_graph {
        AnyBitGraph::W1(g) => run!(g),
        AnyBitGraph::W2(g) => run!(g),
        AnyBitGraph::W4(g) => run!(g),
        AnyBitGraph::W8(g) => run!(g),
        AnyBitGraph::W16(g) => run!(g),
    }
}
