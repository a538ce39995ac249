//! Black-box scenarios driving the solver end to end from DIMACS text,
//! covering the concrete cases enumerated for the search engine's
//! correctness contract.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Instant;

use maxclique::coloring::ColoringVariant;
use maxclique::dimacs::Graph;
use maxclique::params::{SearchMode, SearchParams};
use maxclique::solve;

fn default_params() -> SearchParams {
    SearchParams {
        how_much_sorting: ColoringVariant::NoSorting,
        mode: SearchMode::Sequential,
        prime: 0,
        decide: 0,
        threads: 0,
        abort: Arc::new(AtomicBool::new(false)),
        start_time: Instant::now(),
    }
}

fn clique_size(dimacs: &str) -> usize {
    let graph = Graph::parse(dimacs).unwrap();
    solve(&graph, &default_params()).unwrap().clique.len()
}

#[test]
fn single_vertex_no_edges() {
    assert_eq!(clique_size("p edge 5 0\n"), 1);
}

#[test]
fn k4_is_a_clique_of_four() {
    let dimacs = "p edge 4 6\ne 1 2\ne 1 3\ne 1 4\ne 2 3\ne 2 4\ne 3 4\n";
    assert_eq!(clique_size(dimacs), 4);
}

#[test]
fn c6_plus_one_chord_has_clique_number_two() {
    // cycle 1-2-3-4-5-6-1, plus chord 1-4
    let dimacs = "p edge 6 7\ne 1 2\ne 2 3\ne 3 4\ne 4 5\ne 5 6\ne 6 1\ne 1 4\n";
    assert_eq!(clique_size(dimacs), 2);
}

#[test]
fn c5_has_clique_number_two() {
    let dimacs = "p edge 5 5\ne 1 2\ne 2 3\ne 3 4\ne 4 5\ne 5 1\n";
    assert_eq!(clique_size(dimacs), 2);
}

#[test]
fn petersen_graph_has_clique_number_two() {
    // standard Petersen graph edge list (outer 5-cycle, inner pentagram, spokes)
    let dimacs = "p edge 10 15\n\
        e 1 2\ne 2 3\ne 3 4\ne 4 5\ne 5 1\n\
        e 6 8\ne 8 10\ne 10 7\ne 7 9\ne 9 6\n\
        e 1 6\ne 2 7\ne 3 8\ne 4 9\ne 5 10\n";
    assert_eq!(clique_size(dimacs), 2);
}

#[test]
fn two_disjoint_triangles_have_clique_number_three() {
    let dimacs = "p edge 6 6\ne 1 2\ne 2 3\ne 1 3\ne 4 5\ne 5 6\ne 4 6\n";
    assert_eq!(clique_size(dimacs), 3);
}

#[test]
fn empty_graph_has_no_clique() {
    assert_eq!(clique_size("p edge 0 0\n"), 0);
}

#[test]
fn complete_graph_k10_solves_to_ten() {
    let mut lines = vec!["p edge 10 45".to_string()];
    for i in 1..=10 {
        for j in (i + 1)..=10 {
            lines.push(format!("e {i} {j}"));
        }
    }
    assert_eq!(clique_size(&lines.join("\n")), 10);
}

#[test]
fn all_three_coloring_variants_agree_on_clique_size() {
    let dimacs = "p edge 6 7\ne 1 2\ne 2 3\ne 3 4\ne 4 5\ne 5 6\ne 6 1\ne 1 4\n";
    let graph = Graph::parse(dimacs).unwrap();
    for variant in [ColoringVariant::NoSorting, ColoringVariant::Defer1, ColoringVariant::FullSort] {
        let mut params = default_params();
        params.how_much_sorting = variant;
        let report = solve(&graph, &params).unwrap();
        assert_eq!(report.clique.len(), 2);
    }
}

#[test]
fn sequential_and_parallel_modes_agree_on_clique_size() {
    let mut lines = vec!["p edge 12 0".to_string()];
    // two overlapping cliques of size 6 sharing one vertex, plus noise
    for i in 1..=6 {
        for j in (i + 1)..=6 {
            lines.push(format!("e {i} {j}"));
        }
    }
    for i in 6..=11 {
        for j in (i + 1)..=11 {
            lines.push(format!("e {i} {j}"));
        }
    }
    let dimacs = lines.join("\n");
    let graph = Graph::parse(&dimacs).unwrap();

    let sizes: Vec<usize> = [SearchMode::Sequential, SearchMode::Spawn, SearchMode::ParallelFor]
        .into_iter()
        .map(|mode| {
            let mut params = default_params();
            params.mode = mode;
            solve(&graph, &params).unwrap().clique.len()
        })
        .collect();

    assert!(sizes.windows(2).all(|w| w[0] == w[1]), "modes disagreed: {sizes:?}");
}

#[test]
fn decide_stops_early_once_target_size_is_reached() {
    let mut lines = vec!["p edge 10 45".to_string()];
    for i in 1..=10 {
        for j in (i + 1)..=10 {
            lines.push(format!("e {i} {j}"));
        }
    }
    let graph = Graph::parse(&lines.join("\n")).unwrap();
    let mut params = default_params();
    params.decide = 3;
    let report = solve(&graph, &params).unwrap();
    assert!(report.clique.len() >= 3);
}

#[test]
fn prime_at_or_above_omega_yields_empty_result() {
    let dimacs = "p edge 4 6\ne 1 2\ne 1 3\ne 1 4\ne 2 3\ne 2 4\ne 3 4\n";
    let graph = Graph::parse(dimacs).unwrap();
    let mut params = default_params();
    params.prime = 4;
    assert!(solve(&graph, &params).unwrap().clique.is_empty());
}

#[test]
fn malformed_input_is_a_parse_error_not_a_panic() {
    assert!(Graph::parse("garbage\n").is_err());
    assert!(Graph::parse("p edge 2 1\ne 1 1\n").is_err());
    assert!(Graph::parse("p edge 2 1\ne 1 3\n").is_err());
    assert!(Graph::parse("e 1 2\n").is_err());
}
