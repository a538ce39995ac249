//! The bit-parallel branch-and-bound search engine.
//!
//! `Solver::run` drives `expand`: colour the candidate set to get a
//! pruning bound, then branch on each candidate from the highest colour
//! down, shrinking the candidate set between branches. Three scheduling
//! flavours share the same
//! sequential branching logic: [`SearchMode::Sequential`] runs it in
//! place; [`SearchMode::Spawn`] and [`SearchMode::ParallelFor`] fan the
//! branches of one node out across a rayon work-stealing pool.

use std::sync::atomic::{AtomicU64, Ordering};

use rayon::iter::{IndexedParallelIterator, IntoParallelIterator, ParallelIterator};

use crate::bitgraph::BitGraph;
use crate::bitset::{FixedBitSet, MAX_CAPACITY};
use crate::coloring::{colour_class_order, ColoringVariant};
use crate::incumbent::Incumbent;
use crate::params::{SearchMode, SearchParams};

/// Below this many still-undecided branches at a node, both parallel modes
/// run the remainder in the current task rather than spawning one task per
/// branch — a standard work-stealing cutoff that bounds spawn overhead on
/// the (frequent) small subtrees near the leaves. Purely a scheduling
/// knob: it never changes which cliques are found.
const SEQUENTIAL_CUTOFF: usize = 4;

/// A single search session over one bit-graph: owns the node counter and
/// borrows the incumbent and configuration for the session's lifetime.
pub struct Solver<'a, const W: usize> {
    graph: &'a BitGraph<W>,
    incumbent: &'a Incumbent,
    params: &'a SearchParams,
    nodes: AtomicU64,
}

impl<'a, const W: usize> Solver<'a, W> {
    /// Builds a solver over `graph`, publishing improvements to
    /// `incumbent` and honouring `params`.
    pub fn new(graph: &'a BitGraph<W>, incumbent: &'a Incumbent, params: &'a SearchParams) -> Self {
        Self { graph, incumbent, params, nodes: AtomicU64::new(0) }
    }

    /// Runs the search from the empty clique over every vertex of the
    /// graph. Returns the total number of `expand` invocations.
    pub fn run(&self) -> u64 {
        let mut p: FixedBitSet<W> = FixedBitSet::new();
        p.set_up_to(self.graph.size());
        let mut c = Vec::with_capacity(self.graph.size());
        match self.params.mode {
            SearchMode::Sequential => self.expand_sequential(&mut c, p),
            SearchMode::Spawn => self.expand_spawn(&c, p),
            SearchMode::ParallelFor => self.expand_parallel_for(&c, p),
        }
        self.nodes.load(Ordering::Relaxed)
    }

    fn should_stop(&self) -> bool {
        self.params.abort.load(Ordering::Relaxed)
            || (self.params.decide > 0 && self.incumbent.current_size() >= self.params.decide)
    }

    fn colour(&self, p: &FixedBitSet<W>, p_order: &mut [usize], p_bounds: &mut [usize]) -> usize {
        colour_class_order(self.params.how_much_sorting, self.graph, p, p_order, p_bounds)
    }

    /// Sequential mode: in-order branching with
    /// a single shared, shrinking `P`.
    fn expand_sequential(&self, c: &mut Vec<usize>, mut p: FixedBitSet<W>) {
        self.nodes.fetch_add(1, Ordering::Relaxed);

        let mut p_order = [0usize; MAX_CAPACITY];
        let mut p_bounds = [0usize; MAX_CAPACITY];
        let k = self.colour(&p, &mut p_order, &mut p_bounds);

        for n in (0..k).rev() {
            if c.len() as u32 + p_bounds[n] as u32 <= self.incumbent.current_size() || self.should_stop() {
                return;
            }

            let v = p_order[n];
            c.push(v);

            let mut new_p = p;
            self.graph.intersect_with_row(v, &mut new_p);

            if new_p.is_empty() {
                self.incumbent.offer(c, self.nodes.load(Ordering::Relaxed), self.params.start_time);
            } else {
                self.expand_sequential(c, new_p);
            }

            c.pop();
            p.unset(v);
        }
    }

    /// Spawn-per-branch mode: each branch body is submitted to the
    /// pool as an independent task closing over a snapshot of `c` and the
    /// parent's shrinking `p` *at spawn time*; the parent keeps shrinking
    /// its own copy for subsequent iterations.
    fn expand_spawn(&self, c: &[usize], p: FixedBitSet<W>) {
        self.nodes.fetch_add(1, Ordering::Relaxed);

        let mut p_order = [0usize; MAX_CAPACITY];
        let mut p_bounds = [0usize; MAX_CAPACITY];
        let k = self.colour(&p, &mut p_order, &mut p_bounds);

        if k < SEQUENTIAL_CUTOFF {
            let mut c = c.to_vec();
            let mut p = p;
            for n in (0..k).rev() {
                if c.len() as u32 + p_bounds[n] as u32 <= self.incumbent.current_size() || self.should_stop() {
                    return;
                }
                let v = p_order[n];
                c.push(v);
                let mut new_p = p;
                self.graph.intersect_with_row(v, &mut new_p);
                if new_p.is_empty() {
                    self.incumbent.offer(&c, self.nodes.load(Ordering::Relaxed), self.params.start_time);
                } else {
                    self.expand_spawn(&c, new_p);
                }
                c.pop();
                p.unset(v);
            }
            return;
        }

        let mut shrinking_p = p;
        rayon::scope(|scope| {
            for n in (0..k).rev() {
                if c.len() as u32 + p_bounds[n] as u32 <= self.incumbent.current_size() || self.should_stop() {
                    return;
                }

                let v = p_order[n];
                let branch_c = c.to_vec();
                let branch_p = shrinking_p;
                scope.spawn(move |_| {
                    let mut branch_c = branch_c;
                    branch_c.push(v);
                    let mut new_p = branch_p;
                    self.graph.intersect_with_row(v, &mut new_p);
                    if new_p.is_empty() {
                        self.incumbent.offer(&branch_c, self.nodes.load(Ordering::Relaxed), self.params.start_time);
                    } else {
                        self.expand_spawn(&branch_c, new_p);
                    }
                });

                shrinking_p.unset(v);
            }
        });
    }

    /// Parallel-for mode: branches are enumerated by a parallel
    /// iterator; each iteration reconstructs its own `P` from the
    /// cumulative shrink instead of sharing mutable state with siblings.
    fn expand_parallel_for(&self, c: &[usize], p: FixedBitSet<W>) {
        self.nodes.fetch_add(1, Ordering::Relaxed);

        let mut p_order = [0usize; MAX_CAPACITY];
        let mut p_bounds = [0usize; MAX_CAPACITY];
        let k = self.colour(&p, &mut p_order, &mut p_bounds);

        if k < SEQUENTIAL_CUTOFF {
            let mut c = c.to_vec();
            let mut shrinking = p;
            for n in (0..k).rev() {
                if c.len() as u32 + p_bounds[n] as u32 <= self.incumbent.current_size() || self.should_stop() {
                    return;
                }
                let v = p_order[n];
                c.push(v);
                let mut new_p = shrinking;
                self.graph.intersect_with_row(v, &mut new_p);
                if new_p.is_empty() {
                    self.incumbent.offer(&c, self.nodes.load(Ordering::Relaxed), self.params.start_time);
                } else {
                    self.expand_parallel_for(&c, new_p);
                }
                c.pop();
                shrinking.unset(v);
            }
            return;
        }

        (0..k).into_par_iter().rev().for_each(|n| {
            if c.len() as u32 + p_bounds[n] as u32 <= self.incumbent.current_size() || self.should_stop() {
                return;
            }

            let v = p_order[n];
            let mut branch_c = c.to_vec();
            branch_c.push(v);

            let mut new_p = p;
            self.graph.intersect_with_row(v, &mut new_p);
            for &tail in &p_order[(n + 1)..k] {
                new_p.unset(tail);
            }

            if new_p.is_empty() {
                self.incumbent.offer(&branch_c, self.nodes.load(Ordering::Relaxed), self.params.start_time);
            } else {
                self.expand_parallel_for(&branch_c, new_p);
            }
        });
    }
}
