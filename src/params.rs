//! Search configuration: the recognised options at the solver's
//! external-interface boundary, gathered into one plain data record so the
//! driver and the CLI layer share a single source of truth.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Instant;

use crate::coloring::ColoringVariant;

/// Selects the search engine's scheduling flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SearchMode {
    /// Single-threaded, in-order branching.
    Sequential,
    /// Spawn-per-branch: each branch body is submitted to the worker pool
    /// as an independent task closing over a snapshot of `P`.
    Spawn,
    /// Parallel-for: branches are enumerated by a parallel iterator, each
    /// reconstructing its own `P` from the cumulative shrink.
    ParallelFor,
}

/// Every recognised search option, independent of how they were
/// supplied (CLI flags, a config file, or constructed directly by a
/// library caller).
#[derive(Debug, Clone)]
pub struct SearchParams {
    /// Colour-class ordering variant.
    pub how_much_sorting: ColoringVariant,
    /// Scheduling flavour.
    pub mode: SearchMode,
    /// Initial incumbent size; the engine will not publish a clique of
    /// size `<= prime`.
    pub prime: u32,
    /// If nonzero, search stops as soon as a clique of at least this size
    /// is found.
    pub decide: u32,
    /// Size of the rayon thread pool used in parallel modes. `0` means
    /// "use rayon's default" (the global pool, sized to the logical CPU
    /// count).
    pub threads: usize,
    /// Cancellation flag, raised by the external timeout watchdog.
    pub abort: Arc<AtomicBool>,
    /// Wall-clock start, used only to timestamp progress lines.
    pub start_time: Instant,
}

impl SearchParams {
    /// A `Sequential`, untimed, `no_sorting` configuration with no
    /// incumbent seed — the natural default for library callers and
    /// tests that don't care about scheduling or pruning shortcuts.
    pub fn new() -> Self {
        Self {
            how_much_sorting: ColoringVariant::NoSorting,
            mode: SearchMode::Sequential,
            prime: 0,
            decide: 0,
            threads: 0,
            abort: Arc::new(AtomicBool::new(false)),
            start_time: Instant::now(),
        }
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        Self::new()
    }
}
