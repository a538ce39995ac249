//! The shared incumbent: the best clique found so far, safe to read and
//! update from concurrent search branches.
//!
//! Reading the size is lock-free (an atomic load) so every branch can
//! cheaply re-check the pruning bound. Publishing a new best clique takes
//! a mutex, but only on the rare path where a branch actually improves on
//! the current best.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;
use std::time::Instant;

use log::debug;

/// Shared best-clique-so-far, safe under concurrent `offer` calls from
/// sibling search branches.
#[derive(Debug)]
pub struct Incumbent {
    size: AtomicU32,
    vertices: Mutex<Vec<usize>>,
}

impl Incumbent {
    /// Creates an incumbent seeded at `prime` (no vertex list yet — a
    /// `prime > 0` only affects the pruning bound, per `params.prime`).
    pub fn new(prime: u32) -> Self {
        Self { size: AtomicU32::new(prime), vertices: Mutex::new(Vec::new()) }
    }

    /// Lock-free read of the current best size. May be stale under
    /// concurrent updates, but is never greater than the true best: safe
    /// to use for pruning.
    pub fn current_size(&self) -> u32 {
        self.size.load(Ordering::Relaxed)
    }

    /// Offers `new_clique` as a candidate improvement. Publishes it only if
    /// it is strictly larger than the current best; otherwise a no-op.
    ///
    /// On a successful publish, prints the `-- <size> <nodes> <elapsed_ms>`
    /// progress line to stdout and logs the same fields plus the vertex
    /// list at `debug` level. `nodes` and `start_time` are supplied by the
    /// caller (the search engine owns the node counter and the driver owns
    /// the session's start time; the incumbent itself tracks neither).
    pub fn offer(&self, new_clique: &[usize], nodes: u64, start_time: Instant) {
        let m = new_clique.len() as u32;
        loop {
            let current = self.size.load(Ordering::SeqCst);
            if m <= current {
                return;
            }
            if self
                .size
                .compare_exchange(current, m, Ordering::SeqCst, Ordering::SeqCst)
                .is_ok()
            {
                let mut vertices = self.vertices.lock().unwrap();
                *vertices = new_clique.to_vec();
                let elapsed_ms = start_time.elapsed().as_millis();
                println!("-- {m} {nodes} {elapsed_ms}");
                debug!("new incumbent clique: size={m} nodes={nodes} elapsed_ms={elapsed_ms} vertices={vertices:?}");
                return;
            }
        }
    }

    /// Takes a consistent snapshot of `(size, vertices)`. Intended for the
    /// final read after the root search returns, or abort propagates.
    pub fn snapshot(&self) -> (u32, Vec<usize>) {
        let vertices = self.vertices.lock().unwrap();
        (self.size.load(Ordering::SeqCst), vertices.clone())
    }
}
