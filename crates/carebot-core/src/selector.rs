//! Randomized response selection.
//!
//! A matched rule carries a pool of candidate responses; one is picked
//! uniformly at random per invocation, with no weighting or exclusion. The
//! random source sits behind the [`ResponseSelector`] trait so tests can
//! substitute a deterministic implementation and assert exact output.

use crate::session::VisualCue;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// The engine's reply for one turn: chosen text plus the matched rule's
/// visual cue, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub visual: Option<VisualCue>,
}

/// Injectable source of randomness for pool selection.
pub trait ResponseSelector: Send + Sync {
    /// Returns an index in `0..pool_len`. `pool_len` is always non-zero.
    fn pick_index(&self, pool_len: usize) -> usize;
}

/// Production selector: uniform pick over the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct UniformSelector;

impl ResponseSelector for UniformSelector {
    fn pick_index(&self, pool_len: usize) -> usize {
        rand::thread_rng().gen_range(0..pool_len)
    }
}

/// Deterministic selector backed by a seeded RNG, for tests that need
/// reproducible picks.
#[derive(Debug)]
pub struct SeededSelector {
    rng: Mutex<StdRng>,
}

impl SeededSelector {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl ResponseSelector for SeededSelector {
    fn pick_index(&self, pool_len: usize) -> usize {
        let mut rng = self.rng.lock().expect("selector rng poisoned");
        rng.gen_range(0..pool_len)
    }
}

/// Picks one candidate from the pool and attaches the rule's visual cue.
///
/// Each invocation is independent; pool members never carry independent
/// visuals in this design.
pub fn select(
    pool: &[&str],
    visual: Option<VisualCue>,
    selector: &dyn ResponseSelector,
) -> Reply {
    debug_assert!(!pool.is_empty(), "response pools are non-empty by construction");
    let index = selector.pick_index(pool.len());
    Reply {
        text: pool[index].to_string(),
        visual,
    }
}
