//! Injectable randomness for question generation.

use rand::Rng;

/// Source of the random choices a question needs.
///
/// Every [`rand::Rng`] is a `RandomSource`. Tests can implement it directly
/// to script exact picks.
pub trait RandomSource {
    /// Pick an index uniformly from `0..len`. `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Fair coin deciding whether a two-element option list is swapped.
    fn swap_pair(&mut self) -> bool;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn pick_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }

    fn swap_pair(&mut self) -> bool {
        self.random_bool(0.5)
    }
}

/// Pick one element of a non-empty slice.
pub fn pick<'a, T, R: RandomSource + ?Sized>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.pick_index(items.len()))
}

/// A scripted [`RandomSource`] replaying fixed answers, for tests.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    indices: Vec<usize>,
    swaps: Vec<bool>,
    next_index: usize,
    next_swap: usize,
}

impl ScriptedRandom {
    /// Replay `indices` for `pick_index` and `swaps` for `swap_pair`.
    ///
    /// Both scripts cycle; an empty script yields `0` / `false`. Indices are
    /// reduced modulo the requested length.
    pub fn new(indices: Vec<usize>, swaps: Vec<bool>) -> Self {
        Self {
            indices,
            swaps,
            next_index: 0,
            next_swap: 0,
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        if self.indices.is_empty() {
            return 0;
        }
        let i = self.indices[self.next_index % self.indices.len()];
        self.next_index += 1;
        i % len
    }

    fn swap_pair(&mut self) -> bool {
        if self.swaps.is_empty() {
            return false;
        }
        let s = self.swaps[self.next_swap % self.swaps.len()];
        self.next_swap += 1;
        s
    }
}
