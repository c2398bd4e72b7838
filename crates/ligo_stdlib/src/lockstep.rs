//! Walking several sequences one position at a time.

use ligo_foundation::{Iter, Seq};

/// What one lockstep advance found.
pub(crate) enum Step<'s, T> {
    /// Every sequence was already exhausted (or there were none).
    Exhausted,
    /// Some sequences produced an element and some did not.
    Ragged,
    /// Every sequence produced an element, in argument order.
    Full(&'s [T]),
}

/// Advances a set of sequences together, borrowing one head element from
/// each. The head buffer is reused between steps.
pub(crate) struct Lockstep<'a, T> {
    iters: Vec<Iter<'a, T>>,
    heads: Vec<&'a T>,
}

impl<'a, T> Lockstep<'a, T> {
    pub(crate) fn new(seqs: &[&'a Seq<T>]) -> Self {
        Self {
            iters: seqs.iter().map(|seq| seq.iter()).collect(),
            heads: Vec::with_capacity(seqs.len()),
        }
    }

    pub(crate) fn step(&mut self) -> Step<'_, &'a T> {
        self.heads.clear();
        self.heads
            .extend(self.iters.iter_mut().filter_map(Iterator::next));
        if self.heads.is_empty() {
            Step::Exhausted
        } else if self.heads.len() < self.iters.len() {
            Step::Ragged
        } else {
            Step::Full(&self.heads)
        }
    }
}
