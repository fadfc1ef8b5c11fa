use rand::Rng;
use rand::seq::SliceRandom;

/// The randomness a quiz needs: uniform indices and in-place shuffles.
///
/// Every [`rand::Rng`] is a source, so production code passes a `StdRng`
/// while tests can drive picks explicitly.
pub trait RandomSource {
    /// Uniform index in `0..len`. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize;

    fn shuffle<T>(&mut self, items: &mut [T]);
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn pick_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        SliceRandom::shuffle(items, self);
    }
}

/// Replays a fixed list of indices and leaves shuffled slices untouched.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct ScriptedSource {
    picks: std::collections::VecDeque<usize>,
}

#[cfg(test)]
impl ScriptedSource {
    pub(crate) fn new(picks: &[usize]) -> Self {
        Self {
            picks: picks.iter().copied().collect(),
        }
    }

    pub(crate) fn remaining(&self) -> usize {
        self.picks.len()
    }
}

#[cfg(test)]
impl RandomSource for ScriptedSource {
    fn pick_index(&mut self, len: usize) -> usize {
        let pick = self.picks.pop_front().expect("scripted picks exhausted");
        assert!(pick < len, "scripted pick {pick} out of range 0..{len}");
        pick
    }

    fn shuffle<T>(&mut self, _items: &mut [T]) {}
}
