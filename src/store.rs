use std::collections::HashSet;

use crate::models::VocabularyEntry;
use crate::random::RandomSource;

/// Immutable list of entries loaded at startup.
#[derive(Debug, Clone, Default)]
pub struct VocabularyStore {
    entries: Vec<VocabularyEntry>,
}

impl VocabularyStore {
    pub fn new(entries: Vec<VocabularyEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&VocabularyEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn pick_random_entry<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Option<&VocabularyEntry> {
        self.pick_random_index(rng).and_then(|i| self.entries.get(i))
    }

    /// Like [`pick_random_entry`](Self::pick_random_entry) but returns the
    /// position, which is what identifies an entry.
    pub fn pick_random_index<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        if self.entries.is_empty() {
            None
        } else {
            Some(rng.pick_index(self.entries.len()))
        }
    }

    pub fn distinct_translations(&self) -> usize {
        self.entries
            .iter()
            .map(|e| e.translation.as_str())
            .collect::<HashSet<_>>()
            .len()
    }
}
