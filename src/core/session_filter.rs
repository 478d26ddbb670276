use rand::{
    rngs::StdRng,
    seq::SliceRandom,
    SeedableRng,
};

use super::models::{
    FilterMode,
    Word,
    WordId,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckOrder {
    Insertion,
    Shuffled(u64),
}

impl DeckOrder {
    pub fn new_shuffle() -> Self {
        DeckOrder::Shuffled(rand::random())
    }
}

/// Ordered ids of the words active in a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkingSet {
    ids: Vec<WordId>,
}

impl WorkingSet {
    pub fn ids(&self) -> &[WordId] {
        &self.ids
    }

    pub fn get(&self, position: usize) -> Option<WordId> {
        self.ids.get(position).copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// The permutation is taken over the full collection before filtering so that
/// words dropping out of the filter leave the relative order of the rest intact.
pub fn compute(words: &[Word], mode: FilterMode, order: DeckOrder) -> WorkingSet {
    let mut ordered: Vec<&Word> = words.iter().collect();

    if let DeckOrder::Shuffled(seed) = order {
        let mut rng = StdRng::seed_from_u64(seed);
        ordered.shuffle(&mut rng);
    }

    let ids = ordered.into_iter().filter(|w| mode.matches(w)).map(|w| w.id).collect();
    WorkingSet { ids }
}
