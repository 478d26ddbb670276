use super::{
    cursor::{
        DeckCursor,
        Direction,
        EndOfDeck,
    },
    gesture::{
        Swipe,
        SwipeMapping,
    },
    models::{
        FilterMode,
        Word,
        WordId,
    },
    session_filter::{
        self,
        DeckOrder,
        WorkingSet,
    },
    status,
    word_store::WordStore,
};
use crate::persistence::BlobStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckCommand {
    Advance,
    Retreat,
    ToggleFavorite,
    ToggleLearned,
    Swipe(Swipe),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckEvent {
    EndOfDeck,
}

impl From<EndOfDeck> for DeckEvent {
    fn from(_: EndOfDeck) -> Self {
        DeckEvent::EndOfDeck
    }
}

/// One pass through a filtered deck.
///
/// The working set is recomputed only when the filter mode changes, the
/// random-order flag changes or a word is mutated. The shuffle seed is drawn
/// once on entry so mutations never reorder the deck under the cursor.
#[derive(Debug, Clone)]
pub struct DeckSession {
    mode: FilterMode,
    order: DeckOrder,
    mapping: SwipeMapping,
    working_set: WorkingSet,
    cursor: DeckCursor,
    shown: Option<WordId>,
    card_changed: bool,
}

impl DeckSession {
    pub fn enter(words: &[Word], mode: FilterMode, random_order: bool, mapping: SwipeMapping) -> Self {
        let order = if random_order { DeckOrder::new_shuffle() } else { DeckOrder::Insertion };
        Self::with_order(words, mode, order, mapping)
    }

    pub fn with_order(words: &[Word], mode: FilterMode, order: DeckOrder, mapping: SwipeMapping) -> Self {
        let working_set = session_filter::compute(words, mode, order);
        let cursor = DeckCursor::new(working_set.len());
        tracing::debug!("Entered {} session with {} words ({:?})", mode, working_set.len(), order);

        let mut session =
            Self { mode, order, mapping, working_set, cursor, shown: None, card_changed: false };
        session.track_current();
        session
    }

    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    pub fn order(&self) -> DeckOrder {
        self.order
    }

    pub fn working_set(&self) -> &WorkingSet {
        &self.working_set
    }

    pub fn cursor(&self) -> &DeckCursor {
        &self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.cursor.is_empty()
    }

    pub fn current_id(&self) -> Option<WordId> {
        self.cursor.position().and_then(|p| self.working_set.get(p))
    }

    pub fn current<'a>(&self, words: &'a [Word]) -> Option<&'a Word> {
        let id = self.current_id()?;
        words.iter().find(|w| w.id == id)
    }

    /// One-based position and deck length.
    pub fn progress(&self) -> Option<(usize, usize)> {
        self.cursor.position().map(|p| (p + 1, self.working_set.len()))
    }

    pub fn set_filter_mode(&mut self, words: &[Word], mode: FilterMode) {
        if self.mode != mode {
            self.mode = mode;
            self.recompute(words);
        }
    }

    pub fn set_random_order(&mut self, words: &[Word], random_order: bool) {
        let currently_random = matches!(self.order, DeckOrder::Shuffled(_));
        if currently_random == random_order {
            return;
        }
        self.order = if random_order { DeckOrder::new_shuffle() } else { DeckOrder::Insertion };
        self.recompute(words);
    }

    /// Call after the word collection was mutated or replaced.
    pub fn refresh(&mut self, words: &[Word]) {
        self.recompute(words);
    }

    pub fn apply<S: BlobStore>(
        &mut self,
        command: DeckCommand,
        store: &mut WordStore<S>,
    ) -> Option<DeckEvent> {
        let event = match command {
            DeckCommand::Advance => self.advance(),
            DeckCommand::Retreat => {
                self.cursor.retreat();
                None
            }
            DeckCommand::Swipe(swipe) => match self.mapping.direction(swipe) {
                Direction::Forward => self.advance(),
                Direction::Backward | Direction::None => {
                    self.cursor.retreat();
                    None
                }
            },
            DeckCommand::ToggleFavorite => {
                if let Some(id) = self.current_id() {
                    if status::toggle_favorite(store, id) {
                        self.recompute(store.get_all());
                    }
                }
                None
            }
            DeckCommand::ToggleLearned => {
                if let Some(id) = self.current_id() {
                    if status::toggle_learned(store, id) {
                        self.recompute(store.get_all());
                    }
                }
                None
            }
        };
        self.track_current();
        event
    }

    /// Returns the newly shown word once after each card change.
    pub fn take_card_changed(&mut self) -> Option<WordId> {
        if std::mem::take(&mut self.card_changed) {
            self.shown
        } else {
            None
        }
    }

    fn advance(&mut self) -> Option<DeckEvent> {
        self.cursor.advance().err().map(DeckEvent::from)
    }

    fn recompute(&mut self, words: &[Word]) {
        self.working_set = session_filter::compute(words, self.mode, self.order);
        self.cursor.on_working_set_changed(self.working_set.len());
        self.track_current();
    }

    fn track_current(&mut self) {
        let current = self.current_id();
        if current != self.shown {
            self.shown = current;
            self.card_changed = current.is_some();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{
            cursor::CursorState,
            models::seed_words,
        },
        persistence::MemoryBlobStore,
    };

    fn store() -> WordStore<MemoryBlobStore> {
        WordStore::load(MemoryBlobStore::new())
    }

    fn session(store: &WordStore<MemoryBlobStore>, mode: FilterMode) -> DeckSession {
        DeckSession::with_order(store.get_all(), mode, DeckOrder::Insertion, SwipeMapping::default())
    }

    #[test]
    fn test_unlearned_scenario_clamps_after_mark_learned() {
        let mut store = store();
        let mut deck = session(&store, FilterMode::Unlearned);
        assert_eq!(deck.working_set().len(), 7);

        for _ in 0..6 {
            assert_eq!(deck.apply(DeckCommand::Advance, &mut store), None);
        }
        assert_eq!(deck.cursor().position(), Some(6));
        assert_eq!(deck.current_id(), Some(10));

        assert_eq!(deck.apply(DeckCommand::ToggleLearned, &mut store), None);
        assert!(store.get(10).unwrap().learned);
        assert_eq!(deck.working_set().len(), 6);
        assert_eq!(deck.cursor().position(), Some(5));
        assert_eq!(deck.current_id(), Some(7));
    }

    #[test]
    fn test_end_of_deck_event() {
        let mut store = store();
        let mut deck = session(&store, FilterMode::Favorites);
        assert_eq!(deck.apply(DeckCommand::Advance, &mut store), None);
        assert_eq!(deck.apply(DeckCommand::Advance, &mut store), Some(DeckEvent::EndOfDeck));
        assert_eq!(deck.progress(), Some((2, 2)));
    }

    #[test]
    fn test_retreat_at_start_has_no_event() {
        let mut store = store();
        let mut deck = session(&store, FilterMode::All);
        assert_eq!(deck.apply(DeckCommand::Retreat, &mut store), None);
        assert_eq!(deck.progress(), Some((1, 10)));
    }

    #[test]
    fn test_swipe_uses_mapping() {
        let mut store = store();
        let mut deck = session(&store, FilterMode::All);
        deck.apply(DeckCommand::Swipe(Swipe::Right), &mut store);
        assert_eq!(deck.current_id(), Some(2));
        deck.apply(DeckCommand::Swipe(Swipe::Left), &mut store);
        assert_eq!(deck.current_id(), Some(1));

        let mut swapped = DeckSession::with_order(
            store.get_all(),
            FilterMode::All,
            DeckOrder::Insertion,
            SwipeMapping::RightRetreats,
        );
        swapped.apply(DeckCommand::Swipe(Swipe::Left), &mut store);
        assert_eq!(swapped.current_id(), Some(2));
    }

    #[test]
    fn test_unfavorite_last_favorite_empties_deck() {
        let mut store = store();
        let mut deck = session(&store, FilterMode::Favorites);
        deck.apply(DeckCommand::ToggleFavorite, &mut store);
        assert_eq!(deck.working_set().ids(), &[9]);
        deck.apply(DeckCommand::ToggleFavorite, &mut store);
        assert!(deck.is_empty());
        assert_eq!(deck.cursor().state(), CursorState::Empty);
        assert_eq!(deck.current_id(), None);

        assert_eq!(deck.apply(DeckCommand::Advance, &mut store), None);
        assert_eq!(deck.apply(DeckCommand::ToggleFavorite, &mut store), None);
        assert_eq!(store.blob_store().write_count(), 2);
    }

    #[test]
    fn test_empty_deck_refills_after_reset() {
        let mut store = store();
        store.replace_all(Vec::new());
        let mut deck = session(&store, FilterMode::All);
        assert!(deck.is_empty());

        store.reset();
        deck.refresh(store.get_all());
        assert_eq!(deck.progress(), Some((1, 10)));
    }

    #[test]
    fn test_filter_mode_change_recomputes() {
        let store = store();
        let mut deck = session(&store, FilterMode::All);
        deck.set_filter_mode(store.get_all(), FilterMode::Favorites);
        assert_eq!(deck.mode(), FilterMode::Favorites);
        assert_eq!(deck.working_set().ids(), &[2, 9]);
    }

    #[test]
    fn test_random_order_shuffles_once() {
        let mut store = store();
        let mut deck = session(&store, FilterMode::All);
        deck.set_random_order(store.get_all(), true);
        let seed = deck.order();
        assert!(matches!(seed, DeckOrder::Shuffled(_)));

        let before = deck.working_set().clone();
        deck.apply(DeckCommand::ToggleFavorite, &mut store);
        assert_eq!(deck.order(), seed);
        assert_eq!(deck.working_set(), &before);

        deck.set_random_order(store.get_all(), true);
        assert_eq!(deck.order(), seed);

        deck.set_random_order(store.get_all(), false);
        assert_eq!(deck.order(), DeckOrder::Insertion);
        assert_eq!(deck.working_set().ids(), &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_card_changed_notifications() {
        let mut store = store();
        let mut deck = session(&store, FilterMode::All);
        assert_eq!(deck.take_card_changed(), Some(1));
        assert_eq!(deck.take_card_changed(), None);

        deck.apply(DeckCommand::Advance, &mut store);
        assert_eq!(deck.take_card_changed(), Some(2));

        deck.apply(DeckCommand::ToggleFavorite, &mut store);
        assert_eq!(deck.take_card_changed(), None);

        deck.apply(DeckCommand::Retreat, &mut store);
        deck.apply(DeckCommand::Retreat, &mut store);
        assert_eq!(deck.take_card_changed(), Some(1));
    }

    #[test]
    fn test_current_word_lookup() {
        let store = store();
        let deck = session(&store, FilterMode::Unlearned);
        let words = seed_words();
        assert_eq!(deck.current(&words).map(|w| w.en.as_str()), Some("apple"));
    }
}
