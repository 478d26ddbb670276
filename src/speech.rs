use crate::core::{
    DeckSession,
    Word,
};

/// Text-to-speech seam. Synthesis itself is provided by the platform.
pub trait Pronouncer {
    fn speak(&mut self, text: &str);
}

/// Writes utterances to the log instead of producing audio.
#[derive(Debug, Default)]
pub struct LogPronouncer;

impl Pronouncer for LogPronouncer {
    fn speak(&mut self, text: &str) {
        tracing::info!(lang = "en-US", "Pronounce: {}", text);
    }
}

/// Speaks the card that just came into view. The change is consumed even when
/// auto-pronounce is off so that turning it on later does not replay a stale card.
pub fn announce_card_change(
    session: &mut DeckSession,
    words: &[Word],
    auto_pronounce: bool,
    pronouncer: &mut dyn Pronouncer,
) {
    let Some(id) = session.take_card_changed() else {
        return;
    };
    if !auto_pronounce {
        return;
    }
    if let Some(word) = words.iter().find(|w| w.id == id) {
        pronouncer.speak(&word.en);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{
            session_filter::DeckOrder,
            DeckCommand,
            FilterMode,
            SwipeMapping,
            WordStore,
        },
        persistence::MemoryBlobStore,
    };

    #[derive(Default)]
    struct RecordingPronouncer {
        spoken: Vec<String>,
    }

    impl Pronouncer for RecordingPronouncer {
        fn speak(&mut self, text: &str) {
            self.spoken.push(text.to_string());
        }
    }

    fn deck(store: &WordStore<MemoryBlobStore>) -> DeckSession {
        DeckSession::with_order(
            store.get_all(),
            FilterMode::All,
            DeckOrder::Insertion,
            SwipeMapping::default(),
        )
    }

    #[test]
    fn test_announces_each_new_card_once() {
        let mut store = WordStore::load(MemoryBlobStore::new());
        let mut session = deck(&store);
        let mut pronouncer = RecordingPronouncer::default();

        announce_card_change(&mut session, store.get_all(), true, &mut pronouncer);
        announce_card_change(&mut session, store.get_all(), true, &mut pronouncer);
        session.apply(DeckCommand::Advance, &mut store);
        announce_card_change(&mut session, store.get_all(), true, &mut pronouncer);

        let expected: Vec<String> = store.get_all()[..2].iter().map(|w| w.en.clone()).collect();
        assert_eq!(pronouncer.spoken, expected);
    }

    #[test]
    fn test_silent_when_auto_pronounce_off() {
        let mut store = WordStore::load(MemoryBlobStore::new());
        let mut session = deck(&store);
        let mut pronouncer = RecordingPronouncer::default();

        announce_card_change(&mut session, store.get_all(), false, &mut pronouncer);
        session.apply(DeckCommand::Retreat, &mut store);
        announce_card_change(&mut session, store.get_all(), true, &mut pronouncer);
        assert!(pronouncer.spoken.is_empty());
    }
}
