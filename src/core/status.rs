use super::{
    models::{
        WordId,
        WordUpdate,
    },
    word_store::WordStore,
};
use crate::persistence::BlobStore;

pub fn toggle_favorite<S: BlobStore>(store: &mut WordStore<S>, id: WordId) -> bool {
    let Some(word) = store.get(id) else {
        return false;
    };
    let update = WordUpdate::favorite(!word.is_favorite);
    store.apply_update(id, update)
}

pub fn toggle_learned<S: BlobStore>(store: &mut WordStore<S>, id: WordId) -> bool {
    let Some(word) = store.get(id) else {
        return false;
    };
    let update = WordUpdate::learned(!word.learned);
    store.apply_update(id, update)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::models::seed_words,
        persistence::MemoryBlobStore,
    };

    #[test]
    fn test_toggle_favorite_flips_exactly_one_field() {
        let mut store = WordStore::load(MemoryBlobStore::new());
        let before = store.get_all().to_vec();

        assert!(toggle_favorite(&mut store, 4));

        for (old, new) in before.iter().zip(store.get_all()) {
            if old.id == 4 {
                assert_eq!(new.is_favorite, !old.is_favorite);
                assert_eq!(new.learned, old.learned);
                assert_eq!(new.en, old.en);
                assert_eq!(new.cn, old.cn);
                assert_eq!(new.example, old.example);
                assert_eq!(new.difficulty, old.difficulty);
            } else {
                assert_eq!(new, old);
            }
        }
    }

    #[test]
    fn test_toggle_learned_twice_restores() {
        let mut store = WordStore::load(MemoryBlobStore::new());
        assert!(toggle_learned(&mut store, 3));
        assert!(!store.get(3).unwrap().learned);
        assert!(toggle_learned(&mut store, 3));
        assert_eq!(store.get_all(), seed_words().as_slice());
        assert_eq!(store.blob_store().write_count(), 2);
    }

    #[test]
    fn test_unknown_id_is_silent() {
        let mut store = WordStore::load(MemoryBlobStore::new());
        assert!(!toggle_favorite(&mut store, 0));
        assert!(!toggle_learned(&mut store, 11));
        assert_eq!(store.get_all(), seed_words().as_slice());
        assert_eq!(store.blob_store().write_count(), 0);
    }
}
