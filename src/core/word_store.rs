use std::collections::HashSet;

use super::{
    models::{
        seed_words,
        Word,
        WordId,
        WordUpdate,
    },
    DeckError,
};
use crate::persistence::{
    load_json_or_else,
    save_json,
    BlobStore,
    WORDS_KEY,
};

/// Owns the word collection and mirrors every mutation to the blob store.
pub struct WordStore<S: BlobStore> {
    words: Vec<Word>,
    blobs: S,
}

impl<S: BlobStore> WordStore<S> {
    pub fn load(blobs: S) -> Self {
        let words = load_json_or_else(&blobs, WORDS_KEY, seed_words);
        tracing::info!("Loaded {} words", words.len());
        Self { words, blobs }
    }

    pub fn get_all(&self) -> &[Word] {
        &self.words
    }

    pub fn get(&self, id: WordId) -> Option<&Word> {
        self.words.iter().find(|w| w.id == id)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Unknown ids are ignored and nothing is written.
    pub fn apply_update(&mut self, id: WordId, update: WordUpdate) -> bool {
        let Some(word) = self.words.iter_mut().find(|w| w.id == id) else {
            tracing::debug!("Ignoring update for unknown word id {}", id);
            return false;
        };
        update.apply_to(word);
        self.persist();
        true
    }

    pub fn replace_all(&mut self, words: Vec<Word>) {
        self.words = words;
        self.persist();
    }

    pub fn reset(&mut self) {
        tracing::info!("Resetting word list to built-in set");
        self.replace_all(seed_words());
    }

    /// Replaces the collection with an imported list. Duplicate ids are rejected.
    pub fn import(&mut self, words: Vec<Word>) -> Result<usize, DeckError> {
        let mut seen = HashSet::new();
        if let Some(dup) = words.iter().find(|w| !seen.insert(w.id)) {
            return Err(DeckError::DuplicateId(dup.id));
        }
        let count = words.len();
        self.replace_all(words);
        Ok(count)
    }

    pub fn import_json(&mut self, json: &str) -> Result<usize, DeckError> {
        let words: Vec<Word> = serde_json::from_str(json)?;
        self.import(words)
    }

    pub fn export_json(&self) -> Result<String, DeckError> {
        Ok(serde_json::to_string_pretty(&self.words)?)
    }

    pub fn blob_store(&self) -> &S {
        &self.blobs
    }

    fn persist(&mut self) {
        if let Err(e) = save_json(&mut self.blobs, WORDS_KEY, &self.words) {
            tracing::error!("Failed to save words: {}", e);
        }
    }
}
