// src/corpus/vocab.rs

use rustc_hash::FxHashMap as HashMap;
use serde::{Deserialize, Serialize};

use crate::corpus::{Error, Result};

/// Surface forms reserved at IDs 0, 1 and 2 of a fresh corpus.
pub const NULL_WORD: &str = "";
pub const UNKNOWN_WORD: &str = "-UNKNOWN-";
pub const ROOT_WORD: &str = "-ROOT-";

/// A vocabulary with IDs and frequency counts.
///
/// Word IDs are dense and assigned in insertion order. A word is never
/// removed: it can only have its frequency raised or be renamed, and a rename
/// leaves the old surface form resolvable to the same ID.
///
/// The table holds plain fields. Share `&Corpus` freely between readers; wrap
/// it in a `Mutex` if more than one thread needs to add words.
///
/// Field order is the order of the binary encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corpus {
    pub(crate) words: Vec<String>,
    pub(crate) ids: HashMap<String, usize>,
    pub(crate) frequencies: Vec<u64>,
    pub(crate) max_id: usize,
    pub(crate) total_freq: u64,
    pub(crate) max_word_length: usize,
}

impl Default for Corpus {
    fn default() -> Self {
        Self::new()
    }
}

impl Corpus {
    /// Creates a corpus holding only the three sentinel words.
    ///
    /// The sentinels count towards the size and the total frequency but not
    /// towards the maximum word length.
    pub fn new() -> Self {
        let mut corpus = Self::empty();
        corpus.add(NULL_WORD);
        corpus.add(UNKNOWN_WORD);
        corpus.add(ROOT_WORD);
        corpus.max_word_length = 0;
        corpus
    }

    pub(crate) fn empty() -> Self {
        Self {
            words: Vec::new(),
            ids: HashMap::default(),
            frequencies: Vec::new(),
            max_id: 0,
            total_freq: 0,
            max_word_length: 0,
        }
    }

    /// Adds a word and returns its ID. A known word only has its frequency
    /// bumped.
    pub fn add(&mut self, word: &str) -> usize {
        let id = self.slot(word);
        self.frequencies[id] += 1;
        self.total_freq += 1;
        id
    }

    // ID of `word`, appending it with frequency 0 when unknown. Leaves the
    // total frequency untouched.
    pub(crate) fn slot(&mut self, word: &str) -> usize {
        if let Some(&id) = self.ids.get(word) {
            return id;
        }

        let id = self.max_id;
        self.max_id += 1;
        self.ids.insert(word.to_owned(), id);
        self.words.push(word.to_owned());
        self.frequencies.push(0);

        let char_count = word.chars().count();
        if char_count > self.max_word_length {
            self.max_word_length = char_count;
        }

        id
    }

    /// Returns the ID of a word.
    pub fn id(&self, word: &str) -> Option<usize> {
        self.ids.get(word).copied()
    }

    /// Returns the word stored under an ID.
    pub fn word(&self, id: usize) -> Option<&str> {
        if id >= self.max_id {
            return None;
        }
        self.words.get(id).map(String::as_str)
    }

    /// Number of IDs handed out so far.
    pub fn size(&self) -> usize {
        self.max_id
    }

    pub fn word_freq(&self, word: &str) -> u64 {
        self.id(word).map_or(0, |id| self.frequencies[id])
    }

    pub fn id_freq(&self, id: usize) -> u64 {
        if id >= self.max_id {
            return 0;
        }
        self.frequencies.get(id).copied().unwrap_or(0)
    }

    /// Every word ever counted, repeats included.
    pub fn total_freq(&self) -> u64 {
        self.total_freq
    }

    /// Length in codepoints of the longest non-sentinel word.
    pub fn max_word_length(&self) -> usize {
        self.max_word_length
    }

    /// Unigram probability of a word.
    ///
    /// `None` when the word is unknown or the corpus has a zero total
    /// frequency.
    pub fn word_prob(&self, word: &str) -> Option<f64> {
        let id = self.id(word)?;
        if self.total_freq == 0 {
            return None;
        }
        Some(self.frequencies[id] as f64 / self.total_freq as f64)
    }

    /// Iterates over `(id, word, frequency)` in ID order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str, u64)> + '_ {
        self.words
            .iter()
            .zip(self.frequencies.iter())
            .enumerate()
            .map(|(id, (word, &freq))| (id, word.as_str(), freq))
    }

    /// Folds the counts of `other` into `self`.
    ///
    /// Words missing from `self` get fresh IDs local to `self`: IDs are not
    /// aligned across merged corpora. Callers that need stable IDs on both
    /// sides must build both corpora from the same ID dictionary first.
    ///
    /// Counts saturate at `u64::MAX`.
    pub fn merge(&mut self, other: &Corpus) {
        let before = self.size();
        for (_, word, freq) in other.iter() {
            let id = self.slot(word);
            self.frequencies[id] = self.frequencies[id].saturating_add(freq);
            self.total_freq = self.total_freq.saturating_add(freq);
        }
        log::debug!(
            "merged {} words into corpus, {} of them new",
            other.size(),
            self.size() - before
        );
    }

    /// Renames `from` to `to` in place, keeping its ID.
    ///
    /// `from` stays a valid key for the same ID afterwards, so lookups by the
    /// old surface form keep resolving. Only `word(id)` reports the new form.
    pub fn replace(&mut self, from: &str, to: &str) -> Result<()> {
        let id = self
            .id(from)
            .ok_or_else(|| Error::NotFound(from.to_owned()))?;
        if self.ids.contains_key(to) {
            return Err(Error::AlreadyExists(to.to_owned()));
        }
        self.words[id] = to.to_owned();
        self.ids.insert(to.to_owned(), id);
        Ok(())
    }

    /// Renames the word stored under `id`. The old surface form stays a key
    /// for the same ID, as with [`Corpus::replace`].
    pub fn replace_word(&mut self, id: usize, to: &str) -> Result<()> {
        if id >= self.words.len() {
            return Err(Error::IdOutOfBounds {
                id,
                size: self.words.len(),
            });
        }
        if self.ids.contains_key(to) {
            return Err(Error::AlreadyExists(to.to_owned()));
        }
        self.words[id] = to.to_owned();
        self.ids.insert(to.to_owned(), id);
        Ok(())
    }
}
