// src/corpus/builder.rs
//
// One-shot construction strategies. None of them seed the sentinel words;
// use `Corpus::new` followed by `add` for that.

use std::collections::BTreeSet;

use crate::corpus::io::DictEntry;
use crate::corpus::{Corpus, Error, Result};

fn char_len(word: &str) -> usize {
    word.chars().count()
}

// Sorts (word, id, freq) triples by ID and checks that position `i` holds ID `i`
// and that no word appears twice.
fn from_sorted_entries(mut entries: Vec<(String, usize, u64)>) -> Result<Corpus> {
    entries.sort_by_key(|&(_, id, _)| id);

    let mut corpus = Corpus::with_capacity(entries.len());
    for (i, (word, id, freq)) in entries.into_iter().enumerate() {
        if id != i {
            return Err(Error::corrupt(format!(
                "expected ID {i} at position {i}, got {id} for {word:?}"
            )));
        }
        if let Some(first) = corpus.ids.insert(word.clone(), i) {
            return Err(Error::corrupt(format!(
                "word {word:?} listed under both ID {first} and ID {i}"
            )));
        }
        corpus.max_word_length = corpus.max_word_length.max(char_len(&word));
        corpus.total_freq += freq;
        corpus.frequencies.push(freq);
        corpus.words.push(word);
    }
    corpus.max_id = corpus.words.len();
    Ok(corpus)
}

impl Corpus {
    /// An empty corpus, without sentinels, with room for `size` words.
    pub fn with_capacity(size: usize) -> Self {
        let mut corpus = Self::empty();
        corpus.words.reserve(size);
        corpus.frequencies.reserve(size);
        corpus.ids.reserve(size);
        corpus
    }

    /// Builds a corpus from a word list that may contain repeats.
    ///
    /// IDs follow the byte-wise order of the distinct words. Frequencies count
    /// the occurrences in the original list.
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
        let set: BTreeSet<&str> = words.iter().map(AsRef::as_ref).collect();

        let mut corpus = Self::with_capacity(set.len());
        for (id, word) in set.into_iter().enumerate() {
            corpus.max_word_length = corpus.max_word_length.max(char_len(word));
            corpus.ids.insert(word.to_owned(), id);
            corpus.words.push(word.to_owned());
        }
        corpus.frequencies = vec![0; corpus.words.len()];
        corpus.max_id = corpus.words.len();

        for word in words {
            let id = corpus.ids[word.as_ref()];
            corpus.frequencies[id] += 1;
            corpus.total_freq += 1;
        }
        corpus
    }

    /// Builds a corpus whose IDs are the positions in `words`.
    ///
    /// Every entry gets frequency 1 and its own ID, repeats included; the key
    /// of a repeated word resolves to its last position.
    pub fn from_ordered_words<S: AsRef<str>>(words: &[S]) -> Self {
        let mut corpus = Self::with_capacity(words.len());
        for (id, word) in words.iter().enumerate() {
            let word = word.as_ref();
            corpus.max_word_length = corpus.max_word_length.max(char_len(word));
            corpus.ids.insert(word.to_owned(), id);
            corpus.words.push(word.to_owned());
        }
        corpus.frequencies = vec![1; words.len()];
        corpus.max_id = words.len();
        corpus.total_freq = words.len() as u64;
        corpus
    }

    /// Rebuilds a corpus from a word → ID mapping, e.g. one exported by
    /// [`Corpus::to_dict`]. Frequencies are reset to 1.
    ///
    /// Fails with [`Error::CorruptMapping`] unless the IDs are exactly
    /// `0..len` and every word is listed once.
    pub fn from_dict<I, S>(dict: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, usize)>,
        S: Into<String>,
    {
        let entries = dict
            .into_iter()
            .map(|(word, id)| (word.into(), id, 1))
            .collect();
        from_sorted_entries(entries)
    }

    /// Like [`Corpus::from_dict`] but keeps the frequencies, so it inverts
    /// [`Corpus::to_dict_with_freq`] exactly.
    pub fn from_dict_with_freq<I, S>(dict: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, DictEntry)>,
        S: Into<String>,
    {
        let entries = dict
            .into_iter()
            .map(|(word, entry)| (word.into(), entry.id, entry.freq))
            .collect();
        from_sorted_entries(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_are_deduplicated_and_counted() {
        let corpus = Corpus::from_words(&["World", "Hello", "World"]);
        assert_eq!(corpus.size(), 2);
        assert_eq!(corpus.word(0), Some("Hello"));
        assert_eq!(corpus.word(1), Some("World"));
        assert_eq!(corpus.word_freq("World"), 2);
        assert_eq!(corpus.word_freq("Hello"), 1);
        assert_eq!(corpus.total_freq(), 3);
        assert_eq!(corpus.max_word_length(), 5);
    }

    #[test]
    fn ordered_words_keep_positions() {
        let corpus = Corpus::from_ordered_words(&["b", "a", "ccc", "a"]);
        assert_eq!(corpus.size(), 4);
        assert_eq!(corpus.word(0), Some("b"));
        assert_eq!(corpus.word(3), Some("a"));
        assert_eq!(corpus.id("a"), Some(3));
        assert_eq!(corpus.id_freq(1), 1);
        assert_eq!(corpus.total_freq(), 4);
        assert_eq!(corpus.max_word_length(), 3);
    }

    #[test]
    fn dict_must_be_dense() {
        let gap = vec![("a", 0), ("b", 2)];
        assert!(matches!(
            Corpus::from_dict(gap),
            Err(Error::CorruptMapping(_))
        ));

        let duplicate = vec![("a", 0), ("b", 0), ("c", 1)];
        assert!(matches!(
            Corpus::from_dict(duplicate),
            Err(Error::CorruptMapping(_))
        ));

        let offset = vec![("a", 1), ("b", 2)];
        assert!(Corpus::from_dict(offset).is_err());

        let repeated_word = vec![("a", 0), ("a", 1)];
        assert!(matches!(
            Corpus::from_dict(repeated_word),
            Err(Error::CorruptMapping(_))
        ));

        let repeated_entry = vec![
            ("a", DictEntry { id: 0, freq: 2 }),
            ("a", DictEntry { id: 1, freq: 5 }),
        ];
        assert!(matches!(
            Corpus::from_dict_with_freq(repeated_entry),
            Err(Error::CorruptMapping(_))
        ));
    }

    #[test]
    fn dict_resets_frequencies() {
        let corpus = Corpus::from_dict(vec![("zeta", 1), ("alpha", 0)]).unwrap();
        assert_eq!(corpus.word(0), Some("alpha"));
        assert_eq!(corpus.word(1), Some("zeta"));
        assert_eq!(corpus.word_freq("zeta"), 1);
        assert_eq!(corpus.total_freq(), 2);
        assert_eq!(corpus.size(), 2);
    }

    #[test]
    fn dict_with_freq_sums_total() {
        let corpus = Corpus::from_dict_with_freq(vec![
            ("b", DictEntry { id: 1, freq: 7 }),
            ("a", DictEntry { id: 0, freq: 3 }),
        ])
        .unwrap();
        assert_eq!(corpus.word_freq("b"), 7);
        assert_eq!(corpus.total_freq(), 10);
    }

    #[test]
    fn with_capacity_is_empty() {
        let mut corpus = Corpus::with_capacity(16);
        assert_eq!(corpus.size(), 0);
        assert_eq!(corpus.add("first"), 0);
    }
}
