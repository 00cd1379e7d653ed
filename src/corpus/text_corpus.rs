// src/corpus/text_corpus.rs

use std::io::{BufRead, BufReader, Read};

use crate::corpus::pre_tokenizer::{self, Normalizer, Tokenizer};
use crate::corpus::{Corpus, Result};

struct Config {
    tokenizer: Tokenizer,
    normalizer: Normalizer,
    min_token_len: usize,
}

/// Builds a [`Corpus`] out of line-oriented free text.
///
/// Every line goes through the tokenizer, every token through the normalizer,
/// and the resulting word list through [`Corpus::from_words`].
///
/// ```
/// use corpus_segmenter::corpus::{pre_tokenizer, TextCorpusBuilder};
///
/// let corpus = TextCorpusBuilder::new()
///     .normalizer(pre_tokenizer::lowercase)
///     .build("The cat\nthe hat\n".as_bytes())
///     .unwrap();
/// assert_eq!(corpus.word_freq("the"), 2);
/// ```
pub struct TextCorpusBuilder {
    config: Config,
}

impl Default for TextCorpusBuilder {
    fn default() -> Self {
        Self {
            config: Config {
                tokenizer: Box::new(pre_tokenizer::whitespace_tokenize),
                normalizer: Box::new(pre_tokenizer::identity),
                min_token_len: 0,
            },
        }
    }
}

impl TextCorpusBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn tokenizer<F>(mut self, tokenizer: F) -> Self
    where
        F: Fn(&str) -> Vec<String> + Send + Sync + 'static,
    {
        self.config.tokenizer = Box::new(tokenizer);
        self
    }

    #[must_use]
    pub fn normalizer<F>(mut self, normalizer: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.config.normalizer = Box::new(normalizer);
        self
    }

    /// Drops normalized tokens shorter than `len` codepoints. Defaults to 0,
    /// which keeps every token, empty ones included.
    #[must_use]
    pub fn min_token_len(mut self, len: usize) -> Self {
        self.config.min_token_len = len;
        self
    }

    /// Tokenizes and normalizes one line.
    pub fn process_line(&self, line: &str) -> Vec<String> {
        (self.config.tokenizer)(line)
            .iter()
            .map(|token| (self.config.normalizer)(token.as_str()))
            .filter(|token| token.chars().count() >= self.config.min_token_len)
            .collect()
    }

    /// Reads every line of `reader` and builds the corpus.
    pub fn build<R: Read>(&self, reader: R) -> Result<Corpus> {
        let reader = BufReader::new(reader);
        let mut words = Vec::new();
        let mut lines = 0usize;
        for line in reader.lines() {
            words.extend(self.process_line(&line?));
            lines += 1;
        }

        let corpus = Corpus::from_words(&words);
        log::info!(
            "built corpus from {lines} lines: {} tokens, {} distinct words",
            words.len(),
            corpus.size()
        );
        Ok(corpus)
    }
}

impl Corpus {
    /// Builds a corpus from free text with the default whitespace tokenizer
    /// and identity normalizer.
    pub fn from_text_corpus<R: Read>(reader: R) -> Result<Self> {
        TextCorpusBuilder::new().build(reader)
    }
}
