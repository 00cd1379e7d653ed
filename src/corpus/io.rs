// src/corpus/io.rs

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

use rustc_hash::FxHashMap as HashMap;
use serde::{Deserialize, Serialize};

use crate::corpus::{Corpus, Error, Result};

/// ID and frequency of one word in an exported dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictEntry {
    pub id: usize,
    pub freq: u64,
}

impl Corpus {
    /// A copy of the word → ID mapping, renamed aliases included.
    ///
    /// Feeding it back to [`Corpus::from_dict`] restores words and IDs but
    /// resets every frequency to 1.
    pub fn to_dict(&self) -> HashMap<String, usize> {
        self.ids.clone()
    }

    /// Word → (ID, frequency) for every live word.
    pub fn to_dict_with_freq(&self) -> HashMap<String, DictEntry> {
        self.iter()
            .map(|(id, word, freq)| (word.to_owned(), DictEntry { id, freq }))
            .collect()
    }

    /// Encodes the corpus with bincode, fields in declaration order.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let corpus: Corpus = bincode::deserialize(bytes)?;
        corpus.check_consistency()?;
        Ok(corpus)
    }

    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        bincode::serialize_into(writer, self)?;
        Ok(())
    }

    pub fn read_from<R: Read>(reader: R) -> Result<Self> {
        let corpus: Corpus = bincode::deserialize_from(reader)?;
        corpus.check_consistency()?;
        Ok(corpus)
    }

    /// Saves the corpus to a bincode file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Loads a corpus saved by [`Corpus::save`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::read_from(BufReader::new(file))
    }

    // Repeated ordered words and renamed aliases mean `ids[words[i]]` need
    // not be `i`; every word must still be a key and every key a live ID.
    fn check_consistency(&self) -> Result<()> {
        if self.words.len() != self.frequencies.len() || self.words.len() != self.max_id {
            return Err(Error::corrupt(format!(
                "{} words, {} frequencies, max ID {}",
                self.words.len(),
                self.frequencies.len(),
                self.max_id
            )));
        }
        if let Some((id, word)) = self
            .words
            .iter()
            .enumerate()
            .find(|&(_, word)| !self.ids.contains_key(word))
        {
            return Err(Error::corrupt(format!("word {word:?} at ID {id} has no key")));
        }
        if let Some((word, &id)) = self.ids.iter().find(|&(_, &id)| id >= self.max_id) {
            return Err(Error::corrupt(format!(
                "key {word:?} maps to ID {id} past max ID {}",
                self.max_id
            )));
        }
        Ok(())
    }

    /// Loads a tab separated one-gram file, one `word<TAB>count` per line:
    ///
    /// ```text
    /// the	23135851162
    /// of	13151942776
    /// ```
    ///
    /// Each word is added and its frequency overwritten with the count. A
    /// missing count, a count that is not a plain unsigned integer (negative,
    /// padded with spaces) or one that overflows the total frequency aborts
    /// the load; lines read before the bad one stay applied. Blank lines are
    /// skipped.
    pub fn load_one_gram<R: Read>(&mut self, reader: R) -> Result<()> {
        let reader = BufReader::new(reader);
        let mut loaded = 0usize;
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = i + 1;
            if line.trim().is_empty() {
                log::warn!("skipping blank one-gram line {line_no}");
                continue;
            }

            let mut fields = line.split('\t');
            let word = fields.next().unwrap_or_default();
            let count = fields.next().ok_or_else(|| Error::Parse {
                line: line_no,
                msg: format!("missing count for {word:?}"),
            })?;
            let count: u64 = count.parse().map_err(|e| Error::Parse {
                line: line_no,
                msg: format!("bad count {count:?} for {word:?}: {e}"),
            })?;
            let total = self.total_freq.checked_add(count).ok_or_else(|| Error::Parse {
                line: line_no,
                msg: format!("count {count} for {word:?} overflows the total frequency"),
            })?;

            let id = self.slot(word);
            self.frequencies[id] = count;
            self.total_freq = total;
            loaded += 1;
        }
        log::info!(
            "loaded {loaded} one-gram entries, corpus size {}, total frequency {}",
            self.size(),
            self.total_freq
        );
        Ok(())
    }
}
