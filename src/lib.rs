//! Word ↔ ID vocabulary with frequency counts, and maximum-likelihood word
//! splitting on top of it.
//!
//! ```
//! use corpus_segmenter::corpus::{viterbi_split, Corpus};
//!
//! let mut corpus = Corpus::new();
//! corpus.load_one_gram("the\t100\nbest\t20\nway\t30\n".as_bytes())?;
//! assert_eq!(viterbi_split("thebestway", &corpus)?, vec!["the", "best", "way"]);
//! # Ok::<(), corpus_segmenter::corpus::Error>(())
//! ```

pub mod corpus;
