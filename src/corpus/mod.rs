// src/corpus/mod.rs

pub mod builder;
pub mod io;
pub mod pre_tokenizer;
pub mod result;
pub mod text_corpus;
pub mod viterbi;
pub mod vocab;

pub use io::DictEntry;
pub use result::{Error, Result};
pub use text_corpus::TextCorpusBuilder;
pub use viterbi::viterbi_split;
pub use vocab::{Corpus, NULL_WORD, ROOT_WORD, UNKNOWN_WORD};
