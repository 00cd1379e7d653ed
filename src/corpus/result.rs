// src/corpus/result.rs

/// Everything that can go wrong while building, mutating, persisting or
/// querying a [`Corpus`](crate::corpus::Corpus).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The word to rename is not a key of the corpus.
    #[error("{0:?} is not found in the corpus")]
    NotFound(String),

    /// The word ID to rename is past the end of the corpus.
    #[error("word ID {id} is out of bounds (corpus size {size})")]
    IdOutOfBounds { id: usize, size: usize },

    /// The new surface form is already a key of the corpus.
    #[error("{0:?} already exists in the corpus")]
    AlreadyExists(String),

    /// An externally supplied ID mapping (or a decoded blob) is not dense and contiguous.
    #[error("corrupt mapping: {0}")]
    CorruptMapping(String),

    /// A one-gram line has a missing or non-integer count field.
    #[error("parse error on line {line}: {msg}")]
    Parse { line: usize, msg: String },

    /// Segmentation was requested against a corpus whose total frequency is zero.
    #[error("cannot score words against a corpus with zero total frequency")]
    DegenerateModel,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Bincode(#[from] bincode::Error),
}

impl Error {
    pub(crate) fn corrupt<S: Into<String>>(msg: S) -> Self {
        Error::CorruptMapping(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
