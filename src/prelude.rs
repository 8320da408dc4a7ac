pub use crate::base::{END, PAD, SPECIAL_TOKENS, START, Token, UNK};
pub use crate::error::{Error, LoadError};
pub use crate::store::{FileStore, MemoryStore, VocabularyStore};
pub use crate::vocab::{InverseVocabulary, Vocabulary};

pub type Result<T> = std::result::Result<T, Error>;
