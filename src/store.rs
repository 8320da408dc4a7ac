use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use crate::prelude::*;

pub const DEFAULT_VOCAB_PATH: &str = "vocab.json";

/// Persistence for a [`Vocabulary`].
///
/// Operations take a store instead of a fixed file so they can run against
/// [`MemoryStore`] in tests.
pub trait VocabularyStore {
    /// Replace whatever the store holds with `vocab`.
    fn save(&self, vocab: &Vocabulary) -> Result<()>;

    /// Load the word to ID mapping. Fails with [`Error::VocabularyUnavailable`]
    /// when nothing usable is stored.
    fn load(&self) -> Result<Vocabulary>;

    /// Load the ID to word mapping.
    fn load_inverse(&self) -> Result<InverseVocabulary> {
        self.load().map(|vocab| vocab.invert())
    }
}

fn ensure_specials(vocab: Vocabulary, location: &str) -> Result<Vocabulary> {
    match vocab.missing_special_token() {
        Some(token) => Err(Error::VocabularyUnavailable {
            location: location.to_string(),
            source: LoadError::MissingSpecialToken(token),
        }),
        None => Ok(vocab),
    }
}

/// Vocabulary stored as a pretty-printed JSON object on disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn unavailable(&self, source: impl Into<LoadError>) -> Error {
        Error::VocabularyUnavailable {
            location: self.path.display().to_string(),
            source: source.into(),
        }
    }
}

impl Default for FileStore {
    fn default() -> Self {
        FileStore::new(DEFAULT_VOCAB_PATH)
    }
}

impl VocabularyStore for FileStore {
    fn save(&self, vocab: &Vocabulary) -> Result<()> {
        let raw = serde_json::to_string_pretty(vocab)?;
        fs::write(&self.path, raw).map_err(|source| Error::VocabularyUnwritable {
            path: self.path.clone(),
            source,
        })?;
        log::debug!(
            "wrote {} vocabulary entries to {}",
            vocab.len(),
            self.path.display()
        );
        Ok(())
    }

    fn load(&self) -> Result<Vocabulary> {
        log::debug!("loading vocabulary from {}", self.path.display());
        let raw = fs::read_to_string(&self.path).map_err(|e| self.unavailable(e))?;
        let vocab: Vocabulary = serde_json::from_str(&raw).map_err(|e| self.unavailable(e))?;
        ensure_specials(vocab, &self.path.display().to_string())
    }
}

/// In-process store, mostly useful for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    vocab: RefCell<Option<Vocabulary>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vocabulary(vocab: Vocabulary) -> Self {
        MemoryStore {
            vocab: RefCell::new(Some(vocab)),
        }
    }

    /// Snapshot of the stored vocabulary.
    pub fn get(&self) -> Option<Vocabulary> {
        self.vocab.borrow().clone()
    }
}

impl VocabularyStore for MemoryStore {
    fn save(&self, vocab: &Vocabulary) -> Result<()> {
        *self.vocab.borrow_mut() = Some(vocab.clone());
        Ok(())
    }

    fn load(&self) -> Result<Vocabulary> {
        let vocab = self.get().ok_or_else(|| Error::VocabularyUnavailable {
            location: "memory".to_string(),
            source: LoadError::Empty,
        })?;
        ensure_specials(vocab, "memory")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn file_store_round_trips_in_id_order() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("vocab.json"));
        let vocab = Vocabulary::learn("zebra apple mango");

        store.save(&vocab).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded, vocab);
        let order: Vec<_> = loaded.iter().map(|(word, _)| word.to_string()).collect();
        assert_eq!(
            order,
            ["<PAD>", "<UNK>", "<START>", "<END>", "zebra", "apple", "mango"]
        );
    }

    #[test]
    fn file_store_writes_pretty_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vocab.json");
        FileStore::new(&path).save(&Vocabulary::learn("hi")).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert_eq!(
            raw,
            "{\n  \"<PAD>\": 0,\n  \"<UNK>\": 1,\n  \"<START>\": 2,\n  \"<END>\": 3,\n  \"hi\": 4\n}"
        );
    }

    #[test]
    fn save_overwrites_previous_vocabulary() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("vocab.json"));

        store.save(&Vocabulary::learn("one two three four")).unwrap();
        store.save(&Vocabulary::learn("five")).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 5);
        assert_eq!(loaded.get("five"), Some(4));
        assert_eq!(loaded.get("one"), None);
    }

    #[test]
    fn missing_file_is_unavailable() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("absent.json"));

        let err = store.load().unwrap_err();
        assert!(matches!(
            err,
            Error::VocabularyUnavailable {
                source: LoadError::Io(_),
                ..
            }
        ));
        assert!(err.to_string().contains("Run \"learn\" first."));
        assert!(!store.path().exists());
    }

    #[test]
    fn malformed_json_is_unavailable() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vocab.json");
        fs::write(&path, "{not json").unwrap();

        let err = FileStore::new(&path).load_inverse().unwrap_err();
        assert!(matches!(
            err,
            Error::VocabularyUnavailable {
                source: LoadError::Json(_),
                ..
            }
        ));
    }

    #[test]
    fn negative_ids_are_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vocab.json");
        fs::write(&path, r#"{"<PAD>": -1}"#).unwrap();

        assert!(FileStore::new(&path).load().is_err());
    }

    #[test]
    fn vocabulary_without_specials_is_unavailable() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vocab.json");
        fs::write(&path, r#"{"<PAD>": 0, "word": 1}"#).unwrap();

        let err = FileStore::new(&path).load().unwrap_err();
        assert!(matches!(
            err,
            Error::VocabularyUnavailable {
                source: LoadError::MissingSpecialToken("<UNK>"),
                ..
            }
        ));
    }

    #[test]
    fn unwritable_path_is_reported() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("missing-dir").join("vocab.json"));

        let err = store.save(&Vocabulary::learn("a")).unwrap_err();
        assert!(matches!(err, Error::VocabularyUnwritable { .. }));
    }

    #[test]
    fn load_inverse_maps_ids_to_words() {
        let store = MemoryStore::with_vocabulary(Vocabulary::learn("red green"));
        let inverse = store.load_inverse().unwrap();
        assert_eq!(inverse.get(2), Some("<START>"));
        assert_eq!(inverse.get(5), Some("green"));
        assert_eq!(inverse.get(6), None);
    }

    #[test]
    fn empty_memory_store_is_unavailable() {
        let err = MemoryStore::new().load().unwrap_err();
        assert!(matches!(
            err,
            Error::VocabularyUnavailable {
                source: LoadError::Empty,
                ..
            }
        ));
    }
}
