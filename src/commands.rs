//! The three tokenizer operations. Each one takes its [`VocabularyStore`]
//! explicitly and returns its result instead of printing or exiting.

use std::fs;
use std::path::Path;

use crate::prelude::*;
use crate::tokenize::parse_ids;

/// Learn a vocabulary from the corpus at `corpus_path` and save it to `store`,
/// replacing any previous vocabulary. Invalid UTF-8 in the corpus is replaced
/// with U+FFFD rather than rejected.
pub fn learn(store: &impl VocabularyStore, corpus_path: &Path) -> Result<Vocabulary> {
    let raw = fs::read(corpus_path).map_err(|source| Error::CorpusUnreadable {
        path: corpus_path.to_path_buf(),
        source,
    })?;
    let corpus = String::from_utf8_lossy(&raw);
    log::debug!(
        "read {} bytes of corpus from {}",
        corpus.len(),
        corpus_path.display()
    );

    let vocab = Vocabulary::learn(&corpus);
    store.save(&vocab)?;
    log::info!("learned {} tokens", vocab.len());

    Ok(vocab)
}

/// Encode `text` with the stored vocabulary.
pub fn encode(store: &impl VocabularyStore, text: &str) -> Result<Vec<Token>> {
    let vocab = store.load()?;
    Ok(vocab.encode(text))
}

/// Decode `ids` with the stored vocabulary. `None` entries render as `<UNK>`.
pub fn decode(store: &impl VocabularyStore, ids: &[Option<Token>]) -> Result<String> {
    let inverse = store.load_inverse()?;
    log::debug!("decoding {} ids against {} words", ids.len(), inverse.len());
    Ok(inverse.decode(ids))
}

/// [`decode`] for a stringified list such as `"[2, 4, 3]"`.
pub fn decode_str(store: &impl VocabularyStore, ids: &str) -> Result<String> {
    decode(store, &parse_ids(ids))
}
