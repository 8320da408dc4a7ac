use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::base::{END, SPECIAL_TOKENS, START, STRUCTURAL_TOKENS, Token, UNK};
use crate::tokenize::tokenize;

/// Word to ID mapping. Iteration order is ID order for learned vocabularies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vocabulary {
    tokens: IndexMap<String, Token>,
}

impl Vocabulary {
    /// Build a vocabulary from `corpus`.
    ///
    /// The special tokens take IDs `0..4`, then every distinct word gets the
    /// next ID in the order it first appears.
    pub fn learn(corpus: &str) -> Self {
        let words = SPECIAL_TOKENS
            .iter()
            .map(|token| token.to_string())
            .chain(tokenize(corpus));

        let mut tokens = IndexMap::new();
        for word in words {
            let next = tokens.len() as Token;
            tokens.entry(word).or_insert(next);
        }
        Vocabulary { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, word: &str) -> Option<Token> {
        self.tokens.get(word).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Token)> {
        self.tokens.iter().map(|(word, &id)| (word.as_str(), id))
    }

    /// First special token absent from this vocabulary, if any.
    pub fn missing_special_token(&self) -> Option<&'static str> {
        SPECIAL_TOKENS
            .into_iter()
            .find(|token| !self.tokens.contains_key(*token))
    }

    // Stored vocabularies always carry the specials; a hand-built one without
    // them encodes the missing token as 0.
    fn special_id(&self, token: &str) -> Token {
        self.get(token).unwrap_or_default()
    }

    /// Encode `text` into a sequence framed by `<START>` and `<END>`.
    /// Words outside the vocabulary become `<UNK>`.
    pub fn encode(&self, text: &str) -> Vec<Token> {
        let unk = self.special_id(UNK);
        let words = tokenize(text);

        let mut ids = Vec::with_capacity(words.len() + 2);
        ids.push(self.special_id(START));
        ids.extend(words.iter().map(|word| self.get(word).unwrap_or(unk)));
        ids.push(self.special_id(END));
        ids
    }

    /// Build the ID to word view. Duplicate IDs keep the last word seen.
    pub fn invert(&self) -> InverseVocabulary {
        InverseVocabulary {
            words: self
                .tokens
                .iter()
                .map(|(word, &id)| (id, word.clone()))
                .collect(),
        }
    }
}

/// ID to word mapping derived from a [`Vocabulary`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InverseVocabulary {
    words: IndexMap<Token, String>,
}

impl InverseVocabulary {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, id: Token) -> Option<&str> {
        self.words.get(&id).map(String::as_str)
    }

    /// Decode IDs back into space separated text.
    ///
    /// Unknown or unparsed IDs render as `<UNK>`; `<START>`, `<END>` and
    /// `<PAD>` are dropped.
    pub fn decode(&self, ids: &[Option<Token>]) -> String {
        ids.iter()
            .map(|id| id.and_then(|id| self.get(id)).unwrap_or(UNK))
            .filter(|word| !STRUCTURAL_TOKENS.contains(word))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
