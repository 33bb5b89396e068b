//! Vocabulary entries and the forms derived from them.

use serde::{Deserialize, Serialize};

use crate::catalog::GrammaticalCategory;

/// A dictionary-form word as held by the vocabulary store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexicalEntry {
    pub id: i64,
    pub word: String,
    /// Opaque, loosely structured tag (e.g. "名・他動3").
    #[serde(default)]
    pub part_of_speech: String,
}

impl LexicalEntry {
    pub fn new(id: i64, word: impl Into<String>, part_of_speech: impl Into<String>) -> Self {
        Self {
            id,
            word: word.into(),
            part_of_speech: part_of_speech.into(),
        }
    }
}

/// One inflected form, unique per (entry, category).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConjugatedForm {
    pub entry_id: i64,
    pub category: GrammaticalCategory,
    pub surface_text: String,
}
