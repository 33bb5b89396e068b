//! Storage collaborators: where entries come from and where forms go.
//!
//! Two traits describe the boundary. [`VocabularySource`] yields the
//! entries to conjugate; [`FormStore`] persists the category catalog and the
//! generated forms. Both writes are idempotent: categories are inserted only
//! when absent, and each written entry's stored forms are replaced by the
//! new set, so a regenerated entry never keeps rows from an older paradigm.
//!
//! Implementations:
//!
//! - [`SqliteStore`]: the vocabulary database (`words`, `conjugation_types`,
//!   `word_conjugations`).
//! - [`MemoryStore`]: in-process maps, for dry runs and tests.
//! - [`VocabularyFile`]: a CSV/TSV export of entries (source only).

mod file;
mod memory;
mod sqlite;

use serde::{Deserialize, Serialize};

use crate::catalog::CategoryRecord;
use crate::entry::LexicalEntry;
use crate::error::Result;

pub use file::VocabularyFile;
pub use memory::MemoryStore;
pub use sqlite::{SqliteStore, SCHEMA};

/// One form row with its category already resolved to a store id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRow {
    pub category_id: i64,
    pub surface_text: String,
}

/// All rows generated for a single entry; written atomically.
///
/// Writing replaces whatever the store holds for the entry. Empty `rows`
/// clears it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRows {
    pub entry_id: i64,
    pub rows: Vec<FormRow>,
}

/// Persistence for the category catalog and conjugated forms.
pub trait FormStore {
    /// Insert a catalog record unless its code already exists.
    fn insert_category_if_absent(&mut self, record: &CategoryRecord) -> Result<()>;

    /// All (code, id) pairs currently stored.
    fn category_ids(&self) -> Result<Vec<(String, i64)>>;

    /// Replace the stored forms of a batch of entries inside one transaction.
    ///
    /// Each entry succeeds or fails on its own; the inner results line up
    /// with `batch` and carry the number of rows written. The outer error
    /// means the batch as a whole could not be committed.
    fn write_batch(&mut self, batch: &[EntryRows]) -> Result<Vec<Result<usize>>>;
}

/// Which entries a source should yield.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryFilter {
    /// Only entries whose tag looks like a verb (动/動) or adjective (形).
    #[serde(default)]
    pub candidates_only: bool,
    /// Restrict to these entry ids (e.g. the retry list of a previous run).
    #[serde(default)]
    pub ids: Option<Vec<i64>>,
    /// Maximum number of entries, in id order.
    #[serde(default)]
    pub limit: Option<usize>,
}

impl EntryFilter {
    pub fn candidates() -> Self {
        Self {
            candidates_only: true,
            ..Self::default()
        }
    }

    pub fn with_ids(mut self, ids: Vec<i64>) -> Self {
        self.ids = Some(ids);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// In-memory equivalent of the SQL candidate filter.
    pub fn accepts(&self, entry: &LexicalEntry) -> bool {
        if self.candidates_only && !is_candidate_tag(&entry.part_of_speech) {
            return false;
        }
        if let Some(ref ids) = self.ids {
            if !ids.contains(&entry.id) {
                return false;
            }
        }
        true
    }

    /// Apply the filter to an already loaded list.
    pub fn apply(&self, entries: impl IntoIterator<Item = LexicalEntry>) -> Vec<LexicalEntry> {
        let mut selected: Vec<LexicalEntry> =
            entries.into_iter().filter(|e| self.accepts(e)).collect();
        selected.sort_by_key(|e| e.id);
        if let Some(limit) = self.limit {
            selected.truncate(limit);
        }
        selected
    }
}

/// Coarse pre-filter: could this tag classify as a verb or adjective?
pub fn is_candidate_tag(part_of_speech: &str) -> bool {
    part_of_speech.contains('动') || part_of_speech.contains('動') || part_of_speech.contains('形')
}

/// A source of vocabulary entries.
pub trait VocabularySource {
    fn load_entries(&self, filter: &EntryFilter) -> Result<Vec<LexicalEntry>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<LexicalEntry> {
        vec![
            LexicalEntry::new(3, "高い", "イ形"),
            LexicalEntry::new(1, "書く", "他動1"),
            LexicalEntry::new(2, "本", "名"),
            LexicalEntry::new(4, "食べる", "他动2"),
        ]
    }

    #[test]
    fn test_filter_candidates() {
        let selected = EntryFilter::candidates().apply(entries());
        let ids: Vec<i64> = selected.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn test_filter_ids_and_limit() {
        let selected = EntryFilter::default()
            .with_ids(vec![4, 2, 3])
            .with_limit(2)
            .apply(entries());
        let ids: Vec<i64> = selected.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_candidate_tag() {
        assert!(is_candidate_tag("自动1"));
        assert!(is_candidate_tag("名・サ変・他動3"));
        assert!(is_candidate_tag("ナ形"));
        assert!(!is_candidate_tag("名"));
    }
}
