//! In-memory store for dry runs and tests.

use std::collections::BTreeMap;

use crate::catalog::CategoryRecord;
use crate::entry::LexicalEntry;
use crate::error::Result;

use super::{EntryFilter, EntryRows, FormStore, VocabularySource};

/// Maps standing in for the category, form and vocabulary tables.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    categories: Vec<(i64, CategoryRecord)>,
    forms: BTreeMap<(i64, i64), String>,
    entries: Vec<LexicalEntry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that also serves `entries` as its vocabulary.
    pub fn with_entries(entries: Vec<LexicalEntry>) -> Self {
        Self {
            entries,
            ..Self::default()
        }
    }

    /// Stored (id, record) pairs in insertion order.
    pub fn categories(&self) -> &[(i64, CategoryRecord)] {
        &self.categories
    }

    /// Stored forms keyed by (entry id, category id).
    pub fn forms(&self) -> &BTreeMap<(i64, i64), String> {
        &self.forms
    }

    /// Surface text stored for an entry and category code.
    pub fn form(&self, entry_id: i64, code: &str) -> Option<&str> {
        let category_id = self
            .categories
            .iter()
            .find(|(_, r)| r.code == code)
            .map(|(id, _)| *id)?;
        self.forms.get(&(entry_id, category_id)).map(String::as_str)
    }

    pub fn form_count(&self) -> usize {
        self.forms.len()
    }
}

impl FormStore for MemoryStore {
    fn insert_category_if_absent(&mut self, record: &CategoryRecord) -> Result<()> {
        if !self.categories.iter().any(|(_, r)| r.code == record.code) {
            let id = self.categories.len() as i64 + 1;
            self.categories.push((id, record.clone()));
        }
        Ok(())
    }

    fn category_ids(&self) -> Result<Vec<(String, i64)>> {
        Ok(self
            .categories
            .iter()
            .map(|(id, r)| (r.code.clone(), *id))
            .collect())
    }

    fn write_batch(&mut self, batch: &[EntryRows]) -> Result<Vec<Result<usize>>> {
        let mut results = Vec::with_capacity(batch.len());
        for entry in batch {
            self.forms.retain(|&(entry_id, _), _| entry_id != entry.entry_id);
            for row in &entry.rows {
                self.forms
                    .insert((entry.entry_id, row.category_id), row.surface_text.clone());
            }
            results.push(Ok(entry.rows.len()));
        }
        Ok(results)
    }
}

impl VocabularySource for MemoryStore {
    fn load_entries(&self, filter: &EntryFilter) -> Result<Vec<LexicalEntry>> {
        Ok(filter.apply(self.entries.iter().cloned()))
    }
}
