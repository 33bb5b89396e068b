//! Paradigm catalog: the 17 grammatical categories and their initialization.
//!
//! The catalog is static data, built once per process. Persisting it is a
//! separate, explicit step: [`ensure_categories`] inserts any missing
//! records into a [`FormStore`] and hands back a [`CategoryIds`] lookup.
//! `CategoryIds` cannot be built any other way, so holding one proves the
//! catalog was committed before a form write is attempted.

mod category;

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::{debug, info};

use crate::error::{KatsuyoError, Result};
use crate::store::FormStore;

pub use category::{CategoryRecord, GrammaticalCategory};

static CATALOG: Lazy<Vec<CategoryRecord>> = Lazy::new(|| {
    GrammaticalCategory::ALL
        .iter()
        .map(|&category| CategoryRecord::from(category))
        .collect()
});

/// The catalog records in sort order.
pub fn catalog() -> &'static [CategoryRecord] {
    &CATALOG
}

/// Code -> store identifier lookup for every catalog category.
#[derive(Debug, Clone)]
pub struct CategoryIds {
    ids: HashMap<GrammaticalCategory, i64>,
}

impl CategoryIds {
    /// Store identifier of a category.
    pub fn get(&self, category: GrammaticalCategory) -> Option<i64> {
        self.ids.get(&category).copied()
    }

    /// Number of resolved categories (always the full catalog).
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Insert the catalog into `store` if absent and resolve category ids.
///
/// Existing records are never updated. Safe to call any number of times.
/// Fails if, after insertion, some category still has no identifier.
pub fn ensure_categories<S: FormStore + ?Sized>(store: &mut S) -> Result<CategoryIds> {
    for record in catalog() {
        store.insert_category_if_absent(record)?;
    }

    let stored: HashMap<String, i64> = store.category_ids()?.into_iter().collect();

    let mut ids = HashMap::with_capacity(GrammaticalCategory::ALL.len());
    let mut missing = Vec::new();
    for category in GrammaticalCategory::ALL {
        match stored.get(category.code()) {
            Some(&id) => {
                ids.insert(category, id);
            }
            None => missing.push(category.code().to_string()),
        }
    }

    if !missing.is_empty() {
        return Err(KatsuyoError::CatalogIncomplete { missing });
    }

    // Unknown codes in the table are tolerated; they are simply never written.
    let extra = stored.len().saturating_sub(ids.len());
    if extra > 0 {
        debug!(extra, "category table holds codes outside the catalog");
    }

    info!(categories = ids.len(), "category catalog ready");
    Ok(CategoryIds { ids })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_catalog_has_17_sorted_records() {
        let records = catalog();
        assert_eq!(records.len(), 17);
        assert_eq!(records[0].code, "polite_present");
        assert_eq!(records[16].code, "conditional_tara");
        assert!(records.windows(2).all(|w| w[0].sort_rank < w[1].sort_rank));
    }

    #[test]
    fn test_ensure_categories_is_idempotent() {
        let mut store = MemoryStore::new();

        let first = ensure_categories(&mut store).unwrap();
        let second = ensure_categories(&mut store).unwrap();

        assert_eq!(first.len(), 17);
        assert_eq!(store.categories().len(), 17);
        for category in GrammaticalCategory::ALL {
            assert_eq!(first.get(category), second.get(category));
        }
    }

    #[test]
    fn test_ensure_categories_keeps_existing_records() {
        let mut store = MemoryStore::new();
        let mut custom = CategoryRecord::from(GrammaticalCategory::TeForm);
        custom.description = "edited by hand".to_string();
        store.insert_category_if_absent(&custom).unwrap();

        ensure_categories(&mut store).unwrap();

        let te = store
            .categories()
            .iter()
            .find(|(_, r)| r.code == "te_form")
            .map(|(_, r)| r.description.clone());
        assert_eq!(te.as_deref(), Some("edited by hand"));
    }
}
