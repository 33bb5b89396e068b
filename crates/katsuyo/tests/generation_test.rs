//! Integration tests for batch generation against real and faulty stores.

use std::collections::HashSet;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tempfile::{tempdir, NamedTempFile};

use katsuyo::{
    ensure_categories, CategoryRecord, ConjugationClass, EntryFilter, EntryRows, FailureKind,
    FormStore, Generator, GeneratorConfig, KatsuyoError, LexicalEntry, MemoryStore, Result,
    SqliteStore, VocabularyFile, VocabularySource,
};

fn vocabulary() -> Vec<LexicalEntry> {
    vec![
        LexicalEntry::new(1, "書く", "他動1"),
        LexicalEntry::new(2, "食べる", "他动2"),
        LexicalEntry::new(3, "勉強する", "名・他動3"),
        LexicalEntry::new(4, "来る", "カ変"),
        LexicalEntry::new(5, "高い", "イ形"),
        LexicalEntry::new(6, "綺麗", "ナ形"),
        LexicalEntry::new(7, "本", "名"),
        LexicalEntry::new(8, "いい", "イ形"),
    ]
}

/// Four verbs and three adjectives; 本 is skipped.
const EXPECTED_FORMS: usize = 4 * 17 + 3 * 11;

/// Wraps a store and rejects the rows of selected entries.
struct FaultyStore {
    inner: MemoryStore,
    reject: HashSet<i64>,
    fail_whole_batch: bool,
}

impl FaultyStore {
    fn rejecting(ids: &[i64]) -> Self {
        Self {
            inner: MemoryStore::new(),
            reject: ids.iter().copied().collect(),
            fail_whole_batch: false,
        }
    }
}

impl FormStore for FaultyStore {
    fn insert_category_if_absent(&mut self, record: &CategoryRecord) -> Result<()> {
        self.inner.insert_category_if_absent(record)
    }

    fn category_ids(&self) -> Result<Vec<(String, i64)>> {
        self.inner.category_ids()
    }

    fn write_batch(&mut self, batch: &[EntryRows]) -> Result<Vec<Result<usize>>> {
        if self.fail_whole_batch {
            return Err(KatsuyoError::Persistence("disk full".to_string()));
        }
        let mut results = Vec::new();
        for entry in batch {
            if self.reject.contains(&entry.entry_id) {
                results.push(Err(KatsuyoError::Persistence(format!(
                    "constraint failed for {}",
                    entry.entry_id
                ))));
            } else {
                results.extend(self.inner.write_batch(std::slice::from_ref(entry))?);
            }
        }
        Ok(results)
    }
}

/// Loses every category after the first insert.
struct ForgetfulStore(MemoryStore);

impl FormStore for ForgetfulStore {
    fn insert_category_if_absent(&mut self, record: &CategoryRecord) -> Result<()> {
        self.0.insert_category_if_absent(record)
    }

    fn category_ids(&self) -> Result<Vec<(String, i64)>> {
        Ok(self.0.category_ids()?.into_iter().take(1).collect())
    }

    fn write_batch(&mut self, batch: &[EntryRows]) -> Result<Vec<Result<usize>>> {
        self.0.write_batch(batch)
    }
}

// =============================================================================
// SQLite
// =============================================================================

#[test]
fn test_sqlite_generation_is_idempotent() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("vocab.db");

    let mut store = SqliteStore::open(&path).unwrap();
    store.insert_entries(&vocabulary()).unwrap();

    let entries = store.load_entries(&EntryFilter::default()).unwrap();
    let first = Generator::new().generate(&mut store, entries.clone()).unwrap();
    assert_eq!(first.processed, 7);
    assert_eq!(first.skipped, 1);
    assert!(first.failed.is_empty());
    assert_eq!(first.forms_written, EXPECTED_FORMS);
    let snapshot = store.forms_for(2).unwrap();
    drop(store);

    // Reopen and run again: same row count, same content.
    let mut store = SqliteStore::open(&path).unwrap();
    let second = Generator::new().generate(&mut store, entries).unwrap();
    assert_eq!(second.processed, first.processed);
    assert_eq!(store.total_forms().unwrap(), EXPECTED_FORMS);
    assert_eq!(store.conjugated_entries().unwrap(), 7);
    assert_eq!(store.form_counts().unwrap().len(), 17);
    assert_eq!(store.forms_for(2).unwrap(), snapshot);
}

#[test]
fn test_sqlite_stores_expected_forms() {
    let mut store = SqliteStore::memory().unwrap();
    Generator::new().generate(&mut store, vocabulary()).unwrap();

    let forms: Vec<(String, String)> = store.forms_for(1).unwrap();
    assert_eq!(forms.len(), 17);
    assert_eq!(forms[0], ("polite_present".to_string(), "書きます".to_string()));
    assert!(forms.contains(&("te_form".to_string(), "書いて".to_string())));

    let adjective = store.forms_for(5).unwrap();
    assert_eq!(adjective.len(), 11);
    assert!(adjective.iter().all(|(code, _)| code != "potential"));

    assert!(store.forms_for(7).unwrap().is_empty());
}

#[test]
fn test_regeneration_replaces_old_forms() {
    let mut store = SqliteStore::memory().unwrap();
    let generator = Generator::new();

    generator
        .generate(&mut store, vec![LexicalEntry::new(1, "書く", "他動1")])
        .unwrap();
    assert_eq!(store.forms_for(1).unwrap().len(), 17);

    // Same id, now an adjective: the verb-only rows must go.
    let report = generator
        .generate(&mut store, vec![LexicalEntry::new(1, "高い", "イ形")])
        .unwrap();
    assert_eq!(report.forms_written, 11);
    let forms = store.forms_for(1).unwrap();
    assert_eq!(forms.len(), 11);
    assert!(forms.iter().all(|(code, _)| code != "potential"));
    assert!(forms.contains(&("plain_past".to_string(), "高かった".to_string())));
    assert_eq!(store.total_forms().unwrap(), 11);

    // Not conjugable any more: every row is cleared.
    let report = generator
        .generate(&mut store, vec![LexicalEntry::new(1, "本", "名")])
        .unwrap();
    assert_eq!(report.skipped, 1);
    assert!(store.forms_for(1).unwrap().is_empty());
    assert_eq!(store.conjugated_entries().unwrap(), 0);
}

#[test]
fn test_memory_regeneration_replaces_old_forms() {
    let mut store = MemoryStore::new();
    let generator = Generator::new();

    generator
        .generate(&mut store, vec![LexicalEntry::new(1, "書く", "他動1")])
        .unwrap();
    generator
        .generate(&mut store, vec![LexicalEntry::new(1, "高い", "イ形")])
        .unwrap();
    assert_eq!(store.form_count(), 11);
    assert_eq!(store.form(1, "potential"), None);

    generator
        .generate(&mut store, vec![LexicalEntry::new(1, "本", "名")])
        .unwrap();
    assert_eq!(store.form_count(), 0);
}

#[test]
fn test_vocabulary_file_into_sqlite() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all("id\tword\tpart_of_speech\n10\t読む\t他動1\n11\t机\t名\n".as_bytes())
        .unwrap();

    let source = VocabularyFile::open(file.path()).unwrap();
    let entries = source.load_entries(&EntryFilter::candidates()).unwrap();
    assert_eq!(entries.len(), 1);

    let mut store = SqliteStore::memory().unwrap();
    let report = Generator::new().generate(&mut store, entries).unwrap();
    assert_eq!(report.processed, 1);
    assert!(store
        .forms_for(10)
        .unwrap()
        .contains(&("volitional".to_string(), "読もう".to_string())));
}

// =============================================================================
// Failure isolation
// =============================================================================

#[test]
fn test_persistence_failure_is_per_entry() {
    let mut store = FaultyStore::rejecting(&[2, 5]);
    let report = Generator::new().generate(&mut store, vocabulary()).unwrap();

    assert_eq!(report.processed, 5);
    assert_eq!(report.failed.len(), 2);
    assert!(report
        .failed
        .iter()
        .all(|f| f.kind == FailureKind::Persistence));
    assert_eq!(report.retry_ids(), vec![2, 5]);
    assert_eq!(store.inner.form(1, "plain_past"), Some("書いた"));
    assert_eq!(store.inner.form(2, "plain_past"), None);
    assert_eq!(store.inner.form(6, "plain_past"), Some("綺麗だった"));
}

#[test]
fn test_failed_batch_fails_its_entries_only() {
    let mut store = FaultyStore::rejecting(&[]);
    store.fail_whole_batch = true;
    let config = GeneratorConfig {
        batch_size: 3,
        ..GeneratorConfig::default()
    };
    let report = Generator::with_config(config)
        .generate(&mut store, vocabulary())
        .unwrap();

    // 本 is queued to clear its rows, so it fails with the batch too.
    assert_eq!(report.processed, 0);
    assert_eq!(report.skipped, 0);
    assert_eq!(report.failed.len(), 8);
    assert_eq!(report.retry_ids().len(), 8);
}

#[test]
fn test_malformed_entry_does_not_stop_run() {
    let mut entries = vocabulary();
    entries.insert(0, LexicalEntry::new(0, "静か", "イ形"));

    let mut store = MemoryStore::new();
    let report = Generator::new().generate(&mut store, entries).unwrap();

    assert_eq!(report.processed, 7);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].kind, FailureKind::MalformedInput);
    assert_eq!(report.failed[0].class, ConjugationClass::IAdjective);
    assert!(report.retry_ids().is_empty());
}

#[test]
fn test_incomplete_catalog_aborts_before_writing() {
    let mut store = ForgetfulStore(MemoryStore::new());
    let result = Generator::new().generate(&mut store, vocabulary());

    match result {
        Err(KatsuyoError::CatalogIncomplete { missing }) => assert_eq!(missing.len(), 16),
        other => panic!("expected catalog failure, got {:?}", other.map(|r| r.processed)),
    }
    assert_eq!(store.0.form_count(), 0);
}

#[test]
fn test_catalog_is_stable_across_calls() {
    let mut store = MemoryStore::new();
    let first = ensure_categories(&mut store).unwrap();
    let second = ensure_categories(&mut store).unwrap();
    assert_eq!(store.categories().len(), 17);
    for category in katsuyo::GrammaticalCategory::ALL {
        assert_eq!(first.get(category), second.get(category));
    }
}

// =============================================================================
// Cancellation
// =============================================================================

#[test]
fn test_cancel_mid_run_keeps_queued_entries() {
    let cancel = Arc::new(AtomicBool::new(false));
    let trigger = Arc::clone(&cancel);
    let entries = vocabulary().into_iter().inspect(move |e| {
        if e.id == 3 {
            trigger.store(true, Ordering::SeqCst);
        }
    });

    let mut store = MemoryStore::new();
    let report = Generator::new()
        .with_cancel(cancel)
        .generate(&mut store, entries)
        .unwrap();

    assert!(report.cancelled);
    assert_eq!(report.processed, 2);
    assert_eq!(store.form_count(), 34);
    assert_eq!(store.form(2, "passive"), Some("食べられる"));
    assert_eq!(store.form(3, "potential"), None);
}
