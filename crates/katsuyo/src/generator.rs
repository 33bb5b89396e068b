//! Batch generation: classify, conjugate and persist a vocabulary.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::catalog::{ensure_categories, CategoryIds};
use crate::classify::{classify, ConjugationClass};
use crate::conjugate::{conjugate, Paradigm};
use crate::entry::LexicalEntry;
use crate::error::{KatsuyoError, Result};
use crate::store::{EntryRows, FormRow, FormStore};

/// Configuration for a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Entries written per store transaction.
    pub batch_size: usize,
    /// Log progress every this many entries (0 disables).
    pub progress_interval: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            batch_size: 500,
            progress_interval: 100,
        }
    }
}

impl GeneratorConfig {
    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| KatsuyoError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(KatsuyoError::Config(
                "batch_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Why an entry failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The word cannot be stemmed as its class requires. Retrying won't help.
    MalformedInput,
    /// The store rejected the entry's rows.
    Persistence,
}

/// A single entry that produced no stored forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryFailure {
    pub entry_id: i64,
    pub word: String,
    pub class: ConjugationClass,
    pub kind: FailureKind,
    pub message: String,
}

/// Outcome of a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    /// Entries whose full paradigm was generated (and written, unless dry run).
    pub processed: usize,
    /// NotConjugable entries.
    pub skipped: usize,
    pub failed: Vec<EntryFailure>,
    /// Form rows written (or that would be written, in a dry run).
    pub forms_written: usize,
    /// Processed entries per class.
    pub by_class: BTreeMap<ConjugationClass, usize>,
    /// True if the run stopped early on request.
    pub cancelled: bool,
    pub dry_run: bool,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl GenerationReport {
    fn start(dry_run: bool) -> Self {
        let now = Utc::now();
        Self {
            processed: 0,
            skipped: 0,
            failed: Vec::new(),
            forms_written: 0,
            by_class: BTreeMap::new(),
            cancelled: false,
            dry_run,
            started_at: now,
            finished_at: now,
        }
    }

    /// Entries examined: processed + skipped + failed.
    pub fn examined(&self) -> usize {
        self.processed + self.skipped + self.failed.len()
    }

    /// Ids of entries that failed to persist and can be retried as-is.
    pub fn retry_ids(&self) -> Vec<i64> {
        self.failed
            .iter()
            .filter(|f| f.kind == FailureKind::Persistence)
            .map(|f| f.entry_id)
            .collect()
    }

    pub fn failures_of(&self, kind: FailureKind) -> impl Iterator<Item = &EntryFailure> {
        self.failed.iter().filter(move |f| f.kind == kind)
    }

    pub fn is_clean(&self) -> bool {
        self.failed.is_empty() && !self.cancelled
    }

    pub fn duration_ms(&self) -> i64 {
        (self.finished_at - self.started_at).num_milliseconds()
    }

    fn record_success(&mut self, class: ConjugationClass, forms: usize) {
        self.processed += 1;
        self.forms_written += forms;
        *self.by_class.entry(class).or_insert(0) += 1;
    }

    fn record_failure(&mut self, failure: EntryFailure) {
        warn!(
            entry_id = failure.entry_id,
            word = %failure.word,
            kind = ?failure.kind,
            "Entry failed: {}",
            failure.message
        );
        self.failed.push(failure);
    }
}

/// An entry that conjugated cleanly and waits for its batch.
struct Pending {
    entry: LexicalEntry,
    class: ConjugationClass,
    rows: EntryRows,
}

enum Prepared {
    Skipped(LexicalEntry),
    Failed(EntryFailure),
    Ready(LexicalEntry, ConjugationClass, Paradigm),
}

/// Drives classification, conjugation and batched persistence.
pub struct Generator {
    config: GeneratorConfig,
    cancel: Arc<AtomicBool>,
}

impl Generator {
    pub fn new() -> Self {
        Self::with_config(GeneratorConfig::default())
    }

    pub fn with_config(config: GeneratorConfig) -> Self {
        Self {
            config,
            cancel: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Share a cancellation flag. Once set, no further entries are started;
    /// entries already queued are still written.
    pub fn with_cancel(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// The flag checked between entries.
    pub fn cancel_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancel)
    }

    /// Initialize the category catalog, then run.
    ///
    /// A catalog failure aborts before any entry is touched; everything
    /// after that is reported per entry.
    pub fn generate<S, I>(&self, store: &mut S, entries: I) -> Result<GenerationReport>
    where
        S: FormStore + ?Sized,
        I: IntoIterator<Item = LexicalEntry>,
    {
        let ids = ensure_categories(store)?;
        Ok(self.run(store, &ids, entries))
    }

    /// Generate and write forms for `entries`.
    pub fn run<S, I>(&self, store: &mut S, ids: &CategoryIds, entries: I) -> GenerationReport
    where
        S: FormStore + ?Sized,
        I: IntoIterator<Item = LexicalEntry>,
    {
        let batch_size = self.config.batch_size.max(1);
        let mut report = GenerationReport::start(false);
        let mut pending: Vec<Pending> = Vec::with_capacity(batch_size);

        info!(batch_size, "Starting generation");

        for entry in entries {
            if self.cancel.load(Ordering::SeqCst) {
                info!("Cancellation requested, stopping after queued entries");
                report.cancelled = true;
                break;
            }

            match prepare(entry) {
                // Queued with no rows so forms from an earlier run are cleared.
                Prepared::Skipped(entry) => pending.push(Pending {
                    rows: EntryRows {
                        entry_id: entry.id,
                        rows: Vec::new(),
                    },
                    entry,
                    class: ConjugationClass::NotConjugable,
                }),
                Prepared::Failed(failure) => report.record_failure(failure),
                Prepared::Ready(entry, class, paradigm) => match resolve_rows(&entry, &paradigm, ids) {
                    Ok(rows) => pending.push(Pending { entry, class, rows }),
                    Err(e) => report.record_failure(EntryFailure {
                        entry_id: entry.id,
                        word: entry.word,
                        class,
                        kind: FailureKind::Persistence,
                        message: e.to_string(),
                    }),
                },
            }

            if pending.len() >= batch_size {
                flush(store, &mut pending, &mut report);
            }
            self.log_progress(&report);
        }

        flush(store, &mut pending, &mut report);
        finish(report)
    }

    /// Classify and conjugate without writing anything.
    pub fn preview<I>(&self, entries: I) -> GenerationReport
    where
        I: IntoIterator<Item = LexicalEntry>,
    {
        let mut report = GenerationReport::start(true);

        for entry in entries {
            if self.cancel.load(Ordering::SeqCst) {
                report.cancelled = true;
                break;
            }
            match prepare(entry) {
                Prepared::Skipped(_) => report.skipped += 1,
                Prepared::Failed(failure) => report.record_failure(failure),
                Prepared::Ready(_, class, paradigm) => report.record_success(class, paradigm.len()),
            }
            self.log_progress(&report);
        }

        finish(report)
    }

    fn log_progress(&self, report: &GenerationReport) {
        let interval = self.config.progress_interval;
        let examined = report.examined();
        if interval > 0 && examined > 0 && examined % interval == 0 {
            info!(
                examined,
                processed = report.processed,
                skipped = report.skipped,
                failed = report.failed.len(),
                "Progress"
            );
        }
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

fn prepare(entry: LexicalEntry) -> Prepared {
    let class = classify(&entry.word, &entry.part_of_speech);
    debug!(entry_id = entry.id, word = %entry.word, %class, "Classified");

    if class == ConjugationClass::NotConjugable {
        return Prepared::Skipped(entry);
    }

    match conjugate(&entry.word, class) {
        Ok(paradigm) => Prepared::Ready(entry, class, paradigm),
        Err(e) => Prepared::Failed(EntryFailure {
            entry_id: entry.id,
            word: entry.word,
            class,
            kind: FailureKind::MalformedInput,
            message: e.to_string(),
        }),
    }
}

fn resolve_rows(entry: &LexicalEntry, paradigm: &Paradigm, ids: &CategoryIds) -> Result<EntryRows> {
    let rows = paradigm
        .iter()
        .map(|(category, text)| {
            let category_id = ids
                .get(category)
                .ok_or_else(|| KatsuyoError::UnknownCategory(category.code().to_string()))?;
            Ok(FormRow {
                category_id,
                surface_text: text.to_string(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(EntryRows {
        entry_id: entry.id,
        rows,
    })
}

fn flush<S: FormStore + ?Sized>(store: &mut S, pending: &mut Vec<Pending>, report: &mut GenerationReport) {
    if pending.is_empty() {
        return;
    }

    let batch: Vec<Pending> = std::mem::take(pending);
    let rows: Vec<EntryRows> = batch.iter().map(|p| p.rows.clone()).collect();
    debug!(entries = batch.len(), "Writing batch");

    match store.write_batch(&rows) {
        Ok(results) => {
            let mut results = results.into_iter();
            for item in batch {
                match results.next() {
                    Some(Ok(_)) if item.class == ConjugationClass::NotConjugable => {
                        report.skipped += 1
                    }
                    Some(Ok(written)) => report.record_success(item.class, written),
                    Some(Err(e)) => report.record_failure(persistence_failure(item, e.to_string())),
                    None => report.record_failure(persistence_failure(
                        item,
                        "store returned no result for entry".to_string(),
                    )),
                }
            }
        }
        Err(e) => {
            let message = e.to_string();
            for item in batch {
                report.record_failure(persistence_failure(item, message.clone()));
            }
        }
    }
}

fn persistence_failure(item: Pending, message: String) -> EntryFailure {
    EntryFailure {
        entry_id: item.entry.id,
        word: item.entry.word,
        class: item.class,
        kind: FailureKind::Persistence,
        message,
    }
}

fn finish(mut report: GenerationReport) -> GenerationReport {
    report.finished_at = Utc::now();
    info!(
        processed = report.processed,
        skipped = report.skipped,
        failed = report.failed.len(),
        forms = report.forms_written,
        cancelled = report.cancelled,
        dry_run = report.dry_run,
        "Generation finished"
    );
    report
}
