//! SqliteStore: the vocabulary database as entry source and form sink.
//!
//! Tables:
//! - `words`: owned by the vocabulary system; only read here.
//! - `conjugation_types`: the category catalog, unique by `code`.
//! - `word_conjugations`: one row per (word, category). Writing an entry
//!   replaces all of its rows.

use std::path::Path;
use std::time::Duration;

use rusqlite::{params, params_from_iter, Connection, OpenFlags, Transaction};
use tracing::debug;

use crate::catalog::CategoryRecord;
use crate::entry::LexicalEntry;
use crate::error::{KatsuyoError, Result};

use super::{EntryFilter, EntryRows, FormStore, VocabularySource};

/// Tables this crate reads and writes. `words` is created only so that a
/// fresh database can be filled from a vocabulary file.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS words (
    id INTEGER PRIMARY KEY,
    word TEXT NOT NULL,
    part_of_speech TEXT
);

CREATE TABLE IF NOT EXISTS conjugation_types (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    code TEXT NOT NULL UNIQUE,
    name_ja TEXT NOT NULL,
    name_cn TEXT NOT NULL,
    sort_order INTEGER NOT NULL,
    description TEXT
);

CREATE TABLE IF NOT EXISTS word_conjugations (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    word_id INTEGER NOT NULL,
    type_id INTEGER NOT NULL REFERENCES conjugation_types(id),
    conjugated_word TEXT NOT NULL,
    UNIQUE(word_id, type_id)
);

CREATE INDEX IF NOT EXISTS idx_word_conjugations_word ON word_conjugations(word_id);
"#;

const INSERT_CATEGORY: &str = r#"
    INSERT INTO conjugation_types (code, name_ja, name_cn, sort_order, description)
    VALUES (?1, ?2, ?3, ?4, ?5)
    ON CONFLICT(code) DO NOTHING
"#;

const UPSERT_FORM: &str = r#"
    INSERT INTO word_conjugations (word_id, type_id, conjugated_word)
    VALUES (?1, ?2, ?3)
    ON CONFLICT(word_id, type_id) DO UPDATE SET conjugated_word = excluded.conjugated_word
"#;

const CLEAR_FORMS: &str = "DELETE FROM word_conjugations WHERE word_id = ?1";

/// SQLite-backed vocabulary and form store.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open a file-backed store, creating missing tables.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path.as_ref())?;
        Self::from_connection(conn)
    }

    /// Open an existing database without creating tables or changing the
    /// journal mode. Every write through this store fails.
    pub fn open_read_only(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open_with_flags(
            path.as_ref(),
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        let _ = conn.busy_timeout(Duration::from_secs(5));
        Ok(Self { conn })
    }

    /// Create an in-memory store (for testing).
    pub fn memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::from_connection(conn)
    }

    /// Wrap an existing connection.
    pub fn from_connection(conn: Connection) -> Result<Self> {
        Self::init_connection(&conn)?;
        Ok(Self { conn })
    }

    fn init_connection(conn: &Connection) -> Result<()> {
        conn.execute("PRAGMA foreign_keys = ON", [])?;
        // WAL mode for file-backed DBs (no-op for in-memory)
        let _ = conn.query_row("PRAGMA journal_mode = WAL", [], |_| Ok(()));
        let _ = conn.busy_timeout(Duration::from_secs(5));
        conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    /// Underlying connection, for callers that need ad-hoc queries.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Insert or replace vocabulary rows.
    pub fn insert_entries(&mut self, entries: &[LexicalEntry]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT OR REPLACE INTO words (id, word, part_of_speech) VALUES (?1, ?2, ?3)",
            )?;
            for entry in entries {
                stmt.execute(params![entry.id, entry.word, entry.part_of_speech])?;
            }
        }
        tx.commit()?;
        Ok(entries.len())
    }

    /// Stored forms of one entry as (code, text), in catalog order.
    pub fn forms_for(&self, entry_id: i64) -> Result<Vec<(String, String)>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT t.code, c.conjugated_word
            FROM word_conjugations c
            JOIN conjugation_types t ON t.id = c.type_id
            WHERE c.word_id = ?1
            ORDER BY t.sort_order
            "#,
        )?;
        let rows = stmt.query_map([entry_id], |row| Ok((row.get(0)?, row.get(1)?)))?;
        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    /// Number of stored forms per category code, in catalog order.
    pub fn form_counts(&self) -> Result<Vec<(String, usize)>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT t.code, COUNT(c.id)
            FROM conjugation_types t
            LEFT JOIN word_conjugations c ON c.type_id = t.id
            GROUP BY t.id
            ORDER BY t.sort_order
            "#,
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)? as usize))
        })?;
        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    /// Total rows in the form table.
    pub fn total_forms(&self) -> Result<usize> {
        let count: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM word_conjugations", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Whether `name` exists in the database.
    pub fn table_exists(&self, name: &str) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
            [name],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Rows in the vocabulary table.
    pub fn entry_count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM words", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Number of distinct entries with at least one stored form.
    pub fn conjugated_entries(&self) -> Result<usize> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(DISTINCT word_id) FROM word_conjugations",
            [],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }
}

/// Replace one entry's rows under a savepoint so a failure leaves the rest
/// of the batch intact. Rows for categories no longer in the paradigm are
/// removed; an empty `rows` clears the entry.
fn write_entry(tx: &mut Transaction<'_>, entry: &EntryRows) -> Result<usize> {
    let sp = tx.savepoint()?;
    {
        sp.prepare_cached(CLEAR_FORMS)?.execute([entry.entry_id])?;
        let mut stmt = sp.prepare_cached(UPSERT_FORM)?;
        for row in &entry.rows {
            stmt.execute(params![entry.entry_id, row.category_id, row.surface_text])?;
        }
    }
    sp.commit()?;
    Ok(entry.rows.len())
}

impl FormStore for SqliteStore {
    fn insert_category_if_absent(&mut self, record: &CategoryRecord) -> Result<()> {
        self.conn.execute(
            INSERT_CATEGORY,
            params![
                record.code,
                record.label_primary,
                record.label_secondary,
                record.sort_rank,
                record.description,
            ],
        )?;
        Ok(())
    }

    fn category_ids(&self) -> Result<Vec<(String, i64)>> {
        let mut stmt = self
            .conn
            .prepare("SELECT code, id FROM conjugation_types ORDER BY sort_order")?;
        let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn write_batch(&mut self, batch: &[EntryRows]) -> Result<Vec<Result<usize>>> {
        let mut tx = self.conn.transaction()?;
        let mut results = Vec::with_capacity(batch.len());
        for entry in batch {
            let result = write_entry(&mut tx, entry).map_err(|e| {
                KatsuyoError::Persistence(format!("entry {}: {}", entry.entry_id, e))
            });
            results.push(result);
        }
        tx.commit()
            .map_err(|e| KatsuyoError::Persistence(format!("batch commit failed: {}", e)))?;
        debug!(entries = batch.len(), "batch committed");
        Ok(results)
    }
}

impl VocabularySource for SqliteStore {
    fn load_entries(&self, filter: &EntryFilter) -> Result<Vec<LexicalEntry>> {
        let mut sql =
            String::from("SELECT id, word, COALESCE(part_of_speech, '') FROM words WHERE 1 = 1");
        if filter.candidates_only {
            sql.push_str(
                " AND (part_of_speech LIKE '%动%' OR part_of_speech LIKE '%動%' OR part_of_speech LIKE '%形%')",
            );
        }
        let ids = filter.ids.clone().unwrap_or_default();
        if filter.ids.is_some() {
            if ids.is_empty() {
                return Ok(Vec::new());
            }
            let placeholders = vec!["?"; ids.len()].join(", ");
            sql.push_str(&format!(" AND id IN ({})", placeholders));
        }
        sql.push_str(" ORDER BY id");
        if let Some(limit) = filter.limit {
            sql.push_str(&format!(" LIMIT {}", limit));
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(ids.iter()), |row| {
            Ok(LexicalEntry {
                id: row.get(0)?,
                word: row.get(1)?,
                part_of_speech: row.get(2)?,
            })
        })?;
        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }
}
