//! CSV/TSV vocabulary exports as an entry source.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::entry::LexicalEntry;
use crate::error::{KatsuyoError, Result};

use super::{EntryFilter, VocabularySource};

/// Delimiters tried against the header line, in order.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

/// Accepted header names per column.
const ID_HEADERS: &[&str] = &["id", "word_id"];
const WORD_HEADERS: &[&str] = &["word", "dictionary_form"];
const POS_HEADERS: &[&str] = &["part_of_speech", "pos"];

/// A vocabulary file loaded into memory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabularyFile {
    /// Path the file was read from.
    pub path: PathBuf,
    /// SHA-256 of the file contents (`sha256:<hex>`).
    pub hash: String,
    /// Delimiter-derived format ("tsv", "csv", ...).
    pub format: String,
    entries: Vec<LexicalEntry>,
}

impl VocabularyFile {
    /// Read and parse a vocabulary file, taking the delimiter from the
    /// header line.
    ///
    /// The header row must name an id, a word and a part-of-speech column;
    /// other columns are ignored.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with_delimiter(path, None)
    }

    /// Like [`VocabularyFile::open`], but with a fixed delimiter when one is
    /// given.
    pub fn open_with_delimiter(path: impl AsRef<Path>, delimiter: Option<u8>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read(path).map_err(|e| KatsuyoError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let layout = Layout::sniff(&contents, delimiter)?;
        let entries = parse_entries(&contents, &layout)?;

        let format = match layout.delimiter {
            b'\t' => "tsv",
            b',' => "csv",
            b';' => "csv-semicolon",
            b'|' => "psv",
            _ => "delimited",
        }
        .to_string();

        Ok(Self {
            path: path.to_path_buf(),
            hash,
            format,
            entries,
        })
    }

    pub fn entries(&self) -> &[LexicalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl VocabularySource for VocabularyFile {
    fn load_entries(&self, filter: &EntryFilter) -> Result<Vec<LexicalEntry>> {
        Ok(filter.apply(self.entries.iter().cloned()))
    }
}

/// Delimiter and column positions read off the header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    delimiter: u8,
    id: usize,
    word: usize,
    pos: usize,
}

impl Layout {
    /// The first delimiter whose split of the header names all three
    /// columns wins. Data rows are never inspected.
    fn sniff(bytes: &[u8], forced: Option<u8>) -> Result<Self> {
        let text = String::from_utf8_lossy(bytes);
        let header = text
            .lines()
            .map(|line| line.trim_start_matches('\u{feff}').trim())
            .find(|line| !line.is_empty())
            .ok_or_else(|| KatsuyoError::EmptyData("No header line".to_string()))?;

        let candidates = match forced {
            Some(delimiter) => vec![delimiter],
            None => DELIMITERS.to_vec(),
        };

        candidates
            .into_iter()
            .find_map(|delimiter| Self::from_header(header, delimiter))
            .ok_or_else(|| KatsuyoError::Parse {
                row: 1,
                message: "header must name id, word and part_of_speech columns".to_string(),
            })
    }

    fn from_header(header: &str, delimiter: u8) -> Option<Self> {
        let fields: Vec<&str> = header
            .split(delimiter as char)
            .map(|f| f.trim().trim_matches('"').trim())
            .collect();
        let find = |names: &[&str]| {
            fields
                .iter()
                .position(|f| names.iter().any(|n| f.eq_ignore_ascii_case(n)))
        };

        Some(Self {
            delimiter,
            id: find(ID_HEADERS)?,
            word: find(WORD_HEADERS)?,
            pos: find(POS_HEADERS)?,
        })
    }
}

fn parse_entries(bytes: &[u8], layout: &Layout) -> Result<Vec<LexicalEntry>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(layout.delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let mut entries = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result?;
        // Header is row 1.
        let row = idx + 2;

        let raw_id = record.get(layout.id).unwrap_or("").trim();
        if raw_id.is_empty() && record.iter().all(|f| f.trim().is_empty()) {
            continue;
        }
        let id: i64 = raw_id.parse().map_err(|_| KatsuyoError::Parse {
            row,
            message: format!("invalid id '{}'", raw_id),
        })?;

        entries.push(LexicalEntry {
            id,
            word: record.get(layout.word).unwrap_or("").trim().to_string(),
            part_of_speech: record.get(layout.pos).unwrap_or("").trim().to_string(),
        });
    }

    if entries.is_empty() {
        return Err(KatsuyoError::EmptyData("No entries found".to_string()));
    }

    Ok(entries)
}
