//! Fuzz target for the vocabulary file reader.
//!
//! Malformed CSV/TSV must produce an error, never a panic.

#![no_main]

use katsuyo::{EntryFilter, VocabularyFile, VocabularySource};
use libfuzzer_sys::fuzz_target;
use std::io::Write;

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    if let Ok(mut temp_file) = tempfile::NamedTempFile::new() {
        if temp_file.write_all(data).is_ok() {
            if let Ok(file) = VocabularyFile::open(temp_file.path()) {
                let _ = file.load_entries(&EntryFilter::candidates());
            }
        }
    }
});
