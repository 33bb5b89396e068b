//! Katsuyo: Japanese conjugation generation for vocabulary databases.
//!
//! Katsuyo takes dictionary-form entries tagged with a part-of-speech label,
//! decides how each one inflects, and produces its full paradigm: up to 17
//! grammatical forms per verb and 11 per adjective.
//!
//! # Pipeline
//!
//! - **Classify**: map the tag to a [`ConjugationClass`] by ordered rules.
//! - **Conjugate**: build a [`Paradigm`] from the rule tables.
//! - **Generate**: persist every form, batched, idempotently, through a
//!   [`FormStore`], after the category catalog has been committed.
//!
//! # Example
//!
//! ```
//! use katsuyo::{conjugate_tagged, ConjugationClass, GrammaticalCategory};
//!
//! let c = conjugate_tagged("勉強する", "名・他動3").unwrap();
//! assert_eq!(c.class, ConjugationClass::SuruVerb);
//! assert_eq!(c.forms.get(GrammaticalCategory::Potential), Some("勉強できる"));
//! ```

pub mod catalog;
pub mod classify;
pub mod conjugate;
pub mod entry;
pub mod error;
pub mod rules;
pub mod store;

mod generator;

pub use catalog::{catalog, ensure_categories, CategoryIds, CategoryRecord, GrammaticalCategory};
pub use classify::{classify, explain, ConjugationClass};
pub use conjugate::{conjugate, conjugate_entry, conjugate_tagged, Conjugation, Paradigm};
pub use entry::{ConjugatedForm, LexicalEntry};
pub use error::{KatsuyoError, Result};
pub use generator::{
    EntryFailure, FailureKind, GenerationReport, Generator, GeneratorConfig,
};
pub use store::{
    EntryFilter, EntryRows, FormRow, FormStore, MemoryStore, SqliteStore, VocabularyFile,
    VocabularySource,
};
