//! Phonological rule tables: vowel rows, euphonic changes, suffix sets.

mod euphonic;
mod rows;
mod tables;

pub use euphonic::{euphonic_for, euphonic_for_word, is_iku, Euphonic};
pub use rows::{godan_endings, is_godan_ending, shift, VowelRow};
pub use tables::{
    FormTable, GodanBase, GODAN_PATTERN, I_ADJECTIVE_SUFFIXES, ICHIDAN_SUFFIXES, II_PARADIGM,
    KURU_KANA, KURU_KANJI, NA_ADJECTIVE_SUFFIXES, SURU_SUFFIXES,
};
