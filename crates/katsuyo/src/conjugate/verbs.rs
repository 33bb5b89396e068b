//! Ichidan, suru and kuru conjugation from literal tables.

use crate::classify::ConjugationClass;
use crate::error::{KatsuyoError, Result};
use crate::rules::{ICHIDAN_SUFFIXES, KURU_KANA, KURU_KANJI, SURU_SUFFIXES};

use super::Paradigm;

/// Stem is the dictionary form minus る.
pub(super) fn ichidan(word: &str) -> Result<Paradigm> {
    const CLASS: ConjugationClass = ConjugationClass::IchidanVerb;

    let stem = word.strip_suffix('る').ok_or_else(|| {
        if word.is_empty() {
            KatsuyoError::malformed(word, CLASS, "empty dictionary form")
        } else {
            KatsuyoError::malformed(word, CLASS, "does not end in る")
        }
    })?;
    if stem.is_empty() {
        return Err(KatsuyoError::malformed(word, CLASS, "no stem before る"));
    }

    Ok(Paradigm::from_table(stem, &ICHIDAN_SUFFIXES))
}

/// A word without する is a bare noun stem and is used as the prefix whole.
pub(super) fn suru(word: &str) -> Result<Paradigm> {
    if word.is_empty() {
        return Err(KatsuyoError::malformed(
            word,
            ConjugationClass::SuruVerb,
            "empty dictionary form",
        ));
    }

    let prefix = word.strip_suffix("する").unwrap_or(word);
    Ok(Paradigm::from_table(prefix, &SURU_SUFFIXES))
}

/// The kanji or kana table is picked by whether 来 appears in the word.
/// A te-form head (持って来る, やってくる) is kept in front of every form;
/// any other prefix is dropped and the bare table is used.
pub(super) fn kuru(word: &str) -> Result<Paradigm> {
    if word.is_empty() {
        return Err(KatsuyoError::malformed(
            word,
            ConjugationClass::KuruVerb,
            "empty dictionary form",
        ));
    }

    let head = word
        .strip_suffix("来る")
        .or_else(|| word.strip_suffix("くる"))
        .filter(|head| head.ends_with('て') || head.ends_with('で'))
        .unwrap_or("");

    let table = if word.contains('来') {
        &KURU_KANJI
    } else {
        &KURU_KANA
    };
    Ok(Paradigm::from_table(head, table))
}
