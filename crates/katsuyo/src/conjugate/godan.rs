//! Godan (u-verb) conjugation by vowel-row shift.

use crate::classify::ConjugationClass;
use crate::error::{KatsuyoError, Result};
use crate::rules::{self, GodanBase, GODAN_PATTERN};

use super::Paradigm;

const CLASS: ConjugationClass = ConjugationClass::GodanVerb;

pub(super) fn conjugate(word: &str) -> Result<Paradigm> {
    let ending = word
        .chars()
        .last()
        .ok_or_else(|| KatsuyoError::malformed(word, CLASS, "empty dictionary form"))?;

    if !rules::is_godan_ending(ending) {
        return Err(KatsuyoError::malformed(
            word,
            CLASS,
            format!("ends in '{}', not one of う く ぐ す つ ぬ ぶ む る", ending),
        ));
    }

    let stem = &word[..word.len() - ending.len_utf8()];
    if stem.is_empty() {
        return Err(KatsuyoError::malformed(word, CLASS, "no stem before the ending"));
    }

    let euphonic = rules::euphonic_for_word(word)
        .ok_or_else(|| KatsuyoError::malformed(word, CLASS, "no te/ta suffix for ending"))?;

    let mut paradigm = Paradigm::new();
    for &(category, base, suffix) in &GODAN_PATTERN {
        let mut form = String::with_capacity(word.len() + suffix.len() + 6);
        match base {
            GodanBase::Row(row) => {
                let shifted = rules::shift(ending, row).ok_or_else(|| {
                    KatsuyoError::malformed(word, CLASS, format!("no {:?}-row form", row))
                })?;
                form.push_str(stem);
                form.push(shifted);
            }
            GodanBase::Dictionary => form.push_str(word),
            GodanBase::Te => {
                form.push_str(stem);
                form.push_str(euphonic.te);
            }
            GodanBase::Ta => {
                form.push_str(stem);
                form.push_str(euphonic.ta);
            }
        }
        form.push_str(suffix);
        paradigm.insert(category, form);
    }

    Ok(paradigm)
}
