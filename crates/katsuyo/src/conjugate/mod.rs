//! Paradigm generation for each conjugation class.
//!
//! [`conjugate`] dispatches to one generator per class. Every generator is a
//! pure function of the word: the same input always yields the same
//! paradigm, which is what makes regenerating stored forms safe.
//!
//! ```
//! use katsuyo::{conjugate, ConjugationClass, GrammaticalCategory};
//!
//! let paradigm = conjugate("行く", ConjugationClass::GodanVerb).unwrap();
//! assert_eq!(paradigm.get(GrammaticalCategory::TeForm), Some("行って"));
//! ```

mod adjectives;
mod godan;
mod paradigm;
mod verbs;

use serde::{Deserialize, Serialize};

use crate::classify::{classify, ConjugationClass};
use crate::entry::LexicalEntry;
use crate::error::Result;

pub use paradigm::Paradigm;

/// Generate the paradigm of `word` as a member of `class`.
///
/// `NotConjugable` yields an empty paradigm. A word that cannot be stemmed
/// the way its class requires yields [`KatsuyoError::MalformedInput`].
///
/// [`KatsuyoError::MalformedInput`]: crate::KatsuyoError::MalformedInput
pub fn conjugate(word: &str, class: ConjugationClass) -> Result<Paradigm> {
    match class {
        ConjugationClass::GodanVerb => godan::conjugate(word),
        ConjugationClass::IchidanVerb => verbs::ichidan(word),
        ConjugationClass::SuruVerb => verbs::suru(word),
        ConjugationClass::KuruVerb => verbs::kuru(word),
        ConjugationClass::IAdjective => adjectives::i_adjective(word),
        ConjugationClass::NaAdjective => adjectives::na_adjective(word),
        ConjugationClass::NotConjugable => Ok(Paradigm::new()),
    }
}

/// Class and paradigm derived for one word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conjugation {
    pub word: String,
    pub class: ConjugationClass,
    pub forms: Paradigm,
}

/// Classify and conjugate a word from its part-of-speech tag.
pub fn conjugate_tagged(word: &str, part_of_speech: &str) -> Result<Conjugation> {
    let class = classify(word, part_of_speech);
    let forms = conjugate(word, class)?;
    Ok(Conjugation {
        word: word.to_string(),
        class,
        forms,
    })
}

/// Classify and conjugate a vocabulary entry.
pub fn conjugate_entry(entry: &LexicalEntry) -> Result<Conjugation> {
    conjugate_tagged(&entry.word, &entry.part_of_speech)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::GrammaticalCategory;

    #[test]
    fn test_not_conjugable_is_empty() {
        let p = conjugate("本", ConjugationClass::NotConjugable).unwrap();
        assert!(p.is_empty());
        let p = conjugate("", ConjugationClass::NotConjugable).unwrap();
        assert!(p.is_empty());
    }

    #[test]
    fn test_sizes_match_class() {
        let samples = [
            ("書く", ConjugationClass::GodanVerb),
            ("食べる", ConjugationClass::IchidanVerb),
            ("勉強する", ConjugationClass::SuruVerb),
            ("来る", ConjugationClass::KuruVerb),
            ("高い", ConjugationClass::IAdjective),
            ("いい", ConjugationClass::IAdjective),
            ("綺麗", ConjugationClass::NaAdjective),
        ];
        for (word, class) in samples {
            let p = conjugate(word, class).unwrap();
            assert_eq!(p.len(), class.paradigm_size(), "{} as {}", word, class);
            if class.is_adjective() {
                assert!(p.categories().all(|c| !c.is_verb_only()));
            }
        }
    }

    #[test]
    fn test_forms_in_catalog_order() {
        let p = conjugate("読む", ConjugationClass::GodanVerb).unwrap();
        let order: Vec<GrammaticalCategory> = p.categories().collect();
        let mut sorted = order.clone();
        sorted.sort();
        assert_eq!(order, sorted);
    }

    #[test]
    fn test_conjugate_tagged() {
        let c = conjugate_tagged("食べる", "他动2").unwrap();
        assert_eq!(c.class, ConjugationClass::IchidanVerb);
        assert_eq!(c.forms.get(GrammaticalCategory::PlainNegative), Some("食べない"));

        let c = conjugate_tagged("本", "名").unwrap();
        assert_eq!(c.class, ConjugationClass::NotConjugable);
        assert!(c.forms.is_empty());
    }

    #[test]
    fn test_deterministic() {
        let a = conjugate_tagged("泳ぐ", "自動1").unwrap();
        let b = conjugate_tagged("泳ぐ", "自動1").unwrap();
        assert_eq!(a, b);
    }
}
