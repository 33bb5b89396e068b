//! Conjugation class inference from a word and its part-of-speech tag.
//!
//! The tag comes from an external vocabulary system and is loosely
//! structured, so it is treated as opaque text and only probed for marker
//! substrings. Rules are evaluated in order and the first match wins; a tag
//! with no recognized marker yields [`ConjugationClass::NotConjugable`].
//!
//! ```
//! use katsuyo::{classify, ConjugationClass};
//!
//! assert_eq!(classify("書く", "自動1"), ConjugationClass::GodanVerb);
//! assert_eq!(classify("勉強", "名・サ変"), ConjugationClass::SuruVerb);
//! assert_eq!(classify("本", "名"), ConjugationClass::NotConjugable);
//! ```

mod rules;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use rules::{ClassRule, RULES, TagSignal};

/// Inflection class selecting which rule table applies to a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConjugationClass {
    GodanVerb,
    IchidanVerb,
    SuruVerb,
    KuruVerb,
    IAdjective,
    NaAdjective,
    NotConjugable,
}

impl ConjugationClass {
    /// All classes, conjugable ones first.
    pub const ALL: [ConjugationClass; 7] = [
        ConjugationClass::GodanVerb,
        ConjugationClass::IchidanVerb,
        ConjugationClass::SuruVerb,
        ConjugationClass::KuruVerb,
        ConjugationClass::IAdjective,
        ConjugationClass::NaAdjective,
        ConjugationClass::NotConjugable,
    ];

    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ConjugationClass::GodanVerb => "godan verb",
            ConjugationClass::IchidanVerb => "ichidan verb",
            ConjugationClass::SuruVerb => "suru verb",
            ConjugationClass::KuruVerb => "kuru verb",
            ConjugationClass::IAdjective => "i-adjective",
            ConjugationClass::NaAdjective => "na-adjective",
            ConjugationClass::NotConjugable => "not conjugable",
        }
    }

    pub fn is_verb(&self) -> bool {
        matches!(
            self,
            ConjugationClass::GodanVerb
                | ConjugationClass::IchidanVerb
                | ConjugationClass::SuruVerb
                | ConjugationClass::KuruVerb
        )
    }

    pub fn is_adjective(&self) -> bool {
        matches!(
            self,
            ConjugationClass::IAdjective | ConjugationClass::NaAdjective
        )
    }

    /// Number of categories a paradigm of this class contains.
    pub fn paradigm_size(&self) -> usize {
        if self.is_verb() {
            17
        } else if self.is_adjective() {
            11
        } else {
            0
        }
    }
}

impl fmt::Display for ConjugationClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a dictionary-form word by its part-of-speech tag.
pub fn classify(word: &str, part_of_speech: &str) -> ConjugationClass {
    explain(word, part_of_speech)
        .map(|rule| (rule.resolve)(word))
        .unwrap_or(ConjugationClass::NotConjugable)
}

/// The rule that decides the class of `word`, if any fires.
pub fn explain(_word: &str, part_of_speech: &str) -> Option<&'static ClassRule> {
    RULES.iter().find(|rule| rule.matches(part_of_speech))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verb_tags() {
        assert_eq!(classify("書く", "动1"), ConjugationClass::GodanVerb);
        assert_eq!(classify("書く", "他動1"), ConjugationClass::GodanVerb);
        assert_eq!(classify("食べる", "他动2"), ConjugationClass::IchidanVerb);
        assert_eq!(classify("起きる", "一段"), ConjugationClass::IchidanVerb);
    }

    #[test]
    fn test_irregular_tags() {
        assert_eq!(classify("する", "动3"), ConjugationClass::SuruVerb);
        assert_eq!(classify("勉強する", "サ変"), ConjugationClass::SuruVerb);
        assert_eq!(classify("来る", "カ変"), ConjugationClass::KuruVerb);
        assert_eq!(classify("くる", "自動3"), ConjugationClass::KuruVerb);
        assert_eq!(classify("運動", "名・自他动3"), ConjugationClass::SuruVerb);
    }

    #[test]
    fn test_adjective_tags() {
        assert_eq!(classify("高い", "イ形"), ConjugationClass::IAdjective);
        assert_eq!(classify("綺麗", "ナ形"), ConjugationClass::NaAdjective);
    }

    #[test]
    fn test_first_match_wins() {
        // Godan precedes every other marker.
        assert_eq!(classify("走る", "五段・一段"), ConjugationClass::GodanVerb);
        assert_eq!(classify("x", "イ形・动1"), ConjugationClass::GodanVerb);
        // Verb markers precede adjective markers.
        assert_eq!(classify("x", "ナ形・サ変"), ConjugationClass::SuruVerb);
        // i-adjective precedes na-adjective.
        assert_eq!(classify("x", "ナ形・イ形"), ConjugationClass::IAdjective);
    }

    #[test]
    fn test_unrecognized_tags() {
        assert_eq!(classify("本", "名"), ConjugationClass::NotConjugable);
        assert_eq!(classify("", ""), ConjugationClass::NotConjugable);
        assert_eq!(classify("とても", "副"), ConjugationClass::NotConjugable);
        assert_eq!(classify("ずつ", "助詞"), ConjugationClass::NotConjugable);
    }

    #[test]
    fn test_explain() {
        assert_eq!(explain("書く", "动1").map(|r| r.name), Some("godan"));
        assert_eq!(explain("来る", "カ変").map(|r| r.name), Some("irregular"));
        assert!(explain("本", "名").is_none());
    }

    #[test]
    fn test_paradigm_size() {
        assert_eq!(ConjugationClass::KuruVerb.paradigm_size(), 17);
        assert_eq!(ConjugationClass::NaAdjective.paradigm_size(), 11);
        assert_eq!(ConjugationClass::NotConjugable.paradigm_size(), 0);
    }
}
