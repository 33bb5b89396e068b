//! I-adjective and na-adjective conjugation.

use crate::classify::ConjugationClass;
use crate::error::{KatsuyoError, Result};
use crate::rules::{II_PARADIGM, I_ADJECTIVE_SUFFIXES, NA_ADJECTIVE_SUFFIXES};

use super::Paradigm;

pub(super) fn i_adjective(word: &str) -> Result<Paradigm> {
    const CLASS: ConjugationClass = ConjugationClass::IAdjective;

    if word == "いい" {
        return Ok(Paradigm::from_table("", &II_PARADIGM));
    }

    let stem = word.strip_suffix('い').ok_or_else(|| {
        if word.is_empty() {
            KatsuyoError::malformed(word, CLASS, "empty dictionary form")
        } else {
            KatsuyoError::malformed(word, CLASS, "does not end in い")
        }
    })?;
    if stem.is_empty() {
        return Err(KatsuyoError::malformed(word, CLASS, "no stem before い"));
    }

    Ok(Paradigm::from_table(stem, &I_ADJECTIVE_SUFFIXES))
}

/// The word is expected to be stored as the bare stem (綺麗, not 綺麗な).
pub(super) fn na_adjective(word: &str) -> Result<Paradigm> {
    if word.is_empty() {
        return Err(KatsuyoError::malformed(
            word,
            ConjugationClass::NaAdjective,
            "empty dictionary form",
        ));
    }
    Ok(Paradigm::from_table(word, &NA_ADJECTIVE_SUFFIXES))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::GrammaticalCategory::*;

    #[test]
    fn test_takai() {
        let p = i_adjective("高い").unwrap();
        assert_eq!(p.get(PolitePresent), Some("高いです"));
        assert_eq!(p.get(PolitePast), Some("高かったです"));
        assert_eq!(p.get(PoliteNegative), Some("高くないです"));
        assert_eq!(p.get(PlainPresent), Some("高い"));
        assert_eq!(p.get(PlainPast), Some("高かった"));
        assert_eq!(p.get(PlainPastNegative), Some("高くなかった"));
        assert_eq!(p.get(TeForm), Some("高くて"));
        assert_eq!(p.get(ConditionalBa), Some("高ければ"));
        assert_eq!(p.get(ConditionalTara), Some("高かったら"));
        assert!(p.get(Potential).is_none());
    }

    #[test]
    fn test_ii() {
        let p = i_adjective("いい").unwrap();
        assert_eq!(p.get(PlainPresent), Some("いい"));
        assert_eq!(p.get(PolitePresent), Some("いいです"));
        assert_eq!(p.get(PlainPast), Some("よかった"));
        assert_eq!(p.get(PlainNegative), Some("よくない"));
        assert_eq!(p.get(TeForm), Some("よくて"));
    }

    #[test]
    fn test_kawaii_is_regular() {
        let p = i_adjective("かわいい").unwrap();
        assert_eq!(p.get(PlainPast), Some("かわいかった"));
    }

    #[test]
    fn test_i_adjective_malformed() {
        assert!(i_adjective("").is_err());
        assert!(i_adjective("い").is_err());
        assert!(i_adjective("綺麗").is_err());
    }

    #[test]
    fn test_na_adjective() {
        let p = na_adjective("綺麗").unwrap();
        assert_eq!(p.get(PolitePresent), Some("綺麗です"));
        assert_eq!(p.get(PoliteNegative), Some("綺麗じゃないです"));
        assert_eq!(p.get(PlainPresent), Some("綺麗だ"));
        assert_eq!(p.get(PlainPastNegative), Some("綺麗じゃなかった"));
        assert_eq!(p.get(TeForm), Some("綺麗で"));
        assert_eq!(p.get(ConditionalBa), Some("綺麗ならば"));
        assert_eq!(p.get(ConditionalTara), Some("綺麗だったら"));
        assert!(na_adjective("").is_err());
    }
}
