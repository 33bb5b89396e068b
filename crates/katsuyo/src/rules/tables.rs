//! Literal suffix tables and irregular paradigms.
//!
//! Each table maps a category to the text appended to a class stem (or, for
//! the irregular paradigms, the complete surface form). Adding an irregular
//! form means editing a table here, not a generator.

use crate::catalog::GrammaticalCategory::{self, *};

use super::rows::VowelRow;

/// Category -> literal text.
pub type FormTable = [(GrammaticalCategory, &'static str)];

/// Appended to the ichidan stem (dictionary form minus る).
/// Potential and passive coincide.
pub static ICHIDAN_SUFFIXES: [(GrammaticalCategory, &str); 17] = [
    (PolitePresent, "ます"),
    (PolitePast, "ました"),
    (PoliteNegative, "ません"),
    (PolitePastNegative, "ませんでした"),
    (PlainPresent, "る"),
    (PlainPast, "た"),
    (PlainNegative, "ない"),
    (PlainPastNegative, "なかった"),
    (TeForm, "て"),
    (Potential, "られる"),
    (Passive, "られる"),
    (Causative, "させる"),
    (CausativePassive, "させられる"),
    (Imperative, "ろ"),
    (Volitional, "よう"),
    (ConditionalBa, "れば"),
    (ConditionalTara, "たら"),
];

/// Appended to the suru prefix (dictionary form minus する).
pub static SURU_SUFFIXES: [(GrammaticalCategory, &str); 17] = [
    (PolitePresent, "します"),
    (PolitePast, "しました"),
    (PoliteNegative, "しません"),
    (PolitePastNegative, "しませんでした"),
    (PlainPresent, "する"),
    (PlainPast, "した"),
    (PlainNegative, "しない"),
    (PlainPastNegative, "しなかった"),
    (TeForm, "して"),
    (Potential, "できる"),
    (Passive, "される"),
    (Causative, "させる"),
    (CausativePassive, "させられる"),
    (Imperative, "しろ"),
    (Volitional, "しよう"),
    (ConditionalBa, "すれば"),
    (ConditionalTara, "したら"),
];

/// 来る written with the kanji.
pub static KURU_KANJI: [(GrammaticalCategory, &str); 17] = [
    (PolitePresent, "来ます"),
    (PolitePast, "来ました"),
    (PoliteNegative, "来ません"),
    (PolitePastNegative, "来ませんでした"),
    (PlainPresent, "来る"),
    (PlainPast, "来た"),
    (PlainNegative, "来ない"),
    (PlainPastNegative, "来なかった"),
    (TeForm, "来て"),
    (Potential, "来られる"),
    (Passive, "来られる"),
    (Causative, "来させる"),
    (CausativePassive, "来させられる"),
    (Imperative, "来い"),
    (Volitional, "来よう"),
    (ConditionalBa, "来れば"),
    (ConditionalTara, "来たら"),
];

/// くる written in kana.
pub static KURU_KANA: [(GrammaticalCategory, &str); 17] = [
    (PolitePresent, "きます"),
    (PolitePast, "きました"),
    (PoliteNegative, "きません"),
    (PolitePastNegative, "きませんでした"),
    (PlainPresent, "くる"),
    (PlainPast, "きた"),
    (PlainNegative, "こない"),
    (PlainPastNegative, "こなかった"),
    (TeForm, "きて"),
    (Potential, "こられる"),
    (Passive, "こられる"),
    (Causative, "こさせる"),
    (CausativePassive, "こさせられる"),
    (Imperative, "こい"),
    (Volitional, "こよう"),
    (ConditionalBa, "くれば"),
    (ConditionalTara, "きたら"),
];

/// いい inflects on the よ stem everywhere except the present.
pub static II_PARADIGM: [(GrammaticalCategory, &str); 11] = [
    (PolitePresent, "いいです"),
    (PolitePast, "よかったです"),
    (PoliteNegative, "よくないです"),
    (PolitePastNegative, "よくなかったです"),
    (PlainPresent, "いい"),
    (PlainPast, "よかった"),
    (PlainNegative, "よくない"),
    (PlainPastNegative, "よくなかった"),
    (TeForm, "よくて"),
    (ConditionalBa, "よければ"),
    (ConditionalTara, "よかったら"),
];

/// Appended to the i-adjective stem (dictionary form minus い).
pub static I_ADJECTIVE_SUFFIXES: [(GrammaticalCategory, &str); 11] = [
    (PolitePresent, "いです"),
    (PolitePast, "かったです"),
    (PoliteNegative, "くないです"),
    (PolitePastNegative, "くなかったです"),
    (PlainPresent, "い"),
    (PlainPast, "かった"),
    (PlainNegative, "くない"),
    (PlainPastNegative, "くなかった"),
    (TeForm, "くて"),
    (ConditionalBa, "ければ"),
    (ConditionalTara, "かったら"),
];

/// Appended to the na-adjective stem as stored.
pub static NA_ADJECTIVE_SUFFIXES: [(GrammaticalCategory, &str); 11] = [
    (PolitePresent, "です"),
    (PolitePast, "でした"),
    (PoliteNegative, "じゃないです"),
    (PolitePastNegative, "じゃなかったです"),
    (PlainPresent, "だ"),
    (PlainPast, "だった"),
    (PlainNegative, "じゃない"),
    (PlainPastNegative, "じゃなかった"),
    (TeForm, "で"),
    (ConditionalBa, "ならば"),
    (ConditionalTara, "だったら"),
];

/// What a godan form is built on before its suffix is appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GodanBase {
    /// Stem plus the ending shifted to a vowel row.
    Row(VowelRow),
    /// The dictionary form itself.
    Dictionary,
    /// Stem plus the euphonic te suffix.
    Te,
    /// Stem plus the euphonic ta suffix.
    Ta,
}

/// How each godan category is assembled.
pub static GODAN_PATTERN: [(GrammaticalCategory, GodanBase, &str); 17] = [
    (PolitePresent, GodanBase::Row(VowelRow::I), "ます"),
    (PolitePast, GodanBase::Row(VowelRow::I), "ました"),
    (PoliteNegative, GodanBase::Row(VowelRow::I), "ません"),
    (PolitePastNegative, GodanBase::Row(VowelRow::I), "ませんでした"),
    (PlainPresent, GodanBase::Dictionary, ""),
    (PlainPast, GodanBase::Ta, ""),
    (PlainNegative, GodanBase::Row(VowelRow::A), "ない"),
    (PlainPastNegative, GodanBase::Row(VowelRow::A), "なかった"),
    (TeForm, GodanBase::Te, ""),
    (Potential, GodanBase::Row(VowelRow::E), "る"),
    (Passive, GodanBase::Row(VowelRow::A), "れる"),
    (Causative, GodanBase::Row(VowelRow::A), "せる"),
    (CausativePassive, GodanBase::Row(VowelRow::A), "せられる"),
    (Imperative, GodanBase::Row(VowelRow::E), ""),
    (Volitional, GodanBase::Row(VowelRow::O), "う"),
    (ConditionalBa, GodanBase::Row(VowelRow::E), "ば"),
    (ConditionalTara, GodanBase::Ta, "ら"),
];
