//! The fixed set of grammatical categories a paradigm is keyed by.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::KatsuyoError;

/// One named slot in a conjugation paradigm.
///
/// Variant order follows the catalog sort rank, so `Ord` sorts forms the
/// way they are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrammaticalCategory {
    PolitePresent,
    PolitePast,
    PoliteNegative,
    PolitePastNegative,
    PlainPresent,
    PlainPast,
    PlainNegative,
    PlainPastNegative,
    TeForm,
    Potential,
    Passive,
    Causative,
    CausativePassive,
    Imperative,
    Volitional,
    ConditionalBa,
    ConditionalTara,
}

impl GrammaticalCategory {
    /// All categories in sort order.
    pub const ALL: [GrammaticalCategory; 17] = [
        GrammaticalCategory::PolitePresent,
        GrammaticalCategory::PolitePast,
        GrammaticalCategory::PoliteNegative,
        GrammaticalCategory::PolitePastNegative,
        GrammaticalCategory::PlainPresent,
        GrammaticalCategory::PlainPast,
        GrammaticalCategory::PlainNegative,
        GrammaticalCategory::PlainPastNegative,
        GrammaticalCategory::TeForm,
        GrammaticalCategory::Potential,
        GrammaticalCategory::Passive,
        GrammaticalCategory::Causative,
        GrammaticalCategory::CausativePassive,
        GrammaticalCategory::Imperative,
        GrammaticalCategory::Volitional,
        GrammaticalCategory::ConditionalBa,
        GrammaticalCategory::ConditionalTara,
    ];

    /// Stable storage code.
    pub fn code(&self) -> &'static str {
        match self {
            GrammaticalCategory::PolitePresent => "polite_present",
            GrammaticalCategory::PolitePast => "polite_past",
            GrammaticalCategory::PoliteNegative => "polite_negative",
            GrammaticalCategory::PolitePastNegative => "polite_past_negative",
            GrammaticalCategory::PlainPresent => "plain_present",
            GrammaticalCategory::PlainPast => "plain_past",
            GrammaticalCategory::PlainNegative => "plain_negative",
            GrammaticalCategory::PlainPastNegative => "plain_past_negative",
            GrammaticalCategory::TeForm => "te_form",
            GrammaticalCategory::Potential => "potential",
            GrammaticalCategory::Passive => "passive",
            GrammaticalCategory::Causative => "causative",
            GrammaticalCategory::CausativePassive => "causative_passive",
            GrammaticalCategory::Imperative => "imperative",
            GrammaticalCategory::Volitional => "volitional",
            GrammaticalCategory::ConditionalBa => "conditional_ba",
            GrammaticalCategory::ConditionalTara => "conditional_tara",
        }
    }

    /// Japanese label, as shown in textbooks.
    pub fn label_primary(&self) -> &'static str {
        match self {
            GrammaticalCategory::PolitePresent => "ます形",
            GrammaticalCategory::PolitePast => "ました形",
            GrammaticalCategory::PoliteNegative => "ません形",
            GrammaticalCategory::PolitePastNegative => "ませんでした形",
            GrammaticalCategory::PlainPresent => "辞書形",
            GrammaticalCategory::PlainPast => "た形",
            GrammaticalCategory::PlainNegative => "ない形",
            GrammaticalCategory::PlainPastNegative => "なかった形",
            GrammaticalCategory::TeForm => "て形",
            GrammaticalCategory::Potential => "可能形",
            GrammaticalCategory::Passive => "受身形",
            GrammaticalCategory::Causative => "使役形",
            GrammaticalCategory::CausativePassive => "使役受身形",
            GrammaticalCategory::Imperative => "命令形",
            GrammaticalCategory::Volitional => "意向形",
            GrammaticalCategory::ConditionalBa => "ば形",
            GrammaticalCategory::ConditionalTara => "たら形",
        }
    }

    /// Chinese label used by the learner-facing UI.
    pub fn label_secondary(&self) -> &'static str {
        match self {
            GrammaticalCategory::PolitePresent => "敬体-非过去",
            GrammaticalCategory::PolitePast => "敬体-过去",
            GrammaticalCategory::PoliteNegative => "敬体-否定",
            GrammaticalCategory::PolitePastNegative => "敬体-过去否定",
            GrammaticalCategory::PlainPresent => "简体-非过去",
            GrammaticalCategory::PlainPast => "简体-过去",
            GrammaticalCategory::PlainNegative => "简体-否定",
            GrammaticalCategory::PlainPastNegative => "简体-过去否定",
            GrammaticalCategory::TeForm => "连接形 (て形)",
            GrammaticalCategory::Potential => "可能态",
            GrammaticalCategory::Passive => "被动态",
            GrammaticalCategory::Causative => "使役态",
            GrammaticalCategory::CausativePassive => "使役被动",
            GrammaticalCategory::Imperative => "命令形",
            GrammaticalCategory::Volitional => "意向形",
            GrammaticalCategory::ConditionalBa => "假定形 (ば)",
            GrammaticalCategory::ConditionalTara => "假定形 (たら)",
        }
    }

    /// Display order (10, 20, ... 170).
    pub fn sort_rank(&self) -> u32 {
        (*self as u32 + 1) * 10
    }

    /// English description.
    pub fn description(&self) -> &'static str {
        match self {
            GrammaticalCategory::PolitePresent => "Polite non-past form",
            GrammaticalCategory::PolitePast => "Polite past form",
            GrammaticalCategory::PoliteNegative => "Polite negative form",
            GrammaticalCategory::PolitePastNegative => "Polite past negative form",
            GrammaticalCategory::PlainPresent => "Plain non-past form (Dictionary form)",
            GrammaticalCategory::PlainPast => "Plain past form (Ta-form)",
            GrammaticalCategory::PlainNegative => "Plain negative form (Nai-form)",
            GrammaticalCategory::PlainPastNegative => "Plain past negative form",
            GrammaticalCategory::TeForm => "Te-form, used for connecting sentences",
            GrammaticalCategory::Potential => "Potential form (can do)",
            GrammaticalCategory::Passive => "Passive form",
            GrammaticalCategory::Causative => "Causative form (make/let someone do)",
            GrammaticalCategory::CausativePassive => "Causative-passive form",
            GrammaticalCategory::Imperative => "Imperative form",
            GrammaticalCategory::Volitional => "Volitional form (let's do)",
            GrammaticalCategory::ConditionalBa => "Conditional form (if)",
            GrammaticalCategory::ConditionalTara => "Conditional form (when/if)",
        }
    }

    /// Returns true for categories only verbs inflect into.
    pub fn is_verb_only(&self) -> bool {
        matches!(
            self,
            GrammaticalCategory::Potential
                | GrammaticalCategory::Passive
                | GrammaticalCategory::Causative
                | GrammaticalCategory::CausativePassive
                | GrammaticalCategory::Imperative
                | GrammaticalCategory::Volitional
        )
    }

    /// Look up a category by its storage code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.code() == code)
    }
}

impl fmt::Display for GrammaticalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for GrammaticalCategory {
    type Err = KatsuyoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| KatsuyoError::UnknownCategory(s.to_string()))
    }
}

/// Catalog record as persisted in the category table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub code: String,
    pub label_primary: String,
    pub label_secondary: String,
    pub sort_rank: u32,
    pub description: String,
}

impl From<GrammaticalCategory> for CategoryRecord {
    fn from(category: GrammaticalCategory) -> Self {
        Self {
            code: category.code().to_string(),
            label_primary: category.label_primary().to_string(),
            label_secondary: category.label_secondary().to_string(),
            sort_rank: category.sort_rank(),
            description: category.description().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for category in GrammaticalCategory::ALL {
            assert_eq!(GrammaticalCategory::from_code(category.code()), Some(category));
        }
        assert!("dictionary".parse::<GrammaticalCategory>().is_err());
    }

    #[test]
    fn test_sort_ranks() {
        assert_eq!(GrammaticalCategory::PolitePresent.sort_rank(), 10);
        assert_eq!(GrammaticalCategory::TeForm.sort_rank(), 90);
        assert_eq!(GrammaticalCategory::ConditionalTara.sort_rank(), 170);

        let ranks: Vec<u32> = GrammaticalCategory::ALL.iter().map(|c| c.sort_rank()).collect();
        assert!(ranks.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_verb_only_count() {
        let verb_only = GrammaticalCategory::ALL.iter().filter(|c| c.is_verb_only()).count();
        assert_eq!(verb_only, 6);
    }

    #[test]
    fn test_serde_uses_code() {
        let json = serde_json::to_string(&GrammaticalCategory::CausativePassive).unwrap();
        assert_eq!(json, "\"causative_passive\"");
    }
}
