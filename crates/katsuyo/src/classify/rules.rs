//! Ordered classification rules over part-of-speech tag markers.

use once_cell::sync::Lazy;
use regex::Regex;

use super::ConjugationClass;

// =============================================================================
// TAG MARKERS
// =============================================================================
// Tags arrive in either the simplified 动 or the Japanese 動 spelling, with
// ASCII or full-width digits, sometimes with a space before the digit.

static GODAN_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"五段|[动動]\s*[1１]").expect("godan marker pattern"));

static ICHIDAN_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"一段|[动動]\s*[2２]").expect("ichidan marker pattern"));

static IRREGULAR_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"カ変|サ変|[动動]\s*[3３]").expect("irregular marker pattern"));

/// A signal a part-of-speech tag can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagSignal {
    Godan,
    Ichidan,
    Irregular,
    IAdjective,
    NaAdjective,
}

impl TagSignal {
    /// Returns true if the tag contains this signal anywhere.
    pub fn is_present(&self, tag: &str) -> bool {
        match self {
            TagSignal::Godan => GODAN_MARKER.is_match(tag),
            TagSignal::Ichidan => ICHIDAN_MARKER.is_match(tag),
            TagSignal::Irregular => IRREGULAR_MARKER.is_match(tag),
            TagSignal::IAdjective => tag.contains("イ形"),
            TagSignal::NaAdjective => tag.contains("ナ形"),
        }
    }
}

/// One entry of the first-match rule list.
#[derive(Debug, Clone, Copy)]
pub struct ClassRule {
    /// Short name for diagnostics.
    pub name: &'static str,
    /// Signal the tag must carry for the rule to fire.
    pub signal: TagSignal,
    /// Picks the class once the rule fires; may inspect the word.
    pub resolve: fn(&str) -> ConjugationClass,
}

impl ClassRule {
    pub fn matches(&self, tag: &str) -> bool {
        self.signal.is_present(tag)
    }
}

/// Classification rules in precedence order.
pub static RULES: [ClassRule; 5] = [
    ClassRule {
        name: "godan",
        signal: TagSignal::Godan,
        resolve: always_godan,
    },
    ClassRule {
        name: "ichidan",
        signal: TagSignal::Ichidan,
        resolve: always_ichidan,
    },
    ClassRule {
        name: "irregular",
        signal: TagSignal::Irregular,
        resolve: resolve_irregular,
    },
    ClassRule {
        name: "i_adjective",
        signal: TagSignal::IAdjective,
        resolve: always_i_adjective,
    },
    ClassRule {
        name: "na_adjective",
        signal: TagSignal::NaAdjective,
        resolve: always_na_adjective,
    },
];

fn always_godan(_: &str) -> ConjugationClass {
    ConjugationClass::GodanVerb
}

fn always_ichidan(_: &str) -> ConjugationClass {
    ConjugationClass::IchidanVerb
}

fn always_i_adjective(_: &str) -> ConjugationClass {
    ConjugationClass::IAdjective
}

fn always_na_adjective(_: &str) -> ConjugationClass {
    ConjugationClass::NaAdjective
}

/// Split an irregular-marked word into suru or kuru.
///
/// Anything that is neither is taken to be a noun used with する.
fn resolve_irregular(word: &str) -> ConjugationClass {
    if word.ends_with("する") {
        ConjugationClass::SuruVerb
    } else if word.ends_with("くる") || word.ends_with("来る") {
        ConjugationClass::KuruVerb
    } else {
        ConjugationClass::SuruVerb
    }
}
