//! The category -> surface text mapping produced for one word.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::catalog::GrammaticalCategory;
use crate::entry::ConjugatedForm;
use crate::rules::FormTable;

/// Inflected forms of a word, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Paradigm {
    forms: IndexMap<GrammaticalCategory, String>,
}

impl Paradigm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a paradigm by prefixing every entry of a literal table.
    pub(crate) fn from_table(prefix: &str, table: &FormTable) -> Self {
        let mut paradigm = Self::new();
        for &(category, text) in table {
            paradigm.insert(category, format!("{}{}", prefix, text));
        }
        paradigm
    }

    pub(crate) fn insert(&mut self, category: GrammaticalCategory, text: String) {
        self.forms.insert(category, text);
    }

    /// Surface text for a category, if the paradigm has one.
    pub fn get(&self, category: GrammaticalCategory) -> Option<&str> {
        self.forms.get(&category).map(String::as_str)
    }

    pub fn contains(&self, category: GrammaticalCategory) -> bool {
        self.forms.contains_key(&category)
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (GrammaticalCategory, &str)> {
        self.forms.iter().map(|(c, t)| (*c, t.as_str()))
    }

    pub fn categories(&self) -> impl Iterator<Item = GrammaticalCategory> + '_ {
        self.forms.keys().copied()
    }

    /// Attach the paradigm to an entry as storable forms.
    pub fn into_forms(self, entry_id: i64) -> Vec<ConjugatedForm> {
        self.forms
            .into_iter()
            .map(|(category, surface_text)| ConjugatedForm {
                entry_id,
                category,
                surface_text,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::NA_ADJECTIVE_SUFFIXES;

    #[test]
    fn test_from_table_keeps_order() {
        let paradigm = Paradigm::from_table("静か", &NA_ADJECTIVE_SUFFIXES);
        let first: Vec<&str> = paradigm.iter().take(2).map(|(_, t)| t).collect();
        assert_eq!(first, vec!["静かです", "静かでした"]);
        assert_eq!(paradigm.len(), 11);
    }

    #[test]
    fn test_serializes_as_code_map() {
        let paradigm = Paradigm::from_table("静か", &NA_ADJECTIVE_SUFFIXES);
        let value = serde_json::to_value(&paradigm).unwrap();
        assert_eq!(value["plain_past"], "静かだった");
        assert_eq!(value["te_form"], "静かで");
    }

    #[test]
    fn test_into_forms() {
        let paradigm = Paradigm::from_table("静か", &NA_ADJECTIVE_SUFFIXES);
        let forms = paradigm.into_forms(42);
        assert_eq!(forms.len(), 11);
        assert!(forms.iter().all(|f| f.entry_id == 42));
        assert_eq!(forms[0].category, GrammaticalCategory::PolitePresent);
    }
}
