//! Interpretation text lookup
//!
//! The interpretive texts live in an external spreadsheet (one table keyed
//! by sign, one by house number, both with a column per body). This module
//! holds them as an explicitly passed, read-only value instead of a
//! process-wide cache, so the angular engine stays free of hidden
//! dependencies. Loading and parsing the spreadsheet itself is the
//! collaborator's job; this type only stores and serves the cells.

use crate::celestial::{Body, Sign};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Strip the spreadsheet's editorial prefix: cells may carry a
/// `[tag] text` marker, and only the part after the last `]` is shown.
fn clean_text(raw: &str) -> &str {
    match raw.rfind(']') {
        Some(idx) => raw[idx + 1..].trim(),
        None => raw.trim(),
    }
}

/// Read-only interpretation texts keyed by `(Sign, Body)` and
/// `(house, Body)`.
///
/// Build once from the spreadsheet collaborator's rows, then pass by
/// reference wherever texts are needed. Missing entries come back as
/// `None`; there is no default text substitution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InterpretationTable {
    sign_texts: HashMap<(Sign, Body), String>,
    house_texts: HashMap<(usize, Body), String>,
}

impl InterpretationTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the text for a body in a sign, applying the prefix cleanup
    pub fn insert_sign_text(&mut self, sign: Sign, body: Body, raw: &str) {
        self.sign_texts
            .insert((sign, body), clean_text(raw).to_string());
    }

    /// Store the text for a body in a house, applying the prefix cleanup
    pub fn insert_house_text(&mut self, house: usize, body: Body, raw: &str) {
        self.house_texts
            .insert((house, body), clean_text(raw).to_string());
    }

    /// Text for a body in a sign, if present
    pub fn sign_text(&self, sign: Sign, body: Body) -> Option<&str> {
        let text = self.sign_texts.get(&(sign, body)).map(String::as_str);
        if text.is_none() {
            log::debug!("no interpretation for {} in {}", body, sign);
        }
        text
    }

    /// Text for a body in a house, if present
    pub fn house_text(&self, house: usize, body: Body) -> Option<&str> {
        let text = self.house_texts.get(&(house, body)).map(String::as_str);
        if text.is_none() {
            log::debug!("no interpretation for {} in house {}", body, house);
        }
        text
    }

    /// Number of stored texts across both tables
    pub fn len(&self) -> usize {
        self.sign_texts.len() + self.house_texts.len()
    }

    /// True when no texts are stored
    pub fn is_empty(&self) -> bool {
        self.sign_texts.is_empty() && self.house_texts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_strips_bracket_prefix() {
        assert_eq!(clean_text("[v2] The Sun represents..."), "The Sun represents...");
        assert_eq!(clean_text("plain text"), "plain text");
        assert_eq!(clean_text("  padded  "), "padded");
        assert_eq!(clean_text("[a][b] keeps after last"), "keeps after last");
    }

    #[test]
    fn test_lookup_round_trip() {
        let mut table = InterpretationTable::new();
        table.insert_sign_text(Sign::Pisces, Body::Sun, "[draft] Dreamy and diffuse.");
        table.insert_house_text(5, Body::Sun, "Creative self-expression.");

        assert_eq!(
            table.sign_text(Sign::Pisces, Body::Sun),
            Some("Dreamy and diffuse.")
        );
        assert_eq!(
            table.house_text(5, Body::Sun),
            Some("Creative self-expression.")
        );
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_missing_entry_is_none() {
        let table = InterpretationTable::new();
        assert!(table.is_empty());
        assert_eq!(table.sign_text(Sign::Aries, Body::Moon), None);
        assert_eq!(table.house_text(1, Body::Moon), None);
    }
}
