//! Keyword scorer
//!
//! A provider's score is the number of its keywords that occur anywhere in
//! the lower-cased prompt. Presence counts once per keyword, never per
//! occurrence in the text.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::provider::ProviderId;
use crate::rules::RuleSet;

/// Per-provider match counts for one prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreMap {
    scores: BTreeMap<ProviderId, u32>,
    /// Keywords that matched, per provider, in rule order
    matched: BTreeMap<ProviderId, Vec<String>>,
    total: u32,
}

impl ScoreMap {
    /// Score for a provider (0 when nothing matched)
    pub fn get(&self, id: ProviderId) -> u32 {
        self.scores.get(&id).copied().unwrap_or(0)
    }

    /// Sum of all provider scores
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Keywords that contributed to a provider's score
    pub fn matched(&self, id: ProviderId) -> &[String] {
        self.matched.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Providers sorted by score, highest first. Equal scores keep table order.
    pub fn ranked(&self) -> Vec<(ProviderId, u32)> {
        let mut ranked: Vec<(ProviderId, u32)> = ProviderId::all()
            .iter()
            .map(|&id| (id, self.get(id)))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

/// Score a prompt against a rule set.
///
/// The caller is expected to have rejected blank prompts already.
pub fn score(prompt: &str, rules: &RuleSet) -> ScoreMap {
    let text = prompt.to_lowercase();
    let mut scores = BTreeMap::new();
    let mut matched = BTreeMap::new();
    let mut total = 0u32;

    for &id in ProviderId::all() {
        let hits: Vec<String> = rules
            .keywords(id)
            .iter()
            .filter(|kw| !kw.is_empty() && text.contains(kw.to_lowercase().as_str()))
            .cloned()
            .collect();

        let count = hits.len() as u32;
        total += count;
        scores.insert(id, count);
        matched.insert(id, hits);
    }

    ScoreMap {
        scores,
        matched,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules_with(id: ProviderId, words: &[&str]) -> RuleSet {
        let mut rules = RuleSet::defaults();
        for &other in ProviderId::all() {
            rules.set_keywords(other, Vec::<String>::new());
        }
        rules.set_keywords(id, words.iter().copied());
        rules
    }

    #[test]
    fn test_counts_distinct_keywords() {
        let rules = rules_with(ProviderId::Claude, &["code", "debug", "refactor"]);
        let scores = score("Please DEBUG this code, then debug it again", &rules);
        assert_eq!(scores.get(ProviderId::Claude), 2);
        assert_eq!(scores.total(), 2);
        assert_eq!(scores.matched(ProviderId::Claude), ["code", "debug"]);
    }

    #[test]
    fn test_substring_without_word_boundary() {
        let rules = rules_with(ProviderId::Grok, &["x"]);
        let scores = score("explain this", &rules);
        assert_eq!(scores.get(ProviderId::Grok), 1);
    }

    #[test]
    fn test_keyword_order_does_not_matter() {
        let a = rules_with(ProviderId::Gemini, &["pdf", "data", "find"]);
        let b = rules_with(ProviderId::Gemini, &["find", "pdf", "data"]);
        let prompt = "find the data in this pdf";
        assert_eq!(
            score(prompt, &a).get(ProviderId::Gemini),
            score(prompt, &b).get(ProviderId::Gemini)
        );
    }

    #[test]
    fn test_no_match_is_zero_everywhere() {
        let scores = score("hello there", &RuleSet::defaults());
        assert_eq!(scores.total(), 0);
        for &id in ProviderId::all() {
            assert_eq!(scores.get(id), 0);
            assert!(scores.matched(id).is_empty());
        }
    }

    #[test]
    fn test_ranked_is_stable_on_ties() {
        let scores = score("hello there", &RuleSet::defaults());
        let order: Vec<ProviderId> = scores.ranked().into_iter().map(|(id, _)| id).collect();
        assert_eq!(order, ProviderId::all());

        let scores = score("latest news", &RuleSet::defaults());
        assert_eq!(scores.ranked()[0], (ProviderId::Grok, 2));
        assert_eq!(scores.ranked()[1], (ProviderId::Claude, 0));
    }
}
