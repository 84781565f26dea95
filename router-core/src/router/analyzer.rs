//! Analysis entry point: guards blank input, then scores and classifies.

use tracing::debug;

use super::classifier::{classify, AnalysisResult};
use super::scorer::score;
use crate::provider::ProviderTable;
use crate::rules::RuleSet;

/// Explicit routing configuration: provider metadata plus the active rules.
#[derive(Debug, Clone, Default)]
pub struct Router {
    providers: ProviderTable,
    rules: RuleSet,
}

impl Router {
    pub fn new(providers: ProviderTable, rules: RuleSet) -> Self {
        Self { providers, rules }
    }

    /// Router over the built-in providers with the given rules
    pub fn with_rules(rules: RuleSet) -> Self {
        Self::new(ProviderTable::builtin(), rules)
    }

    pub fn providers(&self) -> &ProviderTable {
        &self.providers
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Swap in a new rule set (after a settings save or reset)
    pub fn set_rules(&mut self, rules: RuleSet) {
        self.rules = rules;
    }

    /// Analyze a prompt. Blank or whitespace-only input yields `None`.
    pub fn analyze(&self, prompt: &str) -> Option<AnalysisResult> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return None;
        }

        let scores = score(prompt, &self.rules);
        let result = classify(&scores, &prompt.to_lowercase(), &self.providers);

        debug!(
            total = scores.total(),
            ranked = ?scores.ranked(),
            winner = %result.winner,
            runner_up = %result.runner_up,
            confidence = %result.confidence,
            "Prompt analyzed"
        );

        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::ProviderId;

    #[test]
    fn test_blank_prompt_is_noop() {
        let router = Router::default();
        assert!(router.analyze("").is_none());
        assert!(router.analyze("  \n\t ").is_none());
    }

    #[test]
    fn test_analysis_is_idempotent() {
        let router = Router::default();
        let prompt = "Compare these PDF sources and write an essay";
        assert_eq!(router.analyze(prompt), router.analyze(prompt));
    }

    #[test]
    fn test_case_folding() {
        let router = Router::default();
        let lower = router.analyze("latest news").unwrap();
        let upper = router.analyze("LATEST NEWS").unwrap();
        assert_eq!(lower.winner, ProviderId::Grok);
        assert_eq!(lower.scores, upper.scores);
    }

    #[test]
    fn test_set_rules_takes_effect() {
        let mut router = Router::default();
        let mut rules = RuleSet::defaults();
        rules.set_keywords(ProviderId::ChatGpt, ["recipe", "dinner"]);
        router.set_rules(rules);
        let result = router.analyze("a dinner recipe").unwrap();
        assert_eq!(result.winner, ProviderId::ChatGpt);
        assert_eq!(result.scores.get(ProviderId::ChatGpt), 2);
    }
}
