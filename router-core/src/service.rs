//! Routing service: the boundary a presenter talks to.
//!
//! Combines the router with the injected store so that analysis, history and
//! rule edits stay consistent with each other.

use chrono::Utc;
use tracing::{info, warn};

use crate::error::{RouterError, RouterResult};
use crate::history::{self, HistoryEntry};
use crate::provider::{ProviderId, ProviderTable};
use crate::router::{AnalysisResult, Router};
use crate::rule_store;
use crate::rules::{parse_keyword_list, RuleSet};
use crate::store::KeyValueStore;

pub struct RoutingService<S: KeyValueStore> {
    router: Router,
    store: S,
}

impl<S: KeyValueStore> RoutingService<S> {
    /// Build a service over `store`, loading any saved custom rules.
    pub fn new(store: S) -> Self {
        let rules = rule_store::load_rules(&store);
        Self {
            router: Router::new(ProviderTable::builtin(), rules),
            store,
        }
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn providers(&self) -> &ProviderTable {
        self.router.providers()
    }

    pub fn rules(&self) -> &RuleSet {
        self.router.rules()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Analyze a prompt and remember it. Blank prompts are ignored and leave
    /// history untouched. A failed history write is logged; the
    /// recommendation is still returned.
    pub fn analyze(&self, prompt: &str) -> RouterResult<Option<AnalysisResult>> {
        let Some(result) = self.router.analyze(prompt) else {
            return Ok(None);
        };
        if let Err(e) =
            history::record_history(&self.store, prompt.trim(), result.winner, Utc::now())
        {
            warn!(error = %e, "Could not save prompt history");
        }
        Ok(Some(result))
    }

    /// Re-run analysis for a history entry (0 = most recent)
    pub fn replay(&self, index: usize) -> RouterResult<Option<AnalysisResult>> {
        let entries = self.history();
        let entry = entries.get(index).ok_or(RouterError::HistoryIndex {
            index,
            len: entries.len(),
        })?;
        self.analyze(&entry.prompt)
    }

    pub fn history(&self) -> Vec<HistoryEntry> {
        history::load_history(&self.store)
    }

    pub fn clear_history(&self) -> RouterResult<()> {
        history::clear_history(&self.store)
    }

    /// Replace one provider's keywords from comma-separated settings text and save
    pub fn set_provider_keywords(&mut self, id: ProviderId, raw: &str) -> RouterResult<()> {
        let mut rules = self.router.rules().clone();
        rules.set_keywords(id, parse_keyword_list(raw));
        self.replace_rules(rules)
    }

    /// Save a full rule set and make it active
    pub fn replace_rules(&mut self, rules: RuleSet) -> RouterResult<()> {
        rule_store::save_rules(&self.store, &rules)?;
        info!(keywords = rules.len(), "Routing rules saved");
        self.router.set_rules(rules);
        Ok(())
    }

    /// Forget custom rules and return to the built-in defaults
    pub fn reset_rules(&mut self) -> RouterResult<()> {
        let rules = rule_store::reset_rules(&self.store)?;
        info!("Default routing rules restored");
        self.router.set_rules(rules);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_blank_prompt_writes_nothing() {
        let service = RoutingService::new(MemoryStore::new());
        assert!(service.analyze("   ").unwrap().is_none());
        assert!(service.history().is_empty());
        assert!(service.store().is_empty());
    }

    #[test]
    fn test_analyze_records_trimmed_prompt() {
        let service = RoutingService::new(MemoryStore::new());
        let result = service.analyze("  latest news  ").unwrap().unwrap();
        let history = service.history();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].prompt, "latest news");
        assert_eq!(history[0].provider, result.winner);
    }

    #[test]
    fn test_keyword_edit_persists_across_instances() {
        let store = MemoryStore::new();
        let mut service = RoutingService::new(store);
        service
            .set_provider_keywords(ProviderId::ChatGpt, "Recipe, dinner, ")
            .unwrap();
        assert_eq!(service.rules().keywords(ProviderId::ChatGpt), ["recipe", "dinner"]);

        let reloaded = RoutingService::new(service.store);
        assert_eq!(reloaded.rules().keywords(ProviderId::ChatGpt), ["recipe", "dinner"]);
        let result = reloaded.analyze("dinner recipe").unwrap().unwrap();
        assert_eq!(result.winner, ProviderId::ChatGpt);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut service = RoutingService::new(MemoryStore::new());
        service.set_provider_keywords(ProviderId::Claude, "nothing").unwrap();
        service.reset_rules().unwrap();
        assert_eq!(service.rules(), &RuleSet::defaults());
    }

    #[test]
    fn test_replay_moves_entry_to_front() {
        let service = RoutingService::new(MemoryStore::new());
        service.analyze("first prompt").unwrap();
        service.analyze("second prompt").unwrap();

        let replayed = service.replay(1).unwrap();
        assert!(replayed.is_some());
        assert_eq!(service.history()[0].prompt, "first prompt");

        assert!(matches!(
            service.replay(9),
            Err(RouterError::HistoryIndex { index: 9, len: 2 })
        ));
    }
}
