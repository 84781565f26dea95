//! Persisted custom keyword rules
//!
//! The custom-rules record is a JSON object of provider name → keyword list.
//! Loading never fails: a corrupted record leaves the defaults in place and
//! bad entries are skipped one by one.

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::RouterResult;
use crate::provider::ProviderId;
use crate::rules::RuleSet;
use crate::store::{save_json, KeyValueStore};

/// Store key of the custom-rules record
pub const RULES_KEY: &str = "router_keywords";

/// Defaults merged with whatever custom rules are persisted.
pub fn load_rules(store: &dyn KeyValueStore) -> RuleSet {
    let mut rules = RuleSet::defaults();

    let raw = match store.get(RULES_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return rules,
        Err(e) => {
            warn!(error = %e, "Could not read saved routing rules; using defaults");
            return rules;
        }
    };

    let record: serde_json::Map<String, Value> = match serde_json::from_str(&raw) {
        Ok(Value::Object(map)) => map,
        Ok(other) => {
            warn!(kind = json_kind(&other), "Saved routing rules are not an object; using defaults");
            return rules;
        }
        Err(e) => {
            warn!(error = %e, "Error loading router rules; using defaults");
            return rules;
        }
    };

    for (key, value) in record {
        let Some(id) = ProviderId::from_key(&key) else {
            warn!(provider = %key, "Ignoring rules for unknown provider");
            continue;
        };
        match keyword_list(&value) {
            Some(words) => {
                debug!(provider = %id, count = words.len(), "Custom keywords applied");
                rules.set_keywords(id, words);
            }
            None => warn!(provider = %id, "Ignoring malformed keyword list"),
        }
    }

    rules
}

/// Persist the full rule set as the custom-rules record
pub fn save_rules(store: &dyn KeyValueStore, rules: &RuleSet) -> RouterResult<()> {
    save_json(store, RULES_KEY, rules)
}

/// Drop the custom-rules record and return the defaults
pub fn reset_rules(store: &dyn KeyValueStore) -> RouterResult<RuleSet> {
    store.remove(RULES_KEY)?;
    Ok(RuleSet::defaults())
}

fn keyword_list(value: &Value) -> Option<Vec<&str>> {
    value
        .as_array()?
        .iter()
        .map(Value::as_str)
        .collect::<Option<Vec<&str>>>()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
