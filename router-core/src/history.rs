//! Recent-prompt history
//!
//! Bounded, most-recent-first list of analyzed prompts. A prompt that is
//! analyzed again moves to the front instead of being duplicated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::RouterResult;
use crate::provider::ProviderId;
use crate::store::{load_json, save_json, KeyValueStore};

/// Store key of the history record
pub const HISTORY_KEY: &str = "router_history";

/// Maximum number of remembered prompts
pub const HISTORY_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub prompt: String,
    pub provider: ProviderId,
    /// Epoch milliseconds on disk
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(prompt: impl Into<String>, provider: ProviderId, timestamp: DateTime<Utc>) -> Self {
        Self {
            prompt: prompt.into(),
            provider,
            timestamp,
        }
    }
}

/// Insert `entry` at the front, dropping older entries with the same prompt
/// and anything beyond [`HISTORY_LIMIT`].
pub fn push_entry(mut entries: Vec<HistoryEntry>, entry: HistoryEntry) -> Vec<HistoryEntry> {
    entries.retain(|e| e.prompt != entry.prompt);
    entries.insert(0, entry);
    entries.truncate(HISTORY_LIMIT);
    entries
}

/// Stored history, most recent first. A corrupted record reads as empty;
/// unreadable entries are skipped individually.
pub fn load_history(store: &dyn KeyValueStore) -> Vec<HistoryEntry> {
    let records = match load_json::<Vec<Value>>(store, HISTORY_KEY) {
        Ok(Some(records)) => records,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(error = %e, "Could not load prompt history; starting fresh");
            return Vec::new();
        }
    };

    records
        .into_iter()
        .enumerate()
        .filter_map(|(i, record)| match serde_json::from_value(record) {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(index = i, error = %e, "Skipping unreadable history entry");
                None
            }
        })
        .collect()
}

/// Record an analyzed prompt and return the updated history
pub fn record_history(
    store: &dyn KeyValueStore,
    prompt: &str,
    provider: ProviderId,
    now: DateTime<Utc>,
) -> RouterResult<Vec<HistoryEntry>> {
    let entries = push_entry(load_history(store), HistoryEntry::new(prompt, provider, now));
    save_json(store, HISTORY_KEY, &entries)?;
    Ok(entries)
}

pub fn clear_history(store: &dyn KeyValueStore) -> RouterResult<()> {
    store.remove(HISTORY_KEY)
}
