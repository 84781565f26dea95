//! Keyword rule set
//!
//! Maps every provider to its ordered keyword list. Keywords are stored
//! trimmed and lower-cased; order only matters for display.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use crate::provider::ProviderId;

/// Provider → keyword list mapping used for scoring.
///
/// Always covers the full provider set; lists are replaced wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RuleSet {
    keywords: BTreeMap<ProviderId, Vec<String>>,
}

impl RuleSet {
    /// Built-in keyword lists
    pub fn defaults() -> Self {
        let mut keywords = BTreeMap::new();
        for &id in ProviderId::all() {
            keywords.insert(id, default_keywords(id));
        }
        Self { keywords }
    }

    /// Keywords for a provider, in display order
    pub fn keywords(&self, id: ProviderId) -> &[String] {
        self.keywords.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Replace one provider's list. Entries are normalized first.
    pub fn set_keywords<I, S>(&mut self, id: ProviderId, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.keywords.insert(id, normalize_keywords(words));
    }

    /// Iterate providers in table order with their keywords
    pub fn iter(&self) -> impl Iterator<Item = (ProviderId, &[String])> {
        self.keywords.iter().map(|(id, words)| (*id, words.as_slice()))
    }

    /// Total keyword count across providers
    pub fn len(&self) -> usize {
        self.keywords.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::defaults()
    }
}

/// Defaults overridden by the given lists, each normalized
impl From<BTreeMap<ProviderId, Vec<String>>> for RuleSet {
    fn from(record: BTreeMap<ProviderId, Vec<String>>) -> Self {
        let mut rules = Self::defaults();
        for (id, words) in record {
            rules.set_keywords(id, words);
        }
        rules
    }
}

impl<'de> Deserialize<'de> for RuleSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        BTreeMap::<ProviderId, Vec<String>>::deserialize(deserializer).map(Self::from)
    }
}

fn default_keywords(id: ProviderId) -> Vec<String> {
    let words: &[&str] = match id {
        ProviderId::Claude => &[
            "write",
            "code",
            "debug",
            "refactor",
            "explain",
            "essay",
            "document",
            "step by step",
            "architecture",
        ],
        ProviderId::Gemini => &[
            "research",
            "analyze",
            "document",
            "pdf",
            "find",
            "sources",
            "compare",
            "academic",
            "data",
            "summarize this file",
        ],
        ProviderId::Grok => &[
            "trending",
            "latest",
            "news",
            "today",
            "what happened",
            "twitter",
            "x",
            "social media",
            "viral",
            "sentiment",
            "people saying",
        ],
        ProviderId::ChatGpt => &[
            "i feel",
            "help me decide",
            "what should i",
            "voice",
            "remember",
            "personal",
            "strategy",
            "business",
            "image",
            "generate a picture",
        ],
    };
    words.iter().map(|w| w.to_string()).collect()
}

/// Trim, lower-case and drop empty entries, keeping order.
pub fn normalize_keywords<I, S>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|w| w.as_ref().trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}

/// Parse comma-separated settings text into a normalized keyword list.
pub fn parse_keyword_list(raw: &str) -> Vec<String> {
    normalize_keywords(raw.split(','))
}
