//! Provider table: the fixed set of AI chat destinations
//!
//! Each provider carries the display metadata the presenter needs (name, URL,
//! color) plus the two justification strings the classifier quotes. The table
//! is built once from the built-in profiles and is read-only afterwards; the
//! user-editable keyword lists live in [`crate::rules::RuleSet`].

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::RouterError;

/// Identifier of one of the fixed providers.
///
/// Variant order is the table order: ranking ties and the final tie-break
/// fallback both resolve in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProviderId {
    Claude,
    Gemini,
    Grok,
    #[serde(rename = "ChatGPT")]
    ChatGpt,
}

impl ProviderId {
    /// All providers in table order
    pub fn all() -> &'static [ProviderId] {
        &[Self::Claude, Self::Gemini, Self::Grok, Self::ChatGpt]
    }

    /// Stable key used in persisted records
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Claude => "Claude",
            Self::Gemini => "Gemini",
            Self::Grok => "Grok",
            Self::ChatGpt => "ChatGPT",
        }
    }

    /// Provider whose persisted key is exactly `key`
    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|id| id.as_str() == key)
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderId {
    type Err = RouterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|id| id.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| RouterError::UnknownProvider(wanted.to_string()))
    }
}

/// Display and justification metadata for one provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderProfile {
    pub id: ProviderId,
    /// Human-readable name
    pub name: String,
    /// Page opened when routing to this provider
    pub url: String,
    /// Accent color (CSS hex) for presenters that render one
    pub color: String,
    /// Justification shown when this provider wins
    pub reason: String,
    /// Justification shown when this provider is the runner-up
    pub runner_up_text: String,
}

impl ProviderProfile {
    /// Built-in profile for a provider
    pub fn builtin(id: ProviderId) -> Self {
        let (url, color, reason, runner_up_text) = match id {
            ProviderId::Claude => (
                "https://claude.ai/new",
                "#d97757",
                "Claude excels at coding, complex reasoning, and long-form writing with nuance.",
                "Claude is also strong here if you need deep, multi-step technical reasoning or coding help.",
            ),
            ProviderId::Gemini => (
                "https://gemini.google.com/app",
                "#8ab4f8",
                "Gemini is unmatched for research across large documents, live sources, and Google Workspace.",
                "Gemini is also an excellent choice here if you're working with uploaded files or live web data.",
            ),
            ProviderId::Grok => (
                "https://grok.com",
                "#e7e9ea",
                "Grok has real-time access to X data, making it the best for current events and social trends.",
                "Grok might provide a valuable alternative here if you are looking for unfiltered, real-time social sentiment.",
            ),
            ProviderId::ChatGpt => (
                "https://chatgpt.com",
                "#10a37f",
                "ChatGPT is highly versatile, with a great voice for personal advice, strategy, and multimodal generation.",
                "ChatGPT is also highly capable here if you value conversational flow and brainstorming.",
            ),
        };

        Self {
            id,
            name: id.as_str().to_string(),
            url: url.to_string(),
            color: color.to_string(),
            reason: reason.to_string(),
            runner_up_text: runner_up_text.to_string(),
        }
    }
}

/// Read-only lookup of provider profiles, one per [`ProviderId`], in table order
#[derive(Debug, Clone)]
pub struct ProviderTable {
    profiles: Vec<ProviderProfile>,
}

impl ProviderTable {
    /// Table populated with the built-in profiles
    pub fn builtin() -> Self {
        Self {
            profiles: ProviderId::all()
                .iter()
                .map(|&id| ProviderProfile::builtin(id))
                .collect(),
        }
    }

    /// Profile for a provider. Every id has exactly one profile.
    pub fn get(&self, id: ProviderId) -> &ProviderProfile {
        // profiles is built from ProviderId::all(), so the index always exists
        &self.profiles[id as usize]
    }

    pub fn name(&self, id: ProviderId) -> &str {
        &self.get(id).name
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProviderProfile> {
        self.profiles.iter()
    }
}

impl Default for ProviderTable {
    fn default() -> Self {
        Self::builtin()
    }
}
