//! AI Router Core Library
//!
//! Recommends which AI chat provider best fits a prompt:
//! - Keyword scoring against user-configurable per-provider rule lists
//! - Fixed-precedence tie-break between equally scored providers
//! - Confidence classification with a human-readable justification
//!
//! Persistence (custom rules, recent-prompt history) goes through the
//! injected [`store::KeyValueStore`], so the core never depends on a specific
//! storage mechanism.
//!
//! # Usage
//!
//! ```
//! use router_core::{ProviderId, Router, RuleSet};
//!
//! let router = Router::with_rules(RuleSet::defaults());
//! let result = router.analyze("what's the latest news today").unwrap();
//! assert_eq!(result.winner, ProviderId::Grok);
//! ```

pub mod config;
pub mod error;
pub mod history;
pub mod provider;
pub mod router;
pub mod rule_store;
pub mod rules;
pub mod service;
pub mod store;

pub use config::RouterConfig;
pub use error::{RouterError, RouterResult};
pub use history::{HistoryEntry, HISTORY_LIMIT};
pub use provider::{ProviderId, ProviderProfile, ProviderTable};
pub use router::{AnalysisResult, Confidence, Router, ScoreMap};
pub use rules::{parse_keyword_list, RuleSet};
pub use service::RoutingService;
pub use store::{FileStore, KeyValueStore, MemoryStore};
