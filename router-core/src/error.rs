//! Router error types
//!
//! Every fallible operation in the core returns [`RouterResult`]. Callers that
//! present errors to a person can use [`RouterError::recovery_suggestion`].

use thiserror::Error;

/// Result type alias for router operations
pub type RouterResult<T> = Result<T, RouterError>;

/// Errors produced by the routing core and its persistence layer
#[derive(Debug, Error)]
pub enum RouterError {
    /// Filesystem failure in a file-backed store or config load
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A persisted record could not be encoded or decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file or environment value was invalid
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Store key outside the allowed `[a-z0-9_-]` alphabet
    #[error("Invalid store key: {key:?}")]
    InvalidKey { key: String },

    /// Provider name that is not part of the fixed provider set
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    /// History index outside the stored range
    #[error("No history entry at position {index} (history holds {len})")]
    HistoryIndex { index: usize, len: usize },

    #[error("Lock poisoned")]
    LockPoisoned,
}

impl RouterError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn invalid_key(key: impl Into<String>) -> Self {
        Self::InvalidKey { key: key.into() }
    }

    /// Short hint telling the user how to get past this error
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Io(_) => Some("Check that the state directory exists and is writable"),
            Self::Json(_) => {
                Some("Stored data is corrupted; run `ai-router rules reset` or `ai-router history --clear`")
            }
            Self::Config { .. } => Some("Fix the config file or unset the AI_ROUTER_* variable"),
            Self::UnknownProvider(_) => Some("Use one of: claude, gemini, grok, chatgpt"),
            Self::HistoryIndex { .. } => Some("Run `ai-router history` to list valid positions"),
            Self::InvalidKey { .. } | Self::LockPoisoned => None,
        }
    }

    /// Error message with the recovery hint appended, if there is one
    pub fn with_suggestion(&self) -> String {
        match self.recovery_suggestion() {
            Some(hint) => format!("{self}. {hint}"),
            None => self.to_string(),
        }
    }
}
