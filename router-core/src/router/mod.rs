//! Prompt Router Module
//!
//! Turns free prompt text into a provider recommendation:
//!
//! ```text
//! prompt ──► scorer (rule set) ──► score map ──► classifier ──► AnalysisResult
//! ```
//!
//! # Confidence
//!
//! ```text
//! Condition                     | Label        | Secondary text
//! ------------------------------|--------------|------------------
//! no keyword matched            | Best Guess   | fixed fallback
//! R > 0 and W >= 2R             | Strong Match | -
//! R > 0 and W >= 1.2R           | Good Match   | runner-up text
//! otherwise (incl. R == 0)      | Best Guess   | runner-up text
//! ```

pub mod analyzer;
pub mod classifier;
pub mod scorer;

pub use analyzer::Router;
pub use classifier::{classify, AnalysisResult, Confidence, NO_MATCH_RUNNER_UP, NO_MATCH_WINNER};
pub use scorer::{score, ScoreMap};
