//! Winner selection, tie-break and confidence classification.
//!
//! Runs after the scorer. Ranking picks a provisional winner and runner-up;
//! a shared positive top score goes through the fixed-precedence tie-break;
//! the post-tie-break scores then decide the confidence label.

use serde::{Deserialize, Serialize};

use super::scorer::ScoreMap;
use crate::provider::{ProviderId, ProviderTable};

/// Winner used when no keyword matched at all
pub const NO_MATCH_WINNER: ProviderId = ProviderId::Claude;
/// Runner-up used when no keyword matched at all
pub const NO_MATCH_RUNNER_UP: ProviderId = ProviderId::ChatGpt;

const NO_MATCH_REASON: &str = "No specific routing keywords found. Defaulting to Claude as a highly versatile general-purpose assistant.";
const NO_MATCH_SECONDARY: &str = "ChatGPT is also a great all-around fallback option.";

/// Tie-break precedence: a tied provider wins if the prompt contains any of
/// its disambiguating terms. Checked in order, first hit wins.
const TIE_BREAK_RULES: &[(ProviderId, &[&str])] = &[
    (ProviderId::Claude, &["code", "debug", "complex"]),
    (ProviderId::Gemini, &["research", "pdf", "document", "large"]),
    (ProviderId::Grok, &["news", "latest", "today", "twitter"]),
];

/// Unconditional tie-break fallback when it is part of the tie
const GENERAL_PURPOSE: ProviderId = ProviderId::ChatGpt;

/// How decisive the score gap was
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Confidence {
    #[serde(rename = "Strong Match")]
    StrongMatch,
    #[serde(rename = "Good Match")]
    GoodMatch,
    #[serde(rename = "Best Guess")]
    BestGuess,
}

impl Confidence {
    pub fn label(&self) -> &'static str {
        match self {
            Self::StrongMatch => "Strong Match",
            Self::GoodMatch => "Good Match",
            Self::BestGuess => "Best Guess",
        }
    }

    /// Coarse level for presenters (badge styling)
    pub fn level(&self) -> &'static str {
        match self {
            Self::StrongMatch => "high",
            Self::GoodMatch => "medium",
            Self::BestGuess => "low",
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Final recommendation for one prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub winner: ProviderId,
    pub runner_up: ProviderId,
    pub confidence: Confidence,
    /// Primary justification
    pub primary: String,
    /// Secondary justification, absent for strong matches
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    pub scores: ScoreMap,
}

/// Classify a score map into a recommendation.
///
/// `prompt_lower` is the lower-cased prompt, used only by the tie-break.
pub fn classify(scores: &ScoreMap, prompt_lower: &str, providers: &ProviderTable) -> AnalysisResult {
    let ranked = scores.ranked();
    let (mut winner, winner_score) = ranked[0];
    let (mut runner_up, runner_up_score) = ranked[1];

    if winner_score == runner_up_score && winner_score > 0 {
        let tied: Vec<ProviderId> = ranked
            .iter()
            .filter(|(_, s)| *s == winner_score)
            .map(|(id, _)| *id)
            .collect();

        winner = break_tie(&tied, prompt_lower);
        runner_up = tied
            .iter()
            .copied()
            .find(|&id| id != winner)
            .unwrap_or(runner_up);
    }

    if scores.total() == 0 {
        return AnalysisResult {
            winner: NO_MATCH_WINNER,
            runner_up: NO_MATCH_RUNNER_UP,
            confidence: Confidence::BestGuess,
            primary: NO_MATCH_REASON.to_string(),
            secondary: Some(NO_MATCH_SECONDARY.to_string()),
            scores: scores.clone(),
        };
    }

    let w = scores.get(winner);
    let r = scores.get(runner_up);
    let winner_profile = providers.get(winner);
    let runner_up_profile = providers.get(runner_up);

    // A runner-up with no matches never clears the ratio checks, so a lone
    // decisive match still lands on Best Guess.
    let (confidence, primary, secondary) = if r > 0 && w >= 2 * r {
        (Confidence::StrongMatch, winner_profile.reason.clone(), None)
    } else if r > 0 && 5 * w >= 6 * r {
        (
            Confidence::GoodMatch,
            winner_profile.reason.clone(),
            Some(runner_up_profile.runner_up_text.clone()),
        )
    } else {
        (
            Confidence::BestGuess,
            format!(
                "Scores were very close between {} and {}. We've recommended {} based on tie-breakers.",
                winner_profile.name, runner_up_profile.name, winner_profile.name
            ),
            Some(runner_up_profile.runner_up_text.clone()),
        )
    };

    AnalysisResult {
        winner,
        runner_up,
        confidence,
        primary,
        secondary,
        scores: scores.clone(),
    }
}

/// Pick the winner among providers sharing the top score.
fn break_tie(tied: &[ProviderId], prompt_lower: &str) -> ProviderId {
    for (id, terms) in TIE_BREAK_RULES {
        if tied.contains(id) && terms.iter().any(|t| prompt_lower.contains(t)) {
            return *id;
        }
    }

    if tied.contains(&GENERAL_PURPOSE) {
        return GENERAL_PURPOSE;
    }

    // Only reachable with a reduced provider set; callers always pass a
    // non-empty tie.
    tied.first().copied().unwrap_or(GENERAL_PURPOSE)
}
