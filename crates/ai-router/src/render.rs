//! Terminal rendering for analysis results, rules and history.

use std::fmt::Write;

use chrono::Local;
use router_core::{AnalysisResult, HistoryEntry, ProviderTable, RuleSet};

/// Multi-line, human-readable recommendation
pub fn render_result(result: &AnalysisResult, providers: &ProviderTable) -> String {
    let winner = providers.get(result.winner);
    let mut out = String::new();

    let _ = writeln!(out, "→ {}  [{}]", winner.name, result.confidence);
    let _ = writeln!(out, "  {}", result.primary);
    if let Some(secondary) = &result.secondary {
        let _ = writeln!(out, "  {}", secondary);
    }
    let _ = writeln!(out, "  {}", winner.url);

    let _ = writeln!(out);
    let _ = writeln!(out, "Scores (total {}):", result.scores.total());
    for (id, score) in result.scores.ranked() {
        let matched = result.scores.matched(id);
        if matched.is_empty() {
            let _ = writeln!(out, "  {:<8} {}", providers.name(id), score);
        } else {
            let _ = writeln!(
                out,
                "  {:<8} {}  ({})",
                providers.name(id),
                score,
                matched.join(", ")
            );
        }
    }
    out
}

/// Keyword lists as shown in the settings view
pub fn render_rules(rules: &RuleSet, providers: &ProviderTable) -> String {
    let mut out = String::new();
    for (id, words) in rules.iter() {
        let _ = writeln!(out, "{} Keywords", providers.name(id));
        if words.is_empty() {
            let _ = writeln!(out, "  (none)");
        } else {
            let _ = writeln!(out, "  {}", words.join(", "));
        }
    }
    out
}

/// Numbered recent-prompt list, most recent first
pub fn render_history(entries: &[HistoryEntry], providers: &ProviderTable) -> String {
    if entries.is_empty() {
        return "No recent prompts.\n".to_string();
    }

    let mut out = String::new();
    for (i, entry) in entries.iter().enumerate() {
        let when = entry.timestamp.with_timezone(&Local).format("%Y-%m-%d %H:%M");
        let _ = writeln!(
            out,
            "{:>2}. [{}] {}  ({})",
            i,
            providers.name(entry.provider),
            single_line(&entry.prompt, 60),
            when
        );
    }
    out
}

/// Collapse whitespace and cut to `max` characters with an ellipsis
fn single_line(text: &str, max: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max {
        return flat;
    }
    let cut: String = flat.chars().take(max.saturating_sub(1)).collect();
    format!("{cut}…")
}
