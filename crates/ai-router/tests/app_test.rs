//! End-to-end tests for the command-line presenter
//!
//! Drives `App` the way `main` does, against a temporary state directory and
//! with clipboard and browser side effects switched off.

use std::time::Duration;

use ai_router::{App, Args, Commands, Launcher, RulesAction};
use clap::Parser;
use router_core::{ProviderId, RouterConfig};
use tempfile::TempDir;

fn test_app() -> (TempDir, App) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = RouterConfig {
        state_dir: dir.path().to_path_buf(),
        open_delay_ms: 0,
        copy_prompt: false,
        open_browser: false,
    };
    let launcher = Launcher::system(false, false, Duration::ZERO);
    (dir, App::with_launcher(config, launcher))
}

async fn run(app: &mut App, argv: &[&str]) -> String {
    let args = Args::try_parse_from(std::iter::once("ai-router").chain(argv.iter().copied()))
        .expect("valid arguments");
    let mut out = Vec::new();
    app.run(args.command, &mut out).await.expect("command succeeds");
    String::from_utf8(out).unwrap()
}

#[tokio::test]
async fn test_analyze_prints_recommendation_and_records_history() {
    let (_dir, mut app) = test_app();
    let text = run(&mut app, &["analyze", "please", "debug", "this", "code"]).await;

    assert!(text.starts_with("→ Claude  [Best Guess]"));
    let history = app.service().history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].prompt, "please debug this code");
    assert_eq!(history[0].provider, ProviderId::Claude);
}

#[tokio::test]
async fn test_analyze_json_output() {
    let (_dir, mut app) = test_app();
    let text = run(&mut app, &["analyze", "--json", "latest news today"]).await;

    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["provider"], "Grok");
    assert_eq!(value["url"], "https://grok.com");
    assert_eq!(value["winner"], "Grok");
    assert_eq!(value["confidence"], "Best Guess");
    assert_eq!(value["scores"]["total"], 3);
}

#[tokio::test]
async fn test_blank_prompt_is_noop() {
    let (_dir, mut app) = test_app();
    let text = run(&mut app, &["route", "   "]).await;

    assert_eq!(text, "Nothing to analyze: the prompt is empty.\n");
    assert!(app.service().history().is_empty());
}

#[tokio::test]
async fn test_route_without_side_effects_prints_url() {
    let (_dir, mut app) = test_app();
    let text = run(&mut app, &["route", "--no-copy", "--no-open", "help me decide"]).await;

    assert!(text.contains("→ ChatGPT"));
    assert!(text.contains("Open ChatGPT at https://chatgpt.com"));
    assert!(!text.contains("copied"));
}

#[tokio::test]
async fn test_rules_edit_changes_routing() {
    let (dir, mut app) = test_app();
    let text = run(&mut app, &["rules", "set", "gemini", "Thesis, Citation"]).await;
    assert!(text.starts_with("Routing rules saved!"));
    assert!(text.contains("Gemini Keywords\n  thesis, citation"));
    assert!(dir.path().join("router_keywords.json").exists());

    let text = run(&mut app, &["analyze", "format this citation"]).await;
    assert!(text.starts_with("→ Gemini"));

    let text = run(&mut app, &["rules", "reset"]).await;
    assert!(text.starts_with("Default rules restored!"));
    assert!(!dir.path().join("router_keywords.json").exists());
}

#[tokio::test]
async fn test_history_and_replay() {
    let (_dir, mut app) = test_app();
    run(&mut app, &["analyze", "latest news"]).await;
    run(&mut app, &["analyze", "write an essay"]).await;

    let text = run(&mut app, &["history"]).await;
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with(" 0. [Claude] write an essay"));
    assert!(lines[1].starts_with(" 1. [Grok] latest news"));

    let text = run(&mut app, &["replay", "1"]).await;
    assert!(text.starts_with("→ Grok"));
    assert_eq!(app.service().history()[0].prompt, "latest news");

    let text = run(&mut app, &["history", "--clear"]).await;
    assert_eq!(text, "History cleared.\n");
    let text = run(&mut app, &["history"]).await;
    assert_eq!(text, "No recent prompts.\n");
}

#[test]
fn test_rules_defaults_to_show() {
    let args = Args::try_parse_from(["ai-router", "rules"]).unwrap();
    assert_eq!(args.command, Commands::Rules { action: None });
    let args = Args::try_parse_from(["ai-router", "rules", "show"]).unwrap();
    assert_eq!(
        args.command,
        Commands::Rules {
            action: Some(RulesAction::Show)
        }
    );
}
