//! Command dispatch
//!
//! Each subcommand maps onto one routing-service operation; output goes to
//! the supplied writer so the whole flow can be driven from tests.

use std::io::{Read, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use router_core::{AnalysisResult, FileStore, RouterConfig, RoutingService};
use serde::Serialize;
use tracing::info;

use crate::cli::{Commands, RulesAction};
use crate::launcher::{CopyOutcome, Launcher};
use crate::render;

/// JSON shape printed by `analyze --json`
#[derive(Serialize)]
struct AnalysisReport<'a> {
    provider: &'a str,
    url: &'a str,
    #[serde(flatten)]
    result: &'a AnalysisResult,
}

pub struct App {
    config: RouterConfig,
    service: RoutingService<FileStore>,
    launcher: Launcher,
}

impl App {
    /// App backed by the state directory in `config`, using the real
    /// clipboard and browser
    pub fn new(config: RouterConfig) -> Self {
        let launcher = Launcher::system(
            config.copy_prompt,
            config.open_browser,
            Duration::from_millis(config.open_delay_ms),
        );
        Self::with_launcher(config, launcher)
    }

    pub fn with_launcher(config: RouterConfig, launcher: Launcher) -> Self {
        let service = RoutingService::new(FileStore::new(&config.state_dir));
        Self {
            config,
            service,
            launcher,
        }
    }

    pub fn service(&self) -> &RoutingService<FileStore> {
        &self.service
    }

    pub async fn run(&mut self, command: Commands, out: &mut dyn Write) -> Result<()> {
        match command {
            Commands::Analyze { prompt, json } => {
                let prompt = resolve_prompt(&prompt, std::io::stdin())?;
                self.analyze(&prompt, json, out)?;
            }
            Commands::Route {
                prompt,
                no_copy,
                no_open,
                delay_ms,
            } => {
                let prompt = resolve_prompt(&prompt, std::io::stdin())?;
                self.launcher.copy_prompt = self.config.copy_prompt && !no_copy;
                self.launcher.open_browser = self.config.open_browser && !no_open;
                if let Some(ms) = delay_ms {
                    self.launcher.open_delay = Duration::from_millis(ms);
                }
                self.route(&prompt, out).await?;
            }
            Commands::Rules { action } => self.rules(action.unwrap_or(RulesAction::Show), out)?,
            Commands::History { clear } => {
                if clear {
                    self.service.clear_history()?;
                    writeln!(out, "History cleared.")?;
                } else {
                    let entries = self.service.history();
                    write!(out, "{}", render::render_history(&entries, self.service.providers()))?;
                }
            }
            Commands::Replay { index } => {
                if let Some(result) = self.service.replay(index)? {
                    write!(out, "{}", render::render_result(&result, self.service.providers()))?;
                }
            }
        }
        Ok(())
    }

    /// Print a recommendation; blank prompts are a no-op
    pub fn analyze(&self, prompt: &str, json: bool, out: &mut dyn Write) -> Result<Option<AnalysisResult>> {
        let Some(result) = self.service.analyze(prompt)? else {
            writeln!(out, "Nothing to analyze: the prompt is empty.")?;
            return Ok(None);
        };

        if json {
            let profile = self.service.providers().get(result.winner);
            let report = AnalysisReport {
                provider: &profile.name,
                url: &profile.url,
                result: &result,
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        } else {
            write!(out, "{}", render::render_result(&result, self.service.providers()))?;
        }
        Ok(Some(result))
    }

    /// Analyze, then copy the prompt and open the winner
    pub async fn route(&self, prompt: &str, out: &mut dyn Write) -> Result<()> {
        let Some(result) = self.analyze(prompt, false, out)? else {
            return Ok(());
        };

        let profile = self.service.providers().get(result.winner);
        info!(provider = %result.winner, url = %profile.url, "Routing prompt");
        let report = self.launcher.launch(prompt, &profile.url).await;

        writeln!(out)?;
        match report.copy {
            CopyOutcome::Copied | CopyOutcome::CopiedWithFallback => {
                writeln!(out, "Prompt copied to clipboard!")?
            }
            CopyOutcome::Failed => writeln!(out, "Could not copy the prompt; paste it manually.")?,
            CopyOutcome::Skipped => {}
        }
        if report.opened {
            writeln!(out, "Opened {}.", profile.name)?;
        } else {
            writeln!(out, "Open {} at {}", profile.name, profile.url)?;
        }
        Ok(())
    }

    fn rules(&mut self, action: RulesAction, out: &mut dyn Write) -> Result<()> {
        match action {
            RulesAction::Show => {}
            RulesAction::Set { provider, keywords } => {
                self.service.set_provider_keywords(provider, &keywords)?;
                writeln!(out, "Routing rules saved!")?;
            }
            RulesAction::Reset => {
                self.service.reset_rules()?;
                writeln!(out, "Default rules restored!")?;
            }
        }
        write!(out, "{}", render::render_rules(self.service.rules(), self.service.providers()))?;
        Ok(())
    }
}

/// Prompt from the positional words, or all of `stdin` when there are none
pub fn resolve_prompt(words: &[String], mut stdin: impl Read) -> Result<String> {
    if !words.is_empty() {
        return Ok(words.join(" "));
    }
    let mut buf = String::new();
    stdin
        .read_to_string(&mut buf)
        .context("Failed to read prompt from stdin")?;
    Ok(buf)
}
