//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use router_core::{ProviderId, RouterConfig, RouterResult};

/// Recommend the best AI chat provider for a prompt
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// TOML config file (state_dir, open_delay_ms, copy_prompt, open_browser)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory for saved rules and history (overrides AI_ROUTER_STATE_DIR)
    #[arg(long, global = true)]
    pub state_dir: Option<PathBuf>,

    /// Debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Recommend a provider for a prompt (reads stdin when no prompt is given)
    Analyze {
        prompt: Vec<String>,

        /// Print the full result as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Recommend a provider, copy the prompt and open the provider
    Route {
        prompt: Vec<String>,

        /// Do not copy the prompt to the clipboard
        #[arg(long, default_value_t = false)]
        no_copy: bool,

        /// Do not open the provider in the browser
        #[arg(long, default_value_t = false)]
        no_open: bool,

        /// Milliseconds between copying and opening (overrides config)
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Show or edit the keyword rules
    Rules {
        #[command(subcommand)]
        action: Option<RulesAction>,
    },

    /// List recent prompts
    History {
        /// Forget all recent prompts
        #[arg(long, default_value_t = false)]
        clear: bool,
    },

    /// Analyze a recent prompt again (0 = most recent)
    Replay { index: usize },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum RulesAction {
    /// Print every provider's keywords
    Show,

    /// Replace a provider's keywords with a comma-separated list
    Set {
        provider: ProviderId,
        keywords: String,
    },

    /// Restore the built-in keywords
    Reset,
}

impl Args {
    /// Config file + environment, then command-line overrides
    pub fn resolve_config(&self) -> RouterResult<RouterConfig> {
        let mut config = RouterConfig::load(self.config.as_deref())?;
        if let Some(dir) = &self.state_dir {
            config.state_dir = dir.clone();
        }
        Ok(config)
    }
}
