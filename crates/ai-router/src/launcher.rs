//! Copy the prompt and open the chosen provider.
//!
//! Clipboard copy is attempted asynchronously first; on failure a synchronous
//! fallback runs. Neither failure blocks navigation: the provider page is
//! opened regardless of how the copy went.

use std::io::Write;
use std::process::{Command, Stdio};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use tracing::{debug, error, info, warn};

/// A way of putting text on the system clipboard
#[cfg_attr(test, mockall::automock)]
pub trait Clipboard {
    fn name(&self) -> &'static str;
    fn copy(&self, text: &str) -> Result<()>;
}

/// Opens a URL in the user's browser
#[cfg_attr(test, mockall::automock)]
pub trait BrowserOpener {
    fn open(&self, url: &str) -> Result<()>;
}

pub type SharedClipboard = Arc<dyn Clipboard + Send + Sync>;

/// Native clipboard through `arboard`
pub struct NativeClipboard;

impl Clipboard for NativeClipboard {
    fn name(&self) -> &'static str {
        "native"
    }

    fn copy(&self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new().context("Clipboard unavailable")?;
        clipboard
            .set_text(text.to_owned())
            .context("Clipboard write failed")?;
        Ok(())
    }
}

/// Pipes text into the first platform copy command that succeeds
pub struct CommandClipboard {
    candidates: Vec<(&'static str, Vec<&'static str>)>,
}

impl CommandClipboard {
    pub fn for_platform() -> Self {
        let candidates = if cfg!(target_os = "macos") {
            vec![("pbcopy", vec![])]
        } else if cfg!(windows) {
            vec![("clip", vec![])]
        } else {
            vec![
                ("wl-copy", vec![]),
                ("xclip", vec!["-selection", "clipboard"]),
                ("xsel", vec!["--clipboard", "--input"]),
            ]
        };
        Self { candidates }
    }

    fn pipe_into(program: &str, args: &[&str], text: &str) -> Result<()> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("Failed to spawn {program}"))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes())?;
        }
        let status = child.wait()?;
        if !status.success() {
            bail!("{program} exited with {status}");
        }
        Ok(())
    }
}

impl Clipboard for CommandClipboard {
    fn name(&self) -> &'static str {
        "command"
    }

    fn copy(&self, text: &str) -> Result<()> {
        let mut last_err = None;
        for (program, args) in &self.candidates {
            match Self::pipe_into(program, args, text) {
                Ok(()) => {
                    debug!(program, "Copied via command");
                    return Ok(());
                }
                Err(e) => last_err = Some(e),
            }
        }
        Err(last_err.unwrap_or_else(|| anyhow::anyhow!("No copy command for this platform")))
    }
}

/// Opens URLs with the platform handler via the `open` crate
pub struct SystemBrowser;

impl BrowserOpener for SystemBrowser {
    fn open(&self, url: &str) -> Result<()> {
        open::that(url).with_context(|| format!("Failed to open {url}"))
    }
}

/// How the prompt copy ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    CopiedWithFallback,
    Failed,
    Skipped,
}

/// Copy `text` with `primary` on a blocking task, falling back to `fallback`
/// synchronously. Failures are logged, never returned.
pub async fn copy_prompt(
    primary: SharedClipboard,
    fallback: &dyn Clipboard,
    text: &str,
) -> CopyOutcome {
    let owned = text.to_owned();
    let clipboard = Arc::clone(&primary);
    let attempt = tokio::task::spawn_blocking(move || clipboard.copy(&owned)).await;

    let err = match attempt {
        Ok(Ok(())) => {
            info!(clipboard = primary.name(), "Prompt copied to clipboard");
            return CopyOutcome::Copied;
        }
        Ok(Err(e)) => e,
        Err(join) => anyhow::anyhow!("clipboard task panicked: {join}"),
    };

    warn!(error = %err, "Failed to copy text. Fallback starting");
    match fallback.copy(text) {
        Ok(()) => {
            info!(clipboard = fallback.name(), "Prompt copied to clipboard");
            CopyOutcome::CopiedWithFallback
        }
        Err(e) => {
            error!(error = %e, "Fallback: unable to copy");
            CopyOutcome::Failed
        }
    }
}

/// What happened while routing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchReport {
    pub copy: CopyOutcome,
    pub opened: bool,
}

/// Routing side effects and their switches
pub struct Launcher {
    pub primary: SharedClipboard,
    pub fallback: Box<dyn Clipboard + Send + Sync>,
    pub browser: Box<dyn BrowserOpener + Send + Sync>,
    pub copy_prompt: bool,
    pub open_browser: bool,
    pub open_delay: Duration,
}

impl Launcher {
    /// Launcher wired to the real clipboard and browser
    pub fn system(copy_prompt: bool, open_browser: bool, open_delay: Duration) -> Self {
        Self {
            primary: Arc::new(NativeClipboard),
            fallback: Box::new(CommandClipboard::for_platform()),
            browser: Box::new(SystemBrowser),
            copy_prompt,
            open_browser,
            open_delay,
        }
    }

    /// Copy the prompt (if enabled), pause, then open `url` (if enabled).
    pub async fn launch(&self, prompt: &str, url: &str) -> LaunchReport {
        let prompt = prompt.trim();
        let copy = if self.copy_prompt && !prompt.is_empty() {
            copy_prompt(Arc::clone(&self.primary), self.fallback.as_ref(), prompt).await
        } else {
            CopyOutcome::Skipped
        };

        if !self.open_browser {
            return LaunchReport {
                copy,
                opened: false,
            };
        }

        if !self.open_delay.is_zero() {
            tokio::time::sleep(self.open_delay).await;
        }

        let opened = match self.browser.open(url) {
            Ok(()) => {
                info!(url, "Provider opened");
                true
            }
            Err(e) => {
                warn!(error = %e, url, "Could not open browser");
                false
            }
        };

        LaunchReport { copy, opened }
    }
}
