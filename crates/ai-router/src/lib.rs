//! AI router command-line presenter
//!
//! Thin layer over `router_core`: argument parsing, terminal rendering, and
//! the route side effects (clipboard copy, opening the provider page).

pub mod cli;
pub mod commands;
pub mod launcher;
pub mod render;

pub use cli::{Args, Commands, RulesAction};
pub use commands::App;
pub use launcher::{CopyOutcome, LaunchReport, Launcher};
