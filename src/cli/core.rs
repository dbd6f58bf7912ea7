//! Shell context, command dispatch, and CLI error types.

use dialoguer::theme::ColorfulTheme;
use strsim::levenshtein;
use thiserror::Error;
use tracing::debug;

use crate::errors::LedgerError;
use crate::ledger::Ledger;

use super::commands;
use super::output::{self, OutputPreferences};
use super::prompts;
use super::registry::CommandRegistry;

/// Commands with a levenshtein distance above this are not suggested.
const SUGGESTION_DISTANCE: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

/// Errors surfaced by individual commands. Reported to the user and never
/// fatal to the shell.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    Ledger(#[from] LedgerError),
    #[error("{0}")]
    InvalidInput(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

/// Errors that terminate the shell loop itself.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Runtime state of one budgeting session.
///
/// Owns the single [`Ledger`] for the lifetime of the process; there is no
/// global ledger state, so independent sessions could in principle coexist.
pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub ledger: Ledger,
    pub theme: ColorfulTheme,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Self {
        let registry = CommandRegistry::new(commands::all_definitions());
        Self {
            mode,
            registry,
            ledger: Ledger::new(),
            theme: ColorfulTheme::default(),
            running: true,
        }
    }

    /// Applies output preferences derived from the mode and environment.
    pub fn apply_output_preferences(&self) {
        output::set_preferences(OutputPreferences {
            plain_mode: self.mode == CliMode::Script
                || std::env::var_os("BUDGETER_PLAIN").is_some(),
            quiet_mode: std::env::var_os("BUDGETER_QUIET").is_some(),
        });
    }

    pub fn prompt(&self) -> String {
        String::from("budgeter> ")
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    /// Recomputes totals and per-expense percentages after a mutation, so
    /// every render that follows sees fresh aggregates.
    pub(crate) fn refresh_aggregates(&mut self) {
        self.ledger.recompute_totals();
        self.ledger.recompute_expense_percentages();
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let Some(handler) = self.registry.handler(command) else {
            self.suggest_command(raw);
            return Ok(LoopControl::Continue);
        };
        debug!(command, "dispatching");
        match handler(self, args) {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
            Err(err) => Err(err),
        }
    }

    pub(crate) fn suggest_command(&self, raw: &str) {
        let lowered = raw.to_lowercase();
        let closest = self
            .registry
            .names()
            .map(|name| (levenshtein(name, &lowered), name))
            .min();
        match closest {
            Some((distance, name)) if distance <= SUGGESTION_DISTANCE => {
                output::warning(format!("Unknown command `{raw}`. Did you mean `{name}`?"));
            }
            _ => {
                output::warning(format!(
                    "Unknown command `{raw}`. Type `help` to list commands."
                ));
            }
        }
    }

    pub(crate) fn report_error(&mut self, err: CommandError) {
        output::error(err);
    }

    pub(crate) fn confirm_exit(&self) -> bool {
        if self.mode == CliMode::Script {
            return true;
        }
        prompts::confirm_action(&self.theme, "Exit budgeter?", true).unwrap_or(true)
    }
}
