//! Interactive presentation layer: reads user input, validates it, drives
//! the ledger, and renders results.

pub mod commands;
pub mod core;
pub mod help;
pub mod output;
pub mod prompts;
pub mod registry;
mod shell;

pub use shell::run_cli;
