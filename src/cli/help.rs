use crate::cli::output;
use crate::cli::registry::{CommandEntry, CommandRegistry};

/// Renders the command overview, one line per command with its usage column.
pub fn print_overview(registry: &CommandRegistry) {
    output::section("Commands");
    for entry in registry.iter() {
        output::info(format!("  {:<36} {}", entry.usage, entry.description));
    }
    output::info("`help <command>` shows details for one command.");
}

pub fn print_command(entry: &CommandEntry) {
    output::section(entry.name);
    output::info(format!("  {}", entry.description));
    output::info(format!("  usage: {}", entry.usage));
}
