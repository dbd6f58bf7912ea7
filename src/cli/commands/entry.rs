use crate::cli::core::{CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::prompts;
use crate::cli::registry::CommandEntry;
use crate::format::{format_amount, format_percentage};
use crate::ledger::Category;

use super::budget::render_summary;
use super::{parse_category, parse_id, parse_value};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "add",
            "Add an income or expense entry",
            "add [inc|exp] [description] [value]",
            cmd_add,
        ),
        CommandEntry::new(
            "delete",
            "Delete an entry by category and id",
            "delete <inc|exp> <id>",
            cmd_delete,
        ),
        CommandEntry::new("list", "List all entries", "list", cmd_list),
    ]
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (category, description, value) = match args {
        [] => prompt_entry(context)?,
        [category, middle @ .., value] if !middle.is_empty() => (
            parse_category(category)?,
            middle.join(" "),
            parse_value(value)?,
        ),
        _ => return Err(CommandError::Usage("add [inc|exp] [description] [value]")),
    };

    let line = {
        let entry = context.ledger.add_entry(category, description, value)?;
        format!(
            "Added {} #{}: {} ({})",
            category,
            entry.id,
            entry.description,
            format_amount(entry.value, category)
        )
    };
    output::success(line);

    context.refresh_aggregates();
    render_summary(context);
    Ok(())
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [category, id] = args else {
        return Err(CommandError::Usage("delete <inc|exp> <id>"));
    };
    let category = parse_category(category)?;
    let id = parse_id(id)?;

    let existed = context
        .ledger
        .entries(category)
        .iter()
        .any(|entry| entry.id == id);
    context.ledger.delete_entry(category, id);

    if existed {
        output::success(format!("Removed {category} entry #{id}."));
    } else {
        // Deleting an absent id is tolerated, not an error.
        output::info(format!("No {category} entry with id {id}; nothing removed."));
    }

    context.refresh_aggregates();
    render_summary(context);
    Ok(())
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::section("Income");
    let income = context.ledger.entries(Category::Income);
    if income.is_empty() {
        output::info("  (none)");
    }
    for entry in income {
        output::info(format!(
            "  #{:<3} {:<24} {:>14}",
            entry.id,
            entry.description,
            format_amount(entry.value, Category::Income)
        ));
    }

    output::section("Expenses");
    let expenses = context.ledger.entries(Category::Expense);
    if expenses.is_empty() {
        output::info("  (none)");
    }
    for entry in expenses {
        output::info(format!(
            "  #{:<3} {:<24} {:>14}  {:>5}",
            entry.id,
            entry.description,
            format_amount(entry.value, Category::Expense),
            format_percentage(entry.percentage_of_income)
        ));
    }
    Ok(())
}

/// Interactive wizard used when `add` is called without arguments.
fn prompt_entry(context: &mut ShellContext) -> Result<(Category, String, f64), CommandError> {
    if context.mode == CliMode::Script {
        return Err(CommandError::Usage("add <inc|exp> <description> <value>"));
    }

    let category = parse_category(&prompts::prompt_text(&context.theme, "Category (inc/exp)")?)?;
    let description = prompts::prompt_text(&context.theme, "Description")?;
    if description.trim().is_empty() {
        return Err(CommandError::InvalidInput(String::from(
            "description must not be empty",
        )));
    }
    let value = parse_value(&prompts::prompt_text(&context.theme, "Value")?)?;
    Ok((category, description, value))
}
