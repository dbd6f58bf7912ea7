use chrono::Local;

use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::format::{format_amount, format_budget, format_percentage, month_banner};
use crate::ledger::Category;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "summary",
            "Show budget, totals, and overall percentage",
            "summary",
            cmd_summary,
        ),
        CommandEntry::new(
            "percentages",
            "Show percentage of income per expense entry",
            "percentages",
            cmd_percentages,
        ),
        CommandEntry::new(
            "inspect",
            "Dump the ledger state as JSON",
            "inspect",
            cmd_inspect,
        ),
    ]
}

/// Renders the aggregate block under the current month banner. Reads the
/// aggregates as-is; mutating commands refresh them before calling this.
pub(crate) fn render_summary(context: &ShellContext) {
    let aggregates = context.ledger.aggregates();
    output::section(format!(
        "Budget for {}",
        month_banner(Local::now().date_naive())
    ));
    output::info(format!("  Budget    : {}", format_budget(aggregates.budget)));
    output::info(format!(
        "  Income    : {}",
        format_amount(aggregates.total_income, Category::Income)
    ));
    output::info(format!(
        "  Expenses  : {}  {}",
        format_amount(aggregates.total_expense, Category::Expense),
        format_percentage(aggregates.overall_percentage)
    ));
    output::separator();
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    render_summary(context);
    Ok(())
}

fn cmd_percentages(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.ledger.recompute_expense_percentages();

    output::section("Expense percentages");
    let expenses = context.ledger.entries(Category::Expense);
    if expenses.is_empty() {
        output::info("  (no expenses)");
        return Ok(());
    }
    for entry in expenses {
        output::info(format!(
            "  #{:<3} {:<24} {:>5}",
            entry.id,
            entry.description,
            format_percentage(entry.percentage_of_income)
        ));
    }
    Ok(())
}

fn cmd_inspect(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let json = serde_json::to_string_pretty(&context.ledger)?;
    output::section("Ledger state");
    println!("{json}");
    Ok(())
}
