//! Display formatting for amounts, percentage labels, and the month banner.

use chrono::NaiveDate;

use crate::ledger::Category;

/// Formats a monetary amount for display: sign prefix by category, two
/// decimals, thousands grouped with commas. E.g. `+ 2,345.00`.
pub fn format_amount(value: f64, category: Category) -> String {
    let sign = match category {
        Category::Income => '+',
        Category::Expense => '-',
    };
    format!("{} {}", sign, group_thousands(value.abs()))
}

/// Formats the budget line, which takes the sign of the value itself
/// (a zero budget renders on the expense side).
pub fn format_budget(value: f64) -> String {
    let category = if value > 0.0 {
        Category::Income
    } else {
        Category::Expense
    };
    format_amount(value, category)
}

/// Renders a percentage label. Undefined or zero percentages show as `---`,
/// so a label is only ever a meaningful share of income.
pub fn format_percentage(percentage: Option<u32>) -> String {
    match percentage {
        Some(value) if value > 0 => format!("{value}%"),
        _ => String::from("---"),
    }
}

/// Full month name and year for the session banner, e.g. `August 2026`.
pub fn month_banner(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

fn group_thousands(abs_value: f64) -> String {
    let text = format!("{abs_value:.2}");
    let (int_part, dec_part) = match text.split_once('.') {
        Some((int_part, dec_part)) => (int_part, dec_part),
        None => (text.as_str(), "00"),
    };
    format!("{}.{}", group_digits(int_part, ','), dec_part)
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
        count += 1;
    }
    grouped
}
