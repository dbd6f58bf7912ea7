pub mod budget;
pub mod entry;
pub mod system;

use crate::cli::core::CommandError;
use crate::cli::registry::CommandEntry;
use crate::ledger::Category;

pub(crate) fn all_definitions() -> Vec<CommandEntry> {
    let mut commands = Vec::new();
    commands.extend(system::definitions());
    commands.extend(entry::definitions());
    commands.extend(budget::definitions());
    commands
}

/// Parses the income/expense selector token used by entry commands.
/// Unknown tokens are an explicit error.
pub(crate) fn parse_category(token: &str) -> Result<Category, CommandError> {
    match token.to_lowercase().as_str() {
        "inc" | "income" => Ok(Category::Income),
        "exp" | "expense" => Ok(Category::Expense),
        other => Err(CommandError::InvalidInput(format!(
            "unknown category `{other}` (expected `inc` or `exp`)"
        ))),
    }
}

/// Parses a monetary value token, rejecting non-numeric, non-finite, and
/// non-positive input before it ever reaches the ledger.
pub(crate) fn parse_value(token: &str) -> Result<f64, CommandError> {
    let value: f64 = token
        .parse()
        .map_err(|_| CommandError::InvalidInput(format!("`{token}` is not a number")))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(CommandError::InvalidInput(String::from(
            "value must be greater than zero",
        )));
    }
    Ok(value)
}

/// Parses an entry id token.
pub(crate) fn parse_id(token: &str) -> Result<u32, CommandError> {
    token
        .parse()
        .map_err(|_| CommandError::InvalidInput(format!("`{token}` is not a valid entry id")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_tokens_accept_short_and_long_forms() {
        assert_eq!(parse_category("inc").unwrap(), Category::Income);
        assert_eq!(parse_category("INCOME").unwrap(), Category::Income);
        assert_eq!(parse_category("exp").unwrap(), Category::Expense);
        assert_eq!(parse_category("Expense").unwrap(), Category::Expense);
        assert!(parse_category("transfer").is_err());
    }

    #[test]
    fn value_tokens_must_be_positive_numbers() {
        assert_eq!(parse_value("500").unwrap(), 500.0);
        assert_eq!(parse_value("59.90").unwrap(), 59.9);
        assert!(parse_value("abc").is_err());
        assert!(parse_value("0").is_err());
        assert!(parse_value("-10").is_err());
        assert!(parse_value("inf").is_err());
        assert!(parse_value("NaN").is_err());
    }

    #[test]
    fn id_tokens_must_be_non_negative_integers() {
        assert_eq!(parse_id("3").unwrap(), 3);
        assert!(parse_id("-1").is_err());
        assert!(parse_id("two").is_err());
    }
}
