use std::fmt;

use serde::Serialize;

/// Which side of the budget an entry belongs to.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum Category {
    Income,
    Expense,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Income => "income",
            Category::Expense => "expense",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single income or expense record.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Entry {
    pub id: u32,
    pub description: String,
    pub value: f64,
    pub category: Category,
    /// Share of total income, rounded to the nearest whole percent.
    /// `None` while uncomputed and whenever total income is zero.
    /// Never set for income entries.
    pub percentage_of_income: Option<u32>,
}

impl Entry {
    pub(crate) fn new(
        id: u32,
        description: impl Into<String>,
        value: f64,
        category: Category,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            value,
            category,
            percentage_of_income: None,
        }
    }

    /// Refreshes the derived percentage against the given total income.
    pub(crate) fn refresh_percentage(&mut self, total_income: f64) {
        self.percentage_of_income = if self.category == Category::Expense && total_income > 0.0 {
            Some((self.value / total_income * 100.0).round() as u32)
        } else {
            None
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_refresh_rounds_to_nearest_whole() {
        let mut entry = Entry::new(0, "groceries", 333.0, Category::Expense);
        entry.refresh_percentage(1000.0);
        assert_eq!(entry.percentage_of_income, Some(33));

        entry.refresh_percentage(999.0);
        assert_eq!(entry.percentage_of_income, Some(33));
    }

    #[test]
    fn percentage_is_undefined_without_income() {
        let mut entry = Entry::new(0, "groceries", 333.0, Category::Expense);
        entry.refresh_percentage(0.0);
        assert_eq!(entry.percentage_of_income, None);
    }

    #[test]
    fn income_entries_never_carry_a_percentage() {
        let mut entry = Entry::new(0, "salary", 2000.0, Category::Income);
        entry.refresh_percentage(2000.0);
        assert_eq!(entry.percentage_of_income, None);
    }
}
