use serde::Serialize;
use tracing::debug;

use crate::errors::LedgerError;

use super::entry::{Category, Entry};

/// In-memory aggregate root holding all income/expense entries and the
/// totals derived from them.
///
/// Aggregates follow an explicit two-phase contract: they go stale on every
/// mutation and become fresh again only when the caller invokes
/// [`Ledger::recompute_totals`] (and, for per-entry percentages,
/// [`Ledger::recompute_expense_percentages`]). Nothing here recomputes
/// automatically, so batched mutations pay for one recompute instead of many.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Ledger {
    income: Vec<Entry>,
    expense: Vec<Entry>,
    aggregates: Aggregates,
}

/// Snapshot of the derived totals as of the last recomputation.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
pub struct Aggregates {
    pub total_income: f64,
    pub total_expense: f64,
    /// `total_income - total_expense`; may be negative.
    pub budget: f64,
    /// round(expense / income * 100), or `None` when total income is zero.
    pub overall_percentage: Option<u32>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and appends a new entry, assigning the next free id within
    /// the entry's category.
    ///
    /// Ids count up from the id of the last entry in the sequence (0 when
    /// empty). Deleting the highest id therefore frees it for reassignment;
    /// that reuse is an intentional property of the numbering scheme.
    pub fn add_entry(
        &mut self,
        category: Category,
        description: impl Into<String>,
        value: f64,
    ) -> Result<&Entry, LedgerError> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(LedgerError::invalid("description must not be empty"));
        }
        if !value.is_finite() || value <= 0.0 {
            return Err(LedgerError::invalid(
                "value must be a positive finite number",
            ));
        }

        let entries = self.entries_mut(category);
        let id = entries.last().map_or(0, |entry| entry.id + 1);
        entries.push(Entry::new(id, description, value, category));
        debug!(%category, id, "entry added");

        // last() is Some: the entry was just appended.
        Ok(self.entries_for(category).last().expect("entry appended"))
    }

    /// Removes the entry with the given id from its category, preserving the
    /// relative order of the rest. Deleting an absent id is a silent no-op.
    pub fn delete_entry(&mut self, category: Category, id: u32) {
        let entries = self.entries_mut(category);
        if let Some(index) = entries.iter().position(|entry| entry.id == id) {
            entries.remove(index);
            debug!(%category, id, "entry removed");
        }
    }

    /// Recomputes totals, budget, and the overall expense percentage from
    /// the current entry sets. Idempotent between mutations.
    pub fn recompute_totals(&mut self) {
        let total_income: f64 = self.income.iter().map(|entry| entry.value).sum();
        let total_expense: f64 = self.expense.iter().map(|entry| entry.value).sum();
        let overall_percentage = if total_income > 0.0 {
            Some((total_expense / total_income * 100.0).round() as u32)
        } else {
            None
        };
        self.aggregates = Aggregates {
            total_income,
            total_expense,
            budget: total_income - total_expense,
            overall_percentage,
        };
    }

    /// Refreshes every expense entry's percentage-of-income against the
    /// total income from the last [`Ledger::recompute_totals`] call. Does
    /// not recompute the totals themselves.
    pub fn recompute_expense_percentages(&mut self) {
        let total_income = self.aggregates.total_income;
        for entry in &mut self.expense {
            entry.refresh_percentage(total_income);
        }
    }

    /// Read-only snapshot of the aggregates; does not trigger recomputation.
    pub fn aggregates(&self) -> Aggregates {
        self.aggregates
    }

    /// Percentage-of-income per expense entry, in entry order, as of the
    /// last [`Ledger::recompute_expense_percentages`] call.
    pub fn expense_percentages(&self) -> Vec<Option<u32>> {
        self.expense
            .iter()
            .map(|entry| entry.percentage_of_income)
            .collect()
    }

    pub fn entries(&self, category: Category) -> &[Entry] {
        self.entries_for(category)
    }

    pub fn entry_count(&self, category: Category) -> usize {
        self.entries_for(category).len()
    }

    pub fn is_empty(&self) -> bool {
        self.income.is_empty() && self.expense.is_empty()
    }

    fn entries_for(&self, category: Category) -> &Vec<Entry> {
        match category {
            Category::Income => &self.income,
            Category::Expense => &self.expense,
        }
    }

    fn entries_mut(&mut self, category: Category) -> &mut Vec<Entry> {
        match category {
            Category::Income => &mut self.income,
            Category::Expense => &mut self.expense,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(ledger: &mut Ledger, category: Category, description: &str, value: f64) -> u32 {
        ledger
            .add_entry(category, description, value)
            .expect("valid entry")
            .id
    }

    #[test]
    fn ids_count_up_from_zero_per_category() {
        let mut ledger = Ledger::new();
        assert_eq!(add(&mut ledger, Category::Income, "salary", 1000.0), 0);
        assert_eq!(add(&mut ledger, Category::Income, "bonus", 100.0), 1);
        assert_eq!(add(&mut ledger, Category::Income, "dividends", 50.0), 2);
        // The expense id space is independent of income.
        assert_eq!(add(&mut ledger, Category::Expense, "rent", 500.0), 0);
    }

    #[test]
    fn deleting_the_highest_id_frees_it_for_reassignment() {
        let mut ledger = Ledger::new();
        add(&mut ledger, Category::Income, "a", 1.0);
        add(&mut ledger, Category::Income, "b", 1.0);
        add(&mut ledger, Category::Income, "c", 1.0);
        ledger.delete_entry(Category::Income, 2);
        assert_eq!(add(&mut ledger, Category::Income, "d", 1.0), 2);
    }

    #[test]
    fn deleting_a_middle_id_does_not_reuse_it() {
        let mut ledger = Ledger::new();
        add(&mut ledger, Category::Expense, "a", 1.0);
        add(&mut ledger, Category::Expense, "b", 1.0);
        add(&mut ledger, Category::Expense, "c", 1.0);
        ledger.delete_entry(Category::Expense, 1);
        assert_eq!(add(&mut ledger, Category::Expense, "d", 1.0), 3);
        let ids: Vec<u32> = ledger
            .entries(Category::Expense)
            .iter()
            .map(|entry| entry.id)
            .collect();
        assert_eq!(ids, vec![0, 2, 3]);
    }

    #[test]
    fn delete_removes_exactly_one_entry() {
        let mut ledger = Ledger::new();
        add(&mut ledger, Category::Expense, "rent", 500.0);
        ledger.delete_entry(Category::Expense, 0);
        assert!(ledger.entries(Category::Expense).is_empty());
    }

    #[test]
    fn deleting_a_nonexistent_id_changes_nothing() {
        let mut ledger = Ledger::new();
        add(&mut ledger, Category::Expense, "rent", 500.0);
        ledger.recompute_totals();
        let before = ledger.aggregates();

        ledger.delete_entry(Category::Expense, 999);
        ledger.delete_entry(Category::Income, 0);

        assert_eq!(ledger.entry_count(Category::Expense), 1);
        assert_eq!(ledger.entry_count(Category::Income), 0);
        assert_eq!(ledger.aggregates(), before);
    }

    #[test]
    fn recompute_totals_derives_budget_and_percentage() {
        let mut ledger = Ledger::new();
        add(&mut ledger, Category::Income, "salary", 1000.0);
        add(&mut ledger, Category::Expense, "rent", 250.0);
        ledger.recompute_totals();

        let aggregates = ledger.aggregates();
        assert_eq!(aggregates.total_income, 1000.0);
        assert_eq!(aggregates.total_expense, 250.0);
        assert_eq!(aggregates.budget, 750.0);
        assert_eq!(aggregates.overall_percentage, Some(25));
    }

    #[test]
    fn zero_income_yields_negative_budget_and_undefined_percentage() {
        let mut ledger = Ledger::new();
        add(&mut ledger, Category::Expense, "rent", 100.0);
        ledger.recompute_totals();

        let aggregates = ledger.aggregates();
        assert_eq!(aggregates.total_income, 0.0);
        assert_eq!(aggregates.budget, -100.0);
        assert_eq!(aggregates.overall_percentage, None);
    }

    #[test]
    fn recompute_totals_is_idempotent() {
        let mut ledger = Ledger::new();
        add(&mut ledger, Category::Income, "salary", 1234.56);
        add(&mut ledger, Category::Expense, "rent", 432.10);
        ledger.recompute_totals();
        let first = ledger.aggregates();
        ledger.recompute_totals();
        assert_eq!(ledger.aggregates(), first);
    }

    #[test]
    fn aggregates_stay_stale_until_recomputed() {
        let mut ledger = Ledger::new();
        add(&mut ledger, Category::Income, "salary", 1000.0);
        assert_eq!(ledger.aggregates(), Aggregates::default());

        ledger.recompute_totals();
        assert_eq!(ledger.aggregates().total_income, 1000.0);

        add(&mut ledger, Category::Income, "bonus", 500.0);
        assert_eq!(ledger.aggregates().total_income, 1000.0);

        ledger.recompute_totals();
        assert_eq!(ledger.aggregates().total_income, 1500.0);
    }

    #[test]
    fn expense_percentages_follow_entry_order() {
        let mut ledger = Ledger::new();
        add(&mut ledger, Category::Income, "salary", 200.0);
        add(&mut ledger, Category::Expense, "rent", 50.0);
        add(&mut ledger, Category::Expense, "food", 150.0);
        ledger.recompute_totals();
        ledger.recompute_expense_percentages();

        assert_eq!(ledger.expense_percentages(), vec![Some(25), Some(75)]);
    }

    #[test]
    fn expense_percentages_are_undefined_without_income() {
        let mut ledger = Ledger::new();
        add(&mut ledger, Category::Expense, "rent", 50.0);
        add(&mut ledger, Category::Expense, "food", 150.0);
        ledger.recompute_totals();
        ledger.recompute_expense_percentages();

        assert_eq!(ledger.expense_percentages(), vec![None, None]);
    }

    #[test]
    fn percentages_lag_behind_totals_until_recomputed() {
        let mut ledger = Ledger::new();
        add(&mut ledger, Category::Income, "salary", 100.0);
        add(&mut ledger, Category::Expense, "rent", 50.0);
        ledger.recompute_totals();

        // Totals are fresh, per-entry percentages are not.
        assert_eq!(ledger.expense_percentages(), vec![None]);

        ledger.recompute_expense_percentages();
        assert_eq!(ledger.expense_percentages(), vec![Some(50)]);
    }

    #[test]
    fn rejects_blank_description() {
        let mut ledger = Ledger::new();
        let err = ledger
            .add_entry(Category::Income, "   ", 10.0)
            .expect_err("blank description");
        assert!(matches!(err, LedgerError::InvalidEntry { .. }));
        assert!(ledger.is_empty());
    }

    #[test]
    fn rejects_non_positive_and_non_finite_values() {
        let mut ledger = Ledger::new();
        for value in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            assert!(ledger.add_entry(Category::Expense, "rent", value).is_err());
        }
        assert!(ledger.is_empty());
    }

    #[test]
    fn add_entry_returns_the_created_entry() {
        let mut ledger = Ledger::new();
        let entry = ledger
            .add_entry(Category::Expense, "rent", 500.0)
            .expect("valid entry");
        assert_eq!(entry.id, 0);
        assert_eq!(entry.description, "rent");
        assert_eq!(entry.value, 500.0);
        assert_eq!(entry.category, Category::Expense);
        assert_eq!(entry.percentage_of_income, None);
    }
}
