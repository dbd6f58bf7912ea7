use budgeter::{
    init,
    ledger::{Category, Ledger},
};

#[test]
fn full_session_flow() {
    init();

    let mut ledger = Ledger::new();
    ledger
        .add_entry(Category::Income, "salary", 2000.0)
        .expect("income");
    ledger
        .add_entry(Category::Expense, "rent", 500.0)
        .expect("expense");
    ledger
        .add_entry(Category::Expense, "groceries", 300.0)
        .expect("expense");

    ledger.recompute_totals();
    ledger.recompute_expense_percentages();

    let aggregates = ledger.aggregates();
    assert_eq!(aggregates.total_income, 2000.0);
    assert_eq!(aggregates.total_expense, 800.0);
    assert_eq!(aggregates.budget, 1200.0);
    assert_eq!(aggregates.overall_percentage, Some(40));
    assert_eq!(ledger.expense_percentages(), vec![Some(25), Some(15)]);

    // Removing an income source pushes the budget negative and undefines
    // every percentage on the next recompute.
    ledger.delete_entry(Category::Income, 0);
    ledger.recompute_totals();
    ledger.recompute_expense_percentages();

    let aggregates = ledger.aggregates();
    assert_eq!(aggregates.total_income, 0.0);
    assert_eq!(aggregates.budget, -800.0);
    assert_eq!(aggregates.overall_percentage, None);
    assert_eq!(ledger.expense_percentages(), vec![None, None]);
}

#[test]
fn id_assignment_survives_interleaved_deletions() {
    let mut ledger = Ledger::new();
    for description in ["a", "b", "c"] {
        ledger
            .add_entry(Category::Income, description, 10.0)
            .expect("income");
    }

    ledger.delete_entry(Category::Income, 2);
    let reused = ledger
        .add_entry(Category::Income, "d", 10.0)
        .expect("income")
        .id;
    assert_eq!(reused, 2);

    ledger.delete_entry(Category::Income, 0);
    let next = ledger
        .add_entry(Category::Income, "e", 10.0)
        .expect("income")
        .id;
    assert_eq!(next, 3);

    let ids: Vec<u32> = ledger
        .entries(Category::Income)
        .iter()
        .map(|entry| entry.id)
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn inspect_serialization_includes_entries_and_aggregates() {
    let mut ledger = Ledger::new();
    ledger
        .add_entry(Category::Expense, "rent", 500.0)
        .expect("expense");
    ledger.recompute_totals();

    let json = serde_json::to_string(&ledger).expect("serializes");
    assert!(json.contains("\"rent\""));
    assert!(json.contains("\"total_expense\":500.0"));
}
