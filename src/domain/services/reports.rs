use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::models::transaction::{CategoryTotal, TransactionWithRefs, KIND_INCOME};

/// Cash-flow row annotated with the balance after applying it.
#[derive(Debug, Serialize, Clone)]
pub struct CashFlowEntry {
    pub date: NaiveDate,
    pub kind: String,
    pub amount: f64,
    pub description: String,
    pub category_name: Option<String>,
    pub running_balance: f64,
}

/// Folds transactions (already ordered date then id ascending) into a
/// running balance: income adds, expense subtracts, starting at zero.
/// Returns the annotated sequence and the final balance.
pub fn with_running_balance(rows: Vec<TransactionWithRefs>) -> (Vec<CashFlowEntry>, f64) {
    let mut balance = 0.0;
    let entries = rows
        .into_iter()
        .map(|row| {
            if row.kind == KIND_INCOME {
                balance += row.amount;
            } else {
                balance -= row.amount;
            }
            CashFlowEntry {
                date: row.date,
                kind: row.kind,
                amount: row.amount,
                description: row.description,
                category_name: row.category_name,
                running_balance: balance,
            }
        })
        .collect();
    (entries, balance)
}

pub fn sum_groups(groups: &[CategoryTotal]) -> f64 {
    groups.iter().map(|g| g.total).sum()
}
