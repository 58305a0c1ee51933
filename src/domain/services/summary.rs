use chrono::{Datelike, Days, Months, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::models::transaction::{Transaction, KIND_INCOME};

/// One (year, month) chart bucket holding the summed amount of one kind.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct MonthlyBucket {
    pub year: i32,
    pub month: u32,
    pub total: f64,
}

/// Inclusive calendar-month bounds containing `today`.
pub fn month_bounds(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = today.with_day(1).unwrap_or(today);
    let end = start
        .checked_add_months(Months::new(1))
        .and_then(|next| next.checked_sub_days(Days::new(1)))
        .unwrap_or(today);
    (start, end)
}

/// Start of the trailing six-month chart window. The partial start month is
/// included; chrono clamps the day when the target month is shorter.
pub fn chart_window_start(today: NaiveDate) -> NaiveDate {
    today.checked_sub_months(Months::new(6)).unwrap_or(today)
}

/// Buckets transactions by (year, month, kind) and splits the result into a
/// revenue sequence and an expense sequence, both ordered year then month
/// ascending.
pub fn monthly_buckets(rows: &[Transaction]) -> (Vec<MonthlyBucket>, Vec<MonthlyBucket>) {
    let mut revenue: BTreeMap<(i32, u32), f64> = BTreeMap::new();
    let mut expenses: BTreeMap<(i32, u32), f64> = BTreeMap::new();

    for row in rows {
        let key = (row.date.year(), row.date.month());
        let buckets = if row.kind == KIND_INCOME { &mut revenue } else { &mut expenses };
        *buckets.entry(key).or_insert(0.0) += row.amount;
    }

    (into_sorted(revenue), into_sorted(expenses))
}

fn into_sorted(buckets: BTreeMap<(i32, u32), f64>) -> Vec<MonthlyBucket> {
    buckets
        .into_iter()
        .map(|((year, month), total)| MonthlyBucket { year, month, total })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::transaction::{NewTransactionParams, KIND_EXPENSE};

    fn txn(kind: &str, amount: f64, date: &str) -> Transaction {
        Transaction::new(NewTransactionParams {
            company_id: "c1".into(),
            kind: kind.into(),
            amount,
            description: "t".into(),
            date: date.parse().unwrap(),
            category_id: None,
            client_id: None,
            attachment_url: None,
            created_by: "u1".into(),
        })
    }

    #[test]
    fn test_month_bounds_regular_month() {
        let (start, end) = month_bounds("2024-03-15".parse().unwrap());
        assert_eq!(start, "2024-03-01".parse::<NaiveDate>().unwrap());
        assert_eq!(end, "2024-03-31".parse::<NaiveDate>().unwrap());
    }

    #[test]
    fn test_month_bounds_february_leap_year() {
        let (start, end) = month_bounds("2024-02-29".parse().unwrap());
        assert_eq!(start, "2024-02-01".parse::<NaiveDate>().unwrap());
        assert_eq!(end, "2024-02-29".parse::<NaiveDate>().unwrap());
    }

    #[test]
    fn test_month_bounds_december_crosses_year() {
        let (start, end) = month_bounds("2023-12-05".parse().unwrap());
        assert_eq!(start, "2023-12-01".parse::<NaiveDate>().unwrap());
        assert_eq!(end, "2023-12-31".parse::<NaiveDate>().unwrap());
    }

    #[test]
    fn test_chart_window_start_clamps_day() {
        // Six months before Aug 31 is Feb 28/29, not an invalid Feb 31.
        let start = chart_window_start("2024-08-31".parse().unwrap());
        assert_eq!(start, "2024-02-29".parse::<NaiveDate>().unwrap());
    }

    #[test]
    fn test_monthly_buckets_split_and_ordered() {
        let rows = vec![
            txn(KIND_INCOME, 500.0, "2024-03-10"),
            txn(KIND_INCOME, 250.0, "2024-01-20"),
            txn(KIND_INCOME, 100.0, "2024-03-02"),
            txn(KIND_EXPENSE, 75.0, "2024-02-14"),
            txn(KIND_EXPENSE, 25.0, "2023-12-01"),
        ];

        let (revenue, expenses) = monthly_buckets(&rows);

        assert_eq!(
            revenue,
            vec![
                MonthlyBucket { year: 2024, month: 1, total: 250.0 },
                MonthlyBucket { year: 2024, month: 3, total: 600.0 },
            ]
        );
        assert_eq!(
            expenses,
            vec![
                MonthlyBucket { year: 2023, month: 12, total: 25.0 },
                MonthlyBucket { year: 2024, month: 2, total: 75.0 },
            ]
        );
    }

    #[test]
    fn test_monthly_buckets_empty() {
        let (revenue, expenses) = monthly_buckets(&[]);
        assert!(revenue.is_empty());
        assert!(expenses.is_empty());
    }
}
