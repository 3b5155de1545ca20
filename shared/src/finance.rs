//! Income and expense aggregation

use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Transaction, TransactionType};

/// Aggregated totals for the finance dashboard
///
/// Monthly figures cover the calendar month containing `today`; `net`
/// subtracts expense magnitudes from income over all time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceSummary {
    pub monthly_income: Decimal,
    pub monthly_expenses: Decimal,
    pub monthly_net: Decimal,
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub net: Decimal,
}

impl FinanceSummary {
    /// Sum income and expense magnitudes, overall and for the current month.
    /// The month window is inclusive on both ends.
    pub fn compute(transactions: &[Transaction], today: NaiveDate) -> Self {
        let (month_start, month_end) = month_bounds(today);

        let mut monthly_income = Decimal::ZERO;
        let mut monthly_expenses = Decimal::ZERO;
        let mut total_income = Decimal::ZERO;
        let mut total_expenses = Decimal::ZERO;

        for tx in transactions {
            let in_month = tx.date >= month_start && tx.date <= month_end;
            match tx.kind {
                TransactionType::Income => {
                    total_income += tx.amount;
                    if in_month {
                        monthly_income += tx.amount;
                    }
                }
                TransactionType::Expense => {
                    total_expenses += tx.amount;
                    if in_month {
                        monthly_expenses += tx.amount;
                    }
                }
            }
        }

        FinanceSummary {
            monthly_income,
            monthly_expenses,
            monthly_net: monthly_income - monthly_expenses,
            total_income,
            total_expenses,
            net: total_income - total_expenses,
        }
    }
}

/// First and last day of `today`'s month, both inclusive
pub fn month_bounds(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = today.with_day(1).unwrap_or(today);
    let end = start
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(today);
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(id: i64, kind: TransactionType, amount: i64, date: NaiveDate) -> Transaction {
        Transaction {
            id,
            farm_id: 1,
            kind,
            amount: Decimal::from(amount),
            category: "seeds".to_string(),
            date,
            description: String::new(),
        }
    }

    #[test]
    fn test_monthly_totals_exclude_other_months() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let transactions = vec![
            tx(1, TransactionType::Income, 100, NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()),
            tx(2, TransactionType::Income, 999, NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()),
        ];

        let summary = FinanceSummary::compute(&transactions, today);
        assert_eq!(summary.monthly_income, Decimal::from(100));
        assert_eq!(summary.total_income, Decimal::from(1099));
    }

    #[test]
    fn test_month_window_inclusive_on_both_ends() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let transactions = vec![
            tx(1, TransactionType::Expense, 40, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()),
            tx(2, TransactionType::Expense, 60, NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()),
            tx(3, TransactionType::Expense, 5, NaiveDate::from_ymd_opt(2024, 5, 31).unwrap()),
            tx(4, TransactionType::Expense, 5, NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()),
        ];

        let summary = FinanceSummary::compute(&transactions, today);
        assert_eq!(summary.monthly_expenses, Decimal::from(100));
        assert_eq!(summary.total_expenses, Decimal::from(110));
    }

    #[test]
    fn test_net_subtracts_expense_magnitudes() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let transactions = vec![
            tx(1, TransactionType::Income, 500, today),
            tx(2, TransactionType::Expense, 120, today),
        ];

        let summary = FinanceSummary::compute(&transactions, today);
        assert_eq!(summary.monthly_net, Decimal::from(380));
        assert_eq!(summary.net, Decimal::from(380));
    }

    #[test]
    fn test_signed_amount_negates_expenses_only() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let income = tx(1, TransactionType::Income, 75, today);
        let expense = tx(2, TransactionType::Expense, 75, today);

        assert_eq!(income.signed_amount(), Decimal::from(75));
        assert_eq!(expense.signed_amount(), Decimal::from(-75));
        // The stored magnitude never flips
        assert_eq!(expense.amount, Decimal::from(75));
    }

    #[test]
    fn test_month_bounds_december_wraps_year() {
        let (start, end) = month_bounds(NaiveDate::from_ymd_opt(2024, 12, 10).unwrap());
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 12, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
    }
}
