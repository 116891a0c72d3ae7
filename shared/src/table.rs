//! Row model for the subscription table.
//!
//! Maps transaction records to the already formatted cell values the table
//! renders, so the component itself only deals with markup.

use crate::format::{format_currency, format_date_or_raw};
use crate::pagination::visible_range;
use crate::{BalanceDirection, Color, Theme, TransactionRecord};

/// A column of the table header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadCell {
    pub id: &'static str,
    pub numeric: bool,
    pub label: &'static str,
}

pub const SUBSCRIPTION_COLUMNS: [HeadCell; 4] = [
    HeadCell { id: "description", numeric: false, label: "Action" },
    HeadCell { id: "balanceChange", numeric: false, label: "Balance change" },
    HeadCell { id: "date", numeric: false, label: "Date" },
    HeadCell { id: "paidUntil", numeric: false, label: "Paid until" },
];

#[derive(Debug, Clone, PartialEq)]
pub struct BalanceChip {
    pub label: String,
    pub color: Color,
}

impl BalanceChip {
    /// Credits get a "+" prefix and the secondary color, everything else the
    /// dark error color.
    pub fn for_amount(amount: f64, theme: &Theme) -> Self {
        match BalanceDirection::of(amount) {
            BalanceDirection::Credit => Self {
                label: format!("+{}", format_currency(amount)),
                color: theme.palette.secondary.main.clone(),
            },
            BalanceDirection::Debit => Self {
                label: format_currency(amount),
                color: theme.palette.error.dark.clone(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionRow {
    pub description: String,
    pub balance_change: BalanceChip,
    pub date: String,
    /// Empty when the record has no paid-until date or it is 0
    pub paid_until: String,
}

impl SubscriptionRow {
    pub fn from_record(record: &TransactionRecord, theme: &Theme) -> Self {
        Self {
            description: record.description.clone(),
            balance_change: BalanceChip::for_amount(record.balance_change, theme),
            date: format_date_or_raw(record.timestamp),
            paid_until: record
                .paid_until
                .filter(|&paid_until| paid_until != 0)
                .map(format_date_or_raw)
                .unwrap_or_default(),
        }
    }
}

/// Rows for one page, in input order.
pub fn rows_for_page(
    transactions: &[TransactionRecord],
    page: usize,
    rows_per_page: usize,
    theme: &Theme,
) -> Vec<SubscriptionRow> {
    transactions[visible_range(page, rows_per_page, transactions.len())]
        .iter()
        .map(|record| SubscriptionRow::from_record(record, theme))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::format_date;
    use crate::PAGE_SIZE;

    fn create_test_transactions(count: usize) -> Vec<TransactionRecord> {
        (0..count)
            .map(|i| {
                let timestamp = 1_700_000_000 + i as i64 * 86_400;
                TransactionRecord::new(format!("Transaction {}", i + 1), 10.0, timestamp)
            })
            .collect()
    }

    #[test]
    fn test_column_labels() {
        let labels: Vec<_> = SUBSCRIPTION_COLUMNS.iter().map(|c| c.label).collect();
        assert_eq!(labels, ["Action", "Balance change", "Date", "Paid until"]);
        assert!(SUBSCRIPTION_COLUMNS.iter().all(|c| !c.numeric));
    }

    #[test]
    fn test_credit_chip() {
        let theme = Theme::default();
        let chip = BalanceChip::for_amount(50.0, &theme);

        assert_eq!(chip.label, "+$50.00");
        assert_eq!(chip.color, theme.palette.secondary.main);
    }

    #[test]
    fn test_debit_and_zero_chip() {
        let theme = Theme::default();

        let debit = BalanceChip::for_amount(-20.0, &theme);
        assert_eq!(debit.label, "-$20.00");
        assert_eq!(debit.color, theme.palette.error.dark);

        let zero = BalanceChip::for_amount(0.0, &theme);
        assert_eq!(zero.label, "$0.00");
        assert_eq!(zero.color, theme.palette.error.dark);
    }

    #[test]
    fn test_paid_until_cell() {
        let theme = Theme::default();
        let without = TransactionRecord::new("Renewal", -9.99, 1_736_899_200);
        let with = without.clone().with_paid_until(1_739_577_600);

        assert_eq!(SubscriptionRow::from_record(&without, &theme).paid_until, "");
        assert_eq!(
            SubscriptionRow::from_record(&with, &theme).paid_until,
            format_date(1_739_577_600).unwrap()
        );
        assert_eq!(SubscriptionRow::from_record(&with, &theme).date, "January 15, 2025");
    }

    #[test]
    fn test_zero_paid_until_is_treated_as_absent() {
        let theme = Theme::default();
        let record = TransactionRecord::new("Renewal", -9.99, 1_736_899_200).with_paid_until(0);

        let row = SubscriptionRow::from_record(&record, &theme);

        assert_eq!(row.paid_until, "");
        assert_eq!(row.date, "January 15, 2025");
    }

    #[test]
    fn test_rows_for_page_keeps_order() {
        let theme = Theme::default();
        let transactions = create_test_transactions(30);

        let first = rows_for_page(&transactions, 0, PAGE_SIZE, &theme);
        let second = rows_for_page(&transactions, 1, PAGE_SIZE, &theme);

        assert_eq!(first.len(), 25);
        assert_eq!(second.len(), 5);
        assert_eq!(first[0].description, "Transaction 1");
        assert_eq!(first[24].description, "Transaction 25");
        assert_eq!(second[0].description, "Transaction 26");
        assert_eq!(second[4].description, "Transaction 30");
    }

    #[test]
    fn test_rows_past_the_end_are_empty() {
        let transactions = create_test_transactions(3);
        assert!(rows_for_page(&transactions, 4, PAGE_SIZE, &Theme::default()).is_empty());
    }
}
