use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// One billing/subscription ledger entry as received from the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    /// Action label shown in the first column
    pub description: String,
    /// Signed amount; positive values are credits
    pub balance_change: f64,
    /// Transaction date as unix seconds
    pub timestamp: i64,
    /// End of the paid period as unix seconds, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_until: Option<i64>,
}

/// Which side of the ledger an amount falls on, used for chip coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceDirection {
    Credit,
    /// Negative or zero amounts
    Debit,
}

impl BalanceDirection {
    pub fn of(amount: f64) -> Self {
        if amount > 0.0 {
            BalanceDirection::Credit
        } else {
            BalanceDirection::Debit
        }
    }
}

impl TransactionRecord {
    pub fn new(description: impl Into<String>, balance_change: f64, timestamp: i64) -> Self {
        Self {
            description: description.into(),
            balance_change,
            timestamp,
            paid_until: None,
        }
    }

    pub fn with_paid_until(mut self, paid_until: i64) -> Self {
        self.paid_until = Some(paid_until);
        self
    }

    pub fn direction(&self) -> BalanceDirection {
        BalanceDirection::of(self.balance_change)
    }

    /// Parse a JSON array of transactions.
    ///
    /// `null` is accepted and treated as an empty list.
    pub fn list_from_json(json: &str) -> Result<Vec<TransactionRecord>> {
        let parsed: Option<Vec<TransactionRecord>> =
            serde_json::from_str(json).map_err(|e| Error::Fixture(e.to_string()))?;
        Ok(parsed.unwrap_or_default())
    }
}
