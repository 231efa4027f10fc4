//! Statement operations and the balance calculator

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::decimal::{json_number, Amount};
use crate::error::{Error, Result};
#[cfg(feature = "utoipa")]
use crate::utoipa::ToSchema;

/// Direction of a statement operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    /// Money coming into the account
    Credit,
    /// Money leaving the account
    Debit,
}

/// A single immutable statement entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
pub struct Operation {
    /// Free text, present on credits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Non-negative amount
    #[serde(with = "json_number")]
    #[cfg_attr(feature = "utoipa", schema(value_type = f64))]
    pub amount: Amount,
    /// Credit or debit
    #[serde(rename = "type")]
    pub kind: OperationKind,
    /// Insertion timestamp
    pub created_at: DateTime<Utc>,
}

impl Operation {
    /// Create a credit timestamped now
    pub fn credit(description: Option<String>, amount: Amount) -> Self {
        Self {
            description,
            amount,
            kind: OperationKind::Credit,
            created_at: Utc::now(),
        }
    }

    /// Create a debit timestamped now
    pub fn debit(amount: Amount) -> Self {
        Self {
            description: None,
            amount,
            kind: OperationKind::Debit,
            created_at: Utc::now(),
        }
    }

    /// Apply this operation to a running balance, failing on overflow
    pub fn apply_to(&self, balance: Amount) -> Option<Amount> {
        match self.kind {
            OperationKind::Credit => balance.checked_add(self.amount),
            OperationKind::Debit => balance.checked_sub(self.amount),
        }
    }

    /// Whether the operation happened on the given calendar day (UTC)
    pub fn occurred_on(&self, date: NaiveDate) -> bool {
        self.created_at.date_naive() == date
    }
}

/// Fold a statement into its balance: credits add, debits subtract.
pub fn get_balance(statement: &[Operation]) -> Result<Amount> {
    statement.iter().try_fold(Amount::ZERO, |balance, operation| {
        operation.apply_to(balance).ok_or_else(|| {
            Error::DecimalError(format!(
                "Balance overflowed applying {:?} of {}",
                operation.kind, operation.amount
            ))
        })
    })
}

/// Operations recorded on the given calendar day, in statement order
pub fn operations_on(statement: &[Operation], date: NaiveDate) -> Vec<Operation> {
    statement
        .iter()
        .filter(|operation| operation.occurred_on(date))
        .cloned()
        .collect()
}
