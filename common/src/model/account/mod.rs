//! Customer account model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::Amount;
use crate::error::{Error, Result};
use crate::model::statement::{self, Operation};
#[cfg(feature = "utoipa")]
use crate::utoipa::ToSchema;

/// Customer account model
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
pub struct CustomerAccount {
    /// External identifier (CPF-like), unique per account
    pub identifier: String,
    /// Display name
    pub name: String,
    /// Generated account ID
    pub account_id: Uuid,
    /// Ordered, append-only list of operations
    pub statement: Vec<Operation>,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl CustomerAccount {
    /// Create an account with an empty statement
    pub fn new(identifier: &str, name: &str) -> Result<Self> {
        let identifier = validate_text("identifier", identifier)?;
        let name = validate_text("name", name)?;

        Ok(Self {
            identifier,
            name,
            account_id: Uuid::new_v4(),
            statement: Vec::new(),
            created_at: Utc::now(),
        })
    }

    /// Derived balance of the statement
    pub fn balance(&self) -> Result<Amount> {
        statement::get_balance(&self.statement)
    }

    /// Operations recorded on a calendar day
    pub fn statement_on(&self, date: NaiveDate) -> Vec<Operation> {
        statement::operations_on(&self.statement, date)
    }

    /// Replace the display name
    pub fn rename(&mut self, name: &str) -> Result<()> {
        self.name = validate_text("name", name)?;
        Ok(())
    }

    /// Append a credit, refusing one the balance could not represent
    pub fn deposit(&mut self, description: Option<&str>, amount: Amount) -> Result<&Operation> {
        validate_amount(amount)?;

        let balance = self.balance()?;
        if balance.checked_add(amount).is_none() {
            return Err(Error::InvalidInput(format!(
                "Deposit of {} to account {} would overflow its balance of {}",
                amount, self.identifier, balance
            )));
        }

        self.statement.push(Operation::credit(description.map(str::to_string), amount));
        Ok(self.last_operation())
    }

    /// Append a debit if the current balance covers it
    pub fn withdraw(&mut self, amount: Amount) -> Result<&Operation> {
        validate_amount(amount)?;

        let balance = self.balance()?;
        if amount > balance {
            return Err(Error::InsufficientFunds(format!(
                "Cannot withdraw {} from account {}: balance is {}",
                amount, self.identifier, balance
            )));
        }

        self.statement.push(Operation::debit(amount));
        Ok(self.last_operation())
    }

    fn last_operation(&self) -> &Operation {
        // Only called right after a push
        &self.statement[self.statement.len() - 1]
    }
}

fn validate_text(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidInput(format!("{} must not be empty", field)));
    }
    Ok(trimmed.to_string())
}

fn validate_amount(amount: Amount) -> Result<()> {
    if amount < Amount::ZERO {
        return Err(Error::InvalidInput(format!("Amount must not be negative: {}", amount)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::dec;
    use crate::model::statement::OperationKind;

    #[test]
    fn test_new_account_is_empty() {
        let account = CustomerAccount::new("111", "Alice").unwrap();

        assert_eq!(account.identifier, "111");
        assert_eq!(account.name, "Alice");
        assert!(account.statement.is_empty());
        assert_eq!(account.balance().unwrap(), Amount::ZERO);
        assert_ne!(account.account_id, Uuid::nil());
    }

    #[test]
    fn test_new_account_rejects_blank_fields() {
        assert!(matches!(CustomerAccount::new("  ", "Alice"), Err(Error::InvalidInput(_))));
        assert!(matches!(CustomerAccount::new("111", ""), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_deposit_then_withdraw() {
        let mut account = CustomerAccount::new("111", "Alice").unwrap();

        let credit = account.deposit(Some("salary"), dec!(1000)).unwrap();
        assert_eq!(credit.kind, OperationKind::Credit);

        let debit = account.withdraw(dec!(300)).unwrap();
        assert_eq!(debit.kind, OperationKind::Debit);
        assert_eq!(debit.description, None);

        assert_eq!(account.balance().unwrap(), dec!(700));
        assert_eq!(account.statement.len(), 2);
    }

    #[test]
    fn test_withdraw_exact_balance() {
        let mut account = CustomerAccount::new("111", "Alice").unwrap();
        account.deposit(Some("gift"), dec!(50)).unwrap();

        account.withdraw(dec!(50)).unwrap();
        assert_eq!(account.balance().unwrap(), Amount::ZERO);
    }

    #[test]
    fn test_insufficient_funds_leaves_statement_unchanged() {
        let mut account = CustomerAccount::new("111", "Alice").unwrap();

        let result = account.withdraw(dec!(50));
        assert!(matches!(result, Err(Error::InsufficientFunds(_))));
        assert!(account.statement.is_empty());
        assert_eq!(account.balance().unwrap(), Amount::ZERO);
    }

    #[test]
    fn test_negative_amounts_are_rejected() {
        let mut account = CustomerAccount::new("111", "Alice").unwrap();

        assert!(matches!(account.deposit(Some("oops"), dec!(-1)), Err(Error::InvalidInput(_))));
        assert!(matches!(account.withdraw(dec!(-1)), Err(Error::InvalidInput(_))));
        assert!(account.statement.is_empty());

        // Zero is a valid amount
        account.deposit(None, Amount::ZERO).unwrap();
        assert_eq!(account.statement.len(), 1);
    }

    #[test]
    fn test_deposit_that_would_overflow_is_rejected() {
        let mut account = CustomerAccount::new("111", "Alice").unwrap();

        account.deposit(Some("first"), Amount::MAX).unwrap();
        let result = account.deposit(Some("second"), Amount::MAX);

        assert!(matches!(result, Err(Error::InvalidInput(_))));
        assert_eq!(account.statement.len(), 1);
        assert_eq!(account.balance().unwrap(), Amount::MAX);

        // The account stays usable
        account.withdraw(dec!(1)).unwrap();
        account.deposit(None, dec!(1)).unwrap();
        assert_eq!(account.balance().unwrap(), Amount::MAX);
    }

    #[test]
    fn test_rename() {
        let mut account = CustomerAccount::new("111", "Alice").unwrap();

        account.rename("Alice Smith").unwrap();
        assert_eq!(account.name, "Alice Smith");

        assert!(account.rename(" ").is_err());
        assert_eq!(account.name, "Alice Smith");
    }
}
