//! Account service implementation

use std::sync::Arc;

use chrono::NaiveDate;
use common::decimal::Amount;
use common::error::{Error, ErrorExt, Result};
use common::model::account::CustomerAccount;
use common::model::statement::Operation;
use tracing::{debug, info, warn};

use crate::config::AccountServiceConfig;
use crate::repository::{AccountRepository, InMemoryAccountRepository};

/// Account service for managing customer accounts and their statements.
///
/// Operations other than creation take the account returned by
/// [`AccountService::resolve`], so nothing runs for an unknown identifier.
pub struct AccountService {
    /// Repository for account data
    repo: Arc<dyn AccountRepository>,
    /// Log every appended operation
    transaction_logging: bool,
}

impl AccountService {
    /// Create a new account service backed by an empty in-memory store
    pub fn new() -> Self {
        Self::with_repository(Arc::new(InMemoryAccountRepository::new()))
    }

    /// Create a new account service on top of an existing repository
    pub fn with_repository(repo: Arc<dyn AccountRepository>) -> Self {
        Self {
            repo,
            transaction_logging: false,
        }
    }

    /// Create a new account service with a configuration
    pub fn with_config(config: &AccountServiceConfig) -> Self {
        Self {
            repo: Arc::new(InMemoryAccountRepository::new()),
            transaction_logging: config.transaction_logging,
        }
    }

    /// Resolve an identifier into its account, failing with `CustomerNotFound`
    pub async fn resolve(&self, identifier: &str) -> Result<CustomerAccount> {
        debug!("Resolving customer {}", identifier);
        self.repo
            .find(identifier)
            .await?
            .ok_or_else(|| Error::CustomerNotFound(format!("No account for {}", identifier)))
    }

    /// Create a new account
    pub async fn create_account(&self, identifier: &str, name: &str) -> Result<CustomerAccount> {
        let account = CustomerAccount::new(identifier, name)?;
        let account = self.repo.insert(account).await?;

        info!("Created account {} for customer {}", account.account_id, account.identifier);
        Ok(account)
    }

    /// Snapshot of a resolved account
    pub async fn get_account(&self, account: &CustomerAccount) -> CustomerAccount {
        account.clone()
    }

    /// All accounts currently held by the store
    pub async fn list_accounts(&self) -> Result<Vec<CustomerAccount>> {
        self.repo.list().await
    }

    /// Replace the account's display name
    pub async fn update_name(&self, account: &CustomerAccount, name: &str) -> Result<CustomerAccount> {
        let updated = self
            .repo
            .update(&account.identifier, &mut |stored: &mut CustomerAccount| stored.rename(name))
            .await
            .with_context(|| format!("Failed to rename account {}", account.identifier))?;

        info!("Renamed account {}", updated.identifier);
        Ok(updated)
    }

    /// Remove the account from the store
    pub async fn delete_account(&self, account: &CustomerAccount) -> Result<CustomerAccount> {
        let removed = self
            .repo
            .remove(&account.identifier)
            .await
            .with_context(|| format!("Failed to delete account {}", account.identifier))?;

        info!("Deleted account {} for customer {}", removed.account_id, removed.identifier);
        Ok(removed)
    }

    /// Full statement in insertion order
    pub async fn get_statement(&self, account: &CustomerAccount) -> Vec<Operation> {
        account.statement.clone()
    }

    /// Operations recorded on the given calendar day
    pub async fn get_statement_by_date(&self, account: &CustomerAccount, date: NaiveDate) -> Vec<Operation> {
        debug!("Filtering statement of {} by {}", account.identifier, date);
        account.statement_on(date)
    }

    /// Derived balance of the account
    pub async fn get_balance(&self, account: &CustomerAccount) -> Result<Amount> {
        account.balance()
    }

    /// Credit the account
    pub async fn deposit(
        &self,
        account: &CustomerAccount,
        description: Option<&str>,
        amount: Amount,
    ) -> Result<Operation> {
        info!("Depositing {} to account {}", amount, account.identifier);

        let updated = self
            .repo
            .update(&account.identifier, &mut |stored: &mut CustomerAccount| {
                stored.deposit(description, amount).map(|_| ())
            })
            .await
            .with_context(|| format!("Failed to deposit to account {}", account.identifier))?;

        self.appended(&updated)
    }

    /// Debit the account.
    ///
    /// The balance check and the append happen under the same store guard.
    pub async fn withdraw(&self, account: &CustomerAccount, amount: Amount) -> Result<Operation> {
        info!("Withdrawing {} from account {}", amount, account.identifier);

        let updated = self
            .repo
            .update(&account.identifier, &mut |stored: &mut CustomerAccount| {
                stored.withdraw(amount).map(|_| ())
            })
            .await
            .map_err(|e| {
                if let Error::InsufficientFunds(reason) = &e {
                    warn!("Rejected withdrawal: {}", reason);
                }
                e
            })
            .with_context(|| format!("Failed to withdraw from account {}", account.identifier))?;

        self.appended(&updated)
    }

    fn appended(&self, account: &CustomerAccount) -> Result<Operation> {
        let operation = account
            .statement
            .last()
            .cloned()
            .ok_or_else(|| Error::Internal(format!("Statement of {} is empty after append", account.identifier)))?;

        if self.transaction_logging {
            info!(
                "Appended {:?} of {} to account {} (balance {})",
                operation.kind,
                operation.amount,
                account.identifier,
                account.balance()?
            );
        }

        Ok(operation)
    }
}

impl Default for AccountService {
    fn default() -> Self {
        Self::new()
    }
}
