//! Repository for customer accounts

use async_trait::async_trait;
use common::error::{Error, Result};
use common::model::account::CustomerAccount;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::debug;

/// Account repository trait defining the interface for account storage
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find an account by identifier
    async fn find(&self, identifier: &str) -> Result<Option<CustomerAccount>>;

    /// Insert a new account, failing if the identifier is taken
    async fn insert(&self, account: CustomerAccount) -> Result<CustomerAccount>;

    /// Remove the account registered under the identifier
    async fn remove(&self, identifier: &str) -> Result<CustomerAccount>;

    /// Apply a mutation with exclusive access to the account.
    ///
    /// The stored account is only replaced when the mutation succeeds, so a
    /// failing mutation leaves it untouched.
    async fn update(&self, identifier: &str, mutation: &mut (dyn for<'a> FnMut(&'a mut CustomerAccount) -> Result<()> + Send)) -> Result<CustomerAccount>;

    /// All stored accounts
    async fn list(&self) -> Result<Vec<CustomerAccount>>;

    /// Number of stored accounts
    async fn len(&self) -> Result<usize>;
}

/// In-memory repository for customer accounts
pub struct InMemoryAccountRepository {
    /// Accounts by identifier
    pub accounts: DashMap<String, CustomerAccount>,
}

impl InMemoryAccountRepository {
    /// Create a new, empty in-memory repository
    pub fn new() -> Self {
        Self {
            accounts: DashMap::new(),
        }
    }
}

impl Default for InMemoryAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn find(&self, identifier: &str) -> Result<Option<CustomerAccount>> {
        Ok(self.accounts.get(identifier).map(|a| a.clone()))
    }

    async fn insert(&self, account: CustomerAccount) -> Result<CustomerAccount> {
        // The entry guard makes check-and-insert atomic per identifier
        match self.accounts.entry(account.identifier.clone()) {
            Entry::Occupied(_) => Err(Error::DuplicateAccount(format!(
                "Account already registered for {}",
                account.identifier
            ))),
            Entry::Vacant(slot) => {
                debug!("Storing account {} ({})", account.identifier, account.account_id);
                slot.insert(account.clone());
                Ok(account)
            }
        }
    }

    async fn remove(&self, identifier: &str) -> Result<CustomerAccount> {
        self.accounts
            .remove(identifier)
            .map(|(_, account)| account)
            .ok_or_else(|| Error::CustomerNotFound(format!("No account for {}", identifier)))
    }

    async fn update(&self, identifier: &str, mutation: &mut (dyn for<'a> FnMut(&'a mut CustomerAccount) -> Result<()> + Send)) -> Result<CustomerAccount> {
        let mut stored = self
            .accounts
            .get_mut(identifier)
            .ok_or_else(|| Error::CustomerNotFound(format!("No account for {}", identifier)))?;

        let mut candidate = stored.clone();
        mutation(&mut candidate)?;
        *stored = candidate.clone();

        Ok(candidate)
    }

    async fn list(&self) -> Result<Vec<CustomerAccount>> {
        Ok(self.accounts.iter().map(|entry| entry.value().clone()).collect())
    }

    async fn len(&self) -> Result<usize> {
        Ok(self.accounts.len())
    }
}
