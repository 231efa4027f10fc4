use chrono::{NaiveDate, TimeZone, Utc};
use common::decimal::{dec, Amount};
use common::error::Error;
use common::model::statement::{Operation, OperationKind};
use account_service::{AccountRepository, AccountService, AccountServiceConfig, InMemoryAccountRepository};
use std::sync::Arc;
use tokio::runtime::Runtime;

// Helper function to run async tests
fn run_async<F>(test: F)
where
    F: FnOnce() -> futures::future::BoxFuture<'static, ()> + Send + 'static,
{
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        test().await;
    });
}

#[test]
fn test_create_account() {
    run_async(|| {
        Box::pin(async move {
            let service = AccountService::new();
            let account = service.create_account("111", "Alice").await.unwrap();

            assert_eq!(account.identifier, "111");
            assert_eq!(account.name, "Alice");
            assert!(account.statement.is_empty());
            assert_eq!(account.created_at.date_naive(), Utc::now().date_naive());
        })
    });
}

#[test]
fn test_create_duplicate_account() {
    run_async(|| {
        Box::pin(async move {
            let service = AccountService::new();
            service.create_account("111", "Alice").await.unwrap();

            let result = service.create_account("111", "Alice again").await;
            match result {
                Err(Error::DuplicateAccount(_)) => (),
                other => panic!("Expected DuplicateAccount error, got {:?}", other),
            }

            let accounts = service.list_accounts().await.unwrap();
            assert_eq!(accounts.iter().filter(|a| a.identifier == "111").count(), 1);
        })
    });
}

#[test]
fn test_resolve_unknown_customer() {
    run_async(|| {
        Box::pin(async move {
            let service = AccountService::new();
            service.create_account("111", "Alice").await.unwrap();

            let result = service.resolve("999").await;
            assert!(matches!(result, Err(Error::CustomerNotFound(_))));
        })
    });
}

#[test]
fn test_salary_scenario() {
    run_async(|| {
        Box::pin(async move {
            let service = AccountService::new();
            service.create_account("111", "Alice").await.unwrap();

            let account = service.resolve("111").await.unwrap();
            let credit = service.deposit(&account, Some("salary"), dec!(1000)).await.unwrap();
            assert_eq!(credit.kind, OperationKind::Credit);
            assert_eq!(credit.description.as_deref(), Some("salary"));

            let account = service.resolve("111").await.unwrap();
            let debit = service.withdraw(&account, dec!(300)).await.unwrap();
            assert_eq!(debit.kind, OperationKind::Debit);

            let account = service.resolve("111").await.unwrap();
            assert_eq!(service.get_balance(&account).await.unwrap(), dec!(700));

            let statement = service.get_statement(&account).await;
            assert_eq!(statement.len(), 2);
            assert_eq!(statement[0].amount, dec!(1000));
            assert_eq!(statement[1].amount, dec!(300));
        })
    });
}

#[test]
fn test_withdraw_from_empty_account() {
    run_async(|| {
        Box::pin(async move {
            let service = AccountService::new();
            let account = service.create_account("111", "Alice").await.unwrap();

            let result = service.withdraw(&account, dec!(50)).await;
            match result {
                Err(Error::InsufficientFunds(_)) => (),
                other => panic!("Expected InsufficientFunds error, got {:?}", other),
            }

            let account = service.resolve("111").await.unwrap();
            assert_eq!(service.get_balance(&account).await.unwrap(), Amount::ZERO);
            assert!(service.get_statement(&account).await.is_empty());
        })
    });
}

#[test]
fn test_interleaved_operations_balance() {
    run_async(|| {
        Box::pin(async move {
            let service = AccountService::with_config(&AccountServiceConfig::new(true));
            service.create_account("111", "Alice").await.unwrap();

            let deposits = [dec!(120.50), dec!(80), dec!(0), dec!(1000)];
            let withdrawals = [dec!(100), dec!(0.50), dec!(500), dec!(600)];
            let mut expected = Amount::ZERO;

            for (deposit, withdrawal) in deposits.iter().zip(withdrawals.iter()) {
                let account = service.resolve("111").await.unwrap();
                service.deposit(&account, Some("deposit"), *deposit).await.unwrap();
                expected += *deposit;

                let account = service.resolve("111").await.unwrap();
                match service.withdraw(&account, *withdrawal).await {
                    Ok(_) => expected -= *withdrawal,
                    Err(Error::InsufficientFunds(_)) => assert!(*withdrawal > expected),
                    Err(e) => panic!("Unexpected error: {:?}", e),
                }
            }

            let account = service.resolve("111").await.unwrap();
            let credits: Amount = account
                .statement
                .iter()
                .filter(|op| op.kind == OperationKind::Credit)
                .map(|op| op.amount)
                .sum();
            let debits: Amount = account
                .statement
                .iter()
                .filter(|op| op.kind == OperationKind::Debit)
                .map(|op| op.amount)
                .sum();

            assert_eq!(service.get_balance(&account).await.unwrap(), expected);
            assert_eq!(service.get_balance(&account).await.unwrap(), credits - debits);
        })
    });
}

#[test]
fn test_overflowing_deposit_keeps_account_usable() {
    run_async(|| {
        Box::pin(async move {
            let service = AccountService::new();
            let account = service.create_account("111", "Alice").await.unwrap();

            service.deposit(&account, Some("first"), Amount::MAX).await.unwrap();
            let result = service.deposit(&account, Some("second"), Amount::MAX).await;
            assert!(matches!(result, Err(Error::InvalidInput(_))));

            let account = service.resolve("111").await.unwrap();
            assert_eq!(service.get_statement(&account).await.len(), 1);
            assert_eq!(service.get_balance(&account).await.unwrap(), Amount::MAX);

            let debit = service.withdraw(&account, dec!(5)).await.unwrap();
            assert_eq!(debit.amount, dec!(5));
        })
    });
}

#[test]
fn test_deposit_without_description() {
    run_async(|| {
        Box::pin(async move {
            let service = AccountService::new();
            let account = service.create_account("111", "Alice").await.unwrap();

            let credit = service.deposit(&account, None, dec!(10)).await.unwrap();
            assert_eq!(credit.description, None);
        })
    });
}

#[test]
fn test_negative_amount_is_invalid() {
    run_async(|| {
        Box::pin(async move {
            let service = AccountService::new();
            let account = service.create_account("111", "Alice").await.unwrap();

            let result = service.deposit(&account, Some("refund"), dec!(-5)).await;
            assert!(matches!(result, Err(Error::InvalidInput(_))));

            let result = service.withdraw(&account, dec!(-5)).await;
            assert!(matches!(result, Err(Error::InvalidInput(_))));
        })
    });
}

#[test]
fn test_update_name() {
    run_async(|| {
        Box::pin(async move {
            let service = AccountService::new();
            let account = service.create_account("111", "Alice").await.unwrap();

            let updated = service.update_name(&account, "Alice Cooper").await.unwrap();
            assert_eq!(updated.name, "Alice Cooper");
            assert_eq!(updated.account_id, account.account_id);

            let account = service.resolve("111").await.unwrap();
            assert_eq!(service.get_account(&account).await.name, "Alice Cooper");
        })
    });
}

#[test]
fn test_delete_account() {
    run_async(|| {
        Box::pin(async move {
            let service = AccountService::new();
            service.create_account("111", "Alice").await.unwrap();
            service.create_account("222", "Bob").await.unwrap();

            let account = service.resolve("111").await.unwrap();
            let removed = service.delete_account(&account).await.unwrap();
            assert_eq!(removed.identifier, "111");

            assert!(matches!(service.resolve("111").await, Err(Error::CustomerNotFound(_))));
            assert!(service.resolve("222").await.is_ok());

            // A stale snapshot cannot be mutated or deleted again
            assert!(matches!(service.deposit(&account, None, dec!(1)).await, Err(Error::CustomerNotFound(_))));
            assert!(matches!(service.delete_account(&account).await, Err(Error::CustomerNotFound(_))));
        })
    });
}

#[test]
fn test_statement_by_date() {
    run_async(|| {
        Box::pin(async move {
            let repo = Arc::new(InMemoryAccountRepository::new());
            let service = AccountService::with_repository(repo.clone());
            service.create_account("111", "Alice").await.unwrap();

            // Backdate operations directly in the store
            repo.update("111", &mut |stored: &mut common::model::account::CustomerAccount| {
                let mut first = Operation::credit(Some("new year".to_string()), dec!(10));
                first.created_at = Utc.with_ymd_and_hms(2024, 1, 1, 9, 30, 0).unwrap();
                let mut second = Operation::credit(Some("day after".to_string()), dec!(20));
                second.created_at = Utc.with_ymd_and_hms(2024, 1, 2, 9, 30, 0).unwrap();
                stored.statement.push(first);
                stored.statement.push(second);
                Ok(())
            })
            .await
            .unwrap();

            let account = service.resolve("111").await.unwrap();
            let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
            let filtered = service.get_statement_by_date(&account, day).await;

            assert_eq!(filtered.len(), 1);
            assert_eq!(filtered[0].description.as_deref(), Some("new year"));
        })
    });
}
