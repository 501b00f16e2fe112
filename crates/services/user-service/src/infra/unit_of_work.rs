//! Unit of Work: one store transaction per cascading write.
//!
//! The closure receives the open transaction; every statement it issues
//! through that handle commits or rolls back together.

use std::future::Future;
use std::pin::Pin;

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use common::{AppError, AppResult};

/// Boxed future borrowing the transaction for its whole lifetime
pub type TxFuture<'a, T> = Pin<Box<dyn Future<Output = AppResult<T>> + Send + 'a>>;

/// Execute a closure within a transaction.
///
/// The transaction is committed when the closure returns `Ok` and rolled
/// back when it returns `Err`; the closure's error is returned unchanged.
pub async fn run_in_transaction<F, T>(db: &DatabaseConnection, f: F) -> AppResult<T>
where
    F: for<'a> FnOnce(&'a DatabaseTransaction) -> TxFuture<'a, T> + Send,
    T: Send,
{
    let txn = db.begin().await.map_err(AppError::from)?;

    match f(&txn).await {
        Ok(result) => {
            txn.commit().await.map_err(AppError::from)?;
            Ok(result)
        }
        Err(e) => {
            if let Err(rollback_err) = txn.rollback().await {
                tracing::error!("Transaction rollback failed: {}", rollback_err);
            }
            Err(e)
        }
    }
}

/// Simpler API for executing transactional operations.
///
/// The body runs inside `async move`, so it takes ownership of whatever it
/// captures besides the transaction handle.
#[macro_export]
macro_rules! with_transaction {
    ($db:expr, |$txn:ident| $body:expr) => {
        $crate::infra::run_in_transaction($db, |$txn| Box::pin(async move { $body })).await
    };
}
