mod config;
pub mod error;
mod queries;
mod transfer_tx;

use futures::future::BoxFuture;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::instrument;

pub use config::*;
pub use error::*;
pub use queries::*;
pub use transfer_tx::*;

/// Runs units of work against the bank database, each inside its own transaction.
#[derive(Clone)]
pub struct Store {
    pool: PgPool,
    config: StoreConfig,
}

impl Store {
    pub fn new(pool: &PgPool, config: StoreConfig) -> Self {
        Self {
            pool: pool.clone(),
            config,
        }
    }

    /// Record store bound to a pooled connection, outside of any transaction.
    pub async fn queries(&self) -> Result<PoolQueries, StoreError> {
        let conn = self.pool.acquire().await?;
        Ok(Queries::new(conn))
    }

    /// Runs `unit_of_work` inside a new transaction. Commits when it succeeds,
    /// rolls back otherwise. Every read and write of the unit of work must go
    /// through the `TxQueries` it receives.
    #[instrument(name = "store.execute_in_transaction", skip_all, err)]
    pub async fn execute_in_transaction<T, F>(&self, unit_of_work: F) -> Result<T, StoreError>
    where
        T: Send,
        F: for<'q> FnOnce(&'q mut TxQueries) -> BoxFuture<'q, Result<T, StoreError>> + Send,
    {
        let tx: Transaction<'static, Postgres> = self.pool.begin().await?;
        let mut queries = Queries::new(tx);
        let result = unit_of_work(&mut queries).await;
        let tx = queries.into_inner();
        match result {
            Ok(value) => {
                tx.commit().await.map_err(StoreError::Sqlx)?;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback) = tx.rollback().await {
                    tracing::error!(%err, %rollback, "rollback failed");
                    return Err(StoreError::RollbackFailed {
                        source: Box::new(err),
                        rollback,
                    });
                }
                Err(err)
            }
        }
    }
}
