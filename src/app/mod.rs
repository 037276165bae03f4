mod config;
pub mod error;

use sqlx::PgPool;
use tracing::instrument;

use crate::{account::*, entry::*, primitives::*, store::*, transfer::*};
pub use config::*;
use error::ApplicationError;

pub async fn run_migrations(pool: &PgPool) -> Result<(), ApplicationError> {
    sqlx::migrate!().run(pool).await?;
    Ok(())
}

pub struct App {
    store: Store,
}

impl App {
    pub async fn run(pool: PgPool, config: AppConfig) -> Result<Self, ApplicationError> {
        run_migrations(&pool).await?;
        Ok(Self {
            store: Store::new(&pool, config.store),
        })
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    #[instrument(name = "app.create_account", skip(self), err)]
    pub async fn create_account(
        &self,
        new_account: NewAccount,
    ) -> Result<Account, ApplicationError> {
        let mut queries = self.store.queries().await?;
        Ok(queries.create_account(new_account).await?)
    }

    #[instrument(name = "app.get_account", skip(self), err)]
    pub async fn get_account(&self, id: AccountId) -> Result<Account, ApplicationError> {
        let mut queries = self.store.queries().await?;
        Ok(queries.get_account(id).await?)
    }

    #[instrument(name = "app.list_accounts", skip(self), err)]
    pub async fn list_accounts(
        &self,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Account>, ApplicationError> {
        let mut queries = self.store.queries().await?;
        Ok(queries.list_accounts(limit, offset).await?)
    }

    #[instrument(name = "app.delete_account", skip(self), err)]
    pub async fn delete_account(&self, id: AccountId) -> Result<(), ApplicationError> {
        let mut queries = self.store.queries().await?;
        Ok(queries.delete_account(id).await?)
    }

    #[instrument(name = "app.list_entries", skip(self), err)]
    pub async fn list_entries(
        &self,
        account_id: AccountId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Entry>, ApplicationError> {
        let mut queries = self.store.queries().await?;
        Ok(queries.list_entries(account_id, limit, offset).await?)
    }

    #[instrument(name = "app.list_transfers", skip(self), err)]
    pub async fn list_transfers(
        &self,
        account_id: AccountId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Transfer>, ApplicationError> {
        let mut queries = self.store.queries().await?;
        Ok(queries
            .list_transfers(account_id, account_id, limit, offset)
            .await?)
    }

    #[instrument(name = "app.transfer", skip(self), err)]
    pub async fn transfer(
        &self,
        from_account_id: AccountId,
        to_account_id: AccountId,
        amount: i64,
    ) -> Result<TransferResult, ApplicationError> {
        Ok(self
            .store
            .transfer_funds(TransferParams {
                from_account_id,
                to_account_id,
                amount,
            })
            .await?)
    }
}
