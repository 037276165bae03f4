use sqlx::PgConnection;

use std::ops::DerefMut;

use super::entity::*;
use crate::{primitives::*, store::*};

impl<C> Queries<C>
where
    C: DerefMut<Target = PgConnection> + Send,
{
    pub async fn create_account(&mut self, new_account: NewAccount) -> Result<Account, StoreError> {
        let account = sqlx::query_as::<_, Account>(
            r#"INSERT INTO accounts (owner, balance, currency)
            VALUES ($1, $2, $3)
            RETURNING id, owner, balance, currency, created_at"#,
        )
        .bind(new_account.owner)
        .bind(new_account.balance)
        .bind(new_account.currency)
        .fetch_one(&mut *self.conn)
        .await?;
        Ok(account)
    }

    pub async fn get_account(&mut self, id: AccountId) -> Result<Account, StoreError> {
        sqlx::query_as::<_, Account>(
            r#"SELECT id, owner, balance, currency, created_at
            FROM accounts
            WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?
        .ok_or(StoreError::AccountNotFound(id))
    }

    /// Reads the account and locks its row until the surrounding transaction ends.
    /// `NO KEY UPDATE` leaves the key-share locks taken by entry and transfer
    /// inserts referencing the account unblocked.
    pub async fn get_account_for_update(&mut self, id: AccountId) -> Result<Account, StoreError> {
        sqlx::query_as::<_, Account>(
            r#"SELECT id, owner, balance, currency, created_at
            FROM accounts
            WHERE id = $1
            FOR NO KEY UPDATE"#,
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?
        .ok_or(StoreError::AccountNotFound(id))
    }

    pub async fn update_account_balance(
        &mut self,
        id: AccountId,
        balance: i64,
    ) -> Result<Account, StoreError> {
        sqlx::query_as::<_, Account>(
            r#"UPDATE accounts
            SET balance = $2
            WHERE id = $1
            RETURNING id, owner, balance, currency, created_at"#,
        )
        .bind(id)
        .bind(balance)
        .fetch_optional(&mut *self.conn)
        .await?
        .ok_or(StoreError::AccountNotFound(id))
    }

    pub async fn add_account_balance(
        &mut self,
        id: AccountId,
        delta: i64,
    ) -> Result<Account, StoreError> {
        sqlx::query_as::<_, Account>(
            r#"UPDATE accounts
            SET balance = balance + $2
            WHERE id = $1
            RETURNING id, owner, balance, currency, created_at"#,
        )
        .bind(id)
        .bind(delta)
        .fetch_optional(&mut *self.conn)
        .await?
        .ok_or(StoreError::AccountNotFound(id))
    }

    pub async fn delete_account(&mut self, id: AccountId) -> Result<(), StoreError> {
        let result = sqlx::query(r#"DELETE FROM accounts WHERE id = $1"#)
            .bind(id)
            .execute(&mut *self.conn)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::AccountNotFound(id));
        }
        Ok(())
    }

    pub async fn list_accounts(
        &mut self,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Account>, StoreError> {
        let accounts = sqlx::query_as::<_, Account>(
            r#"SELECT id, owner, balance, currency, created_at
            FROM accounts
            ORDER BY id
            LIMIT $1
            OFFSET $2"#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&mut *self.conn)
        .await?;
        Ok(accounts)
    }
}
