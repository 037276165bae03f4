use sqlx::PgConnection;

use std::ops::DerefMut;

use super::entity::*;
use crate::{primitives::*, store::*};

impl<C> Queries<C>
where
    C: DerefMut<Target = PgConnection> + Send,
{
    pub async fn create_transfer(
        &mut self,
        from_account_id: AccountId,
        to_account_id: AccountId,
        amount: i64,
    ) -> Result<Transfer, StoreError> {
        let transfer = sqlx::query_as::<_, Transfer>(
            r#"INSERT INTO transfers (from_account_id, to_account_id, amount)
            VALUES ($1, $2, $3)
            RETURNING id, from_account_id, to_account_id, amount, created_at"#,
        )
        .bind(from_account_id)
        .bind(to_account_id)
        .bind(amount)
        .fetch_one(&mut *self.conn)
        .await
        .map_err(|e| match StoreError::from(e) {
            StoreError::ConstraintViolation(c) if c == "transfers_from_account_id_fkey" => {
                StoreError::AccountNotFound(from_account_id)
            }
            StoreError::ConstraintViolation(c) if c == "transfers_to_account_id_fkey" => {
                StoreError::AccountNotFound(to_account_id)
            }
            e => e,
        })?;
        Ok(transfer)
    }

    pub async fn get_transfer(&mut self, id: TransferId) -> Result<Transfer, StoreError> {
        sqlx::query_as::<_, Transfer>(
            r#"SELECT id, from_account_id, to_account_id, amount, created_at
            FROM transfers
            WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?
        .ok_or(StoreError::TransferNotFound(id))
    }

    /// Transfers leaving `from_account_id` or arriving at `to_account_id`.
    pub async fn list_transfers(
        &mut self,
        from_account_id: AccountId,
        to_account_id: AccountId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Transfer>, StoreError> {
        let transfers = sqlx::query_as::<_, Transfer>(
            r#"SELECT id, from_account_id, to_account_id, amount, created_at
            FROM transfers
            WHERE from_account_id = $1 OR to_account_id = $2
            ORDER BY id
            LIMIT $3
            OFFSET $4"#,
        )
        .bind(from_account_id)
        .bind(to_account_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&mut *self.conn)
        .await?;
        Ok(transfers)
    }
}
