use sqlx::PgConnection;

use std::ops::DerefMut;

use super::entity::*;
use crate::{primitives::*, store::*};

impl<C> Queries<C>
where
    C: DerefMut<Target = PgConnection> + Send,
{
    pub async fn create_entry(
        &mut self,
        account_id: AccountId,
        amount: i64,
    ) -> Result<Entry, StoreError> {
        let entry = sqlx::query_as::<_, Entry>(
            r#"INSERT INTO entries (account_id, amount)
            VALUES ($1, $2)
            RETURNING id, account_id, amount, created_at"#,
        )
        .bind(account_id)
        .bind(amount)
        .fetch_one(&mut *self.conn)
        .await
        .map_err(|e| match StoreError::from(e) {
            StoreError::ConstraintViolation(c) if c == "entries_account_id_fkey" => {
                StoreError::AccountNotFound(account_id)
            }
            e => e,
        })?;
        Ok(entry)
    }

    pub async fn get_entry(&mut self, id: EntryId) -> Result<Entry, StoreError> {
        sqlx::query_as::<_, Entry>(
            r#"SELECT id, account_id, amount, created_at
            FROM entries
            WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?
        .ok_or(StoreError::EntryNotFound(id))
    }

    pub async fn list_entries(
        &mut self,
        account_id: AccountId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Entry>, StoreError> {
        let entries = sqlx::query_as::<_, Entry>(
            r#"SELECT id, account_id, amount, created_at
            FROM entries
            WHERE account_id = $1
            ORDER BY id
            LIMIT $2
            OFFSET $3"#,
        )
        .bind(account_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&mut *self.conn)
        .await?;
        Ok(entries)
    }
}
