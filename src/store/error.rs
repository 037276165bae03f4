use thiserror::Error;

use crate::primitives::*;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("StoreError - Sqlx: {0}")]
    Sqlx(sqlx::Error),
    #[error("StoreError - tx err: {source}, rb err: {rollback}")]
    RollbackFailed {
        source: Box<StoreError>,
        rollback: sqlx::Error,
    },
    #[error("StoreError - Could not find account with id: {0}")]
    AccountNotFound(AccountId),
    #[error("StoreError - Could not find entry with id: {0}")]
    EntryNotFound(EntryId),
    #[error("StoreError - Could not find transfer with id: {0}")]
    TransferNotFound(TransferId),
    #[error("StoreError - Constraint violated: {0}")]
    ConstraintViolation(String),
    #[error("StoreError - Insufficient funds in account {account_id}: balance {balance}, amount {amount}")]
    InsufficientFunds {
        account_id: AccountId,
        balance: i64,
        amount: i64,
    },
    #[error("StoreError - Balance of account {0} out of range")]
    BalanceOverflow(AccountId),
    #[error("StoreError - Amount must be positive: {0}")]
    InvalidAmount(i64),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::AccountNotFound(_) | Self::EntryNotFound(_) | Self::TransferNotFound(_)
        )
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(error: sqlx::Error) -> Self {
        if let Some(err) = error.as_database_error() {
            // SQLSTATE class 23: integrity constraint violation
            if err.code().map(|code| code.starts_with("23")).unwrap_or(false) {
                return Self::ConstraintViolation(
                    err.constraint()
                        .map(str::to_string)
                        .unwrap_or_else(|| err.message().to_string()),
                );
            }
        }
        Self::Sqlx(error)
    }
}
