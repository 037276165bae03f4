use thiserror::Error;

use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("ApplicationError - StoreError: {0}")]
    StoreError(#[from] StoreError),
    #[error("ApplicationError - MigrateError: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),
}
