use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::primitives::*;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Account {
    pub id: AccountId,
    pub owner: String,
    pub balance: i64,
    pub currency: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Builder, Clone, Debug)]
pub struct NewAccount {
    #[builder(setter(into))]
    pub(crate) owner: String,
    #[builder(default)]
    pub(crate) balance: i64,
    #[builder(setter(into))]
    pub(crate) currency: String,
}

impl NewAccount {
    pub fn builder() -> NewAccountBuilder {
        NewAccountBuilder::default()
    }
}
