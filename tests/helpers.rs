#![allow(dead_code)]

use rand::{
    distributions::{Alphanumeric, DistString},
    seq::SliceRandom,
    Rng,
};
use simple_bank::{account::*, app::run_migrations, store::*};

use std::time::Duration;

pub async fn init_pool() -> anyhow::Result<sqlx::PgPool> {
    let pg_con = std::env::var("PG_CON").unwrap_or_else(|_| {
        let pg_host = std::env::var("PG_HOST").unwrap_or("localhost".to_string());
        format!("postgres://user:password@{pg_host}:5432/pg")
    });
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(20)
        .acquire_timeout(Duration::from_secs(5))
        .connect(&pg_con)
        .await?;
    run_migrations(&pool).await?;
    Ok(pool)
}

pub fn random_owner() -> String {
    Alphanumeric.sample_string(&mut rand::thread_rng(), 6)
}

pub fn random_money() -> i64 {
    rand::thread_rng().gen_range(0..=1000)
}

pub fn random_currency() -> String {
    ["USD", "EUR", "CAD"]
        .choose(&mut rand::thread_rng())
        .unwrap_or(&"USD")
        .to_string()
}

pub async fn create_account_with_balance(
    store: &Store,
    balance: i64,
) -> anyhow::Result<Account> {
    let new_account = NewAccount::builder()
        .owner(random_owner())
        .currency(random_currency())
        .balance(balance)
        .build()?;
    let mut queries = store.queries().await?;
    Ok(queries.create_account(new_account).await?)
}

pub async fn create_random_account(store: &Store) -> anyhow::Result<Account> {
    create_account_with_balance(store, random_money()).await
}

pub async fn count_entries(pool: &sqlx::PgPool, account_id: i64) -> anyhow::Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM entries WHERE account_id = $1")
        .bind(account_id)
        .fetch_one(pool)
        .await?;
    Ok(count)
}

pub async fn count_transfers(pool: &sqlx::PgPool, account_id: i64) -> anyhow::Result<i64> {
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM transfers WHERE from_account_id = $1 OR to_account_id = $1",
    )
    .bind(account_id)
    .fetch_one(pool)
    .await?;
    Ok(count)
}
