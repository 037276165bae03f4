mod config;
mod db;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;

use std::path::PathBuf;

use crate::{account::NewAccount, app::App, primitives::*};
use config::*;

#[derive(Parser)]
#[clap(version, long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[clap(
        short,
        long,
        env = "SIMPLE_BANK_CONFIG",
        default_value = "simple-bank.yml",
        value_name = "FILE"
    )]
    config: PathBuf,
    /// Connection string for the bank database
    #[clap(long, env = "PG_CON")]
    db_con: Option<String>,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Applies pending database migrations
    Migrate,
    CreateAccount {
        #[clap(short, long)]
        owner: String,
        #[clap(short, long)]
        currency: String,
        #[clap(short, long, default_value_t = 0)]
        balance: i64,
    },
    GetAccount {
        #[clap(long)]
        id: AccountId,
    },
    ListAccounts {
        #[clap(long, default_value_t = 5)]
        limit: i64,
        #[clap(long, default_value_t = 0)]
        offset: i64,
    },
    DeleteAccount {
        #[clap(long)]
        id: AccountId,
    },
    ListEntries {
        #[clap(long)]
        account_id: AccountId,
        #[clap(long, default_value_t = 5)]
        limit: i64,
        #[clap(long, default_value_t = 0)]
        offset: i64,
    },
    ListTransfers {
        #[clap(long)]
        account_id: AccountId,
        #[clap(long, default_value_t = 5)]
        limit: i64,
        #[clap(long, default_value_t = 0)]
        offset: i64,
    },
    /// Moves funds between two accounts
    Transfer {
        #[clap(long)]
        from: AccountId,
        #[clap(long)]
        to: AccountId,
        #[clap(long)]
        amount: i64,
    },
}

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_path(cli.config, EnvOverride { db_con: cli.db_con })?;

    crate::tracing::init_tracer(config.tracing)?;
    let result = run_cmd(cli.command, config.db, config.app).await;
    crate::tracing::shutdown_tracer();
    result
}

async fn run_cmd(
    command: Command,
    db_config: db::DbConfig,
    app_config: crate::app::AppConfig,
) -> anyhow::Result<()> {
    let pool = db::init_pool(&db_config)
        .await
        .context("Couldn't connect to database")?;
    let app = App::run(pool, app_config).await?;

    match command {
        Command::Migrate => println!("Migrations applied"),
        Command::CreateAccount {
            owner,
            currency,
            balance,
        } => {
            let new_account = NewAccount::builder()
                .owner(owner)
                .currency(currency)
                .balance(balance)
                .build()?;
            print_json(&app.create_account(new_account).await?)?;
        }
        Command::GetAccount { id } => print_json(&app.get_account(id).await?)?,
        Command::ListAccounts { limit, offset } => {
            print_json(&app.list_accounts(limit, offset).await?)?
        }
        Command::DeleteAccount { id } => {
            app.delete_account(id).await?;
            println!("Account {id} deleted");
        }
        Command::ListEntries {
            account_id,
            limit,
            offset,
        } => print_json(&app.list_entries(account_id, limit, offset).await?)?,
        Command::ListTransfers {
            account_id,
            limit,
            offset,
        } => print_json(&app.list_transfers(account_id, limit, offset).await?)?,
        Command::Transfer { from, to, amount } => {
            print_json(&app.transfer(from, to, amount).await?)?
        }
    }
    Ok(())
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
