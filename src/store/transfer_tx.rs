use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::{error::StoreError, queries::TxQueries, Store};
use crate::{account::Account, entry::Entry, primitives::*, transfer::Transfer};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TransferParams {
    pub from_account_id: AccountId,
    pub to_account_id: AccountId,
    pub amount: i64,
}

/// Everything a transfer wrote. Accounts are as they stood right after their
/// balance update, inside the transfer's transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferResult {
    pub transfer: Transfer,
    pub from_account: Account,
    pub to_account: Account,
    pub from_entry: Entry,
    pub to_entry: Entry,
}

impl Store {
    /// Moves `amount` between two accounts: one transfer record, a debit and a
    /// credit entry, and both balance updates, all in one transaction.
    ///
    /// Not idempotent. Sending to the same account is allowed and leaves the
    /// balance unchanged.
    #[instrument(
        name = "store.transfer_funds",
        skip(self, params),
        fields(
            from_account_id = %params.from_account_id,
            to_account_id = %params.to_account_id,
            amount = params.amount,
            transfer_id
        ),
        err
    )]
    pub async fn transfer_funds(
        &self,
        params: TransferParams,
    ) -> Result<TransferResult, StoreError> {
        if params.amount <= 0 {
            return Err(StoreError::InvalidAmount(params.amount));
        }
        let allow_overdraft = self.config.allow_overdraft;
        let result = self
            .execute_in_transaction(move |q| {
                Box::pin(async move {
                    let TransferParams {
                        from_account_id,
                        to_account_id,
                        amount,
                    } = params;

                    let transfer = q
                        .create_transfer(from_account_id, to_account_id, amount)
                        .await?;
                    let from_entry = q.create_entry(from_account_id, -amount).await?;
                    let to_entry = q.create_entry(to_account_id, amount).await?;

                    let (from_account, to_account) = if lock_from_account_first(&params) {
                        let from_account =
                            change_balance(q, from_account_id, -amount, allow_overdraft).await?;
                        let to_account =
                            change_balance(q, to_account_id, amount, allow_overdraft).await?;
                        (from_account, to_account)
                    } else {
                        let to_account =
                            change_balance(q, to_account_id, amount, allow_overdraft).await?;
                        let from_account =
                            change_balance(q, from_account_id, -amount, allow_overdraft).await?;
                        (from_account, to_account)
                    };

                    Ok(TransferResult {
                        transfer,
                        from_account,
                        to_account,
                        from_entry,
                        to_entry,
                    })
                })
            })
            .await?;
        tracing::Span::current().record("transfer_id", tracing::field::display(result.transfer.id));
        Ok(result)
    }
}

/// Row locks are always taken in ascending account id order, whichever side
/// is sending. Two transfers crossing the same pair of accounts in opposite
/// directions therefore queue on the same first lock instead of deadlocking.
fn lock_from_account_first(params: &TransferParams) -> bool {
    params.from_account_id < params.to_account_id
}

async fn change_balance(
    q: &mut TxQueries,
    account_id: AccountId,
    delta: i64,
    allow_overdraft: bool,
) -> Result<Account, StoreError> {
    let account = q.get_account_for_update(account_id).await?;
    let balance = account
        .balance
        .checked_add(delta)
        .ok_or(StoreError::BalanceOverflow(account_id))?;
    if delta < 0 && balance < 0 && !allow_overdraft {
        return Err(StoreError::InsufficientFunds {
            account_id,
            balance: account.balance,
            amount: -delta,
        });
    }
    q.update_account_balance(account_id, balance).await
}
