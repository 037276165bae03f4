use sqlx::{pool::PoolConnection, PgConnection, Postgres, Transaction};

use std::ops::DerefMut;

pub type TxQueries = Queries<Transaction<'static, Postgres>>;
pub type PoolQueries = Queries<PoolConnection<Postgres>>;

/// Single-statement accessors for accounts, entries and transfers.
///
/// `C` is anything that derefs to a `PgConnection`, so the same accessors run
/// against a pooled connection or an open transaction.
pub struct Queries<C> {
    pub(crate) conn: C,
}

impl<C> Queries<C> {
    pub fn new(conn: C) -> Self {
        Self { conn }
    }

    pub fn into_inner(self) -> C {
        self.conn
    }
}

impl<C> Queries<C>
where
    C: DerefMut<Target = PgConnection>,
{
    /// Underlying connection, for statements the accessors don't cover.
    pub fn connection(&mut self) -> &mut PgConnection {
        &mut *self.conn
    }
}
