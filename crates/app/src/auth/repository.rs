//! Auth repository.

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query_as};

use crate::auth::models::{CallerId, CallerRecord};

const FIND_CALLER_BY_TOKEN_HASH_SQL: &str = include_str!("sql/find_caller_by_token_hash.sql");
const CREATE_CALLER_SQL: &str = include_str!("sql/create_caller.sql");

#[derive(Debug, Clone)]
pub(crate) struct PgCallersRepository {
    pool: PgPool,
}

impl PgCallersRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) async fn find_caller_by_token_hash(
        &self,
        hash: &str,
    ) -> Result<Option<CallerRecord>, sqlx::Error> {
        query_as::<Postgres, CallerRecord>(FIND_CALLER_BY_TOKEN_HASH_SQL)
            .bind(hash)
            .fetch_optional(&self.pool)
            .await
    }

    #[tracing::instrument(
        name = "callers.repository.create_caller",
        skip(self, contact_address, token_hash),
        err
    )]
    pub(crate) async fn create_caller(
        &self,
        contact_address: Option<&str>,
        admin: bool,
        token_hash: &str,
    ) -> Result<CallerRecord, sqlx::Error> {
        query_as::<Postgres, CallerRecord>(CREATE_CALLER_SQL)
            .bind(contact_address)
            .bind(admin)
            .bind(token_hash)
            .fetch_one(&self.pool)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for CallerRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: CallerId::from_i64(row.try_get("id")?),
            contact_address: row.try_get("contact_address")?,
            is_admin: row.try_get("is_admin")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
