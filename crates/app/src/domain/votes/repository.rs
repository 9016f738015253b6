//! Votes Repository

use showcase::votes::VoteDirection;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};
use tracing::debug;

use crate::domain::{
    products::{records::ProductId, repository::column_decode},
    votes::data::VoteReceipt,
};

const APPLY_VOTE_SQL: &str = include_str!("sql/apply_vote.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgVotesRepository;

impl PgVotesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Add the vote's delta to the stored count, floored at zero, in a single statement.
    #[tracing::instrument(
        name = "votes.repository.apply_vote",
        skip(self, tx, product, direction),
        fields(product_id = %product, direction = %direction),
        err
    )]
    pub(crate) async fn apply_vote(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductId,
        direction: VoteDirection,
    ) -> Result<VoteReceipt, sqlx::Error> {
        let receipt = query_as::<Postgres, VoteReceipt>(APPLY_VOTE_SQL)
            .bind(product.into_i64())
            .bind(direction.delta())
            .fetch_one(&mut **tx)
            .await?;

        debug!(vote_count = receipt.vote_count, "applied vote");

        Ok(receipt)
    }
}

impl<'r> FromRow<'r, PgRow> for VoteReceipt {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let vote_count: i32 = row.try_get("vote_count")?;

        Ok(Self {
            product: ProductId::from_i64(row.try_get("id")?),
            slug: row.try_get("slug")?,
            vote_count: u32::try_from(vote_count)
                .map_err(|error| column_decode("vote_count", error))?,
        })
    }
}
