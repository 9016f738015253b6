//! Moderation Repository

use showcase::moderation::{ModerationDecision, ProductStatus};
use sqlx::{Postgres, Transaction, query, query_as};
use tracing::debug;

use crate::domain::products::{
    records::{ProductId, ProductRecord},
    repository::column_decode,
};

const SET_STATUS_SQL: &str = include_str!("sql/set_status.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");
const COUNT_BY_STATUS_SQL: &str = include_str!("sql/count_by_status.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgModerationRepository;

impl PgModerationRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    #[tracing::instrument(
        name = "moderation.repository.decide",
        skip(self, tx, product, decision),
        fields(product_id = %product, status = %decision.target_status()),
        err
    )]
    pub(crate) async fn decide(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductId,
        decision: ModerationDecision,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(SET_STATUS_SQL)
            .bind(product.into_i64())
            .bind(decision.target_status().as_str())
            .bind(decision.stamps_approval())
            .fetch_one(&mut **tx)
            .await
    }

    #[tracing::instrument(
        name = "moderation.repository.delete_product",
        skip(self, tx, product),
        fields(product_id = %product),
        err
    )]
    pub(crate) async fn delete_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(product.into_i64())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        debug!(rows_affected, "deleted product");

        Ok(rows_affected)
    }

    #[tracing::instrument(name = "moderation.repository.count_by_status", skip(self, tx), err)]
    pub(crate) async fn count_by_status(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<(ProductStatus, i64)>, sqlx::Error> {
        let rows: Vec<(String, i64)> = query_as(COUNT_BY_STATUS_SQL)
            .fetch_all(&mut **tx)
            .await?;

        rows.into_iter()
            .map(|(status, count)| {
                status
                    .parse::<ProductStatus>()
                    .map(|status| (status, count))
                    .map_err(|error| column_decode("status", error))
            })
            .collect()
    }
}
