//! Products Repository

use std::error::Error as StdError;

use jiff_sqlx::Timestamp as SqlxTimestamp;
use showcase::{locales::Locale, tags::Tags, translations::Translation};
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};
use tracing::debug;

use crate::domain::products::{
    data::{ProductFilter, ProductOrder},
    records::{ProductId, ProductRecord},
};

const LIST_LOCALIZED_SQL: &str = include_str!("sql/list_localized.sql");

/// A product row joined with its requested-locale and default-locale text.
#[derive(Debug, Clone)]
pub(crate) struct LocalizedRow {
    pub product: ProductRecord,
    pub requested: Option<Translation>,
    pub fallback: Option<Translation>,
}

impl LocalizedRow {
    /// Translations in the order the resolver should consider them.
    pub(crate) fn candidates(self, requested: Locale) -> (ProductRecord, Vec<(Locale, Translation)>) {
        let candidates = [
            self.requested.map(|text| (requested, text)),
            self.fallback.map(|text| (Locale::DEFAULT, text)),
        ]
        .into_iter()
        .flatten()
        .collect();

        (self.product, candidates)
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    #[tracing::instrument(
        name = "products.repository.list_localized",
        skip(self, tx),
        fields(row_count = tracing::field::Empty),
        err
    )]
    pub(crate) async fn list_localized(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        locale: Locale,
        filter: &ProductFilter,
        order: ProductOrder,
        limit: Option<u32>,
    ) -> Result<Vec<LocalizedRow>, sqlx::Error> {
        let rows = query_as::<Postgres, LocalizedRow>(LIST_LOCALIZED_SQL)
            .bind(locale.as_str())
            .bind(Locale::DEFAULT.as_str())
            .bind(filter.status.map(|status| status.as_str()))
            .bind(filter.slug.as_deref())
            .bind(filter.created_after.map(SqlxTimestamp::from))
            .bind(order.as_str())
            .bind(limit.map(i64::from))
            .fetch_all(&mut **tx)
            .await?;

        tracing::Span::current().record("row_count", rows.len());

        debug!(row_count = rows.len(), "listed localized products");

        Ok(rows)
    }
}

pub(crate) fn column_decode<E>(index: &str, source: E) -> sqlx::Error
where
    E: StdError + Send + Sync + 'static,
{
    sqlx::Error::ColumnDecode {
        index: index.to_string(),
        source: Box::new(source),
    }
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let vote_count: i32 = row.try_get("vote_count")?;
        let status: String = row.try_get("status")?;

        Ok(Self {
            id: ProductId::from_i64(row.try_get("id")?),
            slug: row.try_get("slug")?,
            website_url: row.try_get("website_url")?,
            tags: Tags::from(row.try_get::<Vec<String>, _>("tags")?),
            vote_count: u32::try_from(vote_count)
                .map_err(|error| column_decode("vote_count", error))?,
            status: status
                .parse()
                .map_err(|error| column_decode("status", error))?,
            submitted_by: row.try_get("submitted_by")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            approved_at: row
                .try_get::<Option<SqlxTimestamp>, _>("approved_at")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for LocalizedRow {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            product: ProductRecord::from_row(row)?,
            requested: translation(row, "requested")?,
            fallback: translation(row, "fallback")?,
        })
    }
}

fn translation(row: &PgRow, prefix: &str) -> sqlx::Result<Option<Translation>> {
    let name: Option<String> = row.try_get(format!("{prefix}_name").as_str())?;

    let Some(name) = name else {
        return Ok(None);
    };

    Ok(Some(Translation {
        name,
        tagline: row.try_get(format!("{prefix}_tagline").as_str())?,
        description: row.try_get(format!("{prefix}_description").as_str())?,
    }))
}
