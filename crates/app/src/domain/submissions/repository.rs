//! Submissions Repository

use showcase::{locales::Locale, submissions::ValidSubmission};
use sqlx::{Postgres, Transaction, query, query_as};
use tracing::debug;

use crate::domain::products::records::ProductRecord;

const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const CREATE_TRANSLATION_SQL: &str = include_str!("sql/create_translation.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgSubmissionsRepository;

impl PgSubmissionsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Insert a pending product and its text in `locale`.
    #[tracing::instrument(
        name = "submissions.repository.create_product",
        skip(self, tx, locale, submission, submitted_by),
        fields(slug = %submission.slug, locale = %locale, tag_count = submission.tags.len()),
        err
    )]
    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        locale: Locale,
        submission: &ValidSubmission,
        submitted_by: &str,
    ) -> Result<ProductRecord, sqlx::Error> {
        let record = query_as::<Postgres, ProductRecord>(CREATE_PRODUCT_SQL)
            .bind(&submission.slug)
            .bind(submission.website_url.as_ref().map(|url| url.as_str()))
            .bind(submission.tags.to_vec())
            .bind(submitted_by)
            .fetch_one(&mut **tx)
            .await?;

        query(CREATE_TRANSLATION_SQL)
            .bind(record.id.into_i64())
            .bind(locale.as_str())
            .bind(&submission.name)
            .bind(&submission.tagline)
            .bind(submission.description.as_deref())
            .execute(&mut **tx)
            .await?;

        debug!(product_id = %record.id, "created product");

        Ok(record)
    }
}
