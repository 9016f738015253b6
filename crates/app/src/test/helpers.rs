//! Test Helpers

use showcase::{locales::Locale, moderation::ProductStatus};
use sqlx::{query, query_scalar};

use crate::{domain::products::records::ProductId, test::TestContext};

/// Insert a product directly, bypassing submission validation.
pub(crate) async fn insert_product(
    ctx: &TestContext,
    slug: &str,
    status: ProductStatus,
    vote_count: i32,
) -> Result<ProductId, sqlx::Error> {
    let id: i64 = query_scalar(
        "INSERT INTO products (slug, status, vote_count, approved_at) \
         VALUES ($1, $2::text, $3, CASE WHEN $2::text = 'approved' THEN now() END) \
         RETURNING id",
    )
    .bind(slug)
    .bind(status.as_str())
    .bind(vote_count)
    .fetch_one(ctx.db.pool())
    .await?;

    Ok(ProductId::from_i64(id))
}

pub(crate) async fn insert_translation(
    ctx: &TestContext,
    product: ProductId,
    locale: Locale,
    name: &str,
) -> Result<(), sqlx::Error> {
    query("INSERT INTO product_translations (product_id, locale, name) VALUES ($1, $2, $3)")
        .bind(product.into_i64())
        .bind(locale.as_str())
        .bind(name)
        .execute(ctx.db.pool())
        .await?;

    Ok(())
}
