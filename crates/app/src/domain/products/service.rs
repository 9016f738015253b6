//! Products service.

use async_trait::async_trait;
use mockall::automock;
use showcase::{locales::Locale, translations::resolve};
use tracing::warn;

use crate::{
    database::Db,
    domain::products::{
        data::{ProductFilter, ProductOrder},
        errors::ProductsServiceError,
        records::LocalizedProduct,
        repository::{LocalizedRow, PgProductsRepository},
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }
}

fn localize(locale: Locale, rows: Vec<LocalizedRow>) -> Vec<LocalizedProduct> {
    rows.into_iter()
        .filter_map(|row| {
            let (product, candidates) = row.candidates(locale);

            match resolve(locale, candidates) {
                Some(served) => Some(LocalizedProduct {
                    product,
                    locale: served.locale,
                    translation: served.value,
                }),
                None => {
                    warn!(
                        product_id = %product.id,
                        slug = %product.slug,
                        %locale,
                        "product has no translation to serve, omitting"
                    );

                    None
                }
            }
        })
        .collect()
}

#[async_trait]
impl ProductsService for PgProductsService {
    #[tracing::instrument(
        name = "products.service.list_localized",
        skip(self, locale, filter),
        fields(locale = %locale, product_count = tracing::field::Empty),
        err
    )]
    async fn list_localized(
        &self,
        locale: Locale,
        filter: ProductFilter,
        order: ProductOrder,
        limit: Option<u32>,
    ) -> Result<Vec<LocalizedProduct>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows = self
            .repository
            .list_localized(&mut tx, locale, &filter, order, limit)
            .await?;

        tx.commit().await?;

        let products = localize(locale, rows);

        tracing::Span::current().record("product_count", products.len());

        Ok(products)
    }

    async fn get_localized(
        &self,
        locale: Locale,
        filter: ProductFilter,
        slug: &str,
    ) -> Result<LocalizedProduct, ProductsServiceError> {
        self.list_localized(locale, filter.with_slug(slug), ProductOrder::Newest, Some(1))
            .await?
            .into_iter()
            .next()
            .ok_or(ProductsServiceError::NotFound)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Products matching `filter` in `order`, each with its text in `locale` or, when
    /// missing, in the default locale.
    ///
    /// Products with text in neither locale are left out.
    async fn list_localized(
        &self,
        locale: Locale,
        filter: ProductFilter,
        order: ProductOrder,
        limit: Option<u32>,
    ) -> Result<Vec<LocalizedProduct>, ProductsServiceError>;

    /// The product with `slug` that also matches `filter`.
    async fn get_localized(
        &self,
        locale: Locale,
        filter: ProductFilter,
        slug: &str,
    ) -> Result<LocalizedProduct, ProductsServiceError>;
}

#[cfg(test)]
mod tests {
    use jiff::{SignedDuration, Timestamp};
    use showcase::moderation::ProductStatus;
    use testresult::TestResult;

    use crate::test::{
        TestContext,
        helpers::{insert_product, insert_translation},
    };

    use super::*;

    #[tokio::test]
    async fn requested_locale_text_is_served_verbatim() -> TestResult {
        let ctx = TestContext::new().await;
        let id = insert_product(&ctx, "rocket", ProductStatus::Approved, 0).await?;

        insert_translation(&ctx, id, Locale::En, "Rocket").await?;
        insert_translation(&ctx, id, Locale::Es, "Cohete").await?;

        let product = ctx
            .products
            .get_localized(Locale::Es, ProductFilter::default(), "rocket")
            .await?;

        assert_eq!(product.translation.name, "Cohete");
        assert_eq!(product.locale, Locale::Es);

        Ok(())
    }

    #[tokio::test]
    async fn missing_locale_falls_back_to_default() -> TestResult {
        let ctx = TestContext::new().await;
        let id = insert_product(&ctx, "rocket", ProductStatus::Approved, 0).await?;

        insert_translation(&ctx, id, Locale::En, "Rocket").await?;

        let products = ctx
            .products
            .list_localized(
                Locale::Es,
                ProductFilter::approved(),
                ProductOrder::MostVoted,
                None,
            )
            .await?;

        assert_eq!(products.len(), 1);
        assert!(products.iter().all(|product| product.locale == Locale::En));
        assert!(
            products
                .iter()
                .all(|product| product.translation.name == "Rocket")
        );

        Ok(())
    }

    #[tokio::test]
    async fn product_without_translations_is_omitted() -> TestResult {
        let ctx = TestContext::new().await;

        insert_product(&ctx, "ghost", ProductStatus::Approved, 10).await?;

        let visible = insert_product(&ctx, "rocket", ProductStatus::Approved, 1).await?;
        insert_translation(&ctx, visible, Locale::En, "Rocket").await?;

        let products = ctx
            .products
            .list_localized(
                Locale::En,
                ProductFilter::approved(),
                ProductOrder::MostVoted,
                None,
            )
            .await?;

        let slugs: Vec<&str> = products.iter().map(|p| p.product.slug.as_str()).collect();

        assert_eq!(slugs, vec!["rocket"]);

        Ok(())
    }

    #[tokio::test]
    async fn other_locales_are_never_served() -> TestResult {
        let ctx = TestContext::new().await;
        let id = insert_product(&ctx, "cohete", ProductStatus::Approved, 0).await?;

        insert_translation(&ctx, id, Locale::Es, "Cohete").await?;

        let result = ctx
            .products
            .get_localized(Locale::En, ProductFilter::default(), "cohete")
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn most_voted_order_and_status_filter() -> TestResult {
        let ctx = TestContext::new().await;

        for (slug, status, votes) in [
            ("low", ProductStatus::Approved, 2),
            ("high", ProductStatus::Approved, 50),
            ("hidden", ProductStatus::Pending, 99),
            ("refused", ProductStatus::Rejected, 80),
        ] {
            let id = insert_product(&ctx, slug, status, votes).await?;
            insert_translation(&ctx, id, Locale::En, slug).await?;
        }

        let products = ctx
            .products
            .list_localized(
                Locale::En,
                ProductFilter::approved(),
                ProductOrder::MostVoted,
                None,
            )
            .await?;

        let slugs: Vec<&str> = products.iter().map(|p| p.product.slug.as_str()).collect();

        assert_eq!(slugs, vec!["high", "low"]);

        let limited = ctx
            .products
            .list_localized(
                Locale::En,
                ProductFilter::default(),
                ProductOrder::MostVoted,
                Some(1),
            )
            .await?;

        assert_eq!(limited.len(), 1);
        assert!(limited.iter().all(|p| p.product.slug == "hidden"));

        Ok(())
    }

    #[tokio::test]
    async fn created_after_filter_excludes_older_products() -> TestResult {
        let ctx = TestContext::new().await;
        let id = insert_product(&ctx, "fresh", ProductStatus::Approved, 0).await?;

        insert_translation(&ctx, id, Locale::En, "Fresh").await?;

        let future = Timestamp::now().checked_add(SignedDuration::from_hours(1))?;

        let products = ctx
            .products
            .list_localized(
                Locale::En,
                ProductFilter::approved().created_after(future),
                ProductOrder::Newest,
                None,
            )
            .await?;

        assert!(products.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn get_localized_respects_filter() -> TestResult {
        let ctx = TestContext::new().await;
        let id = insert_product(&ctx, "queued", ProductStatus::Pending, 0).await?;

        insert_translation(&ctx, id, Locale::En, "Queued").await?;

        let result = ctx
            .products
            .get_localized(Locale::En, ProductFilter::approved(), "queued")
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound for a pending product, got {result:?}"
        );

        Ok(())
    }
}
