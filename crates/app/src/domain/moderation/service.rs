//! Moderation service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use showcase::{
    moderation::{ModerationDecision, ModerationStats},
    views::StaleViews,
};
use tracing::info;

use crate::{
    database::Db,
    domain::{
        moderation::{errors::ModerationServiceError, repository::PgModerationRepository},
        products::records::{ProductId, ProductRecord},
    },
    views::ViewInvalidator,
};

#[derive(Clone)]
pub struct PgModerationService {
    db: Db,
    repository: PgModerationRepository,
    invalidator: Arc<dyn ViewInvalidator>,
}

impl PgModerationService {
    #[must_use]
    pub fn new(db: Db, invalidator: Arc<dyn ViewInvalidator>) -> Self {
        Self {
            db,
            repository: PgModerationRepository::new(),
            invalidator,
        }
    }

    #[tracing::instrument(
        name = "moderation.service.decide",
        skip(self, product, decision),
        fields(product_id = %product, decision = decision.past_tense()),
        err
    )]
    async fn decide(
        &self,
        product: ProductId,
        decision: ModerationDecision,
    ) -> Result<ProductRecord, ModerationServiceError> {
        let mut tx = self.db.begin().await?;

        let record = self.repository.decide(&mut tx, product, decision).await?;

        tx.commit().await?;

        info!(
            product_id = %record.id,
            slug = %record.slug,
            "product {}",
            decision.past_tense()
        );

        self.invalidator
            .invalidate(StaleViews::after_moderation())
            .await;

        Ok(record)
    }
}

#[async_trait]
impl ModerationService for PgModerationService {
    async fn approve(&self, product: ProductId) -> Result<ProductRecord, ModerationServiceError> {
        self.decide(product, ModerationDecision::Approve).await
    }

    async fn reject(&self, product: ProductId) -> Result<ProductRecord, ModerationServiceError> {
        self.decide(product, ModerationDecision::Reject).await
    }

    #[tracing::instrument(
        name = "moderation.service.delete",
        skip(self, product),
        fields(product_id = %product),
        err
    )]
    async fn delete(&self, product: ProductId) -> Result<(), ModerationServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_product(&mut tx, product).await?;

        if rows_affected == 0 {
            return Err(ModerationServiceError::NotFound);
        }

        tx.commit().await?;

        info!("product deleted");

        self.invalidator
            .invalidate(StaleViews::after_moderation())
            .await;

        Ok(())
    }

    async fn stats(&self) -> Result<ModerationStats, ModerationServiceError> {
        let mut tx = self.db.begin().await?;

        let counts = self.repository.count_by_status(&mut tx).await?;

        tx.commit().await?;

        counts
            .into_iter()
            .map(|(status, count)| {
                Ok::<_, ModerationServiceError>((status, u64::try_from(count)?))
            })
            .collect()
    }
}

#[automock]
#[async_trait]
pub trait ModerationService: Send + Sync {
    /// Publish a product. The first approval time is kept when approving again.
    async fn approve(&self, product: ProductId) -> Result<ProductRecord, ModerationServiceError>;

    /// Hide a product from public listings and clear its approval time.
    async fn reject(&self, product: ProductId) -> Result<ProductRecord, ModerationServiceError>;

    /// Remove a product and its translations permanently.
    async fn delete(&self, product: ProductId) -> Result<(), ModerationServiceError>;

    /// Product counts per status.
    async fn stats(&self) -> Result<ModerationStats, ModerationServiceError>;
}

#[cfg(test)]
mod tests {
    use showcase::{locales::Locale, moderation::ProductStatus, votes::VoteDirection};
    use testresult::TestResult;

    use crate::{
        domain::{
            products::{ProductsService, data::ProductFilter},
            votes::VotesService,
        },
        test::{
            TestContext,
            helpers::{insert_product, insert_translation},
        },
        views::MockViewInvalidator,
    };

    use super::*;

    #[tokio::test]
    async fn approve_publishes_and_stamps_approval() -> TestResult {
        let ctx = TestContext::new().await;
        let id = insert_product(&ctx, "rocket", ProductStatus::Pending, 0).await?;

        let record = ctx.moderation.approve(id).await?;

        assert_eq!(record.status, ProductStatus::Approved);
        assert!(record.approved_at.is_some());

        Ok(())
    }

    #[tokio::test]
    async fn approving_twice_keeps_first_approval_time() -> TestResult {
        let ctx = TestContext::new().await;
        let id = insert_product(&ctx, "rocket", ProductStatus::Pending, 0).await?;

        let first = ctx.moderation.approve(id).await?;
        let second = ctx.moderation.approve(id).await?;

        assert_eq!(first.approved_at, second.approved_at);

        Ok(())
    }

    #[tokio::test]
    async fn reject_clears_approval() -> TestResult {
        let ctx = TestContext::new().await;
        let id = insert_product(&ctx, "rocket", ProductStatus::Pending, 0).await?;

        ctx.moderation.approve(id).await?;

        let record = ctx.moderation.reject(id).await?;

        assert_eq!(record.status, ProductStatus::Rejected);
        assert!(record.approved_at.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn decisions_on_unknown_product_return_not_found() {
        let ctx = TestContext::new().await;
        let missing = ProductId::from_i64(404);

        let approve = ctx.moderation.approve(missing).await;
        let reject = ctx.moderation.reject(missing).await;
        let delete = ctx.moderation.delete(missing).await;

        assert!(
            matches!(approve, Err(ModerationServiceError::NotFound)),
            "expected NotFound, got {approve:?}"
        );
        assert!(
            matches!(reject, Err(ModerationServiceError::NotFound)),
            "expected NotFound, got {reject:?}"
        );
        assert!(
            matches!(delete, Err(ModerationServiceError::NotFound)),
            "expected NotFound, got {delete:?}"
        );
    }

    #[tokio::test]
    async fn delete_removes_product_and_translations() -> TestResult {
        let ctx = TestContext::new().await;
        let id = insert_product(&ctx, "rocket", ProductStatus::Approved, 0).await?;

        insert_translation(&ctx, id, Locale::En, "Rocket").await?;

        ctx.moderation.delete(id).await?;

        let result = ctx
            .products
            .get_localized(Locale::En, ProductFilter::default(), "rocket")
            .await;

        assert!(result.is_err(), "deleted product should not be served");
        assert_eq!(ctx.translation_count(id).await?, 0);

        Ok(())
    }

    #[tokio::test]
    async fn stats_count_products_per_status() -> TestResult {
        let ctx = TestContext::new().await;

        for (slug, status) in [
            ("one", ProductStatus::Pending),
            ("two", ProductStatus::Pending),
            ("three", ProductStatus::Approved),
            ("four", ProductStatus::Rejected),
        ] {
            insert_product(&ctx, slug, status, 0).await?;
        }

        let stats = ctx.moderation.stats().await?;

        assert_eq!(
            stats,
            ModerationStats {
                total: 4,
                pending: 2,
                approved: 1,
                rejected: 1,
            }
        );

        Ok(())
    }

    #[tokio::test]
    async fn votes_then_approval_then_votes_floor_at_zero() -> TestResult {
        let ctx = TestContext::new().await;
        let id = insert_product(&ctx, "rocket", ProductStatus::Pending, 0).await?;

        for _ in 0..3 {
            ctx.votes.apply_vote(id, VoteDirection::Up).await?;
        }

        assert_eq!(ctx.vote_count(id).await?, 3);

        let record = ctx.moderation.approve(id).await?;

        assert_eq!(record.status, ProductStatus::Approved);

        for _ in 0..5 {
            ctx.votes.apply_vote(id, VoteDirection::Down).await?;
        }

        assert_eq!(ctx.vote_count(id).await?, 0);

        Ok(())
    }

    #[tokio::test]
    async fn transitions_invalidate_dashboard_and_listings() -> TestResult {
        let ctx = TestContext::new().await;
        let id = insert_product(&ctx, "rocket", ProductStatus::Pending, 0).await?;

        let mut invalidator = MockViewInvalidator::new();

        invalidator
            .expect_invalidate()
            .times(3)
            .withf(|views| *views == StaleViews::after_moderation())
            .return_const(());

        let service = PgModerationService::new(ctx.db(), Arc::new(invalidator));

        service.approve(id).await?;
        service.reject(id).await?;
        service.delete(id).await?;

        Ok(())
    }
}
