//! Votes service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use showcase::{views::StaleViews, votes::VoteDirection};
use tracing::info;

use crate::{
    database::Db,
    domain::{
        products::records::ProductId,
        votes::{data::VoteReceipt, errors::VotesServiceError, repository::PgVotesRepository},
    },
    views::ViewInvalidator,
};

#[derive(Clone)]
pub struct PgVotesService {
    db: Db,
    repository: PgVotesRepository,
    invalidator: Arc<dyn ViewInvalidator>,
}

impl PgVotesService {
    #[must_use]
    pub fn new(db: Db, invalidator: Arc<dyn ViewInvalidator>) -> Self {
        Self {
            db,
            repository: PgVotesRepository::new(),
            invalidator,
        }
    }
}

#[async_trait]
impl VotesService for PgVotesService {
    #[tracing::instrument(
        name = "votes.service.apply_vote",
        skip(self, product, direction),
        fields(product_id = %product, direction = %direction),
        err
    )]
    async fn apply_vote(
        &self,
        product: ProductId,
        direction: VoteDirection,
    ) -> Result<VoteReceipt, VotesServiceError> {
        let mut tx = self.db.begin().await?;

        let receipt = self
            .repository
            .apply_vote(&mut tx, product, direction)
            .await?;

        tx.commit().await?;

        info!(vote_count = receipt.vote_count, "recorded vote");

        self.invalidator
            .invalidate(StaleViews::after_vote(&receipt.slug))
            .await;

        Ok(receipt)
    }
}

#[automock]
#[async_trait]
pub trait VotesService: Send + Sync {
    /// Apply one vote to a product and return the stored count afterwards.
    ///
    /// The count never drops below zero: a down vote on a product with no votes leaves it
    /// at zero.
    async fn apply_vote(
        &self,
        product: ProductId,
        direction: VoteDirection,
    ) -> Result<VoteReceipt, VotesServiceError>;
}
