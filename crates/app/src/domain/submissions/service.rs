//! Submissions service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use showcase::{
    callers::Caller,
    locales::Locale,
    submissions::{RawSubmission, SubmissionOutcome, ValidSubmission, validate},
    views::StaleViews,
};
use sqlx::error::{DatabaseError, ErrorKind};
use tracing::{error, info, warn};

use crate::{
    database::Db,
    domain::{products::records::ProductRecord, submissions::repository::PgSubmissionsRepository},
    views::ViewInvalidator,
};

#[derive(Clone)]
pub struct PgSubmissionsService {
    db: Db,
    repository: PgSubmissionsRepository,
    invalidator: Arc<dyn ViewInvalidator>,
}

impl PgSubmissionsService {
    #[must_use]
    pub fn new(db: Db, invalidator: Arc<dyn ViewInvalidator>) -> Self {
        Self {
            db,
            repository: PgSubmissionsRepository::new(),
            invalidator,
        }
    }

    async fn store(
        &self,
        locale: Locale,
        submission: &ValidSubmission,
        submitted_by: &str,
    ) -> Result<ProductRecord, sqlx::Error> {
        let mut tx = self.db.begin().await?;

        let record = self
            .repository
            .create_product(&mut tx, locale, submission, submitted_by)
            .await?;

        tx.commit().await?;

        Ok(record)
    }
}

fn is_unique_violation(error: &sqlx::Error) -> bool {
    matches!(
        error.as_database_error().map(DatabaseError::kind),
        Some(ErrorKind::UniqueViolation)
    )
}

#[async_trait]
impl SubmissionsService for PgSubmissionsService {
    #[tracing::instrument(
        name = "submissions.service.submit",
        skip(self, caller, locale, raw),
        fields(locale = %locale, authenticated = caller.is_authenticated())
    )]
    async fn submit(
        &self,
        caller: &Caller,
        locale: Locale,
        raw: RawSubmission,
    ) -> SubmissionOutcome {
        if !caller.is_authenticated() {
            info!("refused submission from anonymous caller");

            return SubmissionOutcome::unauthenticated(raw);
        }

        let submission = match validate(&raw) {
            Ok(submission) => submission,
            Err(errors) => {
                info!(invalid_fields = errors.len(), "refused invalid submission");

                return SubmissionOutcome::invalid(errors, raw);
            }
        };

        match self
            .store(locale, &submission, caller.submitter_label())
            .await
        {
            Ok(record) => {
                info!(product_id = %record.id, slug = %record.slug, "accepted submission");

                self.invalidator
                    .invalidate(StaleViews::after_submission())
                    .await;

                SubmissionOutcome::accepted()
            }
            Err(source) if is_unique_violation(&source) => {
                warn!(slug = %submission.slug, "submitted slug is already taken");

                SubmissionOutcome::slug_taken(raw)
            }
            Err(source) => {
                error!("failed to store submission: {source}");

                SubmissionOutcome::failed(raw)
            }
        }
    }
}

#[automock]
#[async_trait]
pub trait SubmissionsService: Send + Sync {
    /// Validate and store a product submission for review.
    ///
    /// Every failure, including storage failures, is reported in the returned outcome.
    async fn submit(
        &self,
        caller: &Caller,
        locale: Locale,
        raw: RawSubmission,
    ) -> SubmissionOutcome;
}
