//! Approve Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use showcase::moderation::ModerationDecision;
use showcase_app::domain::products::records::ProductId;

use crate::{actions::ActionResponse, extensions::*, state::State};

/// Approve Product Handler
///
/// Publishes a product. The first approval time is kept when approving again.
#[endpoint(
    tags("admin"),
    summary = "Approve Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product approved"),
        (status_code = StatusCode::FORBIDDEN, description = "Admin access required"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ActionResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    Ok(super::decide(
        state,
        ProductId::from_i64(id.into_inner()),
        ModerationDecision::Approve,
        res,
    )
    .await)
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use showcase::moderation::ProductStatus;
    use showcase_app::domain::moderation::{MockModerationService, ModerationServiceError};
    use testresult::TestResult;

    use crate::test_helpers::make_product;

    use super::{super::tests::moderation_service, *};

    fn make_service(moderation: MockModerationService) -> Service {
        moderation_service(
            moderation,
            Router::with_path("admin/products/{id}/approve").post(handler),
        )
    }

    #[tokio::test]
    async fn test_approve_returns_success() -> TestResult {
        let mut moderation = MockModerationService::new();

        moderation
            .expect_approve()
            .once()
            .withf(|product| *product == ProductId::from_i64(3))
            .return_once(|_| {
                let mut record = make_product(3, "rocket", 0);

                record.status = ProductStatus::Approved;
                record.approved_at = Some(Timestamp::UNIX_EPOCH);

                Ok(record)
            });

        moderation.expect_reject().never();

        let mut res = TestClient::post("http://example.com/admin/products/3/approve")
            .send(&make_service(moderation))
            .await;

        let body: ActionResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.success);
        assert_eq!(body.message, "Product approved");

        Ok(())
    }

    #[tokio::test]
    async fn test_approve_unknown_product_returns_404() -> TestResult {
        let mut moderation = MockModerationService::new();

        moderation
            .expect_approve()
            .once()
            .return_once(|_| Err(ModerationServiceError::NotFound));

        let mut res = TestClient::post("http://example.com/admin/products/404/approve")
            .send(&make_service(moderation))
            .await;

        let body: ActionResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert!(!body.success);

        Ok(())
    }
}
