//! Create Vote Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use showcase::votes::VoteDirection;
use showcase_app::domain::{products::records::ProductId, votes::VotesServiceError};
use tracing::error;

use crate::{actions::ActionResponse, extensions::*, observability::record_vote, state::State};

/// Create Vote Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateVoteRequest {
    /// `up` or `down`
    pub direction: String,
}

fn succeeded_message(direction: VoteDirection) -> &'static str {
    match direction {
        VoteDirection::Up => "Product voted successfully",
        VoteDirection::Down => "Product downvoted successfully",
    }
}

fn failed_message(direction: VoteDirection) -> &'static str {
    match direction {
        VoteDirection::Up => "Failed to upvote product. Please try again.",
        VoteDirection::Down => "Failed to downvote product. Please try again.",
    }
}

/// Create Vote Handler
///
/// Records one vote and returns the stored count. The count never drops below zero.
#[endpoint(
    tags("votes"),
    summary = "Vote on Product",
    responses(
        (status_code = StatusCode::OK, description = "Vote recorded"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown vote direction"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    json: JsonBody<CreateVoteRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ActionResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let Ok(direction) = json.into_inner().direction.parse::<VoteDirection>() else {
        return Ok(ActionResponse::failed("Vote direction must be \"up\" or \"down\"")
            .respond(res, StatusCode::BAD_REQUEST));
    };

    let body = match state
        .app
        .votes
        .apply_vote(ProductId::from_i64(id.into_inner()), direction)
        .await
    {
        Ok(receipt) => {
            record_vote(direction);

            ActionResponse::succeeded(succeeded_message(direction))
                .with_vote_count(receipt.vote_count)
                .respond(res, StatusCode::OK)
        }
        Err(VotesServiceError::NotFound) => {
            ActionResponse::failed("Product not found").respond(res, StatusCode::NOT_FOUND)
        }
        Err(source) => {
            error!(%direction, "failed to record vote: {source}");

            ActionResponse::failed(failed_message(direction))
                .respond(res, StatusCode::INTERNAL_SERVER_ERROR)
        }
    };

    Ok(body)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use showcase_app::{
        context::AppContext,
        domain::votes::{MockVotesService, data::VoteReceipt},
    };
    use testresult::TestResult;

    use crate::test_helpers::{app_service, member, storage_error, strict_app};

    use super::*;

    fn make_service(votes: MockVotesService) -> Service {
        let app = AppContext {
            votes: Arc::new(votes),
            ..strict_app()
        };

        app_service(
            app,
            member(),
            Router::with_path("products/{id}/votes").post(handler),
        )
    }

    #[tokio::test]
    async fn test_up_vote_returns_stored_count() -> TestResult {
        let mut votes = MockVotesService::new();

        votes
            .expect_apply_vote()
            .once()
            .withf(|product, direction| {
                *product == ProductId::from_i64(5) && *direction == VoteDirection::Up
            })
            .return_once(|product, _| {
                Ok(VoteReceipt {
                    product,
                    slug: "rocket".to_string(),
                    vote_count: 4,
                })
            });

        let mut res = TestClient::post("http://example.com/products/5/votes")
            .json(&json!({ "direction": "up" }))
            .send(&make_service(votes))
            .await;

        let body: ActionResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.success);
        assert_eq!(body.message, "Product voted successfully");
        assert_eq!(body.vote_count, Some(4));

        Ok(())
    }

    #[tokio::test]
    async fn test_down_vote_at_zero_stays_zero() -> TestResult {
        let mut votes = MockVotesService::new();

        votes
            .expect_apply_vote()
            .once()
            .withf(|_, direction| *direction == VoteDirection::Down)
            .return_once(|product, _| {
                Ok(VoteReceipt {
                    product,
                    slug: "rocket".to_string(),
                    vote_count: 0,
                })
            });

        let mut res = TestClient::post("http://example.com/products/5/votes")
            .json(&json!({ "direction": "down" }))
            .send(&make_service(votes))
            .await;

        let body: ActionResponse = res.take_json().await?;

        assert_eq!(body.message, "Product downvoted successfully");
        assert_eq!(body.vote_count, Some(0));

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_product_returns_404_body() -> TestResult {
        let mut votes = MockVotesService::new();

        votes
            .expect_apply_vote()
            .once()
            .return_once(|_, _| Err(VotesServiceError::NotFound));

        let mut res = TestClient::post("http://example.com/products/999/votes")
            .json(&json!({ "direction": "up" }))
            .send(&make_service(votes))
            .await;

        let body: ActionResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert!(!body.success);
        assert!(body.vote_count.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_storage_failure_returns_500_body() -> TestResult {
        let mut votes = MockVotesService::new();

        votes
            .expect_apply_vote()
            .once()
            .return_once(|_, _| Err(VotesServiceError::Sql(storage_error())));

        let mut res = TestClient::post("http://example.com/products/5/votes")
            .json(&json!({ "direction": "down" }))
            .send(&make_service(votes))
            .await;

        let body: ActionResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(
            body.message,
            "Failed to downvote product. Please try again."
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_direction_returns_400() {
        let mut votes = MockVotesService::new();

        votes.expect_apply_vote().never();

        let res = TestClient::post("http://example.com/products/5/votes")
            .json(&json!({ "direction": "sideways" }))
            .send(&make_service(votes))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }
}
