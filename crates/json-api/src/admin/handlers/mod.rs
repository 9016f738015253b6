//! Admin Handlers

pub(crate) mod approve;
pub(crate) mod dashboard;
pub(crate) mod delete;
pub(crate) mod reject;

use salvo::{http::StatusCode, prelude::*};
use showcase::moderation::ModerationDecision;
use showcase_app::domain::{
    moderation::ModerationServiceError,
    products::records::{ProductId, ProductRecord},
};
use tracing::{error, info};

use crate::{actions::ActionResponse, state::State};

/// Apply `decision` to the product and describe the outcome.
pub(super) async fn decide(
    state: &State,
    product: ProductId,
    decision: ModerationDecision,
    res: &mut Response,
) -> Json<ActionResponse> {
    let result: Result<ProductRecord, ModerationServiceError> = match decision {
        ModerationDecision::Approve => state.app.moderation.approve(product).await,
        ModerationDecision::Reject => state.app.moderation.reject(product).await,
    };

    match result {
        Ok(record) => {
            info!(
                product = %record.id,
                slug = %record.slug,
                decision = decision.past_tense(),
                "moderation decision applied"
            );

            ActionResponse::succeeded(format!("Product {}", decision.past_tense()))
                .respond(res, StatusCode::OK)
        }
        Err(error) => failure(error, res),
    }
}

pub(super) fn failure(error: ModerationServiceError, res: &mut Response) -> Json<ActionResponse> {
    match error {
        ModerationServiceError::NotFound => {
            ActionResponse::failed("Product not found").respond(res, StatusCode::NOT_FOUND)
        }
        error => {
            error!("moderation failed: {error}");

            ActionResponse::failed("Moderation failed. Please try again.")
                .respond(res, StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use salvo::prelude::*;
    use showcase_app::{context::AppContext, domain::moderation::MockModerationService};

    use crate::test_helpers::{admin, app_service, strict_app};

    pub(super) fn moderation_service(moderation: MockModerationService, route: Router) -> Service {
        let app = AppContext {
            moderation: Arc::new(moderation),
            ..strict_app()
        };

        app_service(app, admin(), route)
    }
}
