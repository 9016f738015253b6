//! Reject Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use showcase::moderation::ModerationDecision;
use showcase_app::domain::products::records::ProductId;

use crate::{actions::ActionResponse, extensions::*, state::State};

/// Reject Product Handler
///
/// Hides a product from public listings and clears its approval time.
#[endpoint(
    tags("admin"),
    summary = "Reject Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product rejected"),
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
        ModerationDecision::Reject,
        res,
    )
    .await)
}
