//! Delete Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use showcase_app::domain::products::records::ProductId;
use tracing::info;

use crate::{actions::ActionResponse, extensions::*, state::State};

/// Delete Product Handler
///
/// Removes a product and its translations permanently.
#[endpoint(
    tags("admin"),
    summary = "Delete Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product deleted"),
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
    let product = ProductId::from_i64(id.into_inner());

    let body = match state.app.moderation.delete(product).await {
        Ok(()) => {
            info!(%product, "product deleted");

            ActionResponse::succeeded("Product deleted").respond(res, StatusCode::OK)
        }
        Err(error) => super::failure(error, res),
    };

    Ok(body)
}
