//! Admin Dashboard Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use showcase::moderation::ModerationStats;
use showcase_app::domain::products::data::{ProductFilter, ProductOrder};

use crate::{
    extensions::*,
    products::{errors::into_status_error, responses::ProductResponse},
    state::State,
};

/// Product counts per status
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct StatsResponse {
    pub total: u64,
    pub pending: u64,
    pub approved: u64,
    pub rejected: u64,
}

impl From<ModerationStats> for StatsResponse {
    fn from(stats: ModerationStats) -> Self {
        Self {
            total: stats.total,
            pending: stats.pending,
            approved: stats.approved,
            rejected: stats.rejected,
        }
    }
}

/// Admin Dashboard Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DashboardResponse {
    pub locale: String,
    pub stats: StatsResponse,

    /// Products awaiting review, newest first.
    pub pending: Vec<ProductResponse>,
}

/// Admin Dashboard Handler
#[endpoint(
    tags("admin"),
    summary = "Admin Dashboard",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Stats and review queue"),
        (status_code = StatusCode::FORBIDDEN, description = "Admin access required"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    locale: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<DashboardResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let locale = locale.into_locale();

    let stats = state
        .app
        .moderation
        .stats()
        .await
        .or_500("failed to count products")?;

    let pending = state
        .app
        .products
        .list_localized(locale, ProductFilter::pending(), ProductOrder::Newest, None)
        .await
        .map_err(into_status_error)?;

    Ok(Json(DashboardResponse {
        locale: locale.to_string(),
        stats: stats.into(),
        pending: pending.into_iter().map(Into::into).collect(),
    }))
}
