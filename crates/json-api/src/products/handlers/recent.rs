//! Recently Launched Products Handler

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{oapi::extract::PathParam, prelude::*};
use showcase::listings::recent_cutoff;
use showcase_app::domain::products::data::{ProductFilter, ProductOrder};

use crate::{
    extensions::*,
    products::{errors::into_status_error, responses::ProductsResponse},
    state::State,
};

/// Recently Launched Products Handler
///
/// Approved products created within the last 30 days, most voted first.
#[endpoint(tags("products"), summary = "Recently Launched Products")]
pub(crate) async fn handler(
    locale: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let locale = locale.into_locale();

    let filter = ProductFilter::approved().created_after(recent_cutoff(Timestamp::now()));

    let products = state
        .app
        .products
        .list_localized(locale, filter, ProductOrder::MostVoted, None)
        .await
        .map_err(into_status_error)?;

    Ok(Json(ProductsResponse::new(locale, products)))
}
