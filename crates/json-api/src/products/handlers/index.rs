//! Product Index Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use showcase_app::domain::products::data::{ProductFilter, ProductOrder};

use crate::{
    extensions::*,
    products::{errors::into_status_error, responses::ProductsResponse},
    state::State,
};

/// Product Index Handler
///
/// Every approved product, most voted first.
#[endpoint(tags("products"), summary = "List Products")]
pub(crate) async fn handler(
    locale: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let locale = locale.into_locale();

    let products = state
        .app
        .products
        .list_localized(
            locale,
            ProductFilter::approved(),
            ProductOrder::MostVoted,
            None,
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(ProductsResponse::new(locale, products)))
}
