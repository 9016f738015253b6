//! Featured Products Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{PathParam, QueryParam},
    prelude::*,
};
use showcase_app::domain::products::data::{ProductFilter, ProductOrder};

use crate::{
    extensions::*,
    products::{errors::into_status_error, responses::ProductsResponse},
    state::State,
};

/// Featured Products Handler
///
/// Approved products, most voted first, optionally capped at `limit`.
#[endpoint(tags("products"), summary = "Featured Products")]
pub(crate) async fn handler(
    locale: PathParam<String>,
    limit: QueryParam<u32, false>,
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
            limit.into_inner(),
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(ProductsResponse::new(locale, products)))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use showcase::locales::Locale;
    use showcase_app::domain::products::MockProductsService;
    use testresult::TestResult;

    use crate::test_helpers::{make_localized, products_service};

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        products_service(
            products,
            Router::with_path("{locale}/products/featured").get(handler),
        )
    }

    #[tokio::test]
    async fn test_featured_forwards_limit() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_list_localized()
            .once()
            .withf(|locale, filter, order, limit| {
                *locale == Locale::En
                    && *filter == ProductFilter::approved()
                    && *order == ProductOrder::MostVoted
                    && *limit == Some(3)
            })
            .return_once(|_, _, _, _| {
                Ok(vec![make_localized(1, "rocket", "Rocket", Locale::En, 250)])
            });

        let mut res = TestClient::get("http://example.com/en/products/featured?limit=3")
            .send(&make_service(products))
            .await;

        let body: ProductsResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(
            body.products.first().map(|product| product.featured),
            Some(true)
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_featured_without_limit_lists_all() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_list_localized()
            .once()
            .withf(|_, _, _, limit| limit.is_none())
            .return_once(|_, _, _, _| Ok(Vec::new()));

        let res = TestClient::get("http://example.com/en/products/featured")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }
}
