//! Explore Products Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{PathParam, QueryParam},
    prelude::*,
};
use showcase::listings::{ExploreQuery, ExploreSort, explore};
use showcase_app::domain::products::data::{ProductFilter, ProductOrder};

use crate::{
    extensions::*,
    products::{errors::into_status_error, responses::ProductsResponse},
    state::State,
};

/// Explore Products Handler
///
/// Approved products matching `q` by name, sorted `recent` (default) or `trending`.
#[endpoint(
    tags("products"),
    summary = "Explore Products",
    responses(
        (status_code = StatusCode::OK, description = "Matching products"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown sort order"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    locale: PathParam<String>,
    q: QueryParam<String, false>,
    sort: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let locale = locale.into_locale();

    let query = ExploreQuery {
        search: q.into_inner(),
        sort: sort
            .into_inner()
            .map(|sort| sort.parse::<ExploreSort>())
            .transpose()
            .or_400("sort must be \"recent\" or \"trending\"")?
            .unwrap_or_default(),
    };

    let products = state
        .app
        .products
        .list_localized(
            locale,
            ProductFilter::approved(),
            ProductOrder::Newest,
            None,
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(ProductsResponse::new(
        locale,
        explore(products, &query),
    )))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use showcase::locales::Locale;
    use showcase_app::domain::products::MockProductsService;
    use testresult::TestResult;

    use crate::test_helpers::{make_localized, products_service};

    use super::*;

    fn make_service() -> Result<Service, jiff::Error> {
        let mut rocket = make_localized(1, "rocket", "Rocket", Locale::En, 150);
        let mut pocket = make_localized(2, "pocket-notes", "Pocket Notes", Locale::En, 20);
        let mut lantern = make_localized(3, "lantern", "Lantern", Locale::En, 300);

        rocket.product.created_at = "2026-03-01T00:00:00Z".parse::<Timestamp>()?;
        pocket.product.created_at = "2026-03-10T00:00:00Z".parse::<Timestamp>()?;
        lantern.product.created_at = "2026-02-01T00:00:00Z".parse::<Timestamp>()?;

        let mut products = MockProductsService::new();

        products
            .expect_list_localized()
            .once()
            .withf(|_, filter, _, _| *filter == ProductFilter::approved())
            .return_once(move |_, _, _, _| Ok(vec![rocket, pocket, lantern]));

        Ok(products_service(
            products,
            Router::with_path("{locale}/explore").get(handler),
        ))
    }

    fn slugs(body: &ProductsResponse) -> Vec<&str> {
        body.products
            .iter()
            .map(|product| product.slug.as_str())
            .collect()
    }

    #[tokio::test]
    async fn test_explore_defaults_to_recent() -> TestResult {
        let mut res = TestClient::get("http://example.com/en/explore")
            .send(&make_service()?)
            .await;

        let body: ProductsResponse = res.take_json().await?;

        assert_eq!(slugs(&body), vec!["pocket-notes", "rocket", "lantern"]);

        Ok(())
    }

    #[tokio::test]
    async fn test_explore_trending_with_search() -> TestResult {
        let mut res = TestClient::get("http://example.com/en/explore?q=ocke&sort=trending")
            .send(&make_service()?)
            .await;

        let body: ProductsResponse = res.take_json().await?;

        assert_eq!(slugs(&body), vec!["rocket"]);

        Ok(())
    }

    #[tokio::test]
    async fn test_explore_unknown_sort_returns_400() {
        let mut products = MockProductsService::new();

        products.expect_list_localized().never();

        let res = TestClient::get("http://example.com/en/explore?sort=popular")
            .send(&products_service(
                products,
                Router::with_path("{locale}/explore").get(handler),
            ))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }
}
