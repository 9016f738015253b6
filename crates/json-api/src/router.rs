//! App Router

use salvo::Router;

use crate::{
    admin,
    auth::middleware::{identify, require_admin},
    products, submissions, votes,
};

/// Every API route, behind caller identification.
pub(crate) fn app_router() -> Router {
    Router::new()
        .hoop(identify)
        .push(Router::with_path("products/{id}/votes").post(votes::create::handler))
        .push(
            Router::with_path("admin/products/{id}")
                .hoop(require_admin)
                .delete(admin::delete::handler)
                .push(Router::with_path("approve").post(admin::approve::handler))
                .push(Router::with_path("reject").post(admin::reject::handler)),
        )
        .push(
            Router::with_path("{locale}")
                .push(
                    Router::with_path("admin")
                        .hoop(require_admin)
                        .get(admin::dashboard::handler),
                )
                .push(Router::with_path("explore").get(products::explore::handler))
                .push(Router::with_path("submissions").post(submissions::create::handler))
                .push(
                    Router::with_path("products")
                        .get(products::index::handler)
                        .push(Router::with_path("featured").get(products::featured::handler))
                        .push(Router::with_path("recent").get(products::recent::handler))
                        .push(Router::with_path("{slug}").get(products::get::handler)),
                ),
        )
}
