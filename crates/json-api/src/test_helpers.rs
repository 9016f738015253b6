//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};
use showcase::{
    callers::Caller, locales::Locale, moderation::ProductStatus, tags::Tags,
    translations::Translation,
};
use showcase_app::{
    auth::MockCallersService,
    context::AppContext,
    domain::{
        moderation::MockModerationService,
        products::{
            MockProductsService,
            records::{LocalizedProduct, ProductId, ProductRecord},
        },
        submissions::MockSubmissionsService,
        votes::MockVotesService,
    },
};

use crate::{extensions::*, state::State};

/// Puts a fixed caller in the depot, standing in for [`crate::auth::middleware::identify`].
#[derive(Debug, Clone)]
pub(crate) struct InjectCaller(Caller);

#[salvo::handler]
impl InjectCaller {
    async fn handle(
        &self,
        req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        ctrl: &mut FlowCtrl,
    ) {
        depot.insert_caller(self.0.clone());
        ctrl.call_next(req, depot, res).await;
    }
}

pub(crate) fn inject_caller(caller: Caller) -> InjectCaller {
    InjectCaller(caller)
}

pub(crate) fn member() -> Caller {
    Caller::authenticated(Some("maker@example.com".to_string()), false)
}

pub(crate) fn admin() -> Caller {
    Caller::authenticated(Some("admin@example.com".to_string()), true)
}

/// Services that fail the test when called.
pub(crate) fn strict_app() -> AppContext {
    AppContext {
        products: Arc::new(MockProductsService::new()),
        votes: Arc::new(MockVotesService::new()),
        moderation: Arc::new(MockModerationService::new()),
        submissions: Arc::new(MockSubmissionsService::new()),
        callers: Arc::new(MockCallersService::new()),
    }
}

pub(crate) fn state_with_callers(callers: MockCallersService) -> Arc<State> {
    State::from_app_context(AppContext {
        callers: Arc::new(callers),
        ..strict_app()
    })
}

/// Serve `route` with `app` in the depot and `caller` already identified.
pub(crate) fn app_service(app: AppContext, caller: Caller, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(State::from_app_context(app)))
            .hoop(inject_caller(caller))
            .push(route),
    )
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    let app = AppContext {
        products: Arc::new(products),
        ..strict_app()
    };

    app_service(app, Caller::anonymous(), route)
}

pub(crate) fn make_product(id: i64, slug: &str, vote_count: u32) -> ProductRecord {
    ProductRecord {
        id: ProductId::from_i64(id),
        slug: slug.to_string(),
        website_url: Some(format!("https://{slug}.example.com")),
        tags: Tags::parse("ai, tools"),
        vote_count,
        status: ProductStatus::Approved,
        submitted_by: "maker@example.com".to_string(),
        created_at: Timestamp::UNIX_EPOCH,
        approved_at: Some(Timestamp::UNIX_EPOCH),
    }
}

pub(crate) fn make_localized(
    id: i64,
    slug: &str,
    name: &str,
    locale: Locale,
    vote_count: u32,
) -> LocalizedProduct {
    LocalizedProduct {
        product: make_product(id, slug, vote_count),
        locale,
        translation: Translation {
            name: name.to_string(),
            tagline: Some(format!("{name} tagline")),
            description: None,
        },
    }
}

/// A storage failure for error-path tests.
pub(crate) fn storage_error() -> sqlx::Error {
    sqlx::Error::PoolTimedOut
}
