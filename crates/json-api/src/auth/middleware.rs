//! Caller identification and access hoops.

use std::sync::Arc;

use salvo::{http::header::AUTHORIZATION, prelude::*};
use showcase::callers::Caller;
use showcase_app::auth::AuthServiceError;
use tracing::error;

use crate::{extensions::*, state::State};

/// Resolve the bearer token, if any, to a [`Caller`] in the depot.
///
/// Requests without an `Authorization` header continue as anonymous callers.
#[salvo::handler]
pub(crate) async fn identify(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    if req.headers().get(AUTHORIZATION).is_none() {
        depot.insert_caller(Caller::anonymous());
        ctrl.call_next(req, depot, res).await;

        return;
    }

    let Some(token) = extract_bearer_token(req) else {
        reject(
            res,
            ctrl,
            StatusError::unauthorized().brief("Missing or invalid Authorization header"),
        );

        return;
    };

    let state = match depot.obtain_or_500::<Arc<State>>() {
        Ok(state) => state,
        Err(status) => {
            reject(res, ctrl, status);

            return;
        }
    };

    let caller = match state.app.callers.identify(token).await {
        Ok(caller) => caller,
        Err(AuthServiceError::NotFound) => {
            reject(res, ctrl, StatusError::unauthorized().brief("Invalid API token"));

            return;
        }
        Err(source) => {
            error!("failed to identify caller: {source}");
            reject(res, ctrl, StatusError::internal_server_error());

            return;
        }
    };

    depot.insert_caller(caller);

    ctrl.call_next(req, depot, res).await;
}

/// Answer 401 for anonymous callers and 403 for signed-in callers without the admin
/// capability.
#[salvo::handler]
pub(crate) async fn require_admin(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let caller = depot.caller();

    if !caller.is_authenticated() {
        reject(res, ctrl, StatusError::unauthorized().brief("Sign in required"));

        return;
    }

    if !caller.is_admin() {
        reject(res, ctrl, StatusError::forbidden().brief("Admin access required"));

        return;
    }

    ctrl.call_next(req, depot, res).await;
}

fn reject(res: &mut Response, ctrl: &mut FlowCtrl, status: StatusError) {
    res.render(status);
    ctrl.skip_rest();
}

fn extract_bearer_token(req: &Request) -> Option<&str> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }

    Some(token)
}

#[cfg(test)]
mod tests {
    use salvo::{
        affix_state::inject,
        test::{ResponseExt, TestClient},
    };
    use showcase_app::auth::MockCallersService;
    use testresult::TestResult;

    use crate::test_helpers::{inject_caller, state_with_callers};

    use super::*;

    #[salvo::handler]
    async fn echo_caller(depot: &mut Depot, res: &mut Response) {
        let caller = depot.caller();

        let label = match (caller.is_authenticated(), caller.is_admin()) {
            (false, _) => "anonymous",
            (true, false) => "member",
            (true, true) => "admin",
        };

        res.render(label);
    }

    fn make_service(callers: MockCallersService) -> Service {
        let router = Router::new()
            .hoop(inject(state_with_callers(callers)))
            .hoop(identify)
            .push(Router::new().get(echo_caller));

        Service::new(router)
    }

    fn guarded_service(caller: Caller, guard: impl Handler) -> Service {
        Service::new(
            Router::new()
                .hoop(inject_caller(caller))
                .hoop(guard)
                .push(Router::new().get(echo_caller)),
        )
    }

    #[tokio::test]
    async fn test_missing_authorization_header_is_anonymous() -> TestResult {
        let mut callers = MockCallersService::new();

        callers.expect_identify().never();

        let mut res = TestClient::get("http://example.com")
            .send(&make_service(callers))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(res.take_string().await?, "anonymous");

        Ok(())
    }

    #[tokio::test]
    async fn test_non_bearer_authorization_header_returns_401() -> TestResult {
        let mut callers = MockCallersService::new();

        callers.expect_identify().never();

        let res = TestClient::get("http://example.com")
            .add_header(AUTHORIZATION, "Basic abc123", true)
            .send(&make_service(callers))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_token_returns_401() -> TestResult {
        let mut callers = MockCallersService::new();

        callers
            .expect_identify()
            .once()
            .withf(|token| token == "abc123")
            .return_once(|_| Err(AuthServiceError::NotFound));

        let res = TestClient::get("http://example.com")
            .add_header(AUTHORIZATION, "Bearer abc123", true)
            .send(&make_service(callers))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_known_token_injects_caller() -> TestResult {
        let mut callers = MockCallersService::new();

        callers
            .expect_identify()
            .once()
            .withf(|token| token == "abc123")
            .return_once(|_| Ok(Caller::authenticated(None, true)));

        let mut res = TestClient::get("http://example.com")
            .add_header(AUTHORIZATION, "bearer abc123", true)
            .send(&make_service(callers))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(res.take_string().await?, "admin");

        Ok(())
    }

    #[tokio::test]
    async fn test_require_admin_distinguishes_anonymous_and_members() {
        let anonymous = TestClient::get("http://example.com")
            .send(&guarded_service(Caller::anonymous(), require_admin))
            .await;

        let member = TestClient::get("http://example.com")
            .send(&guarded_service(
                Caller::authenticated(None, false),
                require_admin,
            ))
            .await;

        let admin = TestClient::get("http://example.com")
            .send(&guarded_service(Caller::authenticated(None, true), require_admin))
            .await;

        assert_eq!(anonymous.status_code, Some(StatusCode::UNAUTHORIZED));
        assert_eq!(member.status_code, Some(StatusCode::FORBIDDEN));
        assert_eq!(admin.status_code, Some(StatusCode::OK));
    }
}
