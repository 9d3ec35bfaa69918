use salvo::http::StatusCode;
use salvo::writing::Json;
use salvo::{Depot, Request, Response, Router, handler};

use mandala_core::constants::AUTH_ROUTE_COMPONENT;
use mandala_service::auth::{self, AuthenticatedAdmin, Credentials, Session, TokenKeys};
use mandala_service::error::ServiceError;

use crate::config::get_config_from_depot;
use crate::error::AppResult;
use crate::middleware::auth::{AdminGate, get_admin_from_depot};
use crate::store_handler::get_store_from_depot;

/// ## Summary
/// POST /api/auth/register - Creates an admin account and returns its token.
///
/// ## Errors
/// Returns HTTP 403 when registration is disabled, 400 when the email is
/// taken or the payload is invalid.
#[handler]
async fn register(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> AppResult<Json<Session>> {
    let config = get_config_from_depot(depot)?;
    if !config.auth.allow_registration {
        return Err(ServiceError::Forbidden("Registration is disabled".to_string()).into());
    }

    let store = get_store_from_depot(depot)?;
    let credentials = req.parse_json::<Credentials>().await?;
    let keys = TokenKeys::from_config(&config.auth);

    let session = auth::register(&*store, &keys, credentials).await?;

    res.status_code(StatusCode::CREATED);
    Ok(Json(session))
}

/// ## Summary
/// POST /api/auth/login - Exchanges credentials for a session token.
///
/// ## Errors
/// Returns HTTP 401 with the same body for an unknown email and a wrong password.
#[handler]
async fn login(req: &mut Request, depot: &mut Depot) -> AppResult<Json<Session>> {
    let config = get_config_from_depot(depot)?;
    let store = get_store_from_depot(depot)?;
    let credentials = req.parse_json::<Credentials>().await?;
    let keys = TokenKeys::from_config(&config.auth);

    Ok(Json(auth::login(&*store, &keys, credentials).await?))
}

/// ## Summary
/// GET /api/auth/me - Returns the admin identity carried by the token.
#[handler]
async fn me(depot: &mut Depot) -> AppResult<Json<AuthenticatedAdmin>> {
    Ok(Json(get_admin_from_depot(depot)?))
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(AUTH_ROUTE_COMPONENT)
        .push(Router::with_path("register").post(register))
        .push(Router::with_path("login").post(login))
        .push(Router::with_path("me").hoop(AdminGate::strict()).get(me))
}
