use salvo::http::header::AUTHORIZATION;
use salvo::{Depot, Writer};

use crate::config::get_config_from_depot;
use crate::error::{AppError, AppResult};
use mandala_service::auth::{AuthenticatedAdmin, TokenKeys};
use mandala_service::error::ServiceError;

/// Middleware handler that admits only requests carrying a valid admin token.
///
/// `honor_open_service_writes` lets the operator open the generic `/services`
/// write routes through `catalog.open_service_writes`.
#[derive(Debug, Clone, Copy)]
pub struct AdminGate {
    honor_open_service_writes: bool,
}

impl AdminGate {
    /// Token always required.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            honor_open_service_writes: false,
        }
    }

    /// Token required unless `catalog.open_service_writes` is set.
    #[must_use]
    pub const fn service_writes() -> Self {
        Self {
            honor_open_service_writes: true,
        }
    }

    fn authenticate(self, req: &salvo::Request, depot: &Depot) -> AppResult<Option<AuthenticatedAdmin>> {
        let config = get_config_from_depot(depot)?;

        if self.honor_open_service_writes && config.catalog.open_service_writes {
            return Ok(None);
        }

        let token = bearer_token(req).ok_or_else(|| {
            ServiceError::NotAuthenticated("No token, authorization denied".to_string())
        })?;

        let admin = TokenKeys::from_config(&config.auth).verify(token)?;
        Ok(Some(admin))
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
fn bearer_token(req: &salvo::Request) -> Option<&str> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();

    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

/// ## Summary
/// Verifies the admin token and stores the admin identity in the depot.
///
/// ## Side Effects
/// Injects [`AuthenticatedAdmin`] into the depot for downstream handlers.
///
/// ## Errors
/// Responds 401 when the token is missing, malformed or expired; the rest of
/// the chain is skipped.
#[salvo::async_trait]
impl salvo::Handler for AdminGate {
    #[tracing::instrument(skip(self, req, depot, res, ctrl), fields(
        method = %req.method(),
        path = %req.uri().path()
    ))]
    async fn handle(
        &self,
        req: &mut salvo::Request,
        depot: &mut Depot,
        res: &mut salvo::Response,
        ctrl: &mut salvo::FlowCtrl,
    ) {
        match self.authenticate(req, depot) {
            Ok(Some(admin)) => {
                tracing::debug!(admin_id = %admin.id, "Admin authenticated");
                depot.inject(admin);
            }
            Ok(None) => {
                tracing::trace!("Open service writes enabled, skipping token check");
            }
            Err(err) => {
                ctrl.skip_rest();
                err.write(req, depot, res).await;
            }
        }
    }
}

/// ## Summary
/// Retrieves the admin identity stored by [`AdminGate`].
///
/// ## Errors
/// Returns an error if no admin was authenticated on this request.
pub fn get_admin_from_depot(depot: &Depot) -> AppResult<AuthenticatedAdmin> {
    depot.obtain::<AuthenticatedAdmin>().cloned().map_err(|_err| {
        AppError::ServiceError(ServiceError::NotAuthenticated(
            "No token, authorization denied".to_string(),
        ))
    })
}
