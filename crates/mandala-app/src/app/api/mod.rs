mod auth;
mod catalog;
mod confirmations;
mod contact;
mod gallery;
mod health;

use salvo::Router;
use serde::Serialize;

pub use mandala_core::constants::{API_ROUTE_COMPONENT, API_ROUTE_PREFIX};

/// `{ "message": ... }` body returned by deletes and other acknowledgements.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Path parameter as text; a missing parameter reads as empty, which no
/// lookup matches.
fn path_param(req: &salvo::Request, name: &str) -> String {
    req.param::<String>(name).unwrap_or_default()
}

/// ## Summary
/// Constructs the `/api` router with every resource family.
#[must_use]
pub fn routes() -> Router {
    let router = Router::with_path(API_ROUTE_COMPONENT)
        .push(health::routes())
        .push(auth::routes())
        .push(contact::routes())
        .push(confirmations::routes())
        .push(gallery::routes());

    catalog::routes().into_iter().fold(router, Router::push)
}
