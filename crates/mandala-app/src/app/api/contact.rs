use salvo::http::StatusCode;
use salvo::writing::Json;
use salvo::{Depot, Request, Response, Router, handler};

use mandala_core::constants::CONTACT_ROUTE_COMPONENT;
use mandala_db::model::contact::ContactMessage;
use mandala_service::contact::{self, ContactInput};

use super::{MessageBody, path_param};
use crate::error::AppResult;
use crate::middleware::auth::AdminGate;
use crate::store_handler::get_store_from_depot;

/// ## Summary
/// POST /api/contact - Public contact form submission. Responds 201.
#[handler]
async fn submit(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> AppResult<Json<ContactMessage>> {
    let store = get_store_from_depot(depot)?;
    let input = req.parse_json::<ContactInput>().await?;

    let message = contact::submit(&*store, input).await?;

    res.status_code(StatusCode::CREATED);
    Ok(Json(message))
}

#[handler]
async fn list(depot: &mut Depot) -> AppResult<Json<Vec<ContactMessage>>> {
    let store = get_store_from_depot(depot)?;

    Ok(Json(contact::list(&*store).await?))
}

#[handler]
async fn mark_read(req: &mut Request, depot: &mut Depot) -> AppResult<Json<ContactMessage>> {
    let store = get_store_from_depot(depot)?;
    let id = path_param(req, "id");

    Ok(Json(contact::mark_read(&*store, &id).await?))
}

#[handler]
async fn delete(req: &mut Request, depot: &mut Depot) -> AppResult<Json<MessageBody>> {
    let store = get_store_from_depot(depot)?;
    let id = path_param(req, "id");

    contact::delete(&*store, &id).await?;

    Ok(Json(MessageBody::new("Message deleted successfully")))
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(CONTACT_ROUTE_COMPONENT)
        .push(Router::new().post(submit))
        .push(
            Router::new()
                .hoop(AdminGate::strict())
                .get(list)
                .push(Router::with_path("{id}/read").put(mark_read))
                .push(Router::with_path("{id}").delete(delete)),
        )
}
