use salvo::http::StatusCode;
use salvo::writing::Json;
use salvo::{Depot, Request, Response, Router, handler};

use mandala_core::constants::CONFIRMATIONS_ROUTE_COMPONENT;
use mandala_db::model::confirmation::Confirmation;
use mandala_service::confirmation::{self, ConfirmationInput};

use super::{MessageBody, path_param};
use crate::error::AppResult;
use crate::middleware::auth::AdminGate;
use crate::store_handler::get_store_from_depot;

/// ## Summary
/// POST /api/confirmations - Public terms acceptance. Responds 201.
#[handler]
async fn submit(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> AppResult<Json<Confirmation>> {
    let store = get_store_from_depot(depot)?;
    let input = req.parse_json::<ConfirmationInput>().await?;

    let stored = confirmation::submit(&*store, input).await?;

    res.status_code(StatusCode::CREATED);
    Ok(Json(stored))
}

#[handler]
async fn list(depot: &mut Depot) -> AppResult<Json<Vec<Confirmation>>> {
    let store = get_store_from_depot(depot)?;

    Ok(Json(confirmation::list(&*store).await?))
}

#[handler]
async fn get(req: &mut Request, depot: &mut Depot) -> AppResult<Json<Confirmation>> {
    let store = get_store_from_depot(depot)?;
    let id = path_param(req, "id");

    Ok(Json(confirmation::get(&*store, &id).await?))
}

#[handler]
async fn delete(req: &mut Request, depot: &mut Depot) -> AppResult<Json<MessageBody>> {
    let store = get_store_from_depot(depot)?;
    let id = path_param(req, "id");

    confirmation::delete(&*store, &id).await?;

    Ok(Json(MessageBody::new("Confirmation deleted successfully")))
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(CONFIRMATIONS_ROUTE_COMPONENT)
        .push(Router::new().post(submit))
        .push(
            Router::new()
                .hoop(AdminGate::strict())
                .get(list)
                .push(Router::with_path("{id}").get(get).delete(delete)),
        )
}
