use salvo::http::StatusCode;
use salvo::writing::Json;
use salvo::{Depot, Request, Response, Router, handler};

use mandala_core::constants::GALLERY_ROUTE_COMPONENT;
use mandala_db::model::gallery::GalleryItem;
use mandala_service::gallery::{self, GalleryInput, GalleryPatch};

use super::{MessageBody, path_param};
use crate::error::AppResult;
use crate::middleware::auth::AdminGate;
use crate::store_handler::get_store_from_depot;

/// ## Summary
/// GET /api/gallery - Active images, optionally `?category=`.
#[handler]
async fn list(req: &mut Request, depot: &mut Depot) -> AppResult<Json<Vec<GalleryItem>>> {
    let store = get_store_from_depot(depot)?;
    let category = req.query::<String>("category");

    Ok(Json(gallery::list(&*store, category.as_deref()).await?))
}

#[handler]
async fn get(req: &mut Request, depot: &mut Depot) -> AppResult<Json<GalleryItem>> {
    let store = get_store_from_depot(depot)?;
    let id = path_param(req, "id");

    Ok(Json(gallery::get(&*store, &id).await?))
}

#[handler]
async fn create(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> AppResult<Json<GalleryItem>> {
    let store = get_store_from_depot(depot)?;
    let input = req.parse_json::<GalleryInput>().await?;

    let item = gallery::create(&*store, input).await?;

    res.status_code(StatusCode::CREATED);
    Ok(Json(item))
}

#[handler]
async fn update(req: &mut Request, depot: &mut Depot) -> AppResult<Json<GalleryItem>> {
    let store = get_store_from_depot(depot)?;
    let id = path_param(req, "id");
    let patch = req.parse_json::<GalleryPatch>().await?;

    Ok(Json(gallery::update(&*store, &id, patch).await?))
}

#[handler]
async fn delete(req: &mut Request, depot: &mut Depot) -> AppResult<Json<MessageBody>> {
    let store = get_store_from_depot(depot)?;
    let id = path_param(req, "id");

    gallery::delete(&*store, &id).await?;

    Ok(Json(MessageBody::new("Gallery item deleted successfully")))
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(GALLERY_ROUTE_COMPONENT)
        .push(
            Router::new()
                .get(list)
                .push(Router::with_path("{id}").get(get)),
        )
        .push(
            Router::new()
                .hoop(AdminGate::strict())
                .post(create)
                .push(Router::with_path("{id}").put(update).delete(delete)),
        )
}
