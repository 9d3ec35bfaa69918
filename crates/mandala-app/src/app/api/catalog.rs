//! Route families over the shared content table.
//!
//! `services`, `awards`, `news` and `workshops` share one set of handlers; the
//! family router injects its [`CatalogScope`] into the depot and the handlers
//! read it back.

use salvo::http::StatusCode;
use salvo::writing::Json;
use salvo::{Depot, Request, Response, Router, async_trait, handler};

use mandala_core::constants::{
    AWARDS_ROUTE_COMPONENT, NEWS_ROUTE_COMPONENT, SERVICES_ROUTE_COMPONENT,
    WORKSHOPS_ROUTE_COMPONENT,
};
use mandala_core::error::CoreError;
use mandala_db::model::content::ContentItem;
use mandala_service::catalog::{self, CatalogScope, CategoryGroups, ContentPatch, NewContentInput};

use super::{MessageBody, path_param};
use crate::error::AppResult;
use crate::middleware::auth::AdminGate;
use crate::store_handler::get_store_from_depot;

/// Injects the family's scope for the handlers below it.
struct ScopeHandler(CatalogScope);

#[async_trait]
impl salvo::Handler for ScopeHandler {
    async fn handle(
        &self,
        _req: &mut Request,
        depot: &mut Depot,
        _res: &mut Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(self.0);
    }
}

fn scope_from_depot(depot: &Depot) -> AppResult<CatalogScope> {
    depot
        .obtain::<CatalogScope>()
        .copied()
        .map_err(|_err| CoreError::InvariantViolation("Catalog scope not found in depot").into())
}

#[handler]
async fn list(depot: &mut Depot) -> AppResult<Json<Vec<ContentItem>>> {
    let store = get_store_from_depot(depot)?;
    let scope = scope_from_depot(depot)?;

    Ok(Json(catalog::list(&*store, scope).await?))
}

#[handler]
async fn list_grouped(depot: &mut Depot) -> AppResult<Json<CategoryGroups>> {
    let store = get_store_from_depot(depot)?;

    Ok(Json(catalog::list_grouped(&*store).await?))
}

#[handler]
async fn list_by_category(req: &mut Request, depot: &mut Depot) -> AppResult<Json<Vec<ContentItem>>> {
    let store = get_store_from_depot(depot)?;
    let category = path_param(req, "category");

    Ok(Json(catalog::list_by_category(&*store, &category).await?))
}

#[handler]
async fn get_by_slug(req: &mut Request, depot: &mut Depot) -> AppResult<Json<ContentItem>> {
    let store = get_store_from_depot(depot)?;
    let scope = scope_from_depot(depot)?;
    let slug = path_param(req, "slug");

    Ok(Json(catalog::get_by_slug(&*store, scope, &slug).await?))
}

#[handler]
async fn get_by_id(req: &mut Request, depot: &mut Depot) -> AppResult<Json<ContentItem>> {
    let store = get_store_from_depot(depot)?;
    let scope = scope_from_depot(depot)?;
    let id = path_param(req, "id");

    Ok(Json(catalog::get_by_id(&*store, scope, &id).await?))
}

/// ## Summary
/// Creates an item. Responds 201 with the stored item.
#[handler]
async fn create(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> AppResult<Json<ContentItem>> {
    let store = get_store_from_depot(depot)?;
    let scope = scope_from_depot(depot)?;
    let input = req.parse_json::<NewContentInput>().await?;

    let item = catalog::create(&*store, scope, input).await?;

    res.status_code(StatusCode::CREATED);
    Ok(Json(item))
}

#[handler]
async fn update(req: &mut Request, depot: &mut Depot) -> AppResult<Json<ContentItem>> {
    let store = get_store_from_depot(depot)?;
    let scope = scope_from_depot(depot)?;
    let id = path_param(req, "id");
    let patch = req.parse_json::<ContentPatch>().await?;

    Ok(Json(catalog::update(&*store, scope, &id, patch).await?))
}

#[handler]
async fn delete(req: &mut Request, depot: &mut Depot) -> AppResult<Json<MessageBody>> {
    let store = get_store_from_depot(depot)?;
    let scope = scope_from_depot(depot)?;
    let id = path_param(req, "id");

    catalog::delete(&*store, scope, &id).await?;

    Ok(Json(MessageBody::new(scope.deleted_message())))
}

/// ## Summary
/// Builds one family router: public reads, writes behind `gate`.
fn family(path: &str, scope: CatalogScope, gate: AdminGate, extra_reads: Vec<Router>) -> Router {
    let reads = Router::new()
        .get(list)
        .push(Router::with_path("slug/{slug}").get(get_by_slug))
        .push(Router::with_path("id/{id}").get(get_by_id));
    let reads = extra_reads.into_iter().fold(reads, Router::push);

    let writes = Router::new()
        .hoop(gate)
        .post(create)
        .push(Router::with_path("{id}").put(update).delete(delete));

    Router::with_path(path)
        .hoop(ScopeHandler(scope))
        .push(reads)
        .push(writes)
}

#[must_use]
pub fn routes() -> Vec<Router> {
    vec![
        family(
            SERVICES_ROUTE_COMPONENT,
            CatalogScope::Services,
            AdminGate::service_writes(),
            vec![
                Router::with_path("categories").get(list_grouped),
                Router::with_path("category/{category}").get(list_by_category),
            ],
        ),
        family(
            AWARDS_ROUTE_COMPONENT,
            CatalogScope::Awards,
            AdminGate::strict(),
            Vec::new(),
        ),
        family(
            NEWS_ROUTE_COMPONENT,
            CatalogScope::News,
            AdminGate::strict(),
            Vec::new(),
        ),
        family(
            WORKSHOPS_ROUTE_COMPONENT,
            CatalogScope::Workshops,
            AdminGate::strict(),
            Vec::new(),
        ),
    ]
}

