use salvo::async_trait;

use crate::error::AppResult;
use mandala_core::error::CoreError;
use mandala_db::store::SharedStore;

/// Makes the storage backend available to every handler below it.
pub struct StoreHandler {
    pub store: SharedStore,
}

#[async_trait]
impl salvo::Handler for StoreHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(SharedStore::clone(&self.store));
    }
}

/// ## Summary
/// Retrieves the storage backend from the depot.
///
/// ## Errors
/// Returns an error if the store is not found in the depot.
pub fn get_store_from_depot(depot: &salvo::Depot) -> AppResult<SharedStore> {
    depot
        .obtain::<SharedStore>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Store not found in depot").into())
}
