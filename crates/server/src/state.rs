use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::house::{HouseRepository, HouseService, SeaOrmHouseRepository};

use crate::flash::FlashStore;

/// Shared handler state. Reads go through `houses`, validated writes through
/// `house_service`; both are supplied by the caller.
#[derive(Clone)]
pub struct AppState {
    pub houses: Arc<dyn HouseRepository>,
    pub house_service: Arc<HouseService<dyn HouseRepository>>,
    pub flash: FlashStore,
}

impl AppState {
    pub fn new(
        houses: Arc<dyn HouseRepository>,
        house_service: Arc<HouseService<dyn HouseRepository>>,
        flash: FlashStore,
    ) -> Self {
        Self { houses, house_service, flash }
    }

    /// Wire the SeaORM repository and a service sharing it.
    pub fn from_db(db: DatabaseConnection) -> Self {
        let repo: Arc<dyn HouseRepository> = Arc::new(SeaOrmHouseRepository::new(db));
        let house_service = Arc::new(HouseService::new(Arc::clone(&repo)));
        Self::new(repo, house_service, FlashStore::new())
    }
}
