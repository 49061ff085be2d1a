//! Application state containing the product service and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::ProductRepository;
use crate::infrastructure::SeaOrmProductRepository;
use crate::services::ProductService;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    pub products: ProductService,
}

impl AppState {
    /// Wire the SeaORM repository into the service
    pub fn new(db: DatabaseConnection) -> Self {
        let repo: Arc<dyn ProductRepository> = Arc::new(SeaOrmProductRepository::new(db.clone()));

        Self {
            db,
            products: ProductService::new(repo),
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}
