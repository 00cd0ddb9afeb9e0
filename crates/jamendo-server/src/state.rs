use jamendo_db::sea_orm::DatabaseConnection;

use crate::config::CatalogConfig;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: CatalogConfig,
}
