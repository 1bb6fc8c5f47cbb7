use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Handed to every handler. The connection is the only data-access handle the
/// routes see, so tests can swap in an in-memory or mock database.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db: Arc::new(db) }
    }
}
