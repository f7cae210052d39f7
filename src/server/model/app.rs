use sea_orm::DatabaseConnection;

/// State shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Connection pool for the catalog database.
    pub db: DatabaseConnection,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
