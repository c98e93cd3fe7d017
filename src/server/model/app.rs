use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Valkey pool backing the real-time chat store
    pub realtime: fred::prelude::Pool,
}

impl From<(DatabaseConnection, fred::prelude::Pool)> for AppState {
    fn from((db, realtime): (DatabaseConnection, fred::prelude::Pool)) -> Self {
        Self { db, realtime }
    }
}
