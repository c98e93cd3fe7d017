//! Test context returned by [`TestBuilder`](crate::TestBuilder).

use std::sync::Arc;

use fred::prelude::{Config, Pool};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tower_sessions::{MemoryStore, Session};

use crate::{error::TestError, fixtures::Fixtures};

/// Test environment: in-memory SQLite database and an in-memory session
///
/// ```ignore
/// let test = TestBuilder::new().with_dashboard_tables().build().await?;
///
/// let agent = test.fixtures().insert_agent("Ana", "Reyes", "admin").await?;
/// SessionAgentId::insert(&test.session, agent.id).await?;
///
/// let state: AppState = test.to_app_state();
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// Session backed by an in-memory store
    pub session: Session,
    /// Real-time store pool that is never connected
    ///
    /// Code paths reaching the real-time store must be tested with
    /// [`RedisTest`](crate::redis::RedisTest) instead.
    pub realtime: Pool,
}

impl TestContext {
    /// Convert the database and the unconnected real-time pool into application state
    ///
    /// This avoids a circular dependency between the test-utils crate and the main crate.
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<(DatabaseConnection, Pool)>,
    {
        T::from((self.db.clone(), self.realtime.clone()))
    }

    /// Same as [`TestContext::to_app_state`] with a connected real-time pool
    pub fn to_app_state_with<T>(&self, realtime: &Pool) -> T
    where
        T: From<(DatabaseConnection, Pool)>,
    {
        T::from((self.db.clone(), realtime.clone()))
    }

    /// Fixture helpers writing into the test database
    pub fn fixtures(&self) -> Fixtures<'_> {
        Fixtures { db: &self.db }
    }

    pub(crate) async fn new() -> Result<Self, TestError> {
        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        let realtime = Pool::new(Config::default(), None, None, None, 1)?;

        Ok(TestContext {
            db,
            session,
            realtime,
        })
    }

    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
