//! Declarative test setup.
//!
//! Configuration methods only queue work; tables and fixtures are created in order
//! when [`TestBuilder::build`] runs.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_dashboard_tables: bool,

    // (first_name, last_name, role)
    agents: Vec<(String, String, String)>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a builder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_dashboard_tables: false,
            agents: Vec::new(),
        }
    }

    /// Add every table used by the dashboard: agents, events, arsenal and the three
    /// reference tables.
    pub fn with_dashboard_tables(mut self) -> Self {
        self.include_dashboard_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// ```no_run
    /// use mission_control_test_utils::TestBuilder;
    ///
    /// # async fn example() -> Result<(), mission_control_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(entity::prelude::Agent)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert an agent during `build()`.
    ///
    /// Agents are inserted in call order, so the first queued agent gets ID 1.
    pub fn with_agent(mut self, first_name: &str, last_name: &str, role: &str) -> Self {
        self.agents.push((
            first_name.to_string(),
            last_name.to_string(),
            role.to_string(),
        ));
        self
    }

    /// Create the configured tables and insert queued fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Ready test context
    /// - `Err(TestError::DbErr)` - Table creation or a fixture insert failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_dashboard_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Agent),
                schema.create_table_from_entity(entity::prelude::Event),
                schema.create_table_from_entity(entity::prelude::Arsenal),
                schema.create_table_from_entity(entity::prelude::EventAgent),
                schema.create_table_from_entity(entity::prelude::EventArsenal),
                schema.create_table_from_entity(entity::prelude::ArsenalEvent),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        for (first_name, last_name, role) in self.agents {
            setup
                .fixtures()
                .insert_agent(&first_name, &last_name, &role)
                .await?;
        }

        Ok(setup)
    }
}
