use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::arsenal::ArsenalKind;

pub struct ArsenalRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ArsenalRepository<'a, C> {
    /// Creates a new instance of [`ArsenalRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new equipment item with an empty event list
    pub async fn create(
        &self,
        name: &str,
        kind: ArsenalKind,
    ) -> Result<entity::arsenal::Model, DbErr> {
        let item = entity::arsenal::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            kind: ActiveValue::Set(kind.as_str().to_string()),
            date_added: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        item.insert(self.db).await
    }

    pub async fn get_by_id(&self, item_id: i32) -> Result<Option<entity::arsenal::Model>, DbErr> {
        entity::prelude::Arsenal::find_by_id(item_id)
            .one(self.db)
            .await
    }

    /// Gets every equipment item of the provided category
    pub async fn get_by_kind(
        &self,
        kind: ArsenalKind,
    ) -> Result<Vec<entity::arsenal::Model>, DbErr> {
        entity::prelude::Arsenal::find()
            .filter(entity::arsenal::Column::Kind.eq(kind.as_str()))
            .order_by_asc(entity::arsenal::Column::Id)
            .all(self.db)
            .await
    }

    /// Renames an equipment item
    ///
    /// Returns `Ok(None)` if the item does not exist.
    pub async fn rename(
        &self,
        item_id: i32,
        new_name: &str,
    ) -> Result<Option<entity::arsenal::Model>, DbErr> {
        let Some(item) = self.get_by_id(item_id).await? else {
            return Ok(None);
        };

        let mut item_am = item.into_active_model();
        item_am.name = ActiveValue::Set(new_name.to_string());

        let item = item_am.update(self.db).await?;

        Ok(Some(item))
    }

    /// Deletes an equipment item along with its own event list
    ///
    /// Events referencing the item keep their references. Returns OK regardless of the
    /// item existing, check [`DeleteResult::rows_affected`] to confirm the deletion.
    pub async fn delete(&self, item_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::ArsenalEvent::delete_many()
            .filter(entity::arsenal_event::Column::ArsenalId.eq(item_id))
            .exec(self.db)
            .await?;

        entity::prelude::Arsenal::delete_by_id(item_id)
            .exec(self.db)
            .await
    }

    /// Gets the event references of an equipment item in stored order
    pub async fn get_event_refs(&self, item_id: i32) -> Result<Vec<i32>, DbErr> {
        let refs = entity::prelude::ArsenalEvent::find()
            .filter(entity::arsenal_event::Column::ArsenalId.eq(item_id))
            .order_by_asc(entity::arsenal_event::Column::Position)
            .order_by_asc(entity::arsenal_event::Column::Id)
            .all(self.db)
            .await?;

        Ok(refs.into_iter().map(|r| r.event_id).collect())
    }

    /// Appends an event reference to the end of an equipment item's event list
    pub async fn add_event_ref(
        &self,
        item_id: i32,
        event_id: i32,
    ) -> Result<entity::arsenal_event::Model, DbErr> {
        let last = entity::prelude::ArsenalEvent::find()
            .filter(entity::arsenal_event::Column::ArsenalId.eq(item_id))
            .order_by_desc(entity::arsenal_event::Column::Position)
            .one(self.db)
            .await?;

        let position = last.map(|r| r.position + 1).unwrap_or(0);

        entity::arsenal_event::ActiveModel {
            arsenal_id: ActiveValue::Set(item_id),
            event_id: ActiveValue::Set(event_id),
            position: ActiveValue::Set(position),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Removes every occurrence of an event reference from an equipment item's event list
    pub async fn remove_event_ref(&self, item_id: i32, event_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::ArsenalEvent::delete_many()
            .filter(entity::arsenal_event::Column::ArsenalId.eq(item_id))
            .filter(entity::arsenal_event::Column::EventId.eq(event_id))
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod create {
        use mission_control_test_utils::prelude::*;

        use crate::{model::arsenal::ArsenalKind, server::data::arsenal::ArsenalRepository};

        /// Expect the stored type and an empty event list for a new item
        #[tokio::test]
        async fn creates_item_with_empty_event_list() -> Result<(), TestError> {
            let test = TestBuilder::new().with_dashboard_tables().build().await?;

            let arsenal_repo = ArsenalRepository::new(&test.db);
            let item = arsenal_repo.create("Sony A7 III", ArsenalKind::Camera).await?;

            assert_eq!(item.name, "Sony A7 III");
            assert_eq!(item.kind, "camera");
            assert!(arsenal_repo.get_event_refs(item.id).await?.is_empty());

            Ok(())
        }

        /// Expect Error when required database tables are not present
        #[tokio::test]
        async fn fails_when_tables_missing() -> Result<(), TestError> {
            let test = TestBuilder::new().build().await?;

            let arsenal_repo = ArsenalRepository::new(&test.db);
            let result = arsenal_repo.create("Sony A7 III", ArsenalKind::Camera).await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod get_by_kind {
        use mission_control_test_utils::prelude::*;

        use crate::{model::arsenal::ArsenalKind, server::data::arsenal::ArsenalRepository};

        /// Expect only items of the requested category
        #[tokio::test]
        async fn filters_by_category() -> Result<(), TestError> {
            let test = TestBuilder::new().with_dashboard_tables().build().await?;
            let camera = test.fixtures().insert_arsenal("Canon R6", "camera").await?;
            test.fixtures().insert_arsenal("ThinkPad", "laptop").await?;
            test.fixtures().insert_arsenal("DNP DS620", "printer").await?;

            let arsenal_repo = ArsenalRepository::new(&test.db);
            let cameras = arsenal_repo.get_by_kind(ArsenalKind::Camera).await?;

            assert_eq!(cameras.len(), 1);
            assert_eq!(cameras[0].id, camera.id);

            Ok(())
        }

        /// Expect an empty list for a category without items
        #[tokio::test]
        async fn returns_empty_for_unused_category() -> Result<(), TestError> {
            let test = TestBuilder::new().with_dashboard_tables().build().await?;
            test.fixtures().insert_arsenal("Canon R6", "camera").await?;

            let arsenal_repo = ArsenalRepository::new(&test.db);
            let printers = arsenal_repo.get_by_kind(ArsenalKind::Printer).await?;

            assert!(printers.is_empty());

            Ok(())
        }
    }

    mod rename {
        use mission_control_test_utils::prelude::*;

        use crate::server::data::arsenal::ArsenalRepository;

        /// Expect the new name to be stored and the type unchanged
        #[tokio::test]
        async fn renames_existing_item() -> Result<(), TestError> {
            let test = TestBuilder::new().with_dashboard_tables().build().await?;
            let item = test.fixtures().insert_arsenal("Canon R6", "camera").await?;

            let arsenal_repo = ArsenalRepository::new(&test.db);
            let result = arsenal_repo.rename(item.id, "Canon R6 II").await?;

            let renamed = result.expect("item should exist");
            assert_eq!(renamed.name, "Canon R6 II");
            assert_eq!(renamed.kind, "camera");

            Ok(())
        }

        /// Expect Ok(None) when the item does not exist
        #[tokio::test]
        async fn returns_none_for_nonexistent_item() -> Result<(), TestError> {
            let test = TestBuilder::new().with_dashboard_tables().build().await?;

            let arsenal_repo = ArsenalRepository::new(&test.db);
            let result = arsenal_repo.rename(1, "Canon R6 II").await;

            assert!(matches!(result, Ok(None)));

            Ok(())
        }
    }

    mod delete {
        use mission_control_test_utils::prelude::*;

        use crate::server::data::arsenal::ArsenalRepository;

        /// Expect the item removed while events referencing it keep their reference
        #[tokio::test]
        async fn deletes_item_without_touching_event_refs() -> Result<(), TestError> {
            let test = TestBuilder::new().with_dashboard_tables().build().await?;
            let item = test.fixtures().insert_arsenal("Canon R6", "camera").await?;
            let event = test.fixtures().insert_event("Wedding", "2026-10-16", false).await?;
            test.fixtures().assign_arsenal(event.id, &[item.id]).await?;
            test.fixtures().link_events(item.id, &[event.id]).await?;

            let arsenal_repo = ArsenalRepository::new(&test.db);
            let result = arsenal_repo.delete(item.id).await?;

            assert_eq!(result.rows_affected, 1);
            assert!(arsenal_repo.get_by_id(item.id).await?.is_none());
            assert!(arsenal_repo.get_event_refs(item.id).await?.is_empty());
            let dangling = test.fixtures().event_arsenal_refs(event.id).await?;
            assert_eq!(dangling, vec![item.id]);

            Ok(())
        }

        /// Expect no rows to be affected when deleting an item that does not exist
        #[tokio::test]
        async fn returns_no_rows_for_nonexistent_item() -> Result<(), TestError> {
            let test = TestBuilder::new().with_dashboard_tables().build().await?;

            let arsenal_repo = ArsenalRepository::new(&test.db);
            let result = arsenal_repo.delete(1).await?;

            assert_eq!(result.rows_affected, 0);

            Ok(())
        }
    }

    mod event_refs {
        use mission_control_test_utils::prelude::*;

        use crate::server::data::arsenal::ArsenalRepository;

        /// Expect appended references in insertion order, duplicates preserved
        #[tokio::test]
        async fn appends_in_order() -> Result<(), TestError> {
            let test = TestBuilder::new().with_dashboard_tables().build().await?;
            let item = test.fixtures().insert_arsenal("Canon R6", "camera").await?;

            let arsenal_repo = ArsenalRepository::new(&test.db);
            arsenal_repo.add_event_ref(item.id, 3).await?;
            arsenal_repo.add_event_ref(item.id, 1).await?;
            arsenal_repo.add_event_ref(item.id, 3).await?;

            assert_eq!(arsenal_repo.get_event_refs(item.id).await?, vec![3, 1, 3]);

            Ok(())
        }

        /// Expect every occurrence of the event removed and the rest kept in order
        #[tokio::test]
        async fn removes_all_occurrences() -> Result<(), TestError> {
            let test = TestBuilder::new().with_dashboard_tables().build().await?;
            let item = test.fixtures().insert_arsenal("Canon R6", "camera").await?;
            test.fixtures().link_events(item.id, &[3, 1, 3, 2]).await?;

            let arsenal_repo = ArsenalRepository::new(&test.db);
            let result = arsenal_repo.remove_event_ref(item.id, 3).await?;
            arsenal_repo.add_event_ref(item.id, 5).await?;

            assert_eq!(result.rows_affected, 2);
            assert_eq!(arsenal_repo.get_event_refs(item.id).await?, vec![1, 2, 5]);

            Ok(())
        }
    }
}
